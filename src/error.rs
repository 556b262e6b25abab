use thiserror::Error;

/// A transcript timestamp field that does not follow the export format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum FormatError {
    #[error("Invalid date \"{input}\" (expected DD.MM.YYYY)")]
    Date { input: String },

    #[error("Invalid time \"{input}\" (expected HH:MM)")]
    Time { input: String },

    #[error("Invalid timestamp \"{input}\" (expected DD.MM.YYYY, HH:MM)")]
    Timestamp { input: String },
}

impl FormatError {
    /// The offending field, verbatim
    pub(crate) fn input(&self) -> &str {
        match self {
            FormatError::Date { input }
            | FormatError::Time { input }
            | FormatError::Timestamp { input } => input,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Format {
        path: String,
        #[source]
        source: FormatError,
    },

    #[error("Unknown user \"{name}\" in {path}")]
    UnknownUser { name: String, path: String },

    #[error("No transcript files found in {path}")]
    NoInput { path: String },

    #[error("Invalid path pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

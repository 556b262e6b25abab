//! Transcript source abstraction layer
//!
//! The core only sees raw text; each source knows how to fetch it.

pub(crate) mod loader;

use std::io::{self, Read};
use std::path::PathBuf;

/// A place a transcript can be read from
pub(crate) trait Source: Send + Sync {
    /// Name shown in output and error messages
    fn display_name(&self) -> String;

    /// Read the whole transcript as text
    fn read_text(&self) -> io::Result<String>;
}

/// Box type for dynamic dispatch
pub(crate) type BoxedSource = Box<dyn Source>;

/// An exported transcript file on disk
pub(crate) struct FileSource {
    pub(crate) path: PathBuf,
}

impl Source for FileSource {
    fn display_name(&self) -> String {
        self.path.display().to_string()
    }

    fn read_text(&self) -> io::Result<String> {
        let bytes = std::fs::read(&self.path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// A transcript piped on standard input
pub(crate) struct StdinSource;

impl Source for StdinSource {
    fn display_name(&self) -> String {
        "<stdin>".to_string()
    }

    fn read_text(&self) -> io::Result<String> {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

pub(crate) use loader::{Report, discover_sources, load_reports};

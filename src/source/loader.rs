//! Transcript discovery and parallel analysis

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::{Aggregator, ChatStatistics, TimestampPolicy, parse};
use crate::error::AppError;
use crate::source::{BoxedSource, FileSource, Source, StdinSource};
use crate::utils::debug_enabled;

const STDIN_PATH: &str = "-";

/// Statistics for one source plus load bookkeeping
#[derive(Debug)]
pub(crate) struct Report {
    pub(crate) name: String,
    /// Lines in the raw transcript
    pub(crate) lines: usize,
    pub(crate) stats: ChatStatistics,
    /// Parse + aggregate time in milliseconds (excluding I/O)
    pub(crate) elapsed_ms: f64,
}

impl Report {
    /// Lines that did not match the transcript grammar
    pub(crate) fn dropped_lines(&self) -> usize {
        let parsed = self.stats.total_messages + self.stats.skipped_messages;
        self.lines.saturating_sub(parsed as usize)
    }
}

/// Find exported transcripts below a directory
fn find_transcripts(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let pattern = format!("{}/**/*.txt", dir.display());
    let mut files: Vec<PathBuf> = glob::glob(&pattern)?.flatten().collect();
    files.sort();
    Ok(files)
}

/// Resolve CLI paths into sources; no paths means stdin
pub(crate) fn discover_sources(paths: &[String]) -> Result<Vec<BoxedSource>, AppError> {
    if paths.is_empty() {
        return Ok(vec![Box::new(StdinSource)]);
    }

    let mut sources: Vec<BoxedSource> = Vec::new();
    for raw in paths {
        if raw == STDIN_PATH {
            sources.push(Box::new(StdinSource));
            continue;
        }
        let path = PathBuf::from(raw);
        if path.is_dir() {
            let files = find_transcripts(&path)?;
            if files.is_empty() {
                return Err(AppError::NoInput { path: raw.clone() });
            }
            sources.extend(
                files
                    .into_iter()
                    .map(|path| Box::new(FileSource { path }) as BoxedSource),
            );
        } else {
            sources.push(Box::new(FileSource { path }));
        }
    }
    Ok(sources)
}

/// Parse and aggregate one transcript text
pub(crate) fn analyze_text(
    name: String,
    raw: &str,
    policy: TimestampPolicy,
) -> Result<Report, AppError> {
    let start = Instant::now();
    let lines = raw.lines().count();
    let messages = parse(raw);
    if debug_enabled() {
        eprintln!(
            "[DEBUG] {}: {} messages from {} lines",
            name,
            messages.len(),
            lines
        );
    }
    let stats = Aggregator::new()
        .timestamp_policy(policy)
        .run(messages)
        .map_err(|source| AppError::Format {
            path: name.clone(),
            source,
        })?;
    Ok(Report {
        name,
        lines,
        stats,
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}

fn load_one(source: &dyn Source, policy: TimestampPolicy) -> Result<Report, AppError> {
    let name = source.display_name();
    let raw = source.read_text().map_err(|e| AppError::Io {
        path: name.clone(),
        source: e,
    })?;
    analyze_text(name, &raw, policy)
}

/// Analyze every source independently in parallel, keeping input order
pub(crate) fn load_reports(
    sources: &[BoxedSource],
    policy: TimestampPolicy,
    quiet: bool,
) -> Result<Vec<Report>, AppError> {
    let start = Instant::now();
    let reports = sources
        .par_iter()
        .map(|source| load_one(source.as_ref(), policy))
        .collect::<Result<Vec<_>, _>>()?;

    if !quiet {
        eprintln!(
            "Analyzed {} transcript{} ({:.2}ms)",
            reports.len(),
            if reports.len() == 1 { "" } else { "s" },
            start.elapsed().as_secs_f64() * 1000.0
        );
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CHAT: &str = "01.01.2024, 09:00 - Alice: hi\n\
                        a wrapped continuation\n\
                        01.01.2024, 09:01 - Bob: hey\n";

    #[test]
    fn analyze_text_counts_lines_and_dropped() {
        let report = analyze_text("chat".to_string(), CHAT, TimestampPolicy::Strict).unwrap();
        assert_eq!(report.lines, 3);
        assert_eq!(report.stats.total_messages, 2);
        assert_eq!(report.dropped_lines(), 1);
    }

    #[test]
    fn analyze_text_reports_format_error_with_name() {
        let err = analyze_text(
            "bad.txt".to_string(),
            "2024/01/01, 09:00 - A: x",
            TimestampPolicy::Strict,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Format { ref path, .. } if path == "bad.txt"));
    }

    #[test]
    fn analyze_text_skip_policy_keeps_skipped_out_of_dropped() {
        let raw = "2024/01/01, 09:00 - A: x\n01.01.2024, 09:00 - B: y";
        let report = analyze_text("chat".to_string(), raw, TimestampPolicy::Skip).unwrap();
        assert_eq!(report.stats.skipped_messages, 1);
        assert_eq!(report.dropped_lines(), 0);
    }

    #[test]
    fn discover_no_paths_is_stdin() {
        let sources = discover_sources(&[]).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].display_name(), "<stdin>");
    }

    #[test]
    fn discover_directory_finds_txt_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), CHAT).unwrap();
        fs::write(dir.path().join("a.txt"), CHAT).unwrap();
        fs::write(dir.path().join("notes.md"), "x").unwrap();
        let sources = discover_sources(&[dir.path().display().to_string()]).unwrap();
        let names: Vec<String> = sources.iter().map(|s| s.display_name()).collect();
        assert_eq!(names.len(), 2);
        assert!(names[0].ends_with("a.txt"));
        assert!(names[1].ends_with("b.txt"));
    }

    #[test]
    fn discover_empty_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_sources(&[dir.path().display().to_string()])
            .err()
            .expect("empty directory should fail");
        assert!(matches!(err, AppError::NoInput { .. }));
    }

    #[test]
    fn load_reports_reads_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("one.txt");
        let second = dir.path().join("two.txt");
        fs::write(&first, CHAT).unwrap();
        fs::write(&second, "01.01.2024, 09:00 - Carol: solo").unwrap();
        let sources: Vec<BoxedSource> = vec![
            Box::new(FileSource { path: first }),
            Box::new(FileSource { path: second }),
        ];
        let reports = load_reports(&sources, TimestampPolicy::Strict, true).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].stats.total_users, 2);
        assert_eq!(reports[1].stats.total_users, 1);
    }

    #[test]
    fn load_reports_missing_file_is_io_error() {
        let sources: Vec<BoxedSource> = vec![Box::new(FileSource {
            path: PathBuf::from("/definitely/not/here.txt"),
        })];
        let err = load_reports(&sources, TimestampPolicy::Strict, true).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}

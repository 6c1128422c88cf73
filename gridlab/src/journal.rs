//! CSV experiment log.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::debug;

use crate::experiment::RunRecord;

pub const HEADER: &str = "Timestamp,Algorithm,Time(ms),Nodes Explored,Path Cost,Optimal?";

/// Appends [`RunRecord`]s to a CSV file.
///
/// The header is written only when the file does not exist yet. Missing
/// parent directories are created on first write.
#[derive(Debug, Clone)]
pub struct ExperimentLog {
    path: PathBuf,
}

impl ExperimentLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `record`, stamped with the current time.
    pub fn append(&self, record: &RunRecord) -> io::Result<()> {
        self.append_at(record, SystemTime::now())
    }

    /// Append `record` with an explicit timestamp.
    pub fn append_at(&self, record: &RunRecord, at: SystemTime) -> io::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let is_new = !self.path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if is_new {
            writeln!(file, "{HEADER}")?;
        }
        writeln!(file, "{}", row(record, at))?;
        debug!("appended {} to {}", record.algorithm.short_name(), self.path.display());
        Ok(())
    }
}

fn row(record: &RunRecord, at: SystemTime) -> String {
    format!(
        "{},{},{:.4},{},{},{}",
        humantime::format_rfc3339_seconds(at),
        field(record.algorithm.name()),
        record.time_ms,
        record.nodes_explored,
        record.cost,
        if record.optimal { "Yes" } else { "No" }
    )
}

/// Quote a CSV field if it needs it.
fn field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_paths::Algorithm;
    use std::time::{Duration, UNIX_EPOCH};

    fn record(algorithm: Algorithm) -> RunRecord {
        RunRecord {
            algorithm,
            time_ms: 2.5,
            nodes_explored: 42,
            cost: 8,
            found: true,
            optimal: algorithm.is_optimal(),
            path: None,
        }
    }

    #[test]
    fn header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let log = ExperimentLog::new(dir.path().join("results").join("log.csv"));
        let at = UNIX_EPOCH + Duration::from_secs(1_700_000_000);

        log.append_at(&record(Algorithm::AStar), at).unwrap();
        log.append_at(&record(Algorithm::Dfs), at).unwrap();

        let text = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert_eq!(
            lines[1],
            "2023-11-14T22:13:20Z,A* Search (Manhattan),2.5000,42,8,Yes"
        );
        assert!(lines[2].starts_with("2023-11-14T22:13:20Z,DFS (Depth-First),"));
        assert!(lines[2].ends_with(",No"));
    }

    #[test]
    fn existing_file_gets_no_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        fs::write(&path, "earlier\n").unwrap();

        ExperimentLog::new(&path).append(&record(Algorithm::Bfs)).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("earlier\n"));
        assert!(!text.contains("Timestamp"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn quotes_fields_with_commas() {
        assert_eq!(field("plain"), "plain");
        assert_eq!(field("a,b"), "\"a,b\"");
        assert_eq!(field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}

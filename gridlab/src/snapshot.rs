//! Text snapshots of finished runs and the comparison chart.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use gridsearch_paths::Algorithm;
use log::debug;

use crate::render::{Overlay, render_plain};
use crate::scenario::Scenario;

pub const CHART_FILE: &str = "comparison_chart.txt";

/// Directory that receives one grid snapshot per run and the chart.
///
/// Snapshots are named `<key>_<YYYYmmdd_HHMMSS>.txt`, so a rerun of the same
/// strategy within one second replaces the earlier file.
#[derive(Debug, Clone)]
pub struct ResultsDir {
    dir: PathBuf,
}

impl ResultsDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Write the grid with its overlay as plain text.
    pub fn save_grid(
        &self,
        algorithm: Algorithm,
        scenario: &Scenario,
        overlay: &Overlay,
        at: SystemTime,
    ) -> io::Result<PathBuf> {
        let name = format!("{}_{}.txt", algorithm.key(), file_stamp(at));
        self.write(&name, &render_plain(scenario, overlay))
    }

    /// Write a rendered chart to [`CHART_FILE`].
    pub fn save_chart(&self, chart: &str) -> io::Result<PathBuf> {
        self.write(CHART_FILE, chart)
    }

    fn write(&self, name: &str, contents: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        fs::write(&path, contents)?;
        debug!("saved {}", path.display());
        Ok(path)
    }
}

/// UTC timestamp usable in a file name on every platform.
fn file_stamp(at: SystemTime) -> String {
    humantime::format_rfc3339_seconds(at)
        .to_string()
        .chars()
        .filter_map(|c| match c {
            '-' | ':' | 'Z' => None,
            'T' => Some('_'),
            c => Some(c),
        })
        .collect()
}

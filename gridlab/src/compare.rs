//! Side-by-side comparison of runs.

use std::fmt::Write;

use gridsearch_paths::Algorithm;

use crate::experiment::RunRecord;

const BAR: char = '\u{2588}';

/// Latest [`RunRecord`] per algorithm, in first-run order.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    records: Vec<RunRecord>,
}

impl Comparison {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `record`, replacing an earlier run of the same algorithm in place.
    pub fn record(&mut self, record: RunRecord) {
        match self
            .records
            .iter_mut()
            .find(|r| r.algorithm == record.algorithm)
        {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&RunRecord> {
        self.records.iter().find(|r| r.algorithm == algorithm)
    }

    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Two bar charts, execution time then nodes explored, with bars at
    /// most `width` cells long.
    pub fn chart(&self, width: usize) -> String {
        if self.records.is_empty() {
            return String::from("No runs to compare.\n");
        }
        let times: Vec<f64> = self.records.iter().map(|r| r.time_ms).collect();
        let nodes: Vec<f64> = self
            .records
            .iter()
            .map(|r| r.nodes_explored as f64)
            .collect();

        let mut out = String::new();
        self.panel(&mut out, "Execution Time (ms)", &times, width, |v| {
            format!("{v:.4}")
        });
        out.push('\n');
        self.panel(&mut out, "Nodes Explored", &nodes, width, |v| {
            format!("{v:.0}")
        });
        out
    }

    fn panel(
        &self,
        out: &mut String,
        title: &str,
        values: &[f64],
        width: usize,
        label: impl Fn(f64) -> String,
    ) {
        let name_w = self
            .records
            .iter()
            .map(|r| r.algorithm.short_name().len())
            .max()
            .unwrap_or(0);
        let max = values.iter().copied().fold(0.0, f64::max);

        let _ = writeln!(out, "{title}");
        for (r, &v) in self.records.iter().zip(values) {
            let n = bar_len(v, max, width);
            let _ = writeln!(
                out,
                "{:<name_w$} |{} {}",
                r.algorithm.short_name(),
                BAR.to_string().repeat(n),
                label(v)
            );
        }
    }
}

/// Bar length for `v` on a scale where `max` fills `width`. Non-zero values
/// always get at least one cell.
fn bar_len(v: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || v <= 0.0 {
        return 0;
    }
    let n = (v / max * width as f64).round() as usize;
    n.clamp(1, width.max(1))
}

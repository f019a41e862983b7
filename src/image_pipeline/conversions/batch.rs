use std::path::{Path, PathBuf};

use crate::image_pipeline::common::error::ConversionError;

/// Outcome of converting every matching file in a directory.
#[derive(Debug, Default)]
pub struct BatchReport {
    converted: Vec<PathBuf>,
    failures: Vec<(PathBuf, ConversionError)>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, output: PathBuf) {
        self.converted.push(output);
    }

    pub fn record_failure(&mut self, input: PathBuf, error: ConversionError) {
        self.failures.push((input, error));
    }

    /// Output files written, in conversion order.
    pub fn converted(&self) -> &[PathBuf] {
        &self.converted
    }

    /// Input files that failed, with the reason.
    pub fn failures(&self) -> &[(PathBuf, ConversionError)] {
        &self.failures
    }

    pub fn first_failure(&self) -> Option<(&Path, &ConversionError)> {
        self.failures.first().map(|(path, err)| (path.as_path(), err))
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.converted.len() + self.failures.len()
    }
}

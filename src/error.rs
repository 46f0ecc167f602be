use std::path::PathBuf;

use thiserror::Error;

/// Failures while building a [`crate::Dataset`]. Loading is all-or-nothing.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("unable to read dataset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to read dataset: {0}")]
    Read(#[source] std::io::Error),

    #[error("malformed item {token:?} on line {line}")]
    MalformedItem { line: usize, token: String },
}

#[derive(Error, Debug)]
pub enum MinerError {
    #[error("invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("minimum frequency {0} is outside [0, 1]")]
    ThresholdRange(f64),
}

/// Rejects thresholds that would make the search meaningless.
pub fn check_min_frequency(min_frequency: f64) -> Result<f64, MinerError> {
    if (0.0..=1.0).contains(&min_frequency) {
        Ok(min_frequency)
    } else {
        Err(MinerError::ThresholdRange(min_frequency))
    }
}

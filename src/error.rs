use thiserror::Error;

/// Everything that can go wrong while building or training a perceptron.
#[derive(Debug, Error)]
pub enum PerceptronError {
    #[error("dataset has no samples")]
    EmptyDataset,

    #[error("dataset has {samples} samples but {labels} labels")]
    LabelCountMismatch { samples: usize, labels: usize },

    /// A sample's length differs from the weight vector's.
    #[error("sample {index} has {found} components, expected {expected}")]
    DimensionMismatch {
        expected: usize,
        found: usize,
        index: usize,
    },

    #[error("label {label} at index {index} is neither +1 nor -1")]
    InvalidLabel { index: usize, label: f64 },

    #[error("sample index {index} is out of range for a dataset of {len}")]
    SampleOutOfRange { index: usize, len: usize },

    /// Only reachable when `TrainConfig::max_passes` is set.
    #[error("no clean pass after {passes} passes")]
    NotConverged { passes: usize },

    #[error("failed to write progress: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;

use serde::{Deserialize, Serialize};

use crate::error::{PerceptronError, Result};

/// One training example: input vector (bias component first) and its ±1 label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub input: Vec<f64>,
    pub label: f64,
}

/// An immutable, ordered set of training samples sharing one dimension.
///
/// Construction checks every invariant the trainer relies on, so once a
/// `Dataset` exists its samples and labels line up, every input has the same
/// length, and every label is exactly `+1.0` or `-1.0`. Serialized as a
/// plain list of samples; deserializing goes through `from_samples`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Sample>", into = "Vec<Sample>")]
pub struct Dataset {
    samples: Vec<Sample>,
    dim: usize,
}

impl Dataset {
    /// Builds a dataset from parallel input and label slices.
    pub fn new(inputs: &[Vec<f64>], labels: &[f64]) -> Result<Dataset> {
        if inputs.len() != labels.len() {
            return Err(PerceptronError::LabelCountMismatch {
                samples: inputs.len(),
                labels: labels.len(),
            });
        }
        let samples = inputs
            .iter()
            .zip(labels.iter())
            .map(|(input, &label)| Sample { input: input.clone(), label })
            .collect();
        Dataset::from_samples(samples)
    }

    pub fn from_samples(samples: Vec<Sample>) -> Result<Dataset> {
        let dim = match samples.first() {
            Some(first) => first.input.len(),
            None => return Err(PerceptronError::EmptyDataset),
        };

        for (index, sample) in samples.iter().enumerate() {
            if sample.input.len() != dim {
                return Err(PerceptronError::DimensionMismatch {
                    expected: dim,
                    found: sample.input.len(),
                    index,
                });
            }
            if sample.label != 1.0 && sample.label != -1.0 {
                return Err(PerceptronError::InvalidLabel { index, label: sample.label });
            }
        }

        Ok(Dataset { samples, dim })
    }

    /// The four-sample demo set: bias input first, then two features.
    /// Only the last sample is labelled negative.
    pub fn builtin() -> Dataset {
        let samples = vec![
            Sample { input: vec![0.1, -0.1, -1.0], label: 1.0 },
            Sample { input: vec![1.0, -1.0, 1.0], label: 1.0 },
            Sample { input: vec![1.0, 1.0, -1.0], label: 1.0 },
            Sample { input: vec![1.0, 1.0, 1.0], label: -1.0 },
        ];
        Dataset { samples, dim: 3 }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the dataset holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length of every input vector, bias component included.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}

impl TryFrom<Vec<Sample>> for Dataset {
    type Error = PerceptronError;

    fn try_from(samples: Vec<Sample>) -> Result<Dataset> {
        Dataset::from_samples(samples)
    }
}

impl From<Dataset> for Vec<Sample> {
    fn from(dataset: Dataset) -> Vec<Sample> {
        dataset.samples
    }
}

use serde::{Deserialize, Serialize};

use crate::{activation::sign::sign, data::dataset::Dataset, math::vector::dot};

/// Output of a perceptron with `weights` for `sample`: the sign of the
/// weighted sum, `+1.0` when it is zero or positive, `-1.0` otherwise.
pub fn compute_output(weights: &[f64], sample: &[f64]) -> f64 {
    sign(dot(weights, sample))
}

/// A single linear threshold unit. `weights[0]` is the bias weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perceptron {
    pub weights: Vec<f64>,
}

impl Perceptron {
    pub fn new(weights: Vec<f64>) -> Perceptron {
        Perceptron { weights }
    }

    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    /// Forward pass for one input vector.
    pub fn predict(&self, input: &[f64]) -> f64 {
        compute_output(&self.weights, input)
    }

    /// Perceptron rule: `w[j] += label * learning_rate * input[j]` for every `j`.
    pub fn apply_update(&mut self, input: &[f64], label: f64, learning_rate: f64) {
        for (w, x) in self.weights.iter_mut().zip(input.iter()) {
            *w += label * learning_rate * x;
        }
    }

    /// True when every sample in `dataset` is predicted with its own label.
    pub fn classifies_all(&self, dataset: &Dataset) -> bool {
        dataset.iter().all(|s| self.predict(&s.input) == s.label)
    }
}

use serde::{Deserialize, Serialize};

/// One misclassification and the weight change it caused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecord {
    /// 1-based pass number; `0` for a `Trainer::visit` outside any pass.
    pub pass: usize,
    /// Index of the misclassified sample in the dataset.
    pub index: usize,
    pub before: Vec<f64>,
    pub after: Vec<f64>,
}

/// Statistics for a single full pass over the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassStats {
    /// 1-based pass number.
    pub pass: usize,
    /// Order in which sample indices were visited.
    pub order: Vec<usize>,
    /// Number of samples that triggered an update.
    pub mistakes: usize,
}

impl PassStats {
    pub fn is_clean(&self) -> bool {
        self.mistakes == 0
    }
}

/// Summary of a completed `Trainer::train` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    pub initial_weights: Vec<f64>,
    pub final_weights: Vec<f64>,
    pub passes: Vec<PassStats>,
    pub updates: Vec<UpdateRecord>,
}

impl TrainReport {
    pub fn total_passes(&self) -> usize {
        self.passes.len()
    }

    pub fn total_updates(&self) -> usize {
        self.updates.len()
    }
}

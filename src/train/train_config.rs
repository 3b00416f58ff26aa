use serde::{Deserialize, Serialize};

/// Learning rate of the demo run.
pub const LEARNING_RATE: f64 = 0.1;

/// Seed of the demo run's shuffle generator.
pub const SEED: u64 = 7;

/// Configuration for a `Trainer` run.
///
/// # Fields
/// - `learning_rate`: step size of every perceptron update
/// - `seed`:          seed for the trainer's own `StdRng`; the same seed
///                     always produces the same visiting order
/// - `max_passes`:    optional bound on full passes; `None` trains until a
///                     clean pass, which never happens on non-separable data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub seed: u64,
    pub max_passes: Option<usize>,
}

impl TrainConfig {
    /// Creates an unbounded `TrainConfig`.
    pub fn new(learning_rate: f64, seed: u64) -> Self {
        TrainConfig {
            learning_rate,
            seed,
            max_passes: None,
        }
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(LEARNING_RATE, SEED)
    }
}

pub mod math;
pub mod activation;
pub mod network;
pub mod data;
pub mod train;
pub mod display;
pub mod error;

// Convenience re-exports
pub use activation::sign::sign;
pub use data::dataset::{Dataset, Sample};
pub use display::show::{format_weights, show_learning};
pub use error::{PerceptronError, Result};
pub use network::perceptron::{compute_output, Perceptron};
pub use train::pass_stats::{PassStats, TrainReport, UpdateRecord};
pub use train::train_config::TrainConfig;
pub use train::trainer::{TrainState, Trainer};

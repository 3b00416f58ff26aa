pub mod trainer;
pub mod pass_stats;
pub mod train_config;

pub use trainer::{TrainState, Trainer};
pub use pass_stats::{PassStats, TrainReport, UpdateRecord};
pub use train_config::TrainConfig;

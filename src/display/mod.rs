pub mod show;

pub use show::{format_weights, show_learning};

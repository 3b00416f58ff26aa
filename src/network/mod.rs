pub mod perceptron;

pub use perceptron::{compute_output, Perceptron};

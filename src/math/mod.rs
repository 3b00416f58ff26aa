pub mod vector;

pub use vector::dot;

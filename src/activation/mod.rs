pub mod sign;

pub use sign::sign;

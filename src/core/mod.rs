pub mod comparison;
pub mod error;
pub mod frame_processor;
pub mod parameter;
pub mod test_vectors;
pub mod units;

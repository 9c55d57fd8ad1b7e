pub mod constants;
pub mod members;
pub mod tracing;

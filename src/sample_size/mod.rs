//----------------------------------------
// sample_size mod
//----------------------------------------
pub mod error;
pub mod solve;
pub mod types;

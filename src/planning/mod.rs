//----------------------------------------
// planning mod
//----------------------------------------
pub mod plan;
pub mod types;

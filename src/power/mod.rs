//----------------------------------------
// power mod
//----------------------------------------
pub mod power_fcn;
pub mod types;

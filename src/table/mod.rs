//----------------------------------------
// table mod
//----------------------------------------
pub mod generate_table;
pub mod types;

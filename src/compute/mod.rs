//----------------------------------------
// compute mod
//----------------------------------------
pub mod types;

pub use crate::distribution::central_t::central_t_quantile;
pub use crate::distribution::noncentral_t::noncentral_t_cdf;
pub use crate::planning::plan::{plan, plan_from_config};
pub use crate::power::power_fcn::{power, power_with};
pub use crate::sample_size::solve::{solve, solve_within};
pub use crate::table::generate_table::{
    default_alphas, default_effect_sizes, generate_table, generate_table_with,
};

//----------------------------------------
// planning mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

use crate::power::types::DesignType;

/// Inputs of a planning call. Defaults follow common QoE practice: MOS
/// ratings with a standard deviation of 0.8, a one-point difference to
/// detect and 100 planned comparisons.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanConfig {
    /// Expected standard deviation of the ratings
    pub stdev: f64,
    /// Smallest MOS difference the study should detect
    pub mos_diff: f64,
    #[serde(alias = "comparisons")]
    pub num_comparisons: usize,
    /// Target power
    pub power: f64,
    /// Significance level before the Bonferroni correction
    #[serde(alias = "alpha")]
    pub base_alpha: f64,
    pub test_type: DesignType,
}

impl Default for PlanConfig {
    fn default() -> PlanConfig {
        PlanConfig {
            stdev: 0.8,
            mos_diff: 1.0,
            num_comparisons: 100,
            power: 0.8,
            base_alpha: 0.05,
            test_type: DesignType::Paired,
        }
    }
}

/// Result of a planning call. Field names are the keys of the JSON output.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct StudyPlan {
    /// Required subjects (per group for the independent design)
    pub n_subjects: usize,
    pub effect_size: f64,
    /// base_alpha / num_comparisons
    pub adjusted_alpha: f64,
    pub base_alpha: f64,
    pub stdev: f64,
    pub mos_diff: f64,
    pub num_comparisons: usize,
    /// Target power the plan was solved for
    pub power: f64,
    pub test_type: DesignType,
}

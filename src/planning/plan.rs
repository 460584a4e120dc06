use tracing::info;

use crate::error::NumSubjErr;
use crate::planning::types::{PlanConfig, StudyPlan};
use crate::power::types::DesignType;
use crate::sample_size::solve::solve;
use crate::validation::error::ParameterErr;
use crate::validation::{check_comparisons, check_open_unit, check_stdev};

/// Number of subjects needed to detect a MOS difference of `mos_diff` with
/// `target_power`, when each of `num_comparisons` tests runs at the
/// Bonferroni-corrected level `base_alpha / num_comparisons`
pub fn plan(
    stdev: f64,
    mos_diff: f64,
    num_comparisons: usize,
    target_power: f64,
    base_alpha: f64,
    design: DesignType,
) -> Result<StudyPlan, NumSubjErr> {
    check_stdev(stdev)?;
    if !mos_diff.is_finite() {
        return Err(ParameterErr::NonFiniteMosDiff(mos_diff).into());
    }
    check_comparisons(num_comparisons)?;
    check_open_unit("target power", target_power)?;
    check_open_unit("base alpha", base_alpha)?;

    let effect_size = mos_diff / stdev;
    let adjusted_alpha = check_open_unit("adjusted alpha", base_alpha / num_comparisons as f64)?;

    let n_subjects = solve(effect_size, adjusted_alpha, target_power, design)?;
    info!(
        n_subjects,
        effect_size,
        adjusted_alpha,
        %design,
        "planned study"
    );

    Ok(StudyPlan {
        n_subjects,
        effect_size,
        adjusted_alpha,
        base_alpha,
        stdev,
        mos_diff,
        num_comparisons,
        power: target_power,
        test_type: design,
    })
}

pub fn plan_from_config(config: &PlanConfig) -> Result<StudyPlan, NumSubjErr> {
    plan(
        config.stdev,
        config.mos_diff,
        config.num_comparisons,
        config.power,
        config.base_alpha,
        config.test_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_size::error::SampleSizeErr;
    use approx::assert_relative_eq;

    #[test]
    fn default_qoe_plan() {
        let plan = plan(0.8, 1.0, 100, 0.8, 0.05, DesignType::Paired).unwrap();
        assert_relative_eq!(plan.effect_size, 1.25);
        assert_relative_eq!(plan.adjusted_alpha, 0.0005);
        assert_eq!(plan.adjusted_alpha, 0.05 / 100.0);
        assert_eq!(plan.n_subjects, 18);
        assert_eq!(plan.num_comparisons, 100);
        assert_eq!(plan.test_type, DesignType::Paired);
    }

    #[test]
    fn config_matches_arguments() {
        let config = PlanConfig {
            test_type: DesignType::Independent,
            ..PlanConfig::default()
        };
        let from_config = plan_from_config(&config).unwrap();
        assert_eq!(
            from_config,
            plan(0.8, 1.0, 100, 0.8, 0.05, DesignType::Independent).unwrap()
        );
        assert_eq!(from_config.n_subjects, 27);
    }

    #[test]
    fn bonferroni_is_plain_division() {
        for (alpha, k) in [(0.05, 1), (0.05, 3), (0.01, 7), (0.1, 1000)] {
            let plan = plan(1.0, 1.0, k, 0.8, alpha, DesignType::Paired).unwrap();
            assert_eq!(plan.adjusted_alpha, alpha / k as f64);
            assert!(plan.adjusted_alpha > 0.0 && plan.adjusted_alpha <= plan.base_alpha);
        }
    }

    #[test]
    fn more_comparisons_need_more_subjects() {
        let few = plan(0.8, 0.5, 10, 0.8, 0.05, DesignType::Paired).unwrap();
        let many = plan(0.8, 0.5, 1000, 0.8, 0.05, DesignType::Paired).unwrap();
        assert!(many.n_subjects > few.n_subjects);
    }

    #[test]
    fn negative_difference_is_allowed() {
        let up = plan(0.8, 0.6, 10, 0.8, 0.05, DesignType::Paired).unwrap();
        let down = plan(0.8, -0.6, 10, 0.8, 0.05, DesignType::Paired).unwrap();
        assert_eq!(up.n_subjects, down.n_subjects);
        assert!(down.effect_size < 0.0);
    }

    #[test]
    fn invalid_parameters() {
        let cases = [
            plan(0.0, 1.0, 100, 0.8, 0.05, DesignType::Paired),
            plan(-0.8, 1.0, 100, 0.8, 0.05, DesignType::Paired),
            plan(0.8, f64::NAN, 100, 0.8, 0.05, DesignType::Paired),
            plan(0.8, 1.0, 0, 0.8, 0.05, DesignType::Paired),
            plan(0.8, 1.0, 100, 0.0, 0.05, DesignType::Paired),
            plan(0.8, 1.0, 100, 0.8, 1.0, DesignType::Paired),
        ];
        for case in cases {
            assert!(matches!(case, Err(NumSubjErr::InvalidParameter(_))), "{case:?}");
        }
    }

    #[test]
    fn zero_difference_is_unattainable() {
        assert!(matches!(
            plan(0.8, 0.0, 100, 0.8, 0.05, DesignType::Paired),
            Err(NumSubjErr::SampleSizeUnattainable(SampleSizeErr::Unattainable { .. }))
        ));
    }
}

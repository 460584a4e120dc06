use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

pub fn std_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

/// CDF of N(mean, sd^2) at x
pub fn normal_cdf(x: f64, mean: f64, sd: f64) -> f64 {
    std_normal_cdf((x - mean) / sd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn standard_normal_cdf_values() {
        assert_abs_diff_eq!(std_normal_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(std_normal_cdf(1.959964), 0.975, epsilon = 1e-7);
        assert_abs_diff_eq!(std_normal_cdf(-2.437995), 0.007384489, epsilon = 1e-7);
    }

    #[test]
    fn standard_normal_cdf_symmetric() {
        for z in [0.1, 0.7, 1.5, 3.0] {
            assert_abs_diff_eq!(std_normal_cdf(z) + std_normal_cdf(-z), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn shifted_normal() {
        assert_abs_diff_eq!(normal_cdf(3.0, 3.0, 2.0), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(normal_cdf(5.0, 3.0, 2.0), std_normal_cdf(1.0), epsilon = 1e-15);
    }
}

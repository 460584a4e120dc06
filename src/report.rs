//----------------------------------------
// Text rendering of plans and tables
//----------------------------------------
use itertools::Itertools;
use std::fmt::Write;

use crate::planning::types::StudyPlan;
use crate::table::types::SampleSizeTable;

const BANNER_WIDTH: usize = 50;

/// Fixed six decimals down to 0.0001, scientific notation below that
pub fn format_alpha(alpha: f64) -> String {
    if alpha >= 0.0001 {
        format!("{alpha:.6}")
    } else {
        format!("{alpha:.2e}")
    }
}

pub fn render_plan(plan: &StudyPlan) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "  Power Analysis Results");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "\n  Minimum subjects required: {}", plan.n_subjects);
    let _ = writeln!(out, "\n  Parameters:");
    let _ = writeln!(out, "    Standard deviation:    {:.2}", plan.stdev);
    let _ = writeln!(out, "    MOS difference:        {:.2}", plan.mos_diff);
    let _ = writeln!(out, "    Number of comparisons: {}", plan.num_comparisons);
    let _ = writeln!(out, "    Target power:          {:.2}", plan.power);
    let _ = writeln!(out, "    Test type:             {}", plan.test_type);
    let _ = writeln!(out, "\n  Derived values:");
    let _ = writeln!(out, "    Effect size (d):       {:.3}", plan.effect_size);
    let _ = writeln!(out, "    Base alpha:            {}", plan.base_alpha);
    let _ = writeln!(
        out,
        "    Adjusted alpha:        {}",
        format_alpha(plan.adjusted_alpha)
    );
    let _ = writeln!(out, "    Correction method:     Bonferroni");
    let _ = writeln!(out, "{rule}");
    out
}

pub fn render_table(table: &SampleSizeTable) -> String {
    let rule = "-".repeat(12 + 10 * table.n_cols());
    let header = table
        .alphas
        .iter()
        .map(|&alpha| format!(" {:>8}", format_alpha(alpha)))
        .join("");

    let mut out = String::new();
    let _ = writeln!(
        out,
        "\nSample sizes for {} t-test (power = {})",
        table.design, table.power
    );
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{:>10} |{header}", "d");
    let _ = writeln!(out, "{rule}");
    for (d, cells) in table.rows() {
        let row = cells
            .iter()
            .map(|cell| match cell {
                Some(n) => format!(" {n:>8}"),
                None => format!(" {:>8}", format!(">{}", table.upper_bound)),
            })
            .join("");
        let _ = writeln!(out, "{d:>10.1} |{row}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::types::DesignType;

    #[test]
    fn alpha_formatting() {
        assert_eq!(format_alpha(0.05), "0.050000");
        assert_eq!(format_alpha(0.0005), "0.000500");
        assert_eq!(format_alpha(0.0001), "0.000100");
        assert_eq!(format_alpha(0.00005), "5.00e-5");
        assert_eq!(format_alpha(0.00001), "1.00e-5");
    }

    #[test]
    fn plan_block() {
        let plan = StudyPlan {
            n_subjects: 18,
            effect_size: 1.25,
            adjusted_alpha: 0.0005,
            base_alpha: 0.05,
            stdev: 0.8,
            mos_diff: 1.0,
            num_comparisons: 100,
            power: 0.8,
            test_type: DesignType::Paired,
        };
        let text = render_plan(&plan);
        assert!(text.contains("Minimum subjects required: 18"));
        assert!(text.contains("Standard deviation:    0.80"));
        assert!(text.contains("Effect size (d):       1.250"));
        assert!(text.contains("Base alpha:            0.05\n"));
        assert!(text.contains("Adjusted alpha:        0.000500"));
        assert!(text.contains("Test type:             paired"));
    }

    #[test]
    fn table_layout() {
        let table = SampleSizeTable {
            effect_sizes: vec![0.2, 1.0],
            alphas: vec![0.05, 0.00001],
            power: 0.8,
            design: DesignType::Independent,
            upper_bound: 10_000,
            cells: vec![vec![Some(394), None], vec![Some(17), Some(62)]],
        };
        let text = render_table(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "Sample sizes for two.sample t-test (power = 0.8)");
        assert_eq!(lines[2], "-".repeat(32));
        assert_eq!(lines[3], "         d | 0.050000  1.00e-5");
        assert_eq!(lines[5], "       0.2 |      394   >10000");
        assert_eq!(lines[6], "       1.0 |       17       62");
    }
}

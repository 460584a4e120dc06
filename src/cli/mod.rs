use anyhow::Context;
use clap::{Parser, ValueEnum};
use numsubj::compute::types::{DesignType, PlanConfig};
use numsubj::compute::{default_alphas, default_effect_sizes, generate_table, plan_from_config};
use numsubj::report::{render_plan, render_table};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod interactive;

/// Calculate the number of subjects needed for a QoE experiment
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Examples:\n  \
        numsubj                              # Use defaults\n  \
        numsubj --stdev 1.0 --mos-diff 0.5\n  \
        numsubj --comparisons 1000 --test-type independent\n  \
        numsubj --table                      # Generate sample size table\n  \
        numsubj --interactive                # Interactive mode"
)]
pub struct CommandArgs {
    /// Expected standard deviation (default: 0.8)
    #[arg(long)]
    stdev: Option<f64>,
    /// Desired MOS difference to detect (default: 1.0)
    #[arg(long)]
    mos_diff: Option<f64>,
    /// Number of planned comparisons (default: 100)
    #[arg(long)]
    comparisons: Option<usize>,
    /// Desired statistical power (default: 0.8)
    #[arg(long)]
    power: Option<f64>,
    /// Base significance level (default: 0.05)
    #[arg(long)]
    alpha: Option<f64>,
    /// Type of t-test (default: paired)
    #[arg(long, value_enum)]
    test_type: Option<TestTypeArg>,
    /// JSON file with any of stdev, mos_diff, num_comparisons, power,
    /// base_alpha, test_type; flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,
    /// Generate sample size tables for both test types
    #[arg(long)]
    table: bool,
    /// Run in interactive mode
    #[arg(long, short)]
    interactive: bool,
    /// Output results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TestTypeArg {
    Paired,
    Independent,
}

impl From<TestTypeArg> for DesignType {
    fn from(arg: TestTypeArg) -> DesignType {
        match arg {
            TestTypeArg::Paired => DesignType::Paired,
            TestTypeArg::Independent => DesignType::Independent,
        }
    }
}

impl CommandArgs {
    /// Config file (or defaults) with command line flags applied on top
    fn plan_config(&self) -> anyhow::Result<PlanConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("failed to parse config {}", path.display()))?
            }
            None => PlanConfig::default(),
        };
        if let Some(stdev) = self.stdev {
            config.stdev = stdev;
        }
        if let Some(mos_diff) = self.mos_diff {
            config.mos_diff = mos_diff;
        }
        if let Some(comparisons) = self.comparisons {
            config.num_comparisons = comparisons;
        }
        if let Some(power) = self.power {
            config.power = power;
        }
        if let Some(alpha) = self.alpha {
            config.base_alpha = alpha;
        }
        if let Some(test_type) = self.test_type {
            config.test_type = test_type.into();
        }
        Ok(config)
    }
}

fn init_tracing() {
    // stderr keeps stdout clean for --json
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing();
    let config = args.plan_config()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.interactive {
        let stdin = io::stdin();
        let config = interactive::prompt_config(&mut stdin.lock(), &mut out, &config)?;
        write_plan(&mut out, &config, args.json)?;
    } else if args.table {
        for design in [config.test_type, config.test_type.other()] {
            let table = generate_table(
                &default_effect_sizes(),
                &default_alphas(),
                config.power,
                design,
            )
            .with_context(|| format!("failed to generate {design} table"))?;
            writeln!(out, "{}", render_table(&table))?;
        }
    } else {
        write_plan(&mut out, &config, args.json)?;
    }
    Ok(())
}

fn write_plan<W: Write>(out: &mut W, config: &PlanConfig, json: bool) -> anyhow::Result<()> {
    let plan = plan_from_config(config).context("failed to plan study")?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &plan)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", render_plan(&plan))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CommandArgs {
        CommandArgs::try_parse_from(std::iter::once("numsubj").chain(args.iter().copied()))
            .expect("failed to parse arguments")
    }

    #[test]
    fn defaults_without_flags() {
        assert_eq!(parse(&[]).plan_config().unwrap(), PlanConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--stdev",
            "1.0",
            "--mos-diff",
            "0.5",
            "--comparisons",
            "1000",
            "--test-type",
            "independent",
        ])
        .plan_config()
        .unwrap();
        assert_eq!(config.stdev, 1.0);
        assert_eq!(config.mos_diff, 0.5);
        assert_eq!(config.num_comparisons, 1000);
        assert_eq!(config.test_type, DesignType::Independent);
        assert_eq!(config.power, 0.8);
    }

    #[test]
    fn modes() {
        assert!(parse(&["--table"]).table);
        assert!(parse(&["-i"]).interactive);
        assert!(parse(&["--json"]).json);
        assert!(CommandArgs::try_parse_from(["numsubj", "--test-type", "welch"]).is_err());
    }

    #[test]
    fn json_output() {
        let mut buf = Vec::new();
        write_plan(&mut buf, &PlanConfig::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["n_subjects"], 18);
        assert_eq!(value["test_type"], "paired");
        assert_eq!(value["num_comparisons"], 100);
    }

    #[test]
    fn invalid_config_is_reported() {
        let config = PlanConfig {
            stdev: 0.0,
            ..PlanConfig::default()
        };
        let err = write_plan(&mut Vec::new(), &config, false).unwrap_err();
        assert!(format!("{err:#}").contains("standard deviation should be positive"));
    }
}

use anyhow::Context;
use numsubj::compute::types::{DesignType, PlanConfig};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Prompts for each planning parameter; an empty answer keeps the value
/// from `defaults`
pub fn prompt_config<R, W>(
    input: &mut R,
    output: &mut W,
    defaults: &PlanConfig,
) -> anyhow::Result<PlanConfig>
where
    R: BufRead,
    W: Write,
{
    let rule = "=".repeat(50);
    writeln!(output, "\n{rule}\n  Interactive Mode\n{rule}")?;
    writeln!(output, "\nEnter parameters (press Enter for defaults):\n")?;

    let stdev = ask(input, output, "Expected standard deviation", defaults.stdev)?;
    let mos_diff = ask(input, output, "Desired MOS difference", defaults.mos_diff)?;
    let num_comparisons = ask(input, output, "Number of comparisons", defaults.num_comparisons)?;
    let power = ask(input, output, "Desired power", defaults.power)?;
    let test_type: DesignType = ask(
        input,
        output,
        "Test type (paired/independent)",
        defaults.test_type,
    )?;

    Ok(PlanConfig {
        stdev,
        mos_diff,
        num_comparisons,
        power,
        base_alpha: defaults.base_alpha,
        test_type,
    })
}

fn ask<R, W, T>(input: &mut R, output: &mut W, prompt: &str, default: T) -> anyhow::Result<T>
where
    R: BufRead,
    W: Write,
    T: FromStr + std::fmt::Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    write!(output, "  {prompt} [{default}]: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    answer
        .parse()
        .with_context(|| format!("invalid answer {answer:?} for {prompt}"))
}

//----------------------------------------
// power mod types
//----------------------------------------
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::error::ParameterErr;

/// Which t-test the study will run
#[derive(Default, Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum DesignType {
    /// Within-subject: every subject rates both conditions
    #[default]
    #[serde(rename = "paired")]
    Paired,
    /// Between-subject: two groups of n subjects each
    #[serde(rename = "two.sample", alias = "independent")]
    Independent,
}

impl DesignType {
    pub fn degrees_of_freedom(self, n: usize) -> f64 {
        let n = n as f64;
        match self {
            DesignType::Paired => n - 1.0,
            DesignType::Independent => 2.0 * n - 2.0,
        }
    }

    /// Non-centrality parameter of the test statistic under effect size `d`
    pub fn noncentrality(self, n: usize, d: f64) -> f64 {
        let n = n as f64;
        match self {
            DesignType::Paired => d * n.sqrt(),
            DesignType::Independent => d * (n / 2.0).sqrt(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DesignType::Paired => "paired",
            DesignType::Independent => "two.sample",
        }
    }

    pub fn other(self) -> DesignType {
        match self {
            DesignType::Paired => DesignType::Independent,
            DesignType::Independent => DesignType::Paired,
        }
    }
}

impl fmt::Display for DesignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DesignType {
    type Err = ParameterErr;

    fn from_str(s: &str) -> Result<DesignType, ParameterErr> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paired" | "p" => Ok(DesignType::Paired),
            "independent" | "two.sample" | "i" => Ok(DesignType::Independent),
            _ => Err(ParameterErr::UnknownDesign(s.to_string())),
        }
    }
}

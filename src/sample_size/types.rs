use serde::{Deserialize, Serialize};

use crate::error::NumSubjErr;
use crate::validation::MIN_SAMPLE_SIZE;
use crate::validation::error::ParameterErr;

pub const DEFAULT_UPPER_BOUND: usize = 10_000;

/// Inclusive range of sample sizes the solver searches
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct SearchBounds {
    pub lower: usize,
    pub upper: usize,
}

impl SearchBounds {
    pub fn new(lower: usize, upper: usize) -> Result<SearchBounds, NumSubjErr> {
        SearchBounds { lower, upper }.validated()
    }

    pub fn validated(self) -> Result<SearchBounds, NumSubjErr> {
        if self.lower < MIN_SAMPLE_SIZE || self.lower >= self.upper {
            return Err(ParameterErr::BadSearchBounds {
                lower: self.lower,
                upper: self.upper,
            }
            .into());
        }
        Ok(self)
    }
}

impl Default for SearchBounds {
    fn default() -> SearchBounds {
        SearchBounds {
            lower: MIN_SAMPLE_SIZE,
            upper: DEFAULT_UPPER_BOUND,
        }
    }
}

//----------------------------------------
// Root lib
//----------------------------------------
//! Sample-size planning for Quality-of-Experience studies. Given the
//! expected spread of opinion scores, the smallest MOS difference worth
//! detecting and the number of pairwise comparisons planned, computes how
//! many subjects a paired or independent two-tailed t-test needs to reach a
//! target power once the significance level is Bonferroni-corrected.
//!
//! Power is evaluated exactly over the non-central t distribution and the
//! sample size is found by integer bisection on it.

/// This module houses the public API for computing power, sample sizes,
/// study plans and reference tables
pub mod compute;
mod distribution;
/// This module contains error types
pub mod error;
mod planning;
mod power;
/// Plain-text rendering of plans and tables
pub mod report;
mod sample_size;
mod table;
mod util;
mod validation;

pub use crate::distribution::error::DistributionErr;
pub use crate::sample_size::error::SampleSizeErr;
pub use crate::validation::error::ParameterErr;

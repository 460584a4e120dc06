//----------------------------------------
// Crate error type
//----------------------------------------
use crate::distribution::error::DistributionErr;
use crate::sample_size::error::SampleSizeErr;
use crate::validation::error::ParameterErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumSubjErr {
    #[error("invalid parameter: {0}")]
    InvalidParameter(ParameterErr),
    #[error("sample size unattainable: {0}")]
    SampleSizeUnattainable(SampleSizeErr),
    #[error("numerical instability: {0}")]
    NumericalInstability(DistributionErr),
}

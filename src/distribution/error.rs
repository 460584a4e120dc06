//----------------------------------------
// distribution errors
//----------------------------------------
use crate::error::NumSubjErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionErr {
    #[error("{function} returned a non-finite value ({value})")]
    NonFinite { function: &'static str, value: f64 },
    #[error("{function} returned {value}, outside of [0, 1]")]
    OutOfRange { function: &'static str, value: f64 },
    #[error("{function} underflowed (df: {df}, ncp: {ncp})")]
    Underflow {
        function: &'static str,
        df: f64,
        ncp: f64,
    },
}

impl From<DistributionErr> for NumSubjErr {
    fn from(err: DistributionErr) -> NumSubjErr {
        NumSubjErr::NumericalInstability(err)
    }
}

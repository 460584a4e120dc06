use crate::error::NumSubjErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleSizeErr {
    #[error(
        "target power {target_power} not reached within {upper_bound} subjects \
        (power at the bound: {achieved_power})"
    )]
    Unattainable {
        target_power: f64,
        achieved_power: f64,
        upper_bound: usize,
    },
}

impl From<SampleSizeErr> for NumSubjErr {
    fn from(err: SampleSizeErr) -> NumSubjErr {
        NumSubjErr::SampleSizeUnattainable(err)
    }
}

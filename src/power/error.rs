//----------------------------------------
// power computation errors
//----------------------------------------
use crate::error::AnalysisErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PowerErr {
    #[error("significance level should be in (0, 1); got {0}")]
    BadAlpha(f64),
    #[error("pooled standard deviation should be positive; got {0}")]
    NonPositiveStddev(f64),
    #[error("need at least 2 subjects per arm; got {0}")]
    TooFewSubjects(usize),
    #[error("degrees of freedom should be at least 1; got {0}")]
    BadDegreesOfFreedom(f64),
    #[error("cannot resample from an empty cohort")]
    EmptySample,
    #[error("simulation iteration count should be positive")]
    NoIterations,
}

impl Into<AnalysisErr> for PowerErr {
    fn into(self) -> AnalysisErr {
        AnalysisErr::Power(self)
    }
}

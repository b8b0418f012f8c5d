//----------------------------------------
// summary statistics errors
//----------------------------------------
use crate::error::AnalysisErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryErr {
    #[error(
        "the {arm} cohort has {size} score(s); at least 2 are needed for \
        a standard deviation"
    )]
    DegenerateCohort { arm: &'static str, size: usize },
}

impl Into<AnalysisErr> for SummaryErr {
    fn into(self) -> AnalysisErr {
        AnalysisErr::Summary(self)
    }
}

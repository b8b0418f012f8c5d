//----------------------------------------
// Crate error type
//----------------------------------------
use crate::cohort::error::CohortErr;
use crate::power::error::PowerErr;
use crate::stats::error::SummaryErr;
use crate::survey::error::SurveyDataErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisErr {
    #[error("while loading survey data: {0}")]
    SurveyData(SurveyDataErr),
    #[error("while partitioning cohorts: {0}")]
    Cohort(CohortErr),
    #[error("while computing summary statistics: {0}")]
    Summary(SummaryErr),
    #[error("while computing power: {0}")]
    Power(PowerErr),
}

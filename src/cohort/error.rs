//----------------------------------------
// cohort errors
//----------------------------------------
use crate::error::AnalysisErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CohortErr {
    #[error("no study-group assignment for participant `{participant_id}`")]
    MissingJoinKey { participant_id: String },
}

impl Into<AnalysisErr> for CohortErr {
    fn into(self) -> AnalysisErr {
        AnalysisErr::Cohort(self)
    }
}

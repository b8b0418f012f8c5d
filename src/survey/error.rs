//----------------------------------------
// survey data errors
//----------------------------------------
use crate::error::AnalysisErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyDataErr {
    #[error("could not read {path}: {detail}")]
    Io { path: String, detail: String },
    #[error("{path} is empty")]
    EmptyFile { path: String },
    #[error("missing required column `{column}` in {path}")]
    MissingColumn { column: String, path: String },
    #[error("line {line} of {path} has too few fields")]
    ShortRow { line: usize, path: String },
    #[error("line {line} of {path} has no participant id")]
    MissingParticipantId { line: usize, path: String },
    #[error("could not parse score `{value}` on line {line} of {path}")]
    BadScore {
        line: usize,
        value: String,
        path: String,
    },
    #[error("unknown study group label `{label}` on line {line} of {path}")]
    UnknownStudyGroup {
        line: usize,
        label: String,
        path: String,
    },
    #[error("manual response for participant `{participant_id}` duplicates an existing record")]
    DuplicateManualRecord { participant_id: String },
    #[error("no manually entered timestamp recorded for participant `{participant_id}`")]
    MissingManualTimestamp { participant_id: String },
    #[error("could not parse manual timestamps in {path}: {detail}")]
    BadTimestampFile { path: String, detail: String },
    #[error("attempted to anonymize the already anonymous id `{participant_id}`")]
    AlreadyAnonymized { participant_id: String },
}

impl Into<AnalysisErr> for SurveyDataErr {
    fn into(self) -> AnalysisErr {
        AnalysisErr::SurveyData(self)
    }
}

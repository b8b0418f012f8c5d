//! Manual response handling. When automated collection failed for a
//! participant, the responses are entered by hand into a per-survey
//! `<name>.manual.csv` file (same schema as the automated export) and the
//! completion timestamps are recorded in a separate JSON file.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::AnalysisErr;
use crate::survey::error::SurveyDataErr;
use crate::survey::load::read_file;
use crate::survey::types::ComprehensionRecord;

/// Manually entered completion timestamps, keyed by participant id and then
/// by survey/time-point name (e.g. `comprehension_t0`).
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ManualTimestamps(pub HashMap<String, HashMap<String, String>>);

impl ManualTimestamps {
    pub fn load(path: &Path) -> Result<ManualTimestamps, AnalysisErr> {
        let content = read_file(path)?;
        match serde_json::from_str(&content) {
            Ok(timestamps) => Ok(timestamps),
            Err(e) => Err(SurveyDataErr::BadTimestampFile {
                path: path.display().to_string(),
                detail: e.to_string(),
            }
            .into()),
        }
    }

    pub fn has_entry(&self, participant_id: &str) -> bool {
        self.0
            .get(participant_id)
            .map(|entries| !entries.is_empty())
            .unwrap_or(false)
    }
}

/// Appends manual response rows to the automated records. A manual row for a
/// participant who already has an automated record is a data error, as is a
/// manual row without a recorded completion timestamp.
pub fn merge_manual_records(
    automated: Vec<ComprehensionRecord>,
    manual: Vec<ComprehensionRecord>,
    timestamps: &ManualTimestamps,
) -> Result<Vec<ComprehensionRecord>, AnalysisErr> {
    let mut present: HashSet<String> = automated
        .iter()
        .map(|record| record.participant_id.clone())
        .collect();

    let mut merged = automated;
    for record in manual {
        if present.contains(&record.participant_id) {
            return Err(SurveyDataErr::DuplicateManualRecord {
                participant_id: record.participant_id,
            }
            .into());
        }
        if !timestamps.has_entry(&record.participant_id) {
            return Err(SurveyDataErr::MissingManualTimestamp {
                participant_id: record.participant_id,
            }
            .into());
        }
        present.insert(record.participant_id.clone());
        merged.push(record);
    }
    Ok(merged)
}

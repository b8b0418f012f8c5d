use std::collections::HashMap;

use crate::cohort::error::CohortErr;
use crate::cohort::types::CohortPair;
use crate::error::AnalysisErr;
use crate::survey::types::{ComprehensionRecord, GroupAssignment, StudyGroup};

/// Splits comprehension scores into the two study cohorts by joining each
/// record to its group assignment on the participant id. Every record must
/// resolve to an assignment; a missing one aborts the run. Should the
/// external source contain duplicate assignments for an id, the first one
/// wins.
pub fn partition_scores(
    records: &[ComprehensionRecord],
    assignments: &[GroupAssignment],
) -> Result<CohortPair, AnalysisErr> {
    let mut lookup: HashMap<&str, StudyGroup> = HashMap::with_capacity(assignments.len());
    for assignment in assignments {
        lookup
            .entry(assignment.participant_id.as_str())
            .or_insert(assignment.study_group);
    }

    records
        .iter()
        .try_fold(CohortPair::default(), |mut cohorts, record| {
            match lookup.get(record.participant_id.as_str()) {
                Some(StudyGroup::Intervention) => cohorts.intervention.push(record.score),
                Some(StudyGroup::Reference) => cohorts.reference.push(record.score),
                None => {
                    return Err(CohortErr::MissingJoinKey {
                        participant_id: record.participant_id.clone(),
                    }
                    .into())
                }
            }
            Ok(cohorts)
        })
}

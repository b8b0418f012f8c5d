/// One survey response row: a participant and their total comprehension
/// score. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ComprehensionRecord {
    pub participant_id: String,
    pub score: f64,
}

/// Study arm a participant was randomized to. The records system stores the
/// literal arm labels; everything downstream only cares which arm is the
/// intervention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyGroup {
    Intervention,
    Reference,
}

pub const INTERVENTION_LABEL: &str = "App";
pub const REFERENCE_LABEL: &str = "Counseling";

impl StudyGroup {
    /// Maps a records-export group label to a study group, if it is one of
    /// the known labels.
    pub fn from_label(label: &str) -> Option<StudyGroup> {
        match label {
            INTERVENTION_LABEL => Some(StudyGroup::Intervention),
            REFERENCE_LABEL => Some(StudyGroup::Reference),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StudyGroup::Intervention => INTERVENTION_LABEL,
            StudyGroup::Reference => REFERENCE_LABEL,
        }
    }
}

/// Group assignment for one participant, as exported from the external
/// records system.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAssignment {
    pub participant_id: String,
    pub study_group: StudyGroup,
}

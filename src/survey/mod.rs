//----------------------------------------
// survey mod
//----------------------------------------
pub mod anonymize;
pub mod error;
pub mod load;
pub mod manual;
pub mod types;

pub use anonymize::ParticipantIdMap;
pub use load::{load_comprehension_records, load_group_assignments};
pub use manual::{merge_manual_records, ManualTimestamps};
pub use types::{ComprehensionRecord, GroupAssignment, StudyGroup};

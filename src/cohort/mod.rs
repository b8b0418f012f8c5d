//----------------------------------------
// cohort mod
//----------------------------------------
pub mod error;
pub mod partition;
pub mod types;

pub use partition::partition_scores;
pub use types::CohortPair;

//----------------------------------------
// stats mod
//----------------------------------------
pub mod error;
pub mod summary;
pub mod types;

pub use summary::summarize;
pub use types::{SummaryStatistics, RELATIVE_MARGIN};

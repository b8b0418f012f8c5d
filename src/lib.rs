//----------------------------------------
// Root lib
//----------------------------------------
//! Analysis workflow for the comprehension outcome of a two-arm clinical
//! trial. The library loads per-participant survey scores and the records
//! system export, splits participants into intervention and reference
//! cohorts, and estimates the power of the planned non-inferiority
//! comparison with three independent methods: a closed-form difference of
//! means test, a margin-adjusted two-sample t-test, and a Mann-Whitney-U
//! resampling simulation.

/// This module houses cohort partitioning
pub mod cohort;
/// This module contains the crate-wide error type
pub mod error;
/// This module houses the power analyzers
pub mod power;
mod report;
/// This module houses summary statistics
pub mod stats;
/// This module houses survey data loading, manual-response merging, and
/// anonymization
pub mod survey;

pub use report::print_report;

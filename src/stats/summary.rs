use statrs::statistics::Statistics;

use crate::cohort::types::CohortPair;
use crate::error::AnalysisErr;
use crate::stats::error::SummaryErr;
use crate::stats::types::{SummaryStatistics, RELATIVE_MARGIN};

/// Computes the cohort summary statistics the power analyzers consume.
/// Degenerate cohorts are rejected before any statistical call is made.
pub fn summarize(cohorts: &CohortPair) -> Result<SummaryStatistics, AnalysisErr> {
    //----------------------------------------
    // Check cohorts
    if cohorts.reference.len() < 2 {
        return Err(SummaryErr::DegenerateCohort {
            arm: "reference",
            size: cohorts.reference.len(),
        }
        .into());
    }
    if cohorts.intervention.len() < 2 {
        return Err(SummaryErr::DegenerateCohort {
            arm: "intervention",
            size: cohorts.intervention.len(),
        }
        .into());
    }

    //----------------------------------------
    // Means, union pooled SD, margin
    let mean_intervention = cohorts.intervention.iter().mean();
    let mean_reference = cohorts.reference.iter().mean();
    // Sample SD over the union of both cohorts, not variance-weighted
    // pooling; the t-test cross-check uses the weighted formula instead
    let pooled_stddev = cohorts
        .intervention
        .iter()
        .chain(cohorts.reference.iter())
        .std_dev();
    let margin = RELATIVE_MARGIN * mean_reference;

    Ok(SummaryStatistics {
        n_intervention: cohorts.intervention.len(),
        n_reference: cohorts.reference.len(),
        mean_intervention,
        mean_reference,
        difference_in_means: mean_intervention - mean_reference,
        pooled_stddev,
        margin,
    })
}

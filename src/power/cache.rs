use crate::cohort::types::CohortPair;
use crate::error::AnalysisErr;
use crate::power::sim::simulate_rank_sum_power;
use crate::power::types::{RankSumReport, RankSumStrategy};

/// Last known-good simulation output, reprinted verbatim when the
/// simulation is not opted into. The run takes minutes at the default
/// iteration count, so day-to-day reruns of the other analyzers should not
/// pay for it.
pub const CACHED_RANK_SUM_SNAPSHOT: &str = "\
Mann-Whitney-U rank-sum simulation (cached result from 2025-06-03)
  iterations: 10000 (seed 24601)
  estimated power (exact test): 0.9978
  estimated power (asymptotic test): 0.9981
  estimated type I error (exact test): 0.0229
  estimated type I error (asymptotic test): 0.0243";

pub const CACHE_INVALIDATION_WARNING: &str =
    "cached simulation results must be invalidated whenever the input data change";

/// Runs the rank-sum power check according to the selected strategy:
/// either a fresh simulation over the observed cohorts or the cached
/// snapshot of the last known-good run.
pub fn run_rank_sum(
    strategy: &RankSumStrategy,
    cohorts: &CohortPair,
    margin: f64,
    alpha: f64,
) -> Result<RankSumReport, AnalysisErr> {
    match strategy {
        RankSumStrategy::Live(config) => {
            let estimates = simulate_rank_sum_power(
                &cohorts.reference,
                &cohorts.intervention,
                margin,
                alpha,
                config,
            )?;
            Ok(RankSumReport::Simulated(estimates))
        }
        RankSumStrategy::Cached => Ok(RankSumReport::Cached(CACHED_RANK_SUM_SNAPSHOT)),
    }
}

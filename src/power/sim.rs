use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

use crate::error::AnalysisErr;
use crate::power::error::PowerErr;
use crate::power::ranksum::{asymptotic_p_less, u_statistic, ExactNullDistribution};
use crate::power::types::{RankSumEstimates, SimConfig};

/// Counter-based seed derivation using SplitMix64, so every replicate gets
/// an independent, well-distributed RNG stream and the result does not
/// depend on how rayon schedules the replicates.
/// See: https://xoshiro.di.unimi.it/splitmix64.c
fn replicate_seed(base_seed: u64, counter: u64) -> u64 {
    let mut z = base_seed.wrapping_add(counter.wrapping_mul(0x9e3779b97f4a7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

fn resample<R: Rng>(data: &[f64], n: usize, rng: &mut R) -> Vec<f64> {
    (0..n)
        .map(|_| data[rng.random_range(0..data.len())])
        .collect()
}

/// Monte Carlo power check of the non-inferiority comparison with the
/// Mann-Whitney-U test.
///
/// Each replicate resamples (with replacement) a pseudo reference cohort
/// from the observed reference scores shifted down by the margin and a
/// pseudo intervention cohort from the observed intervention scores, then
/// applies the one-sided rank-sum test in both its exact and asymptotic
/// forms. Rejections under this alternative estimate power; a second pair
/// of draws, both from the shifted reference scores, estimates the type I
/// error. Fixed seed plus fixed inputs give identical estimates.
pub fn simulate_rank_sum_power(
    reference: &[f64],
    intervention: &[f64],
    margin: f64,
    alpha: f64,
    config: &SimConfig,
) -> Result<RankSumEstimates, AnalysisErr> {
    //----------------------------------------
    // Check arguments
    if reference.is_empty() || intervention.is_empty() {
        return Err(PowerErr::EmptySample.into());
    }
    if config.iterations == 0 {
        return Err(PowerErr::NoIterations.into());
    }
    if alpha <= 0.0 || alpha >= 1.0 {
        return Err(PowerErr::BadAlpha(alpha).into());
    }

    //----------------------------------------
    // Shared replicate inputs
    let shifted_reference: Vec<f64> = reference.iter().map(|score| score - margin).collect();
    let n_reference = reference.len();
    let n_intervention = intervention.len();
    // Sample sizes are the same in every replicate, so the exact null
    // distribution of U is computed once up front
    let exact = ExactNullDistribution::new(n_reference, n_intervention);

    //----------------------------------------
    // Run replicates
    let rejections = (0..config.iterations)
        .into_par_iter()
        .map(|replicate| {
            let seed = replicate_seed(config.seed, replicate as u64);
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

            // Alternative: shifted reference vs. observed intervention
            let alternative_first = resample(&shifted_reference, n_reference, &mut rng);
            let alternative_second = resample(intervention, n_intervention, &mut rng);
            let (u1, tie_sum) = u_statistic(&alternative_first, &alternative_second);
            let power_exact_hit = exact.p_less_or_equal(u1) < alpha;
            let power_asymptotic_hit =
                asymptotic_p_less(u1, n_reference, n_intervention, tie_sum) < alpha;

            // Null: both cohorts drawn from the shifted reference
            let null_first = resample(&shifted_reference, n_reference, &mut rng);
            let null_second = resample(&shifted_reference, n_intervention, &mut rng);
            let (u1_null, tie_sum_null) = u_statistic(&null_first, &null_second);
            let type_i_exact_hit = exact.p_less_or_equal(u1_null) < alpha;
            let type_i_asymptotic_hit =
                asymptotic_p_less(u1_null, n_reference, n_intervention, tie_sum_null) < alpha;

            (
                power_exact_hit as u64,
                power_asymptotic_hit as u64,
                type_i_exact_hit as u64,
                type_i_asymptotic_hit as u64,
            )
        })
        .reduce(
            || (0, 0, 0, 0),
            |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2, a.3 + b.3),
        );

    let total = config.iterations as f64;
    Ok(RankSumEstimates {
        iterations: config.iterations,
        seed: config.seed,
        run_date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        power_exact: rejections.0 as f64 / total,
        power_asymptotic: rejections.1 as f64 / total,
        type_i_exact: rejections.2 as f64 / total,
        type_i_asymptotic: rejections.3 as f64 / total,
    })
}

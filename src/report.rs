//! Console report. Every intermediate and final quantity is printed in a
//! fixed, human-readable sequence; there is no machine-readable output.

use colored::Colorize;

use crate::power::cache::CACHE_INVALIDATION_WARNING;
use crate::power::types::{PowerResult, RankSumEstimates, RankSumReport};
use crate::stats::types::SummaryStatistics;

fn print_summary(summary: &SummaryStatistics) {
    println!(
        "Cohort sizes: intervention n = {}, reference n = {}",
        summary.n_intervention, summary.n_reference
    );
    println!(
        "Mean comprehension score (intervention): {:.4}",
        summary.mean_intervention
    );
    println!(
        "Mean comprehension score (reference): {:.4}",
        summary.mean_reference
    );
    println!("Difference in means: {:.4}", summary.difference_in_means);
    println!(
        "Pooled standard deviation (union of cohorts): {:.4}",
        summary.pooled_stddev
    );
    println!(
        "Non-inferiority margin (10% of reference mean): {:.4}, passed to the tests as {:.4}",
        summary.margin, -summary.margin
    );
}

fn print_power_result(result: &PowerResult) {
    println!("{}:", result.method);
    println!("  effect size: {:.4}", result.effect_size);
    println!("  estimated power: {:.4}", result.power);
}

fn print_rank_sum_estimates(estimates: &RankSumEstimates) {
    println!(
        "Mann-Whitney-U rank-sum simulation (run {}, {} iterations, seed {})",
        estimates.run_date, estimates.iterations, estimates.seed
    );
    println!(
        "  estimated power (exact test): {:.4}",
        estimates.power_exact
    );
    println!(
        "  estimated power (asymptotic test): {:.4}",
        estimates.power_asymptotic
    );
    println!(
        "  estimated type I error (exact test): {:.4}",
        estimates.type_i_exact
    );
    println!(
        "  estimated type I error (asymptotic test): {:.4}",
        estimates.type_i_asymptotic
    );
}

/// Prints the full analysis report to stdout in its fixed sequence. When
/// the rank-sum section comes from the cache, the stored snapshot is
/// reprinted unchanged and a warning goes to stderr.
pub fn print_report(
    summary: &SummaryStatistics,
    noninferiority: &PowerResult,
    t_test: &PowerResult,
    rank_sum: &RankSumReport,
) {
    print_summary(summary);
    println!();
    print_power_result(noninferiority);
    println!();
    print_power_result(t_test);
    println!();
    match rank_sum {
        RankSumReport::Simulated(estimates) => print_rank_sum_estimates(estimates),
        RankSumReport::Cached(snapshot) => {
            println!("{}", snapshot);
            eprintln!(
                "{} {}",
                "warning:".yellow().bold(),
                CACHE_INVALIDATION_WARNING
            );
        }
    }
}

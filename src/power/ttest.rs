use statrs::statistics::Statistics;

use crate::error::AnalysisErr;
use crate::power::error::PowerErr;
use crate::power::students_t::one_sided_power;
use crate::power::types::PowerResult;

/// Cross-validation of the non-inferiority power estimate via an
/// independent route: Cohen's d against the margin-adjusted reference mean,
/// then a one-sided two-sample t-test power calculation with unequal sample
/// sizes.
///
/// The pooled standard deviation here uses the standard weighted-variance
/// formula, which differs from the union pooling the non-inferiority
/// analyzer uses. The divergence is intentional; the two analyzers are
/// meant to check each other through different estimators.
pub fn t_test_power(
    alpha: f64,
    intervention: &[f64],
    reference: &[f64],
    margin: f64,
) -> Result<PowerResult, AnalysisErr> {
    //----------------------------------------
    // Check arguments
    if intervention.len() < 2 {
        return Err(PowerErr::TooFewSubjects(intervention.len()).into());
    }
    if reference.len() < 2 {
        return Err(PowerErr::TooFewSubjects(reference.len()).into());
    }

    //----------------------------------------
    // Margin-adjusted Cohen's d
    let n1 = intervention.len() as f64;
    let n2 = reference.len() as f64;
    let mean_intervention = intervention.iter().mean();
    let mean_reference = reference.iter().mean();
    let sd_intervention = intervention.iter().std_dev();
    let sd_reference = reference.iter().std_dev();
    let pooled_stddev = (((n1 - 1.0) * sd_intervention * sd_intervention
        + (n2 - 1.0) * sd_reference * sd_reference)
        / (n1 + n2 - 2.0))
        .sqrt();
    if pooled_stddev <= 0.0 {
        return Err(PowerErr::NonPositiveStddev(pooled_stddev).into());
    }
    // Non-inferiority is shown against the reference mean lowered by the
    // margin, not against the reference mean itself
    let cohens_d = (mean_intervention - (mean_reference - margin)) / pooled_stddev;

    //----------------------------------------
    // One-sided power with unequal sample sizes
    let ncp = cohens_d * (n1 * n2 / (n1 + n2)).sqrt();
    let df = n1 + n2 - 2.0;
    let power = one_sided_power(df, ncp, alpha)?;

    Ok(PowerResult {
        method: "two-sample t-test",
        effect_size: cohens_d,
        power,
    })
}

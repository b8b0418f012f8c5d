use crate::error::AnalysisErr;
use crate::power::error::PowerErr;
use crate::power::students_t::one_sided_power;
use crate::power::types::PowerResult;

// Based on https://mverbakel.github.io/2021-02-24/non-inferiority-test
// Assuming that an increase in scores is good

/// Post-hoc power of the one-sided non-inferiority difference-of-means test
/// under a parallel-group design.
///
/// `theta0` is the observed mean difference (intervention minus reference)
/// and `margin` is the signed non-inferiority margin. Higher scores are
/// better here, so the margin is passed negated: the test asks whether
/// `theta0` exceeds `margin`. `pooled_stddev` is the sample SD of the union
/// of both cohorts.
///
/// This estimates power for the sample sizes actually collected; it is not
/// a sample-size calculation.
pub fn noninferiority_power(
    alpha: f64,
    n_intervention: usize,
    n_reference: usize,
    theta0: f64,
    margin: f64,
    pooled_stddev: f64,
) -> Result<PowerResult, AnalysisErr> {
    //----------------------------------------
    // Check arguments
    if n_intervention < 2 {
        return Err(PowerErr::TooFewSubjects(n_intervention).into());
    }
    if n_reference < 2 {
        return Err(PowerErr::TooFewSubjects(n_reference).into());
    }
    if pooled_stddev <= 0.0 {
        return Err(PowerErr::NonPositiveStddev(pooled_stddev).into());
    }

    //----------------------------------------
    // Noncentrality and power
    let n1 = n_intervention as f64;
    let n2 = n_reference as f64;
    let standard_error = pooled_stddev * (1.0 / n1 + 1.0 / n2).sqrt();
    let ncp = (theta0 - margin) / standard_error;
    let df = n1 + n2 - 2.0;
    let power = one_sided_power(df, ncp, alpha)?;

    Ok(PowerResult {
        method: "non-inferiority difference of means",
        effect_size: theta0,
        power,
    })
}

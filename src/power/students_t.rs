use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::AnalysisErr;
use crate::power::error::PowerErr;

/// One-sided power via the shifted central-t approximation: the power of a
/// one-sided level-alpha test with noncentrality `ncp` is approximated by
/// `P(T_df >= t_{1-alpha,df} - ncp)` with a central t distribution. The
/// exact value needs the noncentral t, which none of the statistics crates
/// in use provide; at the sample sizes seen here the approximation is well
/// within reporting precision.
pub(crate) fn one_sided_power(df: f64, ncp: f64, alpha: f64) -> Result<f64, AnalysisErr> {
    if alpha <= 0.0 || alpha >= 1.0 {
        return Err(PowerErr::BadAlpha(alpha).into());
    }
    if df < 1.0 {
        return Err(PowerErr::BadDegreesOfFreedom(df).into());
    }
    // df checked above
    let t = StudentsT::new(0.0, 1.0, df).unwrap();
    let critical = t.inverse_cdf(1.0 - alpha);
    let power = 1.0 - t.cdf(critical - ncp);
    Ok(power.clamp(0.0, 1.0))
}

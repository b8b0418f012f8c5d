/// Non-inferiority threshold as a fraction of the reference cohort mean.
pub const RELATIVE_MARGIN: f64 = 0.1;

/// Read-only snapshot of the cohort summary statistics, computed once per
/// run. `margin` is kept positive here; higher scores are better, so the
/// power analyzers receive its negation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    pub n_intervention: usize,
    pub n_reference: usize,
    pub mean_intervention: f64,
    pub mean_reference: f64,
    pub difference_in_means: f64,
    /// Sample standard deviation of the union of both cohorts. This is
    /// deliberately not the weighted pooling the t-test cross-check uses.
    pub pooled_stddev: f64,
    pub margin: f64,
}

pub const ALPHA: f64 = 0.05;
/// One-sided significance level for the non-inferiority comparison.
pub const NON_INFERIORITY_ALPHA: f64 = ALPHA / 2.0;

/// Output of a single power analyzer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerResult {
    pub method: &'static str,
    pub effect_size: f64,
    pub power: f64,
}

/// Settings for the Mann-Whitney-U resampling simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub iterations: usize,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> SimConfig {
        SimConfig {
            iterations: 10_000,
            seed: 24601,
        }
    }
}

/// Empirical power and type I error estimates from the rank-sum simulation,
/// for both the exact and the asymptotic form of the test.
#[derive(Debug, Clone, PartialEq)]
pub struct RankSumEstimates {
    pub iterations: usize,
    pub seed: u64,
    pub run_date: String,
    pub power_exact: f64,
    pub power_asymptotic: f64,
    pub type_i_exact: f64,
    pub type_i_asymptotic: f64,
}

/// What the rank-sum section of the report is based on: a fresh simulation
/// or the stored snapshot of the last known-good run.
#[derive(Debug, Clone, PartialEq)]
pub enum RankSumReport {
    Simulated(RankSumEstimates),
    Cached(&'static str),
}

/// Selects between recomputing the expensive simulation and reprinting the
/// cached snapshot.
#[derive(Debug, Clone, Copy)]
pub enum RankSumStrategy {
    Live(SimConfig),
    Cached,
}

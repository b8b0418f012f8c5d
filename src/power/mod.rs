//----------------------------------------
// power mod
//----------------------------------------
pub mod cache;
pub mod error;
pub mod noninf;
pub mod ranksum;
pub mod sim;
mod std_normal;
mod students_t;
pub mod ttest;
pub mod types;

pub use cache::run_rank_sum;
pub use noninf::noninferiority_power;
pub use sim::simulate_rank_sum_power;
pub use ttest::t_test_power;
pub use types::{
    PowerResult, RankSumEstimates, RankSumReport, RankSumStrategy, SimConfig,
    NON_INFERIORITY_ALPHA,
};

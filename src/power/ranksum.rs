//! Mann-Whitney-U (Wilcoxon rank-sum) test, one-sided with alternative
//! "first sample tends to be less than the second". Both the asymptotic
//! normal form (midrank tie correction, continuity correction) and the
//! exact form (null distribution of U by the count recursion, valid in the
//! absence of ties) are provided; the simulation estimates power for each.

use itertools::Itertools;

use crate::power::std_normal::std_normal_cdf;

/// U statistic of the first sample plus the tie term `sum(t^3 - t)` over
/// tied groups, computed with midranks over the combined sample.
pub fn u_statistic(first: &[f64], second: &[f64]) -> (f64, f64) {
    let n1 = first.len();
    let combined: Vec<f64> = first.iter().chain(second.iter()).copied().collect();
    let order: Vec<usize> = (0..combined.len())
        .sorted_by(|&a, &b| {
            combined[a]
                .partial_cmp(&combined[b])
                .expect("attempted to rank scores containing NaNs")
        })
        .collect();

    let mut ranks = vec![0.0; combined.len()];
    let mut tie_sum = 0.0;
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && combined[order[end + 1]] == combined[order[start]] {
            end += 1;
        }
        // 1-based midrank shared by the whole tied group
        let midrank = ((start + 1 + end + 1) as f64) / 2.0;
        for &index in &order[start..=end] {
            ranks[index] = midrank;
        }
        let tied = (end - start + 1) as f64;
        tie_sum += tied * tied * tied - tied;
        start = end + 1;
    }

    let rank_sum_first: f64 = ranks[..n1].iter().sum();
    let u1 = rank_sum_first - (n1 * (n1 + 1)) as f64 / 2.0;
    (u1, tie_sum)
}

/// Asymptotic one-sided p-value, P(U <= u1) under the null, with tie and
/// continuity corrections. Returns 1.0 when every observation is tied and
/// the ranks carry no information.
pub fn asymptotic_p_less(u1: f64, n1: usize, n2: usize, tie_sum: f64) -> f64 {
    let n1 = n1 as f64;
    let n2 = n2 as f64;
    let n = n1 + n2;
    let variance = n1 * n2 / 12.0 * ((n + 1.0) - tie_sum / (n * (n - 1.0)));
    if variance <= 0.0 {
        return 1.0;
    }
    let z = (u1 - n1 * n2 / 2.0 + 0.5) / variance.sqrt();
    std_normal_cdf(z)
}

/// Exact null distribution of the U statistic for fixed sample sizes,
/// precomputed once and shared across simulation replicates. The
/// coefficients of the Gaussian binomial `[n1 + n2, n1]_q` count the
/// arrangements for each value of U.
#[derive(Debug)]
pub struct ExactNullDistribution {
    max_u: usize,
    cumulative: Vec<f64>,
}

impl ExactNullDistribution {
    pub fn new(n1: usize, n2: usize) -> ExactNullDistribution {
        let max_u = n1 * n2;
        let mut coefficients = vec![0.0; max_u + 1];
        coefficients[0] = 1.0;
        for i in 1..=n1 {
            // Multiply by (1 - q^(n2 + i)), then divide by (1 - q^i);
            // intermediate coefficients stay integral
            let lag = n2 + i;
            for u in (lag..=max_u).rev() {
                coefficients[u] -= coefficients[u - lag];
            }
            for u in i..=max_u {
                coefficients[u] += coefficients[u - i];
            }
        }
        let total: f64 = coefficients.iter().sum();
        let mut cumulative = Vec::with_capacity(max_u + 1);
        let mut partial = 0.0;
        for count in coefficients {
            partial += count;
            cumulative.push(partial / total);
        }
        ExactNullDistribution { max_u, cumulative }
    }

    /// Exact one-sided p-value P(U <= u1). Midranks can make u1 fractional;
    /// the distribution is only defined on integers, so round down.
    pub fn p_less_or_equal(&self, u1: f64) -> f64 {
        let index = (u1.floor().max(0.0) as usize).min(self.max_u);
        self.cumulative[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u_statistic_no_overlap() {
        let (u1, tie_sum) = u_statistic(&[1.0, 2.0], &[3.0, 4.0]);
        assert_eq!(u1, 0.0);
        assert_eq!(tie_sum, 0.0);

        let (u1_reversed, _) = u_statistic(&[3.0, 4.0], &[1.0, 2.0]);
        assert_eq!(u1_reversed, 4.0);
    }

    #[test]
    fn u_statistics_are_complementary() {
        let first = [8.0, 9.0, 7.0];
        let second = [6.0, 7.0, 6.0, 5.0];
        let (u1, _) = u_statistic(&first, &second);
        let (u2, _) = u_statistic(&second, &first);
        assert!((u1 + u2 - (first.len() * second.len()) as f64).abs() < 1e-9);
    }

    #[test]
    fn midranks_for_ties() {
        // 5 appears twice at sorted positions 2 and 3, midrank 2.5
        let (u1, tie_sum) = u_statistic(&[4.0, 5.0], &[5.0, 6.0]);
        assert_eq!(u1, 0.5);
        assert_eq!(tie_sum, 6.0);
    }

    #[test]
    fn exact_distribution_two_by_two() {
        // Counts per U value for n1 = n2 = 2 are [1, 1, 2, 1, 1] of 6
        let exact = ExactNullDistribution::new(2, 2);
        assert!((exact.p_less_or_equal(0.0) - 1.0 / 6.0).abs() < 1e-12);
        assert!((exact.p_less_or_equal(1.0) - 2.0 / 6.0).abs() < 1e-12);
        assert!((exact.p_less_or_equal(2.0) - 4.0 / 6.0).abs() < 1e-12);
        assert!((exact.p_less_or_equal(3.0) - 5.0 / 6.0).abs() < 1e-12);
        assert!((exact.p_less_or_equal(4.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn exact_distribution_five_by_five_extreme() {
        // P(U <= 0) = 1 / C(10, 5)
        let exact = ExactNullDistribution::new(5, 5);
        assert!((exact.p_less_or_equal(0.0) - 1.0 / 252.0).abs() < 1e-12);
        assert!((exact.p_less_or_equal(25.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn asymptotic_p_small_when_first_sample_lower() {
        let first = [1.0, 2.0, 3.0, 4.0, 5.0];
        let second = [11.0, 12.0, 13.0, 14.0, 15.0];
        let (u1, tie_sum) = u_statistic(&first, &second);
        let p = asymptotic_p_less(u1, first.len(), second.len(), tie_sum);
        assert!(p < 0.05);

        let (u1_reversed, tie_sum_reversed) = u_statistic(&second, &first);
        let p_reversed =
            asymptotic_p_less(u1_reversed, second.len(), first.len(), tie_sum_reversed);
        assert!(p_reversed > 0.95);
    }

    #[test]
    fn all_tied_has_no_rank_information() {
        let flat = [5.0, 5.0, 5.0];
        let (u1, tie_sum) = u_statistic(&flat, &flat);
        assert_eq!(asymptotic_p_less(u1, 3, 3, tie_sum), 1.0);
    }
}

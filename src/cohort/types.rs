/// Comprehension scores split by study arm. Ordering within a cohort is
/// irrelevant; only aggregate statistics are computed downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CohortPair {
    pub intervention: Vec<f64>,
    pub reference: Vec<f64>,
}

impl CohortPair {
    pub fn total_len(&self) -> usize {
        self.intervention.len() + self.reference.len()
    }
}

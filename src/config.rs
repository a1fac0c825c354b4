//! # Solver configuration
//!
//! Tolerances, limits and strategy choices shared by the algorithms. The defaults are suitable for
//! the small, hand written problems this crate is meant for.

/// Column selection rule used by the Simplex method.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PivotRuleKind {
    /// Enter the column with the most negative reduced cost.
    #[default]
    MostNegative,
    /// Enter the first column with a negative reduced cost.
    FirstProfitable,
}

/// Settings for a solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Tolerance for feasibility tests, singular systems and signs of tableau entries.
    pub epsilon: f64,
    /// Maximum number of Simplex pivots before giving up.
    pub max_iterations: usize,
    /// Vertices are considered equal when their coordinates agree up to this many decimals.
    pub dedup_decimals: u32,
    /// Number of decimals in the human readable summary.
    pub display_decimals: usize,
    /// Keep a copy of every intermediate Simplex tableau.
    pub record_tableaus: bool,
    /// Which column enters the basis.
    pub pivot_rule: PivotRuleKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: 1e-9,
            max_iterations: 1_000,
            dedup_decimals: 3,
            display_decimals: 2,
            record_tableaus: false,
            pivot_rule: PivotRuleKind::default(),
        }
    }
}

impl Config {
    #[allow(missing_docs)]
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        debug_assert!(epsilon > 0_f64);

        self.epsilon = epsilon;
        self
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn with_dedup_decimals(mut self, decimals: u32) -> Self {
        self.dedup_decimals = decimals;
        self
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn with_display_decimals(mut self, decimals: usize) -> Self {
        self.display_decimals = decimals;
        self
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn with_record_tableaus(mut self, record: bool) -> Self {
        self.record_tableaus = record;
        self
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn with_pivot_rule(mut self, pivot_rule: PivotRuleKind) -> Self {
        self.pivot_rule = pivot_rule;
        self
    }
}

#[cfg(test)]
mod test {
    use crate::config::{Config, PivotRuleKind};

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.epsilon, 1e-9);
        assert_eq!(config.max_iterations, 1_000);
        assert_eq!(config.dedup_decimals, 3);
        assert_eq!(config.pivot_rule, PivotRuleKind::MostNegative);
        assert!(!config.record_tableaus);
    }

    #[test]
    fn builder() {
        let config = Config::default()
            .with_max_iterations(5)
            .with_record_tableaus(true)
            .with_pivot_rule(PivotRuleKind::FirstProfitable);
        assert_eq!(config.max_iterations, 5);
        assert!(config.record_tableaus);
        assert_eq!(config.pivot_rule, PivotRuleKind::FirstProfitable);
    }
}

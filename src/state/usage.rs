use std::collections::HashMap;

use crate::planner::constants::MAX_RECIPE_USES;

/// Per-run record of how many times each recipe has been selected.
///
/// Created empty at the start of a planning run and owned by the horizon
/// driver; never shared across runs.
#[derive(Debug, Default)]
pub struct UsageCounter {
    counts: HashMap<u32, u32>,
}

impl UsageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Times this recipe has been selected so far in the run.
    pub fn count(&self, recipe_id: u32) -> u32 {
        self.counts.get(&recipe_id).copied().unwrap_or(0)
    }

    /// Whether this recipe may still be selected.
    pub fn under_cap(&self, recipe_id: u32) -> bool {
        self.count(recipe_id) < MAX_RECIPE_USES
    }

    /// Record one selection of this recipe.
    pub fn record(&mut self, recipe_id: u32) {
        *self.counts.entry(recipe_id).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let usage = UsageCounter::new();
        assert_eq!(usage.count(7), 0);
        assert!(usage.under_cap(7));
    }

    #[test]
    fn test_cap_reached_after_two_uses() {
        let mut usage = UsageCounter::new();
        usage.record(7);
        assert!(usage.under_cap(7));

        usage.record(7);
        assert_eq!(usage.count(7), 2);
        assert!(!usage.under_cap(7));
    }

    #[test]
    fn test_counts_are_per_recipe() {
        let mut usage = UsageCounter::new();
        usage.record(1);
        usage.record(1);
        assert!(!usage.under_cap(1));
        assert!(usage.under_cap(2));
    }
}

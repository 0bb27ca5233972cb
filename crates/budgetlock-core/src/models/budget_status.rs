use serde::{Deserialize, Serialize};

/// Aggregate token load against a capacity. Always computed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub total_tokens: usize,
    pub capacity: usize,
    /// Tokens left before the capacity is reached (0 when over).
    pub remaining: usize,
    /// `total_tokens > capacity`.
    pub over_limit: bool,
    /// Gauge fill in 0.0–1.0, clamped at 1.0.
    pub utilization: f64,
}

impl BudgetStatus {
    pub fn compute(total_tokens: usize, capacity: usize) -> Self {
        let utilization = if capacity == 0 {
            if total_tokens > 0 {
                1.0
            } else {
                0.0
            }
        } else {
            (total_tokens as f64 / capacity as f64).min(1.0)
        };
        Self {
            total_tokens,
            capacity,
            remaining: capacity.saturating_sub(total_tokens),
            over_limit: total_tokens > capacity,
            utilization,
        }
    }
}

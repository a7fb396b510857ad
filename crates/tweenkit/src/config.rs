//! Context sizing configuration.

use serde::{Deserialize, Serialize};

/// Capacity hints for a [`TweenContext`](crate::TweenContext).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Initial capacity of the active tween registry.
    pub initial_active_capacity: usize,
    /// Initial capacity reserved for each kind-segregated free stack.
    pub initial_pool_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_active_capacity: 32,
            initial_pool_capacity: 8,
        }
    }
}

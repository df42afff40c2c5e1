//! MCTS configuration parameters.

use std::time::Duration;

/// Replica count used when hardware parallelism cannot be detected.
pub const FALLBACK_THREADS: usize = 4;

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Maximum select/expand/simulate/backpropagate iterations per replica.
    pub max_iterations: u32,

    /// Wall-clock budget per replica in milliseconds.
    /// Checked between iterations, so one iteration may overshoot it.
    pub max_time_ms: u64,

    /// Exploration constant `c` in `q + c * sqrt(2 ln N_parent / N)`.
    pub exploration: f64,

    /// Number of independent replicas (one OS thread each).
    /// 0 means "use the detected hardware parallelism".
    pub threads: usize,

    /// Stop a rollout after this many plies and score the position with the
    /// game's value for an unfinished state. `None` plays to the end.
    pub max_rollout_plies: Option<u32>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            max_time_ms: u64::MAX,
            exploration: 1.0,
            threads: 0,
            max_rollout_plies: None,
        }
    }
}

impl MctsConfig {
    /// Create a config bounded by iterations only.
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..Self::default()
        }
    }

    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            max_iterations: 200,
            max_time_ms: u64::MAX,
            exploration: 1.0,
            threads: 2,
            max_rollout_plies: None,
        }
    }

    /// Builder pattern: set iteration budget.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.max_iterations = n;
        self
    }

    /// Builder pattern: set time budget in milliseconds.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.max_time_ms = ms;
        self
    }

    /// Builder pattern: set exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Builder pattern: set replica count (0 = hardware parallelism).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Builder pattern: cap rollout length.
    pub fn with_max_rollout_plies(mut self, plies: u32) -> Self {
        self.max_rollout_plies = Some(plies);
        self
    }

    /// Time budget as a `Duration`.
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.max_time_ms)
    }

    /// Replica count with 0 resolved to the hardware parallelism.
    pub fn resolved_threads(&self) -> usize {
        if self.threads > 0 {
            return self.threads;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(FALLBACK_THREADS)
    }
}

//! Execution options for the shortest-path engine.

/// Default vertex count from which parallel Johnson runs pay off.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Engine configuration.
///
/// # Examples
///
/// ```
/// use pathgrid_core::Config;
///
/// let config = Config::parallel().with_parallel_threshold(16);
/// assert!(config.use_parallel(32));
/// assert!(!config.use_parallel(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Run the per-source Dijkstra passes of Johnson's algorithm on the rayon pool.
    pub parallel: bool,
    /// Smallest vertex count for which `parallel` takes effect.
    pub parallel_threshold: usize,
}

impl Config {
    /// Single-threaded execution.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Parallel Johnson for graphs at or above the default threshold.
    #[must_use]
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Self::sequential()
        }
    }

    /// Enables or disables parallel execution.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the vertex count from which parallel execution is used.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Whether a graph with `vertex_count` vertices runs in parallel.
    pub fn use_parallel(&self, vertex_count: usize) -> bool {
        self.parallel && vertex_count >= self.parallel_threshold
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::sequential()
    }
}

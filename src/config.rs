//! Strategy configuration for the operations engine

/// Controls which result representation a matrix product uses and when the
/// dense product fans out across threads
///
/// # Example
///
/// ```
/// use decimat::config::SparsityPolicy;
///
/// let policy = SparsityPolicy::default()
///     .with_max_density(0.25)
///     .with_parallel_min_rows(64);
/// assert_eq!(policy.max_density(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparsityPolicy {
    max_density: f64,
    parallel_min_rows: usize,
}

impl SparsityPolicy {
    /// Default upper bound on the explicit-entry density of a "mostly zero"
    /// sparse operand
    pub const DEFAULT_MAX_DENSITY: f64 = 0.5;

    /// Default row count at which the dense product goes parallel
    pub const DEFAULT_PARALLEL_MIN_ROWS: usize = 8;

    /// Set the largest explicit/total ratio still counted as mostly zero
    ///
    /// The value is clamped to `[0.0, 1.0]`.
    pub fn with_max_density(mut self, max_density: f64) -> Self {
        self.max_density = max_density.clamp(0.0, 1.0);
        self
    }

    /// Set the minimum number of output rows before rows are computed in
    /// parallel (only meaningful with the `rayon` feature)
    pub fn with_parallel_min_rows(mut self, rows: usize) -> Self {
        self.parallel_min_rows = rows.max(1);
        self
    }

    /// Largest explicit/total ratio counted as mostly zero
    #[inline]
    pub fn max_density(&self) -> f64 {
        self.max_density
    }

    /// Minimum output row count for parallel dense products
    #[inline]
    pub fn parallel_min_rows(&self) -> usize {
        self.parallel_min_rows
    }
}

impl Default for SparsityPolicy {
    fn default() -> Self {
        Self {
            max_density: Self::DEFAULT_MAX_DENSITY,
            parallel_min_rows: Self::DEFAULT_PARALLEL_MIN_ROWS,
        }
    }
}

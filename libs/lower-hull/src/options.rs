//! # Hull Options
//!
//! Options for a single hull computation. Defaults come from the
//! workspace `config` crate.

use config::constants::PARALLEL_MERGE_THRESHOLD;
use serde::{Deserialize, Serialize};

/// What to do when two input points share the same first coordinate.
///
/// The merge relies on a strict order along x. Ties are outside that
/// contract: with [`TiePolicy::Warn`] the driver logs a warning and keeps
/// going (results may then miss facets), with [`TiePolicy::Reject`] it
/// returns [`crate::HullError::TiedFirstCoordinate`].
///
/// ## Example
///
/// An axis-aligned square base puts two corners on `x = 0` and two on
/// `x = 4`. With the default policy the hull around the lower apex keeps
/// only two of its four facets:
///
/// ```rust
/// use lower_hull::{compute_hull, compute_hull_with_config, HullConfig, HullError, TiePolicy};
///
/// let points = [
///     [0.0, 0.0, 0.0],
///     [4.0, 0.0, 0.0],
///     [4.0, 4.0, 0.0],
///     [0.0, 4.0, 0.0],
///     [2.0, 2.0, -3.0],
/// ];
/// let hull = compute_hull(&points)?;
/// assert_eq!(hull.len(), 2);
/// assert!(hull.validate(&points).is_err());
///
/// let strict = HullConfig::default().with_tie_policy(TiePolicy::Reject);
/// assert!(matches!(
///     compute_hull_with_config(&points, &strict),
///     Err(HullError::TiedFirstCoordinate { first: 0, second: 3, .. })
/// ));
/// # Ok::<(), HullError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TiePolicy {
    /// Log a warning and break ties by input order.
    #[default]
    Warn,
    /// Refuse the input.
    Reject,
}

/// What to do when the input is not in general position.
///
/// The merge assumes no three points are collinear in the xy-projection
/// and no two sweep events coincide (four coplanar points). The sweep
/// reports when it meets either case: with [`DegeneracyPolicy::Warn`] the
/// driver logs a warning and returns the facets it found, which may then
/// miss facets or leave points below one; with [`DegeneracyPolicy::Reject`]
/// it returns [`crate::HullError::DegenerateInput`].
///
/// Degenerate input can still yield a valid hull, e.g. a square base
/// around a lower apex, so warning is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DegeneracyPolicy {
    /// Log a warning and return the facets as computed.
    #[default]
    Warn,
    /// Refuse the input.
    Reject,
}

/// Options for [`crate::compute_hull_with_config`].
///
/// ## Example
///
/// ```rust
/// use lower_hull::{HullConfig, TiePolicy};
///
/// let config = HullConfig::default()
///     .with_parallel_threshold(64)
///     .with_tie_policy(TiePolicy::Reject);
/// assert!(config.parallel);
/// assert_eq!(config.parallel_threshold, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HullConfig {
    /// Recurse into both halves concurrently for large sub-lists.
    pub parallel: bool,
    /// Smallest sub-list size that forks (see `PARALLEL_MERGE_THRESHOLD`).
    pub parallel_threshold: usize,
    /// Handling of tied first coordinates.
    pub tie_policy: TiePolicy,
    /// Handling of input outside general position.
    pub degeneracy_policy: DegeneracyPolicy,
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: PARALLEL_MERGE_THRESHOLD,
            tie_policy: TiePolicy::Warn,
            degeneracy_policy: DegeneracyPolicy::Warn,
        }
    }
}

impl HullConfig {
    /// Sequential configuration, useful for deterministic profiling.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Enables or disables parallel recursion.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the fork threshold. Values below 2 are raised to 2.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(2);
        self
    }

    /// Sets the tie policy.
    pub fn with_tie_policy(mut self, tie_policy: TiePolicy) -> Self {
        self.tie_policy = tie_policy;
        self
    }

    /// Sets the degeneracy policy.
    pub fn with_degeneracy_policy(mut self, degeneracy_policy: DegeneracyPolicy) -> Self {
        self.degeneracy_policy = degeneracy_policy;
        self
    }

    /// Whether a merge over `n` nodes should recurse in parallel.
    pub(crate) fn forks(&self, n: usize) -> bool {
        self.parallel && n >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_workspace_threshold() {
        let config = HullConfig::default();
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, PARALLEL_MERGE_THRESHOLD);
        assert_eq!(config.tie_policy, TiePolicy::Warn);
        assert_eq!(config.degeneracy_policy, DegeneracyPolicy::Warn);
    }

    #[test]
    fn test_policies_are_independent() {
        let config = HullConfig::default().with_degeneracy_policy(DegeneracyPolicy::Reject);
        assert_eq!(config.degeneracy_policy, DegeneracyPolicy::Reject);
        assert_eq!(config.tie_policy, TiePolicy::Warn);
    }

    #[test]
    fn test_sequential_never_forks() {
        let config = HullConfig::sequential().with_parallel_threshold(2);
        assert!(!config.forks(1_000_000));
    }

    #[test]
    fn test_threshold_is_clamped() {
        let config = HullConfig::default().with_parallel_threshold(0);
        assert_eq!(config.parallel_threshold, 2);
        assert!(config.forks(2));
        assert!(!config.forks(1));
    }
}

//! # Configuration Constants
//!
//! Centralized constants for the lower hull pipeline.
//!
//! ## Categories
//!
//! - **Predicates**: Values returned for triples touching an absent node
//! - **Scheduling**: When the recursive merge fans out across threads
//! - **Diagnostics**: When merge levels are worth logging
//! - **Validation**: Tolerance for checking a computed hull

// =============================================================================
// PREDICATE CONSTANTS
// =============================================================================

/// Orientation reported for any triple that includes the absent node.
///
/// The bridge search only moves when an orientation is negative, so a
/// positive constant makes every triple touching a list end read as
/// already convex.
///
/// # Example
///
/// ```rust
/// use config::constants::ABSENT_ORIENTATION;
///
/// let turn = ABSENT_ORIENTATION;
/// assert!(!(turn < 0.0));
/// ```
pub const ABSENT_ORIENTATION: f64 = 1.0;

// =============================================================================
// SCHEDULING CONSTANTS
// =============================================================================

/// Minimum sub-list size for which both recursive halves run in parallel.
///
/// Below this size the overhead of a `rayon::join` outweighs the work of
/// the merge itself.
///
/// # Example
///
/// ```rust
/// use config::constants::PARALLEL_MERGE_THRESHOLD;
///
/// fn should_fork(n: usize) -> bool {
///     n >= PARALLEL_MERGE_THRESHOLD
/// }
///
/// assert!(!should_fork(2));
/// ```
pub const PARALLEL_MERGE_THRESHOLD: usize = 4096;

// =============================================================================
// DIAGNOSTIC CONSTANTS
// =============================================================================

/// Minimum merge size that emits a `trace` log line.
///
/// Keeps trace output proportional to the number of large merges rather
/// than the number of points.
pub const MERGE_LOG_MIN: usize = 1024;

// =============================================================================
// VALIDATION CONSTANTS
// =============================================================================

/// Tolerance on barycentric coordinates when testing whether a point lies
/// over a facet's projection onto the xy-plane.
///
/// Points on a shared edge of two facets sit at a barycentric coordinate
/// of zero and must count as covered despite rounding.
///
/// # Example
///
/// ```rust
/// use config::constants::BARYCENTRIC_TOLERANCE;
///
/// let weight = -1e-12;
/// assert!(weight >= -BARYCENTRIC_TOLERANCE);
/// ```
pub const BARYCENTRIC_TOLERANCE: f64 = 1e-9;

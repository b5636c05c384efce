//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PREDICATE TESTS
// =============================================================================

#[test]
fn test_absent_orientation_is_positive() {
    assert!(ABSENT_ORIENTATION > 0.0, "absent triples must read as convex");
}

// =============================================================================
// SCHEDULING TESTS
// =============================================================================

#[test]
fn test_parallel_threshold_above_base_case() {
    assert!(PARALLEL_MERGE_THRESHOLD > 1);
}

#[test]
fn test_merge_log_min_not_above_parallel_threshold() {
    assert!(MERGE_LOG_MIN <= PARALLEL_MERGE_THRESHOLD);
}

// =============================================================================
// VALIDATION TESTS
// =============================================================================

#[test]
fn test_barycentric_tolerance_is_small_and_positive() {
    assert!(BARYCENTRIC_TOLERANCE > 0.0);
    assert!(BARYCENTRIC_TOLERANCE < 1e-6);
}

//! # Error Types
//!
//! Error types for lower hull construction and validation.
//!
//! ## Error Policy
//!
//! - Preconditions are checked once, at the driver boundary
//! - The recursive merge has no recoverable failure modes
//! - Validation failures name the offending point and facet

use crate::hull::Facet;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while computing or validating a lower hull.
///
/// ## Example
///
/// ```rust
/// use lower_hull::{compute_hull, HullError};
///
/// let empty: [[f64; 3]; 0] = [];
/// match compute_hull(&empty) {
///     Err(HullError::EmptyInput) => {}
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// No points were supplied.
    #[error("Lower hull requires at least one point")]
    EmptyInput,

    /// A coordinate is NaN or infinite.
    #[error("Point {index} has a non-finite coordinate: {point:?}")]
    NonFiniteCoordinate {
        /// Index of the point in the input.
        index: usize,
        /// The offending coordinates.
        point: [f64; 3],
    },

    /// Two points share the same first coordinate and ties are rejected.
    #[error("Points {first} and {second} share the first coordinate {x}")]
    TiedFirstCoordinate {
        /// Input index of the earlier point.
        first: usize,
        /// Input index of the later point.
        second: usize,
        /// The shared coordinate value.
        x: f64,
    },

    /// The input is not in general position and degeneracies are rejected.
    #[error("Input is not in general position: collinear projected points or coplanar events")]
    DegenerateInput,

    /// A point lies strictly below the plane of a facet.
    #[error("Point {point} lies {depth} below facet {facet:?}")]
    PointBelowFacet {
        /// Input index of the point.
        point: usize,
        /// The facet whose plane is violated.
        facet: Facet,
        /// Vertical distance below the plane.
        depth: f64,
    },

    /// A point is neither a hull vertex nor over any facet.
    #[error("Point {point} is not covered by any facet")]
    UncoveredPoint {
        /// Input index of the point.
        point: usize,
    },

    /// A facet references an index outside the input.
    #[error("Facet {facet:?} references out-of-range index {index}")]
    InvalidFacetIndex {
        /// The malformed facet.
        facet: Facet,
        /// The out-of-range index.
        index: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for lower hull operations.
pub type HullResult<T> = Result<T, HullError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let tied = HullError::TiedFirstCoordinate {
            first: 0,
            second: 2,
            x: 1.5,
        };
        assert!(tied.to_string().contains("first coordinate 1.5"));

        let below = HullError::PointBelowFacet {
            point: 4,
            facet: Facet::new(0, 1, 2),
            depth: 0.25,
        };
        assert!(below.to_string().contains("Point 4"));
        assert!(below.to_string().contains("0.25"));

        let degenerate = HullError::DegenerateInput;
        assert!(degenerate.to_string().contains("general position"));
    }

    /// Test error types are Send + Sync for use across rayon workers.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HullError>();
    }
}

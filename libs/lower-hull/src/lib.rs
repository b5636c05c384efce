//! # Lower Hull
//!
//! Lower convex hull of a 3D point set in O(n log n) by divide and
//! conquer. The output is the set of triangular facets visible from
//! below, each given as three indices into the input.
//!
//! ## Architecture
//!
//! ```text
//! points → hull (sort, link) → merge (recursive kinetic sweep)
//!        → event history → hull (replay) → facets
//! ```
//!
//! - [`active_set`]: arena-backed doubly-linked list with toggle
//! - [`predicates`]: orientation and event-time tests
//! - [`merge`]: recursive merge producing the event history
//! - [`hull`]: input normalization and facet extraction
//! - [`validate`]: executable checks of the lower-hull properties
//! - [`delaunay`]: planar Delaunay triangulation by lifting
//! - [`options`]: per-call [`HullConfig`]
//!
//! ## Input Requirements
//!
//! The merge is exact for points in general position: distinct first
//! coordinates, no three points collinear in the xy-projection, no four
//! points coplanar. Inputs outside that contract are detected and handled
//! by [`TiePolicy`] and [`DegeneracyPolicy`]; both warn by default, and
//! the facets returned for such inputs may fail [`LowerHull::validate`].
//!
//! ## Usage
//!
//! ```rust
//! use lower_hull::compute_hull;
//!
//! let points = [
//!     [0.0, 1.0, 0.0],
//!     [3.0, 0.0, 0.0],
//!     [4.0, 3.0, 0.0],
//!     [1.0, 4.0, 0.0],
//!     [2.0, 2.0, -3.0],
//! ];
//! let hull = compute_hull(&points)?;
//! assert_eq!(hull.len(), 4);
//! hull.validate(&points)?;
//! # Ok::<(), lower_hull::HullError>(())
//! ```

pub mod active_set;
pub mod delaunay;
pub mod error;
pub mod hull;
pub mod merge;
pub mod options;
pub mod predicates;
pub mod validate;

pub use error::{HullError, HullResult};
pub use hull::{compute_hull, compute_hull_with_config, Facet, LowerHull};
pub use options::{DegeneracyPolicy, HullConfig, TiePolicy};

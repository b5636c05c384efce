//! # Config Crate
//!
//! Centralized configuration constants for the lower hull workspace.
//! Every tunable used by the merge sweep, the driver and the validation
//! helpers is defined here so the crates agree on a single value.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ABSENT_ORIENTATION, PARALLEL_MERGE_THRESHOLD};
//!
//! // Triples touching an absent node always read as convex
//! assert!(ABSENT_ORIENTATION > 0.0);
//!
//! // Small sub-lists recurse sequentially
//! let n = 16;
//! assert!(n < PARALLEL_MERGE_THRESHOLD);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure values and tiny helpers only
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;

//! FoundationError: unified error type for tb-foundation public APIs
//!
//! This error type is used throughout the crate to provide robust,
//! non-panicking error handling for foundation construction. Trimming and
//! index compaction are total functions over a well-formed [`Foundation`]
//! and never produce errors.
//!
//! [`Foundation`]: crate::foundation::Foundation

use thiserror::Error;

/// Unified error type for foundation construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FoundationError {
    /// The lattice basis matrix is singular (or near-singular) at the
    /// declared dimensionality, the shape has no vertices, or a requested
    /// extent is non-positive. The bounding-box solve cannot proceed; no
    /// partial foundation is returned.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// A sublattice hopping references a target outside the lattice's own
    /// definition (e.g. a sublattice id past the end of the sublattice
    /// list). Expected never to occur with valid input.
    #[error("inconsistent lattice: {0}")]
    InconsistentLattice(String),
}

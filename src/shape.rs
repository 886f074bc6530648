//! Containment regions used to clip a lattice foundation.
//!
//! A shape is owned by the caller; the foundation only consumes its vertex
//! hull (for bounding-box estimation), its offset, and an elementwise
//! point-in-shape predicate. How shapes are parameterized is out of scope
//! here.

use crate::lattice::Cartesian;

/// A containment region over Cartesian space.
///
/// The vertices do not have to describe the region exactly; they only have
/// to enclose it, since the bounding-box pass pads the vertex hull by one
/// lattice cell on every axis anyway.
pub trait Shape {
    /// Vertices enclosing the region, in Cartesian coordinates.
    fn vertices(&self) -> &[Cartesian];

    /// Cartesian offset of the region origin; site generation is anchored
    /// relative to this point.
    fn offset(&self) -> Cartesian;

    /// Elementwise containment test: one flag per input position.
    fn contains(&self, positions: &[Cartesian]) -> Vec<bool>;
}

//! # tb-foundation
//!
//! tb-foundation builds the discrete geometric scaffold of a periodic
//! lattice model clipped to an arbitrary spatial shape, for use by
//! tight-binding Hamiltonian assembly. It enumerates candidate lattice
//! sites inside a bounding region, marks which fall inside a user-supplied
//! shape, trims under-coordinated boundary sites with a cascading
//! invalidation pass, and compacts the survivors into a dense 0-based
//! index map.
//!
//! ## Pipeline
//! - Bounding-box estimation from the shape's vertices in lattice-basis
//!   coordinates, with ±1 padding for integer truncation.
//! - Bulk generation of Cartesian site positions in a fixed canonical
//!   order that every later pass depends on.
//! - Shape clipping via an elementwise containment predicate.
//! - Edge trimming: worklist-driven cascading removal of sites whose live
//!   neighbor count drops below the lattice's `min_neighbors`.
//! - Hamiltonian index compaction over the surviving sites.
//!
//! ## Determinism
//!
//! Everything here is synchronous and deterministic: a finite numeric
//! computation bounded by the site count. The optional `rayon-support`
//! feature parallelizes only the neighbor-counting pass, which has no
//! cross-site writes; the trimming cascade stays sequential.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! tb-foundation = "0.3"
//! # Optional: features = ["rayon-support"]
//! ```
//!
//! Shape authoring, lattice model authoring, and Hamiltonian assembly are
//! external: this crate consumes a [`Lattice`](lattice::Lattice) and a
//! [`Shape`](shape::Shape) and produces a
//! [`Foundation`](foundation::Foundation) plus
//! [`HamiltonianIndices`](foundation::HamiltonianIndices).

pub mod error;
pub mod foundation;
pub mod lattice;
pub mod shape;

pub use error::FoundationError;

/// A convenient prelude to import the most-used types:
pub mod prelude {
    pub use crate::error::FoundationError;
    pub use crate::foundation::{Foundation, HamiltonianIndices, Site};
    pub use crate::lattice::{Cartesian, Hopping, Index3D, Lattice, Sublattice};
    pub use crate::shape::Shape;
}

//! Periodic lattice description: basis vectors, sublattices and hoppings.
//!
//! A [`Lattice`] is the read-only input to foundation construction. It is
//! validated once at build time so that every downstream pass (position
//! generation, neighbor counting, edge trimming) can index into it without
//! further checks.
//!
//! This module provides:
//! - [`Index3D`]: an integer cell-coordinate triple; unused dimensions are
//!   fixed at extent 1.
//! - [`Hopping`]: a directed structural bond encoded as a relative cell
//!   offset plus a destination sublattice id.
//! - [`Sublattice`]: a site position within the unit cell and its hoppings.
//! - [`Lattice`]: up to 3 basis vectors, the sublattice list and the
//!   `min_neighbors` trimming threshold.

use crate::error::FoundationError;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Cartesian coordinates of a site or basis vector.
pub type Cartesian = Vector3<f64>;

/// Integer triple of lattice-cell coordinates or extents.
///
/// Axes beyond the lattice dimensionality carry extent 1 (coordinate 0), so
/// 1D and 2D lattices reuse the same 3D bookkeeping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Index3D(pub [i32; 3]);

impl Index3D {
    /// Index filled with the same value on all three axes.
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Index3D([v, v, v])
    }

    /// Product of the three extents, as a site-count factor.
    #[inline]
    pub fn product(&self) -> i64 {
        self.0.iter().map(|&x| i64::from(x)).product()
    }
}

impl std::ops::Index<usize> for Index3D {
    type Output = i32;
    #[inline]
    fn index(&self, axis: usize) -> &i32 {
        &self.0[axis]
    }
}

impl std::ops::IndexMut<usize> for Index3D {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut i32 {
        &mut self.0[axis]
    }
}

impl std::ops::Add for Index3D {
    type Output = Index3D;
    #[inline]
    fn add(self, rhs: Index3D) -> Index3D {
        Index3D([self[0] + rhs[0], self[1] + rhs[1], self[2] + rhs[2]])
    }
}

impl From<[i32; 3]> for Index3D {
    #[inline]
    fn from(raw: [i32; 3]) -> Self {
        Index3D(raw)
    }
}

/// A directed structural bond from a site to a neighboring cell's
/// sublattice site.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hopping {
    /// Relative cell offset of the neighbor, in lattice coordinates.
    pub relative_index: Index3D,
    /// Sublattice id of the neighbor within its cell.
    pub to_sublattice: usize,
}

/// A distinct site position within one repeating unit cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sublattice {
    /// Cartesian offset of this site from the cell origin.
    pub offset: Cartesian,
    /// Outgoing structural bonds, in declaration order.
    pub hoppings: Vec<Hopping>,
}

/// A periodic lattice model: basis vectors, sublattices and the minimum
/// neighbor count a site must keep to survive edge trimming.
///
/// Immutable once constructed. Foundations borrow a `Lattice` rather than
/// copying it; the lattice must outlive every foundation built from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    vectors: Vec<Cartesian>,
    sublattices: Vec<Sublattice>,
    min_neighbors: i16,
}

impl Lattice {
    /// Build a validated lattice.
    ///
    /// # Errors
    ///
    /// - [`FoundationError::InvalidGeometry`] if there are no basis vectors,
    ///   more than 3, or no sublattices.
    /// - [`FoundationError::InconsistentLattice`] if a hopping's
    ///   `to_sublattice` is out of range.
    pub fn new(
        vectors: Vec<Cartesian>,
        sublattices: Vec<Sublattice>,
        min_neighbors: i16,
    ) -> Result<Self, FoundationError> {
        if vectors.is_empty() || vectors.len() > 3 {
            return Err(FoundationError::InvalidGeometry(format!(
                "expected 1 to 3 basis vectors, got {}",
                vectors.len()
            )));
        }
        if sublattices.is_empty() {
            return Err(FoundationError::InvalidGeometry(
                "lattice must declare at least one sublattice".into(),
            ));
        }
        for (id, sub) in sublattices.iter().enumerate() {
            for hopping in &sub.hoppings {
                if hopping.to_sublattice >= sublattices.len() {
                    return Err(FoundationError::InconsistentLattice(format!(
                        "sublattice {id}: hopping targets sublattice {} but only {} exist",
                        hopping.to_sublattice,
                        sublattices.len()
                    )));
                }
            }
        }
        Ok(Self {
            vectors,
            sublattices,
            min_neighbors,
        })
    }

    /// Number of declared basis vectors (lattice dimensionality, 1 to 3).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.vectors.len()
    }

    /// Basis vectors in declaration order.
    #[inline]
    pub fn vectors(&self) -> &[Cartesian] {
        &self.vectors
    }

    /// Sublattices in declaration order.
    #[inline]
    pub fn sublattices(&self) -> &[Sublattice] {
        &self.sublattices
    }

    /// Minimum live neighbor count a site must keep during edge trimming.
    #[inline]
    pub fn min_neighbors(&self) -> i16 {
        self.min_neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_sublattice() -> Sublattice {
        Sublattice {
            offset: Cartesian::zeros(),
            hoppings: vec![
                Hopping {
                    relative_index: Index3D([1, 0, 0]),
                    to_sublattice: 0,
                },
                Hopping {
                    relative_index: Index3D([-1, 0, 0]),
                    to_sublattice: 0,
                },
            ],
        }
    }

    #[test]
    fn rejects_empty_basis() {
        let err = Lattice::new(vec![], vec![chain_sublattice()], 0).unwrap_err();
        assert!(matches!(err, FoundationError::InvalidGeometry(_)));
    }

    #[test]
    fn rejects_hopping_to_missing_sublattice() {
        let mut sub = chain_sublattice();
        sub.hoppings[0].to_sublattice = 7;
        let err = Lattice::new(vec![Cartesian::new(1.0, 0.0, 0.0)], vec![sub], 0).unwrap_err();
        assert!(matches!(err, FoundationError::InconsistentLattice(_)));
    }

    #[test]
    fn index3d_product_and_add() {
        let a = Index3D([2, 3, 1]);
        assert_eq!(a.product(), 6);
        assert_eq!(a + Index3D([1, -1, 0]), Index3D([3, 2, 1]));
    }
}

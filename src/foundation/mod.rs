//! Foundation: the candidate-site scaffold of a clipped lattice model.
//!
//! A [`Foundation`] holds every lattice site generated inside a bounding
//! region, a per-site validity flag, and the fixed canonical ordering the
//! rest of the pipeline depends on. Construction runs the full pipeline:
//! bounding-box estimation, position generation, shape clipping and edge
//! trimming. A finished foundation is read-mostly; only the validity flags
//! may still be mutated, and only by a single owner at a time.
//!
//! Canonical site order: cell axes a, b, c from outer to inner, then the
//! sublattice index. The flat index of cell `(a, b, c)`, sublattice `s` is
//! `((a * size[1] + b) * size[2] + c) * num_sublattices + s`.

pub mod bounds;
pub mod indices;
pub mod neighbors;
pub mod positions;
pub mod trim;

use crate::error::FoundationError;
use crate::lattice::{Cartesian, Hopping, Index3D, Lattice};
use crate::shape::Shape;

pub use bounds::find_bounds;
pub use indices::HamiltonianIndices;
pub use neighbors::count_neighbors;
pub use positions::generate_positions;

/// The generated candidate sites of a lattice model: positions plus a
/// validity flag per site, in canonical order.
///
/// Borrows its [`Lattice`]; the lattice must outlive the foundation.
#[derive(Clone, Debug)]
pub struct Foundation<'l> {
    lattice: &'l Lattice,
    size: Index3D,
    size_n: usize,
    num_sites: usize,
    positions: Vec<Cartesian>,
    is_valid: Vec<bool>,
}

impl<'l> Foundation<'l> {
    /// Build a foundation of explicit extent, centered at the coordinate
    /// origin. All sites start valid and no trimming is performed.
    ///
    /// # Errors
    ///
    /// [`FoundationError::InvalidGeometry`] if any extent is non-positive.
    pub fn from_primitive(lattice: &'l Lattice, size: Index3D) -> Result<Self, FoundationError> {
        if size.0.iter().any(|&extent| extent <= 0) {
            return Err(FoundationError::InvalidGeometry(format!(
                "primitive extent must be positive on every axis, got {:?}",
                size.0
            )));
        }

        let mut width = Cartesian::zeros();
        for (axis, vector) in lattice.vectors().iter().enumerate() {
            width += f64::from(size[axis] - 1) * vector;
        }
        let origin = -width / 2.0;

        let positions = generate_positions(origin, size, lattice);
        let num_sites = positions.len();
        Ok(Self {
            lattice,
            size,
            size_n: lattice.sublattices().len(),
            num_sites,
            positions,
            is_valid: vec![true; num_sites],
        })
    }

    /// Build a foundation clipped to a shape.
    ///
    /// Runs the full pipeline: bound the shape's vertices in lattice
    /// coordinates, generate positions over the padded grid, mark validity
    /// with the shape's containment predicate, then trim under-coordinated
    /// boundary sites until the valid set is stable.
    ///
    /// # Errors
    ///
    /// [`FoundationError::InvalidGeometry`] if the shape has no vertices or
    /// the lattice basis is singular.
    pub fn from_shape<S: Shape + ?Sized>(
        lattice: &'l Lattice,
        shape: &S,
    ) -> Result<Self, FoundationError> {
        let (lower, upper) = find_bounds(shape, lattice)?;
        let size = Index3D([
            upper[0] - lower[0] + 1,
            upper[1] - lower[1] + 1,
            upper[2] - lower[2] + 1,
        ]);

        let mut origin = shape.offset();
        for (axis, vector) in lattice.vectors().iter().enumerate() {
            origin += f64::from(lower[axis]) * vector;
        }

        let positions = generate_positions(origin, size, lattice);
        let is_valid = shape.contains(&positions);
        debug_assert_eq!(is_valid.len(), positions.len());

        let num_sites = positions.len();
        let mut foundation = Self {
            lattice,
            size,
            size_n: lattice.sublattices().len(),
            num_sites,
            positions,
            is_valid,
        };
        foundation.trim_edges();
        log::debug!(
            "foundation from shape: grid {:?}, {} of {} sites valid after trimming",
            size.0,
            foundation.is_valid.iter().filter(|&&v| v).count(),
            num_sites
        );
        Ok(foundation)
    }

    /// The lattice this foundation was generated from.
    #[inline]
    pub fn lattice(&self) -> &'l Lattice {
        self.lattice
    }

    /// Cell-grid extent along each axis.
    #[inline]
    pub fn size(&self) -> Index3D {
        self.size
    }

    /// Number of sublattices per cell.
    #[inline]
    pub fn num_sublattices(&self) -> usize {
        self.size_n
    }

    /// Total site count, valid or not.
    #[inline]
    pub fn num_sites(&self) -> usize {
        self.num_sites
    }

    /// Cartesian positions of all sites, in canonical order.
    #[inline]
    pub fn positions(&self) -> &[Cartesian] {
        &self.positions
    }

    /// Validity flags of all sites, in canonical order.
    #[inline]
    pub fn validity(&self) -> &[bool] {
        &self.is_valid
    }

    /// Whether the site at `idx` is currently valid.
    #[inline]
    pub fn is_valid(&self, idx: usize) -> bool {
        self.is_valid[idx]
    }

    /// Set the validity flag of the site at `idx`.
    #[inline]
    pub fn set_valid(&mut self, idx: usize, valid: bool) {
        self.is_valid[idx] = valid;
    }

    /// Transient view of the site at flat index `idx`.
    #[inline]
    pub fn site(&self, idx: usize) -> Site<'_, 'l> {
        debug_assert!(idx < self.num_sites);
        Site {
            foundation: self,
            idx,
        }
    }

    /// Iterate all sites in canonical order.
    pub fn sites(&self) -> impl Iterator<Item = Site<'_, 'l>> {
        (0..self.num_sites).map(move |idx| self.site(idx))
    }

    /// Iterate only the sites belonging to sublattice `sub`.
    pub fn sublattice_sites(&self, sub: usize) -> impl Iterator<Item = Site<'_, 'l>> {
        debug_assert!(sub < self.size_n);
        (sub..self.num_sites)
            .step_by(self.size_n)
            .map(move |idx| self.site(idx))
    }

    /// Cell coordinate of the site at flat index `idx`.
    pub fn cell_index(&self, idx: usize) -> Index3D {
        let cell = (idx / self.size_n) as i32;
        let c = cell % self.size[2];
        let b = (cell / self.size[2]) % self.size[1];
        let a = cell / (self.size[2] * self.size[1]);
        Index3D([a, b, c])
    }

    /// Sublattice id of the site at flat index `idx`.
    #[inline]
    pub fn sublattice_id(&self, idx: usize) -> usize {
        idx % self.size_n
    }

    /// Flat index of the site a hopping leads to from `idx`, or `None` when
    /// the target cell falls outside the generated grid.
    pub fn neighbor_of(&self, idx: usize, hopping: &Hopping) -> Option<usize> {
        let cell = self.cell_index(idx) + hopping.relative_index;
        for axis in 0..3 {
            if cell[axis] < 0 || cell[axis] >= self.size[axis] {
                return None;
            }
        }
        let flat_cell = (cell[0] * self.size[1] + cell[1]) * self.size[2] + cell[2];
        Some(flat_cell as usize * self.size_n + hopping.to_sublattice)
    }

    /// Remove sites whose live neighbor count falls below the lattice's
    /// `min_neighbors`, cascading until the valid set is stable. Total;
    /// running it again on an already-trimmed foundation changes nothing.
    pub fn trim_edges(&mut self) {
        trim::trim_edges(self);
    }

    /// Dense per-site sublattice ids in canonical order, for downstream
    /// assembly passes that label sites without re-deriving ids.
    pub fn sublattice_ids(&self) -> Vec<u8> {
        debug_assert!(self.size_n <= u8::MAX as usize + 1);
        (0..self.num_sites)
            .map(|idx| (idx % self.size_n) as u8)
            .collect()
    }
}

/// Transient view of one site: a foundation reference plus a flat index.
///
/// Cheap to copy; carries no state of its own. Validity writes go through
/// [`Foundation::set_valid`].
#[derive(Copy, Clone)]
pub struct Site<'f, 'l> {
    foundation: &'f Foundation<'l>,
    idx: usize,
}

impl<'f, 'l> Site<'f, 'l> {
    /// Flat index of this site in canonical order.
    #[inline]
    pub fn idx(&self) -> usize {
        self.idx
    }

    /// Cell coordinate of this site.
    #[inline]
    pub fn cell_index(&self) -> Index3D {
        self.foundation.cell_index(self.idx)
    }

    /// Sublattice id of this site.
    #[inline]
    pub fn sublattice_id(&self) -> usize {
        self.foundation.sublattice_id(self.idx)
    }

    /// Cartesian position of this site.
    #[inline]
    pub fn position(&self) -> Cartesian {
        self.foundation.positions[self.idx]
    }

    /// Current validity flag of this site.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.foundation.is_valid[self.idx]
    }

    /// Invoke `f` for every in-grid neighbor of this site, paired with the
    /// hopping that reaches it. Out-of-grid neighbors are skipped entirely.
    pub fn for_each_neighbor(&self, mut f: impl FnMut(Site<'f, 'l>, &Hopping)) {
        let sublattice = &self.foundation.lattice.sublattices()[self.sublattice_id()];
        for hopping in &sublattice.hoppings {
            if let Some(neighbor) = self.foundation.neighbor_of(self.idx, hopping) {
                f(self.foundation.site(neighbor), hopping);
            }
        }
    }
}

impl std::fmt::Debug for Site<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("idx", &self.idx)
            .field("cell", &self.cell_index().0)
            .field("sublattice", &self.sublattice_id())
            .field("valid", &self.is_valid())
            .finish()
    }
}

//! Bulk generation of Cartesian site positions for a cell grid.

use crate::lattice::{Cartesian, Index3D, Lattice};

/// Expand an integer cell grid into one Cartesian position per site.
///
/// Output length is `size.product() * num_sublattices`, in canonical site
/// order: cell axes a, b, c from outer to inner, then the sublattice index.
/// The nested loops reuse the partial sums `pa` and `pb` across the inner
/// axes; the nesting order is load-bearing and must match the canonical
/// order assumed by every downstream pass.
pub fn generate_positions(origin: Cartesian, size: Index3D, lattice: &Lattice) -> Vec<Cartesian> {
    let vectors = lattice.vectors();
    let vector = |axis: usize| -> Cartesian {
        vectors.get(axis).copied().unwrap_or_else(Cartesian::zeros)
    };

    let num_sites = size.product() * lattice.sublattices().len() as i64;
    let mut positions = Vec::with_capacity(num_sites as usize);

    for a in 0..size[0] {
        let pa = origin + f64::from(a) * vector(0);
        for b in 0..size[1] {
            let pb = if b == 0 { pa } else { pa + f64::from(b) * vector(1) };
            for c in 0..size[2] {
                let pc = if c == 0 { pb } else { pb + f64::from(c) * vector(2) };
                for sub in lattice.sublattices() {
                    positions.push(pc + sub.offset);
                }
            }
        }
    }

    positions
}

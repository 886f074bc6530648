//! Structural neighbor counts over a finite cell grid.

use crate::foundation::Foundation;

/// Count, for every site, the neighbors that exist within the generated
/// grid. This is a structural count: current validity is ignored, so it is
/// the maximum each site could have if every in-grid neighbor were valid.
///
/// Each site starts from its sublattice's declared hopping count and loses
/// one for every hopping whose target cell falls outside the grid. With the
/// `rayon-support` feature the sites are counted in parallel; there are no
/// cross-site writes.
pub fn count_neighbors(foundation: &Foundation<'_>) -> Vec<i16> {
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        (0..foundation.num_sites())
            .into_par_iter()
            .map(|idx| structural_count(foundation, idx))
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        (0..foundation.num_sites())
            .map(|idx| structural_count(foundation, idx))
            .collect()
    }
}

fn structural_count(foundation: &Foundation<'_>, idx: usize) -> i16 {
    let sublattice = &foundation.lattice().sublattices()[foundation.sublattice_id(idx)];
    let mut count = sublattice.hoppings.len() as i16;
    for hopping in &sublattice.hoppings {
        if foundation.neighbor_of(idx, hopping).is_none() {
            count -= 1;
        }
    }
    count
}

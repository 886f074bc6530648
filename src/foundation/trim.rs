//! Edge trimming: cascading removal of under-coordinated boundary sites.
//!
//! Sites invalidated by the shape test seed a worklist. Clearing a site
//! decrements the live neighbor count of each of its still-valid in-grid
//! neighbors; a neighbor whose count drops below the lattice's
//! `min_neighbors` is invalidated and pushed in turn, so the removal can
//! cascade arbitrarily deep into the interior. The final valid set is a
//! fixed point and does not depend on the processing order, only on whether
//! each site's live count ever drops below the threshold.
//!
//! An explicit stack replaces the recursion of the obvious formulation;
//! cascade chains can run the length of the lattice, which would otherwise
//! grow the call stack without bound.

use crate::foundation::{count_neighbors, Foundation};

/// Trim the foundation's valid set to a stable configuration, in place.
///
/// Total: never fails and never revalidates a site. A second run on an
/// already-trimmed foundation is a no-op. Termination: every popped site is
/// either skipped (live count already zero, the already-processed guard) or
/// strictly decreases the total live-count mass, which is finite and
/// bounded below by zero.
pub fn trim_edges(foundation: &mut Foundation<'_>) {
    let mut live = count_neighbors(foundation);
    let min_neighbors = foundation.lattice().min_neighbors();

    let mut worklist: Vec<usize> = (0..foundation.num_sites())
        .filter(|&idx| !foundation.is_valid(idx))
        .collect();
    let seeds = worklist.len();

    let mut removed = 0usize;
    while let Some(idx) = worklist.pop() {
        if live[idx] == 0 {
            continue;
        }

        let sublattice_id = foundation.sublattice_id(idx);
        let hoppings = &foundation.lattice().sublattices()[sublattice_id].hoppings;
        for hopping in hoppings {
            let Some(neighbor) = foundation.neighbor_of(idx, hopping) else {
                continue;
            };
            if !foundation.is_valid(neighbor) {
                continue;
            }
            live[neighbor] -= 1;
            if live[neighbor] < min_neighbors {
                foundation.set_valid(neighbor, false);
                removed += 1;
                worklist.push(neighbor);
            }
        }
        live[idx] = 0;
    }

    if removed > 0 {
        log::debug!("edge trimming removed {removed} sites (from {seeds} invalid seeds)");
    }
}

//! Dense re-indexing of valid sites for Hamiltonian assembly.

use crate::foundation::Foundation;
use serde::{Deserialize, Serialize};

/// A compacted 0-based index over the valid sites of a foundation.
///
/// Valid sites receive consecutive indices in canonical site order starting
/// at 0; invalid sites receive the sentinel -1. Computed once from a
/// foundation snapshot and owns its own arrays; it goes stale if the
/// foundation's validity flags are mutated afterward, which is the caller's
/// responsibility to avoid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HamiltonianIndices {
    indices: Vec<i32>,
    num_valid_sites: usize,
}

impl HamiltonianIndices {
    /// Assign Hamiltonian indices to all valid sites, in one pass.
    pub fn new(foundation: &Foundation<'_>) -> Self {
        let mut indices = vec![-1; foundation.num_sites()];
        let mut num_valid_sites = 0usize;
        for (idx, slot) in indices.iter_mut().enumerate() {
            if foundation.is_valid(idx) {
                *slot = num_valid_sites as i32;
                num_valid_sites += 1;
            }
        }
        Self {
            indices,
            num_valid_sites,
        }
    }

    /// Compacted index of the site at flat index `idx`, or -1 when the site
    /// is invalid.
    #[inline]
    pub fn index(&self, idx: usize) -> i32 {
        self.indices[idx]
    }

    /// Compacted index of the site at flat index `idx`, or `None` when the
    /// site is invalid.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<usize> {
        let i = self.indices[idx];
        (i >= 0).then_some(i as usize)
    }

    /// The full index array, one entry per site in canonical order.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.indices
    }

    /// Number of valid sites that received an index.
    #[inline]
    pub fn num_valid_sites(&self) -> usize {
        self.num_valid_sites
    }
}

use proptest::prelude::*;
use tb_foundation::prelude::*;

fn hop(relative_index: [i32; 3], to_sublattice: usize) -> Hopping {
    Hopping {
        relative_index: Index3D(relative_index),
        to_sublattice,
    }
}

fn square_lattice(min_neighbors: i16) -> Lattice {
    let sub = Sublattice {
        offset: Cartesian::zeros(),
        hoppings: vec![
            hop([1, 0, 0], 0),
            hop([-1, 0, 0], 0),
            hop([0, 1, 0], 0),
            hop([0, -1, 0], 0),
        ],
    };
    Lattice::new(
        vec![Cartesian::new(1.0, 0.0, 0.0), Cartesian::new(0.0, 1.0, 0.0)],
        vec![sub],
        min_neighbors,
    )
    .unwrap()
}

/// Rectangle `[0, width] x [0, height]` with loose edge tolerance.
struct Rect {
    width: f64,
    height: f64,
    vertices: [Cartesian; 4],
}

impl Rect {
    fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            vertices: [
                Cartesian::new(0.0, 0.0, 0.0),
                Cartesian::new(width, 0.0, 0.0),
                Cartesian::new(width, height, 0.0),
                Cartesian::new(0.0, height, 0.0),
            ],
        }
    }
}

impl Shape for Rect {
    fn vertices(&self) -> &[Cartesian] {
        &self.vertices
    }
    fn offset(&self) -> Cartesian {
        Cartesian::zeros()
    }
    fn contains(&self, positions: &[Cartesian]) -> Vec<bool> {
        positions
            .iter()
            .map(|p| {
                p.x >= -0.1 && p.x <= self.width + 0.1 && p.y >= -0.1 && p.y <= self.height + 0.1
            })
            .collect()
    }
}

fn valid_neighbor_count(foundation: &Foundation<'_>, idx: usize) -> i16 {
    let mut n = 0i16;
    foundation.site(idx).for_each_neighbor(|neighbor, _| {
        if neighbor.is_valid() {
            n += 1;
        }
    });
    n
}

proptest! {
    /// Trimming only ever shrinks the valid set, and a second pass is a
    /// no-op, for arbitrary grids and arbitrary invalid seeds.
    #[test]
    fn prop_trim_shrinks_and_converges(
        width in 1i32..8,
        height in 1i32..8,
        min_neighbors in 0i16..5,
        seed_mask in proptest::collection::vec(any::<bool>(), 64),
    ) {
        let lattice = square_lattice(min_neighbors);
        let mut foundation =
            Foundation::from_primitive(&lattice, Index3D([width, height, 1])).unwrap();
        for idx in 0..foundation.num_sites() {
            if seed_mask[idx % seed_mask.len()] {
                foundation.set_valid(idx, false);
            }
        }
        let before: Vec<bool> = foundation.validity().to_vec();

        foundation.trim_edges();
        let after_first: Vec<bool> = foundation.validity().to_vec();
        for (a, b) in after_first.iter().zip(&before) {
            prop_assert!(!*a || *b, "trimming revalidated a site");
        }

        foundation.trim_edges();
        prop_assert_eq!(foundation.validity(), &after_first[..]);
    }

    /// Shape-constructed foundations reach the documented fixed point:
    /// every surviving site keeps at least `min_neighbors` valid neighbors.
    #[test]
    fn prop_shape_trim_reaches_fixed_point(
        width in 0i32..7,
        height in 0i32..7,
        min_neighbors in 0i16..5,
    ) {
        let lattice = square_lattice(min_neighbors);
        let shape = Rect::new(f64::from(width), f64::from(height));
        let foundation = Foundation::from_shape(&lattice, &shape).unwrap();

        for idx in 0..foundation.num_sites() {
            if foundation.is_valid(idx) {
                let live = valid_neighbor_count(&foundation, idx);
                prop_assert!(
                    live >= min_neighbors,
                    "valid site {} kept only {} of {} required neighbors",
                    idx, live, min_neighbors
                );
            }
        }
    }
}

use tb_foundation::prelude::*;

fn hop(relative_index: [i32; 3], to_sublattice: usize) -> Hopping {
    Hopping {
        relative_index: Index3D(relative_index),
        to_sublattice,
    }
}

fn chain_lattice() -> Lattice {
    let sub = Sublattice {
        offset: Cartesian::zeros(),
        hoppings: vec![hop([1, 0, 0], 0), hop([-1, 0, 0], 0)],
    };
    Lattice::new(vec![Cartesian::new(1.0, 0.0, 0.0)], vec![sub], 0).unwrap()
}

#[test]
fn compaction_assigns_sequential_indices_to_valid_sites() {
    let lattice = chain_lattice();
    let mut foundation = Foundation::from_primitive(&lattice, Index3D([5, 1, 1])).unwrap();
    foundation.set_valid(1, false);
    foundation.set_valid(4, false);

    let indices = HamiltonianIndices::new(&foundation);
    assert_eq!(indices.as_slice(), &[0, -1, 1, 2, -1]);
    assert_eq!(indices.num_valid_sites(), 3);

    assert_eq!(indices.index(2), 1);
    assert_eq!(indices.index(4), -1);
    assert_eq!(indices.get(3), Some(2));
    assert_eq!(indices.get(1), None);
}

#[test]
fn all_valid_foundation_indexes_identically() {
    let lattice = chain_lattice();
    let foundation = Foundation::from_primitive(&lattice, Index3D([4, 1, 1])).unwrap();
    let indices = HamiltonianIndices::new(&foundation);
    assert_eq!(indices.as_slice(), &[0, 1, 2, 3]);
    assert_eq!(indices.num_valid_sites(), foundation.num_sites());
}

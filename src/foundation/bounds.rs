//! Integer bounding box of a shape in lattice-basis coordinates.

use crate::error::FoundationError;
use crate::lattice::{Index3D, Lattice};
use crate::shape::Shape;
use nalgebra::{DMatrix, DVector};

/// Compute the lattice-coordinate bounding box enclosing all shape vertices.
///
/// Each vertex `p` is translated into lattice vector coordinates `v` by
/// solving `A * v = p`, where the columns of `A` are the first `ndim`
/// components of the basis vectors. The solution is truncated toward zero
/// and the declared axes are padded by -1/+1 to compensate for the
/// truncation; a vertex between two cells must not be excluded. Axes beyond
/// `ndim` have no extent and stay at 0.
///
/// # Errors
///
/// [`FoundationError::InvalidGeometry`] if the shape has no vertices or the
/// basis matrix is singular at the declared dimensionality.
pub fn find_bounds<S: Shape + ?Sized>(
    shape: &S,
    lattice: &Lattice,
) -> Result<(Index3D, Index3D), FoundationError> {
    let vertices = shape.vertices();
    if vertices.is_empty() {
        return Err(FoundationError::InvalidGeometry(
            "shape has no vertices to bound".into(),
        ));
    }

    let ndim = lattice.ndim();
    let basis = DMatrix::from_fn(ndim, ndim, |row, col| lattice.vectors()[col][row]);
    let qr = basis.col_piv_qr();

    let mut lower = Index3D::splat(i32::MAX);
    let mut upper = Index3D::splat(i32::MIN);
    for point in vertices {
        let p = DVector::from_fn(ndim, |row, _| point[row]);
        let v = qr.solve(&p).ok_or_else(|| {
            FoundationError::InvalidGeometry(format!(
                "lattice basis matrix is singular in {ndim} dimension(s)"
            ))
        })?;

        for axis in 0..ndim {
            // Truncation toward zero, matching the padding below.
            let cell = v[axis] as i32;
            lower[axis] = lower[axis].min(cell);
            upper[axis] = upper[axis].max(cell);
        }
    }

    for axis in 0..ndim {
        lower[axis] -= 1;
        upper[axis] += 1;
    }
    for axis in ndim..3 {
        lower[axis] = 0;
        upper[axis] = 0;
    }

    log::trace!("shape bounds: {:?} ..= {:?}", lower.0, upper.0);
    Ok((lower, upper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{Cartesian, Hopping, Sublattice};

    struct Hull(Vec<Cartesian>);

    impl Shape for Hull {
        fn vertices(&self) -> &[Cartesian] {
            &self.0
        }
        fn offset(&self) -> Cartesian {
            Cartesian::zeros()
        }
        fn contains(&self, positions: &[Cartesian]) -> Vec<bool> {
            vec![true; positions.len()]
        }
    }

    fn square_lattice() -> Lattice {
        let sub = Sublattice {
            offset: Cartesian::zeros(),
            hoppings: vec![Hopping {
                relative_index: Index3D([1, 0, 0]),
                to_sublattice: 0,
            }],
        };
        Lattice::new(
            vec![Cartesian::new(1.0, 0.0, 0.0), Cartesian::new(0.0, 1.0, 0.0)],
            vec![sub],
            0,
        )
        .unwrap()
    }

    #[test]
    fn pads_declared_axes_by_one() {
        let hull = Hull(vec![
            Cartesian::new(0.0, 0.0, 0.0),
            Cartesian::new(3.0, 2.0, 0.0),
        ]);
        let (lower, upper) = find_bounds(&hull, &square_lattice()).unwrap();
        assert_eq!(lower, Index3D([-1, -1, 0]));
        assert_eq!(upper, Index3D([4, 3, 0]));
    }

    #[test]
    fn empty_shape_is_invalid_geometry() {
        let err = find_bounds(&Hull(vec![]), &square_lattice()).unwrap_err();
        assert!(matches!(err, FoundationError::InvalidGeometry(_)));
    }

    #[test]
    fn singular_basis_is_invalid_geometry() {
        let sub = Sublattice {
            offset: Cartesian::zeros(),
            hoppings: vec![],
        };
        let degenerate = Lattice::new(
            vec![Cartesian::new(1.0, 0.0, 0.0), Cartesian::new(2.0, 0.0, 0.0)],
            vec![sub],
            0,
        )
        .unwrap();
        let hull = Hull(vec![Cartesian::new(0.5, 0.5, 0.0)]);
        let err = find_bounds(&hull, &degenerate).unwrap_err();
        assert!(matches!(err, FoundationError::InvalidGeometry(_)));
    }
}

//! Structured meshes of a rectangle

use crate::reference_element::RefEl;
use crate::traits::Builder;
use crate::types::{Error, Result, DIM_WORLD};
use log::debug;

/// The shape of the cells of a structured mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellShape {
    /// Split every grid square into two right triangles along its diagonal
    #[default]
    Triangle,
    /// Use every grid square as a quadrilateral
    Quadrilateral,
}

/// Builder for a regular mesh of an axis-aligned rectangle
///
/// All of the corners and cell counts must be set before calling [`build`](Self::build):
///
/// ```
/// use hybrid_mesh::mesh::hybrid2d::MeshFactory;
/// use hybrid_mesh::mesh::structured::StructuredMeshBuilder;
///
/// let mesh = StructuredMeshBuilder::new(MeshFactory::<f64>::new())
///     .set_bottom_left_corner([0.0, 0.0])
///     .set_top_right_corner([1.0, 1.0])
///     .set_num_x_cells(2)
///     .set_num_y_cells(2)
///     .build()
///     .unwrap();
/// assert_eq!(mesh.size(0), 8);
/// ```
pub struct StructuredMeshBuilder<F: Builder> {
    factory: F,
    bottom_left: Option<[F::T; DIM_WORLD]>,
    top_right: Option<[F::T; DIM_WORLD]>,
    num_x_cells: Option<usize>,
    num_y_cells: Option<usize>,
    cell_shape: CellShape,
    built: bool,
}

impl<F: Builder> StructuredMeshBuilder<F> {
    /// Create a structured mesh builder that adds its points and cells to `factory`
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            bottom_left: None,
            top_right: None,
            num_x_cells: None,
            num_y_cells: None,
            cell_shape: CellShape::default(),
            built: false,
        }
    }

    /// Set the bottom left corner of the rectangle
    pub fn set_bottom_left_corner(&mut self, corner: [F::T; DIM_WORLD]) -> &mut Self {
        self.bottom_left = Some(corner);
        self
    }

    /// Set the top right corner of the rectangle
    pub fn set_top_right_corner(&mut self, corner: [F::T; DIM_WORLD]) -> &mut Self {
        self.top_right = Some(corner);
        self
    }

    /// Set the number of cells in the x direction
    pub fn set_num_x_cells(&mut self, n: usize) -> &mut Self {
        self.num_x_cells = Some(n);
        self
    }

    /// Set the number of cells in the y direction
    pub fn set_num_y_cells(&mut self, n: usize) -> &mut Self {
        self.num_y_cells = Some(n);
        self
    }

    /// Set the shape of the cells
    pub fn set_cell_shape(&mut self, shape: CellShape) -> &mut Self {
        self.cell_shape = shape;
        self
    }

    /// Create the mesh
    ///
    /// Points are added row by row from the bottom left corner. The cells of each grid square
    /// are added in the same order.
    ///
    /// The wrapped factory is consumed by a successful build, so this panics if called again
    /// after it has returned a mesh.
    pub fn build(&mut self) -> Result<F::Mesh> {
        if self.built {
            panic!("This structured mesh builder has already built its mesh");
        }
        let bottom_left = self
            .bottom_left
            .ok_or(Error::MissingOption("bottom_left_corner"))?;
        let top_right = self
            .top_right
            .ok_or(Error::MissingOption("top_right_corner"))?;
        let nx = self.num_x_cells.ok_or(Error::MissingOption("num_x_cells"))?;
        let ny = self.num_y_cells.ok_or(Error::MissingOption("num_y_cells"))?;
        if nx == 0 {
            return Err(Error::NonPositiveCellCount("x"));
        }
        if ny == 0 {
            return Err(Error::NonPositiveCellCount("y"));
        }
        if !(top_right[0] > bottom_left[0] && top_right[1] > bottom_left[1]) {
            return Err(Error::DegenerateDomain);
        }
        debug!(
            "Creating structured {:?} mesh with {nx} x {ny} squares",
            self.cell_shape
        );

        let scalar = |i: usize| -> F::T { num::cast(i).unwrap() };
        let hx = (top_right[0] - bottom_left[0]) / scalar(nx);
        let hy = (top_right[1] - bottom_left[1]) / scalar(ny);
        for y in 0..ny + 1 {
            for x in 0..nx + 1 {
                self.factory.add_point([
                    bottom_left[0] + hx * scalar(x),
                    bottom_left[1] + hy * scalar(y),
                ]);
            }
        }

        for y in 0..ny {
            for x in 0..nx {
                let v0 = y * (nx + 1) + x;
                let v1 = v0 + 1;
                let v2 = v0 + nx + 2;
                let v3 = v0 + nx + 1;
                match self.cell_shape {
                    CellShape::Triangle => {
                        self.factory.add_entity(RefEl::Triangle, &[v0, v1, v2], None)?;
                        self.factory.add_entity(RefEl::Triangle, &[v0, v2, v3], None)?;
                    }
                    CellShape::Quadrilateral => {
                        self.factory
                            .add_entity(RefEl::Quadrilateral, &[v0, v1, v2, v3], None)?;
                    }
                }
            }
        }

        self.built = true;
        Ok(self.factory.build())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mesh::hybrid2d::{Mesh, MeshFactory};
    use crate::mesh::utils::super_entity_counts;
    use approx::*;

    fn unit_square(shape: CellShape, nx: usize, ny: usize) -> Mesh<f64> {
        StructuredMeshBuilder::new(MeshFactory::new())
            .set_bottom_left_corner([0.0, 0.0])
            .set_top_right_corner([1.0, 1.0])
            .set_num_x_cells(nx)
            .set_num_y_cells(ny)
            .set_cell_shape(shape)
            .build()
            .unwrap()
    }

    #[test]
    fn test_triangles() {
        let mesh = unit_square(CellShape::Triangle, 2, 2);
        assert_eq!(mesh.size(0), 8);
        assert_eq!(mesh.size(1), 16);
        assert_eq!(mesh.size(2), 9);
        for c in mesh.entities(0) {
            assert_eq!(c.ref_el(), RefEl::Triangle);
            assert_relative_eq!(c.geometry().integration_element(&[0.2, 0.2]), 0.25);
        }
        assert!(mesh.check_consistency().is_ok());
    }

    #[test]
    fn test_quadrilaterals() {
        let mesh = unit_square(CellShape::Quadrilateral, 3, 2);
        assert_eq!(mesh.size(0), 6);
        assert_eq!(mesh.size(1), 17);
        assert_eq!(mesh.size(2), 12);
        for c in mesh.entities(0) {
            assert_eq!(c.ref_el(), RefEl::Quadrilateral);
            assert!(c.geometry().is_affine());
            assert_relative_eq!(c.geometry().integration_element(&[0.5, 0.5]), 1.0 / 6.0);
        }
        assert!(mesh.check_consistency().is_ok());
    }

    #[test]
    fn test_shared_edges() {
        //! Interior edges belong to two cells and boundary edges to one
        for shape in [CellShape::Triangle, CellShape::Quadrilateral] {
            let mesh = unit_square(shape, 4, 3);
            let counts = super_entity_counts(&mesh, 1);
            let boundary = counts.iter().filter(|c| **c == 1).count();
            let interior = counts.iter().filter(|c| **c == 2).count();
            assert_eq!(boundary, 2 * (4 + 3));
            assert_eq!(boundary + interior, mesh.size(1));
        }
    }

    #[test]
    fn test_point_coordinates() {
        let mesh = StructuredMeshBuilder::new(MeshFactory::<f64>::new())
            .set_bottom_left_corner([-1.0, 2.0])
            .set_top_right_corner([3.0, 3.0])
            .set_num_x_cells(4)
            .set_num_y_cells(2)
            .build()
            .unwrap();
        // Row-major numbering: vertex 7 is the third vertex of the second row
        let x = mesh.entity(2, 7).unwrap().geometry().global(&[]);
        assert_relative_eq!(x[0], 1.0);
        assert_relative_eq!(x[1], 2.5);
        let x = mesh.entity(2, 14).unwrap().geometry().global(&[]);
        assert_relative_eq!(x[0], 3.0);
        assert_relative_eq!(x[1], 3.0);
    }

    #[test]
    fn test_missing_options() {
        let mut b = StructuredMeshBuilder::new(MeshFactory::<f64>::new());
        assert_eq!(
            b.build().err(),
            Some(Error::MissingOption("bottom_left_corner"))
        );
        b.set_bottom_left_corner([0.0, 0.0]);
        assert_eq!(b.build().err(), Some(Error::MissingOption("top_right_corner")));
        b.set_top_right_corner([1.0, 1.0]).set_num_x_cells(1);
        assert_eq!(b.build().err(), Some(Error::MissingOption("num_y_cells")));
    }

    #[test]
    fn test_invalid_options() {
        let mut b = StructuredMeshBuilder::new(MeshFactory::<f64>::new());
        b.set_bottom_left_corner([0.0, 0.0])
            .set_top_right_corner([1.0, 1.0])
            .set_num_x_cells(0)
            .set_num_y_cells(2);
        assert_eq!(b.build().err(), Some(Error::NonPositiveCellCount("x")));
        b.set_num_x_cells(2).set_num_y_cells(0);
        assert_eq!(b.build().err(), Some(Error::NonPositiveCellCount("y")));
        b.set_num_y_cells(2).set_top_right_corner([1.0, 0.0]);
        assert_eq!(b.build().err(), Some(Error::DegenerateDomain));
        b.set_top_right_corner([1.0, 1.0]);
        assert!(b.build().is_ok());
    }

    #[test]
    #[should_panic(expected = "structured mesh builder has already built")]
    fn test_build_twice() {
        let mut b = StructuredMeshBuilder::new(MeshFactory::<f64>::new());
        b.set_bottom_left_corner([0.0, 0.0])
            .set_top_right_corner([1.0, 1.0])
            .set_num_x_cells(1)
            .set_num_y_cells(1);
        assert!(b.build().is_ok());
        let _ = b.build();
    }
}

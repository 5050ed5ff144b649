use hybrid_mesh::mesh::hybrid2d::{Mesh, MeshFactory};
use hybrid_mesh::mesh::structured::{CellShape, StructuredMeshBuilder};
use hybrid_mesh::mesh::utils::{boundary_flags, check_completeness, super_entity_counts};
use hybrid_mesh::reference_element::RefEl;
use hybrid_mesh::traits::Builder;
use hybrid_mesh::types::Error;
use rayon::prelude::*;
use std::collections::HashSet;

fn mixed_mesh() -> Mesh<f64> {
    //! Two quadrilaterals with a fan of triangles above them
    let mut b = MeshFactory::new();
    b.add_point([0.0, 0.0]);
    b.add_point([1.0, 0.0]);
    b.add_point([2.0, 0.0]);
    b.add_point([0.0, 1.0]);
    b.add_point([1.0, 1.0]);
    b.add_point([2.0, 1.0]);
    b.add_point([1.0, 2.0]);
    b.add_entity(RefEl::Quadrilateral, &[0, 1, 4, 3], None)
        .unwrap();
    b.add_entity(RefEl::Quadrilateral, &[1, 2, 5, 4], None)
        .unwrap();
    b.add_entity(RefEl::Triangle, &[3, 4, 6], None).unwrap();
    b.add_entity(RefEl::Triangle, &[4, 5, 6], None).unwrap();
    b.build()
}

fn check_mesh(mesh: &Mesh<f64>) {
    assert!(mesh.check_consistency().is_ok());
    assert!(check_completeness(mesh).is_ok());

    for codim in 0..3 {
        for (i, e) in mesh.entities(codim).enumerate() {
            assert_eq!(mesh.index(&e), i);
            assert_eq!(e.codim(), codim);
        }
    }

    for cell in mesh.entities(0) {
        let n = match cell.ref_el() {
            RefEl::Triangle => 3,
            RefEl::Quadrilateral => 4,
            _ => panic!("Unexpected cell type"),
        };
        assert_eq!(cell.sub_entities(1).len(), n);
        assert_eq!(cell.sub_entities(2).len(), n);

        let vertices = cell.sub_entities(2).collect::<Vec<_>>();
        for edge in cell.sub_entities(1) {
            for v in edge.sub_entities(1) {
                assert!(vertices.contains(&v));
            }
        }
    }
}

#[test]
fn test_mixed_mesh() {
    let mesh = mixed_mesh();
    assert_eq!(mesh.size(0), 4);
    assert_eq!(mesh.size(1), 10);
    assert_eq!(mesh.size(2), 7);
    check_mesh(&mesh);

    let types = mesh.entities(0).map(|c| c.ref_el()).collect::<Vec<_>>();
    assert_eq!(
        types,
        vec![
            RefEl::Quadrilateral,
            RefEl::Quadrilateral,
            RefEl::Triangle,
            RefEl::Triangle
        ]
    );
}

#[test]
fn test_watertight() {
    //! Cells sharing two vertices share the edge between them
    let mesh = mixed_mesh();
    let cells = mesh.entities(0).collect::<Vec<_>>();
    for (i, c0) in cells.iter().enumerate() {
        for c1 in &cells[i + 1..] {
            for e0 in c0.sub_entities(1) {
                let ends = e0.sub_entities(1).collect::<HashSet<_>>();
                let shared = c1.sub_entities(1).find(|e1| {
                    e1.sub_entities(1).collect::<HashSet<_>>() == ends
                });
                if let Some(e1) = shared {
                    assert_eq!(e0, e1);
                    assert_eq!(mesh.index(&e0), mesh.index(&e1));
                }
            }
        }
    }
    let counts = super_entity_counts(&mesh, 1);
    assert_eq!(counts.iter().filter(|c| **c == 2).count(), 4);
    assert_eq!(counts.iter().filter(|c| **c == 1).count(), 6);
}

#[test]
fn test_unit_square_triangles() {
    let mut builder = StructuredMeshBuilder::new(MeshFactory::new());
    builder
        .set_bottom_left_corner([0.0, 0.0])
        .set_top_right_corner([1.0, 1.0])
        .set_num_x_cells(2)
        .set_num_y_cells(2);
    let mesh = builder.build().unwrap();

    assert_eq!(mesh.dim_mesh(), 2);
    assert_eq!(mesh.dim_world(), 2);
    assert_eq!(mesh.size(0), 8);
    assert_eq!(mesh.size(1), 16);
    assert_eq!(mesh.size(2), 9);
    check_mesh(&mesh);

    // 8 boundary edges with one cell each and 8 interior edges with two
    let counts = super_entity_counts(&mesh, 1);
    assert_eq!(counts.iter().filter(|c| **c == 1).count(), 8);
    assert_eq!(counts.iter().filter(|c| **c == 2).count(), 8);

    // An edge is on the boundary exactly when its midpoint lies on a side of the square
    let on_side = |x: [f64; 2]| x[0] == 0.0 || x[0] == 1.0 || x[1] == 0.0 || x[1] == 1.0;
    let on_boundary = boundary_flags(&mesh, 1);
    assert_eq!(on_boundary.iter().filter(|b| **b).count(), 8);
    for (edge, boundary) in mesh.entities(1).zip(on_boundary) {
        let mid = edge.geometry().global(&[0.5]);
        assert_eq!(boundary, on_side(mid));
    }
}

#[test]
fn test_unit_square_quadrilaterals() {
    let mut builder = StructuredMeshBuilder::new(MeshFactory::new());
    builder
        .set_bottom_left_corner([0.0, 0.0])
        .set_top_right_corner([1.0, 1.0])
        .set_num_x_cells(2)
        .set_num_y_cells(2)
        .set_cell_shape(CellShape::Quadrilateral);
    let mesh = builder.build().unwrap();
    assert_eq!(mesh.size(0), 4);
    assert_eq!(mesh.size(1), 12);
    assert_eq!(mesh.size(2), 9);
    check_mesh(&mesh);
}

#[test]
fn test_distinct_indices() {
    //! No index is used twice within a codimension
    let mesh = mixed_mesh();
    let mut total = 0;
    for codim in 0..3 {
        let indices = mesh
            .entities(codim)
            .map(|e| e.index())
            .collect::<HashSet<_>>();
        assert_eq!(indices.len(), mesh.size(codim));
        total += indices.len();
    }
    assert_eq!(total, mesh.size(0) + mesh.size(1) + mesh.size(2));
}

#[test]
fn test_concurrent_reads() {
    //! A built mesh can be traversed from several threads at once
    let mesh = StructuredMeshBuilder::new(MeshFactory::<f64>::new())
        .set_bottom_left_corner([0.0, 0.0])
        .set_top_right_corner([1.0, 1.0])
        .set_num_x_cells(16)
        .set_num_y_cells(16)
        .build()
        .unwrap();

    let area = (0..mesh.size(0))
        .into_par_iter()
        .map(|i| {
            let cell = mesh.entity(0, i).unwrap();
            assert_eq!(mesh.index(&cell), i);
            cell.geometry().integration_element(&[0.0, 0.0]) / 2.0
        })
        .sum::<f64>();
    assert!((area - 1.0).abs() < 1e-12);

    let edge_counts = (0..4)
        .into_par_iter()
        .map(|_| {
            mesh.entities(0)
                .map(|c| c.sub_entities(1).len())
                .sum::<usize>()
        })
        .collect::<Vec<_>>();
    assert_eq!(edge_counts, vec![3 * mesh.size(0); 4]);
}

#[test]
fn test_bad_cell_leaves_factory_unchanged() {
    let mut b = MeshFactory::<f64>::new();
    for p in [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]] {
        b.add_point(p);
    }
    b.add_entity(RefEl::Triangle, &[0, 1, 2], None).unwrap();
    let (nv, ne, nc) = (b.num_vertices(), b.num_edges(), b.num_cells());
    assert!(matches!(
        b.add_entity(RefEl::Quadrilateral, &[0, 2, 3], None),
        Err(Error::WrongVertexCount { .. })
    ));
    assert_eq!((b.num_vertices(), b.num_edges(), b.num_cells()), (nv, ne, nc));
}

#[test]
#[should_panic]
fn test_build_twice() {
    let mut b = MeshFactory::<f64>::new();
    b.add_point([0.0, 0.0]);
    let _ = b.build();
    let _ = b.build();
}

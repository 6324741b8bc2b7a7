//! End-to-end loader tests over on-disk neutral files.
//!
//! Each test writes a small mesh to a temp directory, loads it through
//! the public entry point, and checks the resulting model: zone
//! contents, normalization, sparse ids, and the failure paths.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use tempfile::tempdir;

use tetview_io::{load_neutral, IoError};
use tetview_model::Element;

/// Write `contents` into a temp file and return its path together with
/// the guard keeping the directory alive.
fn write_mesh(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("test.mesh");
    std::fs::write(&path, contents).expect("write mesh file");
    (dir, path)
}

#[test]
fn unit_tetrahedron_end_to_end() {
    let input = "\
4
0 0 0
1 0 0
0 1 0
0 0 1
1
1 1 2 3 4
0
";
    let (_dir, path) = write_mesh(input);
    let mesh = load_neutral(&path).expect("load unit tetrahedron");

    assert_eq!(mesh.point_count(), 4);
    assert_eq!(mesh.domain_ids(), vec![1]);
    assert_eq!(mesh.domain(1).map(|d| d.len()), Some(1));
    assert!(mesh.boundaries().is_empty());
    assert_eq!(mesh.path(), path);

    // All axes had extent 1, so the longest normalized extent is 1.
    let max_x = mesh.points().iter().map(|p| p.x()).fold(f64::MIN, f64::max);
    let min_x = mesh.points().iter().map(|p| p.x()).fold(f64::MAX, f64::min);
    assert!((max_x - min_x - 1.0).abs() < 1e-12);
}

#[test]
fn normalization_rescales_into_unit_box() {
    // Largest extent 10 on X, aspect ratio 10 : 5 : 2.
    let input = "\
4
0 0 0
10 0 0
0 5 0
0 0 2
0
0
";
    let (_dir, path) = write_mesh(input);
    let mesh = load_neutral(&path).expect("load mesh");

    let xs: Vec<f64> = mesh.points().iter().map(|p| p.x()).collect();
    let ys: Vec<f64> = mesh.points().iter().map(|p| p.y()).collect();
    let zs: Vec<f64> = mesh.points().iter().map(|p| p.z()).collect();
    let extent = |v: &[f64]| {
        v.iter().copied().fold(f64::MIN, f64::max) - v.iter().copied().fold(f64::MAX, f64::min)
    };
    let midpoint = |v: &[f64]| {
        (v.iter().copied().fold(f64::MIN, f64::max) + v.iter().copied().fold(f64::MAX, f64::min))
            / 2.0
    };

    // Unit extent on the axis that was longest, aspect ratio preserved.
    assert!((extent(&xs) - 1.0).abs() < 1e-12);
    assert!((extent(&ys) - 0.5).abs() < 1e-12);
    assert!((extent(&zs) - 0.2).abs() < 1e-12);

    // Midpoints end up at the origin.
    assert!(midpoint(&xs).abs() < 1e-12);
    assert!(midpoint(&ys).abs() < 1e-12);
    assert!(midpoint(&zs).abs() < 1e-12);

    // The source-coordinate extrema survive normalization.
    let bounds = mesh.bounds();
    assert!((bounds.max.x - 10.0).abs() < 1e-12);
    assert!((bounds.max.y - 5.0).abs() < 1e-12);
    assert!((bounds.max.z - 2.0).abs() < 1e-12);
    assert!(bounds.min.x.abs() < 1e-12);
}

#[test]
fn sparse_domain_ids() {
    let input = "\
5
0 0 0
1 0 0
0 1 0
0 0 1
1 1 1
2
5 1 2 3 4
100 2 3 4 5
0
";
    let (_dir, path) = write_mesh(input);
    let mesh = load_neutral(&path).expect("load mesh");

    assert_eq!(mesh.domain_ids(), vec![5, 100]);
    assert_eq!(mesh.domains().len(), 2);
    assert!(mesh.domain(6).is_none());
}

#[test]
fn boundary_indices_are_converted_and_canonicalized() {
    let input = "\
3
0 0 0
1 0 0
0 1 0
0
1
7 3 1 2
";
    let (_dir, path) = write_mesh(input);
    let mesh = load_neutral(&path).expect("load mesh");

    let boundary = mesh.boundary(7).expect("boundary 7");
    assert_eq!(boundary.len(), 1);
    // File declared 1-based (3, 1, 2); stored 0-based canonical order.
    assert_eq!(boundary.elements()[0].points(), &[0, 1, 2][..]);
}

#[test]
fn multiple_surfaces_grouped_by_id() {
    let input = "\
4
0 0 0
1 0 0
0 1 0
1 1 0
0
3
1 1 2 3
2 2 3 4
1 1 3 4
";
    let (_dir, path) = write_mesh(input);
    let mesh = load_neutral(&path).expect("load mesh");

    assert_eq!(mesh.boundary_ids(), vec![1, 2]);
    assert_eq!(mesh.boundary(1).map(|b| b.len()), Some(2));
    assert_eq!(mesh.boundary(2).map(|b| b.len()), Some(1));
}

#[test]
fn edge_statistics_through_the_model() {
    // Two triangles on surface 1 sharing edge (2,3): five unique edges.
    let input = "\
4
0 0 0
1 0 0
0 1 0
1 1 0
0
2
1 1 2 3
1 2 3 4
";
    let (_dir, path) = write_mesh(input);
    let mut mesh = load_neutral(&path).expect("load mesh");

    // Points were normalized; recompute the expected lengths from the
    // model's own point set.
    let points = mesh.points().to_vec();
    let boundary = mesh.boundary_mut(1).expect("boundary 1");
    let lengths = boundary.edge_lengths(&points).expect("statistics");

    assert!(lengths.min > 0.0);
    assert!(lengths.min <= lengths.avg);
    assert!(lengths.avg <= lengths.max);
    // Shared edge counted once: unit square diagonal over unit sides.
    assert!((lengths.max / lengths.min - f64::sqrt(2.0)).abs() < 1e-12);
}

#[test]
fn load_failure_leaves_no_model() {
    let result = load_neutral("definitely/not/here.mesh");
    assert!(matches!(result, Err(IoError::FileNotFound { .. })));
}

#[test]
fn truncated_file_names_the_section() {
    let input = "\
2
0 0 0
1 0 0
3
1 1 2
";
    let (_dir, path) = write_mesh(input);
    let result = load_neutral(&path);
    assert!(matches!(
        result,
        Err(IoError::UnexpectedEof {
            section: "tetrahedra"
        })
    ));
}

#[test]
fn non_numeric_count_is_rejected() {
    let (_dir, path) = write_mesh("many\n");
    let result = load_neutral(&path);
    assert!(matches!(
        result,
        Err(IoError::InvalidToken { section: "points", .. })
    ));
}

#[test]
fn out_of_range_index_is_rejected() {
    let input = "\
2
0 0 0
1 0 0
0
1
1 1 2 9
";
    let (_dir, path) = write_mesh(input);
    let result = load_neutral(&path);
    assert!(matches!(
        result,
        Err(IoError::IndexOutOfRange {
            section: "boundary triangles",
            index: 9,
            point_count: 2,
            ..
        })
    ));
}

#[test]
fn trailing_data_is_ignored() {
    let input = "\
1
0 0 0
0
0
# comment-like trailer that the format does not define
";
    let (_dir, path) = write_mesh(input);
    assert!(load_neutral(&path).is_ok());
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Rotation, snapping and split/merge behaviour of 3D parts

use anyhow::Result;
use approx::{assert_relative_eq, relative_eq};
use craftcad::error::Error;
use craftcad::transform::{composed_rotation, snap_point};
use craftcad::{
    apply_rotation, detect_seams, rotation_matrix, snap_to_grid, Axis, LayoutConfig, MergePolicy,
    Primitive, Session,
};
use nalgebra::{Matrix4, Point3, Vector3};

#[test]
fn test_rotation_y_zero_is_identity() {
    assert_relative_eq!(rotation_matrix(Axis::Y, 0.0), Matrix4::identity(), epsilon = 1e-6);
}

#[test]
fn test_negated_angles_do_not_undo_composed_rotation() {
    let original = vec![
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.3, -0.7, 2.0),
    ];
    let (ax, ay, az) = (0.7, -0.4, 1.1);

    let mut vertices = original.clone();
    apply_rotation(&mut vertices, ax, ay, az);
    apply_rotation(&mut vertices, -ax, -ay, -az);

    // Rx*Ry*Rz followed by Rx'*Ry'*Rz' is not the inverse Rz'*Ry'*Rx'
    let round_trips = original
        .iter()
        .zip(&vertices)
        .all(|(a, b)| relative_eq!(*a, *b, epsilon = 1e-6));
    assert!(!round_trips, "negated angles are expected not to round-trip");

    // The true inverse is the transpose
    let inverse = composed_rotation(ax, ay, az).transpose();
    let mut restored = original.clone();
    apply_rotation(&mut restored, ax, ay, az);
    for (point, expected) in restored.iter_mut().zip(&original) {
        *point = craftcad::transform::transform_point(&inverse, point);
        assert_relative_eq!(*point, *expected, epsilon = 1e-9);
    }
}

#[test]
fn test_rotation_preserves_distances() {
    let mut part = Primitive::cuboid(Vector3::new(4.0, 2.0, 1.0), true).to_part().unwrap();
    let before = nalgebra::distance(&part.vertices[0], &part.vertices[6]);
    part.rotate(0.2, 1.3, -0.8);
    let after = nalgebra::distance(&part.vertices[0], &part.vertices[6]);
    assert_relative_eq!(before, after, epsilon = 1e-9);
}

#[test]
fn test_snap_pinned_values() -> Result<()> {
    assert_relative_eq!(snap_to_grid(0.17, 0.1)?, 0.2, epsilon = 1e-12);
    assert_relative_eq!(snap_to_grid(-0.05, 0.1)?, -0.1, epsilon = 1e-12);

    let snapped = snap_point(&Point3::new(0.17, -0.05, 0.04), 0.1)?;
    assert_relative_eq!(snapped, Point3::new(0.2, -0.1, 0.0), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_snap_rejects_non_positive_grid() {
    for grid in [0.0, -1.0, f64::NAN] {
        assert!(matches!(snap_to_grid(1.0, grid), Err(Error::InvalidArgument(_))));
    }
}

#[test]
fn test_session_edit_flow() -> Result<()> {
    let mut session = Session::new(LayoutConfig {
        grid_size: 0.5,
        seam_allowance: 1.0,
        ..Default::default()
    });
    let body = session.add_part(Primitive::panel(20.0, 10.0).to_part()?);
    let flap = session.add_part(Primitive::panel(20.0, 5.0).to_part()?);

    session.move_part(flap, Vector3::new(0.0, 10.0, 0.0))?;
    session.merge_parts(body, flap, MergePolicy::Deduplicate { tolerance: 1e-6 })?;
    assert_eq!(session.len(), 1);

    // Shared fold line is interior after welding
    let seams = session.seams(body)?;
    assert_eq!(seams.len(), 6);

    session.rotate_part(body, 0.0, 0.0, std::f64::consts::FRAC_PI_2)?;
    session.snap_part(body)?;

    let layout = session.layout()?;
    let piece = layout.find(body).expect("merged part is laid out");
    assert_relative_eq!(piece.width, 17.0, epsilon = 1e-9);
    assert_relative_eq!(piece.height, 22.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_split_reports_out_of_range_edge() -> Result<()> {
    let part = Primitive::panel(1.0, 1.0).to_part()?;
    assert_eq!(
        part.split(10).unwrap_err(),
        Error::IndexOutOfRange { index: 10, len: 4 }
    );
    let (a, b) = part.split(3)?;
    assert_eq!(a.vertices[0], Point3::new(0.0, 1.0, 0.0));
    assert_eq!(b.vertices[0], Point3::new(0.0, 0.0, 0.0));
    assert!(detect_seams(&a).is_empty());
    Ok(())
}

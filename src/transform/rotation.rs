// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Axis rotations in homogeneous coordinates

use nalgebra::{Matrix4, Point3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// Principal rotation axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Right-handed rotation by `angle` radians about `axis`.
///
/// Positive angles turn counter-clockwise when looking down the axis
/// toward the origin.
pub fn rotation_matrix(axis: Axis, angle: f64) -> Matrix4<f64> {
    let unit = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };
    Rotation3::from_axis_angle(&unit, angle).to_homogeneous()
}

/// `Rx * Ry * Rz`. Applied to column vectors, the Z rotation acts first and X last.
pub fn composed_rotation(angle_x: f64, angle_y: f64, angle_z: f64) -> Matrix4<f64> {
    rotation_matrix(Axis::X, angle_x)
        * rotation_matrix(Axis::Y, angle_y)
        * rotation_matrix(Axis::Z, angle_z)
}

/// Apply a homogeneous matrix to a point with w = 1 and drop w afterwards.
pub fn transform_point(matrix: &Matrix4<f64>, point: &Point3<f64>) -> Point3<f64> {
    let rotated = matrix * point.to_homogeneous();
    Point3::new(rotated.x, rotated.y, rotated.z)
}

/// Rotate every vertex in place by the composed `Rx * Ry * Rz` rotation.
pub fn apply_rotation(vertices: &mut [Point3<f64>], angle_x: f64, angle_y: f64, angle_z: f64) {
    let matrix = composed_rotation(angle_x, angle_y, angle_z);
    for vertex in vertices.iter_mut() {
        *vertex = transform_point(&matrix, vertex);
    }
}

/// Translate every vertex in place.
pub fn translate(vertices: &mut [Point3<f64>], offset: &Vector3<f64>) {
    for vertex in vertices.iter_mut() {
        *vertex += offset;
    }
}

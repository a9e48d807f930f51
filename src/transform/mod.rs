// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Rigid transforms for interactive part manipulation

mod rotation;
mod snap;

pub use rotation::{
    apply_rotation, composed_rotation, rotation_matrix, transform_point, translate, Axis,
};
pub use snap::{snap_point, snap_to_grid, snap_vertices};

use crate::error::Result;
use crate::geometry::Part3D;
use nalgebra::Vector3;

impl Part3D {
    /// Move every vertex by `offset`
    pub fn move_by(&mut self, offset: &Vector3<f64>) {
        translate(&mut self.vertices, offset);
    }

    /// Rotate about the origin, composed as `Rx * Ry * Rz`
    pub fn rotate(&mut self, angle_x: f64, angle_y: f64, angle_z: f64) {
        apply_rotation(&mut self.vertices, angle_x, angle_y, angle_z);
    }

    pub fn snap_to_grid(&mut self, grid_size: f64) -> Result<()> {
        snap_vertices(&mut self.vertices, grid_size)
    }
}

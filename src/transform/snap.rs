// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Grid snapping

use crate::error::{require_positive, Result};
use nalgebra::Point3;

/// Round `value` to the nearest multiple of `grid_size`.
///
/// Halfway cases round away from zero, so `-0.05` on a `0.1` grid becomes `-0.1`.
pub fn snap_to_grid(value: f64, grid_size: f64) -> Result<f64> {
    let grid_size = require_positive("grid size", grid_size)?;
    Ok(snap_unchecked(value, grid_size))
}

/// Snap each axis of a point independently.
pub fn snap_point(point: &Point3<f64>, grid_size: f64) -> Result<Point3<f64>> {
    let grid_size = require_positive("grid size", grid_size)?;
    Ok(point.map(|c| snap_unchecked(c, grid_size)))
}

/// Snap every vertex in place. Nothing is touched if the grid size is invalid.
pub fn snap_vertices(vertices: &mut [Point3<f64>], grid_size: f64) -> Result<()> {
    let grid_size = require_positive("grid size", grid_size)?;
    for vertex in vertices.iter_mut() {
        *vertex = vertex.map(|c| snap_unchecked(c, grid_size));
    }
    Ok(())
}

fn snap_unchecked(value: f64, grid_size: f64) -> f64 {
    (value / grid_size).round() * grid_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;

    #[test]
    fn test_snap_to_grid() {
        assert_relative_eq!(snap_to_grid(0.17, 0.1).unwrap(), 0.2, epsilon = 1e-12);
        assert_relative_eq!(snap_to_grid(-0.05, 0.1).unwrap(), -0.1, epsilon = 1e-12);
        assert_relative_eq!(snap_to_grid(0.05, 0.1).unwrap(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(snap_to_grid(12.4, 5.0).unwrap(), 10.0);
        assert_relative_eq!(snap_to_grid(12.5, 5.0).unwrap(), 15.0);
    }

    #[test]
    fn test_invalid_grid() {
        assert!(matches!(snap_to_grid(1.0, 0.0), Err(Error::InvalidArgument(_))));
        assert!(matches!(snap_to_grid(1.0, -0.1), Err(Error::InvalidArgument(_))));
        assert!(snap_to_grid(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_snap_point_per_axis() {
        let snapped = snap_point(&Point3::new(0.26, -0.74, 1.05), 0.5).unwrap();
        assert_relative_eq!(snapped, Point3::new(0.5, -0.5, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_snap_vertices_leaves_input_on_error() {
        let mut points = [Point3::new(0.3, 0.3, 0.3)];
        assert!(snap_vertices(&mut points, 0.0).is_err());
        assert_eq!(points[0], Point3::new(0.3, 0.3, 0.3));

        snap_vertices(&mut points, 1.0).unwrap();
        assert_eq!(points[0], Point3::origin());
    }
}

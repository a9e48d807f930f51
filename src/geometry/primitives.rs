// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Stock part shapes

use super::Part3D;
use crate::error::{require_positive, Result};
use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

/// Parametric starting shapes for craft parts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Flat rectangle in the XY plane, one quad face
    Panel { width: f64, height: f64 },
    /// Flat regular polygon approximating a disc, one face
    Disc { r: f64, fn_: u32 },
    /// Closed box, six quad faces
    Cuboid { size: Vector3<f64>, center: bool },
}

impl Primitive {
    pub fn panel(width: f64, height: f64) -> Self {
        Self::Panel { width, height }
    }

    pub fn disc(r: f64, fn_: u32) -> Self {
        let segments = if fn_ >= 3 { fn_ } else { 32 };
        Self::Disc { r, fn_: segments }
    }

    pub fn cuboid(size: Vector3<f64>, center: bool) -> Self {
        Self::Cuboid { size, center }
    }

    pub fn to_part(&self) -> Result<Part3D> {
        match *self {
            Self::Panel { width, height } => generate_panel(width, height),
            Self::Disc { r, fn_ } => generate_disc(r, fn_),
            Self::Cuboid { size, center } => generate_cuboid(size, center),
        }
    }
}

fn loop_edges(count: usize) -> Vec<(usize, usize)> {
    (0..count).map(|i| (i, (i + 1) % count)).collect()
}

fn generate_panel(width: f64, height: f64) -> Result<Part3D> {
    require_positive("panel width", width)?;
    require_positive("panel height", height)?;

    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(width, 0.0, 0.0),
        Point3::new(width, height, 0.0),
        Point3::new(0.0, height, 0.0),
    ];
    Part3D::new(vertices, loop_edges(4), vec![vec![0, 1, 2, 3]])
}

fn generate_disc(r: f64, fn_: u32) -> Result<Part3D> {
    require_positive("disc radius", r)?;

    let segments = fn_ as usize;
    let vertices = (0..segments)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / segments as f64;
            Point3::new(r * theta.cos(), r * theta.sin(), 0.0)
        })
        .collect();
    Part3D::new(vertices, loop_edges(segments), vec![(0..segments).collect()])
}

fn generate_cuboid(size: Vector3<f64>, center: bool) -> Result<Part3D> {
    require_positive("cuboid x", size.x)?;
    require_positive("cuboid y", size.y)?;
    require_positive("cuboid z", size.z)?;

    let min = if center { -size / 2.0 } else { Vector3::zeros() };
    let max = min + size;

    let vertices = vec![
        Point3::new(min.x, min.y, min.z),
        Point3::new(max.x, min.y, min.z),
        Point3::new(max.x, max.y, min.z),
        Point3::new(min.x, max.y, min.z),
        Point3::new(min.x, min.y, max.z),
        Point3::new(max.x, min.y, max.z),
        Point3::new(max.x, max.y, max.z),
        Point3::new(min.x, max.y, max.z),
    ];
    let edges = vec![
        (0, 1), (1, 2), (2, 3), (3, 0),
        (4, 5), (5, 6), (6, 7), (7, 4),
        (0, 4), (1, 5), (2, 6), (3, 7),
    ];
    let faces = vec![
        vec![0, 3, 2, 1], // bottom
        vec![4, 5, 6, 7], // top
        vec![0, 1, 5, 4], // front
        vec![2, 3, 7, 6], // back
        vec![0, 4, 7, 3], // left
        vec![1, 2, 6, 5], // right
    ];
    Part3D::new(vertices, edges, faces)
}

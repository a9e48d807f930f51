// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Bounding-box flattening and seam allowance

use crate::error::{require_positive, Error, Result};
use crate::geometry::{BoundingBox, Part2D, Part3D};
use nalgebra::Point3;
use tracing::debug;

/// Project a bounding box onto the XY plane as a rectangle. Z is discarded.
pub fn flatten(min: &Point3<f64>, max: &Point3<f64>) -> Result<Part2D> {
    let width = max.x - min.x;
    let height = max.y - min.y;
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(Error::invalid_geometry(format!(
            "bounding box has no XY extent ({} x {})",
            width, height
        )));
    }
    Part2D::new(width, height)
}

pub fn flatten_bbox(bbox: &BoundingBox) -> Result<Part2D> {
    if bbox.is_empty() {
        return Err(Error::invalid_geometry("bounding box is empty"));
    }
    flatten(&bbox.min, &bbox.max)
}

/// Flatten a 3D part. The pattern piece reuses the part's id.
pub fn flatten_part(part: &Part3D) -> Result<Part2D> {
    if part.vertices.is_empty() {
        return Err(Error::invalid_geometry(format!(
            "part {} has no vertices",
            part.id
        )));
    }
    let piece = flatten_bbox(&part.bounding_box())?.with_id(part.id);
    debug!(
        part = %part.id,
        width = piece.width,
        height = piece.height,
        "flattened part"
    );
    Ok(piece)
}

pub fn flatten_all(parts: &[Part3D]) -> Result<Vec<Part2D>> {
    parts.iter().map(flatten_part).collect()
}

/// Grow every part by `margin` on each side.
///
/// Each call adds `2 * margin` to both width and height again; callers that need
/// the allowance applied once must track it (see [`super::PatternSet`]).
pub fn add_seam_allowance(parts: &mut [Part2D], margin: f64) -> Result<()> {
    require_positive("seam allowance", margin)?;
    for part in parts.iter_mut() {
        part.width += margin * 2.0;
        part.height += margin * 2.0;
    }
    Ok(())
}

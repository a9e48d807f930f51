// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! CraftCAD geometry core
//!
//! Flattens 3D craft parts into rectangular pattern pieces, adds seam allowance,
//! nests the pieces onto a fixed-width material sheet and provides the rigid
//! transforms used to move, rotate and snap parts while editing.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod layout;
pub mod pattern;
pub mod session;
pub mod transform;

pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use geometry::{BoundingBox, MergePolicy, Part2D, Part3D, Primitive};
pub use layout::{pack, Layout, LayoutWarning, PackOptions, Sheet, ShelfPacker};
pub use pattern::{add_seam_allowance, detect_seams, flatten, flatten_part, PatternSet};
pub use session::Session;
pub use transform::{apply_rotation, rotation_matrix, snap_to_grid, translate, Axis};

/// Flatten `parts`, add `seam_allowance` per side and pack them onto `sheet`
/// with default options. A zero allowance adds nothing; a negative or
/// non-finite one is an [`Error::InvalidArgument`].
pub fn nest(parts: &[Part3D], seam_allowance: f64, sheet: Sheet) -> Result<Layout> {
    let mut pieces = pattern::flatten_all(parts)?;
    if seam_allowance != 0.0 {
        add_seam_allowance(&mut pieces, seam_allowance)?;
    }
    ShelfPacker::new(sheet).pack(pieces)
}

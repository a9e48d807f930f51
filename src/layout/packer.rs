// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Greedy shelf packing of pattern pieces

use super::{Layout, LayoutWarning, Sheet};
use crate::error::{Error, Result};
use crate::geometry::Part2D;
use nalgebra::Point2;
use tracing::{debug, warn};

/// Packing behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackOptions {
    /// Fail with [`Error::OversizedPart`] instead of placing and warning.
    pub strict: bool,
}

/// Row-based packer for a fixed-width sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShelfPacker {
    sheet: Sheet,
    options: PackOptions,
}

impl ShelfPacker {
    pub fn new(sheet: Sheet) -> Self {
        Self {
            sheet,
            options: PackOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PackOptions) -> Self {
        self.options = options;
        self
    }

    pub fn strict(self, strict: bool) -> Self {
        self.with_options(PackOptions { strict })
    }

    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// Place every part, largest area first.
    ///
    /// Equal areas keep their input order. A row closes when the next part would
    /// run past the sheet's right edge; the next row starts below the tallest part
    /// of the closed row plus the spacing. Parts are never rotated.
    pub fn pack(&self, parts: Vec<Part2D>) -> Result<Layout> {
        self.sheet.validate()?;
        for part in &parts {
            if !(part.width.is_finite() && part.height.is_finite())
                || part.width <= 0.0
                || part.height <= 0.0
            {
                return Err(Error::invalid_geometry(format!(
                    "part '{}' has non-positive size {} x {}",
                    part.display_name(),
                    part.width,
                    part.height
                )));
            }
        }

        let Sheet { width: sheet_width, spacing } = self.sheet;

        let mut sorted = parts;
        // `sort_by` is stable, which is what keeps ties in insertion order
        sorted.sort_by(|a, b| b.area().total_cmp(&a.area()));

        let mut warnings = Vec::new();
        let mut x = 0.0;
        let mut y = 0.0;
        let mut row_height: f64 = 0.0;
        let mut row_len = 0usize;
        let mut rows = 0usize;

        for part in sorted.iter_mut() {
            if row_len > 0 && x + part.width > sheet_width {
                debug!(row = rows, height = row_height, parts = row_len, "closing row");
                y += row_height + spacing;
                x = 0.0;
                row_height = 0.0;
                row_len = 0;
            }
            if row_len == 0 {
                rows += 1;
            }

            if part.width > sheet_width {
                let label = part.display_name();
                if self.options.strict {
                    return Err(Error::OversizedPart {
                        label,
                        width: part.width,
                        sheet_width,
                    });
                }
                warn!(
                    part = %label,
                    width = part.width,
                    sheet_width,
                    "part is wider than the sheet and will overflow it"
                );
                warnings.push(LayoutWarning::OversizedPart {
                    id: part.id,
                    label,
                    width: part.width,
                    sheet_width,
                });
            }

            part.position = Point2::new(x, y);
            x += part.width + spacing;
            row_height = row_height.max(part.height);
            row_len += 1;
        }

        let used_height = if sorted.is_empty() { 0.0 } else { y + row_height };
        let used_width = sorted.iter().map(Part2D::right).fold(0.0, f64::max);
        debug!(parts = sorted.len(), rows, used_height, "packed layout");

        Ok(Layout {
            parts: sorted,
            warnings,
            rows,
            sheet_width,
            used_width,
            used_height,
        })
    }
}

/// Pack with default options on a sheet of the given width and spacing.
pub fn pack(parts: Vec<Part2D>, sheet_width: f64, part_spacing: f64) -> Result<Layout> {
    ShelfPacker::new(Sheet::new(sheet_width, part_spacing)).pack(parts)
}

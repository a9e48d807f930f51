// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Layout module - nesting pattern pieces onto material sheets

mod packer;

pub use packer::{pack, PackOptions, ShelfPacker};

use crate::error::{require_positive, Error, Result};
use crate::geometry::Part2D;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Default material width
pub const DEFAULT_SHEET_WIDTH: f64 = 500.0;
/// Default gap between neighbouring parts and rows
pub const DEFAULT_PART_SPACING: f64 = 10.0;

/// A material sheet of fixed width and unbounded height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub width: f64,
    pub spacing: f64,
}

impl Sheet {
    pub fn new(width: f64, spacing: f64) -> Self {
        Self { width, spacing }
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("sheet width", self.width)?;
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(Error::invalid_argument(format!(
                "part spacing must be a non-negative finite number, got {}",
                self.spacing
            )));
        }
        Ok(())
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_WIDTH, DEFAULT_PART_SPACING)
    }
}

/// Non-fatal findings from a packing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutWarning {
    /// The part was placed but runs past the sheet's right edge
    OversizedPart {
        id: Uuid,
        label: String,
        width: f64,
        sheet_width: f64,
    },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OversizedPart {
                label,
                width,
                sheet_width,
                ..
            } => write!(
                f,
                "part '{}' ({} wide) overflows the {} wide sheet",
                label, width, sheet_width
            ),
        }
    }
}

/// Placed parts, in placement order, plus what the packer noticed on the way
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub parts: Vec<Part2D>,
    pub warnings: Vec<LayoutWarning>,
    pub rows: usize,
    pub sheet_width: f64,
    pub used_width: f64,
    pub used_height: f64,
}

impl Layout {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn part_area(&self) -> f64 {
        self.parts.iter().map(Part2D::area).sum()
    }

    /// Share of the used sheet area (sheet width x used height) covered by parts
    pub fn utilization(&self) -> f64 {
        let used = self.sheet_width * self.used_height;
        if used > 0.0 {
            self.part_area() / used
        } else {
            0.0
        }
    }

    pub fn find(&self, id: Uuid) -> Option<&Part2D> {
        self.parts.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_validate() {
        assert!(Sheet::default().validate().is_ok());
        assert!(Sheet::new(100.0, 0.0).validate().is_ok());
        assert!(Sheet::new(-5.0, 1.0).validate().is_err());
        assert!(Sheet::new(100.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_utilization() {
        let parts = vec![
            Part2D::new(50.0, 10.0).unwrap(),
            Part2D::new(50.0, 10.0).unwrap(),
        ];
        let layout = pack(parts, 100.0, 0.0).unwrap();
        assert_eq!(layout.used_width, 100.0);
        assert!((layout.utilization() - 1.0).abs() < 1e-12);
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Flat rectangular pattern pieces

use crate::error::{require_positive, Result};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rectangular 2D pattern piece with its placement on the sheet.
///
/// `position` is the top-left corner in sheet coordinates (y grows downward,
/// matching the exported page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part2D {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub width: f64,
    pub height: f64,
    pub position: Point2<f64>,
}

impl Part2D {
    /// Create a part at the origin. Both sides must be positive.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        require_positive("part width", width)?;
        require_positive("part height", height)?;
        Ok(Self {
            id: Uuid::new_v4(),
            label: None,
            width,
            height,
            position: Point2::origin(),
        })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Label if set, otherwise the id
    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => self.id.to_string(),
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn right(&self) -> f64 {
        self.position.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.position.y + self.height
    }

    /// Interiors intersect. Touching edges do not count.
    pub fn overlaps(&self, other: &Part2D) -> bool {
        self.position.x < other.right()
            && other.position.x < self.right()
            && self.position.y < other.bottom()
            && other.position.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_positive() {
        assert!(Part2D::new(0.0, 10.0).is_err());
        assert!(Part2D::new(10.0, -1.0).is_err());
        assert!(Part2D::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_overlaps() {
        let a = Part2D::new(10.0, 10.0).unwrap();
        let mut b = Part2D::new(10.0, 10.0).unwrap();

        b.position = Point2::new(5.0, 5.0);
        assert!(a.overlaps(&b));

        b.position = Point2::new(10.0, 0.0);
        assert!(!a.overlaps(&b), "shared edge is not an overlap");

        b.position = Point2::new(0.0, 20.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_display_name() {
        let part = Part2D::new(1.0, 2.0).unwrap();
        assert_eq!(part.display_name(), part.id.to_string());
        assert_eq!(part.with_label("flap").display_name(), "flap");
    }
}

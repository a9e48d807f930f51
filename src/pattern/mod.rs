// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Pattern module - turning 3D parts into flat pattern pieces

mod flatten;
mod seam;

pub use flatten::{add_seam_allowance, flatten, flatten_all, flatten_bbox, flatten_part};
pub use seam::detect_seams;

use crate::error::Result;
use crate::geometry::{Part2D, Part3D};
use serde::{Deserialize, Serialize};

/// A collection of pattern pieces plus the seam allowance already added to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternSet {
    pub parts: Vec<Part2D>,
    seam_allowance: f64,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(parts: Vec<Part2D>) -> Self {
        Self {
            parts,
            seam_allowance: 0.0,
        }
    }

    /// Flatten and append a 3D part
    pub fn add_part(&mut self, part: &Part3D) -> Result<&Part2D> {
        self.parts.push(flatten_part(part)?);
        Ok(&self.parts[self.parts.len() - 1])
    }

    /// Grow every piece by `margin` per side. Repeated calls keep adding.
    pub fn add_seam_allowance(&mut self, margin: f64) -> Result<()> {
        add_seam_allowance(&mut self.parts, margin)?;
        self.seam_allowance += margin;
        Ok(())
    }

    /// Total per-side allowance applied so far
    pub fn seam_allowance(&self) -> f64 {
        self.seam_allowance
    }

    pub fn has_seam_allowance(&self) -> bool {
        self.seam_allowance > 0.0
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn into_parts(self) -> Vec<Part2D> {
        self.parts
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Editing session: owns the parts and runs the pattern pipeline over them

use crate::config::LayoutConfig;
use crate::error::{Error, Result};
use crate::geometry::{MergePolicy, Part3D};
use crate::layout::Layout;
use crate::pattern::{detect_seams, flatten_all, PatternSet};
use nalgebra::Vector3;
use tracing::debug;
use uuid::Uuid;

/// Parts under edit plus the configuration that governs flattening and layout.
///
/// Every command either mutates a single part in place or returns a fresh result
/// (pattern set, layout); nothing derived is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct Session {
    parts: Vec<Part3D>,
    config: LayoutConfig,
}

impl Session {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            parts: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    /// Add a part and return its id
    pub fn add_part(&mut self, part: Part3D) -> Uuid {
        let id = part.id;
        self.parts.push(part);
        id
    }

    pub fn remove_part(&mut self, id: Uuid) -> Result<Part3D> {
        let index = self.index_of(id)?;
        Ok(self.parts.remove(index))
    }

    pub fn part(&self, id: Uuid) -> Option<&Part3D> {
        self.parts.iter().find(|p| p.id == id)
    }

    pub fn parts(&self) -> &[Part3D] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    fn index_of(&self, id: Uuid) -> Result<usize> {
        self.parts
            .iter()
            .position(|p| p.id == id)
            .ok_or(Error::PartNotFound(id))
    }

    fn part_mut(&mut self, id: Uuid) -> Result<&mut Part3D> {
        let index = self.index_of(id)?;
        Ok(&mut self.parts[index])
    }

    /// Replace a part with the two halves of a split along `edge_index`
    pub fn split_part(&mut self, id: Uuid, edge_index: usize) -> Result<(Uuid, Uuid)> {
        let index = self.index_of(id)?;
        let (first, second) = self.parts[index].split(edge_index)?;
        let ids = (first.id, second.id);
        self.parts[index] = first;
        self.parts.insert(index + 1, second);
        debug!(part = %id, edge_index, "split part");
        Ok(ids)
    }

    /// Merge `source` into `target`; `source` leaves the session on success
    pub fn merge_parts(&mut self, target: Uuid, source: Uuid, policy: MergePolicy) -> Result<()> {
        if target == source {
            return Err(Error::invalid_argument("cannot merge a part with itself"));
        }
        let target_index = self.index_of(target)?;
        let source_index = self.index_of(source)?;

        let absorbed = self.parts[source_index].clone();
        self.parts[target_index].merge(&absorbed, policy)?;
        self.parts.remove(source_index);
        debug!(%target, %source, ?policy, "merged parts");
        Ok(())
    }

    pub fn move_part(&mut self, id: Uuid, offset: Vector3<f64>) -> Result<()> {
        self.part_mut(id)?.move_by(&offset);
        Ok(())
    }

    pub fn rotate_part(&mut self, id: Uuid, angle_x: f64, angle_y: f64, angle_z: f64) -> Result<()> {
        self.part_mut(id)?.rotate(angle_x, angle_y, angle_z);
        Ok(())
    }

    /// Snap a part's vertices to the configured grid
    pub fn snap_part(&mut self, id: Uuid) -> Result<()> {
        let grid_size = self.config.grid_size;
        self.part_mut(id)?.snap_to_grid(grid_size)
    }

    pub fn seams(&self, id: Uuid) -> Result<Vec<(usize, usize)>> {
        let index = self.index_of(id)?;
        Ok(detect_seams(&self.parts[index]))
    }

    /// Flatten all parts and apply the configured seam allowance once
    pub fn flatten(&self) -> Result<PatternSet> {
        self.config.validate()?;
        let mut set = PatternSet::from_parts(flatten_all(&self.parts)?);
        if self.config.seam_allowance > 0.0 {
            set.add_seam_allowance(self.config.seam_allowance)?;
        }
        Ok(set)
    }

    /// Flatten and pack every part onto the configured sheet
    pub fn layout(&self) -> Result<Layout> {
        let set = self.flatten()?;
        self.config.packer().pack(set.into_parts())
    }
}

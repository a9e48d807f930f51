// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Geometry module - part representations and bounding boxes

mod bbox;
mod part2d;
mod part3d;
mod primitives;

pub use bbox::BoundingBox;
pub use part2d::Part2D;
pub use part3d::{MergePolicy, Part3D, DEFAULT_THICKNESS};
pub use primitives::Primitive;

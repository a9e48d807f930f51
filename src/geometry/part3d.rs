// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! 3D craft parts: vertex sets with edge and face topology

use super::BoundingBox;
use crate::error::{Error, Result};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default leather thickness in millimetres
pub const DEFAULT_THICKNESS: f64 = 2.0;

/// A 3D part. Edges are vertex index pairs, faces are closed vertex index loops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part3D {
    pub id: Uuid,
    pub vertices: Vec<Point3<f64>>,
    pub edges: Vec<(usize, usize)>,
    pub faces: Vec<Vec<usize>>,
    pub thickness: f64,
    pub curvature: f64,
}

/// How [`Part3D::merge`] treats vertices that coincide at the join.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum MergePolicy {
    /// Append the other part's lists untouched (indices are re-based).
    #[default]
    Concatenate,
    /// Weld vertices closer than `tolerance` and drop edges that collapse or repeat.
    Deduplicate { tolerance: f64 },
}

impl Part3D {
    /// Build a part, checking that every edge and face index names a vertex.
    pub fn new(
        vertices: Vec<Point3<f64>>,
        edges: Vec<(usize, usize)>,
        faces: Vec<Vec<usize>>,
    ) -> Result<Self> {
        let part = Self {
            id: Uuid::new_v4(),
            vertices,
            edges,
            faces,
            thickness: DEFAULT_THICKNESS,
            curvature: 0.0,
        };
        part.validate()?;
        Ok(part)
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_curvature(mut self, curvature: f64) -> Self {
        self.curvature = curvature;
        self
    }

    /// Check the index invariant
    pub fn validate(&self) -> Result<()> {
        let len = self.vertices.len();
        let edge_indices = self.edges.iter().flat_map(|&(a, b)| [a, b]);
        let face_indices = self.faces.iter().flatten().copied();
        match edge_indices.chain(face_indices).find(|&i| i >= len) {
            Some(index) => Err(Error::IndexOutOfRange { index, len }),
            None => Ok(()),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
    }

    /// Split along an edge into two single-vertex parts, one per endpoint.
    ///
    /// Both halves get fresh ids and keep this part's thickness and curvature.
    pub fn split(&self, edge_index: usize) -> Result<(Part3D, Part3D)> {
        let &(a, b) = self.edges.get(edge_index).ok_or(Error::IndexOutOfRange {
            index: edge_index,
            len: self.edges.len(),
        })?;
        let half = |index: usize| -> Result<Part3D> {
            let vertex = self.vertices.get(index).ok_or(Error::IndexOutOfRange {
                index,
                len: self.vertices.len(),
            })?;
            Ok(Part3D::new(vec![*vertex], Vec::new(), Vec::new())?
                .with_thickness(self.thickness)
                .with_curvature(self.curvature))
        };
        Ok((half(a)?, half(b)?))
    }

    /// Append `other` to this part.
    pub fn merge(&mut self, other: &Part3D, policy: MergePolicy) -> Result<()> {
        other.validate()?;
        match policy {
            MergePolicy::Concatenate => {
                let base = self.vertices.len();
                self.vertices.extend_from_slice(&other.vertices);
                self.edges
                    .extend(other.edges.iter().map(|&(a, b)| (a + base, b + base)));
                self.faces.extend(
                    other
                        .faces
                        .iter()
                        .map(|face| face.iter().map(|&i| i + base).collect()),
                );
            }
            MergePolicy::Deduplicate { tolerance } => {
                if !(tolerance.is_finite() && tolerance >= 0.0) {
                    return Err(Error::invalid_argument(format!(
                        "merge tolerance must be a non-negative finite number, got {}",
                        tolerance
                    )));
                }
                self.merge_welded(other, tolerance);
            }
        }
        Ok(())
    }

    fn merge_welded(&mut self, other: &Part3D, tolerance: f64) {
        let remap: Vec<usize> = other
            .vertices
            .iter()
            .map(|v| {
                let welded = self
                    .vertices
                    .iter()
                    .position(|existing| nalgebra::distance(existing, v) <= tolerance);
                match welded {
                    Some(index) => index,
                    None => {
                        self.vertices.push(*v);
                        self.vertices.len() - 1
                    }
                }
            })
            .collect();

        for &(a, b) in &other.edges {
            let edge = (remap[a], remap[b]);
            if edge.0 == edge.1 {
                continue;
            }
            let exists = self
                .edges
                .iter()
                .any(|&(x, y)| (x, y) == edge || (y, x) == edge);
            if !exists {
                self.edges.push(edge);
            }
        }

        for face in &other.faces {
            let mut mapped: Vec<usize> = face.iter().map(|&i| remap[i]).collect();
            mapped.dedup();
            if mapped.len() > 1 && mapped.first() == mapped.last() {
                mapped.pop();
            }
            if mapped.len() >= 3 {
                self.faces.push(mapped);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(offset_x: f64) -> Part3D {
        Part3D::new(
            vec![
                Point3::new(offset_x, 0.0, 0.0),
                Point3::new(offset_x + 1.0, 0.0, 0.0),
                Point3::new(offset_x + 1.0, 1.0, 0.0),
                Point3::new(offset_x, 1.0, 0.0),
            ],
            vec![(0, 1), (1, 2), (2, 3), (3, 0)],
            vec![vec![0, 1, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_dangling_index() {
        let result = Part3D::new(vec![Point3::origin()], vec![(0, 3)], Vec::new());
        assert_eq!(result, Err(Error::IndexOutOfRange { index: 3, len: 1 }));

        let result = Part3D::new(vec![Point3::origin()], Vec::new(), vec![vec![0, 1, 2]]);
        assert!(matches!(result, Err(Error::IndexOutOfRange { index: 1, .. })));
    }

    #[test]
    fn test_split() {
        let part = square(0.0).with_thickness(3.5);
        let (a, b) = part.split(1).unwrap();

        assert_eq!(a.vertices, vec![Point3::new(1.0, 0.0, 0.0)]);
        assert_eq!(b.vertices, vec![Point3::new(1.0, 1.0, 0.0)]);
        assert_eq!(a.thickness, 3.5);
        assert_ne!(a.id, part.id);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_split_out_of_range() {
        let part = square(0.0);
        assert_eq!(
            part.split(4),
            Err(Error::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_merge_concatenate_rebases_indices() {
        let mut a = square(0.0);
        let b = square(1.0);
        a.merge(&b, MergePolicy::Concatenate).unwrap();

        assert_eq!(a.vertex_count(), 8);
        assert_eq!(a.edges.len(), 8);
        assert_eq!(a.edges[4], (4, 5));
        assert_eq!(a.faces[1], vec![4, 5, 6, 7]);
        a.validate().unwrap();
    }

    #[test]
    fn test_merge_deduplicate_welds_shared_edge() {
        let mut a = square(0.0);
        let b = square(1.0);
        a.merge(&b, MergePolicy::Deduplicate { tolerance: 1e-9 })
            .unwrap();

        // Two vertices on x = 1 are shared
        assert_eq!(a.vertex_count(), 6);
        // The shared edge (1,2)/(3,0 of b) is kept once
        assert_eq!(a.edges.len(), 7);
        assert_eq!(a.faces.len(), 2);
        a.validate().unwrap();
    }

    #[test]
    fn test_merge_rejects_negative_tolerance() {
        let mut a = square(0.0);
        let b = square(1.0);
        assert!(matches!(
            a.merge(&b, MergePolicy::Deduplicate { tolerance: -1.0 }),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(a.vertex_count(), 4);
    }
}

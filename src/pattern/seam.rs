// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Seam detection

use crate::geometry::Part3D;
use std::collections::HashMap;

fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Count how many faces use each undirected edge.
fn face_adjacency(part: &Part3D) -> HashMap<(usize, usize), usize> {
    let mut counts = HashMap::new();
    for face in part.faces.iter().filter(|f| f.len() >= 3) {
        for (i, &a) in face.iter().enumerate() {
            let b = face[(i + 1) % face.len()];
            *counts.entry(edge_key(a, b)).or_insert(0) += 1;
        }
    }
    counts
}

/// Edges used by at most one face: the open boundary where parts get stitched.
///
/// Edges of a closed solid (each shared by two faces) are never seams.
pub fn detect_seams(part: &Part3D) -> Vec<(usize, usize)> {
    let counts = face_adjacency(part);
    part.edges
        .iter()
        .copied()
        .filter(|&(a, b)| counts.get(&edge_key(a, b)).copied().unwrap_or(0) <= 1)
        .collect()
}

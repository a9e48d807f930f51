// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Nesting job files and layout dumps (JSON)

use crate::geometry::{BoundingBox, Part2D};
use crate::layout::Layout;
use crate::pattern::flatten_bbox;
use anyhow::{Context, Result};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One part of a job: either a 3D bounding box to flatten or a ready 2D size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobPart {
    Bounds {
        #[serde(default)]
        label: Option<String>,
        min: [f64; 3],
        max: [f64; 3],
    },
    Size {
        #[serde(default)]
        label: Option<String>,
        width: f64,
        height: f64,
    },
}

impl JobPart {
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Bounds { label, .. } | Self::Size { label, .. } => label.as_deref(),
        }
    }

    pub fn to_part(&self) -> crate::Result<Part2D> {
        let part = match self {
            Self::Bounds { min, max, .. } => flatten_bbox(&BoundingBox::new(
                Point3::from(*min),
                Point3::from(*max),
            ))?,
            Self::Size { width, height, .. } => Part2D::new(*width, *height)?,
        };
        Ok(match self.label() {
            Some(label) => part.with_label(label),
            None => part,
        })
    }
}

/// A nesting job; sheet settings left out fall back to the configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seam_allowance: Option<f64>,
    pub parts: Vec<JobPart>,
}

impl Job {
    /// Flatten every part; the first invalid part aborts with its index.
    pub fn to_parts(&self) -> Result<Vec<Part2D>> {
        self.parts
            .iter()
            .enumerate()
            .map(|(i, part)| {
                part.to_part().with_context(|| {
                    format!("Invalid part #{} ({})", i, part.label().unwrap_or("unnamed"))
                })
            })
            .collect()
    }
}

pub fn parse_job(source: &str) -> Result<Job> {
    serde_json::from_str(source).context("Failed to parse job JSON")
}

/// Load a job from a JSON file
pub fn import_job(path: impl AsRef<Path>) -> Result<Job> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read job file: {:?}", path.as_ref()))?;
    parse_job(&content).with_context(|| format!("Invalid job file: {:?}", path.as_ref()))
}

/// Write a packed layout as pretty JSON
pub fn export_layout_json(layout: &Layout, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(layout).context("Failed to serialize layout")?;
    std::fs::write(path.as_ref(), json)
        .with_context(|| format!("Failed to write layout file: {:?}", path.as_ref()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = r#"{
        "sheet_width": 200,
        "parts": [
            { "label": "body", "min": [0, 0, 0], "max": [100, 50, 3] },
            { "label": "flap", "width": 80, "height": 80 },
            { "width": 60, "height": 40 }
        ]
    }"#;

    #[test]
    fn test_parse_job() {
        let job = parse_job(JOB).unwrap();
        assert_eq!(job.sheet_width, Some(200.0));
        assert_eq!(job.part_spacing, None);
        assert_eq!(job.parts.len(), 3);
        assert!(matches!(job.parts[0], JobPart::Bounds { .. }));
        assert!(matches!(job.parts[2], JobPart::Size { label: None, .. }));

        let parts = job.to_parts().unwrap();
        assert_eq!((parts[0].width, parts[0].height), (100.0, 50.0));
        assert_eq!(parts[1].label.as_deref(), Some("flap"));
    }

    #[test]
    fn test_invalid_part_is_named() {
        let job = parse_job(r#"{ "parts": [ { "label": "sliver", "min": [0,0,0], "max": [0,5,5] } ] }"#)
            .unwrap();
        let err = job.to_parts().unwrap_err();
        assert!(format!("{:#}", err).contains("sliver"));
    }
}

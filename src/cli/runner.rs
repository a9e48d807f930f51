// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Nesting job runner used by the command-line tool

use crate::config::LayoutConfig;
use crate::io;
use crate::layout::Layout;
use crate::pattern::add_seam_allowance;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Output file formats, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Json,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("json") => Ok(Self::Json),
            _ => bail!("Unsupported output format: {:?} (expected .svg or .json)", path),
        }
    }
}

/// Command-line overrides layered over the configuration
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub sheet_width: Option<f64>,
    pub part_spacing: Option<f64>,
    pub seam_allowance: Option<f64>,
    pub strict: bool,
}

/// Result of a nesting run
pub struct NestResult {
    pub layout: Layout,
    pub duration: Duration,
    pub output: Option<PathBuf>,
}

/// Runner for nesting jobs
pub struct Runner {
    config: LayoutConfig,
}

impl Runner {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Load a job file, pack it and optionally write the layout.
    ///
    /// Precedence for sheet settings: command line, then job file, then configuration.
    pub fn run_job(&self, job_path: &Path, output: Option<&Path>, overrides: &Overrides) -> Result<NestResult> {
        let job = io::import_job(job_path)?;

        let mut config = self.config.clone();
        if let Some(width) = overrides.sheet_width.or(job.sheet_width) {
            config.sheet_width = width;
        }
        if let Some(spacing) = overrides.part_spacing.or(job.part_spacing) {
            config.part_spacing = spacing;
        }
        if let Some(seam) = overrides.seam_allowance.or(job.seam_allowance) {
            config.seam_allowance = seam;
        }
        config.strict_oversize |= overrides.strict;
        config.validate().context("Invalid layout settings")?;

        let format = output.map(OutputFormat::from_path).transpose()?;

        let start = Instant::now();
        let mut parts = job.to_parts()?;
        if config.seam_allowance > 0.0 {
            add_seam_allowance(&mut parts, config.seam_allowance)?;
        }
        debug!(parts = parts.len(), sheet_width = config.sheet_width, "packing job");
        let layout = config
            .packer()
            .pack(parts)
            .with_context(|| format!("Failed to pack job {:?}", job_path))?;
        let duration = start.elapsed();

        if let (Some(path), Some(format)) = (output, format) {
            match format {
                OutputFormat::Svg => io::export_svg(&layout, path, &config.export)?,
                OutputFormat::Json => io::export_layout_json(&layout, path)?,
            }
            info!(output = ?path, "layout written");
        }

        Ok(NestResult {
            layout,
            duration,
            output: output.map(Path::to_path_buf),
        })
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

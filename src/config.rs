// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Layout configuration system

use crate::error::{require_positive, Error};
use crate::io::SvgExportOptions;
use crate::layout::{PackOptions, Sheet, ShelfPacker, DEFAULT_PART_SPACING, DEFAULT_SHEET_WIDTH};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory by [`LayoutConfig::load`]
pub const CONFIG_FILE: &str = "craftcad.toml";

/// Layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Material sheet width
    pub sheet_width: f64,
    /// Gap between parts and between rows
    pub part_spacing: f64,
    /// Per-side seam allowance added when flattening; 0 disables it
    pub seam_allowance: f64,
    /// Grid used by snapping
    pub grid_size: f64,
    /// Treat parts wider than the sheet as errors
    pub strict_oversize: bool,
    /// SVG export settings
    pub export: SvgExportOptions,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sheet_width: DEFAULT_SHEET_WIDTH,
            part_spacing: DEFAULT_PART_SPACING,
            seam_allowance: 0.0,
            grid_size: 1.0,
            strict_oversize: false,
            export: SvgExportOptions::default(),
        }
    }
}

impl LayoutConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: LayoutConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `craftcad.toml` if present, then apply environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `CRAFTCAD_*` overrides read through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let number = |key: &str| -> Result<Option<f64>> {
            lookup(key)
                .map(|raw| {
                    raw.trim()
                        .parse::<f64>()
                        .with_context(|| format!("{} is not a number: {:?}", key, raw))
                })
                .transpose()
        };

        if let Some(width) = number("CRAFTCAD_SHEET_WIDTH")? {
            self.sheet_width = width;
        }
        if let Some(spacing) = number("CRAFTCAD_PART_SPACING")? {
            self.part_spacing = spacing;
        }
        if let Some(seam) = number("CRAFTCAD_SEAM_ALLOWANCE")? {
            self.seam_allowance = seam;
        }
        if let Some(grid) = number("CRAFTCAD_GRID_SIZE")? {
            self.grid_size = grid;
        }
        if let Some(raw) = lookup("CRAFTCAD_STRICT") {
            self.strict_oversize = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                _ => anyhow::bail!("CRAFTCAD_STRICT is not a boolean: {:?}", raw),
            };
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> crate::Result<()> {
        self.sheet().validate()?;
        require_positive("grid size", self.grid_size)?;
        if !(self.seam_allowance.is_finite() && self.seam_allowance >= 0.0) {
            return Err(Error::invalid_argument(format!(
                "seam allowance must be a non-negative finite number, got {}",
                self.seam_allowance
            )));
        }
        Ok(())
    }

    pub fn sheet(&self) -> Sheet {
        Sheet::new(self.sheet_width, self.part_spacing)
    }

    pub fn packer(&self) -> ShelfPacker {
        ShelfPacker::new(self.sheet()).with_options(PackOptions {
            strict: self.strict_oversize,
        })
    }
}

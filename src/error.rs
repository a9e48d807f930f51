// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Error types for the geometry core

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for geometry core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable errors returned by flattening, packing and transform operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The source shape carries no usable geometry.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A numeric argument is out of its valid range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A part is wider than the material sheet.
    #[error("Part '{label}' is {width} wide but the sheet is only {sheet_width} wide")]
    OversizedPart {
        label: String,
        width: f64,
        sheet_width: f64,
    },

    /// An edge, face or vertex index points past the end of its list.
    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// No part with the given id exists in the session.
    #[error("Part not found: {0}")]
    PartNotFound(Uuid),
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }
}

/// Reject non-finite or non-positive values for `name`.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid_argument(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )))
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! CLI subsystem for CraftCAD

pub mod reporter;
pub mod runner;

pub use reporter::Reporter;
pub use runner::{NestResult, OutputFormat, Overrides, Runner};

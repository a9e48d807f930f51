// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! I/O module - job import and layout export

mod export_svg;
mod job;

pub use export_svg::export as export_svg;
pub use export_svg::{layout_to_svg, SvgExportOptions};
pub use job::{export_layout_json, import_job, parse_job, Job, JobPart};

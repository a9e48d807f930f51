// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! SVG page exporter for packed layouts

use crate::layout::Layout;
use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Page and stroke settings supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgExportOptions {
    /// Page width in user units
    pub page_width: f64,
    /// Page height in user units
    pub page_height: f64,
    /// Stroke color for part outlines
    pub stroke: String,
    pub stroke_width: f64,
    /// Decimal places for coordinates
    pub precision: usize,
    /// Write each part's label at its top-left corner
    pub include_labels: bool,
    /// Outline the used portion of the sheet
    pub include_sheet: bool,
}

impl Default for SvgExportOptions {
    fn default() -> Self {
        Self {
            page_width: 600.0,
            page_height: 800.0,
            stroke: "#000000".to_string(),
            stroke_width: 1.0,
            precision: 3,
            include_labels: false,
            include_sheet: false,
        }
    }
}

impl SvgExportOptions {
    /// Extent of `layout` beyond the page as `(dx, dy)`, or `None` when every part fits.
    pub fn page_overflow(&self, layout: &Layout) -> Option<(f64, f64)> {
        let (right, bottom) = layout.parts.iter().fold((0.0_f64, 0.0_f64), |(r, b), part| {
            (r.max(part.right()), b.max(part.bottom()))
        });
        let dx = (right - self.page_width).max(0.0);
        let dy = (bottom - self.page_height).max(0.0);
        (dx > 0.0 || dy > 0.0).then_some((dx, dy))
    }
}

fn fmt(v: f64, precision: usize) -> String {
    format!("{:.1$}", v, precision)
}

/// Render a layout as a single-page SVG document.
pub fn layout_to_svg(layout: &Layout, options: &SvgExportOptions) -> Result<String> {
    if let Some((dx, dy)) = options.page_overflow(layout) {
        warn!(
            "Layout exceeds the {}x{} page by {}x{}; parts past the edge are clipped",
            options.page_width, options.page_height, dx, dy
        );
    }

    let p = options.precision;
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let page_width = fmt(options.page_width, p);
    let page_height = fmt(options.page_height, p);
    let view_box = format!("0 0 {} {}", page_width, page_height);
    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
    svg.push_attribute(("width", page_width.as_str()));
    svg.push_attribute(("height", page_height.as_str()));
    svg.push_attribute(("viewBox", view_box.as_str()));
    writer.write_event(Event::Start(svg))?;

    let stroke_width = fmt(options.stroke_width, p);
    let mut group = BytesStart::new("g");
    group.push_attribute(("fill", "none"));
    group.push_attribute(("stroke", options.stroke.as_str()));
    group.push_attribute(("stroke-width", stroke_width.as_str()));
    writer.write_event(Event::Start(group))?;

    if options.include_sheet {
        let width = fmt(layout.sheet_width, p);
        let height = fmt(layout.used_height, p);
        let mut sheet = BytesStart::new("rect");
        sheet.push_attribute(("class", "sheet"));
        sheet.push_attribute(("x", "0"));
        sheet.push_attribute(("y", "0"));
        sheet.push_attribute(("width", width.as_str()));
        sheet.push_attribute(("height", height.as_str()));
        sheet.push_attribute(("stroke-dasharray", "4 2"));
        writer.write_event(Event::Empty(sheet))?;
    }

    for part in &layout.parts {
        let id = part.id.to_string();
        let x = fmt(part.position.x, p);
        let y = fmt(part.position.y, p);
        let width = fmt(part.width, p);
        let height = fmt(part.height, p);

        let mut rect = BytesStart::new("rect");
        rect.push_attribute(("data-id", id.as_str()));
        rect.push_attribute(("class", "part"));
        rect.push_attribute(("x", x.as_str()));
        rect.push_attribute(("y", y.as_str()));
        rect.push_attribute(("width", width.as_str()));
        rect.push_attribute(("height", height.as_str()));
        writer.write_event(Event::Empty(rect))?;
    }

    writer.write_event(Event::End(BytesEnd::new("g")))?;

    if options.include_labels {
        for part in layout.parts.iter().filter(|part| part.label.is_some()) {
            let label = part.display_name();
            let x = fmt(part.position.x + 2.0, p);
            let y = fmt(part.position.y + 12.0, p);

            let mut text = BytesStart::new("text");
            text.push_attribute(("x", x.as_str()));
            text.push_attribute(("y", y.as_str()));
            text.push_attribute(("font-size", "10"));
            writer.write_event(Event::Start(text))?;
            writer.write_event(Event::Text(BytesText::new(&label)))?;
            writer.write_event(Event::End(BytesEnd::new("text")))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("svg")))?;

    String::from_utf8(writer.into_inner()).context("SVG output is not valid UTF-8")
}

/// Export a layout to an SVG file
pub fn export(layout: &Layout, path: impl AsRef<Path>, options: &SvgExportOptions) -> Result<()> {
    let svg = layout_to_svg(layout, options)?;
    std::fs::write(path.as_ref(), svg)
        .with_context(|| format!("Failed to write SVG file: {:?}", path.as_ref()))?;
    Ok(())
}

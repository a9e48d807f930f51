// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! Job import and layout export tests

use anyhow::Result;
use craftcad::cli::{Overrides, Runner};
use craftcad::io::{self, SvgExportOptions};
use craftcad::{Layout, LayoutConfig};
use tempfile::{tempdir, NamedTempFile};

const WALLET_JOB: &str = r#"{
    "sheet_width": 200,
    "part_spacing": 10,
    "parts": [
        { "label": "outer", "min": [0, 0, 0], "max": [100, 50, 2] },
        { "label": "pocket", "width": 80, "height": 80 },
        { "label": "card slot", "width": 60, "height": 40 }
    ]
}"#;

#[test]
fn test_svg_export_writes_one_page() -> Result<()> {
    let job = io::parse_job(WALLET_JOB)?;
    let layout = craftcad::pack(job.to_parts()?, 200.0, 10.0)?;

    let file = NamedTempFile::new()?;
    io::export_svg(&layout, file.path(), &SvgExportOptions::default())?;

    let svg = std::fs::read_to_string(file.path())?;
    assert_eq!(svg.matches("<svg").count(), 1);
    assert_eq!(svg.matches(r#"class="part""#).count(), 3);
    assert!(svg.contains(r#"height="800.000""#));
    Ok(())
}

#[test]
fn test_json_export_round_trips_layout() -> Result<()> {
    let job = io::parse_job(WALLET_JOB)?;
    let layout = craftcad::pack(job.to_parts()?, 200.0, 10.0)?;

    let file = NamedTempFile::new()?;
    io::export_layout_json(&layout, file.path())?;

    let loaded: Layout = serde_json::from_str(&std::fs::read_to_string(file.path())?)?;
    assert_eq!(loaded, layout);
    Ok(())
}

#[test]
fn test_runner_end_to_end() -> Result<()> {
    let dir = tempdir()?;
    let job_path = dir.path().join("wallet.json");
    let svg_path = dir.path().join("wallet.svg");
    std::fs::write(&job_path, WALLET_JOB)?;

    let result = Runner::new(LayoutConfig::default()).run_job(
        &job_path,
        Some(&svg_path),
        &Overrides::default(),
    )?;

    assert_eq!(result.output.as_deref(), Some(svg_path.as_path()));
    assert!(svg_path.exists());

    let pocket = result
        .layout
        .parts
        .iter()
        .find(|p| p.label.as_deref() == Some("pocket"))
        .expect("pocket placed");
    assert_eq!((pocket.position.x, pocket.position.y), (0.0, 0.0));
    Ok(())
}

#[test]
fn test_runner_seam_override_and_strict() -> Result<()> {
    let dir = tempdir()?;
    let job_path = dir.path().join("wallet.json");
    std::fs::write(&job_path, WALLET_JOB)?;
    let runner = Runner::default();

    let with_seam = runner.run_job(
        &job_path,
        None,
        &Overrides {
            seam_allowance: Some(5.0),
            ..Default::default()
        },
    )?;
    let outer = with_seam
        .layout
        .parts
        .iter()
        .find(|p| p.label.as_deref() == Some("outer"))
        .expect("outer placed");
    assert_eq!((outer.width, outer.height), (110.0, 60.0));

    let strict = runner.run_job(
        &job_path,
        None,
        &Overrides {
            sheet_width: Some(90.0),
            strict: true,
            ..Default::default()
        },
    );
    let err = strict.err().expect("outer is wider than a 90 wide sheet");
    assert!(format!("{:#}", err).contains("outer"));
    Ok(())
}

#[test]
fn test_unsupported_output_is_rejected_before_packing() -> Result<()> {
    let dir = tempdir()?;
    let job_path = dir.path().join("wallet.json");
    std::fs::write(&job_path, WALLET_JOB)?;

    let pdf = dir.path().join("wallet.pdf");
    let result = Runner::default().run_job(&job_path, Some(&pdf), &Overrides::default());
    assert!(result.is_err());
    assert!(!pdf.exists());
    Ok(())
}

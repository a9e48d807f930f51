// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! CraftCAD CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use craftcad::cli::{Overrides, Reporter, Runner};
use craftcad::{snap_to_grid, LayoutConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "craftcad")]
#[command(about = "CraftCAD - pattern flattening and sheet nesting for craft parts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./craftcad.toml when present)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack the parts of a JSON job file onto a sheet
    Nest {
        /// Job file
        job: PathBuf,

        /// Output file (.svg or .json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sheet width
        #[arg(long)]
        sheet_width: Option<f64>,

        /// Gap between parts and rows
        #[arg(long)]
        spacing: Option<f64>,

        /// Per-side seam allowance
        #[arg(long)]
        seam: Option<f64>,

        /// Fail on parts wider than the sheet
        #[arg(long)]
        strict: bool,
    },

    /// Snap values to a grid
    Snap {
        /// Values to snap
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Grid size (defaults to the configured grid)
        #[arg(short, long)]
        grid: Option<f64>,
    },

    /// Print the effective configuration as TOML
    Config,

    /// Show version information
    Version,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "craftcad=debug" } else { "craftcad=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<LayoutConfig> {
    match path {
        Some(path) => {
            let mut config = LayoutConfig::from_file(path)?;
            config.apply_env(|key| std::env::var(key).ok())?;
            Ok(config)
        }
        None => LayoutConfig::load(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        Reporter::report_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Nest {
            job,
            output,
            sheet_width,
            spacing,
            seam,
            strict,
        } => {
            let overrides = Overrides {
                sheet_width: *sheet_width,
                part_spacing: *spacing,
                seam_allowance: *seam,
                strict: *strict,
            };
            nest_command(config, job, output.as_deref(), &overrides, cli.verbose)?;
        }
        Commands::Snap { values, grid } => {
            let grid = grid.unwrap_or(config.grid_size);
            for value in values {
                println!("{}", snap_to_grid(*value, grid)?);
            }
        }
        Commands::Config => {
            let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            print!("{}", content);
        }
        Commands::Version => {
            println!("CraftCAD v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn nest_command(
    config: LayoutConfig,
    job: &Path,
    output: Option<&Path>,
    overrides: &Overrides,
    verbose: bool,
) -> Result<()> {
    if verbose {
        Reporter::report_info(&format!("Nesting: {}", job.display()));
    }

    let runner = Runner::new(config);
    let result = runner.run_job(job, output, overrides)?;

    Reporter::report_layout(
        &job.display().to_string(),
        &result.layout,
        result.duration,
        verbose,
    );

    if let Some(path) = result.output {
        Reporter::success(&format!("Layout written to {}", path.display()));
    }

    Ok(())
}

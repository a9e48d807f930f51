// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CraftCAD Inc.

//! CLI output reporter with colored formatting

use crate::layout::Layout;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a packed layout
    pub fn report_layout(job: &str, layout: &Layout, duration: Duration, verbose: bool) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Job:".bold(), job.cyan());
        println!("{}", "━".repeat(80).bright_black());

        if layout.has_warnings() {
            println!(
                "{} {}",
                "⚠️".yellow(),
                format!("Packed with {} warning(s)", layout.warnings.len())
                    .yellow()
                    .bold()
            );
        } else {
            println!("{} {}", "✅".green(), "Packed cleanly".green().bold());
        }

        println!("\n{}", "Sheet:".bold());
        Self::print_field("Parts", &layout.parts.len().to_string());
        Self::print_field("Rows", &layout.rows.to_string());
        Self::print_field(
            "Used",
            &format!(
                "{:.1} x {:.1} (sheet width {:.1})",
                layout.used_width, layout.used_height, layout.sheet_width
            ),
        );
        Self::print_field(
            "Utilization",
            &Self::format_percent(layout.utilization()),
        );

        if verbose {
            println!("\n{}", "Placements:".bold());
            for part in &layout.parts {
                println!(
                    "  {:<24} {:>9.2} x {:<9.2} @ ({:.2}, {:.2})",
                    part.display_name().cyan(),
                    part.width,
                    part.height,
                    part.position.x,
                    part.position.y
                );
            }
        }

        for warning in &layout.warnings {
            Self::report_warning(&warning.to_string());
        }

        println!("\n{}", "Performance:".bold());
        Self::print_field("Packing", &Self::format_duration(duration));
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn print_field(name: &str, value: &str) {
        println!("  {} {}", format!("{}:", name).bright_black(), value.cyan());
    }

    fn format_percent(ratio: f64) -> String {
        format!("{:.1}%", ratio * 100.0)
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(
            Reporter::format_duration(Duration::from_micros(500)),
            "500µs"
        );
        assert_eq!(
            Reporter::format_duration(Duration::from_millis(5)),
            "5.00ms"
        );
        assert_eq!(Reporter::format_duration(Duration::from_secs(2)), "2.00s");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(Reporter::format_percent(0.4567), "45.7%");
    }
}

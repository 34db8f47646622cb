//! mobius convergence command - the analysis at several resolutions.

use anyhow::{Context, Result};
use mobius::build_shape;
use serde::Serialize;

use crate::{output, Cli, NumericsArgs, OutputFormat};

#[derive(Serialize)]
struct ConvergenceRow {
    resolution: usize,
    surface_area: f64,
    edge_length: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    surface_area_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    edge_length_change: Option<f64>,
}

pub fn run(
    radius: f64,
    width: f64,
    resolutions: &[usize],
    numerics: NumericsArgs,
    cli: &Cli,
) -> Result<()> {
    let mut rows: Vec<ConvergenceRow> = Vec::with_capacity(resolutions.len());
    for &n in resolutions {
        let report = build_shape(radius, width, n)
            .with_context(|| format!("Failed to build shape at resolution {n}"))?
            .with_analysis(numerics.analysis_params())
            .analyze();
        let (surface_area_change, edge_length_change) = match rows.last() {
            Some(prev) => (
                Some((report.surface_area - prev.surface_area).abs()),
                Some((report.edge_length - prev.edge_length).abs()),
            ),
            None => (None, None),
        };
        rows.push(ConvergenceRow {
            resolution: n,
            surface_area: report.surface_area,
            edge_length: report.edge_length,
            surface_area_change,
            edge_length_change,
        });
    }

    match cli.format {
        OutputFormat::Json => output::print(&rows, cli.format, cli.quiet),
        OutputFormat::Text => {
            if !cli.quiet {
                println!(
                    "{:>8}  {:>14}  {:>12}  {:>14}  {:>12}",
                    "n", "area", "d(area)", "edge", "d(edge)"
                );
                for row in &rows {
                    println!(
                        "{:>8}  {:>14.8}  {:>12}  {:>14.8}  {:>12}",
                        row.resolution,
                        row.surface_area,
                        format_change(row.surface_area_change),
                        row.edge_length,
                        format_change(row.edge_length_change),
                    );
                }
            }
        }
    }

    Ok(())
}

fn format_change(change: Option<f64>) -> String {
    change.map_or_else(|| "-".to_string(), |c| format!("{c:.3e}"))
}

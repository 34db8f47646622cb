//! mobius analyze command - surface area and edge length.

use anyhow::{Context, Result};
use mobius::build_shape;
use serde::Serialize;

use crate::{output, Cli, NumericsArgs, OutputFormat, ShapeArgs};

#[derive(Serialize)]
struct AnalyzeResult {
    radius: f64,
    width: f64,
    resolution: usize,
    surface_area: f64,
    edge_length: f64,
}

pub fn run(shape_args: ShapeArgs, numerics: NumericsArgs, cli: &Cli) -> Result<()> {
    let shape = build_shape(shape_args.radius, shape_args.width, shape_args.resolution)
        .context("Failed to build shape")?
        .with_analysis(numerics.analysis_params());
    let report = shape.analyze();

    let result = AnalyzeResult {
        radius: shape_args.radius,
        width: shape_args.width,
        resolution: shape_args.resolution,
        surface_area: report.surface_area,
        edge_length: report.edge_length,
    };

    match cli.format {
        OutputFormat::Json => output::print(&result, cli.format, cli.quiet),
        OutputFormat::Text => {
            if !cli.quiet {
                println!("Surface Area: {:.4}", result.surface_area);
                println!("Edge Length: {:.4}", result.edge_length);
            }
        }
    }

    Ok(())
}

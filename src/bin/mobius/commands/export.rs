//! mobius export command - write the sampled strip as OBJ.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use mobius::build_shape;
use mobius::export::write_obj;
use serde::Serialize;

use crate::{output, Cli, OutputFormat, ShapeArgs};

#[derive(Serialize)]
struct ExportResult {
    output: String,
    resolution: usize,
    vertices: usize,
    triangles: usize,
}

pub fn run(shape_args: ShapeArgs, output_path: &Path, cli: &Cli) -> Result<()> {
    let shape = build_shape(shape_args.radius, shape_args.width, shape_args.resolution)
        .context("Failed to build shape")?;

    let file = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    write_obj(&shape, &mut writer)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    let (rows, cols) = shape.mesh().shape();
    let result = ExportResult {
        output: output_path.display().to_string(),
        resolution: shape_args.resolution,
        vertices: rows * cols,
        triangles: 2 * (rows - 1) * (cols - 1),
    };

    match cli.format {
        OutputFormat::Json => output::print(&result, cli.format, cli.quiet),
        OutputFormat::Text => {
            if !cli.quiet {
                println!(
                    "Wrote {} ({} vertices, {} triangles)",
                    result.output, result.vertices, result.triangles
                );
            }
        }
    }

    Ok(())
}

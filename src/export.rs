//! Wavefront OBJ export of a sampled strip.
//!
//! Writes the mesh as triangles (`v` and `f` records) followed by the two
//! boundary curves as polylines (`l` records).

use std::io::{self, Write};

use crate::error::{ExportError, Result};
use crate::geometry::curve::EdgeSide;
use crate::math::Point3;
use crate::shape::MobiusShape;

/// Writes `shape` as Wavefront OBJ text to `writer`.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if writing fails.
pub fn write_obj<W: Write>(shape: &MobiusShape, writer: &mut W) -> Result<()> {
    write_obj_records(shape, writer).map_err(ExportError::from)?;
    Ok(())
}

fn write_obj_records<W: Write>(shape: &MobiusShape, writer: &mut W) -> io::Result<()> {
    let params = shape.params();
    let mesh = shape.mesh().to_triangle_mesh();
    writeln!(
        writer,
        "# Mobius strip R={} w={} n={}",
        params.radius(),
        params.width(),
        params.resolution()
    )?;
    writeln!(
        writer,
        "# Vertices: {}, Triangles: {}",
        mesh.vertices.len(),
        mesh.indices.len()
    )?;

    writeln!(writer, "o surface")?;
    for v in &mesh.vertices {
        write_vertex(writer, v)?;
    }
    // OBJ indices are 1-based
    for [a, b, c] in &mesh.indices {
        writeln!(writer, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }

    let mut offset = mesh.vertices.len();
    for (name, side) in [("edge_positive", EdgeSide::Positive), ("edge_negative", EdgeSide::Negative)] {
        let points = &shape.edge(side).points;
        writeln!(writer, "o {name}")?;
        for p in points {
            write_vertex(writer, p)?;
        }
        write!(writer, "l")?;
        for k in 1..=points.len() {
            write!(writer, " {}", offset + k)?;
        }
        writeln!(writer)?;
        offset += points.len();
    }

    writer.flush()
}

fn write_vertex<W: Write>(writer: &mut W, p: &Point3) -> io::Result<()> {
    writeln!(writer, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)
}

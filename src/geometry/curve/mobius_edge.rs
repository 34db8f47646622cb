use std::f64::consts::TAU;

use crate::geometry::surface::{MobiusSurface, Surface};
use crate::math::Point3;

use super::{Curve, CurveDomain};

/// Which boundary of the strip an edge runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeSide {
    /// The boundary at `v = +w/2`.
    Positive,
    /// The boundary at `v = -w/2`.
    Negative,
}

impl EdgeSide {
    /// Returns `+1.0` or `-1.0`.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// One boundary of a Möbius strip, traced for `u` in `[0, 2*pi]` at fixed
/// `v = ±w/2`.
///
/// The strip has a single boundary loop; the two sides traced over one turn
/// are its two halves and join end to end (`+w/2` at `2*pi` meets `-w/2` at
/// `0`), so each half on its own is open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusEdge {
    surface: MobiusSurface,
    side: EdgeSide,
}

impl MobiusEdge {
    /// Creates the edge of `surface` on the given side.
    #[must_use]
    pub fn new(surface: MobiusSurface, side: EdgeSide) -> Self {
        Self { surface, side }
    }

    /// Returns the fixed `v` parameter of this edge.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.side.sign() * self.surface.half_width()
    }
}

impl Curve for MobiusEdge {
    fn evaluate(&self, t: f64) -> Point3 {
        self.surface.evaluate(t, self.offset())
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }
}

//! Five-point slope estimation with virtual knots at the domain edges.
//!
//! The slope at a knot is determined by the knot itself and two neighbours on
//! each side. Near either edge fewer than five real knots exist, so the missing
//! ones are synthesised by continuing the local second difference outward: the
//! virtual knots lie on the quadratic through the three nearest real knots.
//! Virtual abscissas mirror the real knots across the edge.

use super::{Knot, knot};

/// Where a knot sits relative to the edges of the sample set.
///
/// Each variant owns the rule that assembles its five-knot neighbourhood.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stencil {
    /// First knot: two virtual knots on the left.
    LeftEdge,
    /// Second knot: one virtual knot on the left.
    SecondFromLeft,
    /// Two real knots on both sides.
    Interior,
    /// Second-to-last knot: one virtual knot on the right.
    SecondFromRight,
    /// Last knot: two virtual knots on the right.
    RightEdge,
}

impl Stencil {
    /// Pick the stencil for knot `index` in a set of `len` knots.
    ///
    /// Requires `len >= 5` and `index < len`.
    pub fn classify(index: usize, len: usize) -> Self {
        debug_assert!(len >= super::MIN_POINTS, "stencil needs five knots, got {len}");
        debug_assert!(index < len, "knot {index} outside a set of {len}");
        match index {
            0 => Self::LeftEdge,
            1 => Self::SecondFromLeft,
            i if i + 1 == len => Self::RightEdge,
            i if i + 2 == len => Self::SecondFromRight,
            _ => Self::Interior,
        }
    }

    /// The five knots centred on `index`, real where available and virtual
    /// otherwise, ordered left to right.
    pub fn neighbourhood<P: AsRef<[f64]>>(self, points: &[P], index: usize) -> [Knot; 5] {
        match self {
            Self::Interior => [
                knot(points, index - 2),
                knot(points, index - 1),
                knot(points, index),
                knot(points, index + 1),
                knot(points, index + 2),
            ],
            Self::LeftEdge => {
                let (k3, k4, k5) = (
                    knot(points, index),
                    knot(points, index + 1),
                    knot(points, index + 2),
                );
                let k2 = extend_left(k3.x + k4.x - k5.x, k3, k4, k5);
                let k1 = extend_left(2.0 * k3.x - k5.x, k2, k3, k4);
                [k1, k2, k3, k4, k5]
            }
            Self::SecondFromLeft => {
                let (k2, k3, k4, k5) = (
                    knot(points, index - 1),
                    knot(points, index),
                    knot(points, index + 1),
                    knot(points, index + 2),
                );
                let k1 = extend_left(2.0 * k3.x - k5.x, k2, k3, k4);
                [k1, k2, k3, k4, k5]
            }
            Self::SecondFromRight => {
                let (k1, k2, k3, k4) = (
                    knot(points, index - 2),
                    knot(points, index - 1),
                    knot(points, index),
                    knot(points, index + 1),
                );
                let k5 = extend_right(k2, k3, k4, 2.0 * k3.x - k1.x);
                [k1, k2, k3, k4, k5]
            }
            Self::RightEdge => {
                let (k1, k2, k3) = (
                    knot(points, index - 2),
                    knot(points, index - 1),
                    knot(points, index),
                );
                let k4 = extend_right(k1, k2, k3, k3.x + k2.x - k1.x);
                let k5 = extend_right(k2, k3, k4, 2.0 * k3.x - k1.x);
                [k1, k2, k3, k4, k5]
            }
        }
    }
}

/// Five-point slope at knot `index`.
///
/// `points` must hold at least five knots and `index` must be in range.
pub fn slope<P: AsRef<[f64]>>(points: &[P], index: usize) -> f64 {
    let [k1, k2, k3, k4, k5] = Stencil::classify(index, points.len()).neighbourhood(points, index);
    blend(
        chord(k1, k2),
        chord(k2, k3),
        chord(k3, k4),
        chord(k4, k5),
    )
}

/// Weighted mean of the two central chord slopes, favouring the side whose
/// chords change less.
fn blend(m12: f64, m23: f64, m34: f64, m45: f64) -> f64 {
    // Both weights vanish here, the general form would be 0/0.
    if m12 == m23 && m34 == m45 {
        return (m23 + m34) / 2.0;
    }
    let right_change = (m45 - m34).abs();
    let left_change = (m23 - m12).abs();
    (right_change * m23 + left_change * m34) / (right_change + left_change)
}

/// Slope of the chord between two knots.
fn chord(a: Knot, b: Knot) -> f64 {
    (b.y - a.y) / (b.x - a.x)
}

/// Virtual knot at `x`, left of `a`, keeping the second difference of `a, b, c`.
fn extend_left(x: f64, a: Knot, b: Knot, c: Knot) -> Knot {
    Knot {
        x,
        y: a.y - (a.x - x) * (2.0 * chord(a, b) - chord(b, c)),
    }
}

/// Virtual knot at `x`, right of `c`, keeping the second difference of `a, b, c`.
fn extend_right(a: Knot, b: Knot, c: Knot, x: f64) -> Knot {
    Knot {
        x,
        y: c.y + (x - c.x) * (2.0 * chord(b, c) - chord(a, b)),
    }
}

//! Akima interpolation, after H. Akima, "A new method of interpolation and
//! smooth curve fitting based on local procedures" (1970).
//!
//! The curve through a set of sorted samples is a chain of cubics, one per pair
//! of adjacent knots. Each cubic is fixed by the two knot ordinates and the
//! [five-point slopes](slope::slope) at those knots, so a single interval can be
//! built on its own without solving a global system.
//!
//! ```
//! use curvekit::akima;
//!
//! let samples = [[10.0, 10.0], [20.0, 20.0], [30.0, 30.0], [40.0, 40.0], [50.0, 50.0]];
//!
//! // Walk forward from the first interval.
//! let mut interval = akima::first(&samples)?;
//! for x in [10.0, 26.0, 42.0] {
//!     while interval.x2() < x {
//!         interval = interval.next(&samples).expect("x is inside the domain");
//!     }
//!     assert_eq!(interval.point_at(x), x);
//! }
//! # Ok::<(), curvekit::error::Error>(())
//! ```

use std::iter::FusedIterator;

use log::{debug, trace};

use crate::error::{Error, Result};

/// Single cubic segments and chaining between neighbours.
mod interval;
/// The five-point slope estimator.
pub mod slope;

pub use interval::Interval;
pub use slope::{Stencil, slope};

/// Smallest sample set the method accepts: one knot and two neighbours on
/// each side.
pub const MIN_POINTS: usize = 5;

/// A sample point `(x, y)`, real or synthesised at the domain edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Knot {
    /// Abscissa.
    pub x: f64,
    /// Ordinate.
    pub y: f64,
}

/// Read knot `index` from a control-point set.
///
/// # Panics
///
/// Panics if `index` is out of bounds or the point has fewer than two
/// coordinates.
#[inline]
fn knot<P: AsRef<[f64]>>(points: &[P], index: usize) -> Knot {
    let coords = points[index].as_ref();
    Knot {
        x: coords[0],
        y: coords[1],
    }
}

/// Build the interval whose knots bracket `x`.
///
/// `points` must be sorted by strictly increasing abscissa; this is not
/// checked. Fails when there are fewer than [`MIN_POINTS`] samples or when `x`
/// lies outside the sampled domain.
///
/// When `x` is a sample abscissa other than the last, the interval starts at
/// that knot and [`Interval::point_at`] returns its ordinate exactly.
pub fn build<P: AsRef<[f64]>>(points: &[P], x: f64) -> Result<Interval> {
    let (min, max) = domain(points)?;
    if !(min..=max).contains(&x) {
        debug!("akima query {x} outside [{min}, {max}]");
        return Err(Error::OutOfDomain { x, min, max });
    }

    let right = bracket(points, x);
    let left = right - 1;
    trace!("akima query {x} bracketed by knots {left}..={right}");

    Ok(Interval::from_knots(
        left,
        knot(points, left),
        knot(points, right),
        slope(points, left),
        slope(points, right),
    ))
}

/// The leftmost interval of the curve.
pub fn first<P: AsRef<[f64]>>(points: &[P]) -> Result<Interval> {
    let (min, _) = domain(points)?;
    build(points, min)
}

/// The rightmost interval of the curve.
pub fn last<P: AsRef<[f64]>>(points: &[P]) -> Result<Interval> {
    let (_, max) = domain(points)?;
    build(points, max)
}

/// Iterate over every interval from left to right.
pub fn intervals<P: AsRef<[f64]>>(points: &[P]) -> Result<Intervals<'_, P>> {
    Ok(Intervals {
        points,
        current: Some(first(points)?),
    })
}

/// Evaluate the curve at each of `xs`.
///
/// Ascending queries reuse the current interval and step forward with
/// [`Interval::next`]; a query left of the current interval triggers a fresh
/// search. Stops at the first query outside the domain.
pub fn interpolate<P, I>(points: &[P], xs: I) -> Result<Vec<f64>>
where
    P: AsRef<[f64]>,
    I: IntoIterator<Item = f64>,
{
    let (min, max) = domain(points)?;
    let xs = xs.into_iter();
    let mut values = Vec::with_capacity(xs.size_hint().0);
    let mut cursor: Option<Interval> = None;

    for x in xs {
        if !(min..=max).contains(&x) {
            debug!("akima query {x} outside [{min}, {max}]");
            return Err(Error::OutOfDomain { x, min, max });
        }
        let interval = match cursor {
            Some(current) if x >= current.x1() => seek_forward(current, points, x),
            _ => build(points, x)?,
        };
        values.push(interval.point_at(x));
        cursor = Some(interval);
    }
    Ok(values)
}

/// Step right from `current` until `x` falls before its right knot or the
/// chain ends.
fn seek_forward<P: AsRef<[f64]>>(mut current: Interval, points: &[P], x: f64) -> Interval {
    while current.x2() <= x {
        match current.next(points) {
            Some(next) => current = next,
            None => break,
        }
    }
    current
}

/// Validate the sample count and return the first and last abscissas.
fn domain<P: AsRef<[f64]>>(points: &[P]) -> Result<(f64, f64)> {
    if points.len() < MIN_POINTS {
        debug!("akima needs {MIN_POINTS} points, got {}", points.len());
        return Err(Error::TooFewPoints {
            required: MIN_POINTS,
            actual: points.len(),
        });
    }
    Ok((knot(points, 0).x, knot(points, points.len() - 1).x))
}

/// Index of the right knot of the interval containing `x`.
///
/// Probes from both ends at once, so queries near either edge resolve in a
/// few steps. Intervals are closed on the left: a query on a knot selects the
/// interval starting there, except at the last knot. `x` must lie within the
/// domain.
fn bracket<P: AsRef<[f64]>>(points: &[P], x: f64) -> usize {
    let len = points.len();
    for (upper, lower) in (1..len).zip((0..len - 1).rev()) {
        if x < knot(points, upper).x {
            return upper;
        }
        if x >= knot(points, lower).x {
            return lower + 1;
        }
    }
    len - 1
}

/// Iterator over consecutive intervals, produced by [`intervals`].
#[derive(Clone, Debug)]
pub struct Intervals<'a, P> {
    /// Control points the intervals are read from.
    points: &'a [P],
    /// Next interval to yield.
    current: Option<Interval>,
}

impl<P: AsRef<[f64]>> Iterator for Intervals<'_, P> {
    type Item = Interval;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        self.current = current.next(self.points);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .current
            .map_or(0, |c| self.points.len() - 1 - c.index());
        (remaining, Some(remaining))
    }
}

impl<P: AsRef<[f64]>> ExactSizeIterator for Intervals<'_, P> {}

impl<P: AsRef<[f64]>> FusedIterator for Intervals<'_, P> {}

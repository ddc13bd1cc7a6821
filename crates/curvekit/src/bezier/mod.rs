//! Bézier curves of any degree over control points of any dimension.
//!
//! A curve with `n + 1` control points has degree `n`; the point at offset
//! `t ∈ [0, 1]` is the Bernstein-weighted sum of the control points. Degrees up
//! to three use their closed forms, higher degrees accumulate the sum with an
//! exact running binomial coefficient. Once that coefficient no longer fits in
//! a `u64` the curve is evaluated by de Casteljau subdivision instead.

use crate::point::Point;

/// Bernstein basis polynomials.
mod bernstein;

pub use bernstein::basis;

/// Evaluate the Bézier curve through `points` at `offset`.
///
/// `offset` 0 maps to the first control point and 1 to the last. Offsets
/// outside `[0, 1]` are not rejected; they extrapolate the polynomial. All
/// points must share one dimensionality. An empty control-point set yields an
/// empty [`Point`].
pub fn evaluate<P: AsRef<[f64]>>(points: &[P], offset: f64) -> Point {
    let Some(first) = points.first() else {
        return Point::default();
    };
    debug_assert!(
        points
            .iter()
            .all(|p| p.as_ref().len() == first.as_ref().len()),
        "control points differ in dimension"
    );

    match points {
        [only] => Point::from_coords(only.as_ref()),
        [p0, p1] => linear(p0.as_ref(), p1.as_ref(), offset),
        [p0, p1, p2] => quadratic([p0.as_ref(), p1.as_ref(), p2.as_ref()], offset),
        [p0, p1, p2, p3] => cubic(
            [p0.as_ref(), p1.as_ref(), p2.as_ref(), p3.as_ref()],
            offset,
        ),
        _ if points.len() <= EXACT_DEGREE + 1 => bernstein_sum(points, offset),
        _ => de_casteljau(points, offset),
    }
}

/// Evaluate `count` evenly spaced offsets from 0 to 1 inclusive.
///
/// Returns nothing when `points` is empty.
pub fn samples<P: AsRef<[f64]>>(points: &[P], count: usize) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }
    match count {
        0 => Vec::new(),
        1 => vec![evaluate(points, 0.0)],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| evaluate(points, i as f64 / last))
                .collect()
        }
    }
}

/// `(1 − t)·P0 + t·P1`
fn linear(p0: &[f64], p1: &[f64], t: f64) -> Point {
    let s = 1.0 - t;
    Point(p0.iter().zip(p1).map(|(a, b)| a * s + b * t).collect())
}

/// `(1 − t)²·P0 + 2(1 − t)t·P1 + t²·P2`
fn quadratic([p0, p1, p2]: [&[f64]; 3], t: f64) -> Point {
    let s = 1.0 - t;
    let (ss, st, tt) = (s * s, s * t, t * t);
    Point(
        (0..p0.len())
            .map(|d| p0[d] * ss + 2.0 * p1[d] * st + p2[d] * tt)
            .collect(),
    )
}

/// `(1 − t)³·P0 + 3(1 − t)²t·P1 + 3(1 − t)t²·P2 + t³·P3`
fn cubic([p0, p1, p2, p3]: [&[f64]; 4], t: f64) -> Point {
    let s = 1.0 - t;
    let (sss, sst, stt, ttt) = (s * s * s, s * s * t, s * t * t, t * t * t);
    Point(
        (0..p0.len())
            .map(|d| p0[d] * sss + p3[d] * ttt + 3.0 * (p1[d] * sst + p2[d] * stt))
            .collect(),
    )
}

/// Highest degree summed with an exact running binomial coefficient.
///
/// The running product `C(n, k − 1)·(n − k + 1)` first exceeds `u64::MAX` at
/// `n = 63`.
const EXACT_DEGREE: usize = 62;

/// Full Bernstein sum for degree four up to [`EXACT_DEGREE`].
///
/// The first control point is weighted by `(1 − t)^n` up front so the curve
/// starts exactly on it; the loop then walks row `n` of Pascal's triangle one
/// entry at a time, ending on `C(n, n) = 1`.
fn bernstein_sum<P: AsRef<[f64]>>(points: &[P], offset: f64) -> Point {
    let degree = points.len() - 1;
    debug_assert!(degree <= EXACT_DEGREE, "degree {degree} overflows the running binomial");
    let complement = 1.0 - offset;

    let start = complement.powi(degree as i32);
    let mut acc = Point(points[0].as_ref().iter().map(|c| c * start).collect());

    let mut binomial: u64 = 1;
    let mut offset_power = 1.0;
    for (k, point) in points.iter().enumerate().skip(1) {
        binomial = binomial * (degree - k + 1) as u64 / k as u64;
        offset_power *= offset;
        let weight = binomial as f64 * offset_power * complement.powi((degree - k) as i32);
        for (sum, c) in acc.0.iter_mut().zip(point.as_ref()) {
            *sum += weight * c;
        }
    }
    acc
}

/// Repeated linear interpolation, used past [`EXACT_DEGREE`].
///
/// For offsets in `[0, 1]` every step is a convex combination, so the
/// intermediates stay within the range of the control points and offsets 0 and
/// 1 land exactly on the end points.
fn de_casteljau<P: AsRef<[f64]>>(points: &[P], offset: f64) -> Point {
    let dimension = points[0].as_ref().len();
    let complement = 1.0 - offset;
    let mut beta: Vec<f64> = points
        .iter()
        .flat_map(|p| p.as_ref().iter().copied())
        .collect();

    for level in 1..points.len() {
        for i in 0..(points.len() - level) * dimension {
            beta[i] = beta[i] * complement + beta[i + dimension] * offset;
        }
    }
    Point::from_coords(&beta[..dimension])
}

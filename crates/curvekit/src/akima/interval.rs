use super::{Knot, knot, slope::slope};

/// One cubic segment of an Akima curve, valid on `[x1, x2]`.
///
/// The segment is
///
/// ```text
/// y = p0 + t1·(x − x1) + p2·(x − x1)² + p3·(x − x1)³
/// ```
///
/// where `t1` and `t2` are the five-point slopes at the two knots. Intervals
/// are produced by [`build`](super::build) or by stepping from a neighbour with
/// [`next`](Self::next) and [`prev`](Self::prev). Stepping reads the same
/// control-point set again, so the set must not change between calls.
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    /// Index of the left knot in the control-point set.
    index: usize,
    /// Left knot abscissa.
    x1: f64,
    /// Right knot abscissa.
    x2: f64,
    /// Slope at the left knot.
    t1: f64,
    /// Slope at the right knot.
    t2: f64,
    /// Constant coefficient (the left ordinate).
    p0: f64,
    /// Quadratic coefficient.
    p2: f64,
    /// Cubic coefficient.
    p3: f64,
}

impl Interval {
    /// Hermite-to-power-basis conversion for the segment `left..right`.
    pub(super) fn from_knots(index: usize, left: Knot, right: Knot, t1: f64, t2: f64) -> Self {
        let width = right.x - left.x;
        let chord = (right.y - left.y) / width;
        let t_sum = t1 + t2;
        Self {
            index,
            x1: left.x,
            x2: right.x,
            t1,
            t2,
            p0: left.y,
            p2: (3.0 * chord - t1 - t_sum) / width,
            p3: (t_sum - 2.0 * chord) / (width * width),
        }
    }

    /// Evaluate the cubic at `x`.
    ///
    /// Bounds are not checked; outside `[x1, x2]` the polynomial is
    /// extrapolated. At `x1` the left ordinate is returned exactly; at `x2`
    /// the right ordinate is matched only up to rounding.
    pub fn point_at(&self, x: f64) -> f64 {
        let dx = x - self.x1;
        let dx2 = dx * dx;
        self.p0 + self.p3 * dx * dx2 + self.t1 * dx + self.p2 * dx2
    }

    /// The interval to the right, or `None` if this is the last one.
    ///
    /// The right knot and its slope become the new left knot, so only one new
    /// slope is computed.
    pub fn next<P: AsRef<[f64]>>(&self, points: &[P]) -> Option<Self> {
        let right = self.index + 2;
        if right >= points.len() {
            return None;
        }
        let left = Knot {
            x: self.x2,
            y: knot(points, self.index + 1).y,
        };
        Some(Self::from_knots(
            self.index + 1,
            left,
            knot(points, right),
            self.t2,
            slope(points, right),
        ))
    }

    /// The interval to the left, or `None` if this is the first one.
    ///
    /// The left knot and its slope become the new right knot.
    pub fn prev<P: AsRef<[f64]>>(&self, points: &[P]) -> Option<Self> {
        let left = self.index.checked_sub(1)?;
        let right = Knot {
            x: self.x1,
            y: knot(points, self.index).y,
        };
        Some(Self::from_knots(
            left,
            knot(points, left),
            right,
            slope(points, left),
            self.t1,
        ))
    }

    /// Whether `x` lies within `[x1, x2]`.
    pub fn contains(&self, x: f64) -> bool {
        (self.x1..=self.x2).contains(&x)
    }

    /// Index of the left knot in the control-point set.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Left knot abscissa.
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// Right knot abscissa.
    pub fn x2(&self) -> f64 {
        self.x2
    }

    /// Five-point slope at the left knot.
    pub fn t1(&self) -> f64 {
        self.t1
    }

    /// Five-point slope at the right knot.
    pub fn t2(&self) -> f64 {
        self.t2
    }
}

/// Knot positions, slopes and the derived `p2`, `p3` must match exactly.
impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.x1 == other.x1
            && self.x2 == other.x2
            && self.t1 == other.t1
            && self.t2 == other.t2
            && self.p2 == other.p2
            && self.p3 == other.p3
    }
}

//! Lightweight N‑dimensional point type returned by curve evaluation.

use std::{ops::Deref, vec::Vec};

use smallvec::SmallVec;

/// Compact N‑dimensional point with `f64` coordinates.
///
/// Up to four coordinates are stored inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point(pub SmallVec<[f64; 4]>);

impl Point {
    /// Copy the coordinates of any point-like value.
    pub fn from_coords(coords: &[f64]) -> Self {
        Self(SmallVec::from_slice(coords))
    }

    /// Return the point's coordinates as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Dimensionality of the point.
    pub fn dimension(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<f64>> for Point {
    fn from(val: Vec<f64>) -> Self {
        Self(SmallVec::from_vec(val))
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(val: [f64; N]) -> Self {
        Self::from_coords(&val)
    }
}

impl From<Point> for Vec<f64> {
    fn from(val: Point) -> Self {
        val.0.to_vec()
    }
}

impl AsRef<[f64]> for Point {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl Deref for Point {
    type Target = [f64];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

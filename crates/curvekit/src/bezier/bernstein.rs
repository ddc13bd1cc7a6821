//! Bernstein basis polynomials `C(n, k)·t^k·(1 − t)^(n − k)`.

use crate::ops::{binomial, pow};

/// Value of the Bernstein basis polynomial of degree `n` and index `k` at
/// `offset`.
///
/// The edge indices and the small degrees use closed forms, so the binomial
/// coefficient is only computed for interior indices of degree five and up.
/// Rows whose coefficients exceed `u64` are evaluated with a scaled product so
/// the result stays finite for any degree. Indices past the degree contribute nothing and yield `0.0`.
pub fn basis(n: u32, k: u32, offset: f64) -> f64 {
    let complement = 1.0 - offset;

    if k > n {
        return 0.0;
    }
    if n == 0 {
        return 1.0;
    }
    if k == n {
        return pow(offset, n);
    }
    if k == 0 {
        return pow(complement, n);
    }
    if k == 1 {
        return f64::from(n) * offset * pow(complement, n - 1);
    }
    if k == 2 && n == 3 {
        return 3.0 * complement * offset * offset;
    }
    if k == 2 && n == 4 {
        return 6.0 * complement * complement * offset * offset;
    }
    if k + 1 == n {
        return f64::from(n) * complement * pow(offset, n - 1);
    }
    match binomial(u64::from(n), u64::from(k)) {
        Some(exact) => exact as f64 * pow(offset, k) * pow(complement, n - k),
        None => scaled_term(n, k, offset),
    }
}

/// `C(n, k)·t^k·(1 − t)^(n − k)` built one factor at a time.
///
/// Each step multiplies in `(n − k + i)/i · t`, and factors of `1 − t` are
/// spent whenever the running value exceeds one, so the product stays in range
/// where `C(n, k)` alone would overflow. Requires `0 < k < n`.
fn scaled_term(n: u32, k: u32, offset: f64) -> f64 {
    let complement = 1.0 - offset;
    let mut value = 1.0;
    let mut pending = n - k;
    for i in 1..=k {
        value *= f64::from(n - k + i) / f64::from(i) * offset;
        while value > 1.0 && pending > 0 {
            value *= complement;
            pending -= 1;
        }
    }
    value * pow(complement, pending)
}

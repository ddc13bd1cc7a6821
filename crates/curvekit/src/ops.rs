//! Support operations for curve calculation.

/// Raise `base` to a non-negative integer power by repeated multiplication.
///
/// Unlike `f64::powi` the result is bit-for-bit predictable across platforms,
/// and exact whenever `base` is `0.0` or `1.0`.
#[inline]
pub fn pow(base: f64, exp: u32) -> f64 {
    let mut acc = 1.0;
    for _ in 0..exp {
        acc *= base;
    }
    acc
}

/// Exact binomial coefficient "`n` choose `k`".
///
/// Returns `Some(0)` when `k > n`, and `None` only when the exact value does
/// not fit in a `u64`.
pub fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let (n128, k128) = (u128::from(n), u128::from(k));
    let exact = match k {
        0 => 1,
        1 => n128,
        // Products of consecutive integers: divisible by k!, computed wide.
        2 => n128 * (n128 - 1) / 2,
        3 if n < (1 << 42) => n128 * (n128 - 1) * (n128 - 2) / 6,
        4 if n < (1 << 31) => n128 * (n128 - 1) * (n128 - 2) * (n128 - 3) / 24,
        _ => {
            let mut acc: u128 = 1;
            for i in 1..=k128 {
                // acc holds C(n - k + i - 1, i - 1) before the step, so the
                // division is exact.
                acc = acc.checked_mul(n128 - k128 + i)? / i;
                if acc > u128::from(u64::MAX) {
                    return None;
                }
            }
            acc
        }
    };
    u64::try_from(exact).ok()
}

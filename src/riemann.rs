use std::ops::Range;

/// The integrand 4/(1+x²); its integral over [0, 1] is π.
#[inline]
pub fn integrand(x: f64) -> f64 {
    4.0 / (1.0 + x * x)
}

/// Midpoint of the `i`-th subinterval of width `h` starting at `a`.
#[inline]
pub fn midpoint(a: f64, i: u64, h: f64) -> f64 {
    a + (i as f64 + 0.5) * h
}

/// Unscaled sum of integrand samples over `indices`. Every backend runs this
/// on its own slice and only combines the returned values.
pub fn partial_sum(indices: Range<u64>, a: f64, h: f64) -> f64 {
    let mut sum = 0.0;
    for i in indices {
        sum += integrand(midpoint(a, i, h));
    }
    sum
}

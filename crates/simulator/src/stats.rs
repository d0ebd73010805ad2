use rust_decimal::prelude::*;

/// Linear interpolation between two samples of a distribution.
pub trait Interpolate: Copy {
    fn lerp(low: Self, high: Self, fraction: f64) -> Self;
}

impl Interpolate for f64 {
    fn lerp(low: Self, high: Self, fraction: f64) -> Self {
        low + (high - low) * fraction
    }
}

impl Interpolate for Decimal {
    fn lerp(low: Self, high: Self, fraction: f64) -> Self {
        let fraction = Decimal::from_f64(fraction).unwrap_or(Decimal::ZERO);
        low + (high - low) * fraction
    }
}

/// The `pct`-th percentile of an ascending slice, interpolating linearly
/// between the two closest ranks. Returns `None` for an empty slice.
pub fn percentile<T: Interpolate>(sorted: &[T], pct: f64) -> Option<T> {
    let last = sorted.len().checked_sub(1)?;
    let rank = (pct / 100.0).clamp(0.0, 1.0) * last as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    Some(T::lerp(sorted[below], sorted[above], rank - below as f64))
}

pub fn median<T: Interpolate>(sorted: &[T]) -> Option<T> {
    percentile(sorted, 50.0)
}

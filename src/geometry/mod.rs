//! 2D geometry primitives
//!
//! Value types shared by input handling and any rendering code:
//! - [`Point`] / [`FPoint`]: integer and floating-point vectors (also used as sizes)
//! - [`Rect`] / [`FRect`]: axis-aligned rectangles built from a position and a size
//!
//! Widening (`Point -> FPoint`, `Rect -> FRect`) goes through `From` or
//! `to_float()`. Narrowing always names its rounding policy
//! (`floor()`, `round()`, `ceil()`). Mixed integer/float arithmetic promotes
//! to the float type.
//!
//! Every operation is total: zero-length normalization returns the zero
//! vector, integer division by zero yields zero for that component, and
//! clamps with an inverted range resolve to the upper bound instead of
//! panicking. Integer vector arithmetic wraps on overflow. Squared lengths,
//! dot and cross products, areas, and the edge comparisons behind
//! containment and intersection are computed in 64 bits.

mod ops;
mod point;
mod rect;

pub use point::{FPoint, Point};
pub use rect::{FRect, Rect};

/// Clamps `value` into `[lo, hi]` without panicking on an inverted range
pub(crate) fn clamp_total<T: PartialOrd + Copy>(value: T, lo: T, hi: T) -> T {
    let value = if value < lo { lo } else { value };
    if value > hi { hi } else { value }
}

/// Narrows a widened coordinate back to `i32`, saturating at the bounds
pub(crate) fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Integer division that yields 0 instead of panicking on a zero divisor
pub(crate) fn div_or_zero(lhs: i32, rhs: i32) -> i32 {
    lhs.checked_div(rhs).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_total_in_range() {
        assert_eq!(clamp_total(5, 0, 10), 5);
        assert_eq!(clamp_total(-3, 0, 10), 0);
        assert_eq!(clamp_total(42, 0, 10), 10);
    }

    #[test]
    fn test_clamp_total_inverted_range_resolves_to_hi() {
        assert_eq!(clamp_total(5, 10, 0), 0);
        assert_eq!(clamp_total(1.5_f32, 2.0, -2.0), -2.0);
    }

    #[test]
    fn test_saturate() {
        assert_eq!(saturate(-7), -7);
        assert_eq!(saturate(i64::from(i32::MAX) + 1), i32::MAX);
        assert_eq!(saturate(i64::MIN), i32::MIN);
    }

    #[test]
    fn test_div_or_zero() {
        assert_eq!(div_or_zero(9, 2), 4);
        assert_eq!(div_or_zero(9, 0), 0);
        assert_eq!(div_or_zero(i32::MIN, -1), 0);
    }
}

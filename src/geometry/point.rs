//! Integer and floating-point 2D vectors

use std::fmt;

use serde::{Deserialize, Serialize};

use super::clamp_total;
use super::rect::{FRect, Rect};

/// Integer 2D vector
///
/// Doubles as a size, in which case `w()`/`h()` read `x`/`y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Floating-point 2D vector
///
/// Doubles as a size, in which case `w()`/`h()` read `x`/`y`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FPoint {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Width, when this point is used as a size
    pub const fn w(self) -> i32 {
        self.x
    }

    /// Height, when this point is used as a size
    pub const fn h(self) -> i32 {
        self.y
    }

    /// Lossless widening to [`FPoint`]
    pub const fn to_float(self) -> FPoint {
        FPoint::new(self.x as f32, self.y as f32)
    }

    /// Squared length, widened so it cannot overflow
    pub const fn sqr_mag(self) -> u64 {
        let (x, y) = (self.x.unsigned_abs() as u64, self.y.unsigned_abs() as u64);
        x * x + y * y
    }

    /// Euclidean length (always floating-point)
    pub fn mag(self) -> f32 {
        (self.x as f64).hypot(self.y as f64) as f32
    }

    /// Smaller of this vector's own components
    pub fn min_element(self) -> i32 {
        self.x.min(self.y)
    }

    /// Larger of this vector's own components
    pub fn max_element(self) -> i32 {
        self.x.max(self.y)
    }

    /// Element-wise minimum of two vectors
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Element-wise maximum of two vectors
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    pub const fn non_zero(self) -> bool {
        self.x != 0 || self.y != 0
    }

    /// Half-open containment: left/top edges inside, right/bottom edges outside
    pub fn in_rect(self, rect: Rect) -> bool {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        x >= i64::from(rect.x())
            && y >= i64::from(rect.y())
            && x < rect.right()
            && y < rect.bottom()
    }

    pub fn rotate(self, angle: f32) -> FPoint {
        self.to_float().rotate(angle)
    }

    pub fn rotate_around(self, center: impl Into<FPoint>, angle: f32) -> FPoint {
        self.to_float().rotate_around(center, angle)
    }

    /// 90 degree rotation: `(-y, x)`
    pub const fn perp(self) -> Self {
        Self::new(self.y.wrapping_neg(), self.x)
    }

    /// Unit vector, or exactly zero for the zero vector
    pub fn norm(self) -> FPoint {
        self.to_float().norm()
    }

    pub fn clamp_x(self, lo: i32, hi: i32) -> Self {
        Self::new(clamp_total(self.x, lo, hi), self.y)
    }

    pub fn clamp_y(self, lo: i32, hi: i32) -> Self {
        Self::new(self.x, clamp_total(self.y, lo, hi))
    }

    /// Clamps the magnitude into `[r1, r2]`, keeping the direction
    pub fn clamp_r(self, r1: f32, r2: f32) -> FPoint {
        self.to_float().clamp_r(r1, r2)
    }

    /// Widened to `i64`; saturates only when every component is `i32::MIN`
    pub const fn dot(self, other: Self) -> i64 {
        (self.x as i64 * other.x as i64).saturating_add(self.y as i64 * other.y as i64)
    }

    /// Z component of the 3D cross product
    pub const fn cross(self, other: Self) -> i64 {
        self.x as i64 * other.y as i64 - self.y as i64 * other.x as i64
    }

    pub fn distance(self, other: Self) -> f32 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy) as f32
    }

    /// Angle from the positive x axis, in radians
    pub fn angle(self) -> f32 {
        (self.y as f32).atan2(self.x as f32)
    }
}

impl FPoint {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn w(self) -> f32 {
        self.x
    }

    pub const fn h(self) -> f32 {
        self.y
    }

    pub fn sqr_mag(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn mag(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn min_element(self) -> f32 {
        self.x.min(self.y)
    }

    pub fn max_element(self) -> f32 {
        self.x.max(self.y)
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    pub fn non_zero(self) -> bool {
        self.x != 0.0 || self.y != 0.0
    }

    /// Half-open containment: left/top edges inside, right/bottom edges outside
    pub fn in_rect(self, rect: FRect) -> bool {
        self.x >= rect.x()
            && self.y >= rect.y()
            && self.x < rect.x() + rect.w()
            && self.y < rect.y() + rect.h()
    }

    /// Rotates about the origin by `angle` radians
    ///
    /// With y pointing down (screen space) a positive angle turns clockwise.
    pub fn rotate(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn rotate_around(self, center: impl Into<FPoint>, angle: f32) -> Self {
        let center = center.into();
        (self - center).rotate(angle) + center
    }

    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn norm(self) -> Self {
        let mag = self.mag();
        if mag == 0.0 { Self::ZERO } else { self / mag }
    }

    pub fn floor(self) -> Point {
        Point::new(self.x.floor() as i32, self.y.floor() as i32)
    }

    pub fn round(self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }

    pub fn ceil(self) -> Point {
        Point::new(self.x.ceil() as i32, self.y.ceil() as i32)
    }

    pub fn clamp_x(self, lo: f32, hi: f32) -> Self {
        Self::new(clamp_total(self.x, lo, hi), self.y)
    }

    pub fn clamp_y(self, lo: f32, hi: f32) -> Self {
        Self::new(self.x, clamp_total(self.y, lo, hi))
    }

    /// Clamps the magnitude into `[r1, r2]`, keeping the direction
    ///
    /// The zero vector has no direction and is returned unchanged.
    pub fn clamp_r(self, r1: f32, r2: f32) -> Self {
        let mag = self.mag();
        if mag == 0.0 {
            return self;
        }
        self * (clamp_total(mag, r1, r2) / mag)
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    pub fn distance(self, other: Self) -> f32 {
        (other - self).mag()
    }

    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for FPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Point> for FPoint {
    fn from(p: Point) -> Self {
        p.to_float()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f32, f32)> for FPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for FPoint {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<FPoint> for [f32; 2] {
    fn from(p: FPoint) -> Self {
        [p.x, p.y]
    }
}

impl From<glam::IVec2> for Point {
    fn from(v: glam::IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for glam::IVec2 {
    fn from(p: Point) -> Self {
        glam::IVec2::new(p.x, p.y)
    }
}

impl From<glam::Vec2> for FPoint {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<FPoint> for glam::Vec2 {
    fn from(p: FPoint) -> Self {
        glam::Vec2::new(p.x, p.y)
    }
}

impl From<mint::Point2<f32>> for FPoint {
    fn from(p: mint::Point2<f32>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<FPoint> for mint::Point2<f32> {
    fn from(p: FPoint) -> Self {
        mint::Point2 { x: p.x, y: p.y }
    }
}

impl From<mint::Vector2<f32>> for FPoint {
    fn from(v: mint::Vector2<f32>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<FPoint> for mint::Vector2<f32> {
    fn from(p: FPoint) -> Self {
        mint::Vector2 { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn approx(a: FPoint, b: FPoint) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn test_point_magnitude() {
        let p = Point::new(3, 4);
        assert_eq!(p.sqr_mag(), 25);
        assert_eq!(p.mag(), 5.0);
        assert_eq!(FPoint::new(3.0, 4.0).mag(), 5.0);
    }

    #[test]
    fn test_min_max_element_vs_elementwise() {
        let a = Point::new(7, -2);
        let b = Point::new(1, 5);
        assert_eq!(a.min_element(), -2);
        assert_eq!(a.max_element(), 7);
        assert_eq!(a.min(b), Point::new(1, -2));
        assert_eq!(a.max(b), Point::new(7, 5));
    }

    #[test]
    fn test_non_zero() {
        assert!(!Point::ZERO.non_zero());
        assert!(Point::new(0, 1).non_zero());
        assert!(FPoint::new(-0.5, 0.0).non_zero());
        assert!(!FPoint::ZERO.non_zero());
    }

    #[test]
    fn test_in_rect_is_half_open() {
        let r = Rect::new(2, 3, 10, 5);
        assert!(Point::new(2, 3).in_rect(r));
        assert!(Point::new(11, 7).in_rect(r));
        assert!(!Point::new(12, 3).in_rect(r));
        assert!(!Point::new(2, 8).in_rect(r));
        assert!(!Point::new(1, 3).in_rect(r));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let p = FPoint::new(1.0, 0.0).rotate(FRAC_PI_2);
        assert!(approx(p, FPoint::new(0.0, 1.0)));

        let p = Point::new(0, 2).rotate(PI);
        assert!(approx(p, FPoint::new(0.0, -2.0)));
    }

    #[test]
    fn test_rotate_around_center() {
        let p = FPoint::new(2.0, 1.0).rotate_around(Point::new(1, 1), FRAC_PI_2);
        assert!(approx(p, FPoint::new(1.0, 2.0)));
    }

    #[test]
    fn test_perp() {
        assert_eq!(Point::new(3, 4).perp(), Point::new(-4, 3));
        assert_eq!(Point::new(3, 4).dot(Point::new(3, 4).perp()), 0);
    }

    #[test]
    fn test_norm_and_zero_sentinel() {
        let n = FPoint::new(3.0, 4.0).norm();
        assert!(approx(n, FPoint::new(0.6, 0.8)));
        assert!((n.mag() - 1.0).abs() < 1e-6);
        assert_eq!(Point::ZERO.norm(), FPoint::ZERO);
        assert_eq!(FPoint::ZERO.norm(), FPoint::ZERO);
    }

    #[test]
    fn test_rounding_policies() {
        let p = FPoint::new(1.5, -1.5);
        assert_eq!(p.floor(), Point::new(1, -2));
        assert_eq!(p.round(), Point::new(2, -2));
        assert_eq!(p.ceil(), Point::new(2, -1));
    }

    #[test]
    fn test_axis_clamps_leave_other_axis() {
        assert_eq!(Point::new(-5, 99).clamp_x(0, 10), Point::new(0, 99));
        assert_eq!(Point::new(-5, 99).clamp_y(0, 10), Point::new(-5, 10));
        assert_eq!(FPoint::new(2.5, 7.0).clamp_x(0.0, 1.0), FPoint::new(1.0, 7.0));
    }

    #[test]
    fn test_clamp_r() {
        let long = FPoint::new(30.0, 40.0).clamp_r(1.0, 10.0);
        assert!(approx(long, FPoint::new(6.0, 8.0)));

        let short = FPoint::new(0.3, 0.4).clamp_r(1.0, 10.0);
        assert!(approx(short, FPoint::new(0.6, 0.8)));

        let inside = Point::new(3, 4).clamp_r(1.0, 10.0);
        assert!(approx(inside, FPoint::new(3.0, 4.0)));

        assert_eq!(FPoint::ZERO.clamp_r(1.0, 10.0), FPoint::ZERO);
    }

    #[test]
    fn test_cross_distance_angle() {
        assert_eq!(Point::new(1, 0).cross(Point::new(0, 1)), 1);
        assert_eq!(Point::new(0, 0).distance(Point::new(6, 8)), 10.0);
        assert!((FPoint::new(0.0, 1.0).angle() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        assert_eq!(Point::new(50_000, 50_000).sqr_mag(), 5_000_000_000);
        assert_eq!(Point::new(i32::MIN, i32::MIN).sqr_mag(), 1 << 63);
        assert_eq!(Point::new(i32::MAX, 0).dot(Point::new(i32::MAX, 0)), 4_611_686_014_132_420_609);
        assert_eq!(Point::new(i32::MIN, i32::MIN).dot(Point::new(i32::MIN, i32::MIN)), i64::MAX);
        assert_eq!(Point::new(i32::MAX, 0).cross(Point::new(0, i32::MAX)), 4_611_686_014_132_420_609);
        assert_eq!(Point::new(i32::MIN, 0).perp(), Point::new(0, i32::MIN));
        assert_eq!(Point::new(i32::MIN, 0).distance(Point::new(i32::MAX, 0)), 4_294_967_296.0);

        let r = Rect::new(i32::MAX - 10, 0, 20, 10);
        assert!(Point::new(i32::MAX - 5, 1).in_rect(r));
        assert!(Point::new(i32::MAX, 9).in_rect(r));
        assert!(!Point::new(i32::MAX - 11, 1).in_rect(r));
    }

    #[test]
    fn test_size_view() {
        let size = Point::new(640, 480);
        assert_eq!(size.w(), 640);
        assert_eq!(size.h(), 480);
    }

    #[test]
    fn test_interop_conversions() {
        let p: Point = glam::IVec2::new(4, -9).into();
        assert_eq!(p, Point::new(4, -9));
        let v: glam::Vec2 = FPoint::new(1.5, 2.5).into();
        assert_eq!(v, glam::Vec2::new(1.5, 2.5));
        let m: mint::Point2<f32> = FPoint::new(0.25, 4.0).into();
        assert_eq!(FPoint::from(m), FPoint::new(0.25, 4.0));
        let arr: [f32; 2] = Point::new(3, 4).to_float().into();
        assert_eq!(arr, [3.0, 4.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(-1, 2).to_string(), "(-1, 2)");
        assert_eq!(FPoint::new(0.5, 2.0).to_string(), "(0.5, 2)");
    }
}

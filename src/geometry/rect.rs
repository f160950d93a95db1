//! Axis-aligned rectangles

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{clamp_total, saturate};
use super::point::{FPoint, Point};

/// Integer rectangle made of a position and a size
///
/// Sizes are not forced to be positive; use [`Rect::empty`] to detect
/// degenerate rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Point,
    pub size: Point,
}

/// Floating-point rectangle made of a position and a size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FRect {
    pub pos: FPoint,
    pub size: FPoint,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: Point::new(x, y),
            size: Point::new(w, h),
        }
    }

    pub const fn from_parts(pos: Point, size: Point) -> Self {
        Self { pos, size }
    }

    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    pub const fn y(&self) -> i32 {
        self.pos.y
    }

    pub const fn w(&self) -> i32 {
        self.size.x
    }

    pub const fn h(&self) -> i32 {
        self.size.y
    }

    pub const fn to_float(self) -> FRect {
        FRect::from_parts(self.pos.to_float(), self.size.to_float())
    }

    /// True when either dimension is zero or negative
    pub const fn empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    pub const fn area(&self) -> i64 {
        self.size.x as i64 * self.size.y as i64
    }

    pub const fn perimeter(&self) -> i64 {
        2 * (self.size.x as i64 + self.size.y as i64)
    }

    /// `x + w`, widened so edges past `i32::MAX` stay ordered
    pub const fn right(&self) -> i64 {
        self.pos.x as i64 + self.size.x as i64
    }

    /// `y + h`, widened like [`Rect::right`]
    pub const fn bottom(&self) -> i64 {
        self.pos.y as i64 + self.size.y as i64
    }

    pub fn diagonal(&self) -> f32 {
        self.size.mag()
    }

    pub const fn top_left(&self) -> Point {
        self.pos
    }

    pub const fn top_right(&self) -> Point {
        Point::new(self.pos.x.wrapping_add(self.size.x), self.pos.y)
    }

    pub const fn bottom_left(&self) -> Point {
        Point::new(self.pos.x, self.pos.y.wrapping_add(self.size.y))
    }

    /// Wraps on overflow like the vector operators
    pub const fn bottom_right(&self) -> Point {
        Point::new(
            self.pos.x.wrapping_add(self.size.x),
            self.pos.y.wrapping_add(self.size.y),
        )
    }

    /// Center, truncated onto the integer grid
    pub fn middle(&self) -> Point {
        self.pos + self.size / 2
    }

    /// Re-expresses `target` in this rectangle's coordinate space
    ///
    /// Offsets are taken from this rectangle's position and then multiplied
    /// (not divided) by its size: `((t.x - x) * w, (t.y - y) * h, t.w * w, t.h * h)`.
    pub fn transform(&self, target: Rect) -> Rect {
        Rect::from_parts((target.pos - self.pos) * self.size, target.size * self.size)
    }

    /// Strict overlap test
    ///
    /// Rectangles that only share an edge do not intersect, and an empty
    /// rectangle intersects nothing.
    pub fn intersects_rect(&self, other: Rect) -> bool {
        !self.empty()
            && !other.empty()
            && i64::from(self.x()) < other.right()
            && self.right() > i64::from(other.x())
            && i64::from(self.y()) < other.bottom()
            && self.bottom() > i64::from(other.y())
    }

    /// Overlapping region, if any; never returns an empty rectangle
    pub fn intersect_rect(&self, other: Rect) -> Option<Rect> {
        if !self.intersects_rect(other) {
            return None;
        }
        let left = self.x().max(other.x());
        let top = self.y().max(other.y());
        let w = self.right().min(other.right()) - i64::from(left);
        let h = self.bottom().min(other.bottom()) - i64::from(top);
        Some(Rect::new(left, top, saturate(w), saturate(h)))
    }

    /// Clamps each axis of `point` into `[x, x + w]` and `[y, y + h]`
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            saturate(clamp_total(i64::from(point.x), i64::from(self.x()), self.right())),
            saturate(clamp_total(i64::from(point.y), i64::from(self.y()), self.bottom())),
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.in_rect(*self)
    }
}

impl FRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: FPoint::new(x, y),
            size: FPoint::new(w, h),
        }
    }

    pub const fn from_parts(pos: FPoint, size: FPoint) -> Self {
        Self { pos, size }
    }

    pub const fn x(&self) -> f32 {
        self.pos.x
    }

    pub const fn y(&self) -> f32 {
        self.pos.y
    }

    pub const fn w(&self) -> f32 {
        self.size.x
    }

    pub const fn h(&self) -> f32 {
        self.size.y
    }

    pub fn floor(self) -> Rect {
        Rect::from_parts(self.pos.floor(), self.size.floor())
    }

    pub fn round(self) -> Rect {
        Rect::from_parts(self.pos.round(), self.size.round())
    }

    pub fn ceil(self) -> Rect {
        Rect::from_parts(self.pos.ceil(), self.size.ceil())
    }

    pub fn empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    pub fn perimeter(&self) -> f32 {
        2.0 * (self.size.x + self.size.y)
    }

    pub fn diagonal(&self) -> f32 {
        self.size.mag()
    }

    pub fn top_left(&self) -> FPoint {
        self.pos
    }

    pub fn top_right(&self) -> FPoint {
        FPoint::new(self.pos.x + self.size.x, self.pos.y)
    }

    pub fn bottom_left(&self) -> FPoint {
        FPoint::new(self.pos.x, self.pos.y + self.size.y)
    }

    pub fn bottom_right(&self) -> FPoint {
        self.pos + self.size
    }

    pub fn middle(&self) -> FPoint {
        self.pos + self.size / 2.0_f32
    }

    /// See [`Rect::transform`]; same formula in floating point
    pub fn transform(&self, target: FRect) -> FRect {
        FRect::new(
            (target.x() - self.x()) * self.w(),
            (target.y() - self.y()) * self.h(),
            target.w() * self.w(),
            target.h() * self.h(),
        )
    }

    /// Strict overlap test; empty rectangles intersect nothing
    pub fn intersects_rect(&self, other: FRect) -> bool {
        !self.empty()
            && !other.empty()
            && self.x() < other.x() + other.w()
            && self.x() + self.w() > other.x()
            && self.y() < other.y() + other.h()
            && self.y() + self.h() > other.y()
    }

    /// Overlapping region, if any; never returns an empty rectangle
    pub fn intersect_rect(&self, other: FRect) -> Option<FRect> {
        if !self.intersects_rect(other) {
            return None;
        }
        let left = self.x().max(other.x());
        let top = self.y().max(other.y());
        let right = (self.x() + self.w()).min(other.x() + other.w());
        let bottom = (self.y() + self.h()).min(other.y() + other.h());
        Some(FRect::new(left, top, right - left, bottom - top))
    }

    pub fn clamp(&self, point: FPoint) -> FPoint {
        FPoint::new(
            clamp_total(point.x, self.x(), self.x() + self.w()),
            clamp_total(point.y, self.y(), self.y() + self.h()),
        )
    }

    pub fn contains(&self, point: FPoint) -> bool {
        point.in_rect(*self)
    }
}

impl From<Rect> for FRect {
    fn from(r: Rect) -> Self {
        r.to_float()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}x{}]", self.x(), self.y(), self.w(), self.h())
    }
}

impl fmt::Display for FRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}x{}]", self.x(), self.y(), self.w(), self.h())
    }
}

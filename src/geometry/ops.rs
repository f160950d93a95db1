//! Operator overloads for the geometry types
//!
//! - Vector/vector ops are component-wise.
//! - Anything mixing `Point` with `FPoint` (or with `f32`/`f64`) yields `FPoint`.
//! - Scaling a rectangle touches only its size; adding a vector moves only its position.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::div_or_zero;
use super::point::{FPoint, Point};
use super::rect::{FRect, Rect};

/// Component-wise `+ - *` (and compound forms) plus uniform scaling by the
/// vector's own scalar type, using the given scalar operations
macro_rules! impl_vector_ops {
    ($vec:ident, $scalar:ty, add: $add:expr, sub: $sub:expr, mul: $mul:expr, neg: $neg:expr) => {
        impl Add for $vec {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self::new($add(self.x, rhs.x), $add(self.y, rhs.y))
            }
        }

        impl Sub for $vec {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self::new($sub(self.x, rhs.x), $sub(self.y, rhs.y))
            }
        }

        impl Mul for $vec {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                Self::new($mul(self.x, rhs.x), $mul(self.y, rhs.y))
            }
        }

        impl Mul<$scalar> for $vec {
            type Output = Self;
            fn mul(self, rhs: $scalar) -> Self {
                Self::new($mul(self.x, rhs), $mul(self.y, rhs))
            }
        }

        impl Mul<$vec> for $scalar {
            type Output = $vec;
            fn mul(self, rhs: $vec) -> $vec {
                rhs * self
            }
        }

        impl Neg for $vec {
            type Output = Self;
            fn neg(self) -> Self {
                Self::new($neg(self.x), $neg(self.y))
            }
        }

        impl AddAssign for $vec {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $vec {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign for $vec {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl MulAssign<$scalar> for $vec {
            fn mul_assign(&mut self, rhs: $scalar) {
                *self = *self * rhs;
            }
        }

        impl DivAssign for $vec {
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl DivAssign<$scalar> for $vec {
            fn div_assign(&mut self, rhs: $scalar) {
                *self = *self / rhs;
            }
        }
    };
}

// Integer vectors wrap on overflow
impl_vector_ops!(
    Point,
    i32,
    add: i32::wrapping_add,
    sub: i32::wrapping_sub,
    mul: i32::wrapping_mul,
    neg: i32::wrapping_neg
);
impl_vector_ops!(
    FPoint,
    f32,
    add: <f32 as Add>::add,
    sub: <f32 as Sub>::sub,
    mul: <f32 as Mul>::mul,
    neg: <f32 as Neg>::neg
);

impl Div for Point {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(div_or_zero(self.x, rhs.x), div_or_zero(self.y, rhs.y))
    }
}

impl Div<i32> for Point {
    type Output = Self;
    fn div(self, rhs: i32) -> Self {
        Self::new(div_or_zero(self.x, rhs), div_or_zero(self.y, rhs))
    }
}

impl Div for FPoint {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<f32> for FPoint {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// `Point op FPoint` and `FPoint op Point`, both promoting to `FPoint`
macro_rules! impl_mixed_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait<FPoint> for Point {
            type Output = FPoint;
            fn $method(self, rhs: FPoint) -> FPoint {
                self.to_float().$method(rhs)
            }
        }

        impl $trait<Point> for FPoint {
            type Output = FPoint;
            fn $method(self, rhs: Point) -> FPoint {
                self.$method(rhs.to_float())
            }
        }

        impl $assign_trait<Point> for FPoint {
            fn $assign_method(&mut self, rhs: Point) {
                self.$assign_method(rhs.to_float());
            }
        }
    };
}

impl_mixed_op!(Add, add, AddAssign, add_assign);
impl_mixed_op!(Sub, sub, SubAssign, sub_assign);
impl_mixed_op!(Mul, mul, MulAssign, mul_assign);
impl_mixed_op!(Div, div, DivAssign, div_assign);

impl Mul<f32> for Point {
    type Output = FPoint;
    fn mul(self, rhs: f32) -> FPoint {
        self.to_float() * rhs
    }
}

impl Div<f32> for Point {
    type Output = FPoint;
    fn div(self, rhs: f32) -> FPoint {
        self.to_float() / rhs
    }
}

impl Mul<f64> for Point {
    type Output = FPoint;
    fn mul(self, rhs: f64) -> FPoint {
        FPoint::new((self.x as f64 * rhs) as f32, (self.y as f64 * rhs) as f32)
    }
}

impl Div<f64> for Point {
    type Output = FPoint;
    fn div(self, rhs: f64) -> FPoint {
        FPoint::new((self.x as f64 / rhs) as f32, (self.y as f64 / rhs) as f32)
    }
}

impl Mul<f64> for FPoint {
    type Output = FPoint;
    fn mul(self, rhs: f64) -> FPoint {
        FPoint::new((self.x as f64 * rhs) as f32, (self.y as f64 * rhs) as f32)
    }
}

impl Div<f64> for FPoint {
    type Output = FPoint;
    fn div(self, rhs: f64) -> FPoint {
        FPoint::new((self.x as f64 / rhs) as f32, (self.y as f64 / rhs) as f32)
    }
}

impl Mul<i32> for FPoint {
    type Output = FPoint;
    fn mul(self, rhs: i32) -> FPoint {
        self * rhs as f32
    }
}

impl Div<i32> for FPoint {
    type Output = FPoint;
    fn div(self, rhs: i32) -> FPoint {
        self / rhs as f32
    }
}

// Rectangles: scalars scale the size, vectors translate the position.

impl Mul<i32> for Rect {
    type Output = Rect;
    fn mul(self, rhs: i32) -> Rect {
        Rect::from_parts(self.pos, self.size * rhs)
    }
}

impl Div<i32> for Rect {
    type Output = Rect;
    fn div(self, rhs: i32) -> Rect {
        Rect::from_parts(self.pos, self.size / rhs)
    }
}

impl Mul<f32> for Rect {
    type Output = FRect;
    fn mul(self, rhs: f32) -> FRect {
        self.to_float() * rhs
    }
}

impl Div<f32> for Rect {
    type Output = FRect;
    fn div(self, rhs: f32) -> FRect {
        self.to_float() / rhs
    }
}

impl Mul<f64> for Rect {
    type Output = FRect;
    fn mul(self, rhs: f64) -> FRect {
        FRect::from_parts(self.pos.to_float(), self.size * rhs)
    }
}

impl Div<f64> for Rect {
    type Output = FRect;
    fn div(self, rhs: f64) -> FRect {
        FRect::from_parts(self.pos.to_float(), self.size / rhs)
    }
}

impl Mul<f32> for FRect {
    type Output = FRect;
    fn mul(self, rhs: f32) -> FRect {
        FRect::from_parts(self.pos, self.size * rhs)
    }
}

impl Div<f32> for FRect {
    type Output = FRect;
    fn div(self, rhs: f32) -> FRect {
        FRect::from_parts(self.pos, self.size / rhs)
    }
}

impl Mul<f64> for FRect {
    type Output = FRect;
    fn mul(self, rhs: f64) -> FRect {
        FRect::from_parts(self.pos, self.size * rhs)
    }
}

impl Div<f64> for FRect {
    type Output = FRect;
    fn div(self, rhs: f64) -> FRect {
        FRect::from_parts(self.pos, self.size / rhs)
    }
}

impl MulAssign<i32> for Rect {
    fn mul_assign(&mut self, rhs: i32) {
        *self = *self * rhs;
    }
}

impl DivAssign<i32> for Rect {
    fn div_assign(&mut self, rhs: i32) {
        *self = *self / rhs;
    }
}

impl MulAssign<f32> for FRect {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for FRect {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Add<Point> for Rect {
    type Output = Rect;
    fn add(self, rhs: Point) -> Rect {
        Rect::from_parts(self.pos + rhs, self.size)
    }
}

impl Sub<Point> for Rect {
    type Output = Rect;
    fn sub(self, rhs: Point) -> Rect {
        Rect::from_parts(self.pos - rhs, self.size)
    }
}

impl Add<FPoint> for Rect {
    type Output = FRect;
    fn add(self, rhs: FPoint) -> FRect {
        self.to_float() + rhs
    }
}

impl Sub<FPoint> for Rect {
    type Output = FRect;
    fn sub(self, rhs: FPoint) -> FRect {
        self.to_float() - rhs
    }
}

impl Add<FPoint> for FRect {
    type Output = FRect;
    fn add(self, rhs: FPoint) -> FRect {
        FRect::from_parts(self.pos + rhs, self.size)
    }
}

impl Sub<FPoint> for FRect {
    type Output = FRect;
    fn sub(self, rhs: FPoint) -> FRect {
        FRect::from_parts(self.pos - rhs, self.size)
    }
}

impl Add<Point> for FRect {
    type Output = FRect;
    fn add(self, rhs: Point) -> FRect {
        self + rhs.to_float()
    }
}

impl Sub<Point> for FRect {
    type Output = FRect;
    fn sub(self, rhs: Point) -> FRect {
        self - rhs.to_float()
    }
}

impl AddAssign<Point> for Rect {
    fn add_assign(&mut self, rhs: Point) {
        self.pos += rhs;
    }
}

impl SubAssign<Point> for Rect {
    fn sub_assign(&mut self, rhs: Point) {
        self.pos -= rhs;
    }
}

impl AddAssign<FPoint> for FRect {
    fn add_assign(&mut self, rhs: FPoint) {
        self.pos += rhs;
    }
}

impl SubAssign<FPoint> for FRect {
    fn sub_assign(&mut self, rhs: FPoint) {
        self.pos -= rhs;
    }
}

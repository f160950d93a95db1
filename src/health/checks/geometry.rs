//! Geometry primitives health check

use crate::geometry::{FPoint, Point, Rect};
use crate::health::check::{CheckResult, Checklist, SystemCheck};

/// Exercises the geometry invariants the input tracker and renderers rely on
#[derive(Debug, Default)]
pub struct GeometryCheck;

impl GeometryCheck {
    pub fn new() -> Self {
        Self
    }
}

impl SystemCheck for GeometryCheck {
    fn name(&self) -> &'static str {
        "Geometry"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Checks point and rect arithmetic")
    }

    fn check(&self) -> CheckResult {
        let mut list = Checklist::new();

        let p = Point::new(3, 4);
        list.expect(p.sqr_mag() == 25 && p.mag() == 5.0, "Point(3, 4) has magnitude 5");
        list.expect(p.perp() == Point::new(-4, 3), "perp rotates a quarter turn");
        list.expect(p * 2 == Point::new(6, 8), "integer scaling stays integral");
        list.expect(
            p * 0.5_f32 == FPoint::new(1.5, 2.0),
            "float scaling promotes to FPoint",
        );
        list.expect(p / 0 == Point::ZERO, "integer division by zero yields zero");

        let norm = FPoint::new(10.0, 0.0).norm();
        list.expect((norm.mag() - 1.0).abs() < 1e-6, "norm has unit length");
        list.expect(FPoint::ZERO.norm() == FPoint::ZERO, "norm of zero is zero");

        let rect = Rect::new(0, 0, 10, 10);
        list.expect(
            Point::new(0, 0).in_rect(rect) && !Point::new(10, 10).in_rect(rect),
            "in_rect is half-open",
        );
        list.expect(
            rect.intersect_rect(Rect::new(5, 5, 10, 10)) == Some(Rect::new(5, 5, 5, 5)),
            "overlapping rects intersect",
        );
        list.expect(
            !rect.intersects_rect(Rect::new(10, 0, 5, 5)),
            "touching rects do not intersect",
        );
        list.expect(rect.middle() == Point::new(5, 5), "middle of 10x10 is (5, 5)");

        list.finish("Geometry invariants hold")
    }
}

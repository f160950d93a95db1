//! Invariants of the geometry primitives checked over small value grids

use pixelkit::geometry::{FPoint, Point, Rect};

fn sample_points() -> impl Iterator<Item = Point> {
    (-20..=20)
        .step_by(4)
        .flat_map(|x| (-20..=20).step_by(5).map(move |y| Point::new(x, y)))
}

fn sample_rects() -> impl Iterator<Item = Rect> {
    sample_points().flat_map(|pos| {
        [Point::new(0, 0), Point::new(1, 7), Point::new(12, 3), Point::new(-4, 9)]
            .into_iter()
            .map(move |size| Rect::from_parts(pos, size))
    })
}

#[test]
fn norm_has_unit_length_except_for_zero() {
    for p in sample_points() {
        let n = p.norm();
        if p.non_zero() {
            assert!((n.mag() - 1.0).abs() < 1e-5, "{p} normalized to {n}");
        } else {
            assert_eq!(n, FPoint::ZERO);
        }

        let f = p.to_float() * 0.37_f32;
        let n = f.norm();
        if f.non_zero() {
            assert!((n.mag() - 1.0).abs() < 1e-5, "{f} normalized to {n}");
        } else {
            assert_eq!(n, FPoint::ZERO);
        }
    }
}

#[test]
fn widening_then_rounding_is_identity() {
    for p in sample_points() {
        assert_eq!(p.to_float().round(), p);
        assert_eq!(FPoint::from(p).floor(), p);
        assert_eq!(FPoint::from(p).ceil(), p);
    }
}

#[test]
fn corners_span_the_size() {
    for r in sample_rects() {
        assert_eq!(r.bottom_right() - r.top_left(), r.size, "{r}");
    }
}

#[test]
fn in_rect_is_half_open() {
    for r in sample_rects().filter(|r| !r.empty()) {
        assert!(r.top_left().in_rect(r), "{r}");
        assert!(!Point::new(r.x() + r.w(), r.y()).in_rect(r), "{r}");
        assert!(!Point::new(r.x(), r.y() + r.h()).in_rect(r), "{r}");
        assert!(Point::new(r.x() + r.w() - 1, r.y() + r.h() - 1).in_rect(r), "{r}");
    }
}

#[test]
fn empty_rects_contain_nothing() {
    for r in sample_rects().filter(Rect::empty) {
        assert!(!r.top_left().in_rect(r), "{r}");
    }
}

#[test]
fn empty_rects_intersect_nothing() {
    let rects: Vec<Rect> = sample_rects().collect();
    for a in rects.iter().filter(|r| r.empty()).step_by(3) {
        for b in rects.iter().step_by(5) {
            assert!(!a.intersects_rect(*b), "{a} vs {b}");
            assert!(!b.intersects_rect(*a), "{b} vs {a}");
            assert_eq!(a.intersect_rect(*b), None, "{a} vs {b}");
        }
    }
}

#[test]
fn intersections_are_never_empty() {
    let rects: Vec<Rect> = sample_rects().collect();
    for a in rects.iter().step_by(2) {
        for b in rects.iter().step_by(3) {
            if let Some(i) = a.intersect_rect(*b) {
                assert!(!i.empty(), "{a} & {b} gave {i}");
            }
        }
    }
}

#[test]
fn intersection_is_symmetric_and_contained() {
    let rects: Vec<Rect> = sample_rects().filter(|r| !r.empty()).collect();
    for a in rects.iter().step_by(3) {
        for b in rects.iter().step_by(7) {
            assert_eq!(a.intersects_rect(*b), b.intersects_rect(*a));
            match a.intersect_rect(*b) {
                Some(i) => {
                    assert!(a.intersects_rect(*b));
                    assert!(!i.empty());
                    assert!(i.top_left().in_rect(*a) && i.top_left().in_rect(*b));
                    assert_eq!(b.intersect_rect(*a), Some(i));
                }
                None => assert!(!a.intersects_rect(*b)),
            }
        }
    }
}

#[test]
fn clamp_r_keeps_direction_inside_band() {
    for p in sample_points().filter(|p| p.non_zero()) {
        let c = p.clamp_r(5.0, 10.0);
        let mag = c.mag();
        assert!((5.0 - 1e-4..=10.0 + 1e-4).contains(&mag), "{p} clamped to {c}");
        let sine = c.cross(p.to_float()) / (mag * p.mag());
        assert!(sine.abs() < 1e-4, "{p} changed direction: {c}");
        assert!(c.dot(p.to_float()) > 0.0);
    }
    assert_eq!(Point::ZERO.clamp_r(5.0, 10.0), FPoint::ZERO);
}

#[test]
fn scaling_rects_moves_only_the_size() {
    for r in sample_rects() {
        let scaled = r * 3;
        assert_eq!(scaled.pos, r.pos);
        assert_eq!(scaled.size, r.size * 3);
    }
}

#[test]
fn magnitude_and_overlap_examples() {
    assert_eq!(Point::new(3, 4).mag(), 5.0);
    assert_eq!(Point::new(3, 4).sqr_mag(), 25);

    let r = Rect::new(0, 0, 10, 10);
    assert!(r.intersects_rect(Rect::new(5, 5, 10, 10)));
    assert!(!r.intersects_rect(Rect::new(10, 10, 5, 5)));
}

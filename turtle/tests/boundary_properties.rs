//! Property tests for the boundary policies.
//!
//! 1. Wrap: every mapped point lands on the surface, however far away.
//! 2. Fence: mapped points are clamped onto the surface.
//! 3. Fence: a refused move changes neither the position nor any pixel.
//! 4. Wrap: after any move the position is re-centered into the half-open
//!    turtle-space extent.

use pixel_turtle::{Canvas, Turtle, WrapMode};
use proptest::prelude::*;

fn arb_size() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=64, 1u32..=64)
}

fn arb_coord() -> impl Strategy<Value = f64> {
    prop_oneof![-1.0e6f64..1.0e6, -100.0f64..100.0]
}

fn arb_scale() -> impl Strategy<Value = f64> {
    0.01f64..50.0
}

proptest! {
    #[test]
    fn wrap_maps_onto_surface(
        (w, h) in arb_size(),
        x in arb_coord(),
        y in arb_coord(),
        scale in arb_scale()
    ) {
        let mut t = Turtle::new(Canvas::new(w, h));
        t.set_scale(scale).unwrap();
        let p = t.screen_coords(x, y);
        prop_assert!(p.x >= 0 && p.x < w as i32);
        prop_assert!(p.y >= 0 && p.y < h as i32);
    }

    #[test]
    fn fence_maps_onto_surface(
        (w, h) in arb_size(),
        x in arb_coord(),
        y in arb_coord()
    ) {
        let mut t = Turtle::new(Canvas::new(w, h));
        t.set_wrap_mode(WrapMode::Fence);
        let p = t.screen_coords(x, y);
        prop_assert!(p.x >= 0 && p.x < w as i32);
        prop_assert!(p.y >= 0 && p.y < h as i32);
    }

    #[test]
    fn fence_refusal_changes_nothing(
        heading in 0.0f64..360.0,
        dist in 75.0f64..10_000.0
    ) {
        // 100x100 surface: every point 75+ units from the origin is past a wall.
        let mut t = Turtle::new(Canvas::new(100, 100));
        t.set_wrap_mode(WrapMode::Fence);
        t.set_angle(heading);
        let before = t.surface().pixels().to_vec();
        t.forward(dist);
        prop_assert_eq!(t.x(), 0.0);
        prop_assert_eq!(t.y(), 0.0);
        prop_assert_eq!(t.surface().pixels(), &before[..]);
    }

    #[test]
    fn wrap_recenters_position(
        heading in -720.0f64..720.0,
        dist in -5_000.0f64..5_000.0,
        scale in 0.5f64..4.0
    ) {
        let mut t = Turtle::new(Canvas::new(80, 60));
        t.set_scale(scale).unwrap();
        t.pen_up();
        t.set_angle(heading);
        t.forward(dist);
        let (half_w, half_h) = (40.0 / scale, 30.0 / scale);
        prop_assert!(t.x() > -half_w && t.x() <= half_w);
        prop_assert!(t.y() > -half_h && t.y() <= half_h);
    }
}

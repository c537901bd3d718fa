// pathfinder/turtle/src/mapper.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turtle space to surface space.

use crate::geometry::Point2DI32;
use crate::state::{clamp, TurtleState, WrapMode};

/// Maps a turtle-space point onto a `width` x `height` surface.
///
/// The result is always clamped into `state.bounds` first; the wrap mode is
/// applied afterwards. Under `WrapMode::Window` the point may be off the
/// surface.
pub fn screen_coords(state: &TurtleState, width: u32, height: u32, x: f64, y: f64) -> Point2DI32 {
    let (w, h) = (width as i32, height as i32);
    let px = x * state.scale;
    let py = y * state.scale;
    let mut sx = ((w / 2) as f64 + px) as i32;
    let mut sy = ((h / 2) as f64 - py) as i32;

    let bounds = &state.bounds;
    sx = clamp(sx, bounds.min_x, bounds.max_x);
    sy = clamp(sy, bounds.min_y, bounds.max_y);

    match state.wrap_mode {
        WrapMode::Wrap => {
            if w > 0 {
                sx = sx.rem_euclid(w);
            }
            if h > 0 {
                sy = sy.rem_euclid(h);
            }
        }
        WrapMode::Fence => {
            sx = clamp(sx, 0, w - 1);
            sy = clamp(sy, 0, h - 1);
        }
        WrapMode::Window => {}
    }

    Point2DI32::new(sx, sy)
}

// pathfinder/turtle/src/fill.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Filling the closed path a turtle walks.

use crate::color::ColorU;
use crate::geometry::{Point2DF64, Point2DI32};
use crate::state::TurtleFlags;
use crate::surface::Surface;
use crate::Turtle;
use log::{debug, trace};
use smallvec::SmallVec;
use std::cmp;

/// An inclusive run of pixels `x1..=x2` on row `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub x1: i32,
    pub x2: i32,
}

/// Rasterizes the interior of the closed polygon through `points` into
/// horizontal spans, top row first.
///
/// An edge contributes to row `y` when `y` lies in `[min(y1, y2), max(y1, y2))`,
/// so horizontal edges never count and shared vertices are counted once.
/// Intercepts are paired up after sorting (even-odd); self-intersecting
/// polygons are not detected.
pub fn scanline_spans(points: &[Point2DI32]) -> Vec<Span> {
    let mut spans = vec![];
    if points.len() < 3 {
        return spans;
    }

    let (mut min_x, mut max_x) = (points[0].x, points[0].x);
    let (mut min_y, mut max_y) = (points[0].y, points[0].y);
    for point in points {
        min_x = cmp::min(min_x, point.x);
        max_x = cmp::max(max_x, point.x);
        min_y = cmp::min(min_y, point.y);
        max_y = cmp::max(max_y, point.y);
    }

    let n = points.len();
    let mut intercepts: SmallVec<[i32; 8]> = SmallVec::new();
    for y in min_y..=max_y {
        intercepts.clear();
        for i in 0..n {
            let (a, b) = (points[i], points[(i + 1) % n]);
            if (a.y <= y && y < b.y) || (b.y <= y && y < a.y) {
                let t = (y - a.y) as f64 / (b.y - a.y) as f64;
                let x = a.x as f64 + t * (b.x - a.x) as f64;
                intercepts.push(x.round() as i32);
            }
        }
        intercepts.sort_unstable();

        for pair in intercepts.chunks_exact(2) {
            let x1 = cmp::max(pair[0], min_x);
            let x2 = cmp::min(pair[1], max_x);
            if x1 <= x2 {
                spans.push(Span { y, x1, x2 });
            }
        }
    }
    spans
}

impl<S: Surface> Turtle<S> {
    /// Runs `body` with the pen up and the path recorded, then fills the
    /// closed path it walked with `fill` and strokes its outline with the
    /// pen.
    ///
    /// Nothing is drawn while `body` runs. A path of fewer than three points
    /// (the start plus one move) leaves the surface untouched.
    pub fn filled<F>(&mut self, fill: ColorU, body: F)
    where
        F: FnOnce(&mut Turtle<S>),
    {
        let saved = self.state.flags;

        self.state
            .flags
            .remove(TurtleFlags::PEN_DOWN | TurtleFlags::VISIBLE);
        self.state.flags.insert(TurtleFlags::RECORDING);
        self.state.path.clear();
        let start = self.state.position();
        self.state.path.push(start);

        body(self);

        self.state
            .flags
            .set(TurtleFlags::RECORDING, saved.contains(TurtleFlags::RECORDING));
        let outline = self.state.draw_color();
        self.state
            .flags
            .set(TurtleFlags::PEN_DOWN, saved.contains(TurtleFlags::PEN_DOWN));
        self.state
            .flags
            .set(TurtleFlags::VISIBLE, saved.contains(TurtleFlags::VISIBLE));

        if self.state.path.len() < 3 {
            debug!(
                "filled: path of {} points is not a polygon",
                self.state.path.len()
            );
            return;
        }

        let points: Vec<Point2DI32> = self
            .state
            .path
            .iter()
            .map(|&Point2DF64 { x, y }| self.screen_coords(x, y))
            .collect();

        let spans = scanline_spans(&points);
        trace!("filled: {} vertices, {} spans", points.len(), spans.len());

        self.surface.set_draw_color(fill);
        for span in &spans {
            self.surface.draw_line(
                Point2DI32::new(span.x1, span.y),
                Point2DI32::new(span.x2, span.y),
                1,
            );
        }

        let pen_size = self.state.pen_size;
        self.surface.set_draw_color(outline);
        self.surface.draw_lines(&points, pen_size);
        self.surface
            .draw_line(points[points.len() - 1], points[0], pen_size);

        self.draw_sprite();
        self.surface.present();
    }
}

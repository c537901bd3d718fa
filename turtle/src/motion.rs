// pathfinder/turtle/src/motion.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::geometry::Point2DF64;
use crate::state::WrapMode;
use crate::surface::Surface;
use crate::Turtle;
use log::debug;

impl<S: Surface> Turtle<S> {
    /// Moves `dist` units along the heading, stroking if the pen is down.
    pub fn forward(&mut self, dist: f64) {
        let (s, c) = self.state.heading.to_radians().sin_cos();
        let to_x = self.state.pos_x + dist * c;
        let to_y = self.state.pos_y + dist * s;

        let (width, height) = self.surface.size();
        let w_units = width as f64 / self.state.scale;
        let h_units = height as f64 / self.state.scale;

        if self.state.wrap_mode == WrapMode::Fence {
            let (max_x, max_y) = (w_units / 2.0, h_units / 2.0);
            if to_x > max_x || to_x < -max_x || to_y > max_y || to_y < -max_y {
                debug!("forward: fence refuses move to ({}, {})", to_x, to_y);
                return;
            }
        }

        if self.state.pen_down() {
            let color = self.state.draw_color();
            let from = self.screen_position();
            let to = self.screen_coords(to_x, to_y);
            self.surface.set_draw_color(color);
            self.surface.draw_line(from, to, self.state.pen_size);
        }

        if self.state.recording() {
            self.state.path.push(Point2DF64::new(to_x, to_y));
        }

        self.state.pos_x = to_x;
        self.state.pos_y = to_y;

        if self.state.wrap_mode == WrapMode::Wrap {
            self.state.pos_x = wrap_axis(self.state.pos_x, w_units);
            self.state.pos_y = wrap_axis(self.state.pos_y, h_units);
        }

        // Fills present once, when the whole path is known.
        if self.state.recording() {
            return;
        }

        self.draw_sprite();
        self.surface.present();
    }

    #[inline]
    pub fn back(&mut self, dist: f64) {
        self.forward(-dist)
    }

    #[inline]
    pub fn left(&mut self, angle: f64) {
        self.state.heading += angle;
    }

    #[inline]
    pub fn right(&mut self, angle: f64) {
        self.state.heading -= angle;
    }

    /// Approximates an arc of `degrees` (counterclockwise when positive) and
    /// `radius` with one chord per whole degree.
    ///
    /// Each chord is `radius * step` long, `step` in radians, so the result
    /// deliberately differs from a true arc.
    pub fn draw_arc(&mut self, degrees: f64, radius: f64) {
        let steps = degrees.abs().floor();
        if !(steps >= 1.0) {
            return;
        }

        let step_angle = degrees.abs() / steps;
        let step_len = radius * step_angle.to_radians();

        for _ in 0..steps as u64 {
            if degrees > 0.0 {
                self.left(step_angle);
            } else {
                self.right(step_angle);
            }
            self.forward(step_len);
        }
    }
}

/// Shifts `value` by whole periods into `(-period / 2, period / 2]`.
fn wrap_axis(value: f64, period: f64) -> f64 {
    let half = period / 2.0;
    if !(period > 0.0) || !value.is_finite() || (value <= half && value > -half) {
        return value;
    }
    let mut wrapped = value - ((value - half) / period).ceil() * period;
    // Rounding can leave the result one period off at either wall.
    if wrapped > half {
        wrapped -= period;
    } else if wrapped <= -half {
        wrapped += period;
    }
    wrapped
}

// pathfinder/turtle/src/state.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::color::{effective_color, ColorU, PenMode};
use crate::config::TurtleConfig;
use crate::geometry::Point2DF64;
use serde_derive::{Deserialize, Serialize};
use std::cmp;
use std::path::PathBuf;

bitflags! {
    pub struct TurtleFlags: u8 {
        const PEN_DOWN  = 0x01;
        const VISIBLE   = 0x02;
        const RECORDING = 0x04;
    }
}

/// What happens when the turtle or a mapped coordinate leaves the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapMode {
    /// Coordinates wrap around to the opposite edge.
    Wrap,
    /// Moves past the edge are refused; drawing is clamped to the surface.
    Fence,
    /// Coordinates are left alone and may fall off the surface.
    Window,
}

impl Default for WrapMode {
    fn default() -> WrapMode {
        WrapMode::Wrap
    }
}

/// Inclusive clamp rectangle in surface space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    /// The whole `width` x `height` surface.
    pub fn full(width: u32, height: u32) -> Bounds {
        Bounds {
            min_x: 0,
            min_y: 0,
            max_x: last_index(width),
            max_y: last_index(height),
        }
    }

    /// Clamps every edge onto the surface and swaps inverted pairs, so that
    /// `0 <= min <= max < size` holds on both axes.
    pub fn normalized(
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
        width: u32,
        height: u32,
    ) -> Bounds {
        let (last_x, last_y) = (last_index(width), last_index(height));
        let (min_x, max_x) = (clamp(min_x, 0, last_x), clamp(max_x, 0, last_x));
        let (min_y, max_y) = (clamp(min_y, 0, last_y), clamp(max_y, 0, last_y));
        Bounds {
            min_x: cmp::min(min_x, max_x),
            min_y: cmp::min(min_y, max_y),
            max_x: cmp::max(min_x, max_x),
            max_y: cmp::max(min_y, max_y),
        }
    }
}

/// Widest stroke the turtle will ask a surface for.
pub const MAX_PEN_SIZE: u32 = 4096;

/// Clamps a requested pen size into `1..=MAX_PEN_SIZE`.
#[inline]
pub(crate) fn pen_size(size: u32) -> u32 {
    cmp::min(cmp::max(size, 1), MAX_PEN_SIZE)
}

#[inline]
fn last_index(size: u32) -> i32 {
    cmp::max(size as i32 - 1, 0)
}

#[inline]
pub(crate) fn clamp(value: i32, min: i32, max: i32) -> i32 {
    cmp::min(cmp::max(value, min), max)
}

#[derive(Clone, Debug)]
pub struct TurtleState {
    pub pos_x: f64,
    pub pos_y: f64,
    /// Degrees, counterclockwise. Never normalized.
    pub heading: f64,
    pub flags: TurtleFlags,
    pub pen_mode: PenMode,
    pub foreground: ColorU,
    pub background: ColorU,
    pub scale: f64,
    pub bounds: Bounds,
    pub wrap_mode: WrapMode,
    pub pen_size: u32,
    pub font_path: Option<PathBuf>,
    pub font_size: u32,
    pub path: Vec<Point2DF64>,
}

impl TurtleState {
    pub fn new(config: &TurtleConfig, width: u32, height: u32) -> TurtleState {
        TurtleState {
            pos_x: 0.0,
            pos_y: 0.0,
            heading: 0.0,
            flags: TurtleFlags::PEN_DOWN,
            pen_mode: PenMode::Paint,
            foreground: config.foreground,
            background: config.background,
            scale: config.scale,
            bounds: Bounds::full(width, height),
            wrap_mode: config.wrap_mode,
            pen_size: pen_size(config.pen_size),
            font_path: config.font_path.clone(),
            font_size: config.font_size,
            path: Vec::with_capacity(1024),
        }
    }

    #[inline]
    pub fn position(&self) -> Point2DF64 {
        Point2DF64::new(self.pos_x, self.pos_y)
    }

    #[inline]
    pub fn pen_down(&self) -> bool {
        self.flags.contains(TurtleFlags::PEN_DOWN)
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.flags.contains(TurtleFlags::VISIBLE)
    }

    #[inline]
    pub fn recording(&self) -> bool {
        self.flags.contains(TurtleFlags::RECORDING)
    }

    /// The stroke color for the current pen mode.
    #[inline]
    pub fn draw_color(&self) -> ColorU {
        effective_color(self.pen_mode, self.foreground, self.background)
    }

    pub fn home(&mut self) {
        self.pos_x = 0.0;
        self.pos_y = 0.0;
        self.heading = 0.0;
    }
}

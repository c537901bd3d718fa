// pathfinder/turtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Drives a turtle over a raster surface: motion and strokes, recorded
//! path fills and flood fills on the live pixel buffer.

#[macro_use]
extern crate bitflags;

pub mod canvas;
pub mod color;
pub mod command;
pub mod config;
pub mod decor;
pub mod error;
pub mod fill;
pub mod flood;
pub mod geometry;
pub mod mapper;
pub mod motion;
pub mod state;
pub mod surface;

pub use crate::canvas::Canvas;
pub use crate::color::{effective_color, ColorU, PenMode};
pub use crate::command::{Command, Program, RunResultFlags};
pub use crate::config::TurtleConfig;
pub use crate::error::TurtleError;
pub use crate::geometry::{Point2DF64, Point2DI32, RectI32};
pub use crate::state::{Bounds, TurtleFlags, TurtleState, WrapMode, MAX_PEN_SIZE};
pub use crate::surface::{FontService, Image, ImageLoader, Surface};

use crate::decor::Sprite;
use log::warn;
use std::fmt::{self, Debug, Formatter};
use std::path::{Path, PathBuf};

/// A turtle bound to one rendering surface.
///
/// Every command runs to completion, presenting the frame where it draws,
/// before returning.
pub struct Turtle<S: Surface> {
    surface: S,
    state: TurtleState,
    config: TurtleConfig,
    sprite: Option<Sprite<S::Texture>>,
    images: Option<Box<dyn ImageLoader>>,
    fonts: Option<Box<dyn FontService>>,
}

impl<S: Surface> Debug for Turtle<S> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter
            .debug_struct("Turtle")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("sprite", &self.sprite.as_ref().map(|s| (s.width, s.height)))
            .finish()
    }
}

impl<S: Surface> Turtle<S> {
    /// A turtle with the default settings, picking up the label font from
    /// `TURTLE_FONT_PATH` when it is set.
    pub fn new(surface: S) -> Turtle<S> {
        Turtle::with_config(surface, TurtleConfig::from_env())
    }

    pub fn with_config(surface: S, config: TurtleConfig) -> Turtle<S> {
        let (width, height) = surface.size();
        let state = TurtleState::new(&config, width, height);
        Turtle {
            surface,
            state,
            config,
            sprite: None,
            images: None,
            fonts: None,
        }
    }

    pub fn with_image_loader<L>(mut self, loader: L) -> Turtle<S>
    where
        L: ImageLoader + 'static,
    {
        self.images = Some(Box::new(loader));
        self
    }

    pub fn with_font_service<F>(mut self, fonts: F) -> Turtle<S>
    where
        F: FontService + 'static,
    {
        self.fonts = Some(Box::new(fonts));
        self
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    #[inline]
    pub fn state(&self) -> &TurtleState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Maps a turtle-space point to the surface.
    pub fn screen_coords(&self, x: f64, y: f64) -> Point2DI32 {
        let (width, height) = self.surface.size();
        mapper::screen_coords(&self.state, width, height, x, y)
    }

    /// The turtle's own position on the surface.
    #[inline]
    pub fn screen_position(&self) -> Point2DI32 {
        self.screen_coords(self.state.pos_x, self.state.pos_y)
    }

    // Pen

    pub fn pen_up(&mut self) {
        self.state.flags.remove(TurtleFlags::PEN_DOWN);
    }

    pub fn pen_down(&mut self) {
        self.state.flags.insert(TurtleFlags::PEN_DOWN);
    }

    /// Sets the stroke width in pixels, clamped into `1..=MAX_PEN_SIZE`.
    pub fn set_pen_size(&mut self, size: u32) {
        self.state.pen_size = state::pen_size(size);
    }

    pub fn set_pen_mode(&mut self, mode: PenMode) {
        self.state.pen_mode = mode;
    }

    pub fn set_foreground_color(&mut self, color: ColorU) {
        self.state.foreground = color;
    }

    pub fn set_background_color(&mut self, color: ColorU) {
        self.state.background = color;
    }

    #[inline]
    pub fn is_pen_down(&self) -> bool {
        self.state.pen_down()
    }

    #[inline]
    pub fn pen_size(&self) -> u32 {
        self.state.pen_size
    }

    #[inline]
    pub fn pen_mode(&self) -> PenMode {
        self.state.pen_mode
    }

    #[inline]
    pub fn foreground_color(&self) -> ColorU {
        self.state.foreground
    }

    #[inline]
    pub fn background_color(&self) -> ColorU {
        self.state.background
    }

    /// The color strokes and bucket fills currently paint with.
    #[inline]
    pub fn draw_color(&self) -> ColorU {
        self.state.draw_color()
    }

    // Visibility

    pub fn show(&mut self) {
        self.state.flags.insert(TurtleFlags::VISIBLE);
    }

    pub fn hide(&mut self) {
        self.state.flags.remove(TurtleFlags::VISIBLE);
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.state.visible()
    }

    #[inline]
    pub fn is_recording(&self) -> bool {
        self.state.recording()
    }

    // Positioning

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.state.pos_x = x;
        self.state.pos_y = y;
    }

    pub fn set_x(&mut self, x: f64) {
        self.state.pos_x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.state.pos_y = y;
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.state.heading = angle;
    }

    pub fn home(&mut self) {
        self.state.home();
    }

    #[inline]
    pub fn position(&self) -> Point2DF64 {
        self.state.position()
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.state.pos_x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.state.pos_y
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.state.heading
    }

    /// The heading, in `[0, 360)`, that points from the turtle at `(x, y)`.
    pub fn towards(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.state.pos_x;
        let dy = y - self.state.pos_y;
        let heading = dy.atan2(dx).to_degrees();
        if heading < 0.0 {
            heading + 360.0
        } else {
            heading
        }
    }

    /// The recorded path of the last (or current) `filled` body.
    #[inline]
    pub fn path(&self) -> &[Point2DF64] {
        &self.state.path
    }

    // View

    pub fn set_scale(&mut self, scale: f64) -> Result<(), TurtleError> {
        if !scale.is_finite() || scale <= 0.0 {
            warn!("setscale: rejecting scale {}", scale);
            return Err(TurtleError::InvalidScale(scale));
        }
        self.state.scale = scale;
        Ok(())
    }

    /// Sets the clamp rectangle. Edges are clamped onto the surface and
    /// inverted pairs are swapped rather than rejected.
    pub fn set_bounds(&mut self, min_x: i32, min_y: i32, max_x: i32, max_y: i32) {
        let (width, height) = self.surface.size();
        self.state.bounds = Bounds::normalized(min_x, min_y, max_x, max_y, width, height);
    }

    pub fn set_wrap_mode(&mut self, mode: WrapMode) {
        self.state.wrap_mode = mode;
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.state.bounds
    }

    #[inline]
    pub fn wrap_mode(&self) -> WrapMode {
        self.state.wrap_mode
    }

    /// Clears the surface to the current background, then homes the turtle
    /// and restores the configured colors, scale and bounds. The pen is put
    /// down and the turtle shown.
    pub fn clear(&mut self) {
        self.surface.set_draw_color(self.state.background);
        self.surface.clear();
        self.surface.present();

        let (width, height) = self.surface.size();
        self.state.home();
        self.state.path.clear();
        self.state.flags.insert(TurtleFlags::PEN_DOWN | TurtleFlags::VISIBLE);
        self.state.foreground = self.config.foreground;
        self.state.background = self.config.background;
        self.state.scale = self.config.scale;
        self.state.bounds = Bounds::full(width, height);
    }

    // Labels

    pub fn set_font_path<P: Into<PathBuf>>(&mut self, path: P) {
        self.state.font_path = Some(path.into());
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.state.font_size = size;
    }

    #[inline]
    pub fn font_path(&self) -> Option<&Path> {
        self.state.font_path.as_ref().map(|path| path.as_path())
    }

    #[inline]
    pub fn font_size(&self) -> u32 {
        self.state.font_size
    }
}

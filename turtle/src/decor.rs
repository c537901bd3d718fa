// pathfinder/turtle/src/decor.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The turtle sprite and text labels.

use crate::error::TurtleError;
use crate::geometry::{Point2DI32, RectI32};
use crate::surface::{BlendMode, Image, Surface};
use crate::Turtle;
use log::warn;
use std::path::Path;

/// An uploaded turtle image.
#[derive(Debug)]
pub struct Sprite<T> {
    pub texture: T,
    pub width: u32,
    pub height: u32,
}

impl<S: Surface> Turtle<S> {
    /// Loads the image at `path` as the turtle sprite. On failure the old
    /// sprite stays.
    pub fn load_sprite<P: AsRef<Path>>(&mut self, path: P) -> Result<(), TurtleError> {
        let path = path.as_ref();
        let loader = match self.images.as_mut() {
            Some(loader) => loader,
            None => {
                warn!("turtleimage: no image loader for {:?}", path);
                return Err(TurtleError::NoImageLoader);
            }
        };
        let image = loader.load(path).map_err(|source| {
            warn!("turtleimage: loading {:?} failed: {}", path, source);
            TurtleError::SpriteLoad {
                path: path.to_owned(),
                source,
            }
        })?;

        let texture = self.upload(&image)?;
        self.sprite = Some(Sprite {
            texture,
            width: image.width,
            height: image.height,
        });
        Ok(())
    }

    #[inline]
    pub fn has_sprite(&self) -> bool {
        self.sprite.is_some()
    }

    /// Blits the sprite centered on the turtle, turned to its heading.
    /// Does not present.
    pub(crate) fn draw_sprite(&mut self) {
        if !self.state.visible() {
            return;
        }
        let center = self.screen_position();
        let sprite = match self.sprite {
            Some(ref sprite) => sprite,
            None => return,
        };

        let (w, h) = (sprite.width as i32, sprite.height as i32);
        let dst = RectI32::centered_at(center, w, h);
        let pivot = Point2DI32::new(w / 2, h / 2);
        // Screen y points down, so the rotation runs against the heading.
        let angle = -self.state.heading;
        if let Err(err) = self
            .surface
            .copy_texture(&sprite.texture, dst, angle, pivot)
        {
            warn!("drawsprite: copying sprite failed: {}", err);
        }
    }

    /// Renders `text` in the foreground color centered on the turtle and
    /// presents.
    pub fn print_label(&mut self, text: &str) -> Result<(), TurtleError> {
        let font_path = match self.state.font_path {
            Some(ref path) => path.clone(),
            None => {
                warn!("printlabel: no font path set");
                return Err(TurtleError::NoFontPath);
            }
        };
        let fonts = match self.fonts.as_mut() {
            Some(fonts) => fonts,
            None => {
                warn!("printlabel: no font service");
                return Err(TurtleError::NoFontService);
            }
        };

        let image = fonts
            .render(&font_path, self.state.font_size, text, self.state.foreground)
            .map_err(|source| {
                warn!("printlabel: rendering {:?} failed: {}", text, source);
                TurtleError::LabelRender {
                    path: font_path.clone(),
                    source,
                }
            })?;

        let texture = self.upload(&image)?;
        let dst = RectI32::centered_at(
            self.screen_position(),
            image.width as i32,
            image.height as i32,
        );
        let pivot = Point2DI32::new(image.width as i32 / 2, image.height as i32 / 2);
        if let Err(err) = self.surface.copy_texture(&texture, dst, 0.0, pivot) {
            warn!("printlabel: copying label failed: {}", err);
            return Err(TurtleError::CopyTexture(err));
        }

        self.surface.present();
        Ok(())
    }

    fn upload(&mut self, image: &Image) -> Result<S::Texture, TurtleError> {
        let mut texture = self
            .surface
            .create_texture(image.width, image.height, BlendMode::Blend)
            .map_err(|err| {
                warn!("upload: creating texture failed: {}", err);
                TurtleError::CreateTexture(err)
            })?;
        self.surface
            .update_texture(&mut texture, &image.pixels, image.pitch())
            .map_err(|err| {
                warn!("upload: updating texture failed: {}", err);
                TurtleError::UpdateTexture(err)
            })?;
        Ok(texture)
    }
}

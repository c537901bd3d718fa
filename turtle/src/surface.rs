// pathfinder/turtle/src/surface.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The services the turtle draws through. The host owns the window, the
//! image decoder and the font rasterizer; the turtle only sees these traits.

use crate::color::ColorU;
use crate::geometry::{Point2DI32, RectI32};
use std::path::Path;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct SurfaceError(pub String);

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct AssetError(pub String);

/// How a texture combines with the pixels under it when copied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Texture pixels replace the destination, alpha included.
    None,
    /// Source-over alpha blending.
    Blend,
}

/// A rendering surface of RGBA8 pixels, row-major with the origin top-left.
///
/// Pixel buffers crossing this trait are tightly packed `r, g, b, a` bytes
/// with an explicit `pitch` (bytes per row).
pub trait Surface {
    type Texture;

    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    fn set_draw_color(&mut self, color: ColorU);

    /// Draws a line in the current draw color. Endpoints may lie outside the
    /// surface; implementations clip.
    fn draw_line(&mut self, from: Point2DI32, to: Point2DI32, width: u32);

    /// Draws an open polyline through `points`.
    fn draw_lines(&mut self, points: &[Point2DI32], width: u32) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], width);
        }
    }

    /// Fills the whole surface with the current draw color.
    fn clear(&mut self);

    fn present(&mut self);

    fn read_pixels(&mut self, pixels: &mut [u8], pitch: usize) -> Result<(), SurfaceError>;

    fn create_texture(
        &mut self,
        width: u32,
        height: u32,
        blend: BlendMode,
    ) -> Result<Self::Texture, SurfaceError>;

    fn update_texture(
        &mut self,
        texture: &mut Self::Texture,
        pixels: &[u8],
        pitch: usize,
    ) -> Result<(), SurfaceError>;

    /// Copies the whole texture into `dst`, rotated clockwise by `angle`
    /// degrees about `center` (relative to `dst`'s origin).
    fn copy_texture(
        &mut self,
        texture: &Self::Texture,
        dst: RectI32,
        angle: f64,
        center: Point2DI32,
    ) -> Result<(), SurfaceError>;
}

/// A decoded RGBA8 image, `width * 4` bytes per row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Image {
    #[inline]
    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }
}

/// Decodes sprite images.
pub trait ImageLoader {
    fn load(&mut self, path: &Path) -> Result<Image, AssetError>;
}

/// Rasterizes label text.
pub trait FontService {
    fn render(
        &mut self,
        font_path: &Path,
        font_size: u32,
        text: &str,
        color: ColorU,
    ) -> Result<Image, AssetError>;
}

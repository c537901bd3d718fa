// pathfinder/turtle/src/canvas.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A software `Surface` backed by an in-memory RGBA8 buffer, for running
//! the turtle headless.

use crate::color::ColorU;
use crate::geometry::{Point2DI32, RectI32};
use crate::surface::{BlendMode, Surface, SurfaceError, BYTES_PER_PIXEL};
use std::cmp;
use std::convert::TryFrom;

#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    draw_color: ColorU,
    frames_presented: usize,
}

#[derive(Clone, Debug)]
pub struct CanvasTexture {
    width: u32,
    height: u32,
    blend: BlendMode,
    pixels: Vec<u8>,
}

impl CanvasTexture {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let index = (y * self.width as usize + x) * BYTES_PER_PIXEL;
        [
            self.pixels[index],
            self.pixels[index + 1],
            self.pixels[index + 2],
            self.pixels[index + 3],
        ]
    }
}

impl Canvas {
    /// A canvas filled with opaque black.
    pub fn new(width: u32, height: u32) -> Canvas {
        let mut pixels = vec![0; width as usize * height as usize * BYTES_PER_PIXEL];
        for pixel in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[3] = 255;
        }
        Canvas {
            width,
            height,
            pixels,
            draw_color: ColorU::white(),
            frames_presented: 0,
        }
    }

    #[inline]
    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn draw_color(&self) -> ColorU {
        self.draw_color
    }

    /// How many times `present` has been called.
    #[inline]
    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<ColorU> {
        let index = self.index(x, y)?;
        Some(ColorU::new(
            self.pixels[index],
            self.pixels[index + 1],
            self.pixels[index + 2],
            self.pixels[index + 3],
        ))
    }

    /// Writes one pixel; coordinates off the canvas are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: ColorU) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index..index + BYTES_PER_PIXEL].copy_from_slice(&color.to_bytes());
        }
    }

    /// Number of pixels equal to `color`.
    pub fn count_pixels(&self, color: ColorU) -> usize {
        let bytes = color.to_bytes();
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|pixel| **pixel == bytes[..])
            .count()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.pitch() + x as usize * BYTES_PER_PIXEL)
    }

    /// Paints a `width` x `width` square around `(x, y)`, clipped to the
    /// canvas.
    fn stamp(&mut self, x: i32, y: i32, width: i32) {
        let color = self.draw_color;
        if width <= 1 {
            self.set_pixel(x, y, color);
            return;
        }
        let lo = -((width - 1) / 2);
        let hi = lo + width - 1;
        let x0 = cmp::max(x.saturating_add(lo), 0);
        let y0 = cmp::max(y.saturating_add(lo), 0);
        let x1 = cmp::min(x.saturating_add(hi), self.width as i32 - 1);
        let y1 = cmp::min(y.saturating_add(hi), self.height as i32 - 1);
        for py in y0..=y1 {
            for px in x0..=x1 {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Clips a line to the canvas grown by the pen width. Endpoints already
    /// inside are returned untouched so on-canvas strokes stay exact.
    fn clip_line(
        &self,
        from: Point2DI32,
        to: Point2DI32,
        width: i32,
    ) -> Option<(Point2DI32, Point2DI32)> {
        let (min_x, min_y) = (-width, -width);
        let max_x = (self.width as i32 - 1).saturating_add(width);
        let max_y = (self.height as i32 - 1).saturating_add(width);
        let inside = |p: Point2DI32| p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y;
        if inside(from) && inside(to) {
            return Some((from, to));
        }

        // Liang-Barsky.
        let (x0, y0) = (from.x as f64, from.y as f64);
        let (dx, dy) = (to.x as f64 - x0, to.y as f64 - y0);
        let (mut t0, mut t1) = (0.0f64, 1.0f64);
        for &(p, q) in &[
            (-dx, x0 - min_x as f64),
            (dx, max_x as f64 - x0),
            (-dy, y0 - min_y as f64),
            (dy, max_y as f64 - y0),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }

        let point_at = |t: f64| {
            Point2DI32::new((x0 + t * dx).round() as i32, (y0 + t * dy).round() as i32)
        };
        let from = if inside(from) { from } else { point_at(t0) };
        let to = if inside(to) { to } else { point_at(t1) };
        Some((from, to))
    }

    fn blend_pixel(&mut self, x: i32, y: i32, src: [u8; 4], blend: BlendMode) {
        let index = match self.index(x, y) {
            Some(index) => index,
            None => return,
        };
        let dst = &mut self.pixels[index..index + BYTES_PER_PIXEL];
        match blend {
            BlendMode::None => dst.copy_from_slice(&src),
            BlendMode::Blend => {
                let alpha = src[3] as u32;
                for channel in 0..3 {
                    dst[channel] = mix(src[channel], dst[channel], alpha);
                }
                dst[3] = (alpha + dst[3] as u32 * (255 - alpha) / 255) as u8;
            }
        }
    }
}

#[inline]
fn mix(src: u8, dst: u8, alpha: u32) -> u8 {
    ((src as u32 * alpha + dst as u32 * (255 - alpha)) / 255) as u8
}

fn check_buffer(
    pixels_len: usize,
    pitch: usize,
    width: u32,
    height: u32,
) -> Result<(), SurfaceError> {
    let row = width as usize * BYTES_PER_PIXEL;
    if pitch < row {
        return Err(SurfaceError(format!(
            "pitch {} is shorter than a {} pixel row",
            pitch, width
        )));
    }
    if height > 0 && pixels_len < pitch * (height as usize - 1) + row {
        return Err(SurfaceError(format!(
            "buffer of {} bytes is too small for {}x{} pixels at pitch {}",
            pixels_len, width, height, pitch
        )));
    }
    Ok(())
}

impl Surface for Canvas {
    type Texture = CanvasTexture;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_draw_color(&mut self, color: ColorU) {
        self.draw_color = color;
    }

    fn draw_line(&mut self, from: Point2DI32, to: Point2DI32, width: u32) {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let (from, to) = match self.clip_line(from, to, width) {
            Some(clipped) => clipped,
            None => return,
        };
        // Clipped endpoints can still be a full i32 range apart.
        let dx = (to.x as i64 - from.x as i64).abs();
        let dy = -(to.y as i64 - from.y as i64).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);

        loop {
            self.stamp(x, y, width);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn clear(&mut self) {
        let bytes = self.draw_color.to_bytes();
        for pixel in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&bytes);
        }
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }

    fn read_pixels(&mut self, pixels: &mut [u8], pitch: usize) -> Result<(), SurfaceError> {
        check_buffer(pixels.len(), pitch, self.width, self.height)?;
        let row = self.pitch();
        if row == 0 {
            return Ok(());
        }
        for (y, src) in self.pixels.chunks_exact(row).enumerate() {
            pixels[y * pitch..y * pitch + row].copy_from_slice(src);
        }
        Ok(())
    }

    fn create_texture(
        &mut self,
        width: u32,
        height: u32,
        blend: BlendMode,
    ) -> Result<CanvasTexture, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError(format!(
                "cannot create a {}x{} texture",
                width, height
            )));
        }
        Ok(CanvasTexture {
            width,
            height,
            blend,
            pixels: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        })
    }

    fn update_texture(
        &mut self,
        texture: &mut CanvasTexture,
        pixels: &[u8],
        pitch: usize,
    ) -> Result<(), SurfaceError> {
        check_buffer(pixels.len(), pitch, texture.width, texture.height)?;
        let row = texture.width as usize * BYTES_PER_PIXEL;
        for (y, dst) in texture.pixels.chunks_exact_mut(row).enumerate() {
            dst.copy_from_slice(&pixels[y * pitch..y * pitch + row]);
        }
        Ok(())
    }

    fn copy_texture(
        &mut self,
        texture: &CanvasTexture,
        dst: RectI32,
        angle: f64,
        center: Point2DI32,
    ) -> Result<(), SurfaceError> {
        if dst.width <= 0 || dst.height <= 0 {
            return Ok(());
        }

        let (origin_x, origin_y) = (dst.origin.x as f64, dst.origin.y as f64);
        let (width, height) = (dst.width as f64, dst.height as f64);
        let pivot_x = origin_x + center.x as f64;
        let pivot_y = origin_y + center.y as f64;
        let (sin, cos) = angle.to_radians().sin_cos();

        // Bounding box of the rotated destination rectangle.
        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for &(x, y) in &[
            (origin_x, origin_y),
            (origin_x + width, origin_y),
            (origin_x, origin_y + height),
            (origin_x + width, origin_y + height),
        ] {
            let (rx, ry) = (x - pivot_x, y - pivot_y);
            let x = pivot_x + rx * cos - ry * sin;
            let y = pivot_y + rx * sin + ry * cos;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        let x0 = (min_x.floor() as i32).max(0);
        let y0 = (min_y.floor() as i32).max(0);
        let x1 = (max_x.ceil() as i32).min(self.width as i32);
        let y1 = (max_y.ceil() as i32).min(self.height as i32);

        for y in y0..y1 {
            for x in x0..x1 {
                // Map the pixel center back into the unrotated rectangle.
                let rx = x as f64 + 0.5 - pivot_x;
                let ry = y as f64 + 0.5 - pivot_y;
                let u = rx * cos + ry * sin + pivot_x - origin_x;
                let v = -rx * sin + ry * cos + pivot_y - origin_y;
                if u < 0.0 || v < 0.0 || u >= width || v >= height {
                    continue;
                }
                let tx = ((u * texture.width as f64 / width) as usize)
                    .min(texture.width as usize - 1);
                let ty = ((v * texture.height as f64 / height) as usize)
                    .min(texture.height as usize - 1);
                let src = texture.pixel(tx, ty);
                self.blend_pixel(x, y, src, texture.blend);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: ColorU = ColorU::from_rgb(255, 0, 0);

    #[test]
    fn new_canvas_is_opaque_black() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.count_pixels(ColorU::black()), 12);
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn horizontal_line_is_inclusive() {
        let mut canvas = Canvas::new(10, 10);
        canvas.set_draw_color(RED);
        canvas.draw_line(Point2DI32::new(2, 5), Point2DI32::new(6, 5), 1);
        assert_eq!(canvas.count_pixels(RED), 5);
        assert_eq!(canvas.pixel(2, 5), Some(RED));
        assert_eq!(canvas.pixel(6, 5), Some(RED));
    }

    #[test]
    fn diagonal_line_steps_both_axes() {
        let mut canvas = Canvas::new(10, 10);
        canvas.set_draw_color(RED);
        canvas.draw_line(Point2DI32::new(5, 5), Point2DI32::new(1, 1), 1);
        for i in 1..=5 {
            assert_eq!(canvas.pixel(i, i), Some(RED));
        }
        assert_eq!(canvas.count_pixels(RED), 5);
    }

    #[test]
    fn wide_line_stamps_square() {
        let mut canvas = Canvas::new(10, 10);
        canvas.set_draw_color(RED);
        canvas.draw_line(Point2DI32::new(5, 5), Point2DI32::new(5, 5), 3);
        assert_eq!(canvas.count_pixels(RED), 9);
        assert_eq!(canvas.pixel(4, 4), Some(RED));
        assert_eq!(canvas.pixel(6, 6), Some(RED));
    }

    #[test]
    fn huge_pen_covers_canvas() {
        for &width in &[u32::MAX, i32::MAX as u32 + 7, 1 << 20] {
            let mut canvas = Canvas::new(10, 10);
            canvas.set_draw_color(RED);
            canvas.draw_line(Point2DI32::new(5, 5), Point2DI32::new(6, 5), width);
            assert_eq!(canvas.count_pixels(RED), 100, "width {}", width);
        }
    }

    #[test]
    fn lines_off_canvas_are_clipped() {
        let mut canvas = Canvas::new(10, 10);
        canvas.set_draw_color(RED);
        canvas.draw_line(Point2DI32::new(-5, 2), Point2DI32::new(20, 2), 1);
        assert_eq!(canvas.count_pixels(RED), 10);
    }

    #[test]
    fn far_away_endpoints_are_clipped() {
        let mut canvas = Canvas::new(10, 10);
        canvas.set_draw_color(RED);
        canvas.draw_line(Point2DI32::new(i32::MIN, 4), Point2DI32::new(i32::MAX, 4), 1);
        assert_eq!(canvas.count_pixels(RED), 10);
        canvas.draw_line(Point2DI32::new(-100, -100), Point2DI32::new(-50, -100), 1);
        assert_eq!(canvas.count_pixels(RED), 10);
    }

    #[test]
    fn read_pixels_rejects_short_buffer() {
        let mut canvas = Canvas::new(4, 4);
        let mut bytes = vec![0; 10];
        assert!(canvas.read_pixels(&mut bytes, 16).is_err());
        let mut bytes = vec![0; 64];
        assert!(canvas.read_pixels(&mut bytes, 8).is_err());
    }

    #[test]
    fn texture_round_trips_through_copy() {
        let mut canvas = Canvas::new(4, 4);
        canvas.set_pixel(1, 2, RED);
        let mut bytes = vec![0; 64];
        canvas.read_pixels(&mut bytes, 16).unwrap();

        let mut other = Canvas::new(4, 4);
        let mut texture = other.create_texture(4, 4, BlendMode::None).unwrap();
        other.update_texture(&mut texture, &bytes, 16).unwrap();
        other
            .copy_texture(
                &texture,
                RectI32::new(Point2DI32::new(0, 0), 4, 4),
                0.0,
                Point2DI32::new(2, 2),
            )
            .unwrap();
        assert_eq!(other.pixels(), canvas.pixels());
    }

    #[test]
    fn blended_copy_skips_transparent_pixels() {
        let mut canvas = Canvas::new(4, 4);
        let mut texture = canvas.create_texture(2, 1, BlendMode::Blend).unwrap();
        canvas
            .update_texture(&mut texture, &[255, 0, 0, 255, 0, 255, 0, 0], 8)
            .unwrap();
        canvas
            .copy_texture(
                &texture,
                RectI32::new(Point2DI32::new(1, 1), 2, 1),
                0.0,
                Point2DI32::new(1, 0),
            )
            .unwrap();
        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(2, 1), Some(ColorU::black()));
    }

    #[test]
    fn quarter_turn_rotates_clockwise() {
        let mut canvas = Canvas::new(5, 5);
        // A 3x1 bar rotated 90 degrees about the corner between its first
        // and second pixels turns into a 1x3 bar left of that corner.
        let mut texture = canvas.create_texture(3, 1, BlendMode::None).unwrap();
        canvas
            .update_texture(&mut texture, &[255u8, 0, 0, 255].repeat(3), 12)
            .unwrap();
        let dst = RectI32::centered_at(Point2DI32::new(2, 2), 3, 1);
        canvas
            .copy_texture(&texture, dst, 90.0, Point2DI32::new(1, 0))
            .unwrap();
        assert_eq!(canvas.count_pixels(RED), 3);
        for y in 1..4 {
            assert_eq!(canvas.pixel(1, y), Some(RED));
        }
    }
}

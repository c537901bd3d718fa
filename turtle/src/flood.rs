// pathfinder/turtle/src/flood.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bucket fill over a snapshot of the surface pixels.

use crate::error::TurtleError;
use crate::geometry::{Point2DI32, RectI32};
use crate::surface::{BlendMode, Surface, BYTES_PER_PIXEL};
use crate::Turtle;
use log::{debug, trace, warn};

/// An owned RGBA8 pixel buffer with an explicit row pitch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pitch: usize,
    bytes: Vec<u8>,
}

/// A run of pixels `x1..=x2` on `row` whose neighbours in direction `dir`
/// (+1 down, -1 up) still need checking.
#[derive(Clone, Copy, Debug)]
struct Segment {
    row: usize,
    x1: usize,
    x2: usize,
    dir: isize,
}

impl PixelBuffer {
    /// A zeroed, tightly packed `width` x `height` buffer.
    pub fn new(width: usize, height: usize) -> PixelBuffer {
        let pitch = width * BYTES_PER_PIXEL;
        PixelBuffer {
            width,
            height,
            pitch,
            bytes: vec![0; pitch * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 4] {
        let i = y * self.pitch + x * BYTES_PER_PIXEL;
        [
            self.bytes[i],
            self.bytes[i + 1],
            self.bytes[i + 2],
            self.bytes[i + 3],
        ]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, pixel: [u8; 4]) {
        let i = y * self.pitch + x * BYTES_PER_PIXEL;
        self.bytes[i..i + BYTES_PER_PIXEL].copy_from_slice(&pixel);
    }

    fn paint_run(&mut self, row: usize, x1: usize, x2: usize, pixel: [u8; 4]) -> usize {
        for x in x1..=x2 {
            self.set(x, row, pixel);
        }
        x2 - x1 + 1
    }

    /// Recolors the 4-connected region of pixels equal to the one at
    /// `(x, y)` with `fill`. Returns the number of pixels painted.
    ///
    /// Works a row segment at a time off an explicit stack, so memory grows
    /// with the number of segments rather than the number of pixels.
    pub fn flood_fill(&mut self, x: usize, y: usize, fill: [u8; 4]) -> usize {
        if x >= self.width || y >= self.height {
            return 0;
        }
        let target = self.get(x, y);
        if target == fill {
            return 0;
        }

        let mut x1 = x;
        while x1 > 0 && self.get(x1 - 1, y) == target {
            x1 -= 1;
        }
        let mut x2 = x;
        while x2 + 1 < self.width && self.get(x2 + 1, y) == target {
            x2 += 1;
        }
        let mut painted = self.paint_run(y, x1, x2, fill);

        let mut stack = vec![
            Segment { row: y, x1, x2, dir: 1 },
            Segment { row: y, x1, x2, dir: -1 },
        ];

        while let Some(segment) = stack.pop() {
            let next = segment.row as isize + segment.dir;
            if next < 0 || next >= self.height as isize {
                continue;
            }
            let row = next as usize;

            let mut x = segment.x1;
            while x <= segment.x2 {
                if self.get(x, row) != target {
                    x += 1;
                    continue;
                }

                let mut left = x;
                while left > 0 && self.get(left - 1, row) == target {
                    left -= 1;
                }
                let mut right = x;
                while right + 1 < self.width && self.get(right + 1, row) == target {
                    right += 1;
                }
                painted += self.paint_run(row, left, right, fill);

                stack.push(Segment {
                    row,
                    x1: left,
                    x2: right,
                    dir: segment.dir,
                });
                // Only an overhang past the parent can reach unvisited
                // pixels back the way we came.
                if left < segment.x1 || right > segment.x2 {
                    stack.push(Segment {
                        row,
                        x1: left,
                        x2: right,
                        dir: -segment.dir,
                    });
                }

                // `right + 1` is known not to match.
                x = right + 2;
            }
        }

        painted
    }
}

impl<S: Surface> Turtle<S> {
    /// Flood fills the region under the turtle with the pen color.
    ///
    /// A no-op when the turtle is off the surface or the region already has
    /// the pen color. Surface I/O failures abort before the visible frame is
    /// touched.
    pub fn bucket_fill(&mut self) -> Result<(), TurtleError> {
        let seed = self.screen_position();
        let (width, height) = self.surface.size();
        if seed.x < 0 || seed.y < 0 || seed.x >= width as i32 || seed.y >= height as i32 {
            debug!("bucketfill: seed {:?} is off the surface", seed);
            return Ok(());
        }

        let mut buffer = PixelBuffer::new(width as usize, height as usize);
        let pitch = buffer.pitch();
        if let Err(err) = self.surface.read_pixels(buffer.bytes_mut(), pitch) {
            warn!("bucketfill: reading pixels failed: {}", err);
            return Err(TurtleError::ReadPixels(err));
        }

        let fill = self.state.draw_color().to_bytes();
        let (sx, sy) = (seed.x as usize, seed.y as usize);
        if buffer.get(sx, sy) == fill {
            debug!("bucketfill: region already has the fill color");
            return Ok(());
        }

        let painted = buffer.flood_fill(sx, sy, fill);
        trace!("bucketfill: painted {} pixels from {:?}", painted, seed);

        let mut texture = match self.surface.create_texture(width, height, BlendMode::None) {
            Ok(texture) => texture,
            Err(err) => {
                warn!("bucketfill: creating texture failed: {}", err);
                return Err(TurtleError::CreateTexture(err));
            }
        };
        if let Err(err) = self.surface.update_texture(&mut texture, buffer.bytes(), pitch) {
            warn!("bucketfill: updating texture failed: {}", err);
            return Err(TurtleError::UpdateTexture(err));
        }
        let dst = RectI32::new(Point2DI32::new(0, 0), width as i32, height as i32);
        let center = Point2DI32::new(width as i32 / 2, height as i32 / 2);
        if let Err(err) = self.surface.copy_texture(&texture, dst, 0.0, center) {
            warn!("bucketfill: copying texture failed: {}", err);
            return Err(TurtleError::CopyTexture(err));
        }

        self.draw_sprite();
        self.surface.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::color::{ColorU, PenMode};
    use crate::state::WrapMode;
    use crate::surface::SurfaceError;

    const RED: ColorU = ColorU::from_rgb(255, 0, 0);
    const BLUE: ColorU = ColorU::from_rgb(0, 0, 255);
    const BLACK: ColorU = ColorU::from_rgb(0, 0, 0);

    fn outline_rect(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: ColorU) {
        canvas.set_draw_color(color);
        canvas.draw_line(Point2DI32::new(x0, y0), Point2DI32::new(x1, y0), 1);
        canvas.draw_line(Point2DI32::new(x1, y0), Point2DI32::new(x1, y1), 1);
        canvas.draw_line(Point2DI32::new(x1, y1), Point2DI32::new(x0, y1), 1);
        canvas.draw_line(Point2DI32::new(x0, y1), Point2DI32::new(x0, y0), 1);
    }

    #[test]
    fn fills_enclosed_rectangle_only() {
        let mut canvas = Canvas::new(40, 30);
        outline_rect(&mut canvas, 10, 5, 30, 20, BLUE);
        let mut t = Turtle::new(canvas);
        t.set_foreground_color(RED);
        t.bucket_fill().unwrap();

        // Turtle sits at (20, 15), inside the box; interior is 19 x 14.
        let surface = t.surface();
        assert_eq!(surface.count_pixels(RED), 19 * 14);
        for y in 6..20 {
            for x in 11..30 {
                assert_eq!(surface.pixel(x, y), Some(RED));
            }
        }
        assert_eq!(surface.count_pixels(BLUE), 2 * 21 + 2 * 14);
        assert_eq!(surface.count_pixels(BLACK), 40 * 30 - 21 * 16);
        assert_eq!(surface.frames_presented(), 1);
    }

    #[test]
    fn flood_walks_around_obstacles() {
        // A comb: the seed row is open but the fill has to go down the
        // teeth and come back up on the far side.
        let mut buffer = PixelBuffer::new(9, 5);
        let wall = [9, 9, 9, 255];
        for y in 0..4 {
            buffer.set(2, y, wall);
            buffer.set(6, y, wall);
        }
        let painted = buffer.flood_fill(0, 0, [1, 1, 1, 1]);
        assert_eq!(painted, 9 * 5 - 8);
        assert_eq!(buffer.get(4, 0), [1, 1, 1, 1]);
        assert_eq!(buffer.get(8, 0), [1, 1, 1, 1]);
        assert_eq!(buffer.get(2, 0), wall);
    }

    #[test]
    fn flood_is_four_connected() {
        // Diagonal neighbours do not leak.
        let mut buffer = PixelBuffer::new(3, 3);
        let wall = [5, 5, 5, 5];
        buffer.set(1, 0, wall);
        buffer.set(0, 1, wall);
        let painted = buffer.flood_fill(0, 0, [7, 7, 7, 7]);
        assert_eq!(painted, 1);
        assert_eq!(buffer.get(1, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn flood_out_of_range_or_same_color_is_empty() {
        let mut buffer = PixelBuffer::new(3, 3);
        assert_eq!(buffer.flood_fill(3, 0, [1, 1, 1, 1]), 0);
        assert_eq!(buffer.flood_fill(0, 0, [0, 0, 0, 0]), 0);
    }

    #[test]
    fn same_color_region_is_left_alone() {
        let mut t = Turtle::new(Canvas::new(20, 20));
        t.set_pen_mode(PenMode::Erase);
        t.bucket_fill().unwrap();
        assert_eq!(t.surface().count_pixels(BLACK), 400);
        assert_eq!(t.surface().frames_presented(), 0);
    }

    #[test]
    fn fills_whole_open_surface() {
        let mut t = Turtle::new(Canvas::new(64, 48));
        t.set_wrap_mode(WrapMode::Fence);
        t.set_foreground_color(BLUE);
        t.bucket_fill().unwrap();
        assert_eq!(t.surface().count_pixels(BLUE), 64 * 48);
    }

    #[derive(Clone, Copy, PartialEq)]
    enum Stage {
        Read,
        Create,
        Update,
    }

    /// A canvas whose pixel I/O fails at one stage.
    struct BrokenSurface {
        canvas: Canvas,
        fails: Stage,
    }

    impl BrokenSurface {
        fn new(fails: Stage) -> BrokenSurface {
            BrokenSurface {
                canvas: Canvas::new(10, 10),
                fails,
            }
        }

        fn check(&self, stage: Stage) -> Result<(), SurfaceError> {
            if self.fails == stage {
                return Err(SurfaceError("device lost".to_owned()));
            }
            Ok(())
        }
    }

    impl Surface for BrokenSurface {
        type Texture = ();

        fn size(&self) -> (u32, u32) {
            self.canvas.size()
        }

        fn set_draw_color(&mut self, color: ColorU) {
            self.canvas.set_draw_color(color)
        }

        fn draw_line(&mut self, from: Point2DI32, to: Point2DI32, width: u32) {
            self.canvas.draw_line(from, to, width)
        }

        fn clear(&mut self) {
            self.canvas.clear()
        }

        fn present(&mut self) {
            self.canvas.present()
        }

        fn read_pixels(&mut self, pixels: &mut [u8], pitch: usize) -> Result<(), SurfaceError> {
            self.check(Stage::Read)?;
            self.canvas.read_pixels(pixels, pitch)
        }

        fn create_texture(&mut self, _: u32, _: u32, _: BlendMode) -> Result<(), SurfaceError> {
            self.check(Stage::Create)
        }

        fn update_texture(&mut self, _: &mut (), _: &[u8], _: usize) -> Result<(), SurfaceError> {
            self.check(Stage::Update)
        }

        fn copy_texture(
            &mut self,
            _: &(),
            _: RectI32,
            _: f64,
            _: Point2DI32,
        ) -> Result<(), SurfaceError> {
            Ok(())
        }
    }

    fn assert_frame_untouched(t: &Turtle<BrokenSurface>) {
        assert_eq!(t.surface().canvas.count_pixels(BLACK), 100);
        assert_eq!(t.surface().canvas.frames_presented(), 0);
    }

    #[test]
    fn read_failure_aborts_fill() {
        let mut t = Turtle::new(BrokenSurface::new(Stage::Read));
        t.set_foreground_color(RED);
        let err = t.bucket_fill().unwrap_err();
        assert!(match err {
            TurtleError::ReadPixels(_) => true,
            _ => false,
        });
        assert!(err.is_pixel_io());
        assert_frame_untouched(&t);
    }

    #[test]
    fn texture_creation_failure_leaves_frame_untouched() {
        let mut t = Turtle::new(BrokenSurface::new(Stage::Create));
        t.set_foreground_color(RED);
        let err = t.bucket_fill().unwrap_err();
        assert!(match err {
            TurtleError::CreateTexture(_) => true,
            _ => false,
        });
        assert!(err.is_pixel_io());
        assert_frame_untouched(&t);
    }

    #[test]
    fn texture_update_failure_leaves_frame_untouched() {
        let mut t = Turtle::new(BrokenSurface::new(Stage::Update));
        t.set_foreground_color(RED);
        let err = t.bucket_fill().unwrap_err();
        assert!(match err {
            TurtleError::UpdateTexture(_) => true,
            _ => false,
        });
        assert!(err.is_pixel_io());
        assert_frame_untouched(&t);
    }
}

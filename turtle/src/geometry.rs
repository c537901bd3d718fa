// pathfinder/turtle/src/geometry.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Minimal point and rectangle types for turtle space and surface space.

/// A point in turtle space: origin at the surface center, y pointing up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2DF64 {
    pub x: f64,
    pub y: f64,
}

impl Point2DF64 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Point2DF64 {
        Point2DF64 { x, y }
    }
}

/// A pixel position in surface space: origin top-left, y pointing down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2DI32 {
    pub x: i32,
    pub y: i32,
}

impl Point2DI32 {
    #[inline]
    pub fn new(x: i32, y: i32) -> Point2DI32 {
        Point2DI32 { x, y }
    }
}

/// An origin + size rectangle in surface space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RectI32 {
    pub origin: Point2DI32,
    pub width: i32,
    pub height: i32,
}

impl RectI32 {
    #[inline]
    pub fn new(origin: Point2DI32, width: i32, height: i32) -> RectI32 {
        RectI32 { origin, width, height }
    }

    /// A `width` x `height` rectangle whose center is `center`.
    ///
    /// Odd sizes put the extra pixel on the right/bottom, the same way
    /// integer halving places a sprite.
    #[inline]
    pub fn centered_at(center: Point2DI32, width: i32, height: i32) -> RectI32 {
        RectI32::new(
            Point2DI32::new(center.x - width / 2, center.y - height / 2),
            width,
            height,
        )
    }

    #[inline]
    pub fn max_x(&self) -> i32 {
        self.origin.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> i32 {
        self.origin.y + self.height
    }

    #[inline]
    pub fn contains_point(&self, point: Point2DI32) -> bool {
        point.x >= self.origin.x
            && point.x < self.max_x()
            && point.y >= self.origin.y
            && point.y < self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_places_odd_pixel_right() {
        let rect = RectI32::centered_at(Point2DI32::new(10, 10), 5, 4);
        assert_eq!(rect.origin, Point2DI32::new(8, 8));
        assert_eq!(rect.max_x(), 13);
        assert_eq!(rect.max_y(), 12);
        assert!(rect.contains_point(Point2DI32::new(12, 11)));
        assert!(!rect.contains_point(Point2DI32::new(13, 11)));
    }
}

// pathfinder/turtle/src/color.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use serde_derive::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorU {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorU {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> ColorU {
        ColorU { r, g, b, a }
    }

    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> ColorU {
        ColorU::new(r, g, b, 255)
    }

    #[inline]
    pub const fn white() -> ColorU {
        ColorU::from_rgb(255, 255, 255)
    }

    #[inline]
    pub const fn black() -> ColorU {
        ColorU::from_rgb(0, 0, 0)
    }

    /// Channel-wise `255 - c`; alpha is kept.
    #[inline]
    pub fn inverted(self) -> ColorU {
        ColorU::new(255 - self.r, 255 - self.g, 255 - self.b, self.a)
    }

    /// The color as the four bytes of an RGBA8 pixel.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> ColorU {
        ColorU::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

/// Selects which configured color a stroke uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenMode {
    Paint,
    Erase,
    Reverse,
}

impl Default for PenMode {
    fn default() -> PenMode {
        PenMode::Paint
    }
}

/// The color a stroke or bucket fill paints with under `mode`.
pub fn effective_color(mode: PenMode, foreground: ColorU, background: ColorU) -> ColorU {
    match mode {
        PenMode::Paint => foreground,
        PenMode::Erase => background,
        PenMode::Reverse => foreground.inverted(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pen_modes_pick_colors() {
        let fg = ColorU::new(10, 20, 30, 40);
        let bg = ColorU::new(1, 2, 3, 4);
        assert_eq!(effective_color(PenMode::Paint, fg, bg), fg);
        assert_eq!(effective_color(PenMode::Erase, fg, bg), bg);
        assert_eq!(
            effective_color(PenMode::Reverse, fg, bg),
            ColorU::new(245, 235, 225, 40)
        );
    }

    #[test]
    fn bytes_are_rgba_order() {
        let c = ColorU::new(1, 2, 3, 4);
        assert_eq!(c.to_bytes(), [1, 2, 3, 4]);
        assert_eq!(ColorU::from_bytes([1, 2, 3, 4]), c);
    }
}

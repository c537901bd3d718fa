// pathfinder/turtle/src/config.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Session defaults. `Turtle::clear` resets the turtle back to these.

use crate::color::ColorU;
use crate::state::WrapMode;
use serde_derive::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variable naming the font used by `print_label`.
pub const FONT_PATH_ENV: &str = "TURTLE_FONT_PATH";

pub const DEFAULT_FONT_SIZE: u32 = 12;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurtleConfig {
    pub foreground: ColorU,
    pub background: ColorU,
    pub pen_size: u32,
    pub scale: f64,
    pub wrap_mode: WrapMode,
    pub font_path: Option<PathBuf>,
    pub font_size: u32,
}

impl Default for TurtleConfig {
    fn default() -> TurtleConfig {
        TurtleConfig {
            foreground: ColorU::white(),
            background: ColorU::black(),
            pen_size: 1,
            scale: 1.0,
            wrap_mode: WrapMode::Wrap,
            font_path: None,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl TurtleConfig {
    /// The defaults, with the font path taken from `TURTLE_FONT_PATH` when set.
    pub fn from_env() -> TurtleConfig {
        let mut config = TurtleConfig::default();
        if let Some(path) = env::var_os(FONT_PATH_ENV) {
            if !path.is_empty() {
                config.font_path = Some(PathBuf::from(path));
            }
        }
        config
    }
}

// pathfinder/turtle/src/error.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::surface::{AssetError, SurfaceError};
use std::path::PathBuf;

/// Failures reported by turtle commands. None of them leave the turtle or
/// the visible frame half-updated.
#[derive(Debug, thiserror::Error)]
pub enum TurtleError {
    #[error("no image loader configured")]
    NoImageLoader,

    #[error("no font service configured")]
    NoFontService,

    #[error("no label font path set")]
    NoFontPath,

    #[error("loading sprite {path:?} failed: {source}")]
    SpriteLoad {
        path: PathBuf,
        #[source]
        source: AssetError,
    },

    #[error("rendering label with font {path:?} failed: {source}")]
    LabelRender {
        path: PathBuf,
        #[source]
        source: AssetError,
    },

    #[error("reading pixels failed: {0}")]
    ReadPixels(#[source] SurfaceError),

    #[error("creating texture failed: {0}")]
    CreateTexture(#[source] SurfaceError),

    #[error("updating texture failed: {0}")]
    UpdateTexture(#[source] SurfaceError),

    #[error("copying texture failed: {0}")]
    CopyTexture(#[source] SurfaceError),

    #[error("invalid scale {0}")]
    InvalidScale(f64),
}

impl TurtleError {
    /// Whether the failure came from reading or writing surface pixels.
    pub fn is_pixel_io(&self) -> bool {
        match *self {
            TurtleError::ReadPixels(_)
            | TurtleError::CreateTexture(_)
            | TurtleError::UpdateTexture(_)
            | TurtleError::CopyTexture(_) => true,
            _ => false,
        }
    }
}

// pathfinder/turtle/src/command.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A command list an interpreter can hand to the turtle in one go.

use crate::color::{ColorU, PenMode};
use crate::error::TurtleError;
use crate::state::WrapMode;
use crate::surface::Surface;
use crate::Turtle;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Forward(f64),
    Back(f64),
    Left(f64),
    Right(f64),
    DrawArc { degrees: f64, radius: f64 },
    PenUp,
    PenDown,
    PenSize(u32),
    PenMode(PenMode),
    Foreground(ColorU),
    Background(ColorU),
    Show,
    Hide,
    SetPosition(f64, f64),
    SetX(f64),
    SetY(f64),
    SetAngle(f64),
    Home,
    Scale(f64),
    Bounds(i32, i32, i32, i32),
    Wrap(WrapMode),
    Clear,
    Filled(ColorU, Program),
    BucketFill,
    LoadSprite(PathBuf),
    FontPath(PathBuf),
    FontSize(u32),
    Label(String),
}

pub type Program = Vec<Command>;

bitflags! {
    pub struct RunResultFlags: u16 {
        const ERR_INVALID_SCALE = 0x0001;
        const ERR_SPRITE        = 0x0002;
        const ERR_LABEL         = 0x0004;
        const ERR_PIXEL_IO      = 0x0008;
    }
}

const FLAG_NAMES: [(RunResultFlags, &str); 4] = [
    (RunResultFlags::ERR_INVALID_SCALE, "invalid scale"),
    (RunResultFlags::ERR_SPRITE, "sprite load failed"),
    (RunResultFlags::ERR_LABEL, "label failed"),
    (RunResultFlags::ERR_PIXEL_IO, "pixel i/o failed"),
];

impl RunResultFlags {
    fn from_error(err: &TurtleError) -> RunResultFlags {
        match *err {
            TurtleError::InvalidScale(_) => RunResultFlags::ERR_INVALID_SCALE,
            TurtleError::NoImageLoader | TurtleError::SpriteLoad { .. } => {
                RunResultFlags::ERR_SPRITE
            }
            TurtleError::NoFontService
            | TurtleError::NoFontPath
            | TurtleError::LabelRender { .. } => RunResultFlags::ERR_LABEL,
            TurtleError::ReadPixels(_)
            | TurtleError::CreateTexture(_)
            | TurtleError::UpdateTexture(_)
            | TurtleError::CopyTexture(_) => RunResultFlags::ERR_PIXEL_IO,
        }
    }
}

/// Comma-separated failure names, empty when nothing failed.
impl Display for RunResultFlags {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        let mut names = FLAG_NAMES
            .iter()
            .filter(|&&(flag, _)| self.contains(flag))
            .map(|&(_, name)| name);
        if let Some(first) = names.next() {
            formatter.write_str(first)?;
        }
        for name in names {
            write!(formatter, ", {}", name)?;
        }
        Ok(())
    }
}

impl<S: Surface> Turtle<S> {
    /// Executes `program` in order. Failing commands are skipped; their
    /// failures are collected in the returned flags.
    pub fn run(&mut self, program: &[Command]) -> RunResultFlags {
        let mut flags = RunResultFlags::empty();
        for command in program {
            flags |= self.run_command(command);
        }
        flags
    }

    fn run_command(&mut self, command: &Command) -> RunResultFlags {
        match *command {
            Command::Forward(dist) => self.forward(dist),
            Command::Back(dist) => self.back(dist),
            Command::Left(angle) => self.left(angle),
            Command::Right(angle) => self.right(angle),
            Command::DrawArc { degrees, radius } => self.draw_arc(degrees, radius),
            Command::PenUp => self.pen_up(),
            Command::PenDown => self.pen_down(),
            Command::PenSize(size) => self.set_pen_size(size),
            Command::PenMode(mode) => self.set_pen_mode(mode),
            Command::Foreground(color) => self.set_foreground_color(color),
            Command::Background(color) => self.set_background_color(color),
            Command::Show => self.show(),
            Command::Hide => self.hide(),
            Command::SetPosition(x, y) => self.set_position(x, y),
            Command::SetX(x) => self.set_x(x),
            Command::SetY(y) => self.set_y(y),
            Command::SetAngle(angle) => self.set_angle(angle),
            Command::Home => self.home(),
            Command::Scale(scale) => return result_flags(self.set_scale(scale)),
            Command::Bounds(min_x, min_y, max_x, max_y) => {
                self.set_bounds(min_x, min_y, max_x, max_y)
            }
            Command::Wrap(mode) => self.set_wrap_mode(mode),
            Command::Clear => self.clear(),
            Command::Filled(color, ref body) => {
                let mut flags = RunResultFlags::empty();
                self.filled(color, |turtle| flags = turtle.run(body));
                return flags;
            }
            Command::BucketFill => return result_flags(self.bucket_fill()),
            Command::LoadSprite(ref path) => return result_flags(self.load_sprite(path)),
            Command::FontPath(ref path) => self.set_font_path(path.clone()),
            Command::FontSize(size) => self.set_font_size(size),
            Command::Label(ref text) => return result_flags(self.print_label(text)),
        }
        RunResultFlags::empty()
    }
}

fn result_flags(result: Result<(), TurtleError>) -> RunResultFlags {
    match result {
        Ok(()) => RunResultFlags::empty(),
        Err(ref err) => RunResultFlags::from_error(err),
    }
}

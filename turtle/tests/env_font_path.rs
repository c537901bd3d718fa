//! Font path defaults from the environment. Kept in its own test binary so
//! the variable never leaks into tests that expect no font path.

use pixel_turtle::config::FONT_PATH_ENV;
use pixel_turtle::{Canvas, Turtle, TurtleConfig};
use std::env;
use std::path::Path;

#[test]
fn font_path_comes_from_environment() {
    env::remove_var(FONT_PATH_ENV);
    assert_eq!(TurtleConfig::from_env().font_path, None);
    assert_eq!(Turtle::new(Canvas::new(10, 10)).font_path(), None);

    env::set_var(FONT_PATH_ENV, "");
    assert_eq!(TurtleConfig::from_env().font_path, None);

    env::set_var(FONT_PATH_ENV, "/fonts/env.ttf");
    let mut t = Turtle::new(Canvas::new(10, 10));
    assert_eq!(t.font_path(), Some(Path::new("/fonts/env.ttf")));

    // An explicit config and an explicit setter both win over the variable.
    let t2 = Turtle::with_config(Canvas::new(10, 10), TurtleConfig::default());
    assert_eq!(t2.font_path(), None);
    t.set_font_path("/fonts/other.ttf");
    assert_eq!(t.font_path(), Some(Path::new("/fonts/other.ttf")));

    env::remove_var(FONT_PATH_ENV);
}

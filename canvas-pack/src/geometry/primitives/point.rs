use crate::fsize;
use serde::{Deserialize, Serialize};

/// Top-left corner of something on the canvas, in pixel units.
/// The y-axis points down, as on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: fsize,
    pub y: fsize,
}

impl Point {
    pub fn new(x: fsize, y: fsize) -> Self {
        Point { x, y }
    }
}

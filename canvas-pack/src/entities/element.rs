use crate::fsize;
use crate::geometry::primitives::{Point, Rect};
use crate::packer::PlacementResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: fsize,
    pub height: fsize,
}

/// A rectangular design element (garment template, text box, ...) to be arranged on a canvas.
///
/// Only `position`, `rotation` and `dimensions` are ever rewritten by the engine.
/// Any other field of the external representation is kept in `extra` and carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub position: Point,
    /// Clockwise rotation in degrees, one of 0, 90, 180 or 270
    #[serde(default)]
    pub rotation: u16,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Element {
    pub fn new(id: impl Into<String>, width: fsize, height: fsize) -> Self {
        Element {
            id: id.into(),
            dimensions: Dimensions { width, height },
            position: Point::default(),
            rotation: 0,
            extra: Map::new(),
        }
    }

    pub fn width(&self) -> fsize {
        self.dimensions.width
    }

    pub fn height(&self) -> fsize {
        self.dimensions.height
    }

    /// Raw area, without any gap
    pub fn area(&self) -> fsize {
        self.dimensions.width * self.dimensions.height
    }

    /// Axis-aligned bounding box on the canvas
    pub fn bbox(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.dimensions.width,
            self.dimensions.height,
        )
    }

    /// Returns a copy of `self` moved (and possibly turned) according to `placement`.
    /// A rotated placement swaps the dimensions and adds a quarter turn.
    pub fn placed(&self, placement: &PlacementResult) -> Element {
        let mut placed = self.clone();
        placed.position = placement.position;
        if placement.rotated {
            placed.dimensions = Dimensions {
                width: self.dimensions.height,
                height: self.dimensions.width,
            };
            placed.rotation = (self.rotation % 360 + 90) % 360;
        }
        placed
    }
}

use crate::fsize;
use crate::geometry::geo_traits::{CollidesWith, Contains};
use crate::geometry::primitives::Point;
use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

///Axis-aligned rectangle, anchored at its top-left corner
#[derive(Clone, Debug, PartialEq, Copy, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: fsize,
    pub y: fsize,
    pub width: fsize,
    pub height: fsize,
}

impl Rect {
    /// Creates a new rectangle without any validation.
    /// Zero-sized rectangles are allowed; negative ones are a caller bug.
    pub fn new(x: fsize, y: fsize, width: fsize, height: fsize) -> Self {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "negative rectangle: {width}x{height}"
        );
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn try_new(x: fsize, y: fsize, width: fsize, height: fsize) -> Result<Self> {
        ensure!(
            [x, y, width, height].iter().all(|v| v.is_finite()),
            "invalid rectangle, non-finite value in ({x}, {y}, {width}, {height})"
        );
        ensure!(
            width >= 0.0 && height >= 0.0,
            "invalid rectangle, width: {width}, height: {height}"
        );
        Ok(Rect {
            x,
            y,
            width,
            height,
        })
    }

    pub fn x_max(&self) -> fsize {
        self.x + self.width
    }

    pub fn y_max(&self) -> fsize {
        self.y + self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn area(&self) -> fsize {
        self.width * self.height
    }

    /// True if a `width` x `height` rectangle would fit inside `self`
    pub fn fits(&self, width: fsize, height: fsize) -> bool {
        width <= self.width && height <= self.height
    }

    /// True if `self` and `other` share an area larger than zero.
    /// Unlike [`CollidesWith`], touching boundaries do not count.
    #[inline(always)]
    pub fn overlaps(&self, other: &Rect) -> bool {
        fsize::max(self.x, other.x) < fsize::min(self.x_max(), other.x_max())
            && fsize::max(self.y, other.y) < fsize::min(self.y_max(), other.y_max())
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x = fsize::max(a.x, b.x);
        let y = fsize::max(a.y, b.y);
        let x_max = fsize::min(a.x_max(), b.x_max());
        let y_max = fsize::min(a.y_max(), b.y_max());
        if x < x_max && y < y_max {
            Some(Rect::new(x, y, x_max - x, y_max - y))
        } else {
            None
        }
    }

    /// Returns the maximal parts of `self` which do not overlap with `cut`,
    /// in left, right, above, below order. Parts may overlap each other.
    /// Returns `self` unchanged if there is no overlap.
    pub fn maximal_remainders(&self, cut: &Rect) -> Vec<Rect> {
        if !self.overlaps(cut) {
            return vec![*self];
        }
        let mut parts = Vec::with_capacity(4);
        if cut.x > self.x {
            parts.push(Rect::new(self.x, self.y, cut.x - self.x, self.height));
        }
        if cut.x_max() < self.x_max() {
            parts.push(Rect::new(
                cut.x_max(),
                self.y,
                self.x_max() - cut.x_max(),
                self.height,
            ));
        }
        if cut.y > self.y {
            parts.push(Rect::new(self.x, self.y, self.width, cut.y - self.y));
        }
        if cut.y_max() < self.y_max() {
            parts.push(Rect::new(
                self.x,
                cut.y_max(),
                self.width,
                self.y_max() - cut.y_max(),
            ));
        }
        parts
    }
}

impl CollidesWith<Rect> for Rect {
    /// Separating-axis test, edges that exactly coincide count as a collision.
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        !(self.x_max() < other.x
            || other.x_max() < self.x
            || self.y_max() < other.y
            || other.y_max() < self.y)
    }
}

impl Contains<Rect> for Rect {
    /// Inclusive bounds: a rectangle contains itself.
    #[inline(always)]
    fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.x_max() >= other.x_max()
            && self.y_max() >= other.y_max()
    }
}

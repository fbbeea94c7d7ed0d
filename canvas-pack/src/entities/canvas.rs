use crate::fsize;
use crate::geometry::primitives::Rect;
use crate::util::LayoutOptions;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// A single page of the target canvas, in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: fsize,
    pub height: fsize,
}

impl Canvas {
    pub fn new(width: fsize, height: fsize) -> Self {
        Canvas { width, height }
    }

    /// Creates a canvas which leaves a usable area after subtracting the margins in `options`.
    pub fn try_new(width: fsize, height: fsize, options: &LayoutOptions) -> Result<Self> {
        ensure!(
            width.is_finite() && height.is_finite(),
            "canvas dimensions must be finite, got {width}x{height}"
        );
        let canvas = Canvas { width, height };
        ensure!(
            canvas.exceeds_margins(options),
            "canvas of {width}x{height} leaves no room inside margins ({}, {})",
            options.canvas_margin,
            options.canvas_margin_v
        );
        Ok(canvas)
    }

    /// True if a non-empty usable area remains after subtracting twice the margins.
    pub fn exceeds_margins(&self, options: &LayoutOptions) -> bool {
        self.width > 2.0 * options.canvas_margin && self.height > 2.0 * options.canvas_margin_v
    }

    pub fn area(&self) -> fsize {
        self.width * self.height
    }

    /// The margin-inset region in which elements may be placed.
    pub fn usable_rect(&self, options: &LayoutOptions) -> Rect {
        Rect::new(
            options.canvas_margin,
            options.canvas_margin_v,
            self.width - 2.0 * options.canvas_margin,
            self.height - 2.0 * options.canvas_margin_v,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_rect_is_margin_inset() {
        let opts = LayoutOptions {
            canvas_margin: 10.0,
            canvas_margin_v: 20.0,
            ..LayoutOptions::default()
        };
        let canvas = Canvas::new(1000.0, 500.0);
        assert_eq!(
            canvas.usable_rect(&opts),
            Rect::new(10.0, 20.0, 980.0, 460.0)
        );
    }

    #[test]
    fn try_new_rejects_canvas_smaller_than_margins() {
        let opts = LayoutOptions::default();
        assert!(Canvas::try_new(20.0, 100.0, &opts).is_err());
        assert!(Canvas::try_new(21.0, 100.0, &opts).is_ok());
        assert!(Canvas::try_new(fsize::INFINITY, 100.0, &opts).is_err());
    }

    #[test]
    fn margins_must_leave_a_usable_area() {
        let opts = LayoutOptions {
            canvas_margin: 10.0,
            canvas_margin_v: 5.0,
            ..LayoutOptions::default()
        };
        assert!(!Canvas::new(20.0, 100.0).exceeds_margins(&opts));
        assert!(!Canvas::new(100.0, 10.0).exceeds_margins(&opts));
        assert!(Canvas::new(20.5, 10.5).exceeds_margins(&opts));
    }
}

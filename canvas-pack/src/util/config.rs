use crate::fsize;
use crate::geometry::primitives::Rect;
use serde::{Deserialize, Serialize};

/// Options of a single packing run. Immutable for the duration of the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    /// Spacing added once to both dimensions of every element's footprint (pixels)
    pub element_gap: fsize,
    /// Horizontal margin between the canvas edges and the usable area (pixels)
    pub canvas_margin: fsize,
    /// Vertical margin between the canvas edges and the usable area (pixels)
    #[serde(rename = "canvasMarginV")]
    pub canvas_margin_v: fsize,
    /// Whether elements may be rotated by 90° to fit
    pub allow_rotation: bool,
    /// Metric by which elements are ordered before packing
    pub sort_strategy: SortStrategy,
    /// Scoring rule used to choose between candidate free rectangles
    pub heuristic: Heuristic,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            element_gap: 5.0,
            canvas_margin: 10.0,
            canvas_margin_v: 0.0,
            allow_rotation: false,
            sort_strategy: SortStrategy::Area,
            heuristic: Heuristic::BSSF,
        }
    }
}

/// Scoring rule of the free-space packer, lower scores are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[allow(clippy::upper_case_acronyms)]
pub enum Heuristic {
    /// Best Short Side Fit: minimizes the smaller leftover side
    #[default]
    BSSF,
    /// Best Long Side Fit: minimizes the larger leftover side
    BLSF,
    /// Best Area Fit: minimizes the leftover area
    BAF,
    /// Bottom-Left: prefers the free rectangle with the smallest y, then the smallest x
    BL,
}

impl Heuristic {
    /// Score of placing a `w` x `h` footprint in the top-left corner of `free`.
    /// Assumes the footprint fits.
    #[inline(always)]
    pub fn score(&self, free: &Rect, w: fsize, h: fsize) -> fsize {
        match self {
            Heuristic::BSSF => fsize::min(free.width - w, free.height - h),
            Heuristic::BLSF => fsize::max(free.width - w, free.height - h),
            Heuristic::BAF => free.area() - w * h,
            Heuristic::BL => 1e4 * free.y + free.x,
        }
    }
}

/// Metric by which elements are sorted (descending) before being offered to the packer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    #[default]
    Area,
    Height,
    Width,
    Perimeter,
}

impl SortStrategy {
    pub fn metric(&self, width: fsize, height: fsize) -> fsize {
        match self {
            SortStrategy::Area => width * height,
            SortStrategy::Height => height,
            SortStrategy::Width => width,
            SortStrategy::Perimeter => 2.0 * (width + height),
        }
    }
}

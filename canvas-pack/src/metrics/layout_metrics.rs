use crate::entities::{Canvas, Element};
use crate::fsize;
use crate::geometry::geo_traits::CollidesWith;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Utilization and overlap diagnostics of a single-page arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetrics {
    /// Raw element area over the canvas area, in percent
    pub efficiency: fsize,
    pub wasted_space: fsize,
    /// Whether any two elements touch or overlap
    pub overlap: bool,
}

/// Computes the metrics of an arbitrary arrangement of `elements` on `canvas`,
/// regardless of how it came to be (packed, hand-edited, imported, ...).
///
/// Gaps and margins play no role here: only the element geometry and the nominal canvas size count.
pub fn calculate_layout_metrics(elements: &[Element], canvas: &Canvas) -> LayoutMetrics {
    let used_area = elements.iter().map(|e| e.area()).sum::<fsize>();
    let canvas_area = canvas.area();
    let efficiency = match canvas_area > 0.0 {
        true => used_area / canvas_area * 100.0,
        false => 0.0,
    };

    LayoutMetrics {
        efficiency,
        wasted_space: canvas_area - used_area,
        overlap: first_overlap(elements).is_some(),
    }
}

/// Indices of the first pair of elements whose bounding boxes collide.
/// Coinciding edges count as a collision.
pub fn first_overlap(elements: &[Element]) -> Option<(usize, usize)> {
    (0..elements.len())
        .tuple_combinations()
        .find(|&(i, j)| elements[i].bbox().collides_with(&elements[j].bbox()))
}

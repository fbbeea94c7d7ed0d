use std::time::Instant;

use crate::entities::{Canvas, LayoutResult};
use crate::io::ext_repr::ExtSolution;

/// Exports a [`LayoutResult`] to its external representation, adding per-page metrics.
pub fn export_solution(result: &LayoutResult, canvas: &Canvas, epoch: Instant) -> ExtSolution {
    ExtSolution {
        pages: result.pages.clone(),
        efficiency: result.efficiency,
        wasted_space: result.wasted_space,
        pages_used: result.pages_used,
        total_elements: result.total_elements,
        dropped_elements: result.dropped_elements.clone(),
        page_metrics: result.page_metrics(canvas),
        canvas_px: (canvas.width, canvas.height),
        run_time_sec: epoch.elapsed().as_secs(),
    }
}

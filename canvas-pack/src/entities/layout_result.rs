use crate::entities::{Canvas, Element};
use crate::fsize;
use crate::metrics::{LayoutMetrics, calculate_layout_metrics};
use serde::{Deserialize, Serialize};

/// Outcome of a multi-page packing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    /// Placed copies of the elements, per page
    pub pages: Vec<Vec<Element>>,
    /// Used area over the total area of all pages, in percent
    pub efficiency: fsize,
    /// Total area of all pages minus the used area
    pub wasted_space: fsize,
    pub pages_used: usize,
    /// Number of elements offered to the run, dropped ones included
    pub total_elements: usize,
    /// Ids of the elements which did not fit on an empty page
    #[serde(default)]
    pub dropped_elements: Vec<String>,
}

impl LayoutResult {
    pub fn n_placed(&self) -> usize {
        self.pages.iter().map(|p| p.len()).sum()
    }

    /// Sum of the raw areas of all placed elements
    pub fn used_area(&self) -> fsize {
        self.pages.iter().flatten().map(|e| e.area()).sum()
    }

    /// Diagnostics of every page on its own
    pub fn page_metrics(&self, canvas: &Canvas) -> Vec<LayoutMetrics> {
        self.pages
            .iter()
            .map(|page| calculate_layout_metrics(page, canvas))
            .collect()
    }
}

use crate::entities::Element;
use crate::fsize;
use crate::metrics::LayoutMetrics;
use crate::util::LayoutOptions;
use serde::{Deserialize, Serialize};

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub canvas: ExtCanvas,
    pub elements: Vec<Element>,
    /// Overrides the options of the caller when present
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub layout_options: Option<LayoutOptions>,
}

/// External representation of a [`Canvas`](crate::entities::Canvas), in pixels or centimeters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtCanvas {
    pub width: fsize,
    pub height: fsize,
    #[serde(default)]
    pub unit: CanvasUnit,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CanvasUnit {
    #[default]
    Px,
    Cm,
}

/// External representation of a [`LayoutResult`](crate::entities::LayoutResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtSolution {
    pub pages: Vec<Vec<Element>>,
    pub efficiency: fsize,
    pub wasted_space: fsize,
    pub pages_used: usize,
    /// Number of elements in the instance, including the dropped ones
    pub total_elements: usize,
    pub dropped_elements: Vec<String>,
    /// Diagnostics of every page on its own
    pub page_metrics: Vec<LayoutMetrics>,
    /// Canvas size in pixels the solution was computed for
    pub canvas_px: (fsize, fsize),
    /// Seconds since the start of the process
    pub run_time_sec: u64,
}

use canvas_pack::fsize;
use canvas_pack::util::LayoutOptions;
use serde::{Deserialize, Serialize};

/// 96 dpi
pub const DEFAULT_PIXELS_PER_CM: fsize = 96.0 / 2.54;

/// Configuration of the cpack driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct CpackConfig {
    /// Options of the packing run, unless the instance brings its own
    pub layout_options: LayoutOptions,
    /// Conversion factor for canvases specified in centimeters
    pub pixels_per_cm: fsize,
}

impl Default for CpackConfig {
    fn default() -> Self {
        Self {
            layout_options: LayoutOptions::default(),
            pixels_per_cm: DEFAULT_PIXELS_PER_CM,
        }
    }
}

mod layout_metrics;

#[doc(inline)]
pub use layout_metrics::LayoutMetrics;
#[doc(inline)]
pub use layout_metrics::calculate_layout_metrics;
#[doc(inline)]
pub use layout_metrics::first_overlap;

mod multi_page;
mod ordering;

#[doc(inline)]
pub use multi_page::MultiPageOptimizer;
#[doc(inline)]
pub use multi_page::optimize_layout;
#[doc(inline)]
pub use ordering::placement_order;

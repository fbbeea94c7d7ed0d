mod canvas;
mod element;
mod instance;
mod layout_result;

#[doc(inline)]
pub use canvas::Canvas;
#[doc(inline)]
pub use element::Dimensions;
#[doc(inline)]
pub use element::Element;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use layout_result::LayoutResult;

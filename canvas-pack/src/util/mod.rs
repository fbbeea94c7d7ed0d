/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;
mod fpa;

#[doc(inline)]
pub use config::Heuristic;
#[doc(inline)]
pub use config::LayoutOptions;
#[doc(inline)]
pub use config::SortStrategy;
#[doc(inline)]
pub use fpa::FPA;

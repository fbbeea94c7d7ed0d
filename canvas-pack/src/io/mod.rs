/// External (serializable) representations of instances and solutions
pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::export_solution;
#[doc(inline)]
pub use import::Importer;
#[doc(inline)]
pub use import::cm_to_px;

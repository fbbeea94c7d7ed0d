#![doc = document_features::document_features!()]
//! Rectangle packing of design elements (garment templates, text boxes, ...) onto one or
//! more fixed-size canvas pages.
//!
//! The engine is a MaxRects variant: every page keeps a list of maximal free rectangles,
//! elements are offered in a size-biased order and placed by one of several scoring
//! heuristics. Elements that do not fit on the current page overflow to a fresh one.

/// Geometric primitives
pub mod geometry;

/// Elements, canvases and the result of a packing run
pub mod entities;

/// The per-page free-space bookkeeping
pub mod packer;

/// Ordering of elements and the multi-page orchestration
pub mod opt;

/// Quality diagnostics of an arrangement
pub mod metrics;

/// Importing instances into and exporting results out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

#[allow(non_camel_case_types)]
/// Floating point type used for all canvas quantities (pixel units)
pub type fsize = f64;

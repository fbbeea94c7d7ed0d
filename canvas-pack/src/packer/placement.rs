use crate::fsize;
use crate::geometry::primitives::Point;

/// Outcome of a successful placement query on a [`FreeSpacePacker`](crate::packer::FreeSpacePacker).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementResult {
    /// Top-left corner of the placed element
    pub position: Point,
    /// Whether the element was turned by 90° to fit
    pub rotated: bool,
    /// Score of the chosen candidate under the active heuristic (lower is better)
    pub score: fsize,
    /// Index of the free rectangle which hosted the element, at the time of the query
    pub rect_index: usize,
}

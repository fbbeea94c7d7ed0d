//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

use crate::entities::{Canvas, Element, LayoutResult};
use crate::fsize;
use crate::geometry::geo_traits::Contains;
use crate::geometry::primitives::Rect;
use crate::util::{FPA, LayoutOptions};
use itertools::Itertools;
use log::error;

/// Whether the consistency checks below are run after every placement
pub const ENABLED: bool = cfg!(any(debug_assertions, feature = "strict-assertions"));

/// No free rectangle is fully contained in another one
pub fn free_rects_are_maximal(free_rects: &[Rect]) -> bool {
    for (i, j) in (0..free_rects.len()).tuple_combinations() {
        let (a, b) = (&free_rects[i], &free_rects[j]);
        if a.contains(b) || b.contains(a) {
            error!("free rect {i} ({a:?}) and {j} ({b:?}) are nested");
            return false;
        }
    }
    true
}

/// Containment up to floating point tolerance
fn almost_contains(outer: &Rect, inner: &Rect) -> bool {
    FPA(outer.x) <= FPA(inner.x)
        && FPA(outer.y) <= FPA(inner.y)
        && FPA(outer.x_max()) >= FPA(inner.x_max())
        && FPA(outer.y_max()) >= FPA(inner.y_max())
}

/// Overlap with an area that is more than a rounding error in both dimensions
fn almost_overlaps(a: &Rect, b: &Rect) -> bool {
    Rect::intersection(*a, *b)
        .is_some_and(|i| FPA(i.width) > FPA(0.0) && FPA(i.height) > FPA(0.0))
}

pub fn free_rects_within(free_rects: &[Rect], usable: &Rect) -> bool {
    free_rects.iter().all(|r| {
        let within = almost_contains(usable, r);
        if !within {
            error!("free rect {r:?} exceeds the usable area {usable:?}");
        }
        within
    })
}

/// None of the free rectangles overlaps the occupied `footprint`
pub fn free_rects_avoid(free_rects: &[Rect], footprint: &Rect) -> bool {
    free_rects.iter().all(|r| !almost_overlaps(r, footprint))
}

/// The gap-padded footprints of the elements on a page are pairwise disjoint
pub fn page_has_no_overlap(page: &[Element], options: &LayoutOptions) -> bool {
    let padded = |e: &Element| {
        let bbox = e.bbox();
        Rect::new(
            bbox.x,
            bbox.y,
            bbox.width + options.element_gap,
            bbox.height + options.element_gap,
        )
    };
    page.iter().tuple_combinations().all(|(a, b)| {
        let overlap = almost_overlaps(&padded(a), &padded(b));
        if overlap {
            error!("elements {} and {} overlap", a.id, b.id);
        }
        !overlap
    })
}

/// Every element lies inside the margins of the canvas
pub fn page_respects_margins(page: &[Element], canvas: &Canvas, options: &LayoutOptions) -> bool {
    let usable = canvas.usable_rect(options);
    page.iter().all(|e| almost_contains(&usable, &e.bbox()))
}

/// The aggregate numbers of a result match its pages
pub fn result_is_consistent(result: &LayoutResult, canvas: &Canvas) -> bool {
    let used_area = result.used_area();
    let total_area = canvas.area() * result.pages_used as fsize;

    result.pages_used == result.pages.len()
        && result.n_placed() + result.dropped_elements.len() == result.total_elements
        && FPA(used_area) <= FPA(total_area)
        && FPA(result.wasted_space) == FPA(total_area - used_area)
}

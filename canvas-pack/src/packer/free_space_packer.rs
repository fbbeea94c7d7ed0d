use crate::fsize;
use crate::geometry::geo_traits::Contains;
use crate::geometry::primitives::{Point, Rect};
use crate::packer::PlacementResult;
use crate::util::LayoutOptions;
use crate::util::assertions;

/// Keeps track of the maximal free rectangles remaining on a single canvas page.
///
/// Free rectangles may overlap each other, but none of them is ever fully contained in another,
/// and none of them overlaps an area that has already been handed out.
/// The order of [`FreeSpacePacker::free_rects`] is part of the determinism contract:
/// ties between candidates are broken in favor of the first free rectangle in the list.
#[derive(Debug, Clone)]
pub struct FreeSpacePacker {
    options: LayoutOptions,
    /// The margin-inset area of the canvas
    usable: Rect,
    free_rects: Vec<Rect>,
}

impl FreeSpacePacker {
    /// Creates a packer for an empty page.
    /// The canvas must be larger than twice the margins in both directions.
    pub fn new(canvas_width: fsize, canvas_height: fsize, options: LayoutOptions) -> Self {
        let usable = Rect::new(
            options.canvas_margin,
            options.canvas_margin_v,
            canvas_width - 2.0 * options.canvas_margin,
            canvas_height - 2.0 * options.canvas_margin_v,
        );
        FreeSpacePacker {
            options,
            usable,
            free_rects: vec![usable],
        }
    }

    /// Restores the packer to the empty page state.
    pub fn reset(&mut self) {
        self.free_rects.clear();
        self.free_rects.push(self.usable);
    }

    /// Searches the best free rectangle for a `width` x `height` element, without modifying the packer.
    /// The element's footprint is grown by the configured gap in both dimensions.
    pub fn find_placement(&self, width: fsize, height: fsize) -> Option<PlacementResult> {
        let gap = self.options.element_gap;
        let (padded_w, padded_h) = (width + gap, height + gap);
        let heuristic = self.options.heuristic;

        let mut best: Option<PlacementResult> = None;
        for (i, free) in self.free_rects.iter().enumerate() {
            let orientations = [
                (false, padded_w, padded_h),
                (true, padded_h, padded_w),
            ];
            let n_orientations = if self.options.allow_rotation { 2 } else { 1 };

            for &(rotated, w, h) in &orientations[..n_orientations] {
                if !free.fits(w, h) {
                    continue;
                }
                let score = heuristic.score(free, w, h);
                //strictly better only: earlier candidates win ties
                if best.is_none_or(|b| score < b.score) {
                    best = Some(PlacementResult {
                        position: free.top_left(),
                        rotated,
                        score,
                        rect_index: i,
                    });
                }
            }
        }
        best
    }

    /// Places a `width` x `height` element on the page, if there is room for it.
    /// `None` means this page is full for an element of this size, a fresh page may still accept it.
    pub fn place(&mut self, width: fsize, height: fsize) -> Option<PlacementResult> {
        let placement = self.find_placement(width, height)?;

        let gap = self.options.element_gap;
        let (w, h) = match placement.rotated {
            false => (width + gap, height + gap),
            true => (height + gap, width + gap),
        };
        let Point { x, y } = placement.position;
        let footprint = Rect::new(x, y, w, h);

        self.split(placement.rect_index, footprint);
        self.prune();

        if assertions::ENABLED {
            assert!(assertions::free_rects_are_maximal(&self.free_rects));
            assert!(assertions::free_rects_within(&self.free_rects, &self.usable));
            assert!(assertions::free_rects_avoid(&self.free_rects, &footprint));
        }

        Some(placement)
    }

    /// Replaces the free rectangle at `index` by the region right of the `footprint` (full height)
    /// and the region below it (full width), in that order and at the same list position.
    /// Every other free rectangle overlapping the `footprint` is replaced in place by its maximal remainders.
    fn split(&mut self, index: usize, footprint: Rect) {
        let mut updated = Vec::with_capacity(self.free_rects.len() + 4);
        for (i, free) in self.free_rects.drain(..).enumerate() {
            if i == index {
                //pieces end exactly where `free` ends, widths are derived from that edge
                let (right_x, below_y) = (footprint.x_max(), footprint.y_max());
                if right_x < free.x_max() {
                    updated.push(Rect::new(
                        right_x,
                        free.y,
                        free.x_max() - right_x,
                        free.height,
                    ));
                }
                if below_y < free.y_max() {
                    updated.push(Rect::new(
                        free.x,
                        below_y,
                        free.width,
                        free.y_max() - below_y,
                    ));
                }
            } else if free.overlaps(&footprint) {
                updated.extend(free.maximal_remainders(&footprint));
            } else {
                updated.push(free);
            }
        }
        self.free_rects = updated;
    }

    /// Removes every free rectangle that is fully contained in another one.
    /// Of two identical rectangles, the first one survives.
    fn prune(&mut self) {
        let mut i = 0;
        while i < self.free_rects.len() {
            let mut i_removed = false;
            let mut j = i + 1;
            while j < self.free_rects.len() {
                if self.free_rects[i].contains(&self.free_rects[j]) {
                    self.free_rects.remove(j);
                } else if self.free_rects[j].contains(&self.free_rects[i]) {
                    self.free_rects.remove(i);
                    i_removed = true;
                    break;
                } else {
                    j += 1;
                }
            }
            if !i_removed {
                i += 1;
            }
        }
    }

    pub fn free_rects(&self) -> &[Rect] {
        &self.free_rects
    }

    /// Sum of the areas of all free rectangles.
    /// Overlapping regions are counted multiple times, so this is only an indication.
    pub fn total_free_area(&self) -> fsize {
        self.free_rects.iter().map(|r| r.area()).sum()
    }

    pub fn usable_rect(&self) -> Rect {
        self.usable
    }
}

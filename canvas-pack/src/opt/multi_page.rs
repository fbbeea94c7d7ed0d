use std::time::Instant;

use crate::entities::{Canvas, Element, LayoutResult};
use crate::fsize;
use crate::opt::placement_order;
use crate::packer::{FreeSpacePacker, PlacementResult};
use crate::util::{LayoutOptions, assertions};
use log::{debug, info, warn};

/// Distributes elements over as many canvas pages as needed.
///
/// Elements are offered once, in [`placement_order`]. When an element does not fit on the
/// current page, a new page is opened and the element is retried once. Elements which do not
/// even fit on an empty page are dropped. Completed pages are never revisited.
pub struct MultiPageOptimizer {
    pub canvas: Canvas,
    pub options: LayoutOptions,
}

impl MultiPageOptimizer {
    /// The canvas must be larger than twice the margins in `options`, see [`Canvas::try_new`].
    pub fn new(canvas: Canvas, options: LayoutOptions) -> Self {
        debug_assert!(
            canvas.exceeds_margins(&options),
            "canvas {canvas:?} leaves no room inside the margins"
        );
        Self { canvas, options }
    }

    pub fn solve(&self, elements: &[Element]) -> LayoutResult {
        let start = Instant::now();

        let mut packer = FreeSpacePacker::new(self.canvas.width, self.canvas.height, self.options);
        let mut pages: Vec<Vec<Element>> = vec![vec![]];
        let mut dropped_elements = vec![];
        let mut used_area: fsize = 0.0;

        for i in placement_order(elements, self.options.sort_strategy) {
            let element = &elements[i];
            match self.place_with_overflow(&mut packer, &mut pages, element) {
                Some(placement) => {
                    let placed = element.placed(&placement);
                    debug!(
                        "[PACK] placed element {} at ({}, {}){} on page {}",
                        element.id,
                        placed.position.x,
                        placed.position.y,
                        if placement.rotated { ", rotated" } else { "" },
                        pages.len() - 1
                    );
                    used_area += element.area();
                    pages
                        .last_mut()
                        .expect("there is always an open page")
                        .push(placed);
                }
                None => {
                    warn!(
                        "[PACK] element {} ({}x{}) does not fit on an empty canvas of {}x{}, it is left out",
                        element.id,
                        element.width(),
                        element.height(),
                        self.canvas.width,
                        self.canvas.height
                    );
                    dropped_elements.push(element.id.clone());
                }
            }
        }

        let pages_used = pages.len();
        let total_area = self.canvas.area() * pages_used as fsize;
        let efficiency = match total_area > 0.0 {
            true => used_area / total_area * 100.0,
            false => 0.0,
        };

        let result = LayoutResult {
            pages,
            efficiency,
            wasted_space: total_area - used_area,
            pages_used,
            total_elements: elements.len(),
            dropped_elements,
        };

        if assertions::ENABLED {
            for page in &result.pages {
                assert!(assertions::page_has_no_overlap(page, &self.options));
                assert!(assertions::page_respects_margins(page, &self.canvas, &self.options));
            }
            assert!(assertions::result_is_consistent(&result, &self.canvas));
        }

        info!(
            "[PACK] finished in {:.3}ms: {}/{} elements on {} page(s), efficiency {:.2}%",
            start.elapsed().as_secs_f64() * 1000.0,
            result.n_placed(),
            result.total_elements,
            result.pages_used,
            result.efficiency
        );

        result
    }

    /// Tries the current page, then (once) a fresh one.
    /// A fresh page is only opened when the current page already holds elements,
    /// an empty page would just repeat the same attempt.
    fn place_with_overflow(
        &self,
        packer: &mut FreeSpacePacker,
        pages: &mut Vec<Vec<Element>>,
        element: &Element,
    ) -> Option<PlacementResult> {
        let (w, h) = (element.width(), element.height());
        if let Some(placement) = packer.place(w, h) {
            return Some(placement);
        }
        if pages.last().is_some_and(|p| p.is_empty()) {
            return None;
        }
        pages.push(vec![]);
        packer.reset();
        debug!(
            "[PACK] page {} is full for element {}, opened page {}",
            pages.len() - 2,
            element.id,
            pages.len() - 1
        );
        packer.place(w, h)
    }
}

/// Packs `elements` onto as many `canvas` pages as needed, see [`MultiPageOptimizer`].
pub fn optimize_layout(
    elements: &[Element],
    canvas: Canvas,
    options: LayoutOptions,
) -> LayoutResult {
    MultiPageOptimizer::new(canvas, options).solve(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::Point;
    use crate::util::{Heuristic, SortStrategy};
    use float_cmp::approx_eq;
    use test_case::test_case;

    fn squares(n: usize, side: fsize) -> Vec<Element> {
        (0..n)
            .map(|i| Element::new(format!("sq{i}"), side, side))
            .collect()
    }

    #[test]
    fn three_squares_on_one_page() {
        let result = optimize_layout(
            &squares(3, 400.0),
            Canvas::new(1000.0, 1000.0),
            LayoutOptions::default(),
        );
        assert_eq!(result.pages_used, 1);
        let positions = result.pages[0].iter().map(|e| e.position).collect::<Vec<_>>();
        assert_eq!(
            positions,
            vec![
                Point::new(10.0, 0.0),
                Point::new(415.0, 0.0),
                Point::new(10.0, 405.0)
            ]
        );
        assert!(approx_eq!(fsize, result.efficiency, 48.0, epsilon = 1e-9));
        assert!(approx_eq!(fsize, result.wasted_space, 520_000.0, epsilon = 1e-9));
        assert_eq!(result.total_elements, 3);
    }

    #[test]
    fn fourth_square_still_fits_the_first_page() {
        let result = optimize_layout(
            &squares(4, 400.0),
            Canvas::new(1000.0, 1000.0),
            LayoutOptions::default(),
        );
        assert_eq!(result.pages_used, 1);
        assert_eq!(result.pages[0].len(), 4);
        assert_eq!(result.pages[0][3].position, Point::new(415.0, 405.0));
        assert!(approx_eq!(fsize, result.efficiency, 64.0, epsilon = 1e-9));
    }

    #[test]
    fn overflow_opens_a_second_page() {
        let result = optimize_layout(
            &squares(5, 400.0),
            Canvas::new(1000.0, 1000.0),
            LayoutOptions::default(),
        );
        assert_eq!(result.pages_used, 2);
        assert_eq!(result.pages[0].len(), 4);
        assert_eq!(result.pages[1].len(), 1);
        assert_eq!(result.pages[1][0].position, Point::new(10.0, 0.0));
        // 5 * 160_000 / 2_000_000
        assert!(approx_eq!(fsize, result.efficiency, 40.0, epsilon = 1e-9));
    }

    #[test]
    fn oversized_element_is_dropped_but_counted() {
        let result = optimize_layout(
            &[Element::new("huge", 600.0, 600.0)],
            Canvas::new(500.0, 500.0),
            LayoutOptions::default(),
        );
        assert_eq!(result.pages, vec![Vec::<Element>::new()]);
        assert_eq!(result.pages_used, 1);
        assert_eq!(result.total_elements, 1);
        assert_eq!(result.dropped_elements, vec!["huge".to_string()]);
        assert_eq!(result.efficiency, 0.0);
    }

    #[test]
    fn oversized_element_after_full_page_opens_the_retry_page() {
        let mut elements = squares(1, 400.0);
        elements.push(Element::new("huge", 600.0, 600.0));
        // area order: huge first, it gets dropped on the empty first page
        let result = optimize_layout(&elements, Canvas::new(500.0, 500.0), LayoutOptions::default());
        assert_eq!(result.pages_used, 1);
        assert_eq!(result.pages[0].len(), 1);
        assert_eq!(result.dropped_elements, vec!["huge".to_string()]);

        // same-area elements keep their order: the page holds a square when the long one comes in
        let elements = vec![
            Element::new("sq", 400.0, 400.0),
            Element::new("long", 1600.0, 100.0),
            Element::new("small", 50.0, 50.0),
        ];
        let result = optimize_layout(&elements, Canvas::new(500.0, 500.0), LayoutOptions::default());
        assert_eq!(result.dropped_elements, vec!["long".to_string()]);
        assert_eq!(result.pages_used, 2);
        assert_eq!(result.pages[0].len(), 1);
        assert_eq!(result.pages[1].len(), 1);
        assert_eq!(result.pages[1][0].id, "small");
    }

    #[test]
    fn rotation_is_applied_to_the_copy() {
        let opts = LayoutOptions {
            allow_rotation: true,
            canvas_margin: 0.0,
            element_gap: 0.0,
            ..LayoutOptions::default()
        };
        let mut element = Element::new("tall", 300.0, 100.0);
        element.rotation = 180;
        let result = optimize_layout(&[element.clone()], Canvas::new(150.0, 400.0), opts);
        let placed = &result.pages[0][0];
        assert_eq!(placed.width(), 100.0);
        assert_eq!(placed.height(), 300.0);
        assert_eq!(placed.rotation, 270);
        assert_eq!(element.rotation, 180);
    }

    #[test_case(Heuristic::BSSF; "bssf")]
    #[test_case(Heuristic::BLSF; "blsf")]
    #[test_case(Heuristic::BAF; "baf")]
    #[test_case(Heuristic::BL; "bl")]
    fn deterministic_and_within_bounds(heuristic: Heuristic) {
        let opts = LayoutOptions {
            heuristic,
            allow_rotation: true,
            sort_strategy: SortStrategy::Perimeter,
            canvas_margin_v: 15.0,
            ..LayoutOptions::default()
        };
        let elements = (0..120usize)
            .map(|i| {
                let w = ((i * 71) % 180 + 20) as fsize;
                let h = ((i * 29) % 130 + 15) as fsize;
                Element::new(format!("e{i}"), w, h)
            })
            .collect::<Vec<_>>();
        let canvas = Canvas::new(800.0, 600.0);

        let first = optimize_layout(&elements, canvas, opts);
        let second = optimize_layout(&elements, canvas, opts);
        assert_eq!(first, second);

        assert!(first.pages_used > 1);
        assert_eq!(first.n_placed(), elements.len());
        assert!(first.used_area() <= canvas.area() * first.pages_used as fsize);
        for page in &first.pages {
            assert!(assertions::page_has_no_overlap(page, &opts));
            assert!(assertions::page_respects_margins(page, &canvas, &opts));
        }
        assert!(assertions::result_is_consistent(&first, &canvas));
    }

    #[test]
    fn fractional_centimeter_sizes_pack_cleanly() {
        let ppcm = 96.0 / 2.54;
        let opts = LayoutOptions {
            element_gap: 0.1 * ppcm,
            canvas_margin: 0.3 * ppcm,
            canvas_margin_v: 0.7 * ppcm,
            allow_rotation: true,
            heuristic: Heuristic::BSSF,
            ..LayoutOptions::default()
        };
        let canvas = Canvas::new(21.0 * ppcm, 29.7 * ppcm);
        let elements = (0..300usize)
            .map(|i| {
                let k = (i % 40) as fsize;
                Element::new(format!("cm{i}"), (k * 0.1 + 1.3) * ppcm, (k * 0.1 + 0.7) * ppcm)
            })
            .collect::<Vec<_>>();

        let result = optimize_layout(&elements, canvas, opts);

        assert_eq!(result.n_placed(), elements.len());
        assert!(result.dropped_elements.is_empty());
        for page in &result.pages {
            assert!(assertions::page_has_no_overlap(page, &opts));
            assert!(assertions::page_respects_margins(page, &canvas, &opts));
        }
        assert!(assertions::result_is_consistent(&result, &canvas));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn canvas_equal_to_its_margins_is_refused() {
        let opts = LayoutOptions {
            canvas_margin: 50.0,
            ..LayoutOptions::default()
        };
        MultiPageOptimizer::new(Canvas::new(100.0, 100.0), opts);
    }

    #[test]
    fn empty_input_yields_one_empty_page() {
        let result = optimize_layout(&[], Canvas::new(100.0, 100.0), LayoutOptions::default());
        assert_eq!(result.pages_used, 1);
        assert_eq!(result.total_elements, 0);
        assert_eq!(result.efficiency, 0.0);
        assert_eq!(result.wasted_space, 10_000.0);
    }
}

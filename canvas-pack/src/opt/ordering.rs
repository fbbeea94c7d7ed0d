use crate::entities::Element;
use crate::fsize;
use crate::util::SortStrategy;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Determines the order in which the elements are offered to the packer, as indices into `elements`.
///
/// Elements are first (stably) sorted by descending `strategy` metric.
/// Elements with exactly the same dimensions are then grouped together,
/// and the groups are emitted by descending area of their dimensions.
/// Groups of equal area keep the order in which they were first encountered.
pub fn placement_order(elements: &[Element], strategy: SortStrategy) -> Vec<usize> {
    let sorted = (0..elements.len())
        .sorted_by_cached_key(|&i| {
            let e = &elements[i];
            Reverse(OrderedFloat(strategy.metric(e.width(), e.height())))
        })
        .collect_vec();

    type DimKey = (OrderedFloat<fsize>, OrderedFloat<fsize>);
    let mut group_index: HashMap<DimKey, usize> = HashMap::new();
    let mut groups: Vec<(DimKey, Vec<usize>)> = vec![];

    for i in sorted {
        let key = (
            OrderedFloat(elements[i].width()),
            OrderedFloat(elements[i].height()),
        );
        let g = *group_index.entry(key).or_insert_with(|| {
            groups.push((key, vec![]));
            groups.len() - 1
        });
        groups[g].1.push(i);
    }

    groups
        .into_iter()
        .sorted_by_key(|((w, h), _)| Reverse(*w * *h))
        .flat_map(|(_, members)| members)
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn elements(dims: &[(fsize, fsize)]) -> Vec<Element> {
        dims.iter()
            .enumerate()
            .map(|(i, &(w, h))| Element::new(format!("e{i}"), w, h))
            .collect()
    }

    #[test_case(SortStrategy::Area, vec![3, 0, 1, 2]; "area")]
    #[test_case(SortStrategy::Height, vec![3, 2, 1, 0]; "height")]
    #[test_case(SortStrategy::Width, vec![3, 0, 1, 2]; "width")]
    #[test_case(SortStrategy::Perimeter, vec![3, 0, 2, 1]; "perimeter")]
    fn strategy_orders_equal_area_groups(strategy: SortStrategy, expected: Vec<usize>) {
        // the largest area always leads, the strategy decides among the equal areas
        let els = elements(&[(40.0, 10.0), (20.0, 20.0), (10.0, 40.0), (5.0, 100.0)]);
        assert_eq!(placement_order(&els, strategy), expected);
    }

    #[test]
    fn distinct_areas_end_up_in_area_order() {
        let els = elements(&[(100.0, 10.0), (100.0, 30.0), (50.0, 50.0)]);
        assert_eq!(
            placement_order(&els, SortStrategy::Height),
            vec![1, 2, 0]
        );
    }

    #[test]
    fn same_dimensions_are_grouped() {
        let els = elements(&[
            (10.0, 50.0), // a1
            (25.0, 20.0), // d, same area as a1
            (10.0, 50.0), // a2
            (20.0, 45.0), // c
        ]);
        // area sort gives c, a1, d, a2. a2 joins the group of a1, which was seen before d.
        assert_eq!(
            placement_order(&els, SortStrategy::Area),
            vec![3, 0, 2, 1]
        );
    }

    #[test]
    fn empty_input() {
        assert!(placement_order(&[], SortStrategy::Area).is_empty());
    }
}

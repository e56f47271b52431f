//! Solve results and closed-tour helpers.

use crate::city::City;

/// Output of every heuristic: a closed tour and its total length.
///
/// `tour` holds positions into the input city slice and repeats its first
/// entry at the end, so the return edge is explicit. An empty input yields
/// an empty tour; a single city yields `[0, 0]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// Closed visiting order.
    pub tour: Vec<usize>,
    /// Sum of edge lengths including the closing edge.
    pub length: f64,
}

impl SolveResult {
    /// Result for an empty city set.
    pub fn empty() -> Self {
        Self {
            tour: Vec::new(),
            length: 0.0,
        }
    }

    /// Closes an open order by repeating its first entry.
    pub fn closed(mut order: Vec<usize>, length: f64) -> Self {
        if let Some(&first) = order.first() {
            order.push(first);
        }
        Self {
            tour: order,
            length,
        }
    }

    /// The tour without the repeated closing entry.
    pub fn open_tour(&self) -> &[usize] {
        match self.tour.split_last() {
            Some((_, open)) => open,
            None => &[],
        }
    }

    /// Whether the tour starts and ends at the same index.
    ///
    /// An empty tour counts as closed.
    pub fn is_closed(&self) -> bool {
        self.tour.first() == self.tour.last()
    }

    /// Number of distinct stops, i.e. the open tour's length.
    pub fn stops(&self) -> usize {
        self.open_tour().len()
    }

    /// Maps the closed tour to the display ids of the visited cities.
    pub fn city_ids(&self, cities: &[City]) -> Vec<usize> {
        self.tour.iter().map(|&i| cities[i].id).collect()
    }
}

/// Rotates an open order in place so that position 0 of the input leads.
///
/// Cyclic order and tour length are unchanged. Orders that do not contain
/// `0` are left as they are.
pub(crate) fn rotate_to_origin(order: &mut [usize]) {
    if let Some(pos) = order.iter().position(|&i| i == 0) {
        order.rotate_left(pos);
    }
}

/// Returns `true` if `order` visits every index in `0..n` exactly once.
pub fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &i in order {
        if i >= n || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_repeats_first() {
        let result = SolveResult::closed(vec![0, 2, 1], 3.5);
        assert_eq!(result.tour, vec![0, 2, 1, 0]);
        assert_eq!(result.open_tour(), &[0, 2, 1]);
        assert_eq!(result.stops(), 3);
        assert!(result.is_closed());
    }

    #[test]
    fn test_single_city_closes_on_itself() {
        let result = SolveResult::closed(vec![0], 0.0);
        assert_eq!(result.tour, vec![0, 0]);
        assert_eq!(result.open_tour(), &[0]);
    }

    #[test]
    fn test_empty() {
        let result = SolveResult::empty();
        assert!(result.tour.is_empty());
        assert!(result.open_tour().is_empty());
        assert!(result.is_closed());
        assert_eq!(result.length, 0.0);
    }

    #[test]
    fn test_city_ids() {
        let cities = vec![
            City::new(10, 0.0, 0.0),
            City::new(11, 1.0, 0.0),
            City::new(12, 2.0, 0.0),
        ];
        let result = SolveResult::closed(vec![0, 2, 1], 4.0);
        assert_eq!(result.city_ids(&cities), vec![10, 12, 11, 10]);
    }

    #[test]
    fn test_rotate_to_origin() {
        let mut order = vec![3, 1, 0, 2];
        rotate_to_origin(&mut order);
        assert_eq!(order, vec![0, 2, 3, 1]);

        let mut already = vec![0, 1, 2];
        rotate_to_origin(&mut already);
        assert_eq!(already, vec![0, 1, 2]);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(is_permutation(&[], 0));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
    }
}

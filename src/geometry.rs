//! Euclidean distance and closed-tour length.
//!
//! Non-finite coordinates are not rejected; they propagate `NaN` or
//! infinity into every length that touches them.

use crate::city::City;

/// Euclidean distance between two cities.
///
/// # Examples
///
/// ```
/// use u_tsp::city::City;
/// use u_tsp::geometry::distance;
///
/// let d = distance(&City::new(0, 0.0, 0.0), &City::new(1, 3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
#[inline]
pub fn distance(a: &City, b: &City) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Length of the closed loop visiting `order` and returning to its first city.
///
/// `order` is an open tour of positions into `cities`. An empty order has
/// length zero.
///
/// # Complexity
/// O(n)
///
/// # Panics
/// Panics if an entry of `order` is out of bounds for `cities`.
pub fn tour_length(order: &[usize], cities: &[City]) -> f64 {
    let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
        return 0.0;
    };

    let mut length = 0.0;
    for pair in order.windows(2) {
        length += distance(&cities[pair[0]], &cities[pair[1]]);
    }
    length + distance(&cities[last], &cities[first])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<City> {
        vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 1.0, 0.0),
            City::new(2, 1.0, 1.0),
            City::new(3, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_distance_symmetric() {
        let a = City::new(0, -2.0, 7.5);
        let b = City::new(1, 4.0, -1.0);
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn test_distance_coincident_points() {
        let a = City::new(0, 3.0, 3.0);
        let b = City::new(1, 3.0, 3.0);
        assert_eq!(distance(&a, &b), 0.0);
    }

    #[test]
    fn test_distance_propagates_nan() {
        let a = City::new(0, f64::NAN, 0.0);
        let b = City::new(1, 1.0, 1.0);
        assert!(distance(&a, &b).is_nan());
    }

    #[test]
    fn test_tour_length_square() {
        let cities = square();
        assert!((tour_length(&[0, 1, 2, 3], &cities) - 4.0).abs() < 1e-12);
        // Crossing order: two sides plus two diagonals.
        let crossed = 2.0 + 2.0 * 2f64.sqrt();
        assert!((tour_length(&[0, 2, 1, 3], &cities) - crossed).abs() < 1e-12);
    }

    #[test]
    fn test_tour_length_includes_closing_edge() {
        let cities = vec![City::new(0, 0.0, 0.0), City::new(1, 5.0, 0.0)];
        assert!((tour_length(&[0, 1], &cities) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_tour_length_degenerate() {
        let cities = square();
        assert_eq!(tour_length(&[], &cities), 0.0);
        assert_eq!(tour_length(&[2], &cities), 0.0);
    }
}

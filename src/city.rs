//! Cities and city-list parsing.

/// A point in the plane.
///
/// `id` is a display label only; algorithms address cities by their
/// position in the input slice.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// Parses one city per non-blank line, formatted as `x, y`.
///
/// Ids follow the order of the kept lines. A coordinate that is missing or
/// does not parse as a number becomes `0.0`; extra fields are ignored.
///
/// # Examples
///
/// ```
/// use u_tsp::city::parse_cities;
///
/// let cities = parse_cities("0, 0\n\n3, 4\nabc, 2");
/// assert_eq!(cities.len(), 3);
/// assert_eq!(cities[1].x, 3.0);
/// assert_eq!(cities[2].id, 2);
/// assert_eq!(cities[2].x, 0.0);
/// ```
pub fn parse_cities(input: &str) -> Vec<City> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(id, line)| {
            let mut parts = line.split(',').map(str::trim);
            let x = parse_coordinate(parts.next());
            let y = parse_coordinate(parts.next());
            City::new(id, x, y)
        })
        .collect()
}

fn parse_coordinate(field: Option<&str>) -> f64 {
    field
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
}

// Synaptik - core/chart.rs
//
// Data behind the visualization panel. Only a static example series exists.

use crate::util::constants;

/// A named series of (x, y) points.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: &'static str,
    pub points: Vec<[f64; 2]>,
}

/// The example series shown until a simulation produces real output.
pub fn example_series() -> ChartSeries {
    ChartSeries {
        title: constants::EXAMPLE_CHART_TITLE,
        points: constants::EXAMPLE_CHART_POINTS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_series_is_a_triangle() {
        let s = example_series();
        assert_eq!(s.title, "Example Chart");
        assert_eq!(s.points, vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]);
    }
}

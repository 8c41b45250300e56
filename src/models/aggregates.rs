use serde::{Deserialize, Serialize};

/// Number of listings sharing one categorical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTypePrice {
    pub room_type: String,
    pub mean_price: f64,
}

/// Per-neighbourhood means used for the geographic price scatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighbourhoodSummary {
    pub neighbourhood: String,
    pub mean_price: f64,
    pub mean_latitude: f64,
    pub mean_longitude: f64,
    pub listings: usize,
}

/// Ordinary least squares line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fit a line to `(x, y)` points.
    ///
    /// Returns `None` with fewer than two points or when every x is equal,
    /// since the slope is undefined in both cases.
    pub fn fit(points: &[(f64, f64)]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (x, y) in points {
            let dx = x - mean_x;
            sxx += dx * dx;
            sxy += dx * (y - mean_y);
        }

        if sxx <= f64::EPSILON {
            return None;
        }

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_exact_line() {
        let points: Vec<(f64, f64)> = (0..10).map(|x| (x as f64, 2.0 + 0.5 * x as f64)).collect();
        let fit = LinearFit::fit(&points).unwrap();

        assert!((fit.slope - 0.5).abs() < 1e-12);
        assert!((fit.intercept - 2.0).abs() < 1e-12);
        assert!((fit.predict(20.0) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_noisy_points() {
        let points = [(0.0, 1.5), (1.0, 1.5), (2.0, 3.5), (3.0, 3.5)];
        let fit = LinearFit::fit(&points).unwrap();

        assert!((fit.slope - 0.8).abs() < 1e-12);
        assert!((fit.intercept - 1.3).abs() < 1e-12);
    }

    #[test]
    fn test_fit_degenerate_inputs() {
        assert_eq!(LinearFit::fit(&[]), None);
        assert_eq!(LinearFit::fit(&[(1.0, 2.0)]), None);
        assert_eq!(LinearFit::fit(&[(3.0, 1.0), (3.0, 5.0)]), None);
    }
}

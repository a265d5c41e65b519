//! Trend forecaster
//!
//! Ordinary least squares over an ordered series indexed 0..n-1, evaluated at
//! x = n. Used for next-month totals and next price points. Stateless and
//! closed-form.

use serde::{Deserialize, Serialize};

/// Slope beyond which a price series counts as moving
pub const TREND_SLOPE_THRESHOLD: f64 = 0.05;

/// Direction of a price series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "Increasing",
            Self::Decreasing => "Decreasing",
            Self::Stable => "Stable",
        }
    }

    /// Classify a fitted slope
    pub fn from_slope(slope: f64) -> Self {
        if slope > TREND_SLOPE_THRESHOLD {
            Self::Increasing
        } else if slope < -TREND_SLOPE_THRESHOLD {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Next price point and the direction of the series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceForecast {
    #[serde(rename = "predicted_price")]
    pub predicted: f64,
    pub trend: Trend,
}

/// Fitted line y = intercept + slope * x
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Least-squares fit over x = 0..n-1; `None` for fewer than two points
    pub fn fit(series: &[f64]) -> Option<Self> {
        if series.len() < 2 {
            return None;
        }

        let n = series.len() as f64;
        let x_mean = (n - 1.0) / 2.0;
        let y_mean = series.iter().sum::<f64>() / n;

        let (sxy, sxx) = series
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(sxy, sxx), (i, y)| {
                let dx = i as f64 - x_mean;
                (sxy + dx * (y - y_mean), sxx + dx * dx)
            });

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Forecast the value following the series, never below zero
///
/// Empty series forecast 0; a single value forecasts itself.
pub fn forecast_next(series: &[f64]) -> f64 {
    match series {
        [] => 0.0,
        [only] => *only,
        _ => LinearFit::fit(series)
            .map(|line| line.at(series.len() as f64).max(0.0))
            .unwrap_or(0.0),
    }
}

/// Forecast the next price and classify the series' direction
pub fn classify_price_trend(series: &[f64]) -> PriceForecast {
    match LinearFit::fit(series) {
        Some(line) => PriceForecast {
            predicted: line.at(series.len() as f64).max(0.0),
            trend: Trend::from_slope(line.slope),
        },
        None => PriceForecast {
            predicted: series.first().copied().unwrap_or(0.0),
            trend: Trend::Stable,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_series_extrapolates_exactly() {
        assert_eq!(forecast_next(&[1000.0, 1200.0, 1400.0, 1600.0]), 1800.0);
    }

    #[test]
    fn test_degenerate_series() {
        assert_eq!(forecast_next(&[]), 0.0);
        assert_eq!(forecast_next(&[742.5]), 742.5);
    }

    #[test]
    fn test_forecast_clamped_at_zero() {
        assert_eq!(forecast_next(&[300.0, 200.0, 100.0]), 0.0);
        assert_eq!(forecast_next(&[300.0, 100.0]), 0.0);
    }

    #[test]
    fn test_noisy_series_uses_least_squares() {
        // slope 1.2, intercept 1.2 -> 1.2 + 1.2 * 4 = 6.0
        let line = LinearFit::fit(&[1.0, 3.0, 3.0, 5.0]).unwrap();
        assert!((line.slope - 1.2).abs() < 1e-12);
        assert!((line.intercept - 1.2).abs() < 1e-12);
        assert!((forecast_next(&[1.0, 3.0, 3.0, 5.0]) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_order_is_significant() {
        assert_eq!(forecast_next(&[10.0, 20.0]), 30.0);
        assert_eq!(forecast_next(&[20.0, 10.0]), 0.0);
    }

    #[test]
    fn test_flat_prices_are_stable() {
        let forecast = classify_price_trend(&[50.0, 50.0, 50.0, 50.0]);
        assert_eq!(forecast.predicted, 50.0);
        assert_eq!(forecast.trend, Trend::Stable);
    }

    #[test]
    fn test_price_trend_directions() {
        assert_eq!(
            classify_price_trend(&[40.0, 42.0, 44.0]).trend,
            Trend::Increasing
        );
        assert_eq!(
            classify_price_trend(&[44.0, 42.0, 40.0]).trend,
            Trend::Decreasing
        );
    }

    #[test]
    fn test_slope_threshold_boundaries() {
        assert_eq!(Trend::from_slope(0.05), Trend::Stable);
        assert_eq!(Trend::from_slope(-0.05), Trend::Stable);
        assert_eq!(Trend::from_slope(0.0501), Trend::Increasing);
        assert_eq!(Trend::from_slope(-0.0501), Trend::Decreasing);
        // Small drift counts as stable: slope 0.04
        assert_eq!(
            classify_price_trend(&[50.0, 50.04, 50.08]).trend,
            Trend::Stable
        );
    }

    #[test]
    fn test_price_degenerate_series() {
        let empty = classify_price_trend(&[]);
        assert_eq!(empty.predicted, 0.0);
        assert_eq!(empty.trend, Trend::Stable);

        let single = classify_price_trend(&[19.99]);
        assert_eq!(single.predicted, 19.99);
        assert_eq!(single.trend, Trend::Stable);
    }

    #[test]
    fn test_price_serializes_like_api() {
        let json = serde_json::to_value(classify_price_trend(&[50.0, 50.0])).unwrap();
        assert_eq!(json["predicted_price"], 50.0);
        assert_eq!(json["trend"], "Stable");
    }
}

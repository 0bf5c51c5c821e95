//! Split-average trend estimation for sparkline cards.

use crate::config::DEFAULT_TREND_FLAT_BAND;
use crate::error::MetricsError;
use crate::types::{MetricSample, Trend, TrendDirection};

/// Estimate the trend of `series` with the default ±2% flat band.
pub fn estimate_trend(series: &[MetricSample]) -> Result<Trend, MetricsError> {
    estimate_trend_with(series, DEFAULT_TREND_FLAT_BAND)
}

/// Compare the mean of the first half (`[0, n/2)`) with the mean of the rest.
///
/// `(second - first) / first * 100` beyond `+flat_band` is `Up`, below
/// `-flat_band` is `Down`, anything in between is `Flat`. A zero baseline,
/// including an empty first half when `n <= 1`, is `DivisionByZero`; a mean or
/// ratio that is not finite is `Overflow`.
pub fn estimate_trend_with(
    series: &[MetricSample],
    flat_band: f64,
) -> Result<Trend, MetricsError> {
    let (first, second) = series.split_at(series.len() / 2);

    let first_mean = mean(first).ok_or(MetricsError::DivisionByZero)?;
    if first_mean == 0.0 {
        return Err(MetricsError::DivisionByZero);
    }
    let second_mean = mean(second).ok_or(MetricsError::DivisionByZero)?;
    if !first_mean.is_finite() || !second_mean.is_finite() {
        return Err(MetricsError::Overflow);
    }

    let signed = (second_mean - first_mean) / first_mean * 100.0;
    if !signed.is_finite() {
        return Err(MetricsError::Overflow);
    }
    let direction = if signed > flat_band {
        TrendDirection::Up
    } else if signed < -flat_band {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    };

    log::debug!(
        "trend over {} samples: {:.3} -> {:.3} ({:+.2}%)",
        series.len(),
        first_mean,
        second_mean,
        signed
    );

    Ok(Trend {
        direction,
        magnitude_percent: signed.abs(),
    })
}

fn mean(values: &[MetricSample]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Display text for a trend badge, e.g. `+27.4%` or `-3.0%`.
pub fn trend_label(trend: &Trend) -> String {
    match trend.direction {
        TrendDirection::Up => format!("+{:.1}%", trend.magnitude_percent),
        TrendDirection::Down => format!("-{:.1}%", trend.magnitude_percent),
        TrendDirection::Flat => format!("{:.1}%", trend.magnitude_percent),
    }
}

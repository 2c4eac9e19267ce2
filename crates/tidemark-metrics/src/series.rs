//! Slice-level return and volatility computations.

use crate::MetricError;

/// Default rolling-volatility lookback, in observations.
pub const DEFAULT_WINDOW: usize = 21;

/// Annualization factor: trading days per year.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Computes daily returns `p[i]/p[i-1] - 1` for a price series.
///
/// The first position is null, as is any position where either price in
/// the ratio is null. Output length equals input length.
#[must_use]
pub fn daily_returns(prices: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut returns = Vec::with_capacity(prices.len());
    for (i, price) in prices.iter().enumerate() {
        let ret = if i == 0 {
            None
        } else {
            match (prices[i - 1], price) {
                (Some(prev), Some(cur)) => Some(cur / prev - 1.0),
                _ => None,
            }
        };
        returns.push(ret);
    }
    returns
}

/// Computes rolling annualized volatility for a price series.
///
/// Daily returns are computed first, then the sample standard deviation
/// (N-1 denominator) of the non-null returns in the trailing window,
/// scaled by `sqrt(252)`. The window expands until `window` positions are
/// available and stays fixed afterwards. At least two non-null return
/// observations are needed for a value: with one, sample stdev is
/// undefined and the position is null, never zero. A window of 1 is
/// therefore all-null.
///
/// # Errors
///
/// Returns [`MetricError::InvalidWindow`] if `window` is zero.
pub fn rolling_volatility(
    prices: &[Option<f64>],
    window: usize,
) -> Result<Vec<Option<f64>>, MetricError> {
    if window == 0 {
        return Err(MetricError::InvalidWindow);
    }

    let returns = daily_returns(prices);
    let annualize = TRADING_DAYS_PER_YEAR.sqrt();

    let vols = (0..returns.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            sample_stdev(&returns[start..=i]).map(|sd| sd * annualize)
        })
        .collect();
    Ok(vols)
}

/// Sample standard deviation of the non-null values in a window, or
/// `None` with fewer than two observations.
fn sample_stdev(window: &[Option<f64>]) -> Option<f64> {
    let values: Vec<f64> = window.iter().filter_map(|v| *v).collect();
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some(var.sqrt())
}

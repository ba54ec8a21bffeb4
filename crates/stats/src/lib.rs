//! Statistical helper functions shared by the aeolus analyzers.
//!
//! Everything here is a pure function over `&[f64]` slices. Degenerate
//! inputs (empty slices, zero variance) return documented fallback values
//! or `None` instead of dividing by zero.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator (matching R's `var()`).
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator (matching R's `sd()`).
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Root mean squared deviation of `data` about an arbitrary `center`
/// (N denominator). Returns 0.0 if empty.
///
/// Unlike [`sd`], the spread is measured about a caller-supplied center
/// rather than the data's own mean, so the result grows as the center
/// moves away from the mean.
pub fn population_sd_about(data: &[f64], center: f64) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = data.iter().map(|&x| (x - center) * (x - center)).sum();
    (sum_sq / data.len() as f64).sqrt()
}

/// An ordinary least-squares line fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Slope of the fitted line (y units per x unit).
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
    /// Coefficient of determination, `1 - SSres/SStot`.
    pub r_squared: f64,
}

impl LinearFit {
    /// Evaluates the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Ordinary least-squares fit of `y` against `x`.
///
/// Returns `None` if the slices differ in length, have fewer than 2
/// points, or `x` has zero variance (degenerate regression).
///
/// `r_squared` is `1 - SSres/SStot`; a constant `y` with zero residuals
/// is reported as 1.0 (exact fit).
pub fn linear_regression(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let n = x.len() as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        sum_xy += (xi - mx) * (yi - my);
        sum_xx += (xi - mx) * (xi - mx);
    }

    if sum_xx == 0.0 {
        return None;
    }

    let slope = sum_xy / sum_xx;
    let intercept = my - slope * mx;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let fitted = intercept + slope * xi;
        ss_res += (yi - fitted) * (yi - fitted);
        ss_tot += (yi - my) * (yi - my);
    }

    let r_squared = if ss_tot == 0.0 {
        1.0
    } else {
        1.0 - ss_res / ss_tot
    };

    Some(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

/// Standard error of a fitted slope, from the residual variance
/// `SSres / (n - 2)` and the x deviation sum.
///
/// Returns `None` if the slices differ in length, have fewer than 3
/// points, or `x` has zero variance. A perfect fit yields `Some(0.0)`.
pub fn slope_standard_error(x: &[f64], y: &[f64], fit: &LinearFit) -> Option<f64> {
    if x.len() != y.len() || x.len() < 3 {
        return None;
    }

    let n = x.len() as f64;
    let mx = x.iter().sum::<f64>() / n;

    let mut ss_res = 0.0;
    let mut sum_xx = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let resid = yi - fit.predict(xi);
        ss_res += resid * resid;
        sum_xx += (xi - mx) * (xi - mx);
    }

    if sum_xx == 0.0 {
        return None;
    }

    let residual_variance = ss_res / (n - 2.0);
    Some((residual_variance / sum_xx).sqrt())
}

/// Centered sliding mean with a clamped window.
///
/// Each output point is the mean of up to `window` input points centered
/// on it; near the boundaries the window shrinks to the valid index range
/// rather than padding. Output length equals input length. A `window` of
/// 0 is treated as 1.
pub fn sliding_mean(data: &[f64], window: usize) -> Vec<f64> {
    let n = data.len();
    let window = window.max(1);
    let half = window / 2;

    (0..n)
        .map(|i| {
            let lo = i.saturating_sub(half);
            let hi = (i + half + 1).min(n);
            mean(&data[lo..hi])
        })
        .collect()
}

/// Index of the first element at or below `threshold`, scanning front to
/// back. `None` if no element qualifies.
///
/// Intended for monotonically decreasing axes (pressure with height),
/// where the first crossing is the nearest level at or below the target.
pub fn first_at_or_below(data: &[f64], threshold: f64) -> Option<usize> {
    data.iter().position(|&x| x <= threshold)
}

/// Index of the first element at or above `threshold`, scanning front to
/// back. `None` if no element qualifies.
///
/// Intended for monotonically increasing axes (height).
pub fn first_at_or_above(data: &[f64], threshold: f64) -> Option<usize> {
    data.iter().position(|&x| x >= threshold)
}

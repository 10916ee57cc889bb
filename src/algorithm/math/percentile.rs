use std::cmp::Ordering;

use itertools::Itertools;
use log::debug;

use super::{round_half_up, GradeError};

pub const MIN_PERCENTILE: f64 = 0.0;
pub const MAX_PERCENTILE: f64 = 100.0;

/// Value at percentile `p` of `values` with the nearest-rank method, rounded to two decimals.
///
/// `p = 0` yields the minimum and `p = 100` the maximum. Any other `p` picks the element at
/// 1-based rank `ceil(p / 100 * N)` of the ascending order. `values` is never reordered.
pub fn percentile(p: f64, values: &[f64]) -> Result<f64, GradeError> {
    match nearest_rank_value(p, values) {
        Ok(value) => {
            let value = round_half_up(value, 2);

            debug!("Percentile {} of {} values is {}", p, values.len(), value);
            Ok(value)
        }
        Err(error) => {
            debug!("Reject percentile {}: {}", p, error);
            Err(error)
        }
    }
}

/// Type and range check for the percentile rank.
pub fn validate_percentile_rank(p: f64) -> Result<(), GradeError> {
    if p.is_nan() {
        return Err(GradeError::type_error("p must not be NaN"));
    }

    if !(MIN_PERCENTILE..=MAX_PERCENTILE).contains(&p) {
        return Err(GradeError::range_error(format!(
            "p must be between {} and {}, got {}",
            MIN_PERCENTILE, MAX_PERCENTILE, p
        )));
    }

    Ok(())
}

/// 1-based nearest rank of percentile `p` over `n` sorted values.
///
/// Clamped to `[1, n]`: a subnormal `p` makes `p / 100` underflow to 0.
pub fn nearest_rank(p: f64, n: usize) -> usize {
    let rank = ((p / 100.0) * n as f64).ceil() as usize;

    rank.clamp(1, n.max(1))
}

fn nearest_rank_value(p: f64, values: &[f64]) -> Result<f64, GradeError> {
    validate_percentile_rank(p)?;

    if values.is_empty() {
        return Err(GradeError::range_error("values must have at least one element"));
    }

    if let Some(index) = values.iter().position(|value| value.is_nan()) {
        return Err(GradeError::type_error(format!(
            "values[{}] must not be NaN",
            index
        )));
    }

    let sorted = values
        .iter()
        .copied()
        .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .collect::<Vec<_>>();

    let value = if p == MIN_PERCENTILE {
        sorted[0]
    } else if p == MAX_PERCENTILE {
        sorted[sorted.len() - 1]
    } else {
        sorted[nearest_rank(p, sorted.len()) - 1]
    };

    Ok(value)
}

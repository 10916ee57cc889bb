use log::debug;

use super::{round_half_up, GradeError};
use crate::schemas::ScoreWeightPair;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;
pub const MIN_WEIGHT: f64 = 0.0;
pub const MAX_WEIGHT: f64 = 1.0;

/// How far the sum of all weights may drift from 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Weighted final grade of `items`, rounded to two decimals.
///
/// Every item is checked as it is accumulated: NaN fields are a type error,
/// a score outside `[0, 100]` or a weight outside `[0, 1]` is a range error.
/// Once all items are summed the weights must add up to 1 within
/// [`WEIGHT_SUM_TOLERANCE`]. An empty slice is a range error.
pub fn calc_weighted_grade(items: &[ScoreWeightPair]) -> Result<f64, GradeError> {
    weighted_grade_from(items.iter().copied().map(Ok))
}

/// Shared by the typed and the JSON entry points so both validate item by item
/// in a single pass.
pub(crate) fn weighted_grade_from<I>(items: I) -> Result<f64, GradeError>
where
    I: IntoIterator<Item = Result<ScoreWeightPair, GradeError>>,
{
    match weighted_sum(items) {
        Ok((total, count)) => {
            let grade = round_half_up(total, 2);

            debug!("Weighted grade of {} items is {}", count, grade);
            Ok(grade)
        }
        Err(error) => {
            debug!("Reject weighted grade: {}", error);
            Err(error)
        }
    }
}

fn weighted_sum<I>(items: I) -> Result<(f64, usize), GradeError>
where
    I: IntoIterator<Item = Result<ScoreWeightPair, GradeError>>,
{
    let mut total_score = 0.0;
    let mut total_weight = 0.0;
    let mut count = 0;

    for (index, item) in items.into_iter().enumerate() {
        let item = item?;

        validate_item(index, &item)?;

        total_score += item.score * item.weight;
        total_weight += item.weight;
        count += 1;
    }

    if count == 0 {
        return Err(GradeError::range_error("items must not be empty"));
    }

    if (total_weight - 1.0_f64).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(GradeError::range_error(format!(
            "weights must sum to 1 (tolerance ±{}), got {}",
            WEIGHT_SUM_TOLERANCE, total_weight
        )));
    }

    Ok((total_score, count))
}

fn validate_item(index: usize, item: &ScoreWeightPair) -> Result<(), GradeError> {
    if item.score.is_nan() || item.weight.is_nan() {
        return Err(GradeError::type_error(format!(
            "item {}: score and weight must not be NaN",
            index
        )));
    }

    if !(MIN_SCORE..=MAX_SCORE).contains(&item.score) {
        return Err(GradeError::range_error(format!(
            "item {}: score must be between {} and {}, got {}",
            index, MIN_SCORE, MAX_SCORE, item.score
        )));
    }

    if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&item.weight) {
        return Err(GradeError::range_error(format!(
            "item {}: weight must be between {} and {}, got {}",
            index, MIN_WEIGHT, MAX_WEIGHT, item.weight
        )));
    }

    Ok(())
}

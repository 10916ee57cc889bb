use serde_json::{Map, Value};

use super::grade::weighted_grade_from;
use super::{percentile, validate_percentile_rank, GradeError};
use crate::schemas::ScoreWeightPair;

/// Weighted grade of a JSON array of `{"score": .., "weight": ..}` objects.
///
/// Shape problems (not an array, an element that is not an object, a missing or
/// non-numeric field) are type errors. Each element is shape-checked and then
/// range-checked before the next one is read.
pub fn calc_weighted_grade_json(items: &Value) -> Result<f64, GradeError> {
    let items = items
        .as_array()
        .ok_or_else(|| GradeError::type_error("items must be an array"))?;

    weighted_grade_from(
        items
            .iter()
            .enumerate()
            .map(|(index, item)| parse_item(index, item)),
    )
}

/// Percentile of a JSON number `p` over a JSON array of numbers.
pub fn percentile_json(p: &Value, values: &Value) -> Result<f64, GradeError> {
    let p = p
        .as_f64()
        .ok_or_else(|| GradeError::type_error("p must be a number"))?;

    validate_percentile_rank(p)?;

    let values = values
        .as_array()
        .ok_or_else(|| GradeError::type_error("values must be an array"))?
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value.as_f64().ok_or_else(|| {
                GradeError::type_error(format!("values[{}] must be a number", index))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    percentile(p, &values)
}

fn parse_item(index: usize, item: &Value) -> Result<ScoreWeightPair, GradeError> {
    let object = item
        .as_object()
        .ok_or_else(|| GradeError::type_error(format!("item {} must be an object", index)))?;

    Ok(ScoreWeightPair::new(
        number_field(index, object, "score")?,
        number_field(index, object, "weight")?,
    ))
}

fn number_field(index: usize, object: &Map<String, Value>, key: &str) -> Result<f64, GradeError> {
    object
        .get(key)
        .ok_or_else(|| GradeError::type_error(format!("item {} has no `{}` field", index, key)))?
        .as_f64()
        .ok_or_else(|| GradeError::type_error(format!("item {}: `{}` must be a number", index, key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_weighted_grade_json() {
        let items = json!([{"score": 80, "weight": 0.4}, {"score": 90, "weight": 0.6}]);
        assert_eq!(calc_weighted_grade_json(&items).unwrap(), 86.0);
    }

    #[test]
    fn test_weighted_grade_json_ignores_extra_fields() {
        let items = json!([{"name": "final exam", "score": 75, "weight": 1}]);
        assert_eq!(calc_weighted_grade_json(&items).unwrap(), 75.0);
    }

    #[test]
    fn test_weighted_grade_json_shape_errors() {
        let cases = [
            json!({"score": 80, "weight": 1.0}),
            json!("80:1.0"),
            json!([null]),
            json!([42]),
            json!([{"score": 80}]),
            json!([{"weight": 1.0}]),
            json!([{"score": "80", "weight": 1.0}]),
            json!([{"score": 80, "weight": null}]),
        ];

        for items in cases.iter() {
            let error = calc_weighted_grade_json(items).unwrap_err();
            assert!(error.is_type_error(), "{} gave {}", items, error);
        }
    }

    #[test]
    fn test_weighted_grade_json_range_errors() {
        assert!(calc_weighted_grade_json(&json!([]))
            .unwrap_err()
            .is_range_error());
        assert!(calc_weighted_grade_json(&json!([{"score": 150, "weight": 1.0}]))
            .unwrap_err()
            .is_range_error());
        assert!(
            calc_weighted_grade_json(&json!([{"score": 80, "weight": 0.5}, {"score": 90, "weight": 0.4}]))
                .unwrap_err()
                .is_range_error()
        );
    }

    #[test]
    fn test_weighted_grade_json_checks_items_in_order() {
        // the range error on item 0 is reported before the shape error on item 1
        let items = json!([{"score": 150, "weight": 0.5}, "broken"]);
        assert!(calc_weighted_grade_json(&items).unwrap_err().is_range_error());

        let items = json!([{"score": 50, "weight": 0.5}, "broken"]);
        assert!(calc_weighted_grade_json(&items).unwrap_err().is_type_error());
    }

    #[test]
    fn test_percentile_json() {
        assert_eq!(
            percentile_json(&json!(50), &json!([4, 1, 3, 2])).unwrap(),
            2.0
        );
        assert_eq!(
            percentile_json(&json!(75.0), &json!([1, 2, 3, 4])).unwrap(),
            3.0
        );
    }

    #[test]
    fn test_percentile_json_errors() {
        assert!(percentile_json(&json!("50"), &json!([1, 2]))
            .unwrap_err()
            .is_type_error());
        assert!(percentile_json(&json!(null), &json!([1, 2]))
            .unwrap_err()
            .is_type_error());
        assert!(percentile_json(&json!(50), &json!({"a": 1}))
            .unwrap_err()
            .is_type_error());
        assert!(percentile_json(&json!(50), &json!([1, "2"]))
            .unwrap_err()
            .is_type_error());
        assert!(percentile_json(&json!(50), &json!([]))
            .unwrap_err()
            .is_range_error());
        assert!(percentile_json(&json!(150), &json!([1, 2, 3]))
            .unwrap_err()
            .is_range_error());
    }

    #[test]
    fn test_percentile_json_checks_rank_before_values() {
        assert!(percentile_json(&json!(150), &json!("not an array"))
            .unwrap_err()
            .is_range_error());
    }
}

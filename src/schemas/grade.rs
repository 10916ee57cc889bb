use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::GradeError;

/// One graded component: a score in `[0, 100]` and the share it carries in `[0, 1]`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeightPair {
    pub score: f64,

    pub weight: f64,
}

impl ScoreWeightPair {
    pub fn new(score: f64, weight: f64) -> Self {
        Self { score, weight }
    }
}

impl From<(f64, f64)> for ScoreWeightPair {
    fn from((score, weight): (f64, f64)) -> Self {
        Self::new(score, weight)
    }
}

/// Parses the `score:weight` form, e.g. `80:0.4`.
impl FromStr for ScoreWeightPair {
    type Err = GradeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (score, weight) = raw.split_once(':').ok_or_else(|| {
            GradeError::type_error(format!("`{}` is not in the form score:weight", raw))
        })?;

        let score = score
            .trim()
            .parse::<f64>()
            .map_err(|_| GradeError::type_error(format!("score `{}` must be a number", score)))?;
        let weight = weight
            .trim()
            .parse::<f64>()
            .map_err(|_| GradeError::type_error(format!("weight `{}` must be a number", weight)))?;

        Ok(Self::new(score, weight))
    }
}

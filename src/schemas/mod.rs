mod grade;
pub use grade::ScoreWeightPair;

pub mod algorithm;
pub mod schemas;

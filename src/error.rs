use super::*;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
  #[error("{activity} expects {expected} readings, got {got}")]
  ArityMismatch {
    activity: ActivityType,
    expected: usize,
    got: usize,
  },
  #[error("invalid reading for {field}: {value}")]
  InvalidReading { field: &'static str, value: f64 },
  #[error("unknown activity type: {0}")]
  UnknownActivityType(String),
}

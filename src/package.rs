use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
  #[default]
  Lenient,
  Strict,
}

impl Validation {
  fn magnitude(self, field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || (self == Self::Strict && value <= 0.0) {
      return Err(Error::InvalidReading { field, value });
    }

    Ok(value)
  }
}

fn count(field: &'static str, value: f64) -> Result<u64> {
  if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
    Ok(value as u64)
  } else {
    Err(Error::InvalidReading { field, value })
  }
}

pub fn build(tag: &str, readings: &[f64]) -> Result<Workout> {
  build_with(tag, readings, Validation::default())
}

pub fn build_with(tag: &str, readings: &[f64], validation: Validation) -> Result<Workout> {
  let activity = tag.parse::<ActivityType>()?;

  let workout: Workout = match (activity, readings) {
    (ActivityType::Running, &[action, duration, weight]) => Running::new(
      count("action_count", action)?,
      duration,
      validation.magnitude("weight_kg", weight)?,
    )?
    .into(),
    (ActivityType::SportsWalking, &[action, duration, weight, height]) => SportsWalking::new(
      count("action_count", action)?,
      duration,
      validation.magnitude("weight_kg", weight)?,
      validation.magnitude("height_cm", height)?,
    )?
    .into(),
    (ActivityType::Swimming, &[action, duration, weight, pool_length, pool_count]) => {
      Swimming::new(
        count("action_count", action)?,
        duration,
        validation.magnitude("weight_kg", weight)?,
        validation.magnitude("pool_length_m", pool_length)?,
        count("pool_laps", pool_count)?,
      )?
      .into()
    }
    _ => {
      return Err(Error::ArityMismatch {
        activity,
        expected: activity.arity(),
        got: readings.len(),
      });
    }
  };

  debug!("built {activity} workout from {readings:?}");

  Ok(workout)
}

use super::*;

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

const STEP_LENGTH: f64 = 0.65;
const STROKE_LENGTH: f64 = 1.38;

/// Floored float division, rounding toward negative infinity the way the
/// remainder-based `//` operator does, which can differ from `(a / b).floor()`
/// when the quotient rounds up to an integer.
fn floor_div(a: f64, b: f64) -> f64 {
  let remainder = a % b;

  let mut quotient = (a - remainder) / b;

  if remainder != 0.0 && (b < 0.0) != (remainder < 0.0) {
    quotient -= 1.0;
  }

  if quotient == 0.0 {
    return 0.0_f64.copysign(a / b);
  }

  let floor = quotient.floor();

  if quotient - floor > 0.5 {
    floor + 1.0
  } else {
    floor
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
  action: u64,
  duration: f64,
  weight: f64,
}

impl Training {
  pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self> {
    if !(duration.is_finite() && duration > 0.0) {
      return Err(Error::InvalidReading {
        field: "duration_hours",
        value: duration,
      });
    }

    Ok(Self {
      action,
      duration,
      weight,
    })
  }

  #[must_use]
  pub fn action(&self) -> u64 {
    self.action
  }

  fn distance(&self, step_length: f64) -> f64 {
    self.action as f64 * step_length / M_IN_KM
  }

  #[must_use]
  pub fn duration(&self) -> f64 {
    self.duration
  }

  fn mean_speed(&self, step_length: f64) -> f64 {
    self.distance(step_length) / self.duration
  }

  fn minutes(&self) -> f64 {
    self.duration * MIN_IN_H
  }

  #[must_use]
  pub fn weight(&self) -> f64 {
    self.weight
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
  training: Training,
}

impl Running {
  const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
  const CALORIES_SPEED_SHIFT: f64 = 20.0;

  pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self> {
    Ok(Self {
      training: Training::new(action, duration, weight)?,
    })
  }

  #[must_use]
  pub fn distance(&self) -> f64 {
    self.training.distance(STEP_LENGTH)
  }

  #[must_use]
  pub fn mean_speed(&self) -> f64 {
    self.training.mean_speed(STEP_LENGTH)
  }

  #[must_use]
  pub fn spent_calories(&self) -> f64 {
    (Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed() - Self::CALORIES_SPEED_SHIFT)
      * self.training.weight
      / M_IN_KM
      * self.training.minutes()
  }

  #[must_use]
  pub fn training(&self) -> &Training {
    &self.training
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
  height: f64,
  training: Training,
}

impl SportsWalking {
  const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
  const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

  pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> Result<Self> {
    if height == 0.0 || !height.is_finite() {
      return Err(Error::InvalidReading {
        field: "height_cm",
        value: height,
      });
    }

    Ok(Self {
      height,
      training: Training::new(action, duration, weight)?,
    })
  }

  #[must_use]
  pub fn distance(&self) -> f64 {
    self.training.distance(STEP_LENGTH)
  }

  #[must_use]
  pub fn height(&self) -> f64 {
    self.height
  }

  #[must_use]
  pub fn mean_speed(&self) -> f64 {
    self.training.mean_speed(STEP_LENGTH)
  }

  #[must_use]
  pub fn spent_calories(&self) -> f64 {
    let weight = self.training.weight;

    (Self::CALORIES_WEIGHT_MULTIPLIER * weight
      + floor_div(self.mean_speed().powi(2), self.height)
        * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
        * weight)
      * self.training.minutes()
  }

  #[must_use]
  pub fn training(&self) -> &Training {
    &self.training
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
  pool_count: u64,
  pool_length: f64,
  training: Training,
}

impl Swimming {
  const CALORIES_SPEED_SHIFT: f64 = 1.1;
  const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

  pub fn new(
    action: u64,
    duration: f64,
    weight: f64,
    pool_length: f64,
    pool_count: u64,
  ) -> Result<Self> {
    Ok(Self {
      pool_count,
      pool_length,
      training: Training::new(action, duration, weight)?,
    })
  }

  #[must_use]
  pub fn distance(&self) -> f64 {
    self.training.distance(STROKE_LENGTH)
  }

  #[must_use]
  pub fn mean_speed(&self) -> f64 {
    self.pool_length * self.pool_count as f64 / M_IN_KM / self.training.duration
  }

  #[must_use]
  pub fn pool_count(&self) -> u64 {
    self.pool_count
  }

  #[must_use]
  pub fn pool_length(&self) -> f64 {
    self.pool_length
  }

  #[must_use]
  pub fn spent_calories(&self) -> f64 {
    (self.mean_speed() + Self::CALORIES_SPEED_SHIFT)
      * Self::CALORIES_WEIGHT_MULTIPLIER
      * self.training.weight
  }

  #[must_use]
  pub fn training(&self) -> &Training {
    &self.training
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
  Running(Running),
  SportsWalking(SportsWalking),
  Swimming(Swimming),
}

impl Workout {
  #[must_use]
  pub fn activity(&self) -> ActivityType {
    match self {
      Self::Running(_) => ActivityType::Running,
      Self::SportsWalking(_) => ActivityType::SportsWalking,
      Self::Swimming(_) => ActivityType::Swimming,
    }
  }

  #[must_use]
  pub fn distance(&self) -> f64 {
    match self {
      Self::Running(running) => running.distance(),
      Self::SportsWalking(walking) => walking.distance(),
      Self::Swimming(swimming) => swimming.distance(),
    }
  }

  #[must_use]
  pub fn duration(&self) -> f64 {
    self.training().duration
  }

  #[must_use]
  pub fn info(&self) -> Summary {
    self.summary(self.activity().name())
  }

  #[must_use]
  pub fn mean_speed(&self) -> f64 {
    match self {
      Self::Running(running) => running.mean_speed(),
      Self::SportsWalking(walking) => walking.mean_speed(),
      Self::Swimming(swimming) => swimming.mean_speed(),
    }
  }

  #[must_use]
  pub fn spent_calories(&self) -> f64 {
    match self {
      Self::Running(running) => running.spent_calories(),
      Self::SportsWalking(walking) => walking.spent_calories(),
      Self::Swimming(swimming) => swimming.spent_calories(),
    }
  }

  #[must_use]
  pub fn summary(&self, label: impl Into<String>) -> Summary {
    Summary {
      label: label.into(),
      duration: self.duration(),
      distance: self.distance(),
      speed: self.mean_speed(),
      calories: self.spent_calories(),
    }
  }

  #[must_use]
  pub fn training(&self) -> &Training {
    match self {
      Self::Running(running) => running.training(),
      Self::SportsWalking(walking) => walking.training(),
      Self::Swimming(swimming) => swimming.training(),
    }
  }
}

impl From<Running> for Workout {
  fn from(running: Running) -> Self {
    Self::Running(running)
  }
}

impl From<SportsWalking> for Workout {
  fn from(walking: SportsWalking) -> Self {
    Self::SportsWalking(walking)
  }
}

impl From<Swimming> for Workout {
  fn from(swimming: Swimming) -> Self {
    Self::Swimming(swimming)
  }
}

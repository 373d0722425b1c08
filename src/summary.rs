use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
  pub label: String,
  pub duration: f64,
  pub distance: f64,
  pub speed: f64,
  pub calories: f64,
}

impl Display for Summary {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Activity type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
      self.label, self.duration, self.distance, self.speed, self.calories
    )
  }
}

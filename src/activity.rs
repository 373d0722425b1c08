use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityType {
  Running,
  SportsWalking,
  Swimming,
}

impl ActivityType {
  pub const ALL: [Self; 3] = [Self::Running, Self::SportsWalking, Self::Swimming];

  #[must_use]
  pub fn arity(self) -> usize {
    match self {
      Self::Running => 3,
      Self::SportsWalking => 4,
      Self::Swimming => 5,
    }
  }

  pub(crate) fn color(self) -> Color {
    match self {
      Self::Running => Color::Green,
      Self::SportsWalking => Color::Yellow,
      Self::Swimming => Color::Cyan,
    }
  }

  #[must_use]
  pub fn name(self) -> &'static str {
    match self {
      Self::Running => "Running",
      Self::SportsWalking => "SportsWalking",
      Self::Swimming => "Swimming",
    }
  }

  #[must_use]
  pub fn tag(self) -> &'static str {
    match self {
      Self::Running => "RUN",
      Self::SportsWalking => "WLK",
      Self::Swimming => "SWM",
    }
  }
}

impl Display for ActivityType {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for ActivityType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "RUN" => Ok(Self::Running),
      "SWM" => Ok(Self::Swimming),
      "WLK" => Ok(Self::SportsWalking),
      _ => Err(Error::UnknownActivityType(s.into())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_tags() {
    assert_eq!("RUN".parse::<ActivityType>(), Ok(ActivityType::Running));
    assert_eq!("WLK".parse::<ActivityType>(), Ok(ActivityType::SportsWalking));
    assert_eq!("SWM".parse::<ActivityType>(), Ok(ActivityType::Swimming));
  }

  #[test]
  fn parse_unknown_tag() {
    assert_eq!(
      "XYZ".parse::<ActivityType>(),
      Err(Error::UnknownActivityType("XYZ".into()))
    );
  }

  #[test]
  fn tags_are_case_sensitive() {
    assert_eq!(
      "run".parse::<ActivityType>(),
      Err(Error::UnknownActivityType("run".into()))
    );
  }

  #[test]
  fn tag_round_trip() {
    for activity in ActivityType::ALL {
      assert_eq!(activity.tag().parse::<ActivityType>(), Ok(activity));
    }
  }

  #[test]
  fn display_uses_name() {
    assert_eq!(ActivityType::SportsWalking.to_string(), "SportsWalking");
  }
}

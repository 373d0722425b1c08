use super::*;

#[derive(Debug, Parser)]
#[clap(about = "Summarize workouts from raw sensor readings")]
pub struct Arguments {
  #[clap(long, help = "Disable colored output")]
  no_color: bool,
  #[clap(long, help = "Skip packages that fail to build instead of aborting")]
  skip_invalid: bool,
  #[clap(long, help = "Require weight, height and pool length to be positive")]
  strict: bool,
  #[clap(help = "Activity tag (RUN, WLK or SWM); omit to process the reference packages")]
  tag: Option<String>,
  #[clap(allow_negative_numbers = true, help = "Readings in positional order")]
  readings: Vec<f64>,
}

impl Arguments {
  fn app(self) -> App {
    let packages = match self.tag {
      Some(tag) => vec![(tag, self.readings)],
      None => App::reference_packages(),
    };

    App {
      color: !self.no_color && stdout().is_tty(),
      packages,
      skip_invalid: self.skip_invalid,
      validation: if self.strict {
        Validation::Strict
      } else {
        Validation::Lenient
      },
    }
  }

  pub fn run(self) -> Result<(), anyhow::Error> {
    self.app().run()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_to_reference_packages() {
    let app = Arguments::parse_from(["workout"]).app();

    assert_eq!(app.packages, App::reference_packages());
    assert_eq!(app.validation, Validation::Lenient);
    assert!(!app.skip_invalid);
  }

  #[test]
  fn single_package() {
    let app = Arguments::parse_from(["workout", "RUN", "15000", "1", "75"]).app();

    assert_eq!(app.packages, vec![(String::from("RUN"), vec![15000.0, 1.0, 75.0])]);
  }

  #[test]
  fn negative_readings() {
    let app = Arguments::parse_from(["workout", "RUN", "15000", "-1", "75"]).app();

    assert_eq!(app.packages, vec![(String::from("RUN"), vec![15000.0, -1.0, 75.0])]);
  }

  #[test]
  fn flags() {
    let app = Arguments::parse_from(["workout", "--strict", "--skip-invalid", "--no-color"]).app();

    assert_eq!(app.validation, Validation::Strict);
    assert!(app.skip_invalid);
    assert!(!app.color);
  }
}

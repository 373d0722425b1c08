use super::*;

#[derive(Clone, Debug, Default)]
pub(crate) struct App {
  pub(crate) color: bool,
  pub(crate) packages: Vec<(String, Vec<f64>)>,
  pub(crate) skip_invalid: bool,
  pub(crate) validation: Validation,
}

impl App {
  fn display(&self, workout: &Workout) -> Result<(), anyhow::Error> {
    let summary = workout.info();

    if self.color {
      command!(
        SetForegroundColor(workout.activity().color()),
        Print(&summary),
        ResetColor,
        Print("\n"),
      )?;
    } else {
      println!("{summary}");
    }

    Ok(())
  }

  pub(crate) fn reference_packages() -> Vec<(String, Vec<f64>)> {
    vec![
      ("SWM".into(), vec![720.0, 1.0, 80.0, 25.0, 40.0]),
      ("RUN".into(), vec![15000.0, 1.0, 75.0]),
      ("WLK".into(), vec![9000.0, 1.0, 75.0, 180.0]),
    ]
  }

  pub(crate) fn run(&self) -> Result<(), anyhow::Error> {
    for workout in self.workouts()? {
      self.display(&workout)?;
    }

    Ok(())
  }

  fn workouts(&self) -> Result<Vec<Workout>, anyhow::Error> {
    let mut workouts = Vec::with_capacity(self.packages.len());

    for (i, (tag, readings)) in self.packages.iter().enumerate() {
      match build_with(tag, readings, self.validation) {
        Ok(workout) => workouts.push(workout),
        Err(error) if self.skip_invalid => {
          warn!("skipping package {i} ({tag}): {error}");
        }
        Err(error) => {
          return Err(error).with_context(|| format!("failed to process package {i} ({tag})"));
        }
      }
    }

    Ok(workouts)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reference_packages() {
    let app = App {
      packages: App::reference_packages(),
      ..Default::default()
    };

    let labels = app
      .workouts()
      .unwrap()
      .iter()
      .map(|workout| workout.info().label)
      .collect::<Vec<String>>();

    assert_eq!(labels, ["Swimming", "Running", "SportsWalking"]);
  }

  #[test]
  fn abort_on_invalid_package() {
    let app = App {
      packages: vec![
        ("RUN".into(), vec![15000.0, 1.0, 75.0]),
        ("XYZ".into(), vec![1.0]),
      ],
      ..Default::default()
    };

    let error = app.workouts().unwrap_err();

    assert_eq!(error.to_string(), "failed to process package 1 (XYZ)");

    assert_eq!(
      error.downcast_ref::<Error>(),
      Some(&Error::UnknownActivityType("XYZ".into()))
    );
  }

  #[test]
  fn skip_invalid_packages() {
    let app = App {
      packages: vec![
        ("RUN".into(), vec![1.0, 2.0]),
        ("SWM".into(), vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("WLK".into(), vec![9000.0, 0.0, 75.0, 180.0]),
      ],
      skip_invalid: true,
      ..Default::default()
    };

    let workouts = app.workouts().unwrap();

    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].activity(), ActivityType::Swimming);
  }

  #[test]
  fn strict_validation() {
    let app = App {
      packages: vec![("RUN".into(), vec![15000.0, 1.0, -75.0])],
      validation: Validation::Strict,
      ..Default::default()
    };

    assert!(app.workouts().is_err());

    let app = App {
      validation: Validation::Lenient,
      ..app
    };

    assert!(app.workouts().is_ok());
  }
}

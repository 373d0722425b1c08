pub use {
  activity::ActivityType,
  arguments::Arguments,
  error::Error,
  package::{Validation, build, build_with},
  summary::Summary,
  workout::{Running, SportsWalking, Swimming, Training, Workout},
};

use {
  anyhow::Context,
  app::App,
  clap::Parser,
  crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    tty::IsTty,
  },
  log::{debug, warn},
  std::{
    fmt::{self, Display, Formatter},
    io::stdout,
    str::FromStr,
  },
  thiserror::Error as ThisError,
};

macro_rules! command {
  ($($cmd:expr),+ $(,)?) => {
    { execute!(stdout(), $($cmd),+) }
  };
}

mod activity;
mod app;
mod arguments;
mod error;
mod package;
mod summary;
mod workout;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

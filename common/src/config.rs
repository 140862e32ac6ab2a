use std::path::Path;
use std::str::FromStr;

use crate::KeywordSet;
use crate::Result;

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "schedule.toml";

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct ScheduleConfig {
  #[serde(default)]
  pub keywords: KeywordSet,
  #[serde(default = "default_strip_comments")]
  pub strip_comments: bool,
}

fn default_strip_comments() -> bool {
  true
}

impl Default for ScheduleConfig {
  fn default() -> Self {
    Self {
      keywords: KeywordSet::default(),
      strip_comments: default_strip_comments(),
    }
  }
}

impl ScheduleConfig {
  /// Loads `schedule.toml` from the given directory.
  pub fn load<T>(source_path: T) -> Result<ScheduleConfig>
  where
    T: AsRef<Path>,
  {
    let mut filename = source_path.as_ref().to_path_buf();
    filename.push(CONFIG_FILE_NAME);
    let contents = match std::fs::read_to_string(&filename) {
      Ok(c) => c,
      Err(err) => {
        tracing::error!("Could not read config file `{}`", filename.display());
        return Err(Box::new(err));
      }
    };

    let config: ScheduleConfig = match toml::from_str(&contents) {
      Ok(d) => d,
      Err(err) => {
        tracing::error!("Unable to load data from `{}`", filename.display());
        return Err(Box::new(err));
      }
    };

    Ok(config)
  }
}

impl FromStr for ScheduleConfig {
  type Err = toml::de::Error;
  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    toml::from_str(s)
  }
}

use serde::{Deserialize, Serialize};

pub const DATES: &str = "DATES";
pub const COMPDAT: &str = "COMPDAT";
pub const COMPDATL: &str = "COMPDATL";

/// Ordered set of keywords whose blocks the parser reads. Matching is exact.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

impl Default for KeywordSet {
  fn default() -> Self {
    KeywordSet::new([DATES, COMPDAT, COMPDATL])
  }
}

impl KeywordSet {
  pub fn new<I, S>(keywords: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let mut set = KeywordSet(Vec::new());
    for keyword in keywords {
      set.insert(keyword);
    }
    set
  }

  pub fn insert<S: Into<String>>(&mut self, keyword: S) {
    let keyword = keyword.into();
    if !self.contains(&keyword) {
      self.0.push(keyword);
    }
  }

  pub fn contains(&self, keyword: &str) -> bool {
    self.0.iter().any(|k| k == keyword)
  }

  /// Returns the configured keyword a line introduces, if any.
  pub fn matching(&self, line: &str) -> Option<&str> {
    let line = line.trim();
    self.0.iter().find(|k| *k == line).map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.0.iter().map(String::as_str)
  }
}

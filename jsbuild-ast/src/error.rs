use core::fmt;
use core::fmt::Debug;
use core::fmt::Formatter;
use std::error::Error;
use std::fmt::Display;

/// Failure to load a syntax tree from its JSON serialization.
pub struct LoadError {
  pub message: String,
  pub line: usize,
  pub column: usize,
}

impl LoadError {
  pub fn new(message: impl Into<String>, line: usize, column: usize) -> LoadError {
    LoadError {
      message: message.into(),
      line,
      column,
    }
  }
}

impl From<serde_json::Error> for LoadError {
  fn from(err: serde_json::Error) -> Self {
    LoadError::new(err.to_string(), err.line(), err.column())
  }
}

impl Debug for LoadError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} around [{}:{}]", self, self.line, self.column)
  }
}

impl Display for LoadError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "invalid syntax tree: {}", self.message)
  }
}

impl Error for LoadError {}

pub type LoadResult<T> = Result<T, LoadError>;

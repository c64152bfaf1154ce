use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Position of a construct in the source it was parsed from, as `(line, column)`.
///
/// Lines are 1-based and columns are 0-based, matching what most parsers
/// report. Nodes created after parsing (e.g. from initial bindings) have no
/// real position and use [`Loc::synthetic`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Loc(pub u32, pub u32);

impl Loc {
  pub const fn new(line: u32, column: u32) -> Loc {
    Loc(line, column)
  }

  pub const fn synthetic() -> Loc {
    Loc(0, 0)
  }

  pub fn is_synthetic(&self) -> bool {
    self.0 == 0
  }
}

impl Display for Loc {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.0, self.1)
  }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum BoolOperator {
  And,
  Or,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum BinaryOperator {
  Add,
  Sub,
  Mult,
  MatMult,
  Div,
  Mod,
  Pow,
  LShift,
  RShift,
  BitOr,
  BitXor,
  BitAnd,
  FloorDiv,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum UnaryOperator {
  Invert,
  Not,
  UAdd,
  USub,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CmpOperator {
  Eq,
  NotEq,
  Lt,
  LtE,
  Gt,
  GtE,
  Is,
  IsNot,
  In,
  NotIn,
}

// Display uses the variant name, which is also the serialized form.
macro_rules! display_as_debug {
  ($($t:ty),*) => {
    $(
      impl Display for $t {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
          Debug::fmt(self, f)
        }
      }
    )*
  };
}

display_as_debug!(BoolOperator, BinaryOperator, UnaryOperator, CmpOperator);

use crate::render::field::Field;
use jsbuild_ast::ast::NodeKind;
use jsbuild_ast::loc::Loc;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderErrorKind {
  /// A node kind, operator or sub-feature that has no JavaScript rendering.
  UnsupportedConstruct(String),
  /// A template named a field the node does not have.
  MissingField { kind: NodeKind, field: Field },
  /// A raw read of a field that only has a rendered form.
  RawUnavailable { kind: NodeKind, field: Field },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderError {
  pub kind: RenderErrorKind,
  pub loc: Option<Loc>,
}

impl RenderError {
  pub(crate) fn unsupported(what: impl Into<String>) -> Self {
    Self {
      kind: RenderErrorKind::UnsupportedConstruct(what.into()),
      loc: None,
    }
  }

  pub(crate) fn unsupported_kind(kind: NodeKind) -> Self {
    Self::unsupported(kind.to_string())
  }

  pub(crate) fn missing_field(kind: NodeKind, field: Field) -> Self {
    Self {
      kind: RenderErrorKind::MissingField { kind, field },
      loc: None,
    }
  }

  pub(crate) fn raw_unavailable(kind: NodeKind, field: Field) -> Self {
    Self {
      kind: RenderErrorKind::RawUnavailable { kind, field },
      loc: None,
    }
  }

  // The innermost node wins, so the location points at the offending construct.
  pub(crate) fn with_loc(mut self, loc: Loc) -> Self {
    if self.loc.is_none() && !loc.is_synthetic() {
      self.loc = Some(loc);
    }
    self
  }

  pub fn is_unsupported(&self) -> bool {
    matches!(self.kind, RenderErrorKind::UnsupportedConstruct(_))
  }
}

impl Display for RenderError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.kind {
      RenderErrorKind::UnsupportedConstruct(what) => {
        write!(f, "unsupported operation in JS: {what}")?
      }
      RenderErrorKind::MissingField { kind, field } => {
        write!(f, "{kind} node has no field `{field}`")?
      }
      RenderErrorKind::RawUnavailable { kind, field } => {
        write!(f, "field `{field}` of {kind} node has no raw value")?
      }
    };
    if let Some(loc) = self.loc {
      write!(f, " at {loc}")?;
    }
    Ok(())
  }
}

impl Error for RenderError {}

pub type RenderResult<T> = Result<T, RenderError>;

pub(crate) fn with_node_context<T>(
  loc: Loc,
  f: impl FnOnce() -> RenderResult<T>,
) -> RenderResult<T> {
  f().map_err(|err| err.with_loc(loc))
}

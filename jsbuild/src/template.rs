//! Static formatting rules.
//!
//! A template is JavaScript text with named placeholders: `${field}` is
//! replaced by the field's rendering and `${field:raw}` by its raw value
//! (identifier and attribute names, which must appear verbatim rather than
//! quoted). Templates are parsed once, on first use.

use crate::render::field::Field;
use once_cell::sync::Lazy;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Piece {
  Lit(&'static str),
  Rendered(Field),
  Raw(Field),
}

#[derive(Clone, Debug)]
pub struct Template {
  pieces: Vec<Piece>,
}

impl Template {
  /// Parses template text.
  ///
  /// # Panics
  ///
  /// Templates are fixed program text, so an unterminated placeholder or an
  /// unknown field name is a bug and panics.
  pub fn parse(src: &'static str) -> Template {
    let mut pieces = Vec::new();
    let mut rest = src;
    while let Some(start) = rest.find("${") {
      if start > 0 {
        pieces.push(Piece::Lit(&rest[..start]));
      }
      let after = &rest[start + 2..];
      let end = after
        .find('}')
        .unwrap_or_else(|| panic!("unterminated placeholder in template {src:?}"));
      let placeholder = &after[..end];
      let (name, raw) = match placeholder.strip_suffix(":raw") {
        Some(name) => (name, true),
        None => (placeholder, false),
      };
      let field = Field::from_name(name)
        .unwrap_or_else(|| panic!("unknown field {name:?} in template {src:?}"));
      pieces.push(if raw {
        Piece::Raw(field)
      } else {
        Piece::Rendered(field)
      });
      rest = &after[end + 1..];
    }
    if !rest.is_empty() {
      pieces.push(Piece::Lit(rest));
    }
    Template { pieces }
  }

  pub fn pieces(&self) -> &[Piece] {
    &self.pieces
  }
}

macro_rules! templates {
  ($($name:ident = $src:expr;)*) => {
    $(
      pub static $name: Lazy<Template> = Lazy::new(|| Template::parse($src));
    )*

    #[cfg(test)]
    pub(crate) fn all() -> Vec<&'static Template> {
      vec![$(&*$name),*]
    }
  };
}

templates! {
  RETURN = "return ${value}";
  AUG_ASSIGN = "${target} ${op}= ${value}";
  // JavaScript has no floor-division operator.
  AUG_ASSIGN_FLOOR_DIV = "${target} = Math.floor(${target} / ${value})";
  WHILE = "while (${test}) {\n${body}\n}";
  IF = "if (${test}) {\n${body}\n} else {\n${orelse}\n}";
  RAISE = "throw new Error(${exc})";
  EXPR = "${value}";
  PASS = "";
  BREAK = "break";
  CONTINUE = "continue";
  BIN_OP = "(${left} ${op} ${right})";
  BIN_OP_FLOOR_DIV = "(Math.floor(${left} / ${right}))";
  UNARY_OP = "(${op}${operand})";
  IF_EXP = "((${test}) ? (${body}) : (${orelse}))";
  ATTRIBUTE = "${value}.${attr:raw}";
  SUBSCRIPT = "${value}[${slice}]";
  NAME = "${id:raw}";
  STARRED = "...${value}";
  LIST = "[${elts}]";
}

#[cfg(test)]
mod tests {
  use super::{all, Piece, Template, ATTRIBUTE, WHILE};
  use crate::render::field::Field;

  #[test]
  fn test_all_templates_parse() {
    assert_eq!(all().len(), 19);
  }

  #[test]
  fn test_pieces() {
    assert_eq!(WHILE.pieces(), &[
      Piece::Lit("while ("),
      Piece::Rendered(Field::Test),
      Piece::Lit(") {\n"),
      Piece::Rendered(Field::Body),
      Piece::Lit("\n}"),
    ]);
    assert_eq!(ATTRIBUTE.pieces(), &[
      Piece::Rendered(Field::Value),
      Piece::Lit("."),
      Piece::Raw(Field::Attr),
    ]);
  }

  #[test]
  fn test_empty_template_has_no_pieces() {
    assert!(Template::parse("").pieces().is_empty());
  }

  #[test]
  #[should_panic(expected = "unknown field")]
  fn test_unknown_field_panics() {
    Template::parse("${nope}");
  }
}

use crate::err::{RenderError, RenderResult};
use jsbuild_ast::operator::{BinaryOperator, BoolOperator, CmpOperator, UnaryOperator};

pub fn bool_op(op: BoolOperator) -> &'static str {
  match op {
    BoolOperator::And => "&&",
    BoolOperator::Or => "||",
  }
}

/// Floor division has no operator spelling; its rules use `Math.floor` instead.
pub fn binary_op(op: BinaryOperator) -> RenderResult<&'static str> {
  Ok(match op {
    BinaryOperator::Add => "+",
    BinaryOperator::Sub => "-",
    BinaryOperator::Mult => "*",
    BinaryOperator::Div => "/",
    BinaryOperator::Mod => "%",
    BinaryOperator::Pow => "**",
    BinaryOperator::LShift => "<<",
    BinaryOperator::RShift => ">>",
    BinaryOperator::BitOr => "|",
    BinaryOperator::BitXor => "^",
    BinaryOperator::BitAnd => "&",
    BinaryOperator::MatMult | BinaryOperator::FloorDiv => {
      return Err(RenderError::unsupported(format!("{op} operator")))
    }
  })
}

pub fn unary_op(op: UnaryOperator) -> &'static str {
  match op {
    UnaryOperator::Invert => "~",
    UnaryOperator::Not => "!",
    UnaryOperator::UAdd => "+",
    UnaryOperator::USub => "-",
  }
}

pub fn cmp_op(op: CmpOperator) -> RenderResult<&'static str> {
  Ok(match op {
    CmpOperator::Eq | CmpOperator::Is => "===",
    CmpOperator::NotEq | CmpOperator::IsNot => "!==",
    CmpOperator::Lt => "<",
    CmpOperator::LtE => "<=",
    CmpOperator::Gt => ">",
    CmpOperator::GtE => ">=",
    // JavaScript `in` tests keys, not membership.
    CmpOperator::In | CmpOperator::NotIn => {
      return Err(RenderError::unsupported(format!("{op} operator")))
    }
  })
}

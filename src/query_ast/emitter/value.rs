//! Right-hand operand rendering for comparisons.

use crate::query_ast::ast::{ExprAst, LiteralAst};
use crate::query_ast::errors::{Result, TranslateError};

/// Identifier reserved for "field is missing" checks.
pub const MISSING_SENTINEL: &str = "missing";

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedValue {
    Scalar(String),
    List(Vec<String>),
    /// The bare identifier `missing`; the comparison decides how to reject it.
    Missing,
}

pub fn render_value(expr: &ExprAst) -> Result<RenderedValue> {
    match expr {
        ExprAst::Literal(lit) => render_literal(lit).map(RenderedValue::Scalar),
        ExprAst::Tuple(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match render_value(item)? {
                    RenderedValue::Scalar(s) => out.push(s),
                    RenderedValue::Missing => return Ok(RenderedValue::Missing),
                    RenderedValue::List(_) => return Err(TranslateError::grammar("nested tuple")),
                }
            }
            Ok(RenderedValue::List(out))
        }
        ExprAst::Paren(inner) => render_value(inner),
        ExprAst::Column(parts) if parts.len() == 1 && parts[0] == MISSING_SENTINEL => Ok(RenderedValue::Missing),
        ExprAst::Column(parts) => Err(TranslateError::InvalidComparisonOperand(format!(
            "column `{}` on the right side of a comparison",
            parts.join(".")
        ))),
        ExprAst::FuncCall { name, .. } if expr.is_simple_aggregate() => Err(TranslateError::UnsupportedAggregate(name.clone())),
        ExprAst::FuncCall { name, .. } => Err(TranslateError::grammar(format!("nested function `{name}`"))),
        ExprAst::Logical { .. } | ExprAst::Comparison { .. } => Err(TranslateError::grammar("boolean expression as a value")),
        ExprAst::Range { .. } => Err(TranslateError::grammar("BETWEEN as a value")),
        ExprAst::Raw(text) => Err(TranslateError::grammar(format!("value `{text}`"))),
    }
}

fn render_literal(lit: &LiteralAst) -> Result<String> {
    match lit {
        LiteralAst::String(s) | LiteralAst::Number(s) => Ok(s.clone()),
        LiteralAst::Boolean(b) => Ok(b.to_string()),
        LiteralAst::Null => Err(TranslateError::grammar("NULL comparison")),
    }
}

//! WHERE predicate → selector emission.
//!
//! `a AND b AND c` becomes a single three-element `$and`: a logical node whose
//! immediate parent is the same operator hands its operands up instead of
//! wrapping them. Parentheses are transparent to that decision.

use log::trace;
use serde_json::{Map, Value};

use super::{
    ast::{ExprAst, LogicalOp},
    errors::{Result, TranslateError},
};
use crate::models::enums::LikeUnderscore;

pub mod operators;
pub mod value;

use operators::{SelectorOp, like_to_regex, selector_op};
use value::{RenderedValue, render_value};

/// Per-call recursion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationContext {
    pub top_level: bool,
    /// Kind of the closest enclosing logical node, if any.
    pub parent: Option<LogicalOp>,
}

impl TranslationContext {
    pub fn root() -> Self { Self { top_level: true, parent: None } }

    fn child_of(op: LogicalOp) -> Self { Self { top_level: false, parent: Some(op) } }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// A complete selector object.
    Selector(Value),
    /// Operands to splice into the parent's `$and`/`$or` list.
    Operands(Vec<Value>),
}

pub struct SelectorEmitter {
    like_underscore: LikeUnderscore,
}

impl SelectorEmitter {
    pub fn new(like_underscore: LikeUnderscore) -> Self { Self { like_underscore } }

    /// Translate the root of a WHERE clause into a selector object.
    pub fn emit_where(&self, expr: &ExprAst) -> Result<Value> {
        match self.emit_expr(expr, TranslationContext::root())? {
            Fragment::Selector(v) => Ok(v),
            // root nodes never have a logical parent, so this only guards the type
            Fragment::Operands(items) => Ok(single(LogicalOp::And.keyword(), Value::Array(items))),
        }
    }

    pub fn emit_expr(&self, expr: &ExprAst, ctx: TranslationContext) -> Result<Fragment> {
        trace!("emit {:?} (top_level={}, parent={:?})", expr, ctx.top_level, ctx.parent);
        match expr {
            ExprAst::Logical { op, left, right } => self.emit_logical(*op, left, right, ctx),
            ExprAst::Comparison { op, left, right } => {
                let field = match left.as_ref() {
                    ExprAst::Column(parts) => parts.join("."),
                    other => {
                        return Err(TranslateError::InvalidComparisonOperand(format!(
                            "left side must be a column, got {other:?}"
                        )));
                    }
                };
                let value = match render_value(right)? {
                    RenderedValue::Missing => return Err(TranslateError::MissingFieldUnsupported(field)),
                    other => other,
                };
                let op = selector_op(op)?;
                self.emit_comparison(field, op, value).map(Fragment::Selector)
            }
            ExprAst::Paren(inner) => self.emit_expr(inner, ctx),
            ExprAst::Range { .. } => Err(TranslateError::grammar("BETWEEN")),
            ExprAst::FuncCall { name, .. } => Err(TranslateError::grammar(format!("function `{name}` as a predicate"))),
            ExprAst::Column(parts) => Err(TranslateError::grammar(format!("bare column `{}` as a predicate", parts.join(".")))),
            ExprAst::Literal(_) | ExprAst::Tuple(_) => Err(TranslateError::grammar("literal as a predicate")),
            ExprAst::Raw(text) => Err(TranslateError::grammar(text.clone())),
        }
    }

    fn emit_logical(&self, op: LogicalOp, left: &ExprAst, right: &ExprAst, ctx: TranslationContext) -> Result<Fragment> {
        let mut operands = Vec::new();
        for side in [left, right] {
            match self.emit_expr(side, TranslationContext::child_of(op))? {
                Fragment::Selector(v) => operands.push(v),
                Fragment::Operands(items) => operands.extend(items),
            }
        }
        if !ctx.top_level && ctx.parent == Some(op) {
            return Ok(Fragment::Operands(operands));
        }
        Ok(Fragment::Selector(single(op.keyword(), Value::Array(operands))))
    }

    fn emit_comparison(&self, field: String, op: SelectorOp, value: RenderedValue) -> Result<Value> {
        match (op, value) {
            (SelectorOp::Scalar(kw), RenderedValue::Scalar(s)) => Ok(single(&field, single(kw, Value::String(s)))),
            (SelectorOp::In { negated }, RenderedValue::List(items)) => {
                let list = Value::Array(items.into_iter().map(Value::String).collect());
                let cond = single(&field, single("$in", list));
                Ok(if negated { single("$not", cond) } else { cond })
            }
            (SelectorOp::Regex { negated }, RenderedValue::Scalar(pattern)) => {
                let regex = like_to_regex(&pattern, self.like_underscore);
                let cond = single(&field, single("$regex", Value::String(regex)));
                Ok(if negated { single("not", cond) } else { cond })
            }
            (_, RenderedValue::Missing) => Err(TranslateError::MissingFieldUnsupported(field)),
            (SelectorOp::In { .. }, _) => Err(TranslateError::grammar(format!("IN on `{field}` needs a value list"))),
            (_, _) => Err(TranslateError::grammar(format!("value list compared to `{field}` without IN"))),
        }
    }
}

fn single(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_ast::ast::{ComparisonOp, ExprAst};
    use serde_json::json;

    fn eq(col: &str, v: &str) -> ExprAst { ExprAst::compare(ExprAst::column(col), ComparisonOp::Eq, ExprAst::string(v)) }

    fn emit(expr: &ExprAst) -> Result<Value> { SelectorEmitter::new(LikeUnderscore::AnyChar).emit_where(expr) }

    #[test]
    fn and_chain_flattens() {
        let expr = ExprAst::and(ExprAst::and(eq("a", "1"), eq("b", "2")), eq("c", "3"));
        assert_eq!(
            emit(&expr).unwrap(),
            json!({"$and": [{"a": {"$eq": "1"}}, {"b": {"$eq": "2"}}, {"c": {"$eq": "3"}}]})
        );
    }

    #[test]
    fn parenthesized_same_kind_still_flattens() {
        let expr = ExprAst::or(eq("a", "1"), ExprAst::paren(ExprAst::or(eq("b", "2"), eq("c", "3"))));
        assert_eq!(
            emit(&expr).unwrap(),
            json!({"$or": [{"a": {"$eq": "1"}}, {"b": {"$eq": "2"}}, {"c": {"$eq": "3"}}]})
        );
    }

    #[test]
    fn mixed_kinds_keep_their_boundary() {
        let expr = ExprAst::and(eq("a", "1"), ExprAst::paren(ExprAst::or(eq("b", "2"), eq("c", "3"))));
        assert_eq!(
            emit(&expr).unwrap(),
            json!({"$and": [{"a": {"$eq": "1"}}, {"$or": [{"b": {"$eq": "2"}}, {"c": {"$eq": "3"}}]}]})
        );
    }

    #[test]
    fn nested_child_flattening_returns_operands() {
        let emitter = SelectorEmitter::new(LikeUnderscore::AnyChar);
        let expr = ExprAst::and(eq("a", "1"), eq("b", "2"));
        let frag = emitter.emit_expr(&expr, TranslationContext::child_of(LogicalOp::And)).unwrap();
        assert_eq!(frag, Fragment::Operands(vec![json!({"a": {"$eq": "1"}}), json!({"b": {"$eq": "2"}})]));
        let frag = emitter.emit_expr(&expr, TranslationContext::child_of(LogicalOp::Or)).unwrap();
        assert!(matches!(frag, Fragment::Selector(_)));
    }

    #[test]
    fn compound_column_joins_with_dot() {
        let expr = ExprAst::compare(ExprAst::column("addr.city"), ComparisonOp::NotEq, ExprAst::string("x"));
        assert_eq!(emit(&expr).unwrap(), json!({"addr.city": {"$ne": "x"}}));
    }

    #[test]
    fn like_and_not_like() {
        let like = ExprAst::compare(ExprAst::column("name"), ComparisonOp::Like, ExprAst::string("%ab_%"));
        assert_eq!(emit(&like).unwrap(), json!({"name": {"$regex": ".*ab..*"}}));
        let literal = SelectorEmitter::new(LikeUnderscore::Literal).emit_where(&like).unwrap();
        assert_eq!(literal, json!({"name": {"$regex": ".*ab_.*"}}));
        let not_like = ExprAst::compare(ExprAst::column("name"), ComparisonOp::NotLike, ExprAst::string("x%"));
        assert_eq!(emit(&not_like).unwrap(), json!({"not": {"name": {"$regex": "x.*"}}}));
    }

    #[test]
    fn first_error_short_circuits() {
        let bad_left = ExprAst::compare(ExprAst::string("x"), ComparisonOp::Eq, ExprAst::string("y"));
        let bad_right = ExprAst::compare(ExprAst::column("a"), ComparisonOp::Eq, ExprAst::column("missing"));
        let err = emit(&ExprAst::and(bad_left, bad_right)).unwrap_err();
        assert!(matches!(err, TranslateError::InvalidComparisonOperand(_)));
    }

    #[test]
    fn right_operand_is_checked_before_operator() {
        let col_rhs = ExprAst::compare(ExprAst::column("a"), ComparisonOp::Other("REGEXP".into()), ExprAst::column("b"));
        assert!(matches!(emit(&col_rhs), Err(TranslateError::InvalidComparisonOperand(_))));
        let missing_rhs = ExprAst::compare(ExprAst::column("a"), ComparisonOp::Other("ILIKE".into()), ExprAst::column("missing"));
        assert_eq!(emit(&missing_rhs), Err(TranslateError::MissingFieldUnsupported("a".into())));
        let literal_rhs = ExprAst::compare(ExprAst::column("a"), ComparisonOp::Other("ILIKE".into()), ExprAst::string("x"));
        assert_eq!(emit(&literal_rhs), Err(TranslateError::UnsupportedOperator("ILIKE".into())));
    }

    #[test]
    fn shape_mismatches_are_rejected() {
        let in_scalar = ExprAst::compare(ExprAst::column("a"), ComparisonOp::In, ExprAst::string("x"));
        assert!(matches!(emit(&in_scalar), Err(TranslateError::UnsupportedGrammar(_))));
        let eq_tuple = ExprAst::compare(ExprAst::column("a"), ComparisonOp::Eq, ExprAst::Tuple(vec![ExprAst::string("x")]));
        assert!(matches!(emit(&eq_tuple), Err(TranslateError::UnsupportedGrammar(_))));
        assert!(matches!(emit(&ExprAst::column("flag")), Err(TranslateError::UnsupportedGrammar(_))));
    }
}

use crate::models::enums::LikeUnderscore;
use crate::query_ast::ast::ComparisonOp;
use crate::query_ast::errors::{Result, TranslateError};

/// Selector-side shape of a SQL comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorOp {
    /// `{"field": {"<kw>": value}}`
    Scalar(&'static str),
    /// `{"field": {"$in": [..]}}`, optionally wrapped in `$not`
    In { negated: bool },
    /// `{"field": {"$regex": pattern}}`, optionally wrapped in `not`
    Regex { negated: bool },
}

pub fn selector_op(op: &ComparisonOp) -> Result<SelectorOp> {
    Ok(match op {
        ComparisonOp::Eq => SelectorOp::Scalar("$eq"),
        ComparisonOp::NotEq => SelectorOp::Scalar("$ne"),
        ComparisonOp::Gt => SelectorOp::Scalar("$gt"),
        ComparisonOp::GtEq => SelectorOp::Scalar("$gte"),
        ComparisonOp::Lt => SelectorOp::Scalar("$lt"),
        ComparisonOp::LtEq => SelectorOp::Scalar("$lte"),
        ComparisonOp::In => SelectorOp::In { negated: false },
        ComparisonOp::NotIn => SelectorOp::In { negated: true },
        ComparisonOp::Like => SelectorOp::Regex { negated: false },
        ComparisonOp::NotLike => SelectorOp::Regex { negated: true },
        ComparisonOp::Other(raw) => return Err(TranslateError::UnsupportedOperator(raw.clone())),
    })
}

/// Rewrite SQL LIKE wildcards into a regex. Other regex metacharacters pass through untouched.
pub fn like_to_regex(pattern: &str, underscore: LikeUnderscore) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    for ch in pattern.chars() {
        match ch {
            '%' => out.push_str(".*"),
            '_' if underscore == LikeUnderscore::AnyChar => out.push('.'),
            c => out.push(c),
        }
    }
    out
}

//! SELECT-level assembly: source, selector, sort, skip/limit.

use log::debug;

use super::{
    ast::{ExprAst, LiteralAst, SelectAst},
    emitter::SelectorEmitter,
    errors::{Result, TranslateError},
};
use crate::config::TranslateOptions;
use crate::models::enums::SortDirection;
use crate::models::structs::{QueryDocument, SortSpec, Translation};

pub fn translate_select(select: &SelectAst, options: &TranslateOptions) -> Result<Translation> {
    let collection = match select.sources.as_slice() {
        [only] => only.name(),
        many => return Err(TranslateError::MultipleSources(many.len())),
    };

    let mut document = QueryDocument::default();

    if let Some(pred) = &select.selection {
        let emitter = SelectorEmitter::new(options.like_underscore);
        document.selector = Some(emitter.emit_where(pred)?);
    }

    if !select.order_by.is_empty() {
        let mut sort = Vec::with_capacity(select.order_by.len());
        for item in &select.order_by {
            sort.push(SortSpec::new(sort_key(&item.expr)?, SortDirection::from_asc(item.asc)));
        }
        document.sort = Some(sort);
    }

    if select.limit.is_some() || select.offset.is_some() {
        document.skip = Some(match &select.offset {
            Some(o) => integer_literal(o, "OFFSET")?,
            None => 0,
        });
        document.limit = select.limit.as_ref().map(|l| integer_literal(l, "LIMIT")).transpose()?;
    }

    debug!(
        "translated select on `{}`: selector={}, sort={}, skip={:?}, limit={:?}",
        collection,
        document.selector.is_some(),
        document.sort.as_ref().map_or(0, Vec::len),
        document.skip,
        document.limit
    );
    Ok(Translation { document, collection })
}

fn sort_key(expr: &ExprAst) -> Result<String> {
    match expr {
        ExprAst::Column(parts) => Ok(parts.join(".")),
        ExprAst::Paren(inner) => sort_key(inner),
        other => Err(TranslateError::grammar(format!("ORDER BY on {other:?}"))),
    }
}

fn integer_literal(expr: &ExprAst, clause: &str) -> Result<u64> {
    match expr {
        ExprAst::Literal(LiteralAst::Number(n)) => n
            .parse::<u64>()
            .map_err(|_| TranslateError::grammar(format!("{clause} {n} is not a non-negative integer"))),
        other => Err(TranslateError::grammar(format!("{clause} must be an integer literal, got {other:?}"))),
    }
}

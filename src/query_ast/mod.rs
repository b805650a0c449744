//! SQL SELECT → document selector translation.
//!
//! Scope: one SELECT over one source; WHERE becomes a `$and`/`$or` selector tree,
//! ORDER BY becomes `sort`, LIMIT/OFFSET become `limit`/`skip`.
//! No joins, subqueries, aggregates or BETWEEN; those are rejected, not approximated.

pub mod ast;
pub mod emitter;
pub mod errors;
pub mod parser;
pub mod statement;

pub use errors::*;

use log::debug;

use crate::config::TranslateOptions;
use crate::models::structs::Translation;

/// Translate raw SQL with default options.
pub fn translate(sql: &str) -> Result<Translation> {
    translate_with(sql, &TranslateOptions::default())
}

/// Translate raw SQL (expected: a single SELECT) into a query document plus collection name.
pub fn translate_with(sql: &str, options: &TranslateOptions) -> Result<Translation> {
    debug!("translating with {:?}: {}", options.dialect, sql);
    let select = parser::parse_single_select(sql, options.dialect)?;
    statement::translate_select(&select, options)
}

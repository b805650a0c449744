#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("sql syntax error: {0}")] SqlSyntaxError(String),
    #[error("unsupported statement kind: {0}")] UnsupportedStatementKind(String),
    #[error("expected exactly one source table, found {0}")] MultipleSources(usize),
    #[error("unsupported grammar: {0}")] UnsupportedGrammar(String),
    #[error("unsupported operator: {0}")] UnsupportedOperator(String),
    #[error("unsupported aggregate function: {0}")] UnsupportedAggregate(String),
    #[error("invalid comparison operand: {0}")] InvalidComparisonOperand(String),
    #[error("comparison against `missing` is not supported (field `{0}`)")] MissingFieldUnsupported(String),
}

pub type Result<T> = std::result::Result<T, TranslateError>;

impl TranslateError {
    pub(crate) fn grammar(what: impl Into<String>) -> Self { TranslateError::UnsupportedGrammar(what.into()) }
}

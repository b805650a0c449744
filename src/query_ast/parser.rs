use super::{
    ast::{ComparisonOp, ExprAst, LiteralAst, LogicalOp, OrderByExprAst, SelectAst, TableRefAst},
    errors::{Result, TranslateError},
};
use crate::models::enums::SqlDialectKind;
use log::trace;
use sqlparser::ast as sq;
use sqlparser::dialect::{Dialect, GenericDialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect};
use sqlparser::parser::Parser;

fn dialect_for(kind: SqlDialectKind) -> Box<dyn Dialect> {
    match kind {
        SqlDialectKind::Generic => Box::new(GenericDialect {}),
        SqlDialectKind::MySQL => Box::new(MySqlDialect {}),
        SqlDialectKind::PostgreSQL => Box::new(PostgreSqlDialect {}),
        SqlDialectKind::SQLite => Box::new(SQLiteDialect {}),
    }
}

/// Parse raw SQL (expected: exactly one SELECT) into a [`SelectAst`].
pub fn parse_single_select(sql: &str, dialect: SqlDialectKind) -> Result<SelectAst> {
    let dialect = dialect_for(dialect);
    let ast = Parser::parse_sql(dialect.as_ref(), sql).map_err(|e| TranslateError::SqlSyntaxError(e.to_string()))?;
    match ast.as_slice() {
        [] => Err(TranslateError::SqlSyntaxError("no statement found".into())),
        [sq::Statement::Query(q)] => convert_query(q),
        [other] => Err(TranslateError::UnsupportedStatementKind(statement_keyword(other))),
        _ => Err(TranslateError::UnsupportedStatementKind(format!("{} statements in one input", ast.len()))),
    }
}

fn statement_keyword(stmt: &sq::Statement) -> String {
    stmt.to_string()
        .split_whitespace()
        .next()
        .map(|s| s.to_ascii_uppercase())
        .unwrap_or_else(|| "unknown".into())
}

fn convert_query(q: &sq::Query) -> Result<SelectAst> {
    if q.with.is_some() { return Err(TranslateError::grammar("WITH clause")); }
    let sel = match q.body.as_ref() {
        sq::SetExpr::Select(sel) => sel,
        other => return Err(TranslateError::grammar(format!("query body `{other}`"))),
    };

    match &sel.group_by {
        sq::GroupByExpr::Expressions(exprs, _) if exprs.is_empty() => {}
        _ => return Err(TranslateError::grammar("GROUP BY")),
    }
    if sel.having.is_some() { return Err(TranslateError::grammar("HAVING")); }

    // FROM + JOIN chain; every relation counts as a source
    let mut sources = Vec::new();
    for twj in &sel.from {
        sources.push(convert_table_factor(&twj.relation)?);
        for join in &twj.joins { sources.push(convert_table_factor(&join.relation)?); }
    }

    let selection = sel.selection.as_ref().map(convert_expr);

    let mut order_by = Vec::new();
    if let Some(ob) = &q.order_by {
        for obe in &ob.exprs { order_by.push(OrderByExprAst { expr: convert_expr(&obe.expr), asc: obe.asc.unwrap_or(true) }); }
    }

    let limit = q.limit.as_ref().map(convert_expr);
    let offset = q.offset.as_ref().map(|o| convert_expr(&o.value));

    trace!("parsed select: {} source(s), where={}, {} order term(s)", sources.len(), selection.is_some(), order_by.len());
    Ok(SelectAst { sources, selection, order_by, limit, offset })
}

fn convert_table_factor(tf: &sq::TableFactor) -> Result<TableRefAst> {
    match tf {
        sq::TableFactor::Table { name, args: Some(_), .. } => Err(TranslateError::grammar(format!("table function `{name}` in FROM"))),
        sq::TableFactor::Table { name, .. } => Ok(TableRefAst { parts: name.0.iter().map(|id| id.value.clone()).collect() }),
        sq::TableFactor::Derived { .. } => Err(TranslateError::grammar("subquery in FROM")),
        other => Err(TranslateError::grammar(format!("table reference `{other}`"))),
    }
}

fn convert_binary_op(op: &sq::BinaryOperator) -> ComparisonOp {
    match op {
        sq::BinaryOperator::Eq => ComparisonOp::Eq,
        sq::BinaryOperator::NotEq => ComparisonOp::NotEq,
        sq::BinaryOperator::Gt => ComparisonOp::Gt,
        sq::BinaryOperator::GtEq => ComparisonOp::GtEq,
        sq::BinaryOperator::Lt => ComparisonOp::Lt,
        sq::BinaryOperator::LtEq => ComparisonOp::LtEq,
        other => ComparisonOp::Other(other.to_string()),
    }
}

fn negatable(negated: bool, op: &str) -> ComparisonOp {
    ComparisonOp::Other(if negated { format!("NOT {op}") } else { op.to_string() })
}

pub(crate) fn convert_expr(e: &sq::Expr) -> ExprAst {
    match e {
        sq::Expr::Identifier(id) => ExprAst::Column(vec![id.value.clone()]),
        sq::Expr::CompoundIdentifier(parts) => ExprAst::Column(parts.iter().map(|p| p.value.clone()).collect()),
        sq::Expr::Value(v) => convert_value(v).unwrap_or_else(|| ExprAst::Raw(e.to_string())),
        sq::Expr::BinaryOp { left, op, right } => {
            let (left, right) = (Box::new(convert_expr(left)), Box::new(convert_expr(right)));
            match op {
                sq::BinaryOperator::And => ExprAst::Logical { op: LogicalOp::And, left, right },
                sq::BinaryOperator::Or => ExprAst::Logical { op: LogicalOp::Or, left, right },
                other => ExprAst::Comparison { op: convert_binary_op(other), left, right },
            }
        }
        sq::Expr::Nested(inner) => ExprAst::Paren(Box::new(convert_expr(inner))),
        sq::Expr::Between { expr, negated, low, high } => ExprAst::Range {
            expr: Box::new(convert_expr(expr)),
            negated: *negated,
            low: Box::new(convert_expr(low)),
            high: Box::new(convert_expr(high)),
        },
        sq::Expr::InList { expr, list, negated } => ExprAst::Comparison {
            op: if *negated { ComparisonOp::NotIn } else { ComparisonOp::In },
            left: Box::new(convert_expr(expr)),
            right: Box::new(ExprAst::Tuple(list.iter().map(convert_expr).collect())),
        },
        // ESCAPE changes which wildcards are literal
        sq::Expr::Like { escape_char: Some(_), .. } => ExprAst::Raw(format!("LIKE ... ESCAPE in `{e}`")),
        sq::Expr::Like { negated, expr, pattern, .. } => ExprAst::Comparison {
            op: if *negated { ComparisonOp::NotLike } else { ComparisonOp::Like },
            left: Box::new(convert_expr(expr)),
            right: Box::new(convert_expr(pattern)),
        },
        sq::Expr::ILike { negated, expr, pattern, .. } => ExprAst::Comparison {
            op: negatable(*negated, "ILIKE"),
            left: Box::new(convert_expr(expr)),
            right: Box::new(convert_expr(pattern)),
        },
        sq::Expr::SimilarTo { negated, expr, pattern, .. } => ExprAst::Comparison {
            op: negatable(*negated, "SIMILAR TO"),
            left: Box::new(convert_expr(expr)),
            right: Box::new(convert_expr(pattern)),
        },
        sq::Expr::RLike { negated, expr, pattern, .. } => ExprAst::Comparison {
            op: negatable(*negated, "REGEXP"),
            left: Box::new(convert_expr(expr)),
            right: Box::new(convert_expr(pattern)),
        },
        sq::Expr::Tuple(items) => ExprAst::Tuple(items.iter().map(convert_expr).collect()),
        sq::Expr::Function(func) => {
            let mut args = Vec::new();
            if let sq::FunctionArguments::List(list) = &func.args {
                for a in &list.args {
                    match a {
                        sq::FunctionArg::Unnamed(sq::FunctionArgExpr::Expr(ex)) => args.push(convert_expr(ex)),
                        other => args.push(ExprAst::Raw(other.to_string())),
                    }
                }
            }
            ExprAst::FuncCall { name: func.name.to_string(), args }
        }
        // -5 arrives as a unary op over a number literal; fold it back
        sq::Expr::UnaryOp { op, expr } => match (op, expr.as_ref()) {
            (sq::UnaryOperator::Minus, sq::Expr::Value(sq::Value::Number(n, _))) => ExprAst::Literal(LiteralAst::Number(format!("-{n}"))),
            (sq::UnaryOperator::Plus, sq::Expr::Value(sq::Value::Number(n, _))) => ExprAst::Literal(LiteralAst::Number(n.clone())),
            _ => ExprAst::Raw(e.to_string()),
        },
        _ => ExprAst::Raw(e.to_string()),
    }
}

fn convert_value(v: &sq::Value) -> Option<ExprAst> {
    let lit = match v {
        sq::Value::Number(n, _) => LiteralAst::Number(n.clone()),
        sq::Value::SingleQuotedString(s) | sq::Value::DoubleQuotedString(s) => LiteralAst::String(s.clone()),
        sq::Value::Boolean(b) => LiteralAst::Boolean(*b),
        sq::Value::Null => LiteralAst::Null,
        _ => return None,
    };
    Some(ExprAst::Literal(lit))
}

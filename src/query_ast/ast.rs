//! Thin wrapper structures around the sqlparser AST.
//! The parser normalizes into these so the translators can match exhaustively.

#[derive(Debug, Clone, PartialEq)]
pub struct SelectAst {
    pub sources: Vec<TableRefAst>,
    pub selection: Option<ExprAst>,
    pub order_by: Vec<OrderByExprAst>,
    pub limit: Option<ExprAst>,
    pub offset: Option<ExprAst>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRefAst {
    /// Identifier parts with quoting already removed.
    pub parts: Vec<String>,
}

impl TableRefAst {
    pub fn name(&self) -> String { self.parts.join(".") }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExprAst {
    pub expr: ExprAst,
    pub asc: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp { And, Or }

impl LogicalOp {
    pub fn keyword(self) -> &'static str {
        match self {
            LogicalOp::And => "$and",
            LogicalOp::Or => "$or",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonOp {
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
    In,
    NotIn,
    Like,
    NotLike,
    /// Anything the parser accepted that has no selector counterpart (`ILIKE`, `<=>`, `+`, ...).
    Other(String),
}

impl std::fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::NotEq => "!=",
            ComparisonOp::Gt => ">",
            ComparisonOp::GtEq => ">=",
            ComparisonOp::Lt => "<",
            ComparisonOp::LtEq => "<=",
            ComparisonOp::In => "in",
            ComparisonOp::NotIn => "not in",
            ComparisonOp::Like => "like",
            ComparisonOp::NotLike => "not like",
            ComparisonOp::Other(op) => op.as_str(),
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralAst {
    String(String),
    Number(String),
    Boolean(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprAst {
    Logical { op: LogicalOp, left: Box<ExprAst>, right: Box<ExprAst> },
    Comparison { op: ComparisonOp, left: Box<ExprAst>, right: Box<ExprAst> },
    Paren(Box<ExprAst>),
    Range { expr: Box<ExprAst>, negated: bool, low: Box<ExprAst>, high: Box<ExprAst> },
    /// Column path, quoting removed (`a`.`b` => ["a", "b"]).
    Column(Vec<String>),
    Literal(LiteralAst),
    Tuple(Vec<ExprAst>),
    FuncCall { name: String, args: Vec<ExprAst> },
    // Fallback for shapes with no translation; keeps the SQL text for error messages.
    Raw(String),
}

impl ExprAst {
    pub fn and(left: ExprAst, right: ExprAst) -> Self {
        ExprAst::Logical { op: LogicalOp::And, left: Box::new(left), right: Box::new(right) }
    }

    pub fn or(left: ExprAst, right: ExprAst) -> Self {
        ExprAst::Logical { op: LogicalOp::Or, left: Box::new(left), right: Box::new(right) }
    }

    pub fn compare(left: ExprAst, op: ComparisonOp, right: ExprAst) -> Self {
        ExprAst::Comparison { op, left: Box::new(left), right: Box::new(right) }
    }

    pub fn column(name: &str) -> Self {
        ExprAst::Column(name.split('.').map(str::to_string).collect())
    }

    pub fn string(s: &str) -> Self { ExprAst::Literal(LiteralAst::String(s.to_string())) }

    pub fn number(n: &str) -> Self { ExprAst::Literal(LiteralAst::Number(n.to_string())) }

    pub fn paren(inner: ExprAst) -> Self { ExprAst::Paren(Box::new(inner)) }

    pub fn is_simple_aggregate(&self) -> bool {
        match self {
            ExprAst::FuncCall { name, .. } => is_aggregate_name(name),
            _ => false,
        }
    }
}

pub fn is_aggregate_name(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "count" | "sum" | "avg" | "min" | "max" | "group_concat" | "string_agg" | "array_agg"
    )
}

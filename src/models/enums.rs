use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// SQL dialect handed to sqlparser.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialectKind {
    #[default]
    Generic,
    MySQL,
    PostgreSQL,
    SQLite,
}

impl FromStr for SqlDialectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" | "ansi" => Ok(Self::Generic),
            "mysql" | "mariadb" => Ok(Self::MySQL),
            "postgres" | "postgresql" | "pg" => Ok(Self::PostgreSQL),
            "sqlite" => Ok(Self::SQLite),
            other => Err(format!("unknown sql dialect `{other}`")),
        }
    }
}

/// How the single-character LIKE wildcard `_` lands in the regex.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "snake_case")]
pub enum LikeUnderscore {
    /// `_` becomes `.`
    #[default]
    AnyChar,
    /// `_` is kept as a literal underscore
    Literal,
}

impl FromStr for LikeUnderscore {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any_char" | "anychar" | "wildcard" => Ok(Self::AnyChar),
            "literal" => Ok(Self::Literal),
            other => Err(format!("unknown LIKE underscore mode `{other}`")),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_asc(asc: bool) -> Self {
        if asc { SortDirection::Asc } else { SortDirection::Desc }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::models::enums::{LikeUnderscore, SqlDialectKind};

/// Environment variable selecting the sqlparser dialect.
pub const DIALECT_ENV: &str = "SQLDOC_DIALECT";
/// Environment variable selecting how LIKE `_` is translated.
pub const LIKE_UNDERSCORE_ENV: &str = "SQLDOC_LIKE_UNDERSCORE";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateOptions {
    pub dialect: SqlDialectKind,
    pub like_underscore: LikeUnderscore,
}

impl TranslateOptions {
    pub fn with_dialect(mut self, dialect: SqlDialectKind) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_like_underscore(mut self, mode: LikeUnderscore) -> Self {
        self.like_underscore = mode;
        self
    }

    /// Load options from a JSON object; missing keys keep their defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Defaults overridden by `SQLDOC_DIALECT` / `SQLDOC_LIKE_UNDERSCORE`.
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut opts = Self::default();
        if let Some(raw) = lookup(DIALECT_ENV) {
            match raw.parse() {
                Ok(d) => opts.dialect = d,
                Err(e) => warn!("ignoring {}: {}", DIALECT_ENV, e),
            }
        }
        if let Some(raw) = lookup(LIKE_UNDERSCORE_ENV) {
            match raw.parse() {
                Ok(m) => opts.like_underscore = m,
                Err(e) => warn!("ignoring {}: {}", LIKE_UNDERSCORE_ENV, e),
            }
        }
        info!("translate options: dialect={:?}, like_underscore={:?}", opts.dialect, opts.like_underscore);
        opts
    }
}

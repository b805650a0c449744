//! Translate simple SQL `SELECT` statements into document-store queries.
//!
//! ```
//! let out = sqldoc::translate("SELECT * FROM users WHERE age >= 21 ORDER BY name LIMIT 5").unwrap();
//! assert_eq!(out.collection, "users");
//! assert_eq!(
//!     out.document.to_json_string().unwrap(),
//!     r#"{"selector":{"age":{"$gte":"21"}},"sort":[{"name":"asc"}],"skip":"0","limit":"5"}"#
//! );
//! ```

pub mod config;
pub mod models;
pub mod query_ast;

pub use config::TranslateOptions;
pub use models::enums::{LikeUnderscore, SortDirection, SqlDialectKind};
pub use models::structs::{QueryDocument, SortSpec, Translation};
pub use query_ast::{Result, TranslateError, translate, translate_with};

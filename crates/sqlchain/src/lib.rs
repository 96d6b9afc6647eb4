//! # sqlchain
//!
//! A fluent builder that turns chained method calls into one line of SQL text.
//!
//! ## Features
//!
//! - **One builder, four statements**: SELECT, INSERT, UPDATE and DELETE share
//!   the same state; the terminal call decides which is rendered
//! - **Checked WHERE**: operators and boolean connectors are validated
//! - **Two renderers**: inline literals ([`StatementBuilder::render`]) or
//!   placeholders plus bound values ([`StatementBuilder::build`])
//! - **Pluggable emit**: terminal calls hand the text to a [`StatementSink`]
//!   (`tracing` by default) and return it
//!
//! ## Usage
//!
//! ```rust
//! use sqlchain::{Operator, table};
//!
//! // INSERT
//! let sql = table("users")
//!     .insert_values([("id", 1)])
//!     .set("username", "ngt")
//!     .insert()?;
//! assert_eq!(sql, "insert into `users` (`id`, `username`) values (1, 'ngt')\n");
//!
//! // UPDATE
//! let sql = table("users")
//!     .set("username", "benito")
//!     .where_eq("id", 1)
//!     .update()?;
//! assert_eq!(sql, "update `users` set `username` = 'benito' where id = 1\n");
//!
//! // DELETE
//! let sql = table("users").where_eq("username", "benito").delete()?;
//! assert_eq!(sql, "delete from `users` where username = benito\n");
//!
//! // SELECT
//! let sql = table("users")
//!     .where_op("age", ">=", 18)?
//!     .or_where("name", Operator::Like, "b%")
//!     .limit(10)
//!     .fetch(["id", "name"])?;
//! assert_eq!(
//!     sql,
//!     "select id, name from `users` where age >= 18 or name like b% limit 10\n"
//! );
//! # Ok::<(), sqlchain::BuilderError>(())
//! ```
//!
//! ## Placeholders
//!
//! ```rust
//! use sqlchain::{StatementKind, table};
//!
//! let built = table("users")
//!     .where_eq("username", "benito")
//!     .with_mode(StatementKind::Delete)
//!     .build();
//! assert_eq!(built.sql(), "delete from `users` where username = ?");
//! assert_eq!(built.params().len(), 1);
//! ```

pub mod builder;
pub mod clause;
pub mod columns;
pub mod config;
pub mod error;
pub mod ident;
pub mod sink;
pub mod value;

pub use builder::{BuiltStatement, StatementBuilder};
pub use clause::{Connector, Direction, Operator, OrderClause, WhereClause};
pub use columns::Columns;
pub use config::{PlaceholderStyle, RenderConfig};
pub use error::{BuildResult, BuilderError};
pub use sink::{NoopSink, StatementKind, StatementSink, StdoutSink};
pub use value::Value;

#[cfg(feature = "tracing")]
pub use sink::TracingSink;

/// Start a builder for the given table.
///
/// # Example
/// ```rust
/// let sql = sqlchain::table("users").render();
/// assert_eq!(sql, "select * from `users`\n");
/// ```
pub fn table(name: impl Into<String>) -> StatementBuilder {
    StatementBuilder::new().table(name)
}

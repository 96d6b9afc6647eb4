//! Destinations for statements emitted by terminal operations.
//!
//! `insert`, `update`, `delete` and `fetch` render the statement, hand it to
//! the builder's [`StatementSink`], then return the text to the caller.
//! `render` and `build` never emit.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// The kind of statement being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatementKind {
    /// SELECT query
    #[default]
    Select,
    /// INSERT statement
    Insert,
    /// UPDATE statement
    Update,
    /// DELETE statement
    Delete,
}

impl StatementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Select => "select",
            StatementKind::Insert => "insert",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
        }
    }
}

impl Serialize for StatementKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives every statement emitted by a terminal operation.
pub trait StatementSink: fmt::Debug + Send + Sync {
    /// Called once per successful terminal operation with the rendered text.
    fn emit(&self, kind: StatementKind, sql: &str);
}

impl<S: StatementSink + ?Sized> StatementSink for Arc<S> {
    fn emit(&self, kind: StatementKind, sql: &str) {
        (**self).emit(kind, sql)
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl StatementSink for NoopSink {
    fn emit(&self, _kind: StatementKind, _sql: &str) {}
}

/// Writes each statement to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StatementSink for StdoutSink {
    fn emit(&self, _kind: StatementKind, sql: &str) {
        print!("{sql}");
    }
}

/// The sink a new builder starts with.
#[cfg(feature = "tracing")]
pub(crate) fn default_sink() -> Arc<dyn StatementSink> {
    Arc::new(TracingSink::default())
}

/// The sink a new builder starts with.
#[cfg(not(feature = "tracing"))]
pub(crate) fn default_sink() -> Arc<dyn StatementSink> {
    Arc::new(NoopSink)
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(feature = "tracing")]
pub use tracing_sink::TracingSink;

#[cfg(feature = "tracing")]
mod tracing_sink {
    use super::{StatementKind, StatementSink, truncate_sql_bytes};
    use tracing::Level;

    /// A `tracing`-based sink that logs each emitted statement.
    ///
    /// Events go to target `sqlchain.sql` with `kind` and `sql` fields.
    ///
    /// Enable via the crate feature: `sqlchain = { features = ["tracing"] }`.
    #[derive(Debug, Clone)]
    pub struct TracingSink {
        /// Tracing event level to emit at.
        pub level: Level,
        /// Truncate long SQL strings (in bytes). `None` means no truncation.
        pub max_sql_length: Option<usize>,
    }

    impl Default for TracingSink {
        fn default() -> Self {
            Self {
                level: Level::DEBUG,
                max_sql_length: Some(200),
            }
        }
    }

    impl TracingSink {
        /// Create a new sink with defaults.
        pub fn new() -> Self {
            Self::default()
        }

        /// Override the tracing event level.
        pub fn level(mut self, level: Level) -> Self {
            self.level = level;
            self
        }

        /// Set maximum SQL length to display.
        pub fn max_sql_length(mut self, len: usize) -> Self {
            self.max_sql_length = Some(len);
            self
        }

        /// Disable SQL truncation.
        pub fn no_truncate(mut self) -> Self {
            self.max_sql_length = None;
            self
        }

        pub(crate) fn truncate_sql(&self, sql: &str) -> String {
            let sql = sql.trim_end_matches('\n');
            match self.max_sql_length {
                Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
                _ => sql.to_string(),
            }
        }
    }

    impl StatementSink for TracingSink {
        fn emit(&self, kind: StatementKind, sql: &str) {
            /// Dispatch a tracing event at a runtime-determined level.
            macro_rules! emit_at_level {
                ($level:expr, $($field:tt)*) => {
                    match $level {
                        Level::ERROR => tracing::error!($($field)*),
                        Level::WARN  => tracing::warn!($($field)*),
                        Level::INFO  => tracing::info!($($field)*),
                        Level::DEBUG => tracing::debug!($($field)*),
                        Level::TRACE => tracing::trace!($($field)*),
                    }
                };
            }

            let sql = self.truncate_sql(sql);
            emit_at_level!(
                self.level,
                target: "sqlchain.sql",
                kind = %kind,
                sql = %sql,
            );
        }
    }
}

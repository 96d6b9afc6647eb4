//! Fluent statement builder.
//!
//! ## Design
//!
//! - One builder covers SELECT, INSERT, UPDATE and DELETE; the terminal
//!   operation picks the statement kind.
//! - Configuration methods consume and return the builder so calls chain.
//!   Methods that validate input return [`BuildResult<Self>`].
//! - Terminal operations check their preconditions, render, hand the text to
//!   the configured [`StatementSink`] and return it.
//! - [`StatementBuilder::render`] and [`StatementBuilder::build`] are pure.

mod render;

pub use render::BuiltStatement;

use crate::clause::{Connector, Direction, Operator, OrderClause, WhereClause};
use crate::columns::Columns;
use crate::config::RenderConfig;
use crate::error::{BuildResult, BuilderError};
use crate::sink::{StatementKind, StatementSink, default_sink};
use crate::value::Value;
use serde::Serialize;
use std::sync::Arc;

/// Accumulates the state of one statement and renders it as SQL text.
///
/// # Example
///
/// ```rust
/// use sqlchain::StatementBuilder;
///
/// let sql = StatementBuilder::new()
///     .table("users")
///     .set("username", "benito")
///     .set("id", 2)
///     .where_eq("id", "1")
///     .update()?;
/// assert_eq!(sql, "update `users` set `username` = 'benito', `id` = 2 where id = 1\n");
/// # Ok::<(), sqlchain::BuilderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    /// Target table
    table: Option<String>,
    /// Statement kind selected by the last terminal call
    mode: StatementKind,
    /// SELECT columns (empty renders `*`)
    columns: Vec<String>,
    /// INSERT/UPDATE (column, value) pairs
    values: Vec<(String, Value)>,
    /// WHERE clauses in insertion order
    where_clauses: Vec<WhereClause>,
    /// ORDER BY clauses
    order_clauses: Vec<OrderClause>,
    /// OFFSET
    offset: Option<u64>,
    /// LIMIT
    limit: Option<u64>,
    config: RenderConfig,
    sink: Arc<dyn StatementSink>,
}

impl Default for StatementBuilder {
    fn default() -> Self {
        Self {
            table: None,
            mode: StatementKind::Select,
            columns: Vec::new(),
            values: Vec::new(),
            where_clauses: Vec::new(),
            order_clauses: Vec::new(),
            offset: None,
            limit: None,
            config: RenderConfig::default(),
            sink: default_sink(),
        }
    }
}

impl StatementBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Configuration ====================

    /// Set the target table.
    pub fn table(mut self, name: impl Into<String>) -> Self {
        self.table = Some(name.into());
        self
    }

    /// Set the SELECT columns.
    pub fn columns(mut self, cols: impl Into<Columns>) -> Self {
        self.columns = cols.into().into_vec();
        self
    }

    /// Merge column/value pairs for INSERT.
    ///
    /// A column that is already present keeps its position and takes the new
    /// value; new columns are appended. Empty input is a no-op.
    pub fn insert_values<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (column, value) in pairs {
            self.merge_value(column.into(), value.into());
        }
        self
    }

    /// Merge the entries of a JSON object for INSERT.
    ///
    /// Fails with [`BuilderError::InvalidArgument`] if `object` is not a JSON object.
    pub fn insert_json(self, object: serde_json::Value) -> BuildResult<Self> {
        match object {
            serde_json::Value::Object(map) => Ok(self.insert_values(map)),
            other => Err(BuilderError::invalid_argument(format!(
                "insert values must be a JSON object, got {other}"
            ))),
        }
    }

    /// Serialize a record (any struct deriving `Serialize`) and merge its fields for INSERT.
    pub fn insert_record<T: Serialize + ?Sized>(self, record: &T) -> BuildResult<Self> {
        let object = serde_json::to_value(record)?;
        self.insert_json(object)
    }

    /// Append a `column = value` pair (UPDATE SET list). Empty columns are ignored.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        let column = column.into();
        if !column.is_empty() {
            self.values.push((column, value.into()));
        }
        self
    }

    /// Append a pre-built `(column, value)` pair.
    pub fn set_pair<K, V>(self, (column, value): (K, V)) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.set(column, value)
    }

    /// Append a column whose value is serialized to JSON.
    pub fn set_json<T: Serialize + ?Sized>(
        self,
        column: impl Into<String>,
        value: &T,
    ) -> BuildResult<Self> {
        let value = Value::json(value)?;
        Ok(self.set(column, value))
    }

    /// Add WHERE: `column = value`, joined with AND.
    pub fn where_eq(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push_where(Connector::And, column.into(), Operator::Eq, value.into())
    }

    /// Add WHERE: `column = value`, joined with OR.
    pub fn or_where_eq(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push_where(Connector::Or, column.into(), Operator::Eq, value.into())
    }

    /// Add WHERE with a typed operator, joined with AND.
    pub fn and_where(
        self,
        column: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
    ) -> Self {
        self.push_where(Connector::And, column.into(), operator, value.into())
    }

    /// Add WHERE with a typed operator, joined with OR.
    pub fn or_where(
        self,
        column: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
    ) -> Self {
        self.push_where(Connector::Or, column.into(), operator, value.into())
    }

    /// Add WHERE with an operator token (checked case-insensitively), joined with AND.
    ///
    /// The token renders exactly as given: `"LIKE"` stays `LIKE`.
    pub fn where_op(
        self,
        column: impl Into<String>,
        operator: &str,
        value: impl Into<Value>,
    ) -> BuildResult<Self> {
        self.where_with(column, operator, value, "and")
    }

    /// Add WHERE with an operator token, joined with OR.
    pub fn or_where_op(
        self,
        column: impl Into<String>,
        operator: &str,
        value: impl Into<Value>,
    ) -> BuildResult<Self> {
        self.where_with(column, operator, value, "or")
    }

    /// Add WHERE with an explicit boolean connector (`"and"` or `"or"`).
    ///
    /// The first clause always renders with `where`, whatever connector was asked for.
    pub fn where_with(
        self,
        column: impl Into<String>,
        operator: &str,
        value: impl Into<Value>,
        boolean: &str,
    ) -> BuildResult<Self> {
        let connector: Connector = boolean.parse()?;
        let parsed: Operator = operator.parse()?;
        Ok(self.push_clause(
            connector,
            column.into(),
            parsed,
            operator.to_string(),
            value.into(),
        ))
    }

    /// Add ORDER BY. Any direction other than exactly `"asc"` means descending.
    pub fn order_by(mut self, column: impl Into<String>, direction: impl Into<Direction>) -> Self {
        self.order_clauses.push(OrderClause {
            column: column.into(),
            direction: direction.into(),
        });
        self
    }

    pub fn order_by_asc(self, column: impl Into<String>) -> Self {
        self.order_by(column, Direction::Asc)
    }

    pub fn order_by_desc(self, column: impl Into<String>) -> Self {
        self.order_by(column, Direction::Desc)
    }

    /// Set OFFSET (negative values clamp to 0).
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset.max(0).unsigned_abs());
        self
    }

    /// Set LIMIT. Negative values are ignored.
    pub fn limit(mut self, limit: i64) -> Self {
        if limit >= 0 {
            self.limit = Some(limit.unsigned_abs());
        }
        self
    }

    /// Replace the render configuration.
    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the sink that receives emitted statements.
    pub fn sink(mut self, sink: impl StatementSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Select the statement kind without running a terminal operation,
    /// for callers that only want [`render`](Self::render) or [`build`](Self::build).
    pub fn with_mode(mut self, mode: StatementKind) -> Self {
        self.mode = mode;
        self
    }

    fn merge_value(&mut self, column: String, value: Value) {
        match self.values.iter_mut().find(|(c, _)| *c == column) {
            Some((_, existing)) => *existing = value,
            None => self.values.push((column, value)),
        }
    }

    fn push_where(
        self,
        connector: Connector,
        column: String,
        operator: Operator,
        value: Value,
    ) -> Self {
        let token = operator.as_str().to_string();
        self.push_clause(connector, column, operator, token, value)
    }

    fn push_clause(
        mut self,
        connector: Connector,
        column: String,
        operator: Operator,
        token: String,
        value: Value,
    ) -> Self {
        let connector = if self.where_clauses.is_empty() {
            Connector::Where
        } else if connector == Connector::Where {
            Connector::And
        } else {
            connector
        };
        self.where_clauses.push(WhereClause {
            connector,
            column,
            operator,
            token,
            value,
        });
        self
    }

    // ==================== Accessors ====================

    pub fn table_name(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn mode(&self) -> StatementKind {
        self.mode
    }

    pub fn values(&self) -> &[(String, Value)] {
        &self.values
    }

    pub fn where_clauses(&self) -> &[WhereClause] {
        &self.where_clauses
    }

    pub fn order_clauses(&self) -> &[OrderClause] {
        &self.order_clauses
    }

    pub fn offset_value(&self) -> Option<u64> {
        self.offset
    }

    pub fn limit_value(&self) -> Option<u64> {
        self.limit
    }

    // ==================== Terminal operations ====================

    /// Render and emit an INSERT. Requires a table and at least one value.
    pub fn insert(&mut self) -> BuildResult<String> {
        self.require_table(StatementKind::Insert)?;
        self.require_values(StatementKind::Insert)?;
        Ok(self.emit(StatementKind::Insert))
    }

    /// Alias for [`insert`](Self::insert).
    pub fn save(&mut self) -> BuildResult<String> {
        self.insert()
    }

    /// Render and emit an UPDATE. Requires a table and at least one value.
    pub fn update(&mut self) -> BuildResult<String> {
        self.require_table(StatementKind::Update)?;
        self.require_values(StatementKind::Update)?;
        Ok(self.emit(StatementKind::Update))
    }

    /// Render and emit a DELETE. Requires a table.
    pub fn delete(&mut self) -> BuildResult<String> {
        self.require_table(StatementKind::Delete)?;
        Ok(self.emit(StatementKind::Delete))
    }

    /// Render and emit a SELECT of `columns`. Requires a table.
    ///
    /// `columns` accepts `"*"`, `["id", "name"]`, a slice or a `Vec`.
    pub fn fetch(&mut self, columns: impl Into<Columns>) -> BuildResult<String> {
        self.require_table(StatementKind::Select)?;
        self.columns = columns.into().into_vec();
        Ok(self.emit(StatementKind::Select))
    }

    /// `fetch` with every column (`*`).
    pub fn fetch_all(&mut self) -> BuildResult<String> {
        self.fetch(Columns::all())
    }

    fn emit(&mut self, mode: StatementKind) -> String {
        self.mode = mode;
        let sql = self.render();
        self.sink.emit(mode, &sql);
        sql
    }

    fn require_table(&self, kind: StatementKind) -> BuildResult<()> {
        match self.table.as_deref() {
            Some(t) if !t.is_empty() => Ok(()),
            _ => Err(precondition_failed(kind, "no table set")),
        }
    }

    fn require_values(&self, kind: StatementKind) -> BuildResult<()> {
        if self.values.is_empty() {
            return Err(precondition_failed(kind, "no values set"));
        }
        Ok(())
    }
}

fn precondition_failed(kind: StatementKind, reason: &str) -> BuilderError {
    #[cfg(feature = "tracing")]
    tracing::debug!(target: "sqlchain", kind = %kind, reason, "statement not rendered");
    BuilderError::precondition(format!("{kind}: {reason}"))
}

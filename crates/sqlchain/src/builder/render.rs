//! Rendering: builder state -> statement text.
//!
//! Both renderers walk the same fragment list; they only differ in how a
//! value is written (inline literal vs. bound placeholder).

use super::StatementBuilder;
use crate::config::PlaceholderStyle;
use crate::ident::{quote_ident, quote_ident_list};
use crate::sink::StatementKind;
use crate::value::Value;
use serde::Serialize;

/// SQL text with placeholders plus the values bound to them, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltStatement {
    kind: StatementKind,
    sql: String,
    params: Vec<Value>,
}

impl BuiltStatement {
    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }
}

/// Writes values either inline or as placeholders.
enum Binder {
    Literal { escape: bool },
    Params { style: PlaceholderStyle, params: Vec<Value> },
}

impl Binder {
    /// A value in a SET/VALUES list.
    fn literal(&mut self, value: &Value) -> String {
        if let Binder::Literal { escape } = *self {
            return value.to_literal(escape);
        }
        self.bind(value)
    }

    /// A value in a WHERE clause (inlined bare).
    fn bare(&mut self, value: &Value) -> String {
        if let Binder::Literal { .. } = self {
            return value.to_string();
        }
        self.bind(value)
    }

    fn bind(&mut self, value: &Value) -> String {
        match self {
            Binder::Params { style, params } => {
                params.push(value.clone());
                style.placeholder(params.len())
            }
            Binder::Literal { escape } => value.to_literal(*escape),
        }
    }
}

impl StatementBuilder {
    /// Render the current state as SQL text, terminated by `\n`.
    ///
    /// Pure: it neither mutates the builder nor emits to the sink.
    pub fn render(&self) -> String {
        let mut binder = Binder::Literal {
            escape: self.config.escape_literals,
        };
        let mut sql = self.fragments(&mut binder).join(" ");
        sql.push('\n');
        sql
    }

    /// Render with placeholders instead of inline values.
    ///
    /// Values from the SET/VALUES list come first, then WHERE values, each in
    /// insertion order. The SQL has no trailing newline.
    pub fn build(&self) -> BuiltStatement {
        let mut binder = Binder::Params {
            style: self.config.placeholder,
            params: Vec::new(),
        };
        let sql = self.fragments(&mut binder).join(" ");
        let params = match binder {
            Binder::Params { params, .. } => params,
            Binder::Literal { .. } => Vec::new(),
        };
        BuiltStatement {
            kind: self.mode,
            sql,
            params,
        }
    }

    fn fragments(&self, binder: &mut Binder) -> Vec<String> {
        let escape = self.config.escape_literals;
        let table = quote_ident(self.table.as_deref().unwrap_or_default(), escape);
        let mut parts: Vec<String> = Vec::new();

        match self.mode {
            StatementKind::Insert => {
                parts.push("insert into".to_string());
                parts.push(table);
                if !self.values.is_empty() {
                    let cols = quote_ident_list(self.values.iter().map(|(c, _)| c.as_str()), escape);
                    let vals = self
                        .values
                        .iter()
                        .map(|(_, v)| binder.literal(v))
                        .collect::<Vec<_>>()
                        .join(", ");
                    parts.push(format!("({cols})"));
                    parts.push("values".to_string());
                    parts.push(format!("({vals})"));
                }
            }
            StatementKind::Update => {
                parts.push("update".to_string());
                parts.push(table);
                parts.push("set".to_string());
                let assignments = self
                    .values
                    .iter()
                    .map(|(c, v)| format!("{} = {}", quote_ident(c, escape), binder.literal(v)))
                    .collect::<Vec<_>>()
                    .join(", ");
                parts.push(assignments);
            }
            StatementKind::Delete => {
                parts.push("delete from".to_string());
                parts.push(table);
            }
            StatementKind::Select => {
                parts.push("select".to_string());
                let cols = self.columns.join(", ");
                parts.push(if cols.is_empty() { "*".to_string() } else { cols });
                parts.push("from".to_string());
                parts.push(table);
            }
        }

        for clause in &self.where_clauses {
            parts.push(format!(
                "{} {} {} {}",
                clause.connector,
                clause.column,
                clause.token,
                binder.bare(&clause.value)
            ));
        }

        if !self.order_clauses.is_empty() {
            parts.push("order by".to_string());
            parts.push(
                self.order_clauses
                    .iter()
                    .map(|o| format!("{} {}", o.column, o.direction))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
        }

        // Zero is omitted, same as unset.
        if let Some(offset) = self.offset.filter(|n| *n > 0) {
            parts.push("offset".to_string());
            parts.push(offset.to_string());
        }

        if let Some(limit) = self.limit.filter(|n| *n > 0) {
            parts.push("limit".to_string());
            parts.push(limit.to_string());
        }

        parts
    }
}

//! The render sink.

use serde::Serialize;
use tracing::trace;

use crate::ast::Value;
use crate::config::RenderConfig;
use crate::error::SqlExprResult;
use crate::transpiler::dialect::{Dialect, PlaceholderStyle};

/// SQL text plus the ordered argument list for a prepared statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered {
    pub sql: String,
    pub args: Vec<Value>,
}

/// Accumulates SQL text and bound arguments for one render pass.
///
/// Nodes only ever call [`insert_constant_argument`](Self::insert_constant_argument)
/// or [`insert_parametrized_argument`](Self::insert_parametrized_argument); the
/// placeholder text is decided here.
#[derive(Debug)]
pub struct SqlBuilder {
    buff: String,
    args: Vec<Value>,
    dialect: Dialect,
    placeholder: PlaceholderStyle,
}

impl Default for SqlBuilder {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl SqlBuilder {
    pub fn new(dialect: Dialect, placeholder: PlaceholderStyle) -> Self {
        Self {
            buff: String::new(),
            args: Vec::new(),
            dialect,
            placeholder,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.dialect, config.placeholder_style())
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn write_str(&mut self, s: &str) {
        self.buff.push_str(s);
    }

    /// Write a table or column name, quoted only when needed.
    pub fn write_identifier(&mut self, name: &str) {
        let escaped = self.dialect.escape_identifier(name);
        self.buff.push_str(&escaped);
    }

    /// Emit `value` inline as SQL literal text. No argument is recorded.
    pub fn insert_constant_argument(&mut self, value: &Value) -> SqlExprResult<()> {
        let text = self.dialect.literal(value)?;
        self.buff.push_str(&text);
        Ok(())
    }

    /// Emit a placeholder and append `value` to the argument list.
    pub fn insert_parametrized_argument(&mut self, value: &Value) {
        self.args.push(value.clone());
        let placeholder = self.placeholder.placeholder(self.args.len());
        trace!(%placeholder, kind = value.kind(), "bind argument");
        self.buff.push_str(&placeholder);
    }

    pub fn sql(&self) -> &str {
        &self.buff
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn finish(self) -> Rendered {
        Rendered {
            sql: self.buff,
            args: self.args,
        }
    }
}

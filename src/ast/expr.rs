//! The node contract every expression implements.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ast::nodes::Literal;
use crate::ast::Value;
use crate::error::SqlExprResult;
use crate::transpiler::SqlBuilder;

/// Shared handle to an immutable expression node.
pub type ExprRef = Arc<dyn Expression>;

/// The statement an expression is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatementType {
    #[default]
    Select,
    Insert,
    Update,
    Delete,
}

/// Per-call rendering switches. Never affect argument order or count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SerializeOptions {
    /// Omit the parens an operator node would put around itself.
    pub skip_wrap: bool,
}

impl SerializeOptions {
    pub fn skip_wrap() -> Self {
        Self { skip_wrap: true }
    }
}

/// An immutable unit of an expression tree.
///
/// Leaf nodes only implement [`serialize`](Expression::serialize); the traversal
/// hooks default to "no children" and "not a literal".
pub trait Expression: fmt::Debug + Send + Sync {
    /// Write this node's SQL text and arguments into `out`.
    fn serialize(
        &self,
        statement: StatementType,
        out: &mut SqlBuilder,
        options: SerializeOptions,
    ) -> SqlExprResult<()>;

    /// Direct sub-expressions, left to right.
    fn children(&self) -> Vec<&dyn Expression> {
        Vec::new()
    }

    fn as_literal(&self) -> Option<&Literal> {
        None
    }
}

impl<E: Expression + ?Sized> Expression for Arc<E> {
    fn serialize(
        &self,
        statement: StatementType,
        out: &mut SqlBuilder,
        options: SerializeOptions,
    ) -> SqlExprResult<()> {
        (**self).serialize(statement, out, options)
    }

    fn children(&self) -> Vec<&dyn Expression> {
        (**self).children()
    }

    fn as_literal(&self) -> Option<&Literal> {
        (**self).as_literal()
    }
}

/// Pre-order traversal: `f` sees every node, parents before children,
/// siblings left to right.
pub fn walk<'a, F>(node: &'a dyn Expression, f: &mut F)
where
    F: FnMut(&'a dyn Expression),
{
    f(node);
    for child in node.children() {
        walk(child, f);
    }
}

/// Values of every literal in the tree, in render order.
pub fn collect_literals(node: &dyn Expression) -> Vec<Value> {
    let mut values = Vec::new();
    walk(node, &mut |n: &dyn Expression| {
        if let Some(literal) = n.as_literal() {
            values.push(literal.value().clone());
        }
    });
    values
}

/// Values that would be bound as arguments (non-constant literals), in render order.
pub fn collect_parameters(node: &dyn Expression) -> Vec<Value> {
    let mut values = Vec::new();
    walk(node, &mut |n: &dyn Expression| {
        if let Some(literal) = n.as_literal().filter(|l| !l.is_constant()) {
            values.push(literal.value().clone());
        }
    });
    values
}

//! Literal builders: native values to nodes.

use std::sync::Arc;

use crate::ast::nodes::{Literal, NullLiteral, RawExpression, StarLiteral, WrapExpression};
use crate::ast::typed::{
    BoolExpression, FloatExpression, IntegerExpression, StringExpression, TypedExpression,
};
use crate::ast::{ExprRef, Value};

pub(crate) fn literal_node(value: impl Into<Value>) -> ExprRef {
    Arc::new(Literal::new(value))
}

/// Boolean literal
pub fn boolean(value: bool) -> BoolExpression {
    BoolExpression::from_node(literal_node(value))
}

/// Integer literal
pub fn int(value: i64) -> IntegerExpression {
    IntegerExpression::from_node(literal_node(value))
}

/// Float literal
pub fn float(value: f64) -> FloatExpression {
    FloatExpression::from_node(literal_node(value))
}

/// Text literal
pub fn text(value: impl Into<String>) -> StringExpression {
    StringExpression::from_node(literal_node(value.into()))
}

/// `NULL`
pub fn null() -> ExprRef {
    Arc::new(NullLiteral)
}

/// `*`
pub fn star() -> ExprRef {
    Arc::new(StarLiteral)
}

/// Emitted verbatim. For functions, operators or syntax the builder doesn't cover.
///
/// ```ignore
/// raw("current_database()")
/// ```
pub fn raw(sql: impl Into<String>) -> ExprRef {
    Arc::new(RawExpression { raw: sql.into() })
}

/// Wrap expressions in parens: `(a, b, c)`.
pub fn wrap<I>(expressions: I) -> ExprRef
where
    I: IntoIterator,
    I::Item: Into<ExprRef>,
{
    Arc::new(WrapExpression {
        expressions: expressions.into_iter().map(Into::into).collect(),
    })
}

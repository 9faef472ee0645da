//! Operator node constructors. Every typed family funnels through these.

use std::sync::Arc;

use crate::ast::nodes::{BinaryOpExpression, PostfixOpExpression, PrefixOpExpression};
use crate::ast::operators::{BinaryOperator, PostfixOperator, PrefixOperator};
use crate::ast::ExprRef;
use crate::error::SqlExprResult;

/// Create a binary expression `(lhs op rhs)`.
pub fn binary(lhs: impl Into<ExprRef>, op: BinaryOperator, rhs: impl Into<ExprRef>) -> ExprRef {
    Arc::new(BinaryOpExpression {
        left: lhs.into(),
        right: rhs.into(),
        operator: op,
    })
}

/// Create a prefix expression `op (operand)`.
pub fn prefix(op: PrefixOperator, operand: impl Into<ExprRef>) -> ExprRef {
    Arc::new(PrefixOpExpression {
        operand: operand.into(),
        operator: op,
    })
}

/// Create a postfix expression `(operand) op`.
pub fn postfix(operand: impl Into<ExprRef>, op: PostfixOperator) -> ExprRef {
    Arc::new(PostfixOpExpression {
        operand: operand.into(),
        operator: op,
    })
}

/// Binary expression from operator text, e.g. `custom_binary(a, "IS DISTINCT FROM", b)`.
///
/// Fails with `InvalidOperator` when `op` is outside the vocabulary.
pub fn custom_binary(
    lhs: impl Into<ExprRef>,
    op: &str,
    rhs: impl Into<ExprRef>,
) -> SqlExprResult<ExprRef> {
    let op: BinaryOperator = op.parse()?;
    Ok(binary(lhs, op, rhs))
}

//! Concrete expression nodes.

use crate::ast::expr::{ExprRef, Expression, SerializeOptions, StatementType};
use crate::ast::operators::{BinaryOperator, PostfixOperator, PrefixOperator};
use crate::ast::Value;
use crate::error::{SqlExprError, SqlExprResult};
use crate::transpiler::dialect::OperatorSyntax;
use crate::transpiler::SqlBuilder;

/// A native value, bound as an argument unless marked constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    value: Value,
    constant: bool,
}

impl Literal {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            constant: false,
        }
    }

    pub fn with_constant(mut self, constant: bool) -> Self {
        self.constant = constant;
        self
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_constant(&self) -> bool {
        self.constant
    }
}

impl Expression for Literal {
    fn serialize(
        &self,
        _: StatementType,
        out: &mut SqlBuilder,
        _: SerializeOptions,
    ) -> SqlExprResult<()> {
        if self.constant {
            out.insert_constant_argument(&self.value)
        } else {
            out.insert_parametrized_argument(&self.value);
            Ok(())
        }
    }

    fn as_literal(&self) -> Option<&Literal> {
        Some(self)
    }
}

/// `(left OP right)`
#[derive(Debug, Clone)]
pub struct BinaryOpExpression {
    pub(crate) left: ExprRef,
    pub(crate) right: ExprRef,
    pub(crate) operator: BinaryOperator,
}

impl BinaryOpExpression {
    pub fn operator(&self) -> BinaryOperator {
        self.operator
    }
}

impl Expression for BinaryOpExpression {
    fn serialize(
        &self,
        statement: StatementType,
        out: &mut SqlBuilder,
        options: SerializeOptions,
    ) -> SqlExprResult<()> {
        let operator = match out.dialect().binary_operator(self.operator)? {
            OperatorSyntax::Infix(text) => text,
            OperatorSyntax::Function(name) => {
                out.write_str(name);
                out.write_str("(");
                self.left.serialize(statement, out, SerializeOptions::default())?;
                out.write_str(", ");
                self.right.serialize(statement, out, SerializeOptions::default())?;
                out.write_str(")");
                return Ok(());
            }
        };

        let wrap = !options.skip_wrap;
        if wrap {
            out.write_str("(");
        }
        self.left.serialize(statement, out, SerializeOptions::default())?;
        out.write_str(" ");
        out.write_str(operator);
        out.write_str(" ");
        self.right.serialize(statement, out, SerializeOptions::default())?;
        if wrap {
            out.write_str(")");
        }
        Ok(())
    }

    fn children(&self) -> Vec<&dyn Expression> {
        vec![self.left.as_ref(), self.right.as_ref()]
    }
}

/// `OP (operand)`
#[derive(Debug, Clone)]
pub struct PrefixOpExpression {
    pub(crate) operand: ExprRef,
    pub(crate) operator: PrefixOperator,
}

impl Expression for PrefixOpExpression {
    fn serialize(
        &self,
        statement: StatementType,
        out: &mut SqlBuilder,
        _: SerializeOptions,
    ) -> SqlExprResult<()> {
        out.write_str(self.operator.as_str());
        out.write_str(" (");
        self.operand.serialize(statement, out, SerializeOptions::skip_wrap())?;
        out.write_str(")");
        Ok(())
    }

    fn children(&self) -> Vec<&dyn Expression> {
        vec![self.operand.as_ref()]
    }
}

/// `(operand) OP`
#[derive(Debug, Clone)]
pub struct PostfixOpExpression {
    pub(crate) operand: ExprRef,
    pub(crate) operator: PostfixOperator,
}

impl Expression for PostfixOpExpression {
    fn serialize(
        &self,
        statement: StatementType,
        out: &mut SqlBuilder,
        _: SerializeOptions,
    ) -> SqlExprResult<()> {
        let text = out.dialect().postfix_operator(self.operator)?;
        out.write_str("(");
        self.operand.serialize(statement, out, SerializeOptions::skip_wrap())?;
        out.write_str(") ");
        out.write_str(text);
        Ok(())
    }

    fn children(&self) -> Vec<&dyn Expression> {
        vec![self.operand.as_ref()]
    }
}

/// Parenthesized, comma separated list: `(a, b, c)`.
#[derive(Debug, Clone)]
pub struct WrapExpression {
    pub(crate) expressions: Vec<ExprRef>,
}

impl Expression for WrapExpression {
    fn serialize(
        &self,
        statement: StatementType,
        out: &mut SqlBuilder,
        _: SerializeOptions,
    ) -> SqlExprResult<()> {
        if self.expressions.is_empty() {
            return Err(SqlExprError::malformed("WRAP requires at least one expression"));
        }
        out.write_str("(");
        for (i, expression) in self.expressions.iter().enumerate() {
            if i > 0 {
                out.write_str(", ");
            }
            expression.serialize(statement, out, SerializeOptions::default())?;
        }
        out.write_str(")");
        Ok(())
    }

    fn children(&self) -> Vec<&dyn Expression> {
        self.expressions.iter().map(|e| e.as_ref()).collect()
    }
}

/// SQL text emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExpression {
    pub(crate) raw: String,
}

impl Expression for RawExpression {
    fn serialize(
        &self,
        _: StatementType,
        out: &mut SqlBuilder,
        _: SerializeOptions,
    ) -> SqlExprResult<()> {
        out.write_str(&self.raw);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullLiteral;

impl Expression for NullLiteral {
    fn serialize(
        &self,
        _: StatementType,
        out: &mut SqlBuilder,
        _: SerializeOptions,
    ) -> SqlExprResult<()> {
        out.write_str("NULL");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarLiteral;

impl Expression for StarLiteral {
    fn serialize(
        &self,
        _: StatementType,
        out: &mut SqlBuilder,
        _: SerializeOptions,
    ) -> SqlExprResult<()> {
        out.write_str("*");
        Ok(())
    }
}

/// Column reference, optionally qualified by its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnExpression {
    pub(crate) table: Option<String>,
    pub(crate) name: String,
}

impl ColumnExpression {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }
}

impl Expression for ColumnExpression {
    fn serialize(
        &self,
        statement: StatementType,
        out: &mut SqlBuilder,
        _: SerializeOptions,
    ) -> SqlExprResult<()> {
        // INSERT column lists are never qualified.
        let qualifier = self
            .table
            .as_deref()
            .filter(|_| statement != StatementType::Insert);
        if let Some(table) = qualifier {
            out.write_identifier(table);
            out.write_str(".");
        }
        out.write_identifier(&self.name);
        Ok(())
    }
}

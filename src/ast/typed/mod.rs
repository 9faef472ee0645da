//! Typed expression families.
//!
//! Each family is a thin wrapper around an [`ExprRef`]. Operator methods come from
//! the `*Ops` traits and only accept operands of the same family, so
//! `text("a").add(int(1))` does not compile. Wrapping never changes how the
//! underlying node renders.
//!
//! ```compile_fail
//! use sqlexpr::prelude::*;
//!
//! let _ = text("a").add(int(1));
//! ```
//!
//! ```compile_fail
//! use sqlexpr::prelude::*;
//!
//! let _ = column::<IntegerExpression>("id").eq(text("1"));
//! ```

mod boolean;
mod numeric;
mod string;
mod temporal;

use std::sync::Arc;

use tracing::debug;

use crate::ast::builders::{binary, postfix, wrap};
use crate::ast::expr::{ExprRef, Expression, SerializeOptions, StatementType};
use crate::ast::nodes::Literal;
use crate::ast::operators::{BinaryOperator, PostfixOperator};
use crate::error::SqlExprResult;
use crate::transpiler::SqlBuilder;

pub use self::numeric::ArithmeticOps;

/// Capabilities shared by every family.
pub trait TypedExpression: Expression + Clone + Sized {
    /// Treat `node` as a member of this family.
    fn from_node(node: ExprRef) -> Self;

    fn node(&self) -> &ExprRef;

    fn into_node(self) -> ExprRef;

    fn is_null(&self) -> BoolExpression {
        BoolExpression::from_node(postfix(self.node().clone(), PostfixOperator::IsNull))
    }

    fn is_not_null(&self) -> BoolExpression {
        BoolExpression::from_node(postfix(self.node().clone(), PostfixOperator::IsNotNull))
    }

    /// `(self IN (v1, v2, ...))`
    fn in_list<I>(&self, values: I) -> BoolExpression
    where
        I: IntoIterator<Item = Self>,
    {
        let list = wrap(values.into_iter().map(Self::into_node));
        BoolExpression::from_node(binary(self.node().clone(), BinaryOperator::In, list))
    }

    /// `(self NOT IN (v1, v2, ...))`
    fn not_in_list<I>(&self, values: I) -> BoolExpression
    where
        I: IntoIterator<Item = Self>,
    {
        let list = wrap(values.into_iter().map(Self::into_node));
        BoolExpression::from_node(binary(self.node().clone(), BinaryOperator::NotIn, list))
    }

    /// Copy of this literal with the constant flag set. The source node is not
    /// touched; non-literal expressions are returned unchanged.
    fn with_constant(self, constant: bool) -> Self {
        if let Some(literal) = self.node().as_literal().cloned() {
            return Self::from_node(Arc::new(literal.with_constant(constant)));
        }
        debug!(node = ?self.node(), "constant flag ignored on non-literal expression");
        self
    }

    /// Render this literal inline instead of binding it.
    fn constant(self) -> Self {
        self.with_constant(true)
    }
}

/// Comparisons available to every family.
pub trait EqualityOps: TypedExpression {
    /// `(self = rhs)`
    fn eq(&self, rhs: Self) -> BoolExpression {
        compare(self, BinaryOperator::Eq, rhs)
    }

    /// `(self <> rhs)`
    fn not_eq(&self, rhs: Self) -> BoolExpression {
        compare(self, BinaryOperator::NotEq, rhs)
    }

    fn is_distinct_from(&self, rhs: Self) -> BoolExpression {
        compare(self, BinaryOperator::IsDistinctFrom, rhs)
    }

    fn is_not_distinct_from(&self, rhs: Self) -> BoolExpression {
        compare(self, BinaryOperator::IsNotDistinctFrom, rhs)
    }
}

/// Ordering comparisons for every family except boolean.
pub trait OrderingOps: EqualityOps {
    fn lt(&self, rhs: Self) -> BoolExpression {
        compare(self, BinaryOperator::Lt, rhs)
    }

    fn lt_eq(&self, rhs: Self) -> BoolExpression {
        compare(self, BinaryOperator::LtEq, rhs)
    }

    fn gt(&self, rhs: Self) -> BoolExpression {
        compare(self, BinaryOperator::Gt, rhs)
    }

    fn gt_eq(&self, rhs: Self) -> BoolExpression {
        compare(self, BinaryOperator::GtEq, rhs)
    }
}

pub(crate) fn compare<T: TypedExpression>(lhs: &T, op: BinaryOperator, rhs: T) -> BoolExpression {
    debug_assert!(op.is_predicate(), "{op} does not yield a boolean");
    BoolExpression::from_node(binary(lhs.node().clone(), op, rhs.into_node()))
}

/// Same-family binary operation, e.g. `+` on integers or `||` on strings.
pub(crate) fn combine<T: TypedExpression>(lhs: &T, op: BinaryOperator, rhs: T) -> T {
    debug_assert!(
        !op.is_predicate() || matches!(op, BinaryOperator::And | BinaryOperator::Or),
        "{op} does not stay in the operand family"
    );
    T::from_node(binary(lhs.node().clone(), op, rhs.into_node()))
}

macro_rules! typed_expression {
    ($(#[$meta:meta])* $name:ident, $ctor:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name(ExprRef);

        impl TypedExpression for $name {
            fn from_node(node: ExprRef) -> Self {
                Self(node)
            }

            fn node(&self) -> &ExprRef {
                &self.0
            }

            fn into_node(self) -> ExprRef {
                self.0
            }
        }

        impl Expression for $name {
            fn serialize(
                &self,
                statement: StatementType,
                out: &mut SqlBuilder,
                options: SerializeOptions,
            ) -> SqlExprResult<()> {
                self.0.serialize(statement, out, options)
            }

            fn children(&self) -> Vec<&dyn Expression> {
                self.0.children()
            }

            fn as_literal(&self) -> Option<&Literal> {
                self.0.as_literal()
            }
        }

        impl From<$name> for ExprRef {
            fn from(expr: $name) -> Self {
                expr.0
            }
        }

        #[doc = concat!("Treat any expression as a [`", stringify!($name), "`].")]
        pub fn $ctor(expr: impl Into<ExprRef>) -> $name {
            $name::from_node(expr.into())
        }
    };
}

typed_expression!(
    /// Boolean family
    BoolExpression,
    bool_exp
);
typed_expression!(
    /// Integer family
    IntegerExpression,
    int_exp
);
typed_expression!(
    /// Float family
    FloatExpression,
    float_exp
);
typed_expression!(
    /// String family
    StringExpression,
    string_exp
);
typed_expression!(
    /// `time`
    TimeExpression,
    time_exp
);
typed_expression!(
    /// `time with time zone`
    TimezExpression,
    timez_exp
);
typed_expression!(
    /// `date`
    DateExpression,
    date_exp
);
typed_expression!(
    /// `timestamp`
    TimestampExpression,
    timestamp_exp
);
typed_expression!(
    /// `timestamp with time zone`
    TimestampzExpression,
    timestampz_exp
);

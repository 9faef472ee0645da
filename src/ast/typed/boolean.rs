use std::ops;

use super::{combine, BoolExpression, EqualityOps, TypedExpression};
use crate::ast::builders::{postfix, prefix};
use crate::ast::operators::{BinaryOperator, PostfixOperator, PrefixOperator};

impl EqualityOps for BoolExpression {}

fn truth_test(expr: &BoolExpression, op: PostfixOperator) -> BoolExpression {
    BoolExpression::from_node(postfix(expr.node().clone(), op))
}

impl BoolExpression {
    /// `(self AND rhs)`
    pub fn and(&self, rhs: BoolExpression) -> BoolExpression {
        combine(self, BinaryOperator::And, rhs)
    }

    /// `(self OR rhs)`
    pub fn or(&self, rhs: BoolExpression) -> BoolExpression {
        combine(self, BinaryOperator::Or, rhs)
    }

    /// `NOT (self)`
    pub fn not(&self) -> BoolExpression {
        BoolExpression::from_node(prefix(PrefixOperator::Not, self.node().clone()))
    }

    pub fn is_true(&self) -> BoolExpression {
        truth_test(self, PostfixOperator::IsTrue)
    }

    pub fn is_not_true(&self) -> BoolExpression {
        truth_test(self, PostfixOperator::IsNotTrue)
    }

    pub fn is_false(&self) -> BoolExpression {
        truth_test(self, PostfixOperator::IsFalse)
    }

    pub fn is_not_false(&self) -> BoolExpression {
        truth_test(self, PostfixOperator::IsNotFalse)
    }

    pub fn is_unknown(&self) -> BoolExpression {
        truth_test(self, PostfixOperator::IsUnknown)
    }

    pub fn is_not_unknown(&self) -> BoolExpression {
        truth_test(self, PostfixOperator::IsNotUnknown)
    }
}

impl ops::BitAnd for BoolExpression {
    type Output = BoolExpression;

    fn bitand(self, rhs: BoolExpression) -> BoolExpression {
        BoolExpression::and(&self, rhs)
    }
}

impl ops::BitOr for BoolExpression {
    type Output = BoolExpression;

    fn bitor(self, rhs: BoolExpression) -> BoolExpression {
        BoolExpression::or(&self, rhs)
    }
}

impl ops::Not for BoolExpression {
    type Output = BoolExpression;

    fn not(self) -> BoolExpression {
        BoolExpression::not(&self)
    }
}

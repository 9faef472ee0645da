use super::{combine, compare, BoolExpression, EqualityOps, OrderingOps, StringExpression};
use crate::ast::operators::BinaryOperator;

impl EqualityOps for StringExpression {}
impl OrderingOps for StringExpression {}

impl StringExpression {
    /// `(self || rhs)`
    pub fn concat(&self, rhs: StringExpression) -> StringExpression {
        combine(self, BinaryOperator::Concat, rhs)
    }

    pub fn like(&self, pattern: StringExpression) -> BoolExpression {
        compare(self, BinaryOperator::Like, pattern)
    }

    pub fn not_like(&self, pattern: StringExpression) -> BoolExpression {
        compare(self, BinaryOperator::NotLike, pattern)
    }

    pub fn similar_to(&self, pattern: StringExpression) -> BoolExpression {
        compare(self, BinaryOperator::SimilarTo, pattern)
    }

    pub fn not_similar_to(&self, pattern: StringExpression) -> BoolExpression {
        compare(self, BinaryOperator::NotSimilarTo, pattern)
    }
}

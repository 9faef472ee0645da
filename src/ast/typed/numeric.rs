use std::ops;

use super::{combine, EqualityOps, FloatExpression, IntegerExpression, OrderingOps, TypedExpression};
use crate::ast::builders::prefix;
use crate::ast::operators::{BinaryOperator, PrefixOperator};

impl EqualityOps for IntegerExpression {}
impl OrderingOps for IntegerExpression {}
impl EqualityOps for FloatExpression {}
impl OrderingOps for FloatExpression {}

/// `+ - * / % ^` for the integer and float families.
pub trait ArithmeticOps: OrderingOps {
    fn add(&self, rhs: Self) -> Self {
        combine(self, BinaryOperator::Add, rhs)
    }

    fn sub(&self, rhs: Self) -> Self {
        combine(self, BinaryOperator::Sub, rhs)
    }

    fn mul(&self, rhs: Self) -> Self {
        combine(self, BinaryOperator::Mul, rhs)
    }

    fn div(&self, rhs: Self) -> Self {
        combine(self, BinaryOperator::Div, rhs)
    }

    /// `(self % rhs)`
    fn modulo(&self, rhs: Self) -> Self {
        combine(self, BinaryOperator::Mod, rhs)
    }

    /// `(self ^ rhs)`
    fn pow(&self, rhs: Self) -> Self {
        combine(self, BinaryOperator::Pow, rhs)
    }

    /// `- (self)`
    fn neg(&self) -> Self {
        Self::from_node(prefix(PrefixOperator::Minus, self.node().clone()))
    }
}

impl ArithmeticOps for IntegerExpression {}
impl ArithmeticOps for FloatExpression {}

impl IntegerExpression {
    pub fn bit_and(&self, rhs: IntegerExpression) -> IntegerExpression {
        combine(self, BinaryOperator::BitAnd, rhs)
    }

    pub fn bit_or(&self, rhs: IntegerExpression) -> IntegerExpression {
        combine(self, BinaryOperator::BitOr, rhs)
    }

    /// `(self # rhs)`
    pub fn bit_xor(&self, rhs: IntegerExpression) -> IntegerExpression {
        combine(self, BinaryOperator::BitXor, rhs)
    }

    pub fn bit_shift_left(&self, shift: IntegerExpression) -> IntegerExpression {
        combine(self, BinaryOperator::BitShiftLeft, shift)
    }

    pub fn bit_shift_right(&self, shift: IntegerExpression) -> IntegerExpression {
        combine(self, BinaryOperator::BitShiftRight, shift)
    }

    /// `~ (self)`
    pub fn bit_not(&self) -> IntegerExpression {
        IntegerExpression::from_node(prefix(PrefixOperator::BitNot, self.node().clone()))
    }
}

macro_rules! impl_std_op {
    ($ty:ty, $trait:ident, $method:ident, $op:expr) => {
        impl ops::$trait for $ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                combine(&self, $op, rhs)
            }
        }
    };
}

impl_std_op!(IntegerExpression, Add, add, BinaryOperator::Add);
impl_std_op!(IntegerExpression, Sub, sub, BinaryOperator::Sub);
impl_std_op!(IntegerExpression, Mul, mul, BinaryOperator::Mul);
impl_std_op!(IntegerExpression, Div, div, BinaryOperator::Div);
impl_std_op!(IntegerExpression, Rem, rem, BinaryOperator::Mod);
impl_std_op!(IntegerExpression, BitAnd, bitand, BinaryOperator::BitAnd);
impl_std_op!(IntegerExpression, BitOr, bitor, BinaryOperator::BitOr);
impl_std_op!(IntegerExpression, BitXor, bitxor, BinaryOperator::BitXor);
impl_std_op!(IntegerExpression, Shl, shl, BinaryOperator::BitShiftLeft);
impl_std_op!(IntegerExpression, Shr, shr, BinaryOperator::BitShiftRight);

impl_std_op!(FloatExpression, Add, add, BinaryOperator::Add);
impl_std_op!(FloatExpression, Sub, sub, BinaryOperator::Sub);
impl_std_op!(FloatExpression, Mul, mul, BinaryOperator::Mul);
impl_std_op!(FloatExpression, Div, div, BinaryOperator::Div);
impl_std_op!(FloatExpression, Rem, rem, BinaryOperator::Mod);

impl ops::Neg for IntegerExpression {
    type Output = IntegerExpression;

    fn neg(self) -> IntegerExpression {
        ArithmeticOps::neg(&self)
    }
}

impl ops::Neg for FloatExpression {
    type Output = FloatExpression;

    fn neg(self) -> FloatExpression {
        ArithmeticOps::neg(&self)
    }
}

impl ops::Not for IntegerExpression {
    type Output = IntegerExpression;

    fn not(self) -> IntegerExpression {
        self.bit_not()
    }
}

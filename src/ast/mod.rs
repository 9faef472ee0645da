//! Expression trees: nodes, operators, literal builders and typed families.

pub mod builders;
pub mod expr;
pub mod nodes;
pub mod operators;
pub mod typed;
pub mod values;

pub use builders::*;
pub use expr::{
    collect_literals, collect_parameters, walk, ExprRef, Expression, SerializeOptions,
    StatementType,
};
pub use nodes::{
    BinaryOpExpression, ColumnExpression, Literal, NullLiteral, PostfixOpExpression,
    PrefixOpExpression, RawExpression, StarLiteral, WrapExpression,
};
pub use operators::{BinaryOperator, PostfixOperator, PrefixOperator};
pub use typed::{
    bool_exp, date_exp, float_exp, int_exp, string_exp, time_exp, timestamp_exp, timestampz_exp,
    timez_exp, ArithmeticOps, BoolExpression, DateExpression, EqualityOps, FloatExpression,
    IntegerExpression, OrderingOps, StringExpression, TimeExpression, TimestampExpression,
    TimestampzExpression, TimezExpression, TypedExpression,
};
pub use values::Value;

use super::{
    DateExpression, EqualityOps, OrderingOps, TimeExpression, TimestampExpression,
    TimestampzExpression, TimezExpression,
};

impl EqualityOps for TimeExpression {}
impl OrderingOps for TimeExpression {}
impl EqualityOps for TimezExpression {}
impl OrderingOps for TimezExpression {}
impl EqualityOps for DateExpression {}
impl OrderingOps for DateExpression {}
impl EqualityOps for TimestampExpression {}
impl OrderingOps for TimestampExpression {}
impl EqualityOps for TimestampzExpression {}
impl OrderingOps for TimestampzExpression {}

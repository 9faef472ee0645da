//! Builder functions for expression nodes.
//!
//! # Modules
//!
//! - `literals` - Native values, NULL, `*`, raw SQL, grouping
//! - `time` - Date/time literals
//! - `columns` - Typed column references
//! - `binary` - Binary, prefix and postfix operator nodes
//!
//! # Example
//! ```ignore
//! use sqlexpr::prelude::*;
//!
//! let age = table_column::<IntegerExpression>("users", "age");
//! let cond = age.gt_eq(int(18)).and(column::<BoolExpression>("active"));
//! let rendered = cond.to_sql()?;
//! // rendered.sql  == "((users.age >= $1) AND active)"
//! // rendered.args == [Value::Int(18)]
//! ```

pub mod binary;
pub mod columns;
pub mod literals;
pub mod time;

pub use binary::{binary, custom_binary, postfix, prefix};
pub use columns::{column, table_column};
pub use literals::{boolean, float, int, null, raw, star, text, wrap};
pub use time::{
    date, date_t, time, time_t, timestamp, timestamp_t, timestampz, timestampz_t, timez, timez_t,
};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ast::operators::{BinaryOperator, PostfixOperator, PrefixOperator};
    use crate::ast::{ExprRef, IntegerExpression, StatementType, StringExpression, Value};
    use crate::config::RenderConfig;
    use crate::error::SqlExprError;
    use crate::transpiler::{render, ToSql};

    #[test]
    fn test_binary_format() {
        let expr = binary(raw("a"), BinaryOperator::Add, raw("b"));
        assert_eq!(expr.to_sql().unwrap().sql, "(a + b)");
    }

    #[test]
    fn test_prefix_and_postfix_format() {
        let cmp = binary(raw("a"), BinaryOperator::Eq, raw("b"));
        assert_eq!(prefix(PrefixOperator::Not, cmp.clone()).to_sql().unwrap().sql, "NOT (a = b)");
        assert_eq!(
            postfix(cmp, PostfixOperator::IsNotNull).to_sql().unwrap().sql,
            "(a = b) IS NOT NULL"
        );
        assert_eq!(
            postfix(raw("x"), PostfixOperator::IsTrue).to_sql().unwrap().sql,
            "(x) IS TRUE"
        );
    }

    #[test]
    fn test_custom_binary() {
        let expr = custom_binary(raw("a"), "is not distinct from", raw("b")).unwrap();
        assert_eq!(expr.to_sql().unwrap().sql, "(a IS NOT DISTINCT FROM b)");

        let err = custom_binary(raw("a"), "===", raw("b")).unwrap_err();
        assert!(matches!(err, SqlExprError::InvalidOperator(_)));
    }

    #[test]
    fn test_terminals() {
        assert_eq!(null().to_sql().unwrap().sql, "NULL");
        assert_eq!(star().to_sql().unwrap().sql, "*");
        assert_eq!(raw("current_database()").to_sql().unwrap().sql, "current_database()");
    }

    #[test]
    fn test_wrap_order() {
        let items: Vec<ExprRef> = vec![int(1).into(), raw("b"), text("c").into()];
        let expr = wrap(items);
        let rendered = expr.to_sql().unwrap();
        assert_eq!(rendered.sql, "($1, b, $2)");
        assert_eq!(rendered.args, vec![Value::Int(1), Value::from("c")]);
    }

    #[test]
    fn test_empty_wrap_is_malformed() {
        let expr = wrap(Vec::<ExprRef>::new());
        let err = expr.to_sql().unwrap_err();
        assert!(matches!(err, SqlExprError::MalformedTree(_)));
    }

    #[test]
    fn test_error_inside_tree_aborts_render() {
        let expr = binary(int(1), BinaryOperator::In, wrap(Vec::<ExprRef>::new()));
        assert!(expr.to_sql().is_err());
    }

    #[test]
    fn test_columns() {
        let email = table_column::<StringExpression>("users", "email");
        assert_eq!(email.to_sql().unwrap().sql, "users.email");

        let order = table_column::<IntegerExpression>("order", "user");
        assert_eq!(order.to_sql().unwrap().sql, "\"order\".\"user\"");
    }

    #[test]
    fn test_columns_unqualified_in_insert() {
        let id = table_column::<IntegerExpression>("users", "id");
        let rendered = render(&id, StatementType::Insert, &RenderConfig::default()).unwrap();
        assert_eq!(rendered.sql, "id");
    }
}

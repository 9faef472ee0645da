//! Column references, typed by the family of the column's SQL type.

use std::sync::Arc;

use crate::ast::nodes::ColumnExpression;
use crate::ast::typed::TypedExpression;

/// Unqualified column: `column::<IntegerExpression>("id")`.
pub fn column<T: TypedExpression>(name: &str) -> T {
    T::from_node(Arc::new(ColumnExpression {
        table: None,
        name: name.to_string(),
    }))
}

/// Table-qualified column: `table_column::<StringExpression>("users", "email")`.
pub fn table_column<T: TypedExpression>(table: &str, name: &str) -> T {
    T::from_node(Arc::new(ColumnExpression {
        table: Some(table.to_string()),
        name: name.to_string(),
    }))
}

//! # sqlexpr: typed SQL expressions
//!
//! Compose SQL scalar expressions as typed values, then render them to
//! parameterized SQL text plus the ordered argument list for a prepared statement.
//! Operators only accept operands of their own family, so mixing a string with
//! an integer is a compile error rather than a runtime surprise.
//!
//! ## Quick Example
//!
//! ```rust
//! use sqlexpr::prelude::*;
//!
//! let age = table_column::<IntegerExpression>("users", "age");
//! let name = table_column::<StringExpression>("users", "name");
//!
//! let cond = age.gt_eq(int(18)).and(name.like(text("A%")));
//! let rendered = cond.to_sql().unwrap();
//!
//! assert_eq!(rendered.sql, "((users.age >= $1) AND (users.name LIKE $2))");
//! assert_eq!(rendered.args, vec![Value::Int(18), Value::from("A%")]);
//! ```
//!
//! ## Constants
//!
//! Literals are bound as arguments by default. `.constant()` renders one inline:
//!
//! ```rust
//! use sqlexpr::prelude::*;
//!
//! let rendered = int(1).add(int(2).constant()).to_sql().unwrap();
//! assert_eq!(rendered.sql, "($1 + 2)");
//! assert_eq!(rendered.args, vec![Value::Int(1)]);
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod transpiler;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::config::RenderConfig;
    pub use crate::error::*;
    pub use crate::transpiler::{render, Dialect, PlaceholderStyle, Rendered, SqlBuilder, ToSql};
}

//! Render expression trees into parameterized SQL.

pub mod builder;
pub mod dialect;

pub use builder::{Rendered, SqlBuilder};
pub use dialect::{Dialect, OperatorSyntax, PlaceholderStyle};

use tracing::trace;

use crate::ast::{Expression, SerializeOptions, StatementType};
use crate::config::RenderConfig;
use crate::error::SqlExprResult;

/// Run one render pass over `expr` with a fresh sink.
///
/// On error nothing is returned: partially written SQL is discarded with the sink.
pub fn render<E>(
    expr: &E,
    statement: StatementType,
    config: &RenderConfig,
) -> SqlExprResult<Rendered>
where
    E: Expression + ?Sized,
{
    let mut out = SqlBuilder::from_config(config);
    let options = if config.skip_top_level_wrap {
        SerializeOptions::skip_wrap()
    } else {
        SerializeOptions::default()
    };

    trace!(?statement, dialect = ?config.dialect, "render start");
    expr.serialize(statement, &mut out, options)?;
    let rendered = out.finish();
    trace!(sql = %rendered.sql, args = rendered.args.len(), "render done");

    Ok(rendered)
}

/// Trait for converting expressions to SQL.
pub trait ToSql {
    /// Render as a SELECT-context expression with the default config.
    fn to_sql(&self) -> SqlExprResult<Rendered> {
        self.to_sql_with(&RenderConfig::default())
    }

    /// Render as a SELECT-context expression with a specific config.
    fn to_sql_with(&self, config: &RenderConfig) -> SqlExprResult<Rendered>;
}

impl<E> ToSql for E
where
    E: Expression + ?Sized,
{
    fn to_sql_with(&self, config: &RenderConfig) -> SqlExprResult<Rendered> {
        render(self, StatementType::Select, config)
    }
}

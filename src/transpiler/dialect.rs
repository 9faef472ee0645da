//! Dialect-specific rendering details: placeholders, identifier quoting,
//! operator spelling and inline literals.

use serde::{Deserialize, Serialize};

use crate::ast::operators::{BinaryOperator, PostfixOperator};
use crate::ast::Value;
use crate::error::{SqlExprError, SqlExprResult};

/// SQL reserved words that must be quoted when used as identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "all", "and", "as", "between", "case", "check", "constraint", "create", "default", "delete",
    "distinct", "drop", "else", "end", "false", "foreign", "from", "group", "having", "in",
    "index", "inner", "insert", "is", "join", "key", "left", "like", "limit", "not", "null",
    "offset", "on", "or", "order", "outer", "primary", "references", "right", "select", "table",
    "then", "true", "union", "update", "user", "when", "where",
];

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Postgres,
    MySql,
    Sqlite,
    SqlServer,
}

impl Dialect {
    /// Placeholder style used when the config does not override it.
    pub fn default_placeholder(&self) -> PlaceholderStyle {
        match self {
            Dialect::Postgres => PlaceholderStyle::Dollar,
            Dialect::MySql | Dialect::Sqlite => PlaceholderStyle::Question,
            Dialect::SqlServer => PlaceholderStyle::AtP,
        }
    }

    /// Quote an identifier unconditionally.
    pub fn quote_identifier(&self, name: &str) -> String {
        match self {
            Dialect::Postgres | Dialect::Sqlite => format!("\"{}\"", name.replace('"', "\"\"")),
            Dialect::MySql => format!("`{}`", name.replace('`', "``")),
            Dialect::SqlServer => format!("[{}]", name.replace(']', "]]")),
        }
    }

    /// Quote an identifier only if it's a reserved word or contains special chars.
    pub fn escape_identifier(&self, name: &str) -> String {
        let lower = name.to_lowercase();
        let needs_escaping = name.is_empty()
            || RESERVED_WORDS.contains(&lower.as_str())
            || name.chars().any(|c| !c.is_alphanumeric() && c != '_')
            || name.chars().next().is_some_and(|c| c.is_numeric());

        if needs_escaping {
            self.quote_identifier(name)
        } else {
            name.to_string()
        }
    }
}

/// Spelling of a binary operator in a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorSyntax {
    /// `(lhs OP rhs)`
    Infix(&'static str),
    /// `NAME(lhs, rhs)`
    Function(&'static str),
}

impl Dialect {
    /// How `op` is written, or an error when the dialect has no equivalent.
    pub fn binary_operator(&self, op: BinaryOperator) -> SqlExprResult<OperatorSyntax> {
        use BinaryOperator::*;
        use OperatorSyntax::{Function, Infix};

        let syntax = match (self, op) {
            (Dialect::Postgres, _) => Infix(op.as_str()),

            // `||` is logical OR and `#` starts a comment unless the server runs
            // with PIPES_AS_CONCAT; `^` is XOR.
            (Dialect::MySql, Concat) => Function("CONCAT"),
            (Dialect::MySql, BitXor) => Infix("^"),
            (Dialect::MySql, Pow) => Function("POW"),
            (Dialect::MySql, IsNotDistinctFrom) => Infix("<=>"),
            (Dialect::MySql, IsDistinctFrom | SimilarTo | NotSimilarTo) => {
                return Err(SqlExprError::unsupported(op.as_str(), *self));
            }

            (Dialect::Sqlite, IsDistinctFrom) => Infix("IS NOT"),
            (Dialect::Sqlite, IsNotDistinctFrom) => Infix("IS"),
            (Dialect::Sqlite, Pow) => Function("POWER"),
            (Dialect::Sqlite, BitXor | SimilarTo | NotSimilarTo) => {
                return Err(SqlExprError::unsupported(op.as_str(), *self));
            }

            (Dialect::SqlServer, Concat) => Infix("+"),
            (Dialect::SqlServer, BitXor) => Infix("^"),
            (Dialect::SqlServer, Pow) => Function("POWER"),
            (Dialect::SqlServer, BitShiftLeft) => Function("LEFT_SHIFT"),
            (Dialect::SqlServer, BitShiftRight) => Function("RIGHT_SHIFT"),
            (Dialect::SqlServer, SimilarTo | NotSimilarTo) => {
                return Err(SqlExprError::unsupported(op.as_str(), *self));
            }

            _ => Infix(op.as_str()),
        };
        Ok(syntax)
    }

    /// Text of a postfix operator, or an error when the dialect has no equivalent.
    pub fn postfix_operator(&self, op: PostfixOperator) -> SqlExprResult<&'static str> {
        use PostfixOperator::*;

        match (self, op) {
            (Dialect::Sqlite, IsUnknown | IsNotUnknown)
            | (Dialect::SqlServer, IsTrue | IsNotTrue | IsFalse | IsNotFalse)
            | (Dialect::SqlServer, IsUnknown | IsNotUnknown) => {
                Err(SqlExprError::unsupported(op.as_str(), *self))
            }
            _ => Ok(op.as_str()),
        }
    }

    /// SQL literal text for a value rendered inline.
    pub fn literal(&self, value: &Value) -> SqlExprResult<String> {
        match (self, value) {
            // Backslash is an escape character inside MySQL string literals.
            (Dialect::MySql, Value::String(s)) => Ok(format!(
                "'{}'",
                s.replace('\\', "\\\\").replace('\'', "''")
            )),
            (Dialect::SqlServer, Value::Bool(b)) => Ok(if *b { "1" } else { "0" }.to_string()),
            _ => value.to_sql_literal(),
        }
    }
}

/// How a parametrized argument appears in the SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    /// `?`
    Question,
    /// `$1`, `$2`, ...
    Dollar,
    /// `:1`, `:2`, ...
    Colon,
    /// `@p1`, `@p2`, ...
    AtP,
}

impl PlaceholderStyle {
    /// Placeholder for the 1-based argument `index`.
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            PlaceholderStyle::Question => "?".to_string(),
            PlaceholderStyle::Dollar => format!("${}", index),
            PlaceholderStyle::Colon => format!(":{}", index),
            PlaceholderStyle::AtP => format!("@p{}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        assert_eq!(PlaceholderStyle::Question.placeholder(3), "?");
        assert_eq!(PlaceholderStyle::Dollar.placeholder(3), "$3");
        assert_eq!(PlaceholderStyle::Colon.placeholder(1), ":1");
        assert_eq!(PlaceholderStyle::AtP.placeholder(2), "@p2");
    }

    #[test]
    fn test_escape_identifier() {
        let pg = Dialect::Postgres;
        assert_eq!(pg.escape_identifier("email"), "email");
        assert_eq!(pg.escape_identifier("order"), "\"order\"");
        assert_eq!(pg.escape_identifier("first name"), "\"first name\"");
        assert_eq!(pg.escape_identifier("1st"), "\"1st\"");
        assert_eq!(Dialect::MySql.escape_identifier("user"), "`user`");
        assert_eq!(Dialect::SqlServer.escape_identifier("key"), "[key]");
    }

    #[test]
    fn test_operator_spelling() {
        use BinaryOperator::*;

        assert_eq!(Dialect::Postgres.binary_operator(BitXor).unwrap(), OperatorSyntax::Infix("#"));
        assert_eq!(Dialect::MySql.binary_operator(BitXor).unwrap(), OperatorSyntax::Infix("^"));
        assert_eq!(
            Dialect::MySql.binary_operator(Concat).unwrap(),
            OperatorSyntax::Function("CONCAT")
        );
        assert_eq!(Dialect::SqlServer.binary_operator(Concat).unwrap(), OperatorSyntax::Infix("+"));
        assert_eq!(
            Dialect::SqlServer.binary_operator(Pow).unwrap(),
            OperatorSyntax::Function("POWER")
        );
        assert_eq!(
            Dialect::Sqlite.binary_operator(IsNotDistinctFrom).unwrap(),
            OperatorSyntax::Infix("IS")
        );
        assert_eq!(Dialect::MySql.binary_operator(Eq).unwrap(), OperatorSyntax::Infix("="));
    }

    #[test]
    fn test_unsupported_operators() {
        let err = Dialect::MySql.binary_operator(BinaryOperator::SimilarTo).unwrap_err();
        assert!(matches!(
            err,
            SqlExprError::UnsupportedOperator { dialect: Dialect::MySql, .. }
        ));
        assert!(Dialect::Sqlite.binary_operator(BinaryOperator::BitXor).is_err());
        assert!(Dialect::SqlServer.postfix_operator(PostfixOperator::IsTrue).is_err());
        assert_eq!(
            Dialect::SqlServer.postfix_operator(PostfixOperator::IsNull).unwrap(),
            "IS NULL"
        );
        assert_eq!(
            Dialect::MySql.postfix_operator(PostfixOperator::IsUnknown).unwrap(),
            "IS UNKNOWN"
        );
    }

    #[test]
    fn test_literals() {
        let sneaky = Value::from("\\' OR 1=1 -- ");
        assert_eq!(Dialect::Postgres.literal(&sneaky).unwrap(), "'\\'' OR 1=1 -- '");
        assert_eq!(Dialect::MySql.literal(&sneaky).unwrap(), "'\\\\'' OR 1=1 -- '");
        assert_eq!(Dialect::SqlServer.literal(&Value::Bool(true)).unwrap(), "1");
        assert_eq!(Dialect::SqlServer.literal(&Value::Bool(false)).unwrap(), "0");
        assert_eq!(Dialect::MySql.literal(&Value::Bool(true)).unwrap(), "TRUE");
        assert!(Dialect::MySql.literal(&Value::Float(f64::NAN)).is_err());
    }

    #[test]
    fn test_default_placeholders() {
        assert_eq!(Dialect::Postgres.default_placeholder(), PlaceholderStyle::Dollar);
        assert_eq!(Dialect::MySql.default_placeholder(), PlaceholderStyle::Question);
        assert_eq!(Dialect::SqlServer.default_placeholder(), PlaceholderStyle::AtP);
    }
}

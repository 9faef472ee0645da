//! The closed operator vocabulary.
//!
//! Operator nodes can only be built from these enums, so an operator outside the
//! vocabulary is rejected before any tree exists. Text is parsed back through
//! `FromStr` for callers (generated code, tooling) that carry operators as strings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SqlExprError;

/// Infix operators: `(lhs OP rhs)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Eq,
    NotEq,
    IsDistinctFrom,
    IsNotDistinctFrom,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
    Add,
    Sub,
    Mul,
    Div,
    /// Modulo (%)
    Mod,
    /// Exponentiation (^)
    Pow,
    /// String concatenation (||)
    Concat,
    Like,
    NotLike,
    SimilarTo,
    NotSimilarTo,
    In,
    NotIn,
    BitAnd,
    BitOr,
    /// Bitwise XOR, `#` in PostgreSQL
    BitXor,
    BitShiftLeft,
    BitShiftRight,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 28] = [
        Self::Eq,
        Self::NotEq,
        Self::IsDistinctFrom,
        Self::IsNotDistinctFrom,
        Self::Lt,
        Self::LtEq,
        Self::Gt,
        Self::GtEq,
        Self::And,
        Self::Or,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Pow,
        Self::Concat,
        Self::Like,
        Self::NotLike,
        Self::SimilarTo,
        Self::NotSimilarTo,
        Self::In,
        Self::NotIn,
        Self::BitAnd,
        Self::BitOr,
        Self::BitXor,
        Self::BitShiftLeft,
        Self::BitShiftRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::IsDistinctFrom => "IS DISTINCT FROM",
            Self::IsNotDistinctFrom => "IS NOT DISTINCT FROM",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Concat => "||",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::SimilarTo => "SIMILAR TO",
            Self::NotSimilarTo => "NOT SIMILAR TO",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "#",
            Self::BitShiftLeft => "<<",
            Self::BitShiftRight => ">>",
        }
    }

    /// True for operators whose result is a boolean.
    pub fn is_predicate(&self) -> bool {
        matches!(
            self,
            Self::Eq
                | Self::NotEq
                | Self::IsDistinctFrom
                | Self::IsNotDistinctFrom
                | Self::Lt
                | Self::LtEq
                | Self::Gt
                | Self::GtEq
                | Self::And
                | Self::Or
                | Self::Like
                | Self::NotLike
                | Self::SimilarTo
                | Self::NotSimilarTo
                | Self::In
                | Self::NotIn
        )
    }
}

/// Unary operators written before the operand: `OP (operand)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrefixOperator {
    Not,
    /// Arithmetic negation
    Minus,
    /// Bitwise NOT
    BitNot,
}

impl PrefixOperator {
    pub const ALL: [PrefixOperator; 3] = [Self::Not, Self::Minus, Self::BitNot];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::Minus => "-",
            Self::BitNot => "~",
        }
    }
}

/// Unary operators written after the operand: `(operand) OP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostfixOperator {
    IsNull,
    IsNotNull,
    IsTrue,
    IsNotTrue,
    IsFalse,
    IsNotFalse,
    IsUnknown,
    IsNotUnknown,
}

impl PostfixOperator {
    pub const ALL: [PostfixOperator; 8] = [
        Self::IsNull,
        Self::IsNotNull,
        Self::IsTrue,
        Self::IsNotTrue,
        Self::IsFalse,
        Self::IsNotFalse,
        Self::IsUnknown,
        Self::IsNotUnknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
            Self::IsTrue => "IS TRUE",
            Self::IsNotTrue => "IS NOT TRUE",
            Self::IsFalse => "IS FALSE",
            Self::IsNotFalse => "IS NOT FALSE",
            Self::IsUnknown => "IS UNKNOWN",
            Self::IsNotUnknown => "IS NOT UNKNOWN",
        }
    }
}

/// Normalize operator text: trim, collapse inner whitespace, uppercase keywords.
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

macro_rules! impl_operator_text {
    ($($ty:ident),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = SqlExprError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    let wanted = normalize(s);
                    Self::ALL
                        .iter()
                        .copied()
                        .find(|op| op.as_str() == wanted)
                        .ok_or_else(|| SqlExprError::invalid_operator(s))
                }
            }
        )*
    };
}

impl_operator_text!(BinaryOperator, PrefixOperator, PostfixOperator);

//! Error types for expression parsing.

use thiserror::Error;

/// A specialized Result type for expression operations.
pub type ExprResult<T> = Result<T, ExprError>;

/// Errors raised while turning text into an [`Expression`](crate::Expression).
///
/// Positions are byte offsets into the original input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    /// The input contained nothing but whitespace.
    #[error("Empty expression")]
    Empty,

    /// A character that starts no token.
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        position: usize,
    },

    /// A malformed numeric literal such as `1.2.3`.
    #[error("Invalid number literal '{literal}' at position {position}")]
    InvalidNumber {
        /// The literal as written.
        literal: String,
        /// Byte offset of the literal.
        position: usize,
    },

    /// A `(` that is never closed.
    #[error("Unclosed parenthesis at position {position}")]
    UnclosedParen {
        /// Byte offset of the `(`.
        position: usize,
    },

    /// A `)` with no matching `(`.
    #[error("Unmatched ')' at position {position}")]
    UnmatchedParen {
        /// Byte offset of the `)`.
        position: usize,
    },

    /// A name that is neither the variable, a constant nor a known function.
    #[error("Unknown identifier '{name}' at position {position}")]
    UnknownIdentifier {
        /// The identifier.
        name: String,
        /// Byte offset of the identifier.
        position: usize,
    },

    /// A function name not followed by `(`.
    #[error("Function '{name}' at position {position} needs parenthesised arguments")]
    MissingArguments {
        /// Function name as written.
        name: String,
        /// Byte offset of the name.
        position: usize,
    },

    /// A function called with the wrong number of arguments.
    #[error("Function '{name}' takes {expected} argument(s), got {actual}")]
    ArgumentCount {
        /// Function name as written.
        name: String,
        /// Required argument count.
        expected: usize,
        /// Supplied argument count.
        actual: usize,
    },

    /// Rejected by the symbolic parser, e.g. misplaced operators.
    #[error("Syntax error: {message}")]
    Syntax {
        /// Parser message.
        message: String,
    },

    /// Parsed, but cannot be evaluated numerically.
    #[error("Cannot evaluate expression: {message}")]
    Evaluation {
        /// Evaluator message.
        message: String,
    },
}

impl ExprError {
    /// Byte offset the error points at, when it has one.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedChar { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::UnclosedParen { position }
            | Self::UnmatchedParen { position }
            | Self::UnknownIdentifier { position, .. }
            | Self::MissingArguments { position, .. } => Some(*position),
            Self::Empty
            | Self::ArgumentCount { .. }
            | Self::Syntax { .. }
            | Self::Evaluation { .. } => None,
        }
    }
}

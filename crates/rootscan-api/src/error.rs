//! API error types.

use rootscan_expr::ExprError;
use rootscan_math::MathError;
use serde::Serialize;
use thiserror::Error;

use crate::dto::BisectionRow;

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The equation text could not be parsed.
    #[error("Invalid expression: {0}")]
    InvalidExpression(#[from] ExprError),

    /// A request field is missing or out of range.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The solver stopped with an error.
    #[error("{error}")]
    Solver {
        /// Why the solver stopped.
        error: MathError,
        /// Bisection iterations completed before the error.
        trace: Option<Vec<BisectionRow>>,
    },
}

impl ApiError {
    /// Creates a solver error without a trace.
    pub fn solver(error: MathError) -> Self {
        Self::Solver { error, trace: None }
    }

    /// Stable upper-case error code.
    pub fn code(&self) -> String {
        match self {
            ApiError::InvalidExpression(_) => "INVALID_EXPRESSION".to_string(),
            ApiError::Validation(_) => "VALIDATION_ERROR".to_string(),
            ApiError::Solver { error, .. } => error.code().to_uppercase(),
        }
    }

    /// Builds the error response body.
    pub fn to_response(&self) -> ErrorResponse {
        let history = match self {
            ApiError::Solver { trace, .. } => trace.clone().filter(|t| !t.is_empty()),
            _ => None,
        };
        ErrorResponse {
            error: ErrorBody {
                code: self.code(),
                message: self.to_string(),
                history,
            },
        }
    }
}

impl From<MathError> for ApiError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InvalidInput { reason } => ApiError::Validation(reason),
            other => ApiError::solver(other),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error body details.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<BisectionRow>>,
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Unsupported property: {0}")]
    UnsupportedProperty(String),

    #[error("Invalid value '{value}' for property '{property}'")]
    InvalidFilterValue { property: String, value: String },

    #[error("Operator '{operator}' is not supported for property '{property}'")]
    UnsupportedOperator { property: String, operator: String },

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error")]
    InternalServerError,
}

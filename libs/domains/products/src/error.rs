use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    /// A business rule was violated (blank name, non-positive price, bad id)
    #[error("{0}")]
    InvalidArgument(String),

    /// Only raised at the HTTP boundary; lower layers report absence as `None`
    #[error("Product {0} not found")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ProductError::InvalidArgument(message.into())
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::InvalidArgument(msg) => AppError::BadRequest(msg),
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

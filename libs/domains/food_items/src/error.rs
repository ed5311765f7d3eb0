use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum FoodItemError {
    #[error("Food item not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type FoodItemResult<T> = Result<T, FoodItemError>;

/// Convert FoodItemError to AppError for standardized error responses
impl From<FoodItemError> for AppError {
    fn from(err: FoodItemError) -> Self {
        match err {
            FoodItemError::NotFound(id) => {
                AppError::NotFound(format!("Food item {} not found", id))
            }
            FoodItemError::Validation(msg) => AppError::BadRequest(msg),
            FoodItemError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for FoodItemError {
    fn into_response(self) -> Response {
        // Convert to AppError for standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

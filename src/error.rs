use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0} already exists")]
    Conflict(String),
    #[error("movie database request failed: {0}")]
    Upstream(#[source] reqwest::Error),
    #[error("unexpected movie database response: {0}")]
    BadResponse(String),
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Upstream(_) | AppError::BadResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::BadResponse(err.to_string())
        } else {
            AppError::Upstream(err)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = crate::templates::error_page(self.to_string());
        (self.status(), Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

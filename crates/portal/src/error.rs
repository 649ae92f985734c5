//! Unified error handling.
//!
//! Provides a unified `AppError` type for the page-serving handlers. A
//! catalog failure renders the full-page error state; an unknown product id
//! renders the informative not-found state. Neither exposes internal
//! details to the client, and nothing propagates as an uncaught failure to
//! the view layer.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::catalog::CatalogError;

/// Application-level error type for the portal pages.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog feed could not be read or parsed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Product not found in the catalog.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Full-page error state with a way back.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {
    message: &'static str,
}

/// Informative empty state for a missing product.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Catalog(err) => {
                tracing::error!(error = %err, "catalog fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorTemplate {
                        message: "Failed to load product library.",
                    },
                )
                    .into_response()
            }
            Self::NotFound(id) => {
                tracing::info!(product_id = %id, "detail requested for unknown product");
                (
                    StatusCode::NOT_FOUND,
                    NotFoundTemplate {
                        message: "Asset not found in your library.",
                    },
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display() {
        let err = AppError::NotFound("meal-planner".to_string());
        assert_eq!(err.to_string(), "Not found: meal-planner");

        let err = AppError::Catalog(CatalogError::Io("gone".to_string()));
        assert_eq!(err.to_string(), "Catalog error: IO error: gone");
    }

    #[test]
    fn app_error_status_codes() {
        let response = AppError::NotFound("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::Catalog(CatalogError::Parse("bad".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

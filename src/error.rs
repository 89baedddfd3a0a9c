use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use validator::ValidationErrors;

use crate::catalog::CatalogError;

pub const MISSING_ID_MESSAGE: &str = "Manga ID is required";
const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";
const COVER_ERROR_MESSAGE: &str = "Failed to fetch cover image";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Validation error")]
    Validation(ValidationErrors),

    #[error("Catalog error")]
    Catalog(CatalogError),

    #[error("Cover error")]
    Cover(CatalogError),
}

impl From<CatalogError> for Error {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Error::Validation(validation_error) => {
                tracing::warn!(err.msg = %validation_error, err.details = ?validation_error, "Validation Error");

                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": MISSING_ID_MESSAGE })),
                )
                    .into_response()
            }
            Error::Catalog(catalog_error) => {
                tracing::error!(err.msg = %catalog_error, err.details = ?catalog_error, "Error fetching manga details");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
                )
                    .into_response()
            }
            Error::Cover(catalog_error) => {
                tracing::error!(err.msg = %catalog_error, err.details = ?catalog_error, "Error fetching cover image");

                (StatusCode::INTERNAL_SERVER_ERROR, COVER_ERROR_MESSAGE).into_response()
            }
        }
    }
}

use axum::{
    Json,
    extract::{Path, State},
};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{error::Error, model::MangaSummary, state::SharedAppState};

#[tracing::instrument(name = "[GET] manga/{id}", skip_all, fields(path.id = %path.id))]
pub async fn show(
    State(app_state): State<SharedAppState>,
    Path(path): Path<UrlPath>,
) -> Result<Json<MangaSummary>, Error> {
    path.validate().map_err(Error::Validation)?;

    let record = app_state.catalog.fetch_manga(&path.id).await?;

    Ok(Json(MangaSummary::from_record(&path.id, record)))
}

/// `/manga` and `/manga/` have no id segment to extract.
#[tracing::instrument(name = "[GET] manga", skip_all)]
pub async fn missing_id() -> Error {
    let mut errors = ValidationErrors::new();
    errors.add("id", ValidationError::new("required"));

    Error::Validation(errors)
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Validate)]
pub struct UrlPath {
    #[validate(custom(function = "validate_not_blank"))]
    id: String,
}

fn validate_not_blank(id: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

use axum::{
    extract::{Path, State},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};

use crate::{error::Error, state::SharedAppState};

#[derive(serde::Deserialize, Debug)]
pub struct CoverPath {
    id: String,
    filename: String,
}

/// Relay the cover bytes untouched, mirroring the upstream content type.
#[tracing::instrument(name = "[GET] cover/{id}/{filename}", skip_all, fields(path.id = %path.id, path.filename = %path.filename))]
pub async fn show(
    State(app_state): State<SharedAppState>,
    Path(path): Path<CoverPath>,
) -> Result<Response, Error> {
    let cover = app_state
        .catalog
        .fetch_cover(&path.id, &path.filename)
        .await
        .map_err(Error::Cover)?;

    let content_type = HeaderValue::from_str(&cover.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));

    Ok(([(header::CONTENT_TYPE, content_type)], cover.bytes).into_response())
}

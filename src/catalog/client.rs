use axum::body::Bytes;
use reqwest::{Client, Response, header};
use url::Url;

use crate::config::Upstream;

use super::{
    error::CatalogError,
    record::{MangaRecord, MangaResponse},
};

const RELATIONSHIP_INCLUDES: [(&str, &str); 3] = [
    ("includes[]", "cover_art"),
    ("includes[]", "author"),
    ("includes[]", "artist"),
];

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Raw cover bytes plus the content type the image host reported.
#[derive(Debug)]
pub struct CoverImage {
    pub content_type: String,
    pub bytes: Bytes,
}

#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: Client,
    api_url: Url,
    uploads_url: Url,
}

impl CatalogClient {
    pub fn new(upstream: &Upstream) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .user_agent(upstream.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            api_url: Url::parse(&upstream.api_url)?,
            uploads_url: Url::parse(&upstream.uploads_url)?,
        })
    }

    #[tracing::instrument(name = "fetch manga from catalog", skip(self))]
    pub async fn fetch_manga(&self, id: &str) -> Result<MangaRecord, CatalogError> {
        let response = self
            .http
            .get(endpoint(&self.api_url, &["manga", id])?)
            .query(&RELATIONSHIP_INCLUDES)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let body = ensure_success(response)?.bytes().await?;
        let manga: MangaResponse = serde_json::from_slice(&body)?;

        Ok(manga.data)
    }

    #[tracing::instrument(name = "fetch cover from image host", skip(self))]
    pub async fn fetch_cover(&self, id: &str, filename: &str) -> Result<CoverImage, CatalogError> {
        let response = self
            .http
            .get(endpoint(&self.uploads_url, &["covers", id, filename])?)
            .send()
            .await?;

        let response = ensure_success(response)?;
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        let bytes = response.bytes().await?;

        tracing::debug!(size = bytes.len(), %content_type, "cover fetched");

        Ok(CoverImage {
            content_type,
            bytes,
        })
    }
}

/// Appends `segments` to `base`, each percent-encoded as exactly one path segment.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, CatalogError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| CatalogError::BaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

fn ensure_success(response: Response) -> Result<Response, CatalogError> {
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status));
    }

    Ok(response)
}

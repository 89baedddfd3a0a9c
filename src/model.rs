use serde_json::Value;

use crate::catalog::record::{
    LocalizedString, MangaRecord, Relationship, RelationshipType, english,
};

const UNKNOWN: &str = "Unknown";
const NO_TITLE: &str = "No Title";
const NO_DESCRIPTION: &str = "No description available";

#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MangaSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub artist: String,
    pub content_rating: String,
    pub tags: Vec<Option<String>>,
    pub cover_image: Option<String>,
    pub publication: String,
    pub description: String,
    pub alt_titles: Vec<String>,
}

impl MangaSummary {
    /// `requested_id` is the id the client asked for; the cover path is built from it.
    #[tracing::instrument(name = "transform manga", skip(record), fields(manga_id = %record.id))]
    pub fn from_record(requested_id: &str, record: MangaRecord) -> Self {
        let attributes = record.attributes;

        let cover_image = cover_file_name(&record.relationships)
            .map(|file_name| cover_path(requested_id, file_name));

        let tags = attributes
            .tags
            .unwrap_or_default()
            .into_iter()
            .map(|tag| {
                tag.attributes
                    .and_then(|a| a.name)
                    .and_then(|name| name.get("en").and_then(Value::as_str).map(str::to_owned))
            })
            .collect();

        MangaSummary {
            id: record.id,
            title: english(attributes.title.as_ref())
                .unwrap_or(NO_TITLE)
                .to_owned(),
            author: join_names(&record.relationships, RelationshipType::Author),
            artist: join_names(&record.relationships, RelationshipType::Artist),
            content_rating: or_unknown(attributes.content_rating),
            tags,
            cover_image,
            publication: or_unknown(attributes.publication_demographic),
            description: english(attributes.description.as_ref())
                .unwrap_or(NO_DESCRIPTION)
                .to_owned(),
            alt_titles: attributes
                .alt_titles
                .as_deref()
                .map(flatten_localized)
                .unwrap_or_default(),
        }
    }
}

/// Same-origin path the cover passthrough route serves.
pub fn cover_path(manga_id: &str, file_name: &str) -> String {
    format!("/cover/{}/{}", manga_id, file_name)
}

/// Every string value of every map, in list order then key order.
pub fn flatten_localized(maps: &[LocalizedString]) -> Vec<String> {
    maps.iter()
        .flat_map(|map| map.values())
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect()
}

fn cover_file_name(relationships: &[Relationship]) -> Option<&str> {
    relationships
        .iter()
        .find(|rel| rel.kind == RelationshipType::CoverArt)
        .and_then(|rel| rel.attributes.as_ref())
        .and_then(|attributes| attributes.file_name.as_deref())
        .filter(|file_name| !file_name.is_empty())
}

// A relationship without a name still takes its slot in the list.
fn join_names(relationships: &[Relationship], kind: RelationshipType) -> String {
    let joined = relationships
        .iter()
        .filter(|rel| rel.kind == kind)
        .map(|rel| {
            rel.attributes
                .as_ref()
                .and_then(|attributes| attributes.name.as_deref())
                .unwrap_or_default()
        })
        .collect::<Vec<&str>>()
        .join(", ");

    if joined.is_empty() {
        UNKNOWN.to_owned()
    } else {
        joined
    }
}

fn or_unknown(value: Option<String>) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_owned())
}

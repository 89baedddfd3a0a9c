use serde::{Deserialize, Deserializer, de::IgnoredAny};
use serde_json::{Map, Value};

/// A locale code to text map, kept in upstream key order.
pub type LocalizedString = Map<String, Value>;

#[derive(Deserialize, Debug)]
pub struct MangaResponse {
    pub data: MangaRecord,
}

#[derive(Deserialize, Debug)]
pub struct MangaRecord {
    pub id: String,
    pub attributes: MangaAttributes,
    pub relationships: Vec<Relationship>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MangaAttributes {
    #[serde(default, deserialize_with = "deserialize_localized")]
    pub title: Option<LocalizedString>,
    #[serde(default, deserialize_with = "deserialize_localized")]
    pub description: Option<LocalizedString>,
    #[serde(default)]
    pub alt_titles: Option<Vec<LocalizedString>>,
    #[serde(default)]
    pub content_rating: Option<String>,
    #[serde(default)]
    pub publication_demographic: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}

#[derive(Deserialize, Debug)]
pub struct Tag {
    #[serde(default)]
    pub attributes: Option<TagAttributes>,
}

#[derive(Deserialize, Debug)]
pub struct TagAttributes {
    #[serde(default, deserialize_with = "deserialize_localized")]
    pub name: Option<LocalizedString>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    CoverArt,
    Author,
    Artist,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Debug)]
pub struct Relationship {
    #[serde(rename = "type", default)]
    pub kind: RelationshipType,
    #[serde(default)]
    pub attributes: Option<RelationshipAttributes>,
}

/// Only the fields read from expanded `author`, `artist` and `cover_art` entries.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
}

/// The catalog encodes an empty localized map as `[]`.
fn deserialize_localized<'de, D>(deserializer: D) -> Result<Option<LocalizedString>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Localized {
        Map(LocalizedString),
        Empty(Vec<IgnoredAny>),
    }

    Ok(match Option::<Localized>::deserialize(deserializer)? {
        Some(Localized::Map(map)) => Some(map),
        Some(Localized::Empty(_)) | None => None,
    })
}

/// English text from a localized map, treating an empty string as missing.
pub fn english(localized: Option<&LocalizedString>) -> Option<&str> {
    localized
        .and_then(|map| map.get("en"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

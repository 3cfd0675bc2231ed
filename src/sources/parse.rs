//! Content API response decoding.

use serde::Deserialize;

use crate::state::{ResponseStatus, Story};

/// Top-level `{"response": {...}}` wrapper.
#[derive(Deserialize)]
struct Envelope {
    /// Payload object.
    response: ResponseBody,
}

/// Payload holding the result array.
#[derive(Deserialize)]
struct ResponseBody {
    /// Result entries in API order.
    results: Vec<RawStory>,
}

/// One result entry as delivered by the API.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStory {
    /// API identifier.
    id: String,
    /// Section identifier.
    section_id: String,
    /// Section display name.
    section_name: String,
    /// ISO-8601 timestamp.
    web_publication_date: String,
    /// Web title.
    web_title: String,
    /// Public URL.
    web_url: String,
    /// API self link.
    api_url: String,
    /// Optional `show-fields` block.
    #[serde(default)]
    fields: Option<RawFields>,
}

/// Optional per-story fields requested through `show-fields`.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawFields {
    /// Editorial headline.
    #[serde(default)]
    headline: Option<String>,
    /// Author line.
    #[serde(default)]
    byline: Option<String>,
    /// Short summary, may contain HTML.
    #[serde(default)]
    trail_text: Option<String>,
}

impl From<RawStory> for Story {
    fn from(raw: RawStory) -> Self {
        let fields = raw.fields.unwrap_or_default();
        Self {
            id: raw.id,
            section_id: raw.section_id,
            section_name: raw.section_name,
            published: raw.web_publication_date,
            title: raw.web_title,
            headline: fields.headline.unwrap_or_default(),
            byline: fields.byline.unwrap_or_default(),
            trail_text: fields.trail_text.unwrap_or_default(),
            web_url: raw.web_url,
            api_url: raw.api_url,
        }
    }
}

/// What: Decode a response body into stories.
///
/// Inputs:
/// - `body`: JSON text of a 200 response
///
/// Output:
/// - Stories in API order.
///
/// # Errors
/// - `ParseError` for invalid JSON, a missing `response.results` array, or
///   any entry lacking a required field (no partial results)
/// - `EmptyResult` when the array is empty
pub fn parse_stories(body: &str) -> Result<Vec<Story>, ResponseStatus> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "[Parse] response did not match expected shape");
        ResponseStatus::ParseError(e.to_string())
    })?;
    let results = envelope.response.results;
    if results.is_empty() {
        return Err(ResponseStatus::EmptyResult);
    }
    Ok(results.into_iter().map(Story::from).collect())
}

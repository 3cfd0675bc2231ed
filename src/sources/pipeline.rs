//! Connectivity check, fetch and parse as one step.

use url::Url;

use super::parse::parse_stories;
use super::transport::Transport;
use crate::state::{ResponseStatus, Story};

/// What: Load stories for one request URL.
///
/// Inputs:
/// - `transport`: Network capability
/// - `url`: Request URL, `None` when the query was rejected
///
/// Output:
/// - Parsed stories or the failure status. Never panics.
///
/// # Errors
/// - `NetworkUnavailable` when the connectivity probe fails (fetch is skipped)
/// - Any status produced by the transport or the parser
pub async fn load_stories(
    transport: &dyn Transport,
    url: Option<&Url>,
) -> Result<Vec<Story>, ResponseStatus> {
    if !transport.is_connected().await {
        tracing::info!("[Pipeline] offline, request skipped");
        return Err(ResponseStatus::NetworkUnavailable);
    }
    fetch_stories(transport, url).await
}

/// What: Fetch and parse without the connectivity check.
///
/// # Errors
/// - Any status produced by the transport or the parser
pub async fn fetch_stories(
    transport: &dyn Transport,
    url: Option<&Url>,
) -> Result<Vec<Story>, ResponseStatus> {
    let body = transport.fetch(url).await?;
    parse_stories(&body)
}

//! Core value types used by newsq state.

use url::Url;

/// One parsed article as returned by the content API.
///
/// Built only by the response parser; never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Story {
    /// API identifier (e.g. `world/2025/oct/11/some-story`).
    pub id: String,
    /// Section identifier used in URLs (e.g. `world`).
    pub section_id: String,
    /// Human readable section name (e.g. `World news`).
    pub section_name: String,
    /// Publication timestamp as delivered by the API (ISO-8601).
    pub published: String,
    /// Web title; used when no headline field is present.
    pub title: String,
    /// Headline from the `fields` block, empty when absent.
    pub headline: String,
    /// Byline from the `fields` block, empty when absent.
    pub byline: String,
    /// Trailing summary text from the `fields` block, empty when absent.
    pub trail_text: String,
    /// Canonical public URL of the article.
    pub web_url: String,
    /// API self link.
    pub api_url: String,
}

impl Story {
    /// What: Headline suitable for display.
    ///
    /// Output:
    /// - `headline` when present, otherwise `title`.
    #[must_use]
    pub fn display_headline(&self) -> &str {
        if self.headline.trim().is_empty() {
            &self.title
        } else {
            &self.headline
        }
    }
}

/// Outcome classification for one completed request.
///
/// Success is represented by `Ok(stories)` next to this type; every variant
/// here is a failure that still gets delivered to the requesting screen.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResponseStatus {
    /// The server answered with a status other than 200.
    #[error("HTTP {code} {message}")]
    HttpError {
        /// Numeric HTTP status code.
        code: u16,
        /// Reason phrase reported for the status.
        message: String,
    },
    /// I/O failure (DNS, connect, timeout, reset) or no URL to connect to.
    #[error("connection error: {0}")]
    ConnectionError(String),
    /// Body was not JSON or did not have the expected shape.
    #[error("parse error: {0}")]
    ParseError(String),
    /// Well-formed response with zero results.
    #[error("no results")]
    EmptyResult,
    /// Connectivity probe failed; no request was attempted.
    #[error("network unavailable")]
    NetworkUnavailable,
}

/// One of the three tabs of the reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Fixed world headlines.
    #[default]
    World,
    /// Headlines of a user-selected section.
    Browse,
    /// Free-text search results.
    Search,
}

impl Screen {
    /// All screens in tab order.
    pub const ALL: [Self; 3] = [Self::World, Self::Browse, Self::Search];

    /// What: Position of the screen in the tab bar.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::World => 0,
            Self::Browse => 1,
            Self::Search => 2,
        }
    }

    /// What: Next screen in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::World => Self::Browse,
            Self::Browse => Self::Search,
            Self::Search => Self::World,
        }
    }

    /// What: Previous screen in tab order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::World => Self::Search,
            Self::Browse => Self::World,
            Self::Search => Self::Browse,
        }
    }

    /// What: Translation key of the tab title.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::World => "app.tabs.world",
            Self::Browse => "app.tabs.browse",
            Self::Search => "app.tabs.search",
        }
    }

    /// What: Parse a screen name from config or CLI input.
    ///
    /// Inputs:
    /// - `s`: Name such as `world`, `browse` or `search` (case-insensitive).
    ///
    /// Output:
    /// - `Some(Screen)` for a known name, `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "world" | "headlines" => Some(Self::World),
            "browse" | "sections" | "category" => Some(Self::Browse),
            "search" => Some(Self::Search),
            _ => None,
        }
    }
}

/// A browsable news category and the API section it maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    /// Label shown in the category bar.
    pub label: &'static str,
    /// API section used as the request path.
    pub section: &'static str,
}

/// Static category table for the Browse screen.
pub const CATEGORIES: [Category; 3] = [
    Category {
        label: "Business",
        section: "business",
    },
    Category {
        label: "Science",
        section: "science",
    },
    Category {
        label: "Technology",
        section: "technology",
    },
];

/// What: Find a category index by label or section name.
///
/// Inputs:
/// - `name`: Label (`Science`) or section (`science`), case-insensitive.
///
/// Output:
/// - Index into [`CATEGORIES`] or `None`.
#[must_use]
pub fn category_index(name: &str) -> Option<usize> {
    let needle = name.trim();
    CATEGORIES.iter().position(|c| {
        c.label.eq_ignore_ascii_case(needle) || c.section.eq_ignore_ascii_case(needle)
    })
}

/// Scheme and authority of the content API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// URL scheme (`https`).
    pub scheme: String,
    /// Host and optional port.
    pub authority: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            authority: "content.guardianapis.com".to_string(),
        }
    }
}

/// Lifecycle of a screen's most recent request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request sent, waiting for delivery.
    Loading,
    /// Stories delivered and shown.
    Delivered,
    /// Request finished with a failure status.
    Failed,
}

/// Request handed to the background fetch worker.
#[derive(Clone, Debug)]
pub struct FetchRequest {
    /// Screen that asked for the data.
    pub screen: Screen,
    /// Per-screen monotonically increasing sequence number.
    pub seq: u64,
    /// Fully built request URL, `None` when the query was rejected.
    pub url: Option<Url>,
}

/// Result delivered back from the background fetch worker.
#[derive(Clone, Debug)]
pub struct FetchOutcome {
    /// Screen the request belonged to.
    pub screen: Screen,
    /// Sequence number copied from the request.
    pub seq: u64,
    /// Parsed stories or the failure status.
    pub result: Result<Vec<Story>, ResponseStatus>,
}

//! Content API access: URL building, API key, transport, parsing.

pub mod api_key;
pub mod parse;
pub mod pipeline;
pub mod query;
pub mod transport;

pub use api_key::{ApiKeyError, api_key, decode_api_key};
pub use parse::parse_stories;
pub use pipeline::{fetch_stories, load_stories};
pub use query::{QueryError, QueryParams, api_url, build_url};
pub use transport::{HttpTransport, Transport};

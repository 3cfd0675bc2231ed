//! HTTP transport for the content API.
//!
//! The [`Transport`] trait is the seam between the fetch worker and the
//! network so tests can substitute a fake.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};
use url::Url;

use crate::state::ResponseStatus;
use crate::theme::Settings;

/// Upper bound for the connectivity probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// What: Reason phrase of a response's status line.
///
/// Details:
/// - The client only records the phrase when it differs from the standard
///   one for the code; otherwise the canonical phrase is used. Unknown codes
///   with no phrase give an empty string.
fn reason_phrase(response: &reqwest::Response) -> String {
    response
        .extensions()
        .get::<hyper::ext::ReasonPhrase>()
        .map(|r| String::from_utf8_lossy(r.as_bytes()).trim().to_string())
        .unwrap_or_else(|| {
            response
                .status()
                .canonical_reason()
                .unwrap_or_default()
                .to_string()
        })
}

/// Network capability used by the fetch pipeline.
#[async_trait]
pub trait Transport: Send + Sync {
    /// What: Cheap check whether the API host is reachable at all.
    async fn is_connected(&self) -> bool;

    /// What: Perform one GET and return the body of a 200 response.
    ///
    /// # Errors
    /// - `ConnectionError` for a missing URL or an I/O failure
    /// - `HttpError` for any status other than 200
    async fn fetch(&self, url: Option<&Url>) -> Result<String, ResponseStatus>;
}

/// `reqwest`-backed transport.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    /// Pooled client with timeouts applied.
    client: reqwest::Client,
    /// `host:port` resolved by the connectivity probe.
    probe_target: String,
}

impl HttpTransport {
    /// What: Build a transport from user settings.
    ///
    /// Inputs:
    /// - `settings`: Supplies timeouts and the API scheme/authority to probe.
    ///
    /// # Errors
    /// - Returns the `reqwest` error when the client cannot be constructed.
    pub fn from_settings(settings: &Settings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .read_timeout(Duration::from_secs(settings.read_timeout_secs))
            .user_agent(format!("newsq/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            probe_target: probe_target(&settings.api_scheme, &settings.api_authority),
        })
    }
}

/// What: Turn scheme and authority into a `host:port` pair for DNS lookup.
fn probe_target(scheme: &str, authority: &str) -> String {
    let has_port = authority
        .rsplit_once(':')
        .is_some_and(|(_, port)| !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()));
    if has_port {
        authority.to_string()
    } else {
        let port = if scheme.eq_ignore_ascii_case("http") {
            80
        } else {
            443
        };
        format!("{authority}:{port}")
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn is_connected(&self) -> bool {
        match tokio::time::timeout(PROBE_TIMEOUT, tokio::net::lookup_host(&self.probe_target))
            .await
        {
            Ok(Ok(mut addrs)) => addrs.next().is_some(),
            Ok(Err(e)) => {
                debug!(target = %self.probe_target, error = %e, "[Transport] connectivity probe failed");
                false
            }
            Err(_) => {
                debug!(target = %self.probe_target, "[Transport] connectivity probe timed out");
                false
            }
        }
    }

    async fn fetch(&self, url: Option<&Url>) -> Result<String, ResponseStatus> {
        let Some(url) = url else {
            return Err(ResponseStatus::ConnectionError(
                "no request URL".to_string(),
            ));
        };
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                warn!(host = url.host_str().unwrap_or(""), error = %e, "[Transport] request failed");
                ResponseStatus::ConnectionError(e.to_string())
            })?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!(code = status.as_u16(), path = url.path(), "[Transport] non-200 response");
            return Err(ResponseStatus::HttpError {
                code: status.as_u16(),
                message: reason_phrase(&response),
            });
        }
        let body = response
            .text()
            .await
            .map_err(|e| ResponseStatus::ConnectionError(e.to_string()))?;
        debug!(bytes = body.len(), path = url.path(), "[Transport] response received");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// What: Serve exactly one canned HTTP response on a random local port.
    ///
    /// Output:
    /// - Base URL (`http://127.0.0.1:<port>`) of the stub.
    async fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = vec![0; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    fn local_transport(authority: &str) -> HttpTransport {
        let settings = Settings {
            api_scheme: "http".to_string(),
            api_authority: authority.to_string(),
            ..Settings::default()
        };
        HttpTransport::from_settings(&settings).expect("build client")
    }

    #[tokio::test]
    /// What: A 200 response returns the full body.
    async fn ok_response_returns_body() {
        let body = r#"{"response":{"results":[]}}"#;
        let base = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ))
        .await;
        let url = Url::parse(&format!("{base}/world?api-key=test")).expect("url");
        let t = local_transport(url.authority());
        assert_eq!(t.fetch(Some(&url)).await.as_deref(), Ok(body));
    }

    #[tokio::test]
    /// What: Non-200 statuses become `HttpError` with the reason phrase.
    async fn service_unavailable_maps_to_http_error() {
        let base = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                .to_string(),
        )
        .await;
        let url = Url::parse(&format!("{base}/world")).expect("url");
        let t = local_transport(url.authority());
        assert_eq!(
            t.fetch(Some(&url)).await,
            Err(ResponseStatus::HttpError {
                code: 503,
                message: "Service Unavailable".to_string(),
            })
        );
    }

    #[tokio::test]
    /// What: The server's own reason phrase is kept, even for unknown codes.
    ///
    /// Inputs:
    /// - `503 Down For Maintenance`, then `599 Network Timeout`.
    ///
    /// Output:
    /// - `HttpError` carrying each code with the phrase the server sent.
    async fn custom_reason_phrase_is_kept() {
        for (code, phrase) in [(503_u16, "Down For Maintenance"), (599, "Network Timeout")] {
            let base = serve_once(format!(
                "HTTP/1.1 {code} {phrase}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            ))
            .await;
            let url = Url::parse(&format!("{base}/world")).expect("url");
            let t = local_transport(url.authority());
            assert_eq!(
                t.fetch(Some(&url)).await,
                Err(ResponseStatus::HttpError {
                    code,
                    message: phrase.to_string(),
                })
            );
        }
    }

    #[tokio::test]
    async fn missing_url_is_connection_error() {
        let t = local_transport("127.0.0.1:9");
        assert!(matches!(
            t.fetch(None).await,
            Err(ResponseStatus::ConnectionError(_))
        ));
    }

    #[tokio::test]
    /// What: A refused connection is a `ConnectionError`, not a panic or HTTP error.
    async fn refused_connection_is_connection_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        let url = Url::parse(&format!("http://{addr}/world")).expect("url");
        let t = local_transport(url.authority());
        assert!(matches!(
            t.fetch(Some(&url)).await,
            Err(ResponseStatus::ConnectionError(_))
        ));
    }

    #[tokio::test]
    async fn literal_ip_probe_is_connected() {
        assert!(local_transport("127.0.0.1:8080").is_connected().await);
    }

    #[test]
    fn probe_target_adds_default_port() {
        assert_eq!(
            probe_target("https", "content.guardianapis.com"),
            "content.guardianapis.com:443"
        );
        assert_eq!(probe_target("http", "example.com"), "example.com:80");
        assert_eq!(probe_target("http", "localhost:8080"), "localhost:8080");
    }
}

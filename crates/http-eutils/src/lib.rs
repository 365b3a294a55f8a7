//! A transport for NCBI E-utilities over HTTP.

#[macro_use]
extern crate tracing;

mod config;
mod rate;

use std::sync::Arc;

use mime::Mime;
use reqwest::{Client, header};
use serde_json::Value;
use tracing::Instrument;
use varinsight_eutils::{Error, EutilsRequest, Transport};

pub use config::{
    DEFAULT_BASE_URL, DEFAULT_TOOL, EutilsConfig, EutilsConfigBuilder,
};
use rate::RateLimiter;

/// E-utilities transport backed by a pooled `reqwest` client.
///
/// Clones share the connection pool and the rate limiter.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    config: Arc<EutilsConfig>,
    limiter: RateLimiter,
}

impl HttpTransport {
    /// Creates a new `HttpTransport` with the given configuration.
    #[inline]
    pub fn new(config: EutilsConfig) -> Self {
        Self {
            client: Client::new(),
            limiter: RateLimiter::new(config.min_interval),
            config: Arc::new(config),
        }
    }

    /// Returns the configuration of this transport.
    #[inline]
    pub fn config(&self) -> &EutilsConfig {
        &self.config
    }
}

impl Default for HttpTransport {
    #[inline]
    fn default() -> Self {
        Self::new(EutilsConfig::default())
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        req: &EutilsRequest,
    ) -> impl Future<Output = Result<Value, Error>> + Send + 'static {
        let url = format!("{}{}", self.config.base_url, req.endpoint.path());
        let mut params = req.params.clone();
        params.extend(self.config.etiquette_params());

        let client = self.client.clone();
        let limiter = self.limiter.clone();
        let span = debug_span!("eutils request", endpoint = %req.endpoint);

        async move {
            limiter.acquire().await;
            trace!("GET {url}");

            let resp = client
                .get(&url)
                .query(&params)
                .send()
                .await
                .map_err(|err| Error::network().with_reason(format!("{err}")))?;

            let status = resp.status();
            if !status.is_success() {
                // The body is informative only; a failed read leaves it empty.
                let body = resp.text().await.unwrap_or_default();
                error!("request failed with status {status}");
                return Err(Error::remote(status.as_u16(), body));
            }

            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok());
            let is_json = content_type
                .and_then(|v| v.parse().ok())
                .map(|m: Mime| m.subtype() == mime::JSON)
                .unwrap_or(true);
            if !is_json {
                return Err(Error::decode().with_reason(format!(
                    "Unexpected content type: {content_type:?}"
                )));
            }

            resp.json::<Value>().await.map_err(|err| {
                let kind = if err.is_decode() {
                    Error::decode()
                } else {
                    Error::network()
                };
                kind.with_reason(format!("{err}"))
            })
        }
        .instrument(span)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use varinsight_eutils::{Database, ErrorKind};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_transport(server: &MockServer) -> HttpTransport {
        let config = EutilsConfigBuilder::new()
            .with_base_url(server.uri())
            .with_min_interval(Duration::ZERO)
            .build();
        HttpTransport::new(config)
    }

    #[tokio::test]
    async fn test_search_sends_query_params() {
        let server = MockServer::start().await;
        let envelope = json!({
            "esearchresult": { "count": "1", "idlist": ["123456"] }
        });
        Mock::given(method("GET"))
            .and(path("/esearch.fcgi"))
            .and(query_param("db", "clinvar"))
            .and(query_param("term", "c.1187G>A + CMTR1"))
            .and(query_param("retmode", "json"))
            .and(query_param("tool", "varinsight"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
            .expect(1)
            .mount(&server)
            .await;

        let transport = test_transport(&server);
        let req =
            EutilsRequest::search(Database::Clinvar, "c.1187G>A + CMTR1");
        let resp = transport.send(&req).await.unwrap();
        assert_eq!(resp, envelope);
    }

    #[tokio::test]
    async fn test_credentials_are_appended() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/esummary.fcgi"))
            .and(query_param("id", "1"))
            .and(query_param("email", "lab@example.org"))
            .and(query_param("api_key", "k3y"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "result": { "uids": [] } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = EutilsConfigBuilder::new()
            .with_base_url(format!("{}/", server.uri()))
            .with_api_key("k3y")
            .with_email("lab@example.org")
            .with_min_interval(Duration::ZERO)
            .build();
        let transport = HttpTransport::new(config);
        let req = EutilsRequest::summary(Database::Omim, "1");
        assert!(transport.send(&req).await.is_ok());
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/esummary.fcgi"))
            .respond_with(
                ResponseTemplate::new(429)
                    .set_body_string("API rate limit exceeded"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = test_transport(&server);
        let req = EutilsRequest::summary(Database::Clinvar, "1");
        let err = transport.send(&req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Remote);
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.body(), Some("API rate limit exceeded"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("<html>maintenance</html>", "text/html"),
            )
            .mount(&server)
            .await;

        let transport = test_transport(&server);
        let req = EutilsRequest::search(Database::Pubmed, "CMTR1");
        let err = transport.send(&req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[tokio::test]
    async fn test_garbled_json_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("{\"esearchresult\": ", "application/json"),
            )
            .mount(&server)
            .await;

        let transport = test_transport(&server);
        let req = EutilsRequest::search(Database::Pubmed, "CMTR1");
        let err = transport.send(&req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_error() {
        let config = EutilsConfigBuilder::new()
            .with_base_url("http://127.0.0.1:9/")
            .with_min_interval(Duration::ZERO)
            .build();
        let transport = HttpTransport::new(config);
        let req = EutilsRequest::search(Database::Clinvar, "CMTR1");
        let err = transport.send(&req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }
}

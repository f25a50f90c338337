//! # Read-only REST client for the hosted data store
//!
//! The store exposes PostgREST-style tables under `{url}/rest/v1/{table}`.
//! Filters are query parameters (`type=eq.quote`, `id=eq.12`) and
//! `select=*,author:authors(*)` embeds the related author row.
//!
//! Every request carries the public API key twice, as `apikey` and as a bearer
//! token. There are no retries, timeouts, or pagination.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use store::DataSourceConfig;
use url::Url;

use crate::error::ApiError;

const REST_PREFIX: &str = "rest/v1";

/// Query string for a table request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// `column=eq.value`
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.pairs.push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// `select=columns`
    pub fn select(mut self, columns: &str) -> Self {
        self.pairs.push(("select".to_string(), columns.to_string()));
        self
    }
}

#[derive(Clone, Debug)]
pub struct DataClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl DataClient {
    pub fn new(config: &DataSourceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        }
    }

    /// Full URL for `table` with `query` applied.
    pub fn endpoint(&self, table: &str, query: &Query) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}/{REST_PREFIX}/{table}", self.base_url)).map_err(
            |source| ApiError::InvalidUrl {
                table: table.to_string(),
                source,
            },
        )?;
        if !query.pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(query.pairs.iter());
        }
        Ok(url)
    }

    /// Headers sent with every request.
    pub fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let key = HeaderValue::from_str(&self.anon_key).map_err(|_| ApiError::InvalidKey)?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.anon_key))
            .map_err(|_| ApiError::InvalidKey)?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }

    /// GET `table` and decode the JSON array of rows.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> Result<Vec<T>, ApiError> {
        let url = self.endpoint(table, query)?;
        let headers = self.auth_headers()?;
        tracing::debug!(%url, "fetching rows");

        let transport = |source| ApiError::Transport {
            table: table.to_string(),
            source,
        };

        let response = self
            .http
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                table: table.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        let rows: Vec<T> = serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            table: table.to_string(),
            source,
        })?;
        tracing::debug!(table, rows = rows.len(), "fetched rows");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use store::Author;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;

    fn client(url: &str) -> DataClient {
        DataClient::new(&DataSourceConfig {
            url: url.to_string(),
            anon_key: "anon-key".to_string(),
        })
    }

    #[test]
    fn test_endpoint_with_filters() {
        let query = Query::new().eq("type", "quote").select("*,author:authors(*)");
        let url = client("https://db.example.co/").endpoint("contents", &query).unwrap();

        assert_eq!(url.host_str(), Some("db.example.co"));
        assert_eq!(url.path(), "/rest/v1/contents");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            [
                ("type".to_string(), "eq.quote".to_string()),
                ("select".to_string(), "*,author:authors(*)".to_string()),
            ]
        );
    }

    #[test]
    fn test_endpoint_without_query() {
        let url = client("https://db.example.co").endpoint("authors", &Query::new()).unwrap();
        assert_eq!(url.as_str(), "https://db.example.co/rest/v1/authors");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = client("not a url").endpoint("authors", &Query::new()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { ref table, .. } if table == "authors"));
    }

    #[test]
    fn test_endpoint_encodes_decoded_id_once() {
        let query = Query::new().eq("id", "أ b");
        let url = client("https://db.example.co").endpoint("authors", &query).unwrap();

        assert_eq!(url.query(), Some("id=eq.%D8%A3+b"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, [("id".to_string(), "eq.أ b".to_string())]);
    }

    #[test]
    fn test_auth_headers() {
        let headers = client("https://db.example.co").auth_headers().unwrap();
        assert_eq!(headers.get("apikey").unwrap(), "anon-key");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer anon-key");
    }

    #[test]
    fn test_invalid_key_is_an_error() {
        let client = DataClient::new(&DataSourceConfig {
            url: "https://db.example.co".to_string(),
            anon_key: "bad\nkey".to_string(),
        });
        assert!(matches!(client.auth_headers(), Err(ApiError::InvalidKey)));
    }

    /// A client for a local server that ignores any proxy in the environment.
    fn local_client(url: &str) -> DataClient {
        DataClient {
            http: reqwest::Client::builder().no_proxy().build().unwrap(),
            ..client(url)
        }
    }

    /// Serve one canned HTTP response on a local port. The handle yields the
    /// raw request head.
    async fn serve_once(status: &str, body: &str) -> (DataClient, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let client = local_client(&format!("http://{}", listener.local_addr().unwrap()));
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&head).into_owned()
        });

        (client, handle)
    }

    #[tokio::test]
    async fn test_fetch_decodes_rows_and_sends_key() {
        let (client, server) =
            serve_once("200 OK", r#"[{"id":1,"name":"المتنبي"},{"id":"b","name":"Ibn"}]"#).await;

        let query = Query::new().eq("id", "1").select("*");
        let authors: Vec<Author> = client.fetch("authors", &query).await.unwrap();
        assert_eq!(authors.len(), 2);
        assert_eq!(authors[0].id, "1");
        assert_eq!(authors[0].name, "المتنبي");
        assert_eq!(authors[1].id, "b");

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /rest/v1/authors?id=eq.1&select=*"), "{request}");
        assert!(request.contains("apikey: anon-key\r\n"), "{request}");
        assert!(request.contains("authorization: bearer anon-key\r\n"), "{request}");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let (client, server) = serve_once("503 Service Unavailable", "").await;

        let err = client.fetch::<Author>("authors", &Query::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 503, .. }), "{err:?}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_unexpected_shape() {
        let (client, server) = serve_once("200 OK", r#"{"x":1}"#).await;

        let err = client.fetch::<Author>("authors", &Query::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }), "{err:?}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = local_client(&url)
            .fetch::<Author>("authors", &Query::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport { .. }), "{err:?}");
    }
}

use dioxus::logger::tracing;
use reqwest::StatusCode;

use super::record::{decode_error_message, decode_results, AssessmentRecord, QueryRequest};
use crate::contexts::{SearchError, SearchResult};
use crate::utils::query_endpoint;

/// Client for the assessment recommendation API
#[derive(Clone, Debug)]
pub struct QueryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl QueryClient {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Build a client pointed at the configured query endpoint
    pub fn from_config() -> SearchResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| SearchError::ClientInit(e.to_string()))?;
        Ok(Self::new(http, query_endpoint()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one query and return the records of the response, in order
    pub async fn query(&self, text: &str) -> SearchResult<Vec<AssessmentRecord>> {
        tracing::debug!("POST {} ({} chars)", self.endpoint, text.len());

        let response = self
            .http
            .post(&self.endpoint)
            .json(&QueryRequest { query: text })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        decode_response(status, &body)
    }
}

/// Turn a status code and raw body into records or an error.
///
/// Any success status decodes leniently; every other status is an error that
/// carries the API's `error` message when the body has one.
pub fn decode_response(status: StatusCode, body: &[u8]) -> SearchResult<Vec<AssessmentRecord>> {
    if status.is_success() {
        Ok(decode_results(body))
    } else {
        Err(SearchError::Status {
            code: status.as_u16(),
            message: decode_error_message(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_decodes_results() {
        let body = br#"{"results":[{"Assessment Name":"OPQ32r","URL":"https://example.com/opq"}]}"#;
        let records = decode_response(StatusCode::OK, body).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "OPQ32r");
        assert_eq!(records[0].url, "https://example.com/opq");
    }

    #[test]
    fn test_success_with_malformed_body_is_empty() {
        assert_eq!(decode_response(StatusCode::OK, b"not json"), Ok(Vec::new()));
        assert_eq!(decode_response(StatusCode::OK, b"{}"), Ok(Vec::new()));
    }

    #[test]
    fn test_not_found_carries_api_message() {
        let body = br#"{"error":"No results found. Try a different query."}"#;
        let err = decode_response(StatusCode::NOT_FOUND, body).unwrap_err();

        assert_eq!(
            err,
            SearchError::Status {
                code: 404,
                message: Some("No results found. Try a different query.".to_string()),
            }
        );
    }

    #[test]
    fn test_server_error_without_json_body() {
        let err = decode_response(StatusCode::INTERNAL_SERVER_ERROR, b"boom").unwrap_err();
        assert_eq!(err, SearchError::Status { code: 500, message: None });
    }

    #[test]
    fn test_client_from_config() {
        let client = QueryClient::from_config().unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:4000/query");
    }

    mod http {
        use crate::api::QueryClient;
        use crate::contexts::SearchError;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::{TcpListener, TcpStream};
        use tokio::task::JoinHandle;

        /// Answer exactly one request, handing back the raw request text
        async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let url = format!("http://{}/query", listener.local_addr().unwrap());

            let handle = tokio::spawn(async move {
                let (mut socket, _) = listener.accept().await.unwrap();
                let request = read_request(&mut socket).await;
                let response = format!(
                    "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
                request
            });

            (url, handle)
        }

        async fn read_request(socket: &mut TcpStream) -> String {
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);

                if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                    let length = head
                        .lines()
                        .find_map(|line| line.strip_prefix("content-length:"))
                        .and_then(|value| value.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if buf.len() >= end + 4 + length {
                        break;
                    }
                }
            }

            String::from_utf8_lossy(&buf).into_owned()
        }

        #[tokio::test]
        async fn test_connection_refused_is_transport_error() {
            let client = QueryClient::new(reqwest::Client::new(), "http://127.0.0.1:1/query");

            match client.query("java developer").await {
                Err(SearchError::Transport(_)) => {}
                other => panic!("expected a transport error, got {:?}", other),
            }
        }

        #[tokio::test]
        async fn test_posts_raw_query_and_decodes_results() {
            let (url, server) = serve_once(
                "HTTP/1.1 200 OK",
                r#"{"results":[{"Assessment Name":"A","Assessment Length":"30 min","Test Type":"Cognitive","Remote Testing":"Yes","URL":"http://x"}]}"#,
            )
            .await;
            let client = QueryClient::new(reqwest::Client::new(), url);

            let records = client.query("  java developer ").await.unwrap();
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].columns(), ["A", "30 min", "Cognitive", "Yes", "http://x"]);

            let request = server.await.unwrap();
            assert!(request.starts_with("POST /query "));
            assert!(request.to_lowercase().contains("content-type: application/json"));
            assert!(request.ends_with(r#"{"query":"  java developer "}"#));
        }

        #[tokio::test]
        async fn test_not_found_over_http() {
            let (url, server) = serve_once(
                "HTTP/1.1 404 Not Found",
                r#"{"error":"No results found. Try a different query."}"#,
            )
            .await;
            let client = QueryClient::new(reqwest::Client::new(), url);

            let err = client.query("underwater basket weaving").await.unwrap_err();
            assert_eq!(
                err,
                SearchError::Status {
                    code: 404,
                    message: Some("No results found. Try a different query.".to_string()),
                }
            );
            server.await.unwrap();
        }
    }
}

use thiserror::Error;

/// Failure of a single REST request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid endpoint for `{table}`: {source}")]
    InvalidUrl {
        table: String,
        #[source]
        source: url::ParseError,
    },
    #[error("api key is not a valid header value")]
    InvalidKey,
    #[error("request to `{table}` failed: {source}")]
    Transport {
        table: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("`{table}` responded with status {status}")]
    Status { table: String, status: u16 },
    #[error("unexpected `{table}` payload: {source}")]
    Decode {
        table: String,
        #[source]
        source: serde_json::Error,
    },
}

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use super::transport::HttpResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("http error, '{url}' failed ({status}): '{message}'")]
    Http {
        url: String,
        status: u16,
        message: String,
    },

    #[error(transparent)]
    GraphQL(#[from] GraphQLErrorResponse),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One entry of the `errors` list in a GraphQL envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphQLError {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub path: Vec<PathSegment>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQLErrorResponse {
    pub errors: Vec<GraphQLError>,
}

impl fmt::Display for GraphQLErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "graphql error: '{}'", messages.join(", "))
    }
}

impl std::error::Error for GraphQLErrorResponse {}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Turns a non-2xx response into [`ApiError::Http`], preferring a JSON
/// `{"message": ...}` body and falling back to the raw text.
pub fn http_error(resp: &HttpResponse) -> ApiError {
    let message = match serde_json::from_slice::<ErrorBody>(&resp.body) {
        Ok(parsed) => parsed.message,
        Err(_) => String::from_utf8_lossy(&resp.body).into_owned(),
    };
    ApiError::Http {
        url: resp.url.to_string(),
        status: resp.status,
        message,
    }
}

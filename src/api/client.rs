use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;

use super::error::{ApiError, GraphQLErrorResponse, http_error};
use super::queries::QUESTION_DATA_QUERY;
use super::transport::{
    BoxTransport, CONTENT_TYPE_JSON, ClientOption, HttpRequest, HttpResponse, ReqwestTransport,
    add_header, build_transport,
};
use super::types::{GraphQLResponse, ProblemList, QuestionData};
use crate::config::Config;
use crate::model::ProblemDetail;

pub const LEETCODE_BASE: &str = "https://leetcode.com";
pub const LEETCODE_GRAPHQL: &str = "https://leetcode.com/graphql";
pub const LEETCODE_PROBLEMS: &str = "https://leetcode.com/api/problems/all/";

/// GraphQL and REST access over one decorated transport.
pub struct LeetCodeClient {
    transport: BoxTransport,
    graphql_url: Url,
}

impl LeetCodeClient {
    pub fn new(opts: Vec<ClientOption>) -> Result<Self, ApiError> {
        Self::with_graphql_url(LEETCODE_GRAPHQL, opts)
    }

    pub fn with_graphql_url(graphql_url: &str, opts: Vec<ClientOption>) -> Result<Self, ApiError> {
        let base: BoxTransport = Box::new(ReqwestTransport::new()?);
        Ok(Self {
            transport: build_transport(base, opts),
            graphql_url: Url::parse(graphql_url)?,
        })
    }

    /// Client carrying the session cookies from `config`, if any.
    pub fn authenticated(config: &Config) -> Result<Self, ApiError> {
        if !config.is_authenticated() {
            debug!("no session configured, requests are anonymous");
        }
        Self::new(session_options(config))
    }

    /// Runs one GraphQL operation and decodes its `data` into `T`.
    ///
    /// Any entry in the envelope's `errors` list fails the whole call, even
    /// when `data` is present.
    pub async fn graphql<T: DeserializeOwned>(
        &self,
        operation_name: &str,
        query: &str,
        variables: Value,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_vec(&json!({
            "operationName": operation_name,
            "query": query,
            "variables": variables,
        }))?;

        let req = HttpRequest::new(Method::POST, self.graphql_url.clone())
            .header("Content-Type", CONTENT_TYPE_JSON)
            .body(Some(body));

        debug!(operation_name, "graphql request");
        let resp = self.transport.round_trip(req).await?;
        decode_graphql(&resp)
    }

    /// Runs one REST request. `Ok(None)` means the server answered 204.
    pub async fn rest<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Option<T>, ApiError> {
        let req = HttpRequest::new(method, Url::parse(url)?)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .body(body);

        let resp = self.transport.round_trip(req).await?;
        decode_rest(&resp)
    }

    pub async fn fetch_problem_detail(&self, slug: &str) -> Result<Option<ProblemDetail>, ApiError> {
        let data: QuestionData = self
            .graphql("questionData", QUESTION_DATA_QUERY, json!({ "titleSlug": slug }))
            .await?;
        Ok(data.question)
    }

    pub async fn fetch_problems(&self) -> Result<ProblemList, ApiError> {
        let list = self
            .rest::<ProblemList>(Method::GET, LEETCODE_PROBLEMS, None)
            .await?;
        Ok(list.unwrap_or_default())
    }
}

fn session_options(config: &Config) -> Vec<ClientOption> {
    let mut opts = vec![add_header("Referer", LEETCODE_BASE)];
    if let (Some(session), Some(csrf)) = (&config.leetcode_session, &config.csrf_token) {
        opts.push(add_header(
            "Cookie",
            format!("LEETCODE_SESSION={session}; csrftoken={csrf}"),
        ));
        opts.push(add_header("x-csrftoken", csrf.as_str()));
    }
    opts
}

fn decode_graphql<T: DeserializeOwned>(resp: &HttpResponse) -> Result<T, ApiError> {
    if !resp.is_success() {
        return Err(http_error(resp));
    }

    let envelope: GraphQLResponse<Value> = serde_json::from_slice(&resp.body)?;
    if let Some(errors) = envelope.errors.filter(|e| !e.is_empty()) {
        return Err(GraphQLErrorResponse { errors }.into());
    }

    Ok(serde_json::from_value(envelope.data.unwrap_or(Value::Null))?)
}

fn decode_rest<T: DeserializeOwned>(resp: &HttpResponse) -> Result<Option<T>, ApiError> {
    if !resp.is_success() {
        return Err(http_error(resp));
    }
    if resp.status == 204 {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(&resp.body)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::{Transport, replace_transport};
    use futures::FutureExt;
    use futures::future::BoxFuture;
    use serde::Deserialize;
    use std::sync::{Arc, Mutex};

    struct Canned {
        status: u16,
        body: &'static str,
        seen: Arc<Mutex<Vec<HttpRequest>>>,
    }

    impl Transport for Canned {
        fn round_trip(&self, req: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, ApiError>> {
            let resp = HttpResponse {
                status: self.status,
                url: req.url.clone(),
                body: self.body.as_bytes().to_vec(),
            };
            self.seen.lock().unwrap().push(req);
            async move { Ok(resp) }.boxed()
        }
    }

    fn client(status: u16, body: &'static str) -> (LeetCodeClient, Arc<Mutex<Vec<HttpRequest>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let canned = Canned {
            status,
            body,
            seen: seen.clone(),
        };
        let client = LeetCodeClient::new(vec![replace_transport(canned)]).unwrap();
        (client, seen)
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[tokio::test]
    async fn graphql_posts_operation_envelope() {
        let (client, seen) = client(200, r#"{"data":{"name":"two-sum"}}"#);

        let got: Named = client
            .graphql("questionData", "query q { x }", json!({"titleSlug": "two-sum"}))
            .await
            .unwrap();
        assert_eq!(got.name, "two-sum");

        let seen = seen.lock().unwrap();
        let req = &seen[0];
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.url.as_str(), LEETCODE_GRAPHQL);
        assert_eq!(req.header_value("content-type"), Some(CONTENT_TYPE_JSON));

        let body: Value = serde_json::from_slice(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["operationName"], "questionData");
        assert_eq!(body["query"], "query q { x }");
        assert_eq!(body["variables"]["titleSlug"], "two-sum");
    }

    #[tokio::test]
    async fn graphql_errors_fail_despite_http_success() {
        let (client, _) = client(
            200,
            r#"{"data":{"name":"partial"},"errors":[{"type":"X","path":["name"],"message":"boom"}]}"#,
        );

        let err = client
            .graphql::<Named>("op", "query", json!({}))
            .await
            .unwrap_err();
        match err {
            ApiError::GraphQL(resp) => assert_eq!(resp.errors[0].message, "boom"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn graphql_empty_error_list_is_success() {
        let (client, _) = client(200, r#"{"data":{"name":"ok"},"errors":[]}"#);
        let got: Named = client.graphql("op", "query", json!({})).await.unwrap();
        assert_eq!(got.name, "ok");
    }

    #[tokio::test]
    async fn graphql_http_failure_uses_normalizer() {
        let (client, _) = client(500, r#"{"message":"internal"}"#);
        let err = client
            .graphql::<Named>("op", "query", json!({}))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "http error, 'https://leetcode.com/graphql' failed (500): 'internal'"
        );
    }

    #[tokio::test]
    async fn graphql_malformed_envelope_is_decode_error() {
        let (client, _) = client(200, "not json");
        let err = client
            .graphql::<Named>("op", "query", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn rest_no_content_decodes_nothing() {
        let (client, seen) = client(204, "");
        let got = client
            .rest::<Named>(Method::DELETE, "https://leetcode.com/api/thing/1", None)
            .await
            .unwrap();
        assert!(got.is_none());
        assert_eq!(seen.lock().unwrap()[0].method, Method::DELETE);
    }

    #[tokio::test]
    async fn rest_decodes_body() {
        let (client, _) = client(200, r#"{"name":"list"}"#);
        let got = client
            .rest::<Named>(Method::GET, LEETCODE_PROBLEMS, None)
            .await
            .unwrap();
        assert_eq!(got, Some(Named { name: "list".into() }));
    }

    #[tokio::test]
    async fn rest_decode_failure_is_not_http_error() {
        let (client, _) = client(200, r#"{"other":1}"#);
        let err = client
            .rest::<Named>(Method::GET, LEETCODE_PROBLEMS, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn rest_not_found_keeps_raw_text() {
        let (client, _) = client(404, "Not Found");
        let err = client
            .rest::<Named>(Method::GET, LEETCODE_PROBLEMS, None)
            .await
            .unwrap_err();
        match err {
            ApiError::Http { url, status, message } => {
                assert_eq!(url, LEETCODE_PROBLEMS);
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_question_is_none() {
        let (client, _) = client(200, r#"{"data":{"question":null}}"#);
        assert!(client.fetch_problem_detail("nope").await.unwrap().is_none());
    }

    #[test]
    fn session_headers_need_both_cookies() {
        let anonymous = Config::default();
        assert_eq!(session_options(&anonymous).len(), 1);

        let config = Config {
            leetcode_session: Some("s".into()),
            csrf_token: Some("c".into()),
            ..Config::default()
        };
        assert_eq!(session_options(&config).len(), 3);
    }
}

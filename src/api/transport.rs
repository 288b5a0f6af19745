//! Request transport and the option chain that decorates it.
//!
//! A [`Transport`] performs one HTTP round-trip and hands back the fully
//! read response. [`ClientOption`]s wrap a transport in another transport;
//! [`build_transport`] applies them in argument order, so the last option
//! ends up outermost and sees each request first.

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::{Method, Url};
use tracing::debug;

use super::error::ApiError;

pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// An outgoing request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: Option<Vec<u8>>) -> Self {
        self.body = body;
        self
    }

    /// First value of `name`, compared case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A response whose body has already been read to the end.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// URL of the request that produced this response.
    pub url: Url,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport: Send + Sync {
    fn round_trip(&self, req: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, ApiError>>;
}

pub type BoxTransport = Box<dyn Transport>;

/// Base transport backed by a `reqwest` client.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn round_trip(&self, req: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, ApiError>> {
        async move {
            let url = req.url.clone();
            let method = req.method.clone();

            let mut builder = self.client.request(req.method, req.url);
            for (name, value) in &req.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = req.body {
                builder = builder.body(body);
            }

            let resp = builder.send().await?;
            let status = resp.status().as_u16();
            // Drain the body here so the connection is released on every path.
            let body = resp.bytes().await?.to_vec();
            debug!(%method, %url, status, bytes = body.len(), "request finished");

            Ok(HttpResponse { status, url, body })
        }
        .boxed()
    }
}

/// Wraps one transport into another at client construction time.
pub struct ClientOption(Box<dyn FnOnce(BoxTransport) -> BoxTransport + Send>);

impl ClientOption {
    pub fn new(wrap: impl FnOnce(BoxTransport) -> BoxTransport + Send + 'static) -> Self {
        Self(Box::new(wrap))
    }

    pub fn apply(self, next: BoxTransport) -> BoxTransport {
        (self.0)(next)
    }
}

/// Applies `opts` to `base` in order: `[a, b]` yields `b(a(base))`.
pub fn build_transport<I>(base: BoxTransport, opts: I) -> BoxTransport
where
    I: IntoIterator<Item = ClientOption>,
{
    opts.into_iter().fold(base, |tr, opt| opt.apply(tr))
}

/// Adds `name: value` to every request that passes through.
///
/// `Authorization` is never sent to `*.github.com` hosts.
pub fn add_header(name: impl Into<String>, value: impl Into<String>) -> ClientOption {
    let name = name.into();
    let value = value.into();
    ClientOption::new(move |next| {
        Box::new(HeaderTransport { name, value, next })
    })
}

/// Drops whatever transport came before and uses `tr` instead.
pub fn replace_transport(tr: impl Transport + 'static) -> ClientOption {
    ClientOption::new(move |_| Box::new(tr))
}

struct HeaderTransport {
    name: String,
    value: String,
    next: BoxTransport,
}

impl Transport for HeaderTransport {
    fn round_trip(&self, mut req: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, ApiError>> {
        if should_add_header(&self.name, &req.url) {
            req.headers.push((self.name.clone(), self.value.clone()));
        }
        self.next.round_trip(req)
    }
}

fn should_add_header(name: &str, url: &Url) -> bool {
    if !name.eq_ignore_ascii_case("authorization") {
        return true;
    }
    !url.host_str()
        .is_some_and(|host| host.ends_with(".github.com"))
}

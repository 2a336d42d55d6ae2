use crate::{
    http::{self, Headers, Request},
    Result,
};

/// A trait for the HTTP protocol. Implementors accept a `Request` that wraps
/// the URL, headers and HTTP method. Clients can do HTTP calls against a
/// remote server or replay canned responses for testing purposes.
///
/// Any status code the server answers with is a successful `run`. Only
/// failures to get an answer at all (DNS, connection refused, timeouts) are
/// errors at this level.
pub trait HttpRunner {
    type Response;
    fn run(&self, cmd: &mut Request) -> Result<Self::Response>;
}

/// Adapts lower level ureq responses to a common Response.
#[derive(Clone, Debug, Builder)]
pub struct HttpResponse {
    #[builder(default)]
    pub status: i32,
    #[builder(default)]
    pub body: String,
    /// Response headers, names lower-cased.
    #[builder(setter(into, strip_option), default)]
    pub headers: Option<Headers>,
}

impl HttpResponse {
    pub fn builder() -> HttpResponseBuilder {
        HttpResponseBuilder::default()
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .as_ref()
            .and_then(|h| h.get(&key.to_lowercase()))
            .map(|s| s.as_str())
    }

    pub fn is_ok(&self, method: &http::Method) -> bool {
        match method {
            http::Method::GET => self.status == 200,
        }
    }
}

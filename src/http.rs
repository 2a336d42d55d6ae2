use crate::config::ConfigProperties;
use crate::error::GistError;
use crate::io::{HttpResponse, HttpRunner};
use crate::Result;
use crate::{log_debug, log_info};
use std::collections::{hash_map, HashMap};
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

pub struct Client {
    agent: ureq::Agent,
}

impl Client {
    pub fn new(config: &impl ConfigProperties) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_seconds())))
            // 4xx and 5xx are regular answers here, the remote decides what
            // they mean.
            .http_status_as_error(false)
            .build()
            .into();
        Client { agent }
    }

    fn get(&self, request: &Request) -> Result<HttpResponse> {
        let ureq_req = self.agent.get(request.url());
        let ureq_req = request
            .headers()
            .iter()
            .fold(ureq_req, |req, (key, value)| req.header(key, value));
        match ureq_req.call() {
            Ok(mut response) => {
                let status = i32::from(response.status().as_u16());
                let headers = response
                    .headers()
                    .iter()
                    .fold(Headers::new(), |mut headers, (name, value)| {
                        headers.set(
                            name.as_str().to_lowercase(),
                            value.to_str().unwrap_or_default(),
                        );
                        headers
                    });
                let body = response
                    .body_mut()
                    .read_to_string()
                    .map_err(|err| GistError::Connectivity(err.to_string()))?;
                let response = HttpResponse::builder()
                    .status(status)
                    .body(body)
                    .headers(headers)
                    .build()?;
                Ok(response)
            }
            Err(err) => {
                log_debug!("Transport error for {}: {}", request.url(), err);
                Err(GistError::Connectivity(err.to_string()).into())
            }
        }
    }
}

impl HttpRunner for Client {
    type Response = HttpResponse;

    fn run(&self, cmd: &mut Request) -> Result<Self::Response> {
        log_info!("{} {}", cmd.method, cmd.url());
        let response = match cmd.method {
            Method::GET => self.get(cmd)?,
        };
        log_info!("{} {} -> {}", cmd.method, cmd.url(), response.status);
        Ok(response)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Headers(HashMap<String, String>);

impl Headers {
    pub fn new() -> Self {
        Headers(HashMap::new())
    }

    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.0.iter()
    }
}

pub struct Request {
    headers: Headers,
    method: Method,
    url: String,
}

impl Request {
    pub fn new(url: &str, method: Method) -> Self {
        Request {
            headers: Headers::new(),
            method,
            url: url.to_string(),
        }
    }

    pub fn set_header(&mut self, key: &str, value: &str) {
        self.headers.set(key, value);
    }

    pub fn set_headers(&mut self, headers: Headers) {
        self.headers = headers;
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Method {
    #[default]
    GET,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Method::GET => write!(f, "GET"),
        }
    }
}

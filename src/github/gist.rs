use crate::{
    api_defaults::NO_DESCRIPTION,
    api_traits::UserGists,
    cmds::gist::Gist,
    error::GistError,
    http::{self, Request},
    io::{HttpResponse, HttpRunner},
    log_debug, Result,
};
use regex::Regex;

use super::Github;

// https://docs.github.com/en/rest/gists/gists?apiVersion=2022-11-28#list-gists-for-a-user

impl<R: HttpRunner<Response = HttpResponse>> UserGists for Github<R> {
    fn list_user_gists(&self, username: &str) -> Result<Vec<Gist>> {
        validate_username(username)?;
        let url = self.user_gists_url(username);
        let mut request = Request::new(&url, http::Method::GET);
        request.set_headers(self.request_headers());
        let response = self.runner.run(&mut request)?;
        if response.is_ok(request.method()) {
            return parse_gists(&response.body);
        }
        Err(map_error_status(&response).into())
    }
}

impl<R> Github<R> {
    fn user_gists_url(&self, username: &str) -> String {
        format!("{}/users/{}/gists", self.rest_api_basepath, username)
    }
}

/// Only names that would change the request path are turned away. Login
/// rules differ between github.com and Enterprise hosts, so anything else is
/// left for the remote to answer.
fn validate_username(username: &str) -> Result<()> {
    lazy_static! {
        static ref RE_PATH_BREAKING: Regex = Regex::new(r"[/?#\s]").unwrap();
    }
    if username.is_empty() {
        return Err(GistError::InvalidUsername("username cannot be empty".to_string()).into());
    }
    if RE_PATH_BREAKING.is_match(username) {
        return Err(GistError::InvalidUsername(username.to_string()).into());
    }
    Ok(())
}

fn json_load_page(data: &str) -> Result<Vec<serde_json::Value>> {
    serde_json::from_str(data).map_err(|e| GistError::ResponseParse(e.to_string()).into())
}

fn parse_gists(body: &str) -> Result<Vec<Gist>> {
    let values = json_load_page(body)?;
    let gists = values
        .iter()
        .map(|value| GithubGistFields::try_from(value).map(Gist::from))
        .collect::<std::result::Result<Vec<Gist>, GistError>>()?;
    Ok(gists)
}

/// Maps a non-200 answer from Github to the error handed back to callers.
fn map_error_status(response: &HttpResponse) -> GistError {
    match response.status {
        404 => {
            log_debug!("Github answered 404: {}", response.body);
            GistError::UserNotFound
        }
        status => {
            let message = upstream_message(&response.body, status);
            log_debug!("Github answered {}: {}", status, message);
            GistError::Upstream {
                status: u16::try_from(status).unwrap_or(500),
                message,
            }
        }
    }
}

/// Github error bodies look like `{"message": "...", "documentation_url":
/// "..."}`. Anything else is passed through as is.
fn upstream_message(body: &str, status: i32) -> String {
    let body = body.trim();
    if body.is_empty() {
        return format!("HTTP {}", status);
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => match value["message"].as_str() {
            Some(message) => message.to_string(),
            None => body.to_string(),
        },
        Err(_) => body.to_string(),
    }
}

pub struct GithubGistFields {
    pub gist: Gist,
}

impl TryFrom<&serde_json::Value> for GithubGistFields {
    type Error = GistError;

    fn try_from(value: &serde_json::Value) -> std::result::Result<Self, Self::Error> {
        let id = match &value["id"] {
            serde_json::Value::String(id) => id.to_string(),
            serde_json::Value::Number(id) => id.to_string(),
            _ => return Err(GistError::ResponseParse("gist without an id".to_string())),
        };
        // html_url is the web page of the gist, url its API resource.
        let url = value["html_url"]
            .as_str()
            .or_else(|| value["url"].as_str())
            .ok_or_else(|| GistError::ResponseParse(format!("gist {} without an url", id)))?;
        let description = value["description"].as_str().unwrap_or(NO_DESCRIPTION);
        let gist = Gist::builder()
            .id(id)
            .description(description.to_string())
            .url(url.to_string())
            .build()
            .map_err(|err| GistError::ResponseParse(err.to_string()))?;
        Ok(Self { gist })
    }
}

impl From<GithubGistFields> for Gist {
    fn from(fields: GithubGistFields) -> Self {
        fields.gist
    }
}

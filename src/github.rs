use crate::api_defaults::{GITHUB_ACCEPT, GITHUB_API_VERSION};
use crate::config::ConfigProperties;
use crate::http::Headers;
use std::sync::Arc;

pub mod gist;

#[derive(Clone)]
pub struct Github<R> {
    rest_api_basepath: String,
    user_agent: String,
    runner: Arc<R>,
}

impl<R> Github<R> {
    pub fn new(config: impl ConfigProperties, runner: Arc<R>) -> Self {
        let rest_api_basepath = config.api_base_url().trim_end_matches('/').to_string();
        let user_agent = config.user_agent().to_string();

        Github {
            rest_api_basepath,
            user_agent,
            runner,
        }
    }

    fn request_headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.set("Accept", GITHUB_ACCEPT);
        headers.set("X-GitHub-Api-Version", GITHUB_API_VERSION);
        headers.set("User-Agent", self.user_agent.as_str());
        headers
    }
}

use std::{io::Write, sync::Arc};

use serde::Serialize;

use crate::{
    api_traits::UserGists,
    config::Config,
    display::{self, Column, DisplayBody, Format},
    github::Github,
    http, log_info, Result,
};

/// A public gist as handed back to callers.
#[derive(Builder, Clone, Debug, PartialEq, Serialize)]
pub struct Gist {
    pub id: String,
    pub description: String,
    pub url: String,
}

impl Gist {
    pub fn builder() -> GistBuilder {
        GistBuilder::default()
    }
}

impl From<Gist> for DisplayBody {
    fn from(gist: Gist) -> DisplayBody {
        DisplayBody::new(vec![
            Column::new("ID", gist.id),
            Column::new("Description", gist.description),
            Column::new("URL", gist.url),
        ])
    }
}

#[derive(Builder, Clone, Debug)]
pub struct GistListCliArgs {
    pub username: String,
    #[builder(default)]
    pub format: Format,
    #[builder(default)]
    pub no_headers: bool,
}

impl GistListCliArgs {
    pub fn builder() -> GistListCliArgsBuilder {
        GistListCliArgsBuilder::default()
    }
}

pub enum GistOptions {
    List(GistListCliArgs),
}

pub fn execute(options: GistOptions, config: Arc<Config>) -> Result<()> {
    match options {
        GistOptions::List(args) => {
            let runner = Arc::new(http::Client::new(&config));
            let remote = Github::new(config, runner);
            list_user_gists(&remote, &args, std::io::stdout())
        }
    }
}

pub fn list_user_gists<W: Write>(
    remote: &dyn UserGists,
    args: &GistListCliArgs,
    mut writer: W,
) -> Result<()> {
    let gists = remote.list_user_gists(&args.username)?;
    log_info!("{} gists found for {}", gists.len(), args.username);
    display::print(&mut writer, gists, args.no_headers, &args.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{self, GistError};

    struct MockUserGists {
        gists: Vec<Gist>,
    }

    impl MockUserGists {
        fn new(gists: Vec<Gist>) -> Self {
            MockUserGists { gists }
        }
    }

    impl UserGists for MockUserGists {
        fn list_user_gists(&self, _username: &str) -> Result<Vec<Gist>> {
            Ok(self.gists.clone())
        }
    }

    struct MockUserNotFound;

    impl UserGists for MockUserNotFound {
        fn list_user_gists(&self, _username: &str) -> Result<Vec<Gist>> {
            Err(GistError::UserNotFound.into())
        }
    }

    fn gists() -> Vec<Gist> {
        vec![
            Gist::builder()
                .id("6cad326836d38bd3a7ae".to_string())
                .description("Hello world!".to_string())
                .url("https://gist.github.com/octocat/6cad326836d38bd3a7ae".to_string())
                .build()
                .unwrap(),
            Gist::builder()
                .id("1305321".to_string())
                .description("No description".to_string())
                .url("https://gist.github.com/octocat/1305321".to_string())
                .build()
                .unwrap(),
        ]
    }

    fn args(format: Format, no_headers: bool) -> GistListCliArgs {
        GistListCliArgs::builder()
            .username("octocat".to_string())
            .format(format)
            .no_headers(no_headers)
            .build()
            .unwrap()
    }

    #[test]
    fn test_list_gists_pipe_format() {
        let remote = MockUserGists::new(gists());
        let mut writer: Vec<u8> = Vec::new();
        list_user_gists(&remote, &args(Format::PIPE, false), &mut writer).unwrap();
        assert_eq!(
            "ID|Description|URL\n\
             6cad326836d38bd3a7ae|Hello world!|https://gist.github.com/octocat/6cad326836d38bd3a7ae\n\
             1305321|No description|https://gist.github.com/octocat/1305321\n",
            String::from_utf8(writer).unwrap()
        );
    }

    #[test]
    fn test_list_gists_json_format() {
        let remote = MockUserGists::new(gists());
        let mut writer: Vec<u8> = Vec::new();
        list_user_gists(&remote, &args(Format::JSON, false), &mut writer).unwrap();
        let output = String::from_utf8(writer).unwrap();
        let first: serde_json::Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();
        assert_eq!("6cad326836d38bd3a7ae", first["id"]);
        assert_eq!("Hello world!", first["description"]);
        assert_eq!(
            "https://gist.github.com/octocat/6cad326836d38bd3a7ae",
            first["url"]
        );
    }

    #[test]
    fn test_list_gists_no_headers() {
        let remote = MockUserGists::new(gists());
        let mut writer: Vec<u8> = Vec::new();
        list_user_gists(&remote, &args(Format::CSV, true), &mut writer).unwrap();
        let output = String::from_utf8(writer).unwrap();
        assert!(output.starts_with("6cad326836d38bd3a7ae,"));
    }

    #[test]
    fn test_list_gists_no_gists_prints_nothing() {
        let remote = MockUserGists::new(vec![]);
        let mut writer: Vec<u8> = Vec::new();
        list_user_gists(&remote, &args(Format::PIPE, false), &mut writer).unwrap();
        assert!(writer.is_empty());
    }

    #[test]
    fn test_list_gists_propagates_remote_error() {
        let mut writer: Vec<u8> = Vec::new();
        let err = list_user_gists(&MockUserNotFound, &args(Format::PIPE, false), &mut writer)
            .unwrap_err();
        assert_eq!(404, error::status_code(&err));
        assert!(writer.is_empty());
    }

    #[test]
    fn test_gist_serializes_with_three_fields() {
        let value = serde_json::to_value(&gists()[1]).unwrap();
        assert_eq!(
            serde_json::json!({
                "id": "1305321",
                "description": "No description",
                "url": "https://gist.github.com/octocat/1305321"
            }),
            value
        );
    }
}

use clap::Parser;

use crate::cmds::gist::{GistListCliArgs, GistOptions};

use super::common::FormatArgs;

#[derive(Parser)]
pub struct ListGists {
    /// GitHub username whose public gists are listed
    #[clap()]
    username: String,
    #[clap(flatten)]
    format_args: FormatArgs,
}

impl From<ListGists> for GistOptions {
    fn from(options: ListGists) -> Self {
        GistOptions::List(
            GistListCliArgs::builder()
                .username(options.username)
                .format(options.format_args.format.into())
                .no_headers(options.format_args.no_headers)
                .build()
                .unwrap(),
        )
    }
}

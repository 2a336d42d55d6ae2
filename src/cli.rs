pub mod common;
pub mod gist;

use clap::Parser;

use crate::cmds::gist::GistOptions;

use self::gist::ListGists;

#[derive(Parser)]
#[command(about = "List the public gists of a GitHub user", version)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
    /// Verbose mode. Logs each request and how the answer was handled
    #[clap(long, short, global = true)]
    pub verbose: bool,
    /// Path to a TOML config file. Defaults to ~/.config/gistr/config.toml
    #[clap(long, global = true, value_name = "CONFIG_FILE")]
    pub config: Option<String>,
}

#[derive(Parser)]
pub enum Command {
    #[clap(name = "list", visible_alias = "ls", about = "List a user's public gists")]
    List(ListGists),
}

/// Global flags, shared by every subcommand.
#[derive(Clone, Debug, Default)]
pub struct CliArgs {
    pub verbose: bool,
    pub config_file: Option<String>,
}

impl CliArgs {
    pub fn new(verbose: bool, config_file: Option<String>) -> Self {
        CliArgs {
            verbose,
            config_file,
        }
    }
}

pub enum CliOptions {
    Gist(GistOptions),
}

pub struct OptionArgs {
    pub cli_options: CliOptions,
    pub cli_args: CliArgs,
}

impl OptionArgs {
    pub fn new(cli_options: CliOptions, cli_args: CliArgs) -> Self {
        OptionArgs {
            cli_options,
            cli_args,
        }
    }
}

pub fn parse_cli() -> OptionArgs {
    Args::parse().into()
}

impl From<Args> for OptionArgs {
    fn from(args: Args) -> Self {
        let cli_args = CliArgs::new(args.verbose, args.config);
        let cli_options = match args.command {
            Command::List(sub_matches) => CliOptions::Gist(sub_matches.into()),
        };
        OptionArgs::new(cli_options, cli_args)
    }
}

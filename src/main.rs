use std::sync::Arc;

use env_logger::Env;
use gistr::{
    cli::{parse_cli, CliOptions},
    cmds,
    config::{read_config, ConfigFilePath},
    error::{self, AddContext},
    log_error, Result,
};

fn main() {
    let option_args = parse_cli();
    let cli_args = option_args.cli_args;
    if cli_args.verbose {
        let env = Env::default().default_filter_or("info");
        env_logger::init_from_env(env);
    } else {
        env_logger::init();
    }
    if let Err(err) = run(option_args.cli_options, cli_args.config_file.as_deref()) {
        log_error!("{:?}", err);
        eprintln!("error ({}): {:#}", error::status_code(&err), err);
        std::process::exit(1);
    }
}

fn run(cli_options: CliOptions, config_file: Option<&str>) -> Result<()> {
    let config = read_config(ConfigFilePath::new(config_file))
        .err_context("Unable to load the configuration")?;
    let config = Arc::new(config);
    match cli_options {
        CliOptions::Gist(options) => cmds::gist::execute(options, config),
    }
}

pub mod api_defaults;
pub mod api_traits;
pub mod cli;
pub mod cmds;
pub mod config;
pub mod display;
pub mod error;
pub mod github;
pub mod http;
pub mod io;
pub mod logging;
pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate derive_builder;

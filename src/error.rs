use std::fmt::Display;

use anyhow::{Context, Result};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GistError {
    #[error("User not found")]
    UserNotFound,
    #[error("Error connecting to GitHub API: {0}")]
    Connectivity(String),
    /// Non-200, non-404 upstream answer. The message is surfaced verbatim.
    #[error("{message}")]
    Upstream { status: u16, message: String },
    #[error("Invalid username: {0}")]
    InvalidUsername(String),
    #[error("Unexpected response from GitHub API: {0}")]
    ResponseParse(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl GistError {
    /// Code handed back to callers for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            GistError::UserNotFound => 404,
            GistError::Connectivity(_) => 500,
            GistError::Upstream { status, .. } => *status,
            GistError::InvalidUsername(_) => 400,
            GistError::ResponseParse(_) => 502,
            GistError::ConfigurationError(_) => 500,
        }
    }
}

/// Caller-facing code for any error bubbling up the stack. Errors that did
/// not originate as a `GistError` are internal failures.
pub fn status_code(err: &anyhow::Error) -> u16 {
    match err.downcast_ref::<GistError>() {
        Some(gist_err) => gist_err.status_code(),
        None => 500,
    }
}

pub trait AddContext<T, E>: Context<T, E> {
    fn err_context<C: Display + Send + Sync + 'static>(self, msg: C) -> Result<T, anyhow::Error>
    where
        Self: Sized,
    {
        self.with_context(|| msg.to_string())
    }
}

impl<U, T, E> AddContext<T, E> for U where U: Context<T, E> {}

use std::fmt::{self, Display, Formatter};

use clap::{Parser, ValueEnum};

use crate::display::Format;

#[derive(Clone, Parser)]
#[clap(next_help_heading = "Formatting options")]
pub struct FormatArgs {
    /// Skip the header row
    #[clap(long)]
    pub no_headers: bool,
    /// Output format. `json` prints one object per line
    #[clap(long, value_enum, default_value_t = FormatCli::Pipe)]
    pub format: FormatCli,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum FormatCli {
    Pipe,
    Csv,
    Json,
}

impl Display for FormatCli {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // clap renders the default value through Display, keep both in sync.
        match self.to_possible_value() {
            Some(value) => write!(f, "{}", value.get_name()),
            None => Err(fmt::Error),
        }
    }
}

impl From<FormatCli> for Format {
    fn from(format: FormatCli) -> Self {
        match format {
            FormatCli::Pipe => Format::PIPE,
            FormatCli::Csv => Format::CSV,
            FormatCli::Json => Format::JSON,
        }
    }
}

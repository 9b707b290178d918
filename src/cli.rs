use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use crate::error::{Result, TopsisError};
use crate::model::DegenerateRowPolicy;

/// Rank alternatives in a CSV table with TOPSIS.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "kira-topsis",
    version,
    about,
    after_help = "Example: kira-topsis data.csv \"1,1,1,1\" \"+,+,-,+\" result.csv"
)]
pub struct Cli {
    /// Input table; first column is the identifier, the rest are criteria.
    pub input: PathBuf,

    /// Comma-separated positive weights, one per criterion.
    #[arg(allow_hyphen_values = true)]
    pub weights: String,

    /// Comma-separated impacts, '+' (beneficial) or '-' (cost).
    #[arg(allow_hyphen_values = true)]
    pub impacts: String,

    /// Output table with `Topsis Score` and `Rank` appended.
    pub output: PathBuf,

    /// Also write a JSON run summary to this path.
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,

    /// Fail when a row coincides with both ideal solutions instead of scoring it 0.5.
    #[arg(long)]
    pub strict: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn row_policy(&self) -> DegenerateRowPolicy {
        if self.strict {
            DegenerateRowPolicy::Reject
        } else {
            DegenerateRowPolicy::Neutral
        }
    }
}

/// Parses `args` (including the program name). Help and version requests
/// print and exit; every other clap failure becomes `MalformedArguments`.
pub fn parse_cli<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => Err(TopsisError::MalformedArguments(err.render().to_string())),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/cli.rs"]
mod tests;

use clap::Parser;
use std::{ffi::OsString, path::PathBuf};

/// Usage line printed when the positional arguments are missing.
pub const USAGE: &str = "Usage: importguard <library_name> <dirpath1> [<dirpath2>] ...";

#[derive(Debug, Clone, Parser)]
#[command(name = "importguard")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Fail when a library is imported absolutely from its own source tree")]
pub struct Config {
    /// Name of the library whose absolute imports are forbidden
    #[arg(value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub library_name: String,

    /// Directories to scan recursively for .py files
    #[arg(required = true, num_args = 1..)]
    pub roots: Vec<PathBuf>,
}

impl Config {
    /// Parse a config from an argument list whose first item is the program name.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}

//! Command line arguments

use std::path::PathBuf;

use crate::errors::FormError;
use crate::logs::LogLevel;

/// Arguments of the `sshdeploy-form` binary, all in `--key=value` form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    /// Stored record to edit; a new record when absent
    pub record: Option<PathBuf>,

    /// Settings file
    pub settings: Option<PathBuf>,

    /// Where to write the edited record
    pub out: Option<PathBuf>,

    /// `field=value` edits, applied in order
    pub edits: Vec<String>,

    /// Overrides the settings' log level
    pub log_level: Option<LogLevel>,

    /// Print version information and exit
    pub version: bool,
}

impl CliArgs {
    pub fn parse<I>(args: I) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();

        for arg in args {
            let Some(flag) = arg.strip_prefix("--") else {
                return Err(FormError::InvalidArgument(format!("unexpected argument `{}`", arg)));
            };

            match flag.split_once('=') {
                Some(("record", value)) => parsed.record = Some(PathBuf::from(value)),
                Some(("settings", value)) => parsed.settings = Some(PathBuf::from(value)),
                Some(("out", value)) => parsed.out = Some(PathBuf::from(value)),
                Some(("set", value)) => parsed.edits.push(value.to_string()),
                Some(("log-level", value)) => {
                    parsed.log_level = Some(value.parse().map_err(FormError::InvalidArgument)?)
                }
                None if flag == "version" => parsed.version = true,
                _ => {
                    return Err(FormError::InvalidArgument(format!("unknown option `{}`", arg)));
                }
            }
        }

        Ok(parsed)
    }
}

// src/cli.rs
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ColorChoice, Parser};
use log::debug;

use crate::config::Config;
use crate::error::GreeterError;

pub const PROGRAM_NAME: &str = "greeter";

#[derive(Parser, Debug)]
#[command(
    name = PROGRAM_NAME,
    about = "A greeter application which prints the name you entered a specified\nnumber of times.",
    override_usage = "greeter <options> [name]",
    after_help = "Arguments:\n  [NAME]  Name to greet; prompted for when omitted",
    color = ColorChoice::Never,
    args_override_self = true,
    long_about = None
)]
pub struct Cli {
  /// Number of times to greet
  #[arg(short = 'n', value_name = "NUM", default_value_t = 0, allow_negative_numbers = true)]
  pub num_times: i64,

  /// Create an HTML document at the file path specified
  #[arg(short = 'o', value_name = "PATH")]
  pub html_file_path: Option<String>,

  /// Increase verbosity level (e.g., -v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  // Flags stop at the first positional; anything after it counts toward the name limit
  #[arg(value_name = "NAME", hide = true, trailing_var_arg = true)]
  pub names: Vec<String>,
}

/// Parses `args` (without the program name) into a [`Config`].
///
/// Usage text and clap diagnostics are written to `w`, never to the process streams.
pub fn parse_args<W, I, T>(w: &mut W, args: I) -> Result<Config, GreeterError>
where
  W: Write,
  I: IntoIterator<Item = T>,
  T: Into<OsString>,
{
  let argv = std::iter::once(OsString::from(PROGRAM_NAME)).chain(args.into_iter().map(Into::into));

  let cli = match Cli::try_parse_from(argv) {
    Ok(cli) => cli,
    Err(err) => {
      write!(w, "{}", err.render())?;
      return Err(match err.kind() {
        ErrorKind::DisplayHelp => GreeterError::HelpRequested,
        _ => GreeterError::InvalidArgs(first_diagnostic_line(&err)),
      });
    }
  };
  debug!("CLI args: {:?}", cli);

  cli.into_config()
}

impl Cli {
  fn into_config(self) -> Result<Config, GreeterError> {
    if self.names.len() > 1 {
      return Err(GreeterError::TooManyPositionalArgs);
    }

    let html_file_path = self
      .html_file_path
      .filter(|p| !p.is_empty())
      .map(PathBuf::from);
    let name = self.names.into_iter().next().filter(|n| !n.is_empty());

    Ok(Config {
      num_times: self.num_times,
      html_file_path,
      name,
      verbose: self.verbose,
    })
  }
}

fn first_diagnostic_line(err: &clap::Error) -> String {
  let rendered = err.render().to_string();
  let line = rendered.lines().next().unwrap_or_default();
  line.strip_prefix("error: ").unwrap_or(line).trim().to_string()
}

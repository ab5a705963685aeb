// src/main.rs
mod cli;
mod config;
mod error;
mod greet;
mod prompt;
mod render;
mod validate;

use std::env;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use error::GreeterError;
use log::LevelFilter;

fn main() -> ExitCode {
  init_logging();

  let stdin = io::stdin();
  let code = run(
    env::args_os().skip(1),
    &mut stdin.lock(),
    &mut io::stdout().lock(),
    &mut io::stderr().lock(),
  );
  ExitCode::from(code)
}

/// Installs the stderr logger. Until arguments are parsed only warnings get through;
/// `run` raises the level according to `-v`.
fn init_logging() {
  env_logger::Builder::new().filter_level(LevelFilter::Trace).init();
  log::set_max_level(LevelFilter::Warn);
}

/// Parses, validates and executes one invocation, returning the process exit status.
///
/// `out` receives the prompt, greetings and error messages; `diag` receives usage text
/// and argument diagnostics.
fn run<I, T, R, W, E>(args: I, input: &mut R, out: &mut W, diag: &mut E) -> u8
where
  I: IntoIterator<Item = T>,
  T: Into<OsString>,
  R: BufRead,
  W: Write,
  E: Write,
{
  let config = match cli::parse_args(diag, args) {
    Ok(config) => config,
    Err(e) => return fail(out, &e),
  };
  log::set_max_level(config.log_level());
  log::debug!("Parsed configuration: {:?}", config);

  if let Err(e) = validate::validate_args(&config) {
    return fail(out, &e);
  }
  if let Err(e) = greet::run_greet(input, out, &config) {
    return fail(out, &e);
  }
  0
}

fn fail<W: Write>(out: &mut W, err: &GreeterError) -> u8 {
  log::debug!("Invocation failed: {:?}", err);
  if err.is_reported_on_stdout() {
    if let Err(e) = writeln!(out, "{}", err) {
      log::error!("Could not report error '{}': {}", err, e);
    }
  }
  1
}

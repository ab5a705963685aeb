// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
  #[error("flag: help requested")]
  HelpRequested,

  #[error("more than one positional argument specified")]
  TooManyPositionalArgs,

  #[error("{0}")]
  InvalidArgs(String),

  #[error("must specify a number greater than 0")]
  NothingToDo,

  #[error("you didn't enter your name")]
  EmptyName,

  // Transparent so reader/file errors reach the user with their original message
  #[error(transparent)]
  Io(#[from] std::io::Error),
}

impl GreeterError {
  /// Whether the outer runner should echo this error on stdout.
  /// Help and clap diagnostics have already been written to the parser's writer.
  pub fn is_reported_on_stdout(&self) -> bool {
    !matches!(self, GreeterError::HelpRequested | GreeterError::InvalidArgs(_))
  }
}

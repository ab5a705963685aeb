// src/prompt.rs
use std::io::{BufRead, Write};

use log::debug;

use crate::error::GreeterError;

pub const NAME_PROMPT: &str = "Your name please? Press the Enter key when done.";

/// Prompts on `w` and reads a single line from `r` as the user's name.
///
/// End of input before any text counts as an empty name. Read errors are returned as-is.
pub fn get_name<R: BufRead, W: Write>(r: &mut R, w: &mut W) -> Result<String, GreeterError> {
  writeln!(w, "{}", NAME_PROMPT)?;
  w.flush()?;

  let mut line = String::new();
  let read = r.read_line(&mut line)?;
  debug!("Read {} bytes of name input", read);

  let name = line.trim();
  if name.is_empty() {
    return Err(GreeterError::EmptyName);
  }
  Ok(name.to_string())
}

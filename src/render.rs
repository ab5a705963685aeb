// src/render.rs
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::error::GreeterError;

/// Writes `Nice to meet you {name}` once per line, `num_times` times.
/// Non-positive counts write nothing.
pub fn greet_user<W: Write>(w: &mut W, name: &str, num_times: i64) -> Result<(), GreeterError> {
  let msg = format!("Nice to meet you {}\n", name);
  for _ in 0..num_times.max(0) {
    w.write_all(msg.as_bytes())?;
  }
  w.flush()?;
  Ok(())
}

/// Creates (or truncates) `path` and writes `<h1>Hello {name}</h1>` with the name escaped.
pub fn greet_with_html(path: &Path, name: &str) -> Result<(), GreeterError> {
  debug!("Creating HTML greeting at {}", path.display());
  let file = File::create(path)?;
  let mut writer = BufWriter::new(file);
  write!(writer, "<h1>Hello {}</h1>", escape_html(name))?;
  // The file is closed when `writer` drops, on success and on error alike
  writer.flush()?;
  info!("Wrote HTML greeting to {}", path.display());
  Ok(())
}

/// Escape text for an HTML text node.
pub fn escape_html(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&#34;"),
      '\'' => escaped.push_str("&#39;"),
      '+' => escaped.push_str("&#43;"),
      '\0' => escaped.push('\u{FFFD}'),
      _ => escaped.push(c),
    }
  }
  escaped
}

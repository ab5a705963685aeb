// src/greet.rs
use std::io::{BufRead, Write};

use log::{debug, info};

use crate::config::{Config, RenderMode};
use crate::error::GreeterError;
use crate::prompt;
use crate::render;

/// Greets the configured (or prompted-for) name in the configured render mode.
///
/// The prompt and text greetings share `w`; the first error aborts the run.
pub fn run_greet<R: BufRead, W: Write>(
  r: &mut R,
  w: &mut W,
  config: &Config,
) -> Result<(), GreeterError> {
  info!("Running greet command...");
  debug!("Config: {:?}", config);

  let name = match config.name.as_deref() {
    Some(name) => name.to_string(),
    None => prompt::get_name(r, w)?,
  };

  match config.render_mode() {
    RenderMode::Html(path) => render::greet_with_html(path, &name),
    RenderMode::Text(num_times) => render::greet_user(w, &name, num_times),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use std::io::Cursor;
  use std::path::PathBuf;
  use tempfile::TempDir;

  const PROMPT: &str = "Your name please? Press the Enter key when done.\n";

  fn run(input: &str, config: &Config) -> (Result<(), GreeterError>, String) {
    let mut out = Vec::new();
    let result = run_greet(&mut Cursor::new(input), &mut out, config);
    (result, String::from_utf8(out).unwrap())
  }

  #[test]
  fn empty_name_stops_after_prompt() {
    let config = Config { num_times: 5, ..Default::default() };
    let (result, output) = run("", &config);
    assert_eq!(result.unwrap_err().to_string(), "you didn't enter your name");
    assert_eq!(output, PROMPT);
  }

  #[test]
  fn prompts_then_greets() {
    let config = Config { num_times: 5, ..Default::default() };
    let (result, output) = run("First Last", &config);
    result.unwrap();
    assert_eq!(output, format!("{PROMPT}{}", "Nice to meet you First Last\n".repeat(5)));
  }

  #[test]
  fn given_name_skips_prompt() {
    let config = Config {
      num_times: 2,
      name: Some("Ada".into()),
      ..Default::default()
    };
    let (result, output) = run("ignored", &config);
    result.unwrap();
    assert_eq!(output, "Nice to meet you Ada\nNice to meet you Ada\n");
  }

  #[test]
  fn html_mode_wins_over_count() {
    let dir = TempDir::new().unwrap();
    let path: PathBuf = dir.path().join("hello.html");
    let config = Config {
      num_times: 3,
      html_file_path: Some(path.clone()),
      name: Some("Ada & Grace".into()),
      ..Default::default()
    };
    let (result, output) = run("", &config);
    result.unwrap();
    assert!(output.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "<h1>Hello Ada &amp; Grace</h1>");
  }

  #[test]
  fn html_mode_prompts_for_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hello.html");
    let config = Config {
      html_file_path: Some(path.clone()),
      ..Default::default()
    };
    let (result, output) = run("Lin\n", &config);
    result.unwrap();
    assert_eq!(output, PROMPT);
    assert_eq!(fs::read_to_string(&path).unwrap(), "<h1>Hello Lin</h1>");
  }
}

// src/config.rs
use std::path::{Path, PathBuf};

use log::LevelFilter;

/// Run parameters for one invocation, built from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
  pub num_times: i64,
  pub html_file_path: Option<PathBuf>, // None when -o was absent or empty
  pub name: Option<String>,            // None triggers the interactive prompt
  pub verbose: u8,
}

/// Which output the greeting goes to. HTML wins over text when both are configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode<'a> {
  Html(&'a Path),
  Text(i64),
}

impl Config {
  pub fn render_mode(&self) -> RenderMode<'_> {
    match &self.html_file_path {
      Some(path) => RenderMode::Html(path),
      None => RenderMode::Text(self.num_times),
    }
  }

  pub fn log_level(&self) -> LevelFilter {
    match self.verbose {
      0 => LevelFilter::Warn,
      1 => LevelFilter::Info,
      2 => LevelFilter::Debug,
      _ => LevelFilter::Trace,
    }
  }
}

// src/validate.rs
use log::trace;

use crate::config::Config;
use crate::error::GreeterError;

/// Rejects a configuration that selects no output at all.
pub fn validate_args(config: &Config) -> Result<(), GreeterError> {
  trace!(
    "Validating num_times={} html_file_path={:?}",
    config.num_times,
    config.html_file_path
  );
  if config.num_times <= 0 && config.html_file_path.is_none() {
    return Err(GreeterError::NothingToDo);
  }
  Ok(())
}

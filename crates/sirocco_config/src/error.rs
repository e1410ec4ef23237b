use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced when loading and validating a .siroccorc file
///
/// Every variant is fatal: a broken configuration fails the build rather than proceeding
/// with defaults for the broken sections and silently producing wrong styling output.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Unable to locate .siroccorc from {}", .from.display())]
  NotFound { from: PathBuf },

  #[error("Failed to read {}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to parse {}: {message}", .path.display())]
  Malformed { path: PathBuf, message: String },

  #[error("Invalid value for `{field}`: {reason}")]
  InvalidField { field: String, reason: String },

  #[error("Invalid plugin at index {index}: {reason}")]
  InvalidPlugin { index: usize, reason: String },

  #[error("Theme family \"{family}\" appears in both replace and extend")]
  AmbiguousThemeFamily { family: String },
}

use std::path::PathBuf;

use serde_json::Value;

/// Represents the .siroccorc file as read from disk, before validation
///
/// The contents stay a generic JSON value here so the validating constructor can report
/// per-field shape errors instead of a single opaque deserialization failure.
#[derive(Debug)]
pub struct SiroccoRcFile {
  pub contents: Value,
  pub path: PathBuf,
}

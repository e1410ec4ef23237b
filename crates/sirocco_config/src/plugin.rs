use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::error::ConfigError;

pub type PluginOptions = Map<String, Value>;

/// A reference to a plugin the external generator resolves and runs
///
/// This document only records the reference and its position; declaration order is
/// significant because later plugins may observe or override CSS rules emitted by
/// earlier ones. Whether the name resolves to anything is the generator's concern.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PluginReference {
  Name(String),
  WithOptions { name: String, options: PluginOptions },
}

impl PluginReference {
  pub fn name(&self) -> &str {
    match self {
      Self::Name(name) => name,
      Self::WithOptions { name, .. } => name,
    }
  }

  /// Validates a single plugins entry: either a bare name or a { name, options } record.
  pub(crate) fn from_value(value: &Value, index: usize) -> Result<Self, ConfigError> {
    match value {
      Value::String(name) => Ok(Self::Name(name.clone())),
      Value::Object(entry) => {
        let Some(name) = entry.get("name").and_then(Value::as_str) else {
          return Err(ConfigError::InvalidPlugin {
            index,
            reason: String::from("missing a string \"name\""),
          });
        };

        let options = match entry.get("options") {
          None => PluginOptions::new(),
          Some(Value::Object(options)) => options.clone(),
          Some(_) => {
            return Err(ConfigError::InvalidPlugin {
              index,
              reason: String::from("\"options\" must be a record"),
            })
          }
        };

        Ok(Self::WithOptions {
          name: name.to_string(),
          options,
        })
      }
      _ => Err(ConfigError::InvalidPlugin {
        index,
        reason: String::from("expected a name or a { name, options } record"),
      }),
    }
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;

  #[test]
  fn accepts_a_bare_name() {
    assert_eq!(
      PluginReference::from_value(&json!("@sirocco/plugin-forms"), 0).unwrap(),
      PluginReference::Name(String::from("@sirocco/plugin-forms"))
    );
  }

  #[test]
  fn accepts_a_name_with_options() {
    let reference =
      PluginReference::from_value(&json!({ "name": "@sirocco/plugin-grid", "options": { "gap": 4 } }), 0)
        .unwrap();

    assert_eq!(reference.name(), "@sirocco/plugin-grid");
    let PluginReference::WithOptions { options, .. } = reference else {
      panic!("expected options variant");
    };
    assert_eq!(options.get("gap"), Some(&json!(4)));
  }

  #[test]
  fn rejects_a_record_without_a_name() {
    let err = PluginReference::from_value(&json!({ "options": {} }), 3).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPlugin { index: 3, .. }));
  }

  #[test]
  fn rejects_non_record_options() {
    let err =
      PluginReference::from_value(&json!({ "name": "p", "options": [1, 2] }), 1).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPlugin { index: 1, .. }));
  }

  #[test]
  fn rejects_other_shapes() {
    let err = PluginReference::from_value(&json!(42), 0).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPlugin { index: 0, .. }));
  }
}

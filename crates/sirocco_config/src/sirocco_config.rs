use serde::Serialize;
use serde_json::Value;

use crate::error::ConfigError;
use crate::plugin::PluginReference;
use crate::sirocco_rc::SiroccoRcFile;
use crate::theme::ResolvedTheme;
use crate::theme::Theme;
use crate::theme::ThemeOverrides;
use crate::theme::TokenMap;

/// Represents a validated .siroccorc config
///
/// Constructed once per build, immutable for its duration, and re-read on the next
/// invocation. All three fields are optional in the source file and default to empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SiroccoConfig {
  /// Glob patterns, matched case-sensitively against a file tree relative to the
  /// config's location, declaring which files are scanned for class names
  pub content: Vec<String>,
  pub theme: Theme,
  /// Ordered plugin references; order fixes the generator's processing order
  pub plugins: Vec<PluginReference>,
}

impl SiroccoConfig {
  /// Produces the effective theme by merging declared overrides onto the generator's
  /// built-in token defaults.
  pub fn resolve_theme(&self, builtin: &ThemeOverrides) -> ResolvedTheme {
    self.theme.resolve(builtin)
  }
}

impl TryFrom<SiroccoRcFile> for SiroccoConfig {
  type Error = ConfigError;

  fn try_from(file: SiroccoRcFile) -> Result<Self, Self::Error> {
    let Some(document) = file.contents.as_object() else {
      return Err(ConfigError::Malformed {
        path: file.path,
        message: String::from("expected a top-level record"),
      });
    };

    // Unknown top-level keys are ignored for forward compatibility
    let content = match document.get("content") {
      None => Vec::new(),
      Some(value) => string_sequence(value, "content")?,
    };

    let theme = match document.get("theme") {
      None => Theme::default(),
      Some(value) => theme_from_value(value)?,
    };

    let plugins = match document.get("plugins") {
      None => Vec::new(),
      Some(value) => plugins_from_value(value)?,
    };

    if content.is_empty() {
      tracing::warn!(
        path = %file.path.display(),
        "content is empty; no files will be scanned for class names"
      );
    }

    Ok(SiroccoConfig {
      content,
      theme,
      plugins,
    })
  }
}

fn invalid_field(field: impl Into<String>, reason: &str) -> ConfigError {
  ConfigError::InvalidField {
    field: field.into(),
    reason: String::from(reason),
  }
}

fn string_sequence(value: &Value, field: &str) -> Result<Vec<String>, ConfigError> {
  let Some(items) = value.as_array() else {
    return Err(invalid_field(field, "expected a sequence of strings"));
  };

  items
    .iter()
    .map(|item| {
      item
        .as_str()
        .map(String::from)
        .ok_or_else(|| invalid_field(field, "expected a sequence of strings"))
    })
    .collect()
}

fn theme_from_value(value: &Value) -> Result<Theme, ConfigError> {
  let Some(entries) = value.as_object() else {
    return Err(invalid_field(
      "theme",
      "expected a record with \"replace\" and \"extend\" keys",
    ));
  };

  let mut theme = Theme::default();
  for (key, entry) in entries {
    match key.as_str() {
      "replace" => theme.replace = theme_overrides(entry, "theme.replace")?,
      "extend" => theme.extend = theme_overrides(entry, "theme.extend")?,
      // A family placed directly under theme would otherwise be dropped silently
      key => {
        return Err(invalid_field(
          "theme",
          &format!("unknown key \"{key}\" (expected \"replace\" or \"extend\")"),
        ))
      }
    }
  }

  for family in theme.replace.keys() {
    if theme.extend.contains_key(family) {
      return Err(ConfigError::AmbiguousThemeFamily {
        family: family.clone(),
      });
    }
  }

  Ok(theme)
}

fn theme_overrides(value: &Value, field: &str) -> Result<ThemeOverrides, ConfigError> {
  let Some(families) = value.as_object() else {
    return Err(invalid_field(field, "expected a mapping of token families"));
  };

  let mut overrides = ThemeOverrides::default();
  for (family, tokens) in families {
    let Some(tokens) = tokens.as_object() else {
      return Err(invalid_field(
        format!("{field}.{family}"),
        "expected a mapping of tokens to value stacks",
      ));
    };

    let mut token_map = TokenMap::default();
    for (token, values) in tokens {
      token_map.insert(
        token.clone(),
        string_sequence(values, &format!("{field}.{family}.{token}"))?,
      );
    }

    overrides.insert(family.clone(), token_map);
  }

  Ok(overrides)
}

fn plugins_from_value(value: &Value) -> Result<Vec<PluginReference>, ConfigError> {
  let Some(entries) = value.as_array() else {
    return Err(invalid_field(
      "plugins",
      "expected a sequence of plugin references",
    ));
  };

  entries
    .iter()
    .enumerate()
    .map(|(index, entry)| PluginReference::from_value(entry, index))
    .collect()
}

use indexmap::IndexMap;
use serde::Serialize;

/// A token value is an ordered fallback list. For font families this is the font stack.
pub type TokenValues = Vec<String>;

/// Token name to value stack, in declaration order
pub type TokenMap = IndexMap<String, TokenValues>;

/// Token family name (e.g. "fontFamily") to its tokens, in declaration order
pub type ThemeOverrides = IndexMap<String, TokenMap>;

/// Declared theme overrides from .siroccorc
///
/// A family listed under `replace` discards the generator's built-in defaults for that
/// family entirely; a family under `extend` is overlaid onto them per token. Validation
/// rejects a family appearing in both, so the two maps are disjoint by construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Theme {
  pub replace: ThemeOverrides,
  pub extend: ThemeOverrides,
}

/// The effective theme after merging declared overrides onto the built-in defaults
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedTheme {
  inner: ThemeOverrides,
}

impl ResolvedTheme {
  pub fn family(&self, name: &str) -> Option<&TokenMap> {
    self.inner.get(name)
  }

  pub fn families(&self) -> impl Iterator<Item = (&String, &TokenMap)> {
    self.inner.iter()
  }

  pub fn into_inner(self) -> ThemeOverrides {
    self.inner
  }
}

impl Theme {
  pub fn is_empty(&self) -> bool {
    self.replace.is_empty() && self.extend.is_empty()
  }

  /// Merges this theme onto the built-in defaults.
  ///
  /// Families are merged independently, so the result does not depend on declaration
  /// order across families. Untouched families pass through unchanged.
  pub fn resolve(&self, builtin: &ThemeOverrides) -> ResolvedTheme {
    let mut resolved = builtin.clone();

    for (family, tokens) in &self.replace {
      resolved.insert(family.clone(), tokens.clone());
    }

    for (family, tokens) in &self.extend {
      let merged = resolved.entry(family.clone()).or_default();
      for (token, values) in tokens {
        merged.insert(token.clone(), values.clone());
      }
    }

    ResolvedTheme { inner: resolved }
  }
}

#[cfg(test)]
mod tests {
  use indexmap::indexmap;
  use pretty_assertions::assert_eq;

  use super::*;

  fn stack(values: &[&str]) -> TokenValues {
    values.iter().map(|value| String::from(*value)).collect()
  }

  fn builtin() -> ThemeOverrides {
    indexmap! {
      String::from("fontFamily") => indexmap! {
        String::from("mono") => stack(&["X"]),
        String::from("sans") => stack(&["Y"]),
      },
    }
  }

  #[test]
  fn replace_discards_builtin_family_entirely() {
    let theme = Theme {
      replace: indexmap! {
        String::from("fontFamily") => indexmap! {
          String::from("mono") => stack(&["A", "B"]),
        },
      },
      extend: ThemeOverrides::default(),
    };

    let resolved = theme.resolve(&builtin());
    let family = resolved.family("fontFamily").unwrap();

    assert_eq!(family.get("mono"), Some(&stack(&["A", "B"])));
    // "sans" was a builtin token of the replaced family, so it is gone too
    assert_eq!(family.get("sans"), None);
  }

  #[test]
  fn extend_overrides_per_token_and_preserves_siblings() {
    let theme = Theme {
      replace: ThemeOverrides::default(),
      extend: indexmap! {
        String::from("fontFamily") => indexmap! {
          String::from("mono") => stack(&["A", "B"]),
        },
      },
    };

    let resolved = theme.resolve(&builtin());
    let family = resolved.family("fontFamily").unwrap();

    assert_eq!(family.get("mono"), Some(&stack(&["A", "B"])));
    assert_eq!(family.get("sans"), Some(&stack(&["Y"])));
  }

  #[test]
  fn extend_adds_families_absent_from_builtin() {
    let theme = Theme {
      replace: ThemeOverrides::default(),
      extend: indexmap! {
        String::from("spacing") => indexmap! {
          String::from("gutter") => stack(&["1rem"]),
        },
      },
    };

    let resolved = theme.resolve(&builtin());

    assert_eq!(
      resolved.family("spacing").and_then(|f| f.get("gutter")),
      Some(&stack(&["1rem"]))
    );
    // builtins untouched by either map pass through
    assert_eq!(
      resolved.family("fontFamily").and_then(|f| f.get("mono")),
      Some(&stack(&["X"]))
    );
  }

  #[test]
  fn empty_theme_returns_builtin_unchanged() {
    let resolved = Theme::default().resolve(&builtin());
    assert_eq!(resolved.into_inner(), builtin());
  }

  #[test]
  fn resolution_is_deterministic() {
    let theme = Theme {
      replace: indexmap! {
        String::from("fontFamily") => indexmap! {
          String::from("serif") => stack(&["Georgia"]),
        },
      },
      extend: indexmap! {
        String::from("spacing") => indexmap! {
          String::from("sm") => stack(&["0.5rem"]),
        },
      },
    };

    assert_eq!(theme.resolve(&builtin()), theme.resolve(&builtin()));
  }
}

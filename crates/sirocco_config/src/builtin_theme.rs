use std::sync::LazyLock;

use crate::theme::ThemeOverrides;

static BUILTIN_THEME: LazyLock<ThemeOverrides> = LazyLock::new(|| {
  serde_json5::from_str(include_str!("../themes/default.json5"))
    .unwrap_or_else(|error| panic!("Invalid builtin theme: {error}"))
});

/// Token defaults the generator ships with absent any override
pub fn builtin_theme() -> &'static ThemeOverrides {
  &BUILTIN_THEME
}

pub mod builtin_theme;
pub mod content;
pub mod error;
pub mod plugin;
pub mod sirocco_config;
pub mod sirocco_rc;
pub mod sirocco_rc_config_loader;
pub mod theme;

pub use builtin_theme::builtin_theme;
pub use error::ConfigError;
pub use plugin::PluginReference;
pub use sirocco_config::SiroccoConfig;
pub use sirocco_rc_config_loader::LoadConfigOptions;
pub use sirocco_rc_config_loader::SiroccoRcConfigLoader;
pub use theme::ResolvedTheme;
pub use theme::Theme;
pub use theme::ThemeOverrides;

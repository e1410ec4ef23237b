use std::path::Path;
use std::path::PathBuf;

use pathdiff::diff_paths;
use sirocco_filesystem::search::find_ancestor_file;
use sirocco_filesystem::FileSystemRef;

use crate::error::ConfigError;
use crate::sirocco_config::SiroccoConfig;
use crate::sirocco_rc::SiroccoRcFile;

pub const CONFIG_FILE_NAME: &str = ".siroccorc";

#[derive(Default)]
pub struct LoadConfigOptions<'a> {
  /// An explicit config file path that bypasses .siroccorc discovery
  pub config: Option<&'a Path>,
}

/// Loads and validates .siroccorc config
pub struct SiroccoRcConfigLoader {
  fs: FileSystemRef,
}

impl SiroccoRcConfigLoader {
  pub fn new(fs: FileSystemRef) -> Self {
    SiroccoRcConfigLoader { fs }
  }

  fn find_config(&self, project_root: &Path, path: &Path) -> Result<PathBuf, ConfigError> {
    let from = path.parent().unwrap_or(path);

    find_ancestor_file(&*self.fs, &[CONFIG_FILE_NAME], from, project_root).ok_or_else(|| {
      ConfigError::NotFound {
        from: from.to_path_buf(),
      }
    })
  }

  fn resolve_from(&self, project_root: &Path) -> Result<PathBuf, ConfigError> {
    let cwd = self.fs.cwd().map_err(|source| ConfigError::Io {
      path: project_root.to_path_buf(),
      source,
    })?;

    let relative = diff_paths(&cwd, project_root);
    let is_cwd_inside_project_root =
      relative.is_some_and(|p| !p.starts_with("..") && !p.is_absolute());

    let dir = if is_cwd_inside_project_root {
      cwd
    } else {
      project_root.to_path_buf()
    };

    Ok(dir.join("index"))
  }

  fn load_config(&self, path: PathBuf) -> Result<(SiroccoConfig, PathBuf), ConfigError> {
    let raw = self.fs.read_to_string(&path).map_err(|source| ConfigError::Io {
      path: path.clone(),
      source,
    })?;

    let contents = serde_json5::from_str(&raw).map_err(|error| ConfigError::Malformed {
      path: path.clone(),
      message: error.to_string(),
    })?;

    let config = SiroccoConfig::try_from(SiroccoRcFile {
      contents,
      path: path.clone(),
    })?;

    tracing::debug!(path = %path.display(), "loaded sirocco config");

    Ok((config, path))
  }

  /// Finds and loads a .siroccorc file
  ///
  /// By default the nearest .siroccorc ancestor file from the current working directory
  /// (bounded by the project root) is loaded. In cases where the current working directory
  /// does not live within the project root, the config is loaded from the project root.
  /// An explicit path in the options bypasses discovery entirely.
  pub fn load(
    &self,
    project_root: &Path,
    options: LoadConfigOptions,
  ) -> Result<(SiroccoConfig, PathBuf), ConfigError> {
    let config_path = match options.config {
      Some(config) => config.to_path_buf(),
      None => {
        let resolve_from = self.resolve_from(project_root)?;
        self.find_config(project_root, &resolve_from)?
      }
    };

    self.load_config(config_path)
  }
}

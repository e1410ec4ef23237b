use std::collections::HashMap;
use std::io;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use parking_lot::RwLock;

use crate::FileSystem;

#[cfg(not(target_os = "windows"))]
fn root_dir() -> PathBuf {
  PathBuf::from("/")
}

#[cfg(target_os = "windows")]
fn root_dir() -> PathBuf {
  PathBuf::from("C:/")
}

/// In memory implementation of the `FileSystem` trait, for testing purposes.
#[derive(Debug)]
pub struct InMemoryFileSystem {
  files: RwLock<HashMap<PathBuf, String>>,
  current_working_directory: RwLock<PathBuf>,
}

impl Default for InMemoryFileSystem {
  fn default() -> Self {
    Self {
      files: Default::default(),
      current_working_directory: RwLock::new(root_dir()),
    }
  }
}

impl InMemoryFileSystem {
  /// Change the current working directory. Used for resolving relative paths.
  pub fn set_current_working_directory(&self, cwd: &Path) {
    let cwd = self.resolve(cwd);
    let mut state = self.current_working_directory.write();
    *state = cwd;
  }

  pub fn write_file(&self, path: &Path, contents: String) {
    let path = self.resolve(path);
    let mut files = self.files.write();
    files.insert(path, contents);
  }

  /// Resolve a path against the current working directory and fold away `.` and `..` segments.
  fn resolve(&self, path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
      path.to_path_buf()
    } else {
      self.current_working_directory.read().join(path)
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
      match component {
        Component::CurDir => {}
        Component::ParentDir => {
          resolved.pop();
        }
        component => resolved.push(component),
      }
    }

    resolved
  }
}

impl FileSystem for InMemoryFileSystem {
  fn cwd(&self) -> io::Result<PathBuf> {
    Ok(self.current_working_directory.read().clone())
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    let path = self.resolve(path);
    let files = self.files.read();
    files
      .get(&path)
      .cloned()
      .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "File not found"))
  }

  fn is_file(&self, path: &Path) -> bool {
    let path = self.resolve(path);
    self.files.read().contains_key(&path)
  }

  fn is_dir(&self, path: &Path) -> bool {
    let path = self.resolve(path);
    let files = self.files.read();
    files
      .keys()
      .any(|file| file != &path && file.starts_with(&path))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn read_returns_file_contents() {
    let fs = InMemoryFileSystem::default();
    fs.write_file(Path::new("/project/.siroccorc"), String::from("{}"));

    assert_eq!(
      fs.read_to_string(Path::new("/project/.siroccorc")).unwrap(),
      "{}"
    );
  }

  #[test]
  fn read_errors_on_missing_file() {
    let fs = InMemoryFileSystem::default();

    let err = fs.read_to_string(Path::new("/missing")).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
  }

  #[test]
  fn relative_paths_resolve_against_cwd() {
    let fs = InMemoryFileSystem::default();
    fs.set_current_working_directory(Path::new("/project/src"));
    fs.write_file(Path::new("/project/.siroccorc"), String::from("{}"));

    assert!(fs.is_file(Path::new("../.siroccorc")));
    assert_eq!(fs.read_to_string(Path::new("../.siroccorc")).unwrap(), "{}");
  }

  #[test]
  fn dot_segments_are_folded() {
    let fs = InMemoryFileSystem::default();
    fs.write_file(Path::new("/a/b/file.txt"), String::from("x"));

    assert!(fs.is_file(Path::new("/a/./c/../b/file.txt")));
  }

  #[test]
  fn is_dir_reflects_ancestors_of_stored_files() {
    let fs = InMemoryFileSystem::default();
    fs.write_file(Path::new("/project/src/main.rs"), String::from(""));

    assert!(fs.is_dir(Path::new("/project")));
    assert!(fs.is_dir(Path::new("/project/src")));
    assert!(!fs.is_dir(Path::new("/project/src/main.rs")));
    assert!(!fs.is_dir(Path::new("/elsewhere")));
  }
}

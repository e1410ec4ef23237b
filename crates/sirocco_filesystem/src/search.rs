use std::path::Path;
use std::path::PathBuf;

use crate::FileSystem;

/// Finds the nearest file with one of the given names, walking up from `from` until `root`
/// inclusive. Returns None when no ancestor directory up to the root contains a matching file.
pub fn find_ancestor_file(
  fs: &dyn FileSystem,
  file_names: &[&str],
  from: &Path,
  root: &Path,
) -> Option<PathBuf> {
  for dir in from.ancestors() {
    for file_name in file_names {
      let candidate = dir.join(file_name);
      if fs.is_file(&candidate) {
        return Some(candidate);
      }
    }

    if dir == root {
      break;
    }
  }

  None
}

use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use glob_match::glob_match;

use crate::sirocco_config::SiroccoConfig;

impl SiroccoConfig {
  /// Applies each content glob, in declared order, against a file tree listing.
  ///
  /// Matching is case-sensitive. Duplicate matches across patterns are removed with
  /// first-seen order preserved. Pure function of its inputs; the tree listing itself
  /// comes from the external generator's scanner.
  pub fn match_content<P: AsRef<Path>>(&self, file_tree: &[P]) -> Vec<PathBuf> {
    let mut matched = Vec::new();
    let mut seen = HashSet::new();

    for pattern in &self.content {
      let pattern = pattern.strip_prefix("./").unwrap_or(pattern);

      for path in file_tree {
        let path = path.as_ref();
        let Some(candidate) = path.to_str() else {
          continue;
        };
        let candidate = candidate.strip_prefix("./").unwrap_or(candidate);

        if glob_match(pattern, candidate) && seen.insert(String::from(candidate)) {
          matched.push(path.to_path_buf());
        }
      }
    }

    matched
  }
}

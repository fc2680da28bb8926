//! The targets that the external tools are measured against

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::utils::{constants::GLOB_METACHARS, fs::anchor_to};

/// A target as given by the user: a plain path, or a glob pattern standing for
/// every path that it matches
#[derive(Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Glob(GlobPattern),
}

impl Source {
    /// Classifies a raw CLI target, anchoring it to `root` when it's relative.
    /// An existing path is always taken literally, even if its name contains
    /// glob metacharacters
    pub fn new(root: &Path, raw: &Path) -> Self {
        let anchored = anchor_to(root, raw);
        if anchored.exists() {
            return Source::File(anchored);
        }

        let Some(raw_str) = raw.to_str().filter(|s| s.contains(GLOB_METACHARS.as_slice())) else {
            return Source::File(anchored);
        };

        let pattern = if raw.is_absolute() {
            raw_str.to_string()
        } else {
            match root.to_str() {
                Some(root_str) => format!(
                    "{}{}{raw_str}",
                    Pattern::escape(root_str).trim_end_matches(std::path::MAIN_SEPARATOR),
                    std::path::MAIN_SEPARATOR
                ),
                None => {
                    log::warn!("The root {root:?} isn't valid UTF-8, so {raw_str} is taken literally");
                    return Source::File(anchored);
                }
            }
        };

        Source::Glob(GlobPattern {
            pattern,
            literal: anchored,
        })
    }

    #[inline(always)]
    pub fn paths(&self) -> Vec<PathBuf> {
        match self {
            Source::File(file) => vec![file.to_path_buf()],
            Source::Glob(pattern) => pattern.resolve(),
        }
    }
}

/// A glob pattern whose root part is already escaped, plus the path it stands
/// for when taken literally
#[derive(Debug, PartialEq, Eq)]
pub struct GlobPattern {
    pub pattern: String,
    pub literal: PathBuf,
}

impl GlobPattern {
    /// Matches are returned in the order given by [`glob::glob`]. A pattern that
    /// is malformed or without any match is kept as a literal path, so it'll be
    /// later reported as not found instead of silently vanishing from the run
    fn resolve(&self) -> Vec<PathBuf> {
        let pattern = &self.pattern;
        let entries = match glob::glob(pattern) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Taking {pattern} as a literal path, it isn't a valid glob pattern: {e}");
                return vec![self.literal.clone()];
            }
        };

        let matches = entries
            .filter_map(|entry| {
                entry
                    .map_err(|e| log::warn!("Unreadable match for {pattern}: {e}"))
                    .ok()
            })
            .collect::<Vec<PathBuf>>();

        if matches.is_empty() {
            log::warn!("The pattern {pattern} didn't match any path");
            vec![self.literal.clone()]
        } else {
            matches
        }
    }
}

/// Expands every raw CLI target into the ordered list of paths to measure
pub fn expand_targets(root: &Path, raw_targets: &[PathBuf]) -> Vec<PathBuf> {
    raw_targets
        .iter()
        .flat_map(|raw| Source::new(root, raw).paths())
        .collect()
}

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use color_eyre::{eyre::Context, Result};

pub fn create_file(file_path: &Path, buff_write: &[u8]) -> Result<()> {
    File::create(file_path)
        .with_context(|| format!("Could not create file {file_path:?}"))?
        .write_all(buff_write)
        .with_context(|| format!("Could not write to file {file_path:?}"))
}

/// Resolves the absolute path of the directory where the relative paths given by
/// the user must be anchored
pub fn get_root_absolute_path(root: &Path) -> Result<PathBuf> {
    let absolute = if root.is_absolute() {
        root.to_path_buf()
    } else {
        std::env::current_dir()
            .with_context(|| "Could not read the current working directory")?
            .join(root)
    };
    log::debug!("Root directory resolved to: {absolute:?}");
    Ok(absolute)
}

/// Joins `path` to `root` unless it's already absolute
pub fn anchor_to(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Counts the lines of a byte buffer the same way a line oriented reader
/// would do, so a last line without its trailing newline still counts
pub fn count_lines(bytes: &[u8]) -> u64 {
    let newlines = bytes.iter().filter(|b| **b == b'\n').count() as u64;
    match bytes.last() {
        Some(b'\n') | None => newlines,
        Some(_) => newlines + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(b""), 0);
        assert_eq!(count_lines(b"one\n"), 1);
        assert_eq!(count_lines(b"one\ntwo"), 2);
        assert_eq!(count_lines(b"one\ntwo\n\n"), 3);
    }

    #[test]
    fn test_anchor_to() {
        let root = Path::new("/work");
        assert_eq!(anchor_to(root, Path::new("tags")), PathBuf::from("/work/tags"));
        assert_eq!(anchor_to(root, Path::new("/tmp/tags")), PathBuf::from("/tmp/tags"));
    }
}

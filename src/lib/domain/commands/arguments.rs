//! Types and procedures that represents a command line argument,
//! or collections of command line arguments

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Type for represent a command line argument. Paths are kept as the OS gave
/// them, so a file name that isn't valid UTF-8 reaches the tool untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument<'a>(Cow<'a, OsStr>);

impl<'a> Argument<'a> {
    pub fn value(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }
}

impl<'a> From<&'a str> for Argument<'a> {
    fn from(value: &'a str) -> Self {
        Self(Cow::Borrowed(OsStr::new(value)))
    }
}

impl<'a> From<String> for Argument<'a> {
    fn from(value: String) -> Argument<'a> {
        Self(Cow::Owned(OsString::from(value)))
    }
}

impl<'a> From<OsString> for Argument<'a> {
    fn from(value: OsString) -> Argument<'a> {
        Self(Cow::Owned(value))
    }
}

impl<'a> From<&'a Path> for Argument<'a> {
    fn from(value: &'a Path) -> Self {
        Self(Cow::Borrowed(value.as_os_str()))
    }
}

impl<'a> From<&'a PathBuf> for Argument<'a> {
    fn from(value: &'a PathBuf) -> Self {
        Self::from(value.as_path())
    }
}

impl<'a> Deref for Argument<'a> {
    type Target = OsStr;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> AsRef<OsStr> for Argument<'a> {
    fn as_ref(&self) -> &OsStr {
        &self.0
    }
}

impl<'a> core::fmt::Display for Argument<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Strong type for represent a linear collection of [`Argument`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Arguments<'a>(Vec<Argument<'a>>);

impl<'a> Arguments<'a> {
    /// Returns a new collection of [`Argument`] with the specified capacity
    pub fn with_capacity(cap: usize) -> Self {
        Self(Vec::with_capacity(cap))
    }

    /// Creates and stores a new [`Argument`] to the end of this collection
    pub fn create_and_push<T>(&mut self, val: T)
    where
        T: Into<Argument<'a>>,
    {
        self.0.push(val.into())
    }

    /// Appends a new [`Argument`] to the end of this collection
    pub fn push(&mut self, arg: Argument<'a>) {
        self.0.push(arg)
    }

    /// Extends the underlying collection from a Iterator of [`Argument`]
    pub fn extend(&mut self, iter: impl IntoIterator<Item = Argument<'a>>) {
        self.0.extend(iter);
    }
}

impl<'a> Deref for Arguments<'a> {
    type Target = [Argument<'a>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> FromIterator<Argument<'a>> for Arguments<'a> {
    fn from_iter<T: IntoIterator<Item = Argument<'a>>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> core::fmt::Display for Arguments<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self.0.iter().map(|arg| arg.value()).collect::<Vec<_>>().join(" ");
        write!(f, "{joined}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments_display_joins_with_spaces() {
        let mut args = Arguments::with_capacity(3);
        args.create_and_push("parse");
        args.create_and_push(Path::new("src/main.py"));
        args.push(Argument::from(String::from("--output-format")));

        assert_eq!(args.len(), 3);
        assert_eq!(args.to_string(), "parse src/main.py --output-format");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_paths_are_passed_through_untouched() {
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/src/bad\xff.py"));
        let arg = Argument::from(path);

        assert_eq!(AsRef::<OsStr>::as_ref(&arg), path.as_os_str());
        assert_eq!(arg.as_bytes(), b"/src/bad\xff.py");
        assert_eq!(arg.to_string(), "/src/bad\u{FFFD}.py");
    }
}

//! Dot-separated paths addressing nodes within a configuration tree.

use core::fmt;
use core::str::FromStr;

/// A path into a configuration tree: an ordered sequence of string segments.
///
/// The empty path (no segments) is the *root path* and addresses the whole
/// tree. Parsing splits on `.`; an empty segment anywhere in a non-empty
/// path is rejected.
///
/// # Example
///
/// ```
/// use confmap_tree::Path;
///
/// let path: Path = "commands.save.arguments".parse().unwrap();
/// assert_eq!(path.segments().len(), 3);
/// assert_eq!(path.to_string(), "commands.save.arguments");
///
/// let root: Path = "".parse().unwrap();
/// assert!(root.is_root());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// The root path, addressing the whole tree.
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a path from pre-split segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The path's segments, in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }
        let segments: Vec<String> = s.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(PathError {
                raw: s.to_string(),
            });
        }
        Ok(Self { segments })
    }
}

/// Error returned when parsing a path containing an empty segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathError {
    raw: String,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path '{}' contains an empty segment", self.raw)
    }
}

impl core::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_root_from_empty_string() {
        let path: Path = "".parse().unwrap();
        assert!(path.is_root());
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn parses_nested_path() {
        let path: Path = "a.b.c".parse().unwrap();
        assert_eq!(path.segments(), ["a", "b", "c"]);
    }

    #[test]
    fn rejects_empty_segments() {
        assert!("a..b".parse::<Path>().is_err());
        assert!(".a".parse::<Path>().is_err());
        assert!("a.".parse::<Path>().is_err());
        assert!(".".parse::<Path>().is_err());
    }

    #[test]
    fn child_appends_segment() {
        let path = Path::root().child("commands").child("save");
        assert_eq!(path.to_string(), "commands.save");
    }
}

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

/// Fans out over every child at this level.
pub const WILDCARD: &str = "*";

/// Hops through a getter.
pub const CALL: &str = "()";

/// Receives a single value from a stream.
pub const RECV_ONE: &str = "1";

// -----------------------------------------------------------------------------
// Path

/// A path through an object graph: components separated by `.`.
///
/// Components are field or method names, map keys, list indices, or one
/// of the reserved components [`WILDCARD`], [`CALL`] and [`RECV_ONE`].
/// There is no escaping, a `.` cannot be part of a component.
///
/// # Examples
///
/// ```
/// use vc_path::Path;
///
/// let path = Path::new("Data.blah.0");
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.last(), Some("0"));
/// assert_eq!(path.to_string(), "Data.blah.0");
///
/// // An empty string holds a single empty component.
/// assert_eq!(Path::new("").len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Vec<String>);

impl Path {
    /// Parses a path, splitting on `.`.
    pub fn new(path: &str) -> Self {
        Self(path.split('.').map(String::from).collect())
    }

    /// The path with no component, designating the object itself.
    #[inline]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Builds a path from components.
    pub fn from_components<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(components.into_iter().map(Into::into).collect())
    }

    /// Returns the components.
    #[inline]
    pub fn components(&self) -> &[String] {
        &self.0
    }

    /// Returns the last component, `None` for the root path.
    #[inline]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Returns the number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the root path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy of this path with `component` appended.
    pub fn join(&self, component: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.0.push(component.into());
        path
    }

    #[inline]
    pub(crate) fn push(&mut self, component: &str) {
        self.0.push(component.to_string());
    }

    #[inline]
    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(first) = iter.next() {
            f.write_str(first)?;
        }
        for component in iter {
            f.write_str(".")?;
            f.write_str(component)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Path {
    #[inline]
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Path {
    #[inline]
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&Path> for Path {
    #[inline]
    fn from(value: &Path) -> Self {
        value.clone()
    }
}

impl AsRef<[String]> for Path {
    #[inline]
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// -----------------------------------------------------------------------------
// Macro

/// Creates a [`Path`] from a format string.
///
/// # Examples
///
/// ```
/// use vc_path::path;
///
/// let index = 3;
/// let path = path!("Accounts.{}.Balance", index);
/// assert_eq!(path.to_string(), "Accounts.3.Balance");
/// ```
#[macro_export]
macro_rules! path {
    ($($arg:tt)*) => {
        $crate::Path::new(&$crate::__macro_exports::format!($($arg)*))
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::Path;

    #[test]
    fn parse_and_format() {
        for text in ["A", "A.B.C", "Data.blah.*", "F.().X", "", "a..b"] {
            assert_eq!(Path::new(text).to_string(), text);
        }
        assert_eq!(Path::new("a..b").components(), ["a", "", "b"]);
    }

    #[test]
    fn root_is_empty() {
        let root = Path::root();
        assert!(root.is_empty());
        assert_eq!(root.last(), None);
        assert_eq!(root.to_string(), "");
        assert_eq!(root.join("A"), Path::new("A"));
    }

    #[test]
    fn push_and_pop() {
        let mut path = Path::new("A");
        path.push("B");
        assert_eq!(path.last(), Some("B"));
        path.pop();
        assert_eq!(path, Path::new("A"));
    }

    #[test]
    fn formatted() {
        let path = crate::path!("X.{}.{}", 1, "*");
        assert_eq!(path.components(), ["X", "1", "*"]);
        let parsed: Path = "X.1.*".parse().unwrap();
        assert_eq!(path, parsed);
    }
}

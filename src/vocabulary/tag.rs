use std::fmt;

/// Atomic label grouping tile types for exclusion and matching rules
///
/// Tags compare and order by name, so sets of tags iterate deterministically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    /// Create a tag with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The tag's name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

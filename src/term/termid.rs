use core::fmt::Debug;
use std::borrow::Borrow;
use std::fmt::Display;

/// The identifier of an ontology term, e.g. `GO:0005794`
///
/// Unlike the arena index [`crate::NodeIdx`], the `TermId` is stable
/// across graphs and subgraphs and is what leaves the crate in all mappings.
#[derive(Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TermId {
    inner: String,
}

impl TermId {
    /// Returns the identifier as string slice
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns `true` if the identifier is empty
    ///
    /// Stanzas without an `id:` line produce empty identifiers
    /// and must not be added to a graph.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<&str> for TermId {
    fn from(s: &str) -> Self {
        Self {
            inner: s.trim().to_string(),
        }
    }
}

impl From<String> for TermId {
    fn from(s: String) -> Self {
        if s.trim().len() == s.len() {
            Self { inner: s }
        } else {
            Self::from(s.as_str())
        }
    }
}

impl From<&TermId> for TermId {
    fn from(id: &TermId) -> Self {
        id.clone()
    }
}

impl Borrow<str> for TermId {
    fn borrow(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for TermId {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Debug for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TermId({})", self)
    }
}

impl Display for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl PartialEq<str> for TermId {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for TermId {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

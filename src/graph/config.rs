use std::collections::BTreeSet;

use tracing::warn;

use crate::relationship::{DirectionMode, Relationship};
use crate::term::Namespace;
use crate::{OboError, OboResult, IS_A};

/// Validates a relationship allow-list
///
/// Every id must be a known relationship. `is_a` is added if it is missing.
pub(crate) fn allow_list<I, S>(ids: I) -> OboResult<BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut allowed = BTreeSet::new();
    for id in ids {
        let id = id.as_ref().trim();
        if !Relationship::is_known(id) {
            return Err(OboError::UnknownRelationship(id.to_string()));
        }
        allowed.insert(id.to_string());
    }
    if !allowed.contains(IS_A) {
        warn!("The {} relationship is required and was added to the allowed relationships", IS_A);
        allowed.insert(IS_A.to_string());
    }
    Ok(allowed)
}

/// Restricts which terms and edges an [`crate::OboGraph`] accepts
///
/// The default configuration accepts terms of all namespaces and all
/// relationships and uses [`DirectionMode::Corrected`].
///
/// # Examples
///
/// ```
/// use obocats::{DirectionMode, GraphConfig, Namespace};
///
/// let config = GraphConfig::new()
///     .with_namespace(Namespace::CellularComponent)
///     .with_allowed_relationships(["part_of"])
///     .unwrap()
///     .with_direction(DirectionMode::Original);
///
/// assert!(config.allows("is_a"));
/// assert!(config.allows("part_of"));
/// assert!(!config.allows("regulates"));
///
/// assert!(GraphConfig::new().with_allowed_relationships(["touches"]).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphConfig {
    namespace: Option<Namespace>,
    allowed_relationships: Option<BTreeSet<String>>,
    direction: DirectionMode,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept terms of the given namespace
    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = Some(namespace);
        self
    }

    /// Only accept edges of the given relationships
    ///
    /// # Errors
    ///
    /// [`OboError::UnknownRelationship`] if one of the ids is not a known relationship
    pub fn with_allowed_relationships<I, S>(mut self, ids: I) -> OboResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_relationships = Some(allow_list(ids)?);
        Ok(self)
    }

    pub fn with_direction(mut self, direction: DirectionMode) -> Self {
        self.direction = direction;
        self
    }

    pub fn namespace(&self) -> Option<Namespace> {
        self.namespace
    }

    /// The relationship allow-list. `None` allows all relationships
    pub fn allowed_relationships(&self) -> Option<&BTreeSet<String>> {
        self.allowed_relationships.as_ref()
    }

    pub fn direction(&self) -> DirectionMode {
        self.direction
    }

    /// Returns `true` if edges of the relationship are accepted
    pub fn allows(&self, relationship_id: &str) -> bool {
        self.allowed_relationships
            .as_ref()
            .map_or(true, |allowed| allowed.contains(relationship_id))
    }

    /// Returns `true` if the namespace passes the namespace filter
    pub fn accepts_namespace(&self, namespace: Option<Namespace>) -> bool {
        self.namespace.map_or(true, |filter| namespace == Some(filter))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn is_a_is_forced() {
        let allowed = allow_list(["part_of", " has_part "]).unwrap();
        assert_eq!(allowed.len(), 3);
        assert!(allowed.contains(IS_A));
        assert!(allowed.contains("has_part"));
    }

    #[test]
    fn unknown_relationship() {
        let err = allow_list(["is_a", "adjacent_to"]).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn namespace_filter() {
        let config = GraphConfig::new();
        assert!(config.accepts_namespace(None));
        assert!(config.allows("anything"));

        let config = config.with_namespace(Namespace::MolecularFunction);
        assert!(config.accepts_namespace(Some(Namespace::MolecularFunction)));
        assert!(!config.accepts_namespace(Some(Namespace::BiologicalProcess)));
        assert!(!config.accepts_namespace(None));
    }
}

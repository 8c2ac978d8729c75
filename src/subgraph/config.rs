use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use crate::graph::{allow_list, GraphConfig};
use crate::term::Namespace;
use crate::{OboError, OboResult};

/// Defines which super graph nodes are pulled into a seeded subgraph
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Extension {
    /// All super graph descendants of the representative nodes
    #[default]
    Greedy,
    /// Only nodes on a path between a subgraph leaf and a representative node
    Conservative,
}

impl TryFrom<&str> for Extension {
    type Error = OboError;
    fn try_from(s: &str) -> OboResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "greedy" => Ok(Extension::Greedy),
            "conservative" => Ok(Extension::Conservative),
            _ => Err(OboError::InvalidInput(format!(
                "{s} is not a valid extension mode"
            ))),
        }
    }
}

impl FromStr for Extension {
    type Err = OboError;
    fn from_str(s: &str) -> OboResult<Self> {
        Extension::try_from(s)
    }
}

impl Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Extension::Greedy => write!(f, "greedy"),
            Extension::Conservative => write!(f, "conservative"),
        }
    }
}

/// Filters and extension mode of a [`crate::SubGraph`]
///
/// The filters must be compatible with the filters of the super graph,
/// this is checked when the subgraph is created.
///
/// ```
/// use obocats::{Extension, Namespace, SubGraphConfig};
///
/// let config = SubGraphConfig::new()
///     .with_namespace(Namespace::CellularComponent)
///     .with_extension("conservative".parse().unwrap());
/// assert_eq!(config.extension(), Extension::Conservative);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubGraphConfig {
    namespace: Option<Namespace>,
    allowed_relationships: Option<BTreeSet<String>>,
    extension: Extension,
}

impl SubGraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the same filters as the super graph
    pub fn inherit(graph: &GraphConfig) -> Self {
        Self {
            namespace: graph.namespace(),
            allowed_relationships: graph.allowed_relationships().cloned(),
            extension: Extension::default(),
        }
    }

    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = Some(namespace);
        self
    }

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

    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension = extension;
        self
    }

    pub fn namespace(&self) -> Option<Namespace> {
        self.namespace
    }

    pub fn allowed_relationships(&self) -> Option<&BTreeSet<String>> {
        self.allowed_relationships.as_ref()
    }

    pub fn extension(&self) -> Extension {
        self.extension
    }

    pub fn allows(&self, relationship_id: &str) -> bool {
        self.allowed_relationships
            .as_ref()
            .map_or(true, |allowed| allowed.contains(relationship_id))
    }

    pub fn accepts_namespace(&self, namespace: Option<Namespace>) -> bool {
        self.namespace.map_or(true, |filter| namespace == Some(filter))
    }

    /// Checks that the filters only narrow down the filters of the super graph
    ///
    /// # Errors
    ///
    /// - [`OboError::NamespaceConflict`]: the super graph is filtered by
    ///   namespace and the subgraph uses a different (or no) namespace
    /// - [`OboError::RelationshipConflict`]: the subgraph allows a
    ///   relationship that the super graph does not allow
    pub fn check_compatible(&self, supergraph: &GraphConfig) -> OboResult<()> {
        if let Some(filter) = supergraph.namespace() {
            if self.namespace != Some(filter) {
                return Err(OboError::NamespaceConflict {
                    subgraph: self
                        .namespace
                        .map_or_else(|| "none".to_string(), |ns| ns.to_string()),
                    supergraph: filter.to_string(),
                });
            }
        }
        if let (Some(allowed), Some(requested)) =
            (supergraph.allowed_relationships(), &self.allowed_relationships)
        {
            if let Some(id) = requested.difference(allowed).next() {
                return Err(OboError::RelationshipConflict(id.clone()));
            }
        }
        Ok(())
    }
}

use crate::term::NodeGroup;
use crate::OboGraph;

/// The single node that stands for the concept of a [`crate::SubGraph`]
///
/// A category node wraps the representative nodes of the subgraph.
/// With exactly one representative, the category uses the id of that
/// term. Otherwise the category is identified by its name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryNode {
    name: String,
    id: String,
    representatives: NodeGroup,
}

impl CategoryNode {
    pub(crate) fn new(name: &str, representatives: NodeGroup, graph: &OboGraph) -> Self {
        let single = match representatives.as_slice() {
            [single] => graph.node(*single).map(|node| node.id().to_string()),
            _ => None,
        };
        Self {
            name: name.to_string(),
            id: single.unwrap_or_else(|| name.to_string()),
            representatives,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The id that all member terms are mapped to
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `true` if the category is identified by a term of the ontology
    pub fn is_term(&self) -> bool {
        self.representatives.len() == 1 && self.id != self.name
    }

    /// The super graph nodes that represent the category
    pub fn representatives(&self) -> &NodeGroup {
        &self.representatives
    }
}

use std::fmt::Display;

use crate::relationship::Relationship;
use crate::term::{NodeIdx, TermId};

/// The position of an [`Edge`] inside an [`crate::OboGraph`]
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeIdx(u32);

impl EdgeIdx {
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for EdgeIdx {
    fn from(n: usize) -> Self {
        Self(u32::try_from(n).expect("graphs hold less than u32::MAX edges"))
    }
}

impl Display for EdgeIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "edge#{}", self.0)
    }
}

/// A typed connection between two terms
///
/// The edge stores the two term ids in the order of the ontology file,
/// e.g. `GO:0000139 part_of GO:0005794` is stored as
/// `("GO:0000139", "GO:0005794")`. Which of them is the parent is
/// decided by the [`Relationship`] and never stored on the edge.
///
/// The endpoint nodes are resolved once the graph links all edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pair: (TermId, TermId),
    relationship_id: String,
    nodes: Option<(NodeIdx, NodeIdx)>,
}

impl Edge {
    pub fn new<I: Into<TermId>, J: Into<TermId>>(node1: I, node2: J, relationship_id: &str) -> Self {
        Self {
            pair: (node1.into(), node2.into()),
            relationship_id: relationship_id.to_string(),
            nodes: None,
        }
    }

    /// The term ids of both endpoints, in file order
    pub fn node_pair_id(&self) -> (&TermId, &TermId) {
        (&self.pair.0, &self.pair.1)
    }

    pub fn relationship_id(&self) -> &str {
        &self.relationship_id
    }

    /// The resolved endpoints, in file order
    ///
    /// `None` until the graph linked the edge
    pub fn node_pair(&self) -> Option<(NodeIdx, NodeIdx)> {
        self.nodes
    }

    pub fn is_linked(&self) -> bool {
        self.nodes.is_some()
    }

    /// Returns `true` if `node` is one of the resolved endpoints
    pub fn connects(&self, node: NodeIdx) -> bool {
        matches!(self.nodes, Some((a, b)) if a == node || b == node)
    }

    /// The id of the semantic parent term
    pub fn parent_id(&self, relationship: &Relationship) -> Option<&TermId> {
        relationship.forward(self.node_pair_id())
    }

    /// The id of the semantic child term
    pub fn child_id(&self, relationship: &Relationship) -> Option<&TermId> {
        relationship.reverse(self.node_pair_id())
    }

    /// The resolved semantic parent node
    pub fn parent_node(&self, relationship: &Relationship) -> Option<NodeIdx> {
        relationship.forward(self.nodes?)
    }

    /// The resolved semantic child node
    pub fn child_node(&self, relationship: &Relationship) -> Option<NodeIdx> {
        relationship.reverse(self.nodes?)
    }

    pub(crate) fn link(&mut self, nodes: (NodeIdx, NodeIdx)) {
        self.nodes = Some(nodes);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::DirectionMode;

    #[test]
    fn parent_and_child_are_derived() {
        let part_of = Relationship::known("part_of", DirectionMode::Corrected).unwrap();
        let mut edge = Edge::new("GO:0000139", "GO:0005794", "part_of");
        assert_eq!(edge.parent_id(&part_of).unwrap(), "GO:0005794");
        assert_eq!(edge.child_id(&part_of).unwrap(), "GO:0000139");
        assert!(edge.parent_node(&part_of).is_none());

        edge.link((NodeIdx::from(4usize), NodeIdx::from(2usize)));
        assert_eq!(edge.parent_node(&part_of), Some(NodeIdx::from(2usize)));
        assert_eq!(edge.child_node(&part_of), Some(NodeIdx::from(4usize)));
        assert!(edge.connects(NodeIdx::from(4usize)));
        assert!(!edge.connects(NodeIdx::from(3usize)));
    }
}

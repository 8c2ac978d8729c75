//! Ontology terms and the building blocks to address them
//!
//! - [`TermId`]: the identifier of a term, e.g. `GO:0005794`
//! - [`NodeIdx`]: the position of a term in the arena of an [`OboGraph`]
//! - [`NodeGroup`]: a sorted set of [`NodeIdx`]
//! - [`Node`]: the raw, owned term as produced by a parser
//! - [`Term`]: a read-only view of a linked term, with access to the graph
use core::fmt::Debug;
use std::fmt::Display;
use std::str::FromStr;

use crate::{OboError, OboGraph, OboResult};

mod group;
mod node;
mod termid;

pub use group::{NodeGroup, NodeIdxs};
pub use node::Node;
pub use termid::TermId;

/// The position of a [`Node`] inside the arena of an [`OboGraph`]
///
/// Indices are never re-used, even after a node was removed.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeIdx(u32);

impl NodeIdx {
    /// Returns the arena position
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for NodeIdx {
    fn from(n: usize) -> Self {
        Self(u32::try_from(n).expect("graphs hold less than u32::MAX nodes"))
    }
}

impl From<u32> for NodeIdx {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

impl Display for NodeIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three sub-ontologies of the Gene Ontology
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Namespace {
    /// `cellular_component`
    CellularComponent,
    /// `biological_process`
    BiologicalProcess,
    /// `molecular_function`
    MolecularFunction,
}

impl Namespace {
    /// Returns the namespace as spelled in OBO files
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::CellularComponent => "cellular_component",
            Namespace::BiologicalProcess => "biological_process",
            Namespace::MolecularFunction => "molecular_function",
        }
    }
}

impl TryFrom<&str> for Namespace {
    type Error = OboError;
    fn try_from(s: &str) -> OboResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "cellular_component" => Ok(Namespace::CellularComponent),
            "biological_process" => Ok(Namespace::BiologicalProcess),
            "molecular_function" => Ok(Namespace::MolecularFunction),
            _ => Err(OboError::InvalidNamespace(s.to_string())),
        }
    }
}

impl FromStr for Namespace {
    type Err = OboError;
    fn from_str(s: &str) -> OboResult<Self> {
        Namespace::try_from(s)
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The `Term` represents a single, linked term of an [`OboGraph`]
///
/// The term holds a reference to the graph and provides traversals
/// over parents, children and the transitive closure.
#[derive(Clone, Copy)]
pub struct Term<'a> {
    idx: NodeIdx,
    node: &'a Node,
    graph: &'a OboGraph,
}

impl<'a> Term<'a> {
    /// Constructs a new [`Term`]
    ///
    /// # Errors
    ///
    /// If the given [`NodeIdx`] does not match an existing node
    /// it returns [`OboError::DoesNotExist`]
    pub fn try_new(graph: &'a OboGraph, idx: NodeIdx) -> OboResult<Term<'a>> {
        let node = graph.node(idx).ok_or(OboError::DoesNotExist)?;
        Ok(Term { idx, node, graph })
    }

    /// Returns the [`TermId`] of the term
    pub fn id(&self) -> &'a TermId {
        self.node.id()
    }

    /// Returns the arena position of the term
    pub fn index(&self) -> NodeIdx {
        self.idx
    }

    pub fn name(&self) -> &'a str {
        self.node.name()
    }

    pub fn definition(&self) -> &'a str {
        self.node.definition()
    }

    pub fn namespace(&self) -> Option<Namespace> {
        self.node.namespace()
    }

    pub fn obsolete(&self) -> bool {
        self.node.obsolete()
    }

    /// Returns the [`NodeIdx`]s of the direct parents
    pub fn parent_ids(&self) -> &'a NodeGroup {
        self.node.parents()
    }

    /// Returns the [`NodeIdx`]s of the direct children
    pub fn children_ids(&self) -> &'a NodeGroup {
        self.node.children()
    }

    /// Returns an iterator of the direct parents of the term
    pub fn parents(&self) -> Terms<'a> {
        Terms::new(self.node.parents().clone(), self.graph)
    }

    /// Returns an iterator of the direct children of the term
    pub fn children(&self) -> Terms<'a> {
        Terms::new(self.node.children().clone(), self.graph)
    }

    /// Returns all direct and indirect parents
    pub fn ancestors(&self) -> NodeGroup {
        self.graph.ancestors(self.idx)
    }

    /// Returns all direct and indirect children
    pub fn descendants(&self) -> NodeGroup {
        self.graph.descendants(self.idx)
    }

    /// Returns `true` if `self` is a direct or indirect child of `other`
    pub fn child_of(&self, other: &Term) -> bool {
        self.ancestors().contains(&other.idx)
    }

    /// Returns `true` if `self` is a direct or indirect parent of `other`
    pub fn parent_of(&self, other: &Term) -> bool {
        other.child_of(self)
    }

    /// Returns the distance to the closest root node of the graph
    pub fn depth(&self) -> usize {
        self.graph.node_depth(self.idx)
    }
}

impl Debug for Term<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Term({} | {})", self.id(), self.name())
    }
}

impl PartialEq for Term<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.idx == other.idx && std::ptr::eq(self.graph, other.graph)
    }
}

/// Iterates [`Term`]s of a [`NodeGroup`]
///
/// The iterator owns the group, because closures are computed on the fly
/// and are not always borrowed from the graph.
pub struct Terms<'a> {
    inner: NodeGroup,
    graph: &'a OboGraph,
    pos: usize,
}

impl<'a> Terms<'a> {
    /// Constructs a new [`Terms`] iterator
    pub fn new(inner: NodeGroup, graph: &'a OboGraph) -> Self {
        Self {
            inner,
            graph,
            pos: 0,
        }
    }
}

impl<'a> Iterator for Terms<'a> {
    type Item = Term<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let idx = *self.inner.as_slice().get(self.pos)?;
            self.pos += 1;
            if let Ok(term) = Term::try_new(self.graph, idx) {
                return Some(term);
            }
        }
    }
}

impl Debug for Terms<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Terms({} nodes)", self.inner.len())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn namespace_from_str() {
        assert_eq!(
            Namespace::try_from("cellular_component").unwrap(),
            Namespace::CellularComponent
        );
        assert_eq!(
            "Biological_Process".parse::<Namespace>().unwrap(),
            Namespace::BiologicalProcess
        );
        let err = Namespace::try_from("cytoplasm").unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(Namespace::MolecularFunction.to_string(), "molecular_function");
    }

    #[test]
    fn term_view() {
        let mut graph = OboGraph::default();
        let root = graph.add_node(Node::new("GO:1", "cellular_component"));
        let child = graph.add_node(Node::new("GO:2", "membrane"));
        graph.add_edge(crate::graph::Edge::new("GO:2", "GO:1", "is_a"));
        graph.link_edges();

        let root = Term::try_new(&graph, root).unwrap();
        let child = Term::try_new(&graph, child).unwrap();
        assert_eq!(child.parents().next().unwrap(), root);
        assert_eq!(root.children().count(), 1);
        assert!(child.child_of(&root));
        assert!(root.parent_of(&child));
        assert!(!root.child_of(&child));
        assert!(Term::try_new(&graph, 99usize.into()).is_err());
    }
}

//! The [`OboGraph`] owns all terms, edges and relationships of an ontology
use core::fmt::Debug;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::parser;
use crate::relationship::Relationship;
use crate::term::{Node, NodeGroup, NodeIdx, Term};
use crate::OboResult;

mod arena;
mod closure;
mod config;
mod edge;
mod vocabulary;

use arena::Arena;
pub(crate) use closure::{ClosureCache, Structure, StructureCache, Topology};
pub(crate) use config::allow_list;
pub use config::GraphConfig;
pub use edge::{Edge, EdgeIdx};
use vocabulary::Vocabulary;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// `OboGraph` is the in-memory DAG of an ontology
///
/// The graph owns all [`Node`]s and [`Edge`]s and the [`Relationship`]s
/// that describe the edges. It indexes nodes by their id and by the words
/// of their name and definition.
///
/// # Examples
///
/// ```
/// use obocats::graph::Edge;
/// use obocats::term::Node;
/// use obocats::OboGraph;
///
/// let mut graph = OboGraph::default();
/// let root = graph.add_node(Node::new("GO:0005575", "cellular_component"));
/// let golgi = graph.add_node(Node::new("GO:0005794", "golgi apparatus"));
/// let membrane = graph.add_node(Node::new("GO:0000139", "golgi membrane"));
/// graph.add_root(root);
///
/// graph.add_edge(Edge::new("GO:0005794", "GO:0005575", "is_a"));
/// graph.add_edge(Edge::new("GO:0000139", "GO:0005794", "part_of"));
/// graph.add_edge(Edge::new("GO:0000139", "GO:9999999", "is_a"));
///
/// // the last edge points to an unknown term
/// assert_eq!(graph.link_edges(), 1);
///
/// assert_eq!(graph.descendants(root).len(), 2);
/// assert_eq!(graph.node_depth(membrane), 2);
/// assert_eq!(graph.filter_nodes(&["Golgi"]).len(), 2);
///
/// let term = graph.term("GO:0000139").unwrap();
/// assert_eq!(term.parents().next().unwrap().index(), golgi);
/// ```
///
/// # Construction
///
/// A parser populates the graph in any order
/// 1. Add all terms [`OboGraph::add_node`]
/// 2. Add all edges [`OboGraph::add_edge`]
/// 3. Add the relationship definitions [`OboGraph::add_relationship`]
/// 4. Resolve all edges [`OboGraph::link_edges`]
///
/// [`OboGraph::from_obo_file`] does all of this for GO OBO files.
///
/// # Layout
///
/// ```mermaid
/// classDiagram
///     class OboGraph {
///         filter_nodes() NodeGroup
///         descendants() NodeGroup
///         ancestors() NodeGroup
///         into_iter()
///     }
///     class Node {
///         - TermId id
///         - NodeGroup parents
///         - NodeGroup children
///     }
///     class Edge {
///         - (TermId, TermId) pair
///         - String relationship_id
///     }
///     class Relationship {
///         forward() Option
///         reverse() Option
///     }
///     class `Term~'a~` {
///         - &Node
///         - &OboGraph
///     }
///     OboGraph *-- Node: arena
///     OboGraph *-- Edge
///     OboGraph *-- Relationship
///     Edge ..> Relationship: relationship_id
///     OboGraph ..|> `Term~'a~`: term()
/// ```
pub struct OboGraph {
    config: GraphConfig,
    nodes: Arena,
    edges: Vec<Option<Edge>>,
    vocabulary: Vocabulary,
    relationships: HashMap<String, Relationship>,
    relationship_count: BTreeMap<String, usize>,
    roots: NodeGroup,
    dropped_edges: usize,
    version: u64,
    closure: ClosureCache,
    structure: StructureCache,
}

impl Default for OboGraph {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl OboGraph {
    /// Constructs an empty graph without any filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs an empty graph that uses the given filters
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            nodes: Arena::default(),
            edges: Vec::new(),
            vocabulary: Vocabulary::default(),
            relationships: HashMap::new(),
            relationship_count: BTreeMap::new(),
            roots: NodeGroup::default(),
            dropped_edges: 0,
            version: 0,
            closure: ClosureCache::default(),
            structure: StructureCache::default(),
        }
    }

    /// Builds a linked graph from a GO OBO file
    ///
    /// Only valid terms and allowed edges are added
    ///
    /// # Errors
    ///
    /// - [`crate::OboError::CannotOpenFile`]: the file cannot be read
    /// - [`crate::OboError::InvalidNamespace`]: a term uses an unknown namespace
    ///
    /// # Examples
    ///
    /// ```
    /// use obocats::{GraphConfig, Namespace, OboGraph};
    ///
    /// let config = GraphConfig::new().with_namespace(Namespace::CellularComponent);
    /// let graph = OboGraph::from_obo_file("tests/small.obo", config).unwrap();
    /// assert!(graph.term("GO:0005794").is_some());
    /// // biological_process terms are filtered out
    /// assert!(graph.term("GO:0008150").is_none());
    /// ```
    pub fn from_obo_file<P: AsRef<Path>>(path: P, config: GraphConfig) -> OboResult<Self> {
        let mut graph = Self::with_config(config);
        parser::go_obo::read_obo_file(path.as_ref(), &mut graph)?;
        Ok(graph)
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of nodes in the graph
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Marks all cached closures and structures as outdated
    fn touch(&mut self) {
        self.version += 1;
    }

    /// Adds a node to the graph and returns its position
    ///
    /// An existing node with the same id is removed first.
    /// The graph does not check [`OboGraph::valid_node`], this is up to
    /// the caller.
    pub fn add_node(&mut self, mut node: Node) -> NodeIdx {
        if let Some(existing) = self.nodes.idx_of(node.id().as_str()) {
            warn!("Replacing duplicate node {}", node.id());
            self.remove_node(existing);
        }
        node.detach();
        let idx = self.nodes.insert(node);
        if let Some(node) = self.nodes.get(idx) {
            self.vocabulary.insert(idx, node);
        }
        self.touch();
        idx
    }

    /// Adds an unlinked edge to the graph
    ///
    /// The edge is resolved in [`OboGraph::link_edges`]
    pub fn add_edge(&mut self, edge: Edge) -> EdgeIdx {
        *self
            .relationship_count
            .entry(edge.relationship_id().to_string())
            .or_default() += 1;
        let idx = EdgeIdx::from(self.edges.len());
        self.edges.push(Some(edge));
        self.touch();
        idx
    }

    /// Registers the definition of a relationship
    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.relationships
            .insert(relationship.id().to_string(), relationship);
        self.touch();
    }

    /// Declares a node as a root of the ontology
    pub fn add_root(&mut self, idx: NodeIdx) -> bool {
        let added = self.roots.insert(idx);
        if added {
            self.touch();
        }
        added
    }

    /// Resolves the endpoints of all edges that are not yet linked
    ///
    /// Edges that reference an unknown term or a relationship that is not
    /// allowed are removed from the graph. Edges with a relationship that
    /// was never registered get the default definition of
    /// [`Relationship::resolve`].
    ///
    /// Returns the number of removed edges
    pub fn link_edges(&mut self) -> usize {
        let direction = self.config.direction();
        let mut dropped = 0;
        let mut linked = 0;

        for pos in 0..self.edges.len() {
            let (pair, relationship_id) = match &self.edges[pos] {
                Some(edge) if !edge.is_linked() => {
                    let (a, b) = edge.node_pair_id();
                    let pair = self
                        .nodes
                        .idx_of(a.as_str())
                        .zip(self.nodes.idx_of(b.as_str()));
                    (pair, edge.relationship_id().to_string())
                }
                _ => continue,
            };

            let pair = match pair {
                Some(pair) if self.config.allows(&relationship_id) => pair,
                _ => {
                    if let Some(edge) = self.edges[pos].take() {
                        let (a, b) = edge.node_pair_id();
                        trace!("Dropping edge {} {} {}", a, edge.relationship_id(), b);
                    }
                    dropped += 1;
                    continue;
                }
            };

            let relationship = self
                .relationships
                .entry(relationship_id)
                .or_insert_with_key(|id| Relationship::resolve(id, direction))
                .clone();
            self.connect(EdgeIdx::from(pos), pair, &relationship);
            linked += 1;
        }

        if dropped > 0 {
            warn!("Dropped {} edges with unknown terms or excluded relationships", dropped);
        }
        debug!("Linked {} edges", linked);
        self.dropped_edges += dropped;
        self.touch();
        dropped
    }

    fn connect(&mut self, idx: EdgeIdx, pair: (NodeIdx, NodeIdx), relationship: &Relationship) {
        if let Some(edge) = self.edges.get_mut(idx.as_usize()).and_then(Option::as_mut) {
            edge.link(pair);
        }
        for node in [pair.0, pair.1] {
            if let Some(node) = self.nodes.get_mut(node) {
                node.add_edge(idx);
            }
        }
        if !relationship.is_scoping() {
            return;
        }
        if let (Some(parent), Some(child)) = (relationship.forward(pair), relationship.reverse(pair)) {
            if parent == child {
                return;
            }
            if let Some(node) = self.nodes.get_mut(parent) {
                node.children_mut().insert(child);
            }
            if let Some(node) = self.nodes.get_mut(child) {
                node.parents_mut().insert(parent);
            }
        }
    }

    /// Removes a node and all its edges
    ///
    /// Returns the detached node, or `None` if it does not exist
    pub fn remove_node(&mut self, idx: NodeIdx) -> Option<Node> {
        let mut node = self.nodes.remove(idx)?;
        for edge in node.edges().to_vec() {
            self.remove_edge(edge);
        }
        for parent in node.parents() {
            if let Some(parent) = self.nodes.get_mut(parent) {
                parent.children_mut().remove(&idx);
            }
        }
        for child in node.children() {
            if let Some(child) = self.nodes.get_mut(child) {
                child.parents_mut().remove(&idx);
            }
        }
        self.vocabulary.remove(idx, &node);
        self.roots.remove(&idx);
        node.detach();
        self.touch();
        Some(node)
    }

    /// Removes an edge from the graph
    ///
    /// The parent/child connection of a scoping edge is only removed if no
    /// other scoping edge connects the same two nodes.
    /// Relationship usage counts are not changed.
    pub fn remove_edge(&mut self, idx: EdgeIdx) -> Option<Edge> {
        let edge = self.edges.get_mut(idx.as_usize())?.take()?;
        if let Some(pair) = edge.node_pair() {
            for node in [pair.0, pair.1] {
                if let Some(node) = self.nodes.get_mut(node) {
                    node.remove_edge(idx);
                }
            }
            let scoped = self
                .relationship_of(&edge)
                .filter(|rel| rel.is_scoping())
                .and_then(|rel| rel.forward(pair).zip(rel.reverse(pair)));
            if let Some((parent, child)) = scoped {
                if !self.scoped_by_any_edge(parent, child) {
                    if let Some(node) = self.nodes.get_mut(parent) {
                        node.children_mut().remove(&child);
                    }
                    if let Some(node) = self.nodes.get_mut(child) {
                        node.parents_mut().remove(&parent);
                    }
                }
            }
        }
        self.touch();
        Some(edge)
    }

    /// Returns `true` if any linked scoping edge makes `parent` a parent of `child`
    fn scoped_by_any_edge(&self, parent: NodeIdx, child: NodeIdx) -> bool {
        let Some(node) = self.nodes.get(child) else {
            return false;
        };
        node.edges().iter().any(|idx| {
            self.edge(*idx)
                .and_then(|edge| {
                    let rel = self.relationship_of(edge).filter(|rel| rel.is_scoping())?;
                    let pair = edge.node_pair()?;
                    Some(rel.forward(pair) == Some(parent) && rel.reverse(pair) == Some(child))
                })
                .unwrap_or(false)
        })
    }

    /// Returns `true` if the node is not obsolete and matches the namespace filter
    pub fn valid_node(&self, node: &Node) -> bool {
        !node.obsolete() && self.config.accepts_namespace(node.namespace())
    }

    /// Returns `true` if both endpoints are part of the graph
    /// and the relationship is allowed
    pub fn valid_edge(&self, edge: &Edge) -> bool {
        let (a, b) = edge.node_pair_id();
        self.nodes.contains_id(a.as_str())
            && self.nodes.contains_id(b.as_str())
            && self.relationship_allowed(edge.relationship_id())
    }

    pub fn relationship_allowed(&self, relationship_id: &str) -> bool {
        self.config.allows(relationship_id)
    }

    /// Returns all nodes whose name or definition contains a word of the keywords
    ///
    /// The search is case-insensitive and only returns nodes that match
    /// the namespace filter.
    pub fn filter_nodes<S: AsRef<str>>(&self, keywords: &[S]) -> NodeGroup {
        self.vocabulary
            .lookup(keywords)
            .iter()
            .filter(|idx| {
                self.nodes
                    .get(*idx)
                    .map_or(false, |node| self.config.accepts_namespace(node.namespace()))
            })
            .collect()
    }

    /// Returns all linked edges with both endpoints in `nodes`
    pub fn filter_edges(&self, nodes: &NodeGroup) -> Vec<EdgeIdx> {
        self.edges()
            .filter(|(_, edge)| {
                edge.node_pair()
                    .map_or(false, |(a, b)| nodes.contains(&a) && nodes.contains(&b))
                    && self.relationship_allowed(edge.relationship_id())
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Returns the number of parent steps to the closest root node
    ///
    /// Nodes that are not connected to a root report the distance to their
    /// most distant ancestor plus one, so an orphan has depth 1.
    /// Unknown nodes have depth 0.
    pub fn node_depth(&self, idx: NodeIdx) -> usize {
        if self.nodes.get(idx).is_none() {
            return 0;
        }
        let mut depth = 0;
        let mut frontier = NodeGroup::new();
        frontier.insert(idx);
        loop {
            if frontier.intersects(&self.roots) {
                return depth;
            }
            if frontier.is_empty() {
                return depth;
            }
            frontier = frontier
                .iter()
                .filter_map(|n| self.nodes.get(n))
                .fold(NodeGroup::new(), |acc, node| &acc | node.parents());
            depth += 1;
        }
    }

    /// Returns all nodes that are a descendant of `top` and an ancestor of `bottom`
    pub fn nodes_between(&self, bottom: NodeIdx, top: NodeIdx) -> NodeGroup {
        &self.ancestors(bottom) & &self.descendants(top)
    }

    /// Returns all direct and indirect children of the node
    pub fn descendants(&self, idx: NodeIdx) -> NodeGroup {
        self.closure.descendants(self, self.version, idx)
    }

    /// Returns all direct and indirect parents of the node
    pub fn ancestors(&self, idx: NodeIdx) -> NodeGroup {
        self.closure.ancestors(self, self.version, idx)
    }

    fn structure(&self) -> Structure {
        self.structure.get_or_compute(self.version, || {
            let mut structure = Structure::default();
            for (idx, node) in self.nodes.iter().filter(|(_, node)| !node.obsolete()) {
                if node.parents().is_empty() && !self.roots.contains(&idx) {
                    structure.orphans.insert(idx);
                }
                if node.children().is_empty() {
                    structure.leaves.insert(idx);
                }
            }
            structure
        })
    }

    /// Non-obsolete nodes without parents that are not declared roots
    pub fn orphans(&self) -> NodeGroup {
        self.structure().orphans
    }

    /// Non-obsolete nodes without children
    pub fn leaves(&self) -> NodeGroup {
        self.structure().leaves
    }

    /// Number of times orphans and leaves were computed
    pub fn structure_recomputations(&self) -> usize {
        self.structure.recomputations()
    }

    /// Number of edges that were dropped while linking
    pub fn dropped_edges(&self) -> usize {
        self.dropped_edges
    }

    /// Returns the [`Term`] with the given id
    pub fn term(&self, id: &str) -> Option<Term<'_>> {
        Term::try_new(self, self.index_of(id)?).ok()
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIdx> {
        self.nodes.idx_of(id)
    }

    pub fn node(&self, idx: NodeIdx) -> Option<&Node> {
        self.nodes.get(idx)
    }

    pub fn edge(&self, idx: EdgeIdx) -> Option<&Edge> {
        self.edges.get(idx.as_usize())?.as_ref()
    }

    /// Iterates all edges that are part of the graph
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIdx, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(pos, edge)| Some((EdgeIdx::from(pos), edge.as_ref()?)))
    }

    pub fn relationship(&self, id: &str) -> Option<&Relationship> {
        self.relationships.get(id)
    }

    /// Returns the [`Relationship`] that describes the edge
    pub fn relationship_of(&self, edge: &Edge) -> Option<&Relationship> {
        self.relationships.get(edge.relationship_id())
    }

    /// Number of added edges per relationship id
    pub fn relationship_count(&self) -> &BTreeMap<String, usize> {
        &self.relationship_count
    }

    pub fn root_nodes(&self) -> &NodeGroup {
        &self.roots
    }

    /// Returns a mapping of all term ids to their names
    pub fn id_translation(&self) -> BTreeMap<String, String> {
        self.nodes
            .iter()
            .map(|(_, node)| (node.id().to_string(), node.name().to_string()))
            .collect()
    }

    /// Iterates all [`Term`]s of the graph
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl Topology for OboGraph {
    fn parents_of(&self, idx: NodeIdx) -> Option<&NodeGroup> {
        self.nodes.get(idx).map(Node::parents)
    }

    fn children_of(&self, idx: NodeIdx) -> Option<&NodeGroup> {
        self.nodes.get(idx).map(Node::children)
    }
}

impl Debug for OboGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OboGraph({} nodes, {} edges)",
            self.nodes.len(),
            self.edges().count()
        )
    }
}

/// An iterator of [`Term`]s
pub struct Iter<'a> {
    inner: arena::Iter<'a>,
    graph: &'a OboGraph,
}

impl<'a> std::iter::Iterator for Iter<'a> {
    type Item = Term<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        let (idx, _) = self.inner.next()?;
        Some(Term::try_new(self.graph, idx).expect("Iterator can only iterate existing nodes"))
    }
}

impl<'a> IntoIterator for &'a OboGraph {
    type Item = Term<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.nodes.iter(),
            graph: self,
        }
    }
}

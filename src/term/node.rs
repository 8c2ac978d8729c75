use crate::graph::EdgeIdx;
use crate::term::{Namespace, NodeGroup, TermId};
use crate::{DEFAULT_NUM_EDGES, DEFAULT_NUM_PARENTS};

/// A raw ontology term, as produced by a parser
///
/// A `Node` is handed to [`crate::OboGraph::add_node`], which takes ownership.
/// The graph fills in the edges, parents and children while linking; a
/// parser only sets the descriptive fields.
///
/// # Examples
///
/// ```
/// use obocats::term::Node;
/// use obocats::Namespace;
///
/// let mut node = Node::new("GO:0005794", "golgi apparatus");
/// *node.definition_mut() = "a membrane-bound cytoplasmic organelle".to_string();
/// *node.namespace_mut() = Some(Namespace::CellularComponent);
///
/// assert_eq!(node.id(), "GO:0005794");
/// assert!(!node.obsolete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Node {
    id: TermId,
    name: String,
    definition: String,
    namespace: Option<Namespace>,
    obsolete: bool,
    edges: Vec<EdgeIdx>,
    parents: NodeGroup,
    children: NodeGroup,
}

impl Node {
    /// Constructs a new [`Node`] without definition or namespace
    pub fn new<I: Into<TermId>>(id: I, name: &str) -> Node {
        Node {
            id: id.into(),
            name: name.to_string(),
            definition: String::new(),
            namespace: None,
            obsolete: false,
            edges: Vec::with_capacity(DEFAULT_NUM_EDGES),
            parents: NodeGroup::with_capacity(DEFAULT_NUM_PARENTS),
            children: NodeGroup::with_capacity(DEFAULT_NUM_PARENTS),
        }
    }

    /// The term identifier, e.g. `GO:0005794`
    pub fn id(&self) -> &TermId {
        &self.id
    }

    pub fn id_mut(&mut self) -> &mut TermId {
        &mut self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn definition_mut(&mut self) -> &mut String {
        &mut self.definition
    }

    pub fn namespace(&self) -> Option<Namespace> {
        self.namespace
    }

    pub fn namespace_mut(&mut self) -> &mut Option<Namespace> {
        &mut self.namespace
    }

    pub fn obsolete(&self) -> bool {
        self.obsolete
    }

    pub fn obsolete_mut(&mut self) -> &mut bool {
        &mut self.obsolete
    }

    /// All linked edges, independent of their relationship category
    pub fn edges(&self) -> &[EdgeIdx] {
        &self.edges
    }

    /// Direct parents via scoping relationships
    pub fn parents(&self) -> &NodeGroup {
        &self.parents
    }

    /// Direct children via scoping relationships
    pub fn children(&self) -> &NodeGroup {
        &self.children
    }

    /// Returns the text that is indexed for keyword searches
    pub(crate) fn vocabulary(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.definition.as_str()].into_iter()
    }

    pub(crate) fn add_edge(&mut self, edge: EdgeIdx) {
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
    }

    pub(crate) fn remove_edge(&mut self, edge: EdgeIdx) {
        self.edges.retain(|e| *e != edge);
    }

    pub(crate) fn parents_mut(&mut self) -> &mut NodeGroup {
        &mut self.parents
    }

    pub(crate) fn children_mut(&mut self) -> &mut NodeGroup {
        &mut self.children
    }

    /// Drops all graph connections
    ///
    /// Nodes handed to a graph must not carry connections of another graph
    pub(crate) fn detach(&mut self) {
        self.edges.clear();
        self.parents = NodeGroup::default();
        self.children = NodeGroup::default();
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

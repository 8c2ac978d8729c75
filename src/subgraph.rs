//! Keyword-seeded subgraphs that collapse many terms into one category
//!
//! A [`SubGraph`] is seeded with all super graph nodes that match a list
//! of keywords. From the seeded nodes it selects one or more
//! representative nodes, wraps them in a [`CategoryNode`] and extends
//! the subgraph with nodes of the super graph (see [`Extension`]).
//! All nodes below the category node are mapped to the category.
use std::collections::{BTreeMap, HashSet};

use tracing::{debug, trace};

use crate::graph::{ClosureCache, Structure, StructureCache, Topology};
use crate::term::{NodeGroup, NodeIdx, Term};
use crate::{OboError, OboGraph, OboResult};

mod category;
mod config;

pub use category::CategoryNode;
pub use config::{Extension, SubGraphConfig};

/// Parents and children of a node, restricted to subgraph members
#[derive(Clone, Debug, Default)]
struct SubNode {
    parents: NodeGroup,
    children: NodeGroup,
}

/// Returns `true` if `keyword` occurs in `name` without being
/// attached to another word by a hyphen
///
/// `membrane` matches `golgi membrane`, but not `plasma-membrane`
fn name_matches(name: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    name.match_indices(keyword).any(|(start, _)| {
        !name[..start].ends_with('-') && !name[start + keyword.len()..].starts_with('-')
    })
}

/// A subgraph of an [`OboGraph`] that represents a single category
///
/// The subgraph borrows the super graph, which can not be modified
/// while the subgraph exists. Subgraph nodes are addressed by the
/// [`NodeIdx`] of the super graph, but their parents and children
/// only contain subgraph members.
///
/// # Examples
///
/// ```
/// use obocats::graph::Edge;
/// use obocats::term::Node;
/// use obocats::{OboGraph, SubGraph, SubGraphConfig};
///
/// let mut graph = OboGraph::default();
/// graph.add_node(Node::new("GO:1", "cellular component"));
/// graph.add_node(Node::new("GO:2", "golgi apparatus"));
/// graph.add_node(Node::new("GO:3", "golgi stack"));
/// graph.add_node(Node::new("GO:4", "cisterna"));
/// graph.add_edge(Edge::new("GO:2", "GO:1", "is_a"));
/// graph.add_edge(Edge::new("GO:3", "GO:2", "part_of"));
/// graph.add_edge(Edge::new("GO:4", "GO:3", "part_of"));
/// graph.link_edges();
///
/// let subgraph = SubGraph::from_filtered_graph(
///     &graph,
///     "golgi",
///     &["Golgi"],
///     &SubGraphConfig::new()
/// ).unwrap();
///
/// assert_eq!(subgraph.seeded_size(), 2);
/// assert_eq!(subgraph.category_node().unwrap().id(), "GO:2");
///
/// let mapping = subgraph.root_id_mapping().unwrap();
/// assert_eq!(mapping.len(), 3);
/// assert_eq!(mapping["GO:4"], "GO:2");
/// ```
pub struct SubGraph<'a> {
    supergraph: &'a OboGraph,
    config: SubGraphConfig,
    name: String,
    nodes: BTreeMap<NodeIdx, SubNode>,
    roots: NodeGroup,
    category: Option<CategoryNode>,
    seeded_size: usize,
    relationship_count: BTreeMap<String, usize>,
    version: u64,
    closure: ClosureCache,
    structure: StructureCache,
}

impl<'a> SubGraph<'a> {
    /// Constructs an empty subgraph of the `supergraph`
    ///
    /// # Errors
    ///
    /// The `config` must be compatible with the super graph,
    /// see [`SubGraphConfig::check_compatible`]
    pub fn new(supergraph: &'a OboGraph, name: &str, config: SubGraphConfig) -> OboResult<Self> {
        config.check_compatible(supergraph.config())?;
        Ok(Self {
            supergraph,
            config,
            name: name.to_string(),
            nodes: BTreeMap::new(),
            roots: NodeGroup::default(),
            category: None,
            seeded_size: 0,
            relationship_count: BTreeMap::new(),
            version: 0,
            closure: ClosureCache::default(),
            structure: StructureCache::default(),
        })
    }

    /// Extracts the subgraph of a category from the super graph
    ///
    /// 1. All nodes that contain one of the keywords are seeded
    /// 2. The representative nodes are selected from the seeded nodes
    /// 3. The subgraph is extended according to [`SubGraphConfig::extension`]
    ///
    /// Keywords are case-insensitive.
    ///
    /// # Errors
    ///
    /// - configuration errors, see [`SubGraph::new`]
    /// - [`OboError::NoSeedNodes`] if no node matches the keywords
    pub fn from_filtered_graph<S: AsRef<str>>(
        supergraph: &'a OboGraph,
        name: &str,
        keywords: &[S],
        config: &SubGraphConfig,
    ) -> OboResult<Self> {
        let mut subgraph = SubGraph::new(supergraph, name, config.clone())?;
        let keywords: Vec<String> = keywords
            .iter()
            .map(|keyword| keyword.as_ref().trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();

        let seeded = supergraph.filter_nodes(&keywords);
        subgraph.seeded_size = seeded.len();
        for idx in &seeded {
            subgraph.add_node(idx);
        }
        subgraph.connect_subnodes();

        let representatives = subgraph.find_representative_nodes(&keywords)?;
        subgraph.category = Some(CategoryNode::new(name, representatives.clone(), supergraph));
        subgraph.roots = representatives;
        subgraph.touch();

        match config.extension() {
            Extension::Greedy => subgraph.greedily_extend()?,
            Extension::Conservative => subgraph.conservatively_extend()?,
        }
        debug!(
            "Category {}: {} seeded, {} representatives, {} nodes",
            name,
            subgraph.seeded_size,
            subgraph.roots.len(),
            subgraph.len()
        );
        Ok(subgraph)
    }

    fn touch(&mut self) {
        self.version += 1;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &SubGraphConfig {
        &self.config
    }

    pub fn supergraph(&self) -> &'a OboGraph {
        self.supergraph
    }

    /// Number of nodes in the subgraph
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, idx: NodeIdx) -> bool {
        self.nodes.contains_key(&idx)
    }

    /// Iterates the super graph indices of all members
    pub fn members(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        self.nodes.keys().copied()
    }

    /// Returns the super graph [`Term`] if it is part of the subgraph
    ///
    /// Note that the term provides the relations of the super graph
    pub fn term(&self, id: &str) -> Option<Term<'a>> {
        let idx = self.supergraph.index_of(id)?;
        if !self.contains(idx) {
            return None;
        }
        Term::try_new(self.supergraph, idx).ok()
    }

    /// Number of nodes that matched the keywords
    pub fn seeded_size(&self) -> usize {
        self.seeded_size
    }

    /// Number of edges between members, per relationship id
    pub fn relationship_count(&self) -> &BTreeMap<String, usize> {
        &self.relationship_count
    }

    /// The representative nodes
    pub fn root_nodes(&self) -> &NodeGroup {
        &self.roots
    }

    pub fn category_node(&self) -> Option<&CategoryNode> {
        self.category.as_ref()
    }

    /// Adds a super graph node to the subgraph
    ///
    /// Returns `false` if the node is already a member, does not exist
    /// or does not pass the filters of the subgraph.
    /// The parents and children are updated in [`SubGraph::connect_subnodes`].
    pub fn add_node(&mut self, idx: NodeIdx) -> bool {
        if self.nodes.contains_key(&idx) {
            return false;
        }
        let Some(node) = self.supergraph.node(idx) else {
            return false;
        };
        if node.obsolete() || !self.config.accepts_namespace(node.namespace()) {
            trace!("{} is not a valid subgraph node", node.id());
            return false;
        }
        self.nodes.insert(idx, SubNode::default());
        self.touch();
        true
    }

    /// Derives parents and children of all members from the super graph
    ///
    /// Only edges between members with a relationship allowed in the
    /// subgraph are used. Also recounts the relationships.
    pub fn connect_subnodes(&mut self) {
        let mut projected: BTreeMap<NodeIdx, SubNode> = self
            .nodes
            .keys()
            .map(|idx| (*idx, SubNode::default()))
            .collect();
        let mut relationship_count: BTreeMap<String, usize> = BTreeMap::new();
        let mut seen = HashSet::new();

        for idx in self.nodes.keys() {
            let Some(node) = self.supergraph.node(*idx) else {
                continue;
            };
            for edge_idx in node.edges() {
                if !seen.insert(*edge_idx) {
                    continue;
                }
                let Some(edge) = self.supergraph.edge(*edge_idx) else {
                    continue;
                };
                let Some(pair) = edge.node_pair() else {
                    continue;
                };
                if !self.nodes.contains_key(&pair.0)
                    || !self.nodes.contains_key(&pair.1)
                    || !self.config.allows(edge.relationship_id())
                {
                    continue;
                }
                *relationship_count
                    .entry(edge.relationship_id().to_string())
                    .or_default() += 1;

                let Some(relationship) = self
                    .supergraph
                    .relationship_of(edge)
                    .filter(|rel| rel.is_scoping())
                else {
                    continue;
                };
                if let (Some(parent), Some(child)) =
                    (relationship.forward(pair), relationship.reverse(pair))
                {
                    if parent == child {
                        continue;
                    }
                    if let Some(node) = projected.get_mut(&parent) {
                        node.children.insert(child);
                    }
                    if let Some(node) = projected.get_mut(&child) {
                        node.parents.insert(parent);
                    }
                }
            }
        }

        self.nodes = projected;
        self.relationship_count = relationship_count;
        self.touch();
    }

    /// Selects the nodes that represent the category
    ///
    /// - A subgraph with a single node is represented by that node
    /// - Otherwise the candidates are all nodes that are not obsolete,
    ///   not a leaf of the subgraph and whose name contains one of the
    ///   keywords. The candidate with the most subgraph descendants
    ///   is selected, ties go to the smallest term id.
    /// - Without candidates, all nodes are representatives
    ///
    /// # Errors
    ///
    /// [`OboError::NoSeedNodes`] if the subgraph is empty
    pub fn find_representative_nodes<S: AsRef<str>>(&self, keywords: &[S]) -> OboResult<NodeGroup> {
        if self.nodes.is_empty() {
            return Err(OboError::NoSeedNodes {
                category: self.name.clone(),
                keywords: keywords.iter().map(|k| k.as_ref().to_string()).collect(),
            });
        }
        if self.nodes.len() == 1 {
            return Ok(self.members().collect());
        }

        let leaves = self.leaves();
        let best = self
            .members()
            .filter(|idx| !leaves.contains(idx))
            .filter_map(|idx| Some((idx, self.supergraph.node(idx)?)))
            .filter(|(_, node)| !node.obsolete())
            .filter(|(_, node)| {
                let name = node.name().to_lowercase();
                keywords
                    .iter()
                    .any(|keyword| name_matches(&name, &keyword.as_ref().to_lowercase()))
            })
            .map(|(idx, node)| (self.descendants(idx).len(), node.id(), idx))
            .max_by(|a, b| a.0.cmp(&b.0).then_with(|| b.1.cmp(a.1)));

        match best {
            Some((score, id, idx)) => {
                debug!("Category {}: representative {} with {} descendants", self.name, id, score);
                Ok([idx].into_iter().collect())
            }
            None => {
                debug!("Category {}: no candidate, using all {} nodes", self.name, self.len());
                Ok(self.members().collect())
            }
        }
    }

    fn category(&self) -> OboResult<&CategoryNode> {
        self.category.as_ref().ok_or(OboError::MissingCategory)
    }

    /// Adds all super graph descendants of the representative nodes
    ///
    /// # Errors
    ///
    /// [`OboError::MissingCategory`] if no category node was selected yet
    pub fn greedily_extend(&mut self) -> OboResult<()> {
        let extension = self
            .category()?
            .representatives()
            .iter()
            .fold(NodeGroup::new(), |acc, rep| &acc | &self.supergraph.descendants(rep));
        let added = extension.iter().filter(|idx| self.add_node(*idx)).count();
        trace!("Greedy extension of {} added {} nodes", self.name, added);
        self.connect_subnodes();
        Ok(())
    }

    /// Adds all super graph nodes that are on a path between a leaf of
    /// the subgraph and a representative node
    ///
    /// # Errors
    ///
    /// [`OboError::MissingCategory`] if no category node was selected yet
    pub fn conservatively_extend(&mut self) -> OboResult<()> {
        let representatives = self.category()?.representatives().clone();
        let mut extension = NodeGroup::new();
        for leaf in &self.leaves() {
            for rep in &representatives {
                extension = &extension | &self.supergraph.nodes_between(leaf, rep);
            }
        }
        let added = extension.iter().filter(|idx| self.add_node(*idx)).count();
        trace!("Conservative extension of {} added {} nodes", self.name, added);
        self.connect_subnodes();
        Ok(())
    }

    /// All members below the category node, including the representatives
    fn category_members(&self) -> OboResult<NodeGroup> {
        let category = self.category()?;
        Ok(category
            .representatives()
            .iter()
            .fold(category.representatives().clone(), |acc, rep| {
                &acc | &self.descendants(rep)
            }))
    }

    /// Maps the term id of every member below the category node to the category id
    ///
    /// The category id is mapped to itself.
    ///
    /// # Errors
    ///
    /// [`OboError::MissingCategory`] if no category node was selected yet
    pub fn root_id_mapping(&self) -> OboResult<BTreeMap<String, String>> {
        let category = self.category()?;
        let mut mapping: BTreeMap<String, String> = self
            .category_members()?
            .iter()
            .filter_map(|idx| self.supergraph.node(idx))
            .map(|node| (node.id().to_string(), category.id().to_string()))
            .collect();
        mapping.insert(category.id().to_string(), category.id().to_string());
        Ok(mapping)
    }

    /// Maps the category id to the (sorted) term ids of all members below it
    ///
    /// # Errors
    ///
    /// [`OboError::MissingCategory`] if no category node was selected yet
    pub fn content_mapping(&self) -> OboResult<BTreeMap<String, Vec<String>>> {
        let category = self.category()?;
        let mut content: Vec<String> = self
            .category_members()?
            .iter()
            .filter_map(|idx| self.supergraph.node(idx))
            .map(|node| node.id().to_string())
            .collect();
        content.sort();
        Ok(BTreeMap::from([(category.id().to_string(), content)]))
    }

    /// All direct and indirect children within the subgraph
    pub fn descendants(&self, idx: NodeIdx) -> NodeGroup {
        self.closure.descendants(self, self.version, idx)
    }

    /// All direct and indirect parents within the subgraph
    pub fn ancestors(&self, idx: NodeIdx) -> NodeGroup {
        self.closure.ancestors(self, self.version, idx)
    }

    pub fn parents(&self, idx: NodeIdx) -> Option<&NodeGroup> {
        self.parents_of(idx)
    }

    pub fn children(&self, idx: NodeIdx) -> Option<&NodeGroup> {
        self.children_of(idx)
    }

    fn structure(&self) -> Structure {
        self.structure.get_or_compute(self.version, || {
            let mut structure = Structure::default();
            for (idx, subnode) in &self.nodes {
                if self.supergraph.node(*idx).map_or(true, |node| node.obsolete()) {
                    continue;
                }
                if subnode.parents.is_empty() && !self.roots.contains(idx) {
                    structure.orphans.insert(*idx);
                }
                if subnode.children.is_empty() {
                    structure.leaves.insert(*idx);
                }
            }
            structure
        })
    }

    /// Members without parents in the subgraph, except the representatives
    pub fn orphans(&self) -> NodeGroup {
        self.structure().orphans
    }

    /// Members without children in the subgraph
    pub fn leaves(&self) -> NodeGroup {
        self.structure().leaves
    }
}

impl Topology for SubGraph<'_> {
    fn parents_of(&self, idx: NodeIdx) -> Option<&NodeGroup> {
        self.nodes.get(&idx).map(|node| &node.parents)
    }

    fn children_of(&self, idx: NodeIdx) -> Option<&NodeGroup> {
        self.nodes.get(&idx).map(|node| &node.children)
    }
}

impl std::fmt::Debug for SubGraph<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SubGraph({} | {} nodes)", self.name, self.nodes.len())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::Edge;
    use crate::term::Node;
    use crate::{GraphConfig, Namespace};

    /// ```text
    /// GO:1 cellular component
    ///  ├── GO:2 golgi apparatus
    ///  │    └── GO:3 golgi stack
    ///  │         └── GO:4 cisterna
    ///  │              ├── GO:5 cis cisterna membrane
    ///  │              └── GO:7 golgi cisterna membrane
    ///  └── GO:6 golgi to vacuole vesicle
    /// ```
    fn golgi() -> OboGraph {
        let mut graph = OboGraph::default();
        for (id, name) in [
            ("GO:1", "cellular component"),
            ("GO:2", "golgi apparatus"),
            ("GO:3", "golgi stack"),
            ("GO:4", "cisterna"),
            ("GO:5", "cis cisterna membrane"),
            ("GO:6", "golgi to vacuole vesicle"),
            ("GO:7", "golgi cisterna membrane"),
        ] {
            graph.add_node(Node::new(id, name));
        }
        for (child, parent, rel) in [
            ("GO:2", "GO:1", "is_a"),
            ("GO:3", "GO:2", "part_of"),
            ("GO:4", "GO:3", "part_of"),
            ("GO:5", "GO:4", "part_of"),
            ("GO:7", "GO:4", "part_of"),
            ("GO:6", "GO:1", "is_a"),
            ("GO:6", "GO:2", "regulates"),
        ] {
            graph.add_edge(Edge::new(child, parent, rel));
        }
        let root = graph.index_of("GO:1").unwrap();
        graph.add_root(root);
        graph.link_edges();
        graph
    }

    fn ids(subgraph: &SubGraph, group: &NodeGroup) -> Vec<String> {
        group
            .iter()
            .map(|idx| subgraph.supergraph().node(idx).unwrap().id().to_string())
            .collect()
    }

    fn members(subgraph: &SubGraph) -> Vec<String> {
        ids(subgraph, &subgraph.members().collect())
    }

    #[test]
    fn hyphen_guard() {
        assert!(name_matches("golgi membrane", "membrane"));
        assert!(name_matches("membranes", "membrane"));
        assert!(!name_matches("plasma-membrane", "membrane"));
        assert!(!name_matches("membrane-bounded organelle", "membrane"));
        assert!(name_matches("plasma-membrane", "plasma-membrane"));
        assert!(name_matches("membrane-bounded membrane", "membrane"));
        assert!(!name_matches("membrane", ""));
    }

    #[test]
    fn greedy_extension() {
        let graph = golgi();
        let subgraph =
            SubGraph::from_filtered_graph(&graph, "golgi", &["GOLGI"], &SubGraphConfig::new())
                .unwrap();

        assert_eq!(subgraph.seeded_size(), 4);
        assert_eq!(ids(&subgraph, subgraph.root_nodes()), vec!["GO:2"]);
        assert_eq!(members(&subgraph), vec!["GO:2", "GO:3", "GO:4", "GO:5", "GO:6", "GO:7"]);

        let category = subgraph.category_node().unwrap();
        assert_eq!(category.id(), "GO:2");
        assert_eq!(category.name(), "golgi");

        let mapping = subgraph.root_id_mapping().unwrap();
        assert_eq!(
            mapping.keys().collect::<Vec<_>>(),
            vec!["GO:2", "GO:3", "GO:4", "GO:5", "GO:7"]
        );
        assert!(mapping.values().all(|cat| cat == "GO:2"));

        let content = subgraph.content_mapping().unwrap();
        assert_eq!(content["GO:2"], vec!["GO:2", "GO:3", "GO:4", "GO:5", "GO:7"]);

        // GO:6 matched the keyword but is not below the representative
        assert_eq!(ids(&subgraph, &subgraph.orphans()), vec!["GO:6"]);
        assert!(subgraph.term("GO:6").is_some());
        assert!(subgraph.term("GO:1").is_none());
    }

    #[test]
    fn conservative_extension() {
        let graph = golgi();
        let config = SubGraphConfig::new().with_extension(Extension::Conservative);
        let subgraph = SubGraph::from_filtered_graph(&graph, "golgi", &["golgi"], &config).unwrap();

        // GO:4 connects GO:7 to GO:2, GO:5 is not on such a path
        assert_eq!(members(&subgraph), vec!["GO:2", "GO:3", "GO:4", "GO:6", "GO:7"]);
        assert_eq!(
            subgraph.content_mapping().unwrap()["GO:2"],
            vec!["GO:2", "GO:3", "GO:4", "GO:7"]
        );
    }

    #[test]
    fn subgraph_structure() {
        let graph = golgi();
        let subgraph =
            SubGraph::from_filtered_graph(&graph, "golgi", &["golgi"], &SubGraphConfig::new())
                .unwrap();
        let idx = |id: &str| graph.index_of(id).unwrap();

        assert_eq!(ids(&subgraph, &subgraph.leaves()), vec!["GO:5", "GO:6", "GO:7"]);
        assert_eq!(ids(&subgraph, &subgraph.descendants(idx("GO:3"))), vec!["GO:4", "GO:5", "GO:7"]);
        assert_eq!(ids(&subgraph, &subgraph.ancestors(idx("GO:7"))), vec!["GO:2", "GO:3", "GO:4"]);
        assert!(subgraph.parents(idx("GO:2")).unwrap().is_empty());
        assert!(subgraph.children(idx("GO:1")).is_none());

        // the regulates edge of GO:6 is counted, but does not connect
        assert_eq!(subgraph.relationship_count()["part_of"], 4);
        assert_eq!(subgraph.relationship_count()["regulates"], 1);
        assert!(!subgraph.relationship_count().contains_key("is_a"));
    }

    #[test]
    fn single_seed_is_representative() {
        let graph = golgi();
        let subgraph =
            SubGraph::from_filtered_graph(&graph, "vacuole", &["vacuole"], &SubGraphConfig::new())
                .unwrap();
        assert_eq!(subgraph.category_node().unwrap().id(), "GO:6");
        assert_eq!(subgraph.len(), 1);
    }

    #[test]
    fn multiple_representatives() {
        let graph = golgi();
        let subgraph = SubGraph::from_filtered_graph(
            &graph,
            "membranes",
            &["membrane"],
            &SubGraphConfig::new(),
        )
        .unwrap();

        // both seeded nodes are leaves and can not be candidates
        assert_eq!(ids(&subgraph, subgraph.root_nodes()), vec!["GO:5", "GO:7"]);
        let category = subgraph.category_node().unwrap();
        assert_eq!(category.id(), "membranes");

        let mapping = subgraph.root_id_mapping().unwrap();
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping["membranes"], "membranes");
        assert_eq!(mapping["GO:5"], "membranes");
    }

    #[test]
    fn ties_go_to_smallest_id() {
        let mut graph = OboGraph::default();
        for (id, name) in [
            ("GO:9", "vesicle b"),
            ("GO:8", "vesicle a"),
            ("GO:10", "x"),
            ("GO:11", "y"),
        ] {
            graph.add_node(Node::new(id, name));
        }
        graph.add_edge(Edge::new("GO:10", "GO:9", "is_a"));
        graph.add_edge(Edge::new("GO:11", "GO:8", "is_a"));
        graph.link_edges();

        let mut subgraph = SubGraph::new(&graph, "vesicle", SubGraphConfig::new()).unwrap();
        for id in ["GO:8", "GO:9", "GO:10", "GO:11"] {
            subgraph.add_node(graph.index_of(id).unwrap());
        }
        subgraph.connect_subnodes();
        let reps = subgraph.find_representative_nodes(&["vesicle"]).unwrap();
        assert_eq!(ids(&subgraph, &reps), vec!["GO:8"]);
    }

    #[test]
    fn no_seed_nodes() {
        let graph = golgi();
        let err = SubGraph::from_filtered_graph(
            &graph,
            "nucleus",
            &["Nucleus"],
            &SubGraphConfig::new(),
        )
        .unwrap_err();
        assert!(err.is_structural());
        match err {
            OboError::NoSeedNodes { category, keywords } => {
                assert_eq!(category, "nucleus");
                assert_eq!(keywords, vec!["nucleus"]);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn mapping_requires_category() {
        let graph = golgi();
        let subgraph = SubGraph::new(&graph, "empty", SubGraphConfig::new()).unwrap();
        assert!(matches!(subgraph.root_id_mapping(), Err(OboError::MissingCategory)));
        assert!(subgraph.content_mapping().is_err());
        let mut subgraph = subgraph;
        assert!(subgraph.greedily_extend().is_err());
    }

    #[test]
    fn subgraph_filters() {
        let mut graph = OboGraph::with_config(
            GraphConfig::new().with_namespace(Namespace::CellularComponent),
        );
        let mut node = Node::new("GO:1", "golgi apparatus");
        *node.namespace_mut() = Some(Namespace::CellularComponent);
        graph.add_node(node);
        let mut obsolete = Node::new("GO:2", "golgi obsolete");
        *obsolete.namespace_mut() = Some(Namespace::CellularComponent);
        *obsolete.obsolete_mut() = true;
        graph.add_node(obsolete);

        assert!(SubGraph::new(&graph, "golgi", SubGraphConfig::new()).is_err());

        let config = SubGraphConfig::new().with_namespace(Namespace::CellularComponent);
        let subgraph = SubGraph::from_filtered_graph(&graph, "golgi", &["golgi"], &config).unwrap();
        assert_eq!(subgraph.seeded_size(), 2);
        assert_eq!(subgraph.len(), 1);
    }
}

//! The parser reads the file in stanzas
//! 1. `[Term]` stanzas become nodes, their `is_a` and `relationship`
//!    lines become edges
//! 2. `[Typedef]` stanzas define relationships
//! 3. All edges are linked once the whole file is read
use std::fs;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::graph::Edge;
use crate::relationship::{DirectionMode, Relationship};
use crate::term::{Node, TermId};
use crate::{Namespace, OboError, OboGraph, OboResult, IS_A};

/// A parsed `[Term]` stanza
struct TermStanza {
    node: Node,
    /// relationship id and target term of every edge
    targets: Vec<(String, TermId)>,
}

/// Reads a GO OBO file and adds all valid terms and allowed edges to the graph
///
/// Names and definitions are lowercased. Terms that are not obsolete and
/// do not reference any other term are added as roots.
///
/// # Errors
///
/// - [`OboError::CannotOpenFile`]: the file cannot be read
/// - [`OboError::InvalidNamespace`]: a term uses an unknown namespace
pub fn read_obo_file<P: AsRef<Path>>(path: P, graph: &mut OboGraph) -> OboResult<()> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|_| OboError::CannotOpenFile(path.display().to_string()))?;
    read_obo(&content, graph)
}

/// Parses the content of a GO OBO file into the graph
///
/// See [`read_obo_file`]
///
/// # Errors
///
/// [`OboError::InvalidNamespace`]: a term uses an unknown namespace
///
/// # Examples
///
/// ```
/// use obocats::parser::go_obo::read_obo;
/// use obocats::OboGraph;
///
/// let obo = "format-version: 1.2
///
/// [Term]
/// id: GO:0005575
/// name: cellular_component
/// namespace: cellular_component
///
/// [Term]
/// id: GO:0005794
/// name: Golgi apparatus
/// namespace: cellular_component
/// def: \"A membrane-bound cytoplasmic organelle.\" [ISBN:0198506732]
/// is_a: GO:0005575 ! cellular_component
/// ";
///
/// let mut graph = OboGraph::default();
/// read_obo(obo, &mut graph).unwrap();
///
/// let golgi = graph.term("GO:0005794").unwrap();
/// assert_eq!(golgi.name(), "golgi apparatus");
/// assert_eq!(golgi.definition(), "a membrane-bound cytoplasmic organelle.");
/// assert_eq!(golgi.parents().next().unwrap().id(), "GO:0005575");
/// assert_eq!(graph.root_nodes().len(), 1);
/// ```
pub fn read_obo(content: &str, graph: &mut OboGraph) -> OboResult<()> {
    let direction = graph.config().direction();
    let mut added = 0;
    let mut skipped = 0;
    let mut stanzas = 0;

    let content = content.replace("\r\n", "\n");
    for stanza in content.split("\n\n").map(str::trim) {
        if let Some(body) = stanza.strip_prefix("[Term]") {
            stanzas += 1;
            let Some(term) = term_from_obo(body)? else {
                warn!("Unable to parse: {}", body);
                continue;
            };
            if !graph.valid_node(&term.node) {
                skipped += 1;
                continue;
            }
            let is_root = term.targets.is_empty() && !term.node.obsolete();
            let id = term.node.id().clone();
            let idx = graph.add_node(term.node);
            for (relationship_id, target) in term.targets {
                if graph.relationship_allowed(&relationship_id) {
                    graph.add_edge(Edge::new(&id, target, &relationship_id));
                }
            }
            if is_root {
                graph.add_root(idx);
            }
            added += 1;
        } else if let Some(body) = stanza.strip_prefix("[Typedef]") {
            match relationship_from_obo(body, direction) {
                Some(relationship) => graph.add_relationship(relationship),
                None => warn!("Unable to parse: {}", body),
            }
        } else {
            trace!("Ignoring: {}", stanza);
        }
    }

    if stanzas == 0 {
        warn!("No [Term] stanza found");
    }
    debug!("Added {} terms, skipped {} terms", added, skipped);
    graph.link_edges();
    Ok(())
}

/// Splits `key: value` lines
fn parse_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(':')
        .map(|(key, value)| (key.trim(), value.trim()))
}

/// Returns the first word of a value, ignoring trailing comments
///
/// `GO:0005575 ! cellular_component` => `GO:0005575`
fn first_word(value: &str) -> Option<&str> {
    value.split_whitespace().next()
}

/// Returns the unescaped, quoted part of a definition
///
/// `"A \"golgi\" membrane." [GOC:mah]` => `A "golgi" membrane.`
fn quoted(value: &str) -> String {
    let Some(start) = value.find('"') else {
        return value.to_string();
    };
    let mut text = String::with_capacity(value.len());
    let mut chars = value[start + 1..].chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    text.push(escaped);
                }
            }
            '"' => break,
            _ => text.push(c),
        }
    }
    text
}

fn term_from_obo(body: &str) -> OboResult<Option<TermStanza>> {
    let mut node = Node::default();
    let mut targets = Vec::new();

    for line in body.lines() {
        let Some((key, value)) = parse_line(line) else {
            continue;
        };
        match key {
            "id" => *node.id_mut() = TermId::from(value),
            "name" => *node.name_mut() = value.to_lowercase(),
            "namespace" => *node.namespace_mut() = Some(Namespace::try_from(value)?),
            "def" => *node.definition_mut() = quoted(value).to_lowercase(),
            "is_obsolete" => *node.obsolete_mut() = value == "true",
            "is_a" => {
                if let Some(target) = first_word(value) {
                    targets.push((IS_A.to_string(), TermId::from(target)));
                }
            }
            "relationship" => {
                let mut words = value.split_whitespace();
                if let (Some(relationship), Some(target)) = (words.next(), words.next()) {
                    targets.push((relationship.to_string(), TermId::from(target)));
                }
            }
            _ => (),
        }
    }

    if node.id().is_empty() {
        return Ok(None);
    }
    Ok(Some(TermStanza { node, targets }))
}

fn relationship_from_obo(body: &str, direction: DirectionMode) -> Option<Relationship> {
    let mut id: Option<&str> = None;
    let mut name: Option<&str> = None;
    let mut inverse: Option<&str> = None;

    for line in body.lines() {
        match parse_line(line) {
            Some(("id", value)) => id = first_word(value),
            Some(("name", value)) => name = Some(value),
            Some(("inverse_of", value)) => inverse = first_word(value),
            _ => (),
        }
    }

    let id = id?;
    if !Relationship::is_known(id) {
        debug!("Relationship {} is not a known relationship", id);
    }
    let mut relationship = Relationship::resolve(id, direction);
    if let Some(name) = name {
        *relationship.name_mut() = name.to_string();
    }
    *relationship.inverse_mut() = inverse.map(str::to_string);
    Some(relationship)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{GraphConfig, RelationshipCategory};

    #[test]
    fn split_terms() {
        let mut graph = OboGraph::default();
        read_obo_file("tests/small.obo", &mut graph).unwrap();

        // the obsolete term is skipped
        assert_eq!(graph.len(), 15);
        assert!(graph.term("GO:0000001").is_none());

        let golgi = graph.term("GO:0005794").unwrap();
        assert_eq!(golgi.name(), "golgi apparatus");
        assert_eq!(golgi.namespace(), Some(Namespace::CellularComponent));
        assert!(golgi.definition().starts_with("a membrane-bound cytoplasmic organelle"));
        assert_eq!(golgi.parents().count(), 1);
        assert_eq!(golgi.children().count(), 2);

        assert_eq!(graph.root_nodes().len(), 2);
    }

    #[test]
    fn typedefs() {
        let mut graph = OboGraph::default();
        read_obo_file("tests/small.obo", &mut graph).unwrap();

        let has_part = graph.relationship("has_part").unwrap();
        assert_eq!(has_part.name(), "has part");
        assert_eq!(has_part.inverse(), Some("part_of"));
        assert_eq!(has_part.category(), RelationshipCategory::Scoping);

        let regulates = graph.relationship("regulates").unwrap();
        assert_eq!(regulates.category(), RelationshipCategory::Active);
        assert!(graph.relationship_count()["regulates"] >= 1);
    }

    #[test]
    fn filters_namespace_and_relationships() {
        let config = GraphConfig::new()
            .with_namespace(Namespace::CellularComponent)
            .with_allowed_relationships([IS_A])
            .unwrap();
        let mut graph = OboGraph::with_config(config);
        read_obo_file("tests/small.obo", &mut graph).unwrap();

        assert!(graph.term("GO:0008150").is_none());
        assert!(!graph.relationship_count().contains_key("part_of"));
        assert!(graph.term("GO:0005794").unwrap().children().next().is_none());
    }

    #[test]
    fn missing_file() {
        let mut graph = OboGraph::default();
        let err = read_obo_file("tests/missing.obo", &mut graph).unwrap_err();
        assert!(matches!(err, OboError::CannotOpenFile(_)));
    }

    #[test]
    fn invalid_namespace() {
        let mut graph = OboGraph::default();
        let obo = "[Term]\nid: GO:1\nname: foo\nnamespace: external\n";
        assert!(matches!(
            read_obo(obo, &mut graph),
            Err(OboError::InvalidNamespace(_))
        ));
    }

    #[test]
    fn parse_helpers() {
        assert_eq!(parse_line("id: GO:0005575"), Some(("id", "GO:0005575")));
        assert_eq!(parse_line("no separator"), None);
        assert_eq!(first_word("GO:0005575 ! cellular_component"), Some("GO:0005575"));
        assert_eq!(quoted("\"A membrane.\" [GOC:mah]"), "A membrane.");
        assert_eq!(quoted("no quotes"), "no quotes");
        assert_eq!(quoted(r#""A \"golgi\" vesicle." [GOC:x]"#), "A \"golgi\" vesicle.");
    }

    #[test]
    fn escaped_quotes_in_definition() {
        let mut graph = OboGraph::default();
        let obo = "[Term]\nid: GO:1\nname: vesicle\ndef: \"A \\\"golgi\\\" derived vesicle.\" [GOC:x]\n";
        read_obo(obo, &mut graph).unwrap();

        let term = graph.term("GO:1").unwrap();
        assert_eq!(term.definition(), "a \"golgi\" derived vesicle.");
        assert_eq!(graph.filter_nodes(&["derived"]).len(), 1);
        assert_eq!(graph.filter_nodes(&["golgi"]).len(), 1);
    }

    #[test]
    fn crlf_line_endings() {
        let obo = "format-version: 1.2\r\n\r\n[Term]\r\nid: GO:1\r\nname: cellular_component\r\n\r\n[Term]\r\nid: GO:2\r\nname: golgi apparatus\r\nis_a: GO:1 ! cellular_component\r\n";
        let mut graph = OboGraph::default();
        read_obo(obo, &mut graph).unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.term("GO:2").unwrap().name(), "golgi apparatus");
        assert_eq!(graph.term("GO:2").unwrap().parents().count(), 1);
        assert_eq!(graph.root_nodes().len(), 1);
    }

    #[test]
    fn stanza_without_id() {
        let mut graph = OboGraph::default();
        read_obo("[Term]\nname: nameless\n", &mut graph).unwrap();
        assert!(graph.is_empty());
    }
}

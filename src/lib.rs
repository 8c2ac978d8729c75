#![doc = include_str!("../README.md")]

use thiserror::Error;

pub mod collection;
pub mod graph;
pub mod parser;
pub mod relationship;
pub mod subgraph;
pub mod term;

pub use collection::{CategoryMapping, SubGraphCollection};
pub use graph::{GraphConfig, OboGraph};
pub use relationship::{DirectionMode, Relationship, RelationshipCategory, RelationshipKind};
pub use subgraph::{CategoryNode, Extension, SubGraph, SubGraphConfig};
pub use term::{Namespace, NodeGroup, NodeIdx, Term, TermId};

/// The relationship that every OBO ontology uses for its backbone
///
/// It is always part of a relationship allow-list, even if the
/// user did not specify it.
pub const IS_A: &str = "is_a";

const DEFAULT_NUM_PARENTS: usize = 4;
const DEFAULT_NUM_EDGES: usize = 8;
const DEFAULT_NUM_TERMS: usize = 50_000;

/// Main Error type for this crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OboError {
    /// The namespace is not one of the sub-ontologies of the Gene Ontology
    #[error("{0} is not a valid namespace")]
    InvalidNamespace(String),
    /// The relationship is not part of the known set of relationships
    #[error("{0} is not a known relationship")]
    UnknownRelationship(String),
    /// A subgraph requested a namespace that differs from its supergraph's filter
    #[error("subgraph namespace {subgraph} must match supergraph namespace {supergraph}")]
    NamespaceConflict {
        /// namespace requested for the subgraph
        subgraph: String,
        /// namespace filter of the supergraph
        supergraph: String,
    },
    /// A subgraph requested a relationship that the supergraph does not allow
    #[error("relationship {0} is not allowed in the supergraph")]
    RelationshipConflict(String),
    /// A category could not be seeded because none of its keywords matched
    #[error("category {category} did not seed any nodes from keywords {keywords:?}")]
    NoSeedNodes {
        /// Name of the category
        category: String,
        /// The (lowercased) keywords that were searched
        keywords: Vec<String>,
    },
    /// The subgraph does not have a category node yet
    #[error("category node not identified")]
    MissingCategory,
    /// The term or node does not exist in the graph
    #[error("term does not exist")]
    DoesNotExist,
    /// Failed to open a file
    #[error("unable to open file {0}")]
    CannotOpenFile(String),
    /// Input data is malformed
    #[error("invalid input data: {0}")]
    InvalidInput(String),
}

impl OboError {
    /// Returns `true` if the error is caused by an invalid configuration
    /// of a graph or subgraph
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            OboError::InvalidNamespace(_)
                | OboError::UnknownRelationship(_)
                | OboError::NamespaceConflict { .. }
                | OboError::RelationshipConflict(_)
        )
    }

    /// Returns `true` if the error is caused by the structure of the data,
    /// e.g. a category that did not match any term
    pub fn is_structural(&self) -> bool {
        matches!(self, OboError::NoSeedNodes { .. } | OboError::MissingCategory)
    }
}

/// Shortcut for `Result<T, OboError>`
pub type OboResult<T> = Result<T, OboError>;

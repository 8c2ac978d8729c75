//! Combines the subgraphs of many categories into a single mapping
//!
//! Categories often overlap: a `plasma membrane` category is part of a
//! `membrane` category. Unless superset mapping is requested, a term that
//! belongs to both categories is only mapped to the more specific one.
use std::collections::{BTreeMap, BTreeSet};

use tracing::{info, warn};

use crate::{OboError, OboGraph, OboResult, SubGraph, SubGraphConfig};

/// The name of a category and the keywords that seed its subgraph
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryKeywords {
    name: String,
    keywords: Vec<String>,
}

impl CategoryKeywords {
    pub fn new<S: AsRef<str>>(name: &str, keywords: &[S]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.as_ref().to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Term to category mappings of a [`SubGraphCollection`]
///
/// The mappings are plain data and do not reference the graph
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryMapping {
    id_mapping: BTreeMap<String, BTreeSet<String>>,
    content_mapping: BTreeMap<String, Vec<String>>,
}

impl CategoryMapping {
    /// Maps every term id to the ids of its categories
    pub fn id_mapping(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.id_mapping
    }

    /// Maps every category id to the ids of its terms
    pub fn content_mapping(&self) -> &BTreeMap<String, Vec<String>> {
        &self.content_mapping
    }

    /// Returns the category ids of a term
    pub fn categories(&self, term_id: &str) -> Option<&BTreeSet<String>> {
        self.id_mapping.get(term_id)
    }
}

/// All category subgraphs of one super graph, keyed by category name
///
/// # Examples
///
/// ```
/// use obocats::collection::CategoryKeywords;
/// use obocats::{GraphConfig, OboGraph, SubGraphCollection, SubGraphConfig};
///
/// let graph = OboGraph::from_obo_file("tests/small.obo", GraphConfig::default()).unwrap();
/// let categories = [
///     CategoryKeywords::new("golgi", &["golgi"]),
///     CategoryKeywords::new("unicorn", &["unicorn"]),
/// ];
///
/// let collection = SubGraphCollection::build(&graph, &categories, &SubGraphConfig::new()).unwrap();
/// assert_eq!(collection.len(), 1);
/// assert_eq!(collection.failures().len(), 1);
///
/// let mapping = collection.mapping(false).unwrap();
/// assert!(mapping.categories("GO:0005794").unwrap().contains("GO:0005794"));
/// ```
#[derive(Debug)]
pub struct SubGraphCollection<'a> {
    supergraph: &'a OboGraph,
    subgraphs: BTreeMap<String, SubGraph<'a>>,
    failures: Vec<(String, OboError)>,
}

impl<'a> SubGraphCollection<'a> {
    pub fn new(supergraph: &'a OboGraph) -> Self {
        Self {
            supergraph,
            subgraphs: BTreeMap::new(),
            failures: Vec::new(),
        }
    }

    /// Extracts the subgraph of every category
    ///
    /// Categories that fail to build are logged and recorded in
    /// [`SubGraphCollection::failures`]; all other categories are built.
    ///
    /// # Errors
    ///
    /// Returns configuration errors immediately, since they apply to all
    /// categories. See [`SubGraphConfig::check_compatible`].
    pub fn build<'c, I>(supergraph: &'a OboGraph, categories: I, config: &SubGraphConfig) -> OboResult<Self>
    where
        I: IntoIterator<Item = &'c CategoryKeywords>,
    {
        config.check_compatible(supergraph.config())?;
        let mut collection = Self::new(supergraph);
        for category in categories {
            match SubGraph::from_filtered_graph(supergraph, category.name(), category.keywords(), config) {
                Ok(subgraph) => {
                    collection.insert(subgraph);
                }
                Err(err) => {
                    warn!("Skipping category {}: {}", category.name(), err);
                    collection.failures.push((category.name().to_string(), err));
                }
            }
        }
        info!(
            "Built {} category subgraphs, {} failed",
            collection.len(),
            collection.failures.len()
        );
        Ok(collection)
    }

    /// Adds a subgraph, replacing a subgraph of the same name
    pub fn insert(&mut self, subgraph: SubGraph<'a>) -> Option<SubGraph<'a>> {
        self.subgraphs.insert(subgraph.name().to_string(), subgraph)
    }

    pub fn get(&self, name: &str) -> Option<&SubGraph<'a>> {
        self.subgraphs.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubGraph<'a>> {
        self.subgraphs.values()
    }

    pub fn len(&self) -> usize {
        self.subgraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subgraphs.is_empty()
    }

    pub fn supergraph(&self) -> &'a OboGraph {
        self.supergraph
    }

    /// Categories that could not be built, with the reason
    pub fn failures(&self) -> &[(String, OboError)] {
        &self.failures
    }

    /// Maps each category id to the ids of the categories that contain it
    ///
    /// Category `A` is a subset of category `B` if the id of `A` is
    /// mapped to `B`.
    ///
    /// # Errors
    ///
    /// [`OboError::MissingCategory`] if a subgraph has no category node
    pub fn category_subsets(&self) -> OboResult<BTreeMap<String, BTreeSet<String>>> {
        let mut categories = Vec::with_capacity(self.subgraphs.len());
        for subgraph in self.subgraphs.values() {
            let id = subgraph
                .category_node()
                .ok_or(OboError::MissingCategory)?
                .id()
                .to_string();
            categories.push((id, subgraph.root_id_mapping()?));
        }

        let mut subsets: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (subset, _) in &categories {
            for (superset, mapping) in &categories {
                if subset != superset && mapping.contains_key(subset) {
                    subsets
                        .entry(subset.clone())
                        .or_default()
                        .insert(superset.clone());
                }
            }
        }
        Ok(subsets)
    }

    /// Combines the mappings of all subgraphs
    ///
    /// Unless `map_supersets` is `true`, a term that is mapped to a
    /// category is no longer mapped to the supersets of that category.
    ///
    /// # Errors
    ///
    /// [`OboError::MissingCategory`] if a subgraph has no category node
    pub fn mapping(&self, map_supersets: bool) -> OboResult<CategoryMapping> {
        let mut mapping = CategoryMapping::default();
        for subgraph in self.subgraphs.values() {
            for (term, category) in subgraph.root_id_mapping()? {
                mapping.id_mapping.entry(term).or_default().insert(category);
            }
            mapping.content_mapping.extend(subgraph.content_mapping()?);
        }

        if !map_supersets {
            let subsets = self.category_subsets()?;
            for categories in mapping.id_mapping.values_mut() {
                for (subset, supersets) in &subsets {
                    if categories.contains(subset) {
                        categories.retain(|category| !supersets.contains(category));
                    }
                }
            }
        }
        Ok(mapping)
    }
}

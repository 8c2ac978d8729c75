use std::collections::HashMap;

use crate::term::{Node, NodeIdx, TermId};
use crate::DEFAULT_NUM_TERMS;

/// Owns all [`Node`]s of a graph and indexes them by [`TermId`]
///
/// Removed nodes leave an empty slot behind so that the [`NodeIdx`]
/// of all other nodes stays valid.
pub(crate) struct Arena {
    nodes: Vec<Option<Node>>,
    index: HashMap<TermId, NodeIdx>,
}

impl Arena {
    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn insert(&mut self, node: Node) -> NodeIdx {
        let idx = NodeIdx::from(self.nodes.len());
        self.index.insert(node.id().clone(), idx);
        self.nodes.push(Some(node));
        idx
    }

    pub fn remove(&mut self, idx: NodeIdx) -> Option<Node> {
        let node = self.nodes.get_mut(idx.as_usize())?.take()?;
        self.index.remove(node.id().as_str());
        Some(node)
    }

    pub fn get(&self, idx: NodeIdx) -> Option<&Node> {
        self.nodes.get(idx.as_usize())?.as_ref()
    }

    pub fn get_mut(&mut self, idx: NodeIdx) -> Option<&mut Node> {
        self.nodes.get_mut(idx.as_usize())?.as_mut()
    }

    pub fn idx_of(&self, id: &str) -> Option<NodeIdx> {
        self.index.get(id).copied()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.nodes.iter().enumerate(),
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            nodes: Vec::with_capacity(DEFAULT_NUM_TERMS),
            index: HashMap::with_capacity(DEFAULT_NUM_TERMS),
        }
    }
}

/// Iterates all live nodes in insertion order
pub(crate) struct Iter<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Option<Node>>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (NodeIdx, &'a Node);
    fn next(&mut self) -> Option<Self::Item> {
        for (idx, slot) in self.inner.by_ref() {
            if let Some(node) = slot {
                return Some((NodeIdx::from(idx), node));
            }
        }
        None
    }
}

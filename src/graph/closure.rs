//! Memoized transitive closures
//!
//! Both the [`crate::OboGraph`] and every [`crate::SubGraph`] compute
//! ancestors and descendants the same way. The graph only has to provide
//! direct parents and children through [`Topology`] plus a version number
//! that changes with every structural mutation. Cached results of an older
//! version are never returned.
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use crate::term::{NodeGroup, NodeIdx};

/// Direct neighbourhood of the nodes of a graph
pub(crate) trait Topology {
    fn parents_of(&self, idx: NodeIdx) -> Option<&NodeGroup>;
    fn children_of(&self, idx: NodeIdx) -> Option<&NodeGroup>;
}

#[derive(Clone, Copy)]
enum Walk {
    Up,
    Down,
}

fn neighbours<T: Topology>(graph: &T, walk: Walk, idx: NodeIdx) -> Option<&NodeGroup> {
    match walk {
        Walk::Up => graph.parents_of(idx),
        Walk::Down => graph.children_of(idx),
    }
}

#[derive(Debug, Clone)]
struct Cached {
    version: u64,
    group: NodeGroup,
}

/// Caches ancestors and descendants per node
///
/// While computing the closure of one node, the valid cached closures of
/// the visited nodes are merged in instead of walking through them again.
#[derive(Debug, Default)]
pub(crate) struct ClosureCache {
    ancestors: RefCell<HashMap<NodeIdx, Cached>>,
    descendants: RefCell<HashMap<NodeIdx, Cached>>,
    computations: Cell<usize>,
}

impl ClosureCache {
    pub fn ancestors<T: Topology>(&self, graph: &T, version: u64, idx: NodeIdx) -> NodeGroup {
        self.closure(graph, version, idx, Walk::Up)
    }

    pub fn descendants<T: Topology>(&self, graph: &T, version: u64, idx: NodeIdx) -> NodeGroup {
        self.closure(graph, version, idx, Walk::Down)
    }

    /// Number of closures that were computed instead of served from cache
    #[cfg(test)]
    pub fn computations(&self) -> usize {
        self.computations.get()
    }

    fn cached(&self, walk: Walk, version: u64, idx: NodeIdx) -> Option<NodeGroup> {
        let cache = match walk {
            Walk::Up => self.ancestors.borrow(),
            Walk::Down => self.descendants.borrow(),
        };
        let group = cache
            .get(&idx)
            .filter(|cached| cached.version == version)
            .map(|cached| cached.group.clone());
        group
    }

    fn closure<T: Topology>(&self, graph: &T, version: u64, idx: NodeIdx, walk: Walk) -> NodeGroup {
        if let Some(group) = self.cached(walk, version, idx) {
            return group;
        }

        let mut result = NodeGroup::default();
        let mut queue: VecDeque<NodeIdx> = neighbours(graph, walk, idx)
            .map(|group| group.iter().collect())
            .unwrap_or_default();

        while let Some(next) = queue.pop_front() {
            if next == idx || !result.insert(next) {
                continue;
            }
            match self.cached(walk, version, next) {
                Some(group) => result = &result | &group,
                None => {
                    if let Some(group) = neighbours(graph, walk, next) {
                        queue.extend(group.iter().filter(|n| !result.contains(n)));
                    }
                }
            }
        }
        // a cyclic input must never put a node into its own closure
        result.remove(&idx);

        self.computations.set(self.computations.get() + 1);
        let cache = match walk {
            Walk::Up => &self.ancestors,
            Walk::Down => &self.descendants,
        };
        cache.borrow_mut().insert(
            idx,
            Cached {
                version,
                group: result.clone(),
            },
        );
        result
    }
}

/// Nodes without parents and nodes without children
#[derive(Debug, Clone, Default)]
pub(crate) struct Structure {
    pub orphans: NodeGroup,
    pub leaves: NodeGroup,
}

/// Caches the [`Structure`] of a graph until it is mutated
#[derive(Debug, Default)]
pub(crate) struct StructureCache {
    inner: RefCell<Option<(u64, Structure)>>,
    recomputations: Cell<usize>,
}

impl StructureCache {
    /// Returns the cached structure or computes it with `compute`
    pub fn get_or_compute<F: FnOnce() -> Structure>(&self, version: u64, compute: F) -> Structure {
        if let Some((cached_version, structure)) = self.inner.borrow().as_ref() {
            if *cached_version == version {
                return structure.clone();
            }
        }
        let structure = compute();
        self.recomputations.set(self.recomputations.get() + 1);
        *self.inner.borrow_mut() = Some((version, structure.clone()));
        structure
    }

    /// Number of times the structure was computed
    pub fn recomputations(&self) -> usize {
        self.recomputations.get()
    }
}

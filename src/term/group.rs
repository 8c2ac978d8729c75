use std::collections::HashSet;
use std::ops::{BitAnd, BitOr, Sub};

use smallvec::SmallVec;

use crate::term::NodeIdx;
use crate::DEFAULT_NUM_PARENTS;

type Group = SmallVec<[NodeIdx; DEFAULT_NUM_PARENTS]>;

/// A set of [`NodeIdx`] representing a group of nodes of a graph
///
/// Each node can occur only once in the group and the group is always
/// sorted, which keeps unions and intersections linear.
///
/// This group is used e.g. for parent and child sets, as well as for
/// the cached ancestors and descendants of a node.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NodeGroup {
    ids: Group,
}

impl NodeGroup {
    /// Constructs a new, empty [`NodeGroup`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a new, empty [`NodeGroup`] with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: SmallVec::with_capacity(capacity),
        }
    }

    /// Returns `true` if the group contains no nodes
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the number of nodes in the group
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Adds a new [`NodeIdx`] to the group
    ///
    /// Returns whether the `NodeIdx` was newly inserted. That is:
    ///
    /// - If the group did not previously contain this `NodeIdx`, true is returned.
    /// - If the group already contained this `NodeIdx`, false is returned.
    pub fn insert(&mut self, id: NodeIdx) -> bool {
        match self.ids.binary_search(&id) {
            Ok(_) => false,
            Err(idx) => {
                self.ids.insert(idx, id);
                true
            }
        }
    }

    /// Removes the [`NodeIdx`] from the group
    ///
    /// Returns whether the `NodeIdx` was present
    pub fn remove(&mut self, id: &NodeIdx) -> bool {
        match self.ids.binary_search(id) {
            Ok(idx) => {
                self.ids.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Returns `true` if the group contains the [`NodeIdx`]
    pub fn contains(&self, id: &NodeIdx) -> bool {
        self.ids.binary_search(id).is_ok()
    }

    /// Returns `true` if at least one node is part of both groups
    pub fn intersects(&self, other: &NodeGroup) -> bool {
        let (mut a, mut b) = (self.ids.iter().peekable(), other.ids.iter().peekable());
        while let (Some(x), Some(y)) = (a.peek(), b.peek()) {
            match x.cmp(y) {
                std::cmp::Ordering::Less => {
                    a.next();
                }
                std::cmp::Ordering::Greater => {
                    b.next();
                }
                std::cmp::Ordering::Equal => return true,
            }
        }
        false
    }

    /// Returns an Iterator of the [`NodeIdx`]s inside the group
    pub fn iter(&self) -> NodeIdxs<'_> {
        NodeIdxs::new(self.ids.iter())
    }

    /// Returns the nodes as sorted slice
    pub fn as_slice(&self) -> &[NodeIdx] {
        &self.ids
    }

    /// Adds a [`NodeIdx`] to the end of the group
    ///
    /// # Note
    ///
    /// This method will not check if the `NodeIdx` already exists and
    /// relies on the caller to push in ascending order.
    fn push_unchecked(&mut self, id: NodeIdx) {
        self.ids.push(id);
    }
}

impl From<HashSet<NodeIdx>> for NodeGroup {
    fn from(s: HashSet<NodeIdx>) -> Self {
        s.into_iter().collect()
    }
}

impl From<Vec<NodeIdx>> for NodeGroup {
    fn from(v: Vec<NodeIdx>) -> Self {
        v.into_iter().collect()
    }
}

impl FromIterator<NodeIdx> for NodeGroup {
    fn from_iter<T: IntoIterator<Item = NodeIdx>>(iter: T) -> Self {
        let mut ids: Group = iter.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self { ids }
    }
}

impl Extend<NodeIdx> for NodeGroup {
    fn extend<T: IntoIterator<Item = NodeIdx>>(&mut self, iter: T) {
        for id in iter {
            self.insert(id);
        }
    }
}

impl<'a> IntoIterator for &'a NodeGroup {
    type Item = NodeIdx;
    type IntoIter = NodeIdxs<'a>;

    fn into_iter(self) -> NodeIdxs<'a> {
        NodeIdxs::new(self.ids.iter())
    }
}

/// An iterator over [`NodeIdx`]s
pub struct NodeIdxs<'a> {
    inner: std::slice::Iter<'a, NodeIdx>,
}

impl<'a> NodeIdxs<'a> {
    fn new(inner: std::slice::Iter<'a, NodeIdx>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for NodeIdxs<'a> {
    type Item = NodeIdx;
    fn next(&mut self) -> Option<NodeIdx> {
        self.inner.next().copied()
    }
}

impl BitOr for &NodeGroup {
    type Output = NodeGroup;

    fn bitor(self, rhs: &NodeGroup) -> NodeGroup {
        let mut group = NodeGroup::with_capacity(self.len() + rhs.len());
        let (mut a, mut b) = (self.ids.iter().peekable(), rhs.ids.iter().peekable());
        loop {
            match (a.peek(), b.peek()) {
                (Some(x), Some(y)) if x < y => group.push_unchecked(*a.next().expect("peeked")),
                (Some(x), Some(y)) if x > y => group.push_unchecked(*b.next().expect("peeked")),
                (Some(_), Some(_)) => {
                    group.push_unchecked(*a.next().expect("peeked"));
                    b.next();
                }
                (Some(_), None) => group.push_unchecked(*a.next().expect("peeked")),
                (None, Some(_)) => group.push_unchecked(*b.next().expect("peeked")),
                (None, None) => break,
            }
        }
        group
    }
}

impl BitAnd for &NodeGroup {
    type Output = NodeGroup;

    fn bitand(self, rhs: &NodeGroup) -> NodeGroup {
        let (large, small) = if self.len() > rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut group = NodeGroup::with_capacity(small.len());
        for id in &small.ids {
            if large.contains(id) {
                group.push_unchecked(*id);
            }
        }
        group
    }
}

impl Sub for &NodeGroup {
    type Output = NodeGroup;

    fn sub(self, rhs: &NodeGroup) -> NodeGroup {
        let mut group = NodeGroup::with_capacity(self.len());
        for id in &self.ids {
            if !rhs.contains(id) {
                group.push_unchecked(*id);
            }
        }
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(ids: &[usize]) -> NodeGroup {
        ids.iter().map(|id| NodeIdx::from(*id)).collect()
    }

    #[test]
    fn insert_keeps_order() {
        let mut g = NodeGroup::new();
        assert!(g.insert(3usize.into()));
        assert!(g.insert(1usize.into()));
        assert!(g.insert(2usize.into()));
        assert!(!g.insert(2usize.into()));
        assert_eq!(g, group(&[1, 2, 3]));
        assert!(g.remove(&2usize.into()));
        assert!(!g.remove(&2usize.into()));
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn bitor() {
        let result = &group(&[1, 2, 3]) | &group(&[2, 4, 5]);
        assert_eq!(result, group(&[1, 2, 3, 4, 5]));

        let result = &NodeGroup::new() | &group(&[7]);
        assert_eq!(result, group(&[7]));
    }

    #[test]
    fn bitand() {
        let result = &group(&[1, 2, 3]) & &group(&[5, 4, 2, 1]);
        assert_eq!(result, group(&[1, 2]));
        assert!((&group(&[1]) & &group(&[2])).is_empty());
    }

    #[test]
    fn sub_and_intersects() {
        let a = group(&[1, 2, 3, 8]);
        let b = group(&[2, 8, 9]);
        assert_eq!(&a - &b, group(&[1, 3]));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&group(&[4, 5])));
        assert!(!a.intersects(&NodeGroup::new()));
    }
}

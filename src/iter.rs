//! In-order iterators over the tree.

use crate::node::{Node, NodeId};
use crate::RbTree;
use alloc::vec::Vec;
use core::iter::FusedIterator;

/// A borrowing in-order iterator over the entries of an [`RbTree`].
///
/// Yields key/value pairs in strictly increasing key order under the tree's
/// active comparator.
pub struct Iter<'a, K: Ord, V> {
    pub(crate) tree: &'a RbTree<K, V>,
    pub(crate) node: Option<NodeId>,
    pub(crate) remaining: usize,
}

impl<'a, K: Ord, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = self.tree.next(node);
        self.remaining -= 1;
        self.tree.entry(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: Ord, V> ExactSizeIterator for Iter<'a, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, K: Ord, V> FusedIterator for Iter<'a, K, V> {}

/// An owning in-order iterator over the entries of an [`RbTree`].
pub struct IntoIter<K: Ord, V> {
    pub(crate) nodes: Vec<Node<K, V>>,
    /// Node handles in reverse in-order, consumed from the back.
    pub(crate) order: Vec<NodeId>,
}

impl<K: Ord, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.order.pop()?;
        self.nodes[node.0].entry.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.order.len(), Some(self.order.len()))
    }
}

impl<K: Ord, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.order.len()
    }
}

impl<K: Ord, V> FusedIterator for IntoIter<K, V> {}

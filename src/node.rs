//! The node model: colours, directions, stable node handles and arena slots.

use core::ops::{Index, IndexMut};

/// The colour of a node. Every node carries a colour for balancing purposes;
/// the sentinel is permanently [`Colour::Black`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    /// A red node. Freshly inserted nodes start out red.
    Red,
    /// A black node. The root and the sentinel are always black.
    Black,
}

/// A direction for a child to be in, in a binary tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Get the opposite of a direction.
    pub(crate) fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A stable handle to a node owned by an [`RbTree`](crate::RbTree).
///
/// Handles are plain arena indices: they are `Copy`, remain valid while the
/// node stays in its tree's arena (including after a detaching
/// [`delete`](crate::RbTree::delete)), and are only meaningful to the tree
/// that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// The reserved arena index of the per-tree sentinel.
pub(crate) const NIL: NodeId = NodeId(0);

/// One arena slot: navigation links, colour and the stored entry.
///
/// `entry` is `None` only in the sentinel slot (index 0) and in slots whose
/// entry was taken out by `remove`; the engine never reads the key or value
/// of either.
pub(crate) struct Node<K, V> {
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) colour: Colour,
    pub(crate) entry: Option<(K, V)>,
}

impl<K, V> Node<K, V> {
    /// A fresh red leaf with both children pointing at the sentinel.
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            parent: NIL,
            left: NIL,
            right: NIL,
            colour: Colour::Red,
            entry: Some((key, value)),
        }
    }

    /// The per-tree sentinel: black, structurally a leaf, entry never set.
    pub(crate) fn sentinel() -> Self {
        Self {
            parent: NIL,
            left: NIL,
            right: NIL,
            colour: Colour::Black,
            entry: None,
        }
    }

    pub(crate) fn key(&self) -> &K {
        match &self.entry {
            Some((key, _)) => key,
            None => unreachable!("the sentinel's key is never read"),
        }
    }
}

impl<K, V> Index<Direction> for Node<K, V> {
    type Output = NodeId;

    fn index(&self, index: Direction) -> &Self::Output {
        match index {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }
}

impl<K, V> IndexMut<Direction> for Node<K, V> {
    fn index_mut(&mut self, index: Direction) -> &mut Self::Output {
        match index {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

//! This crate implements a red-black tree keyed map with a per-tree sentinel
//! node and stable node handles.
//!
//! Every tree owns an arena of nodes addressed by [`NodeId`] handles; a
//! reserved slot plays the role of a shared sentinel leaf standing in for
//! every absent child, so the balancing code can read a child's colour and
//! links without branching on emptiness. Handles stay valid across deletions:
//! [`RbTree::delete`] detaches a node but leaves its slot (and entry) in
//! place, and [`RbTree::insert_node`] relinks it later without reallocating.
//!
//! Search, insertion and deletion run in `O(log n)`. Keys are unique and
//! ordered either by their natural [`Ord`] or by an injected
//! [`Comparator`].
//!
//! ```rust
//! use redblack::RbTree;
//!
//! let mut tree = RbTree::new();
//! let (node, _) = tree.insert(3, "three");
//! tree.insert(1, "one");
//! tree.insert(2, "two");
//!
//! assert_eq!(tree.get(&3), Some(&"three"));
//! assert_eq!(tree.iter().map(|(k, _)| *k).collect::<Vec<_>>(), [1, 2, 3]);
//!
//! // Detach the node, then reuse the very same slot.
//! assert!(tree.delete(node));
//! assert_eq!(tree.get(&3), None);
//! let (reused, inserted) = tree.insert_node(node);
//! assert!(inserted);
//! assert_eq!(reused, node);
//! ```

#![no_std]
#![deny(missing_docs)]

extern crate alloc;

mod iter;
mod node;
mod tree;


pub use iter::{IntoIter, Iter};
pub use node::{Colour, NodeId};
pub use tree::{Comparator, RbTree};

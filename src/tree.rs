//! The tree engine: rotations, insertion and deletion fixups, queries.

use crate::iter::{IntoIter, Iter};
use crate::node::{Colour, Direction, Node, NodeId, NIL};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

/// A pluggable strict total order over keys.
///
/// The comparator must stay consistent for the lifetime of the tree; swapping
/// it after insertions (or mutating a key in place) invalidates every
/// invariant. The engine performs no runtime detection of this.
pub type Comparator<K> = fn(&K, &K) -> Ordering;

/// Outcome of a comparator-guided descent from the root.
enum Descent {
    /// The key is already present at this node.
    Occupied(NodeId),
    /// The key is absent; it belongs under this node, on this side.
    Vacant(NodeId, Direction),
}

/// A red-black tree mapping totally-ordered keys to opaque values.
///
/// Nodes live in an arena owned by the tree and are addressed by stable
/// [`NodeId`] handles; index 0 is reserved for the per-tree sentinel that
/// stands in for every absent child. Mutating operations keep the usual
/// red-black invariants: the root and the sentinel are black, no red node has
/// a red child, and every root-to-sentinel path crosses the same number of
/// black nodes.
///
/// All operations are single-threaded and synchronous; the container is
/// `Send` and `Sync` whenever `K` and `V` are, but concurrent mutation needs
/// external locking.
pub struct RbTree<K: Ord, V> {
    /// The node arena. Slot 0 is the sentinel.
    pub(crate) nodes: Vec<Node<K, V>>,
    /// Slots whose entry was taken out by `remove`, available for reuse.
    free: Vec<NodeId>,
    /// The root node, or the sentinel when the tree is empty.
    pub(crate) root: NodeId,
    /// Custom comparator; `None` means the natural order of `K`.
    cmp: Option<Comparator<K>>,
    /// The number of linked nodes.
    len: usize,
}

impl<K: Ord, V> RbTree<K, V> {
    /// Create a new empty tree using the natural order of `K`.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Create a new empty tree using a custom comparator.
    ///
    /// ```rust
    /// # use redblack::RbTree;
    /// let mut tree = RbTree::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    ///
    /// tree.insert(1, "one");
    /// tree.insert(2, "two");
    ///
    /// // Under the reversed order, 2 sorts first.
    /// let first = tree.leftmost().unwrap();
    /// assert_eq!(tree.key(first), Some(&2));
    /// ```
    pub fn with_comparator(cmp: Comparator<K>) -> Self {
        Self::build(Some(cmp))
    }

    fn build(cmp: Option<Comparator<K>>) -> Self {
        let mut nodes = Vec::with_capacity(1);
        nodes.push(Node::sentinel());
        Self {
            nodes,
            free: Vec::new(),
            root: NIL,
            cmp,
            len: 0,
        }
    }

    /// Returns the number of entries stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.0]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.0]
    }

    /// The colour of a slot; the sentinel reads as black like any other node.
    #[inline]
    fn colour_of(&self, id: NodeId) -> Colour {
        self.nodes[id.0].colour
    }

    #[inline]
    pub(crate) fn compare(&self, a: &K, b: &K) -> Ordering {
        match self.cmp {
            Some(cmp) => cmp(a, b),
            None => a.cmp(b),
        }
    }

    /// Whether a handle addresses a real, entry-bearing slot of this arena.
    fn is_occupied(&self, id: NodeId) -> bool {
        id != NIL && self.nodes.get(id.0).is_some_and(|n| n.entry.is_some())
    }

    /// Take a slot from the free list, or grow the arena by one.
    fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                let id = NodeId(self.nodes.len());
                self.nodes.push(node);
                id
            }
        }
    }

    /// Clear a spliced-out node's links so a stale handle cannot navigate.
    /// The entry stays in place; the caller owns it until reuse or `remove`.
    fn detach(&mut self, node: NodeId) {
        let n = self.node_mut(node);
        n.parent = NIL;
        n.left = NIL;
        n.right = NIL;
        n.colour = Colour::Red;
    }

    /// Rotate the subtree rooted at `node` towards `dir`, promoting the child
    /// on the opposite side. O(1); preserves the in-order sequence and never
    /// touches colours or entries.
    fn rotate(&mut self, node: NodeId, dir: Direction) {
        let pivot = self.node(node)[dir.opposite()];
        debug_assert!(pivot != NIL);
        let inner = self.node(pivot)[dir];

        self.node_mut(node)[dir.opposite()] = inner;
        if inner != NIL {
            self.node_mut(inner).parent = node;
        }

        let parent = self.node(node).parent;
        self.node_mut(pivot).parent = parent;
        if node == self.root {
            self.root = pivot;
        } else if self.node(parent)[Direction::Left] == node {
            self.node_mut(parent)[Direction::Left] = pivot;
        } else {
            self.node_mut(parent)[Direction::Right] = pivot;
        }

        self.node_mut(pivot)[dir] = node;
        self.node_mut(node).parent = pivot;
    }

    /// Binary-search descent for `key`. Precondition: the tree is non-empty.
    fn descend(&self, key: &K) -> Descent {
        let mut cur = self.root;
        loop {
            match self.compare(key, self.node(cur).key()) {
                Ordering::Less => {
                    let left = self.node(cur).left;
                    if left == NIL {
                        return Descent::Vacant(cur, Direction::Left);
                    }
                    cur = left;
                }
                Ordering::Greater => {
                    let right = self.node(cur).right;
                    if right == NIL {
                        return Descent::Vacant(cur, Direction::Right);
                    }
                    cur = right;
                }
                Ordering::Equal => return Descent::Occupied(cur),
            }
        }
    }

    /// Link a fresh red leaf under `parent` on side `dir`.
    fn attach(&mut self, parent: NodeId, dir: Direction, node: NodeId) {
        debug_assert!(self.node(parent)[dir] == NIL);
        self.node_mut(node).parent = parent;
        self.node_mut(parent)[dir] = node;
    }

    fn blacken_root(&mut self) {
        let root = self.root;
        if root != NIL {
            self.node_mut(root).colour = Colour::Black;
        }
    }

    /// Insert a key/value pair, returning the node's handle and whether it
    /// was inserted. If the key is already present the tree is left
    /// unchanged, the existing node is returned with `false`, and the
    /// supplied pair is dropped.
    ///
    /// ```rust
    /// # use redblack::RbTree;
    /// let mut tree = RbTree::new();
    ///
    /// let (node, inserted) = tree.insert(4, "four");
    /// assert!(inserted);
    ///
    /// let (existing, inserted) = tree.insert(4, "again");
    /// assert!(!inserted);
    /// assert_eq!(existing, node);
    /// assert_eq!(tree.get(&4), Some(&"four"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (NodeId, bool) {
        if self.root == NIL {
            let node = self.alloc(Node::new(key, value));
            self.node_mut(node).colour = Colour::Black;
            self.root = node;
            self.len += 1;
            return (node, true);
        }
        match self.descend(&key) {
            Descent::Occupied(existing) => (existing, false),
            Descent::Vacant(parent, dir) => {
                let node = self.alloc(Node::new(key, value));
                self.attach(parent, dir, node);
                self.insert_fixup(node);
                self.blacken_root();
                self.len += 1;
                log::trace!("inserted {:?}, len = {}", node, self.len);
                (node, true)
            }
        }
    }

    /// Relink a detached node previously spliced out by [`delete`] or
    /// [`delete_unchecked`], as if it had been freshly inserted under its
    /// stored key. The node's links and colour are reset before linking.
    ///
    /// Returns the existing node and `false` if the key is already present
    /// (the supplied node stays detached), or the supplied handle and `false`
    /// if it does not address a reusable slot. Reuse is only valid for a
    /// fully detached node; passing a node still linked in a tree corrupts
    /// the ordering.
    ///
    /// [`delete`]: RbTree::delete
    /// [`delete_unchecked`]: RbTree::delete_unchecked
    pub fn insert_node(&mut self, node: NodeId) -> (NodeId, bool) {
        if !self.is_occupied(node) {
            return (node, false);
        }
        self.detach(node);
        if self.root == NIL {
            self.node_mut(node).colour = Colour::Black;
            self.root = node;
            self.len += 1;
            return (node, true);
        }
        let descent = self.descend(self.node(node).key());
        match descent {
            Descent::Occupied(existing) => (existing, false),
            Descent::Vacant(parent, dir) => {
                self.attach(parent, dir, node);
                self.insert_fixup(node);
                self.blacken_root();
                self.len += 1;
                log::trace!("relinked {:?}, len = {}", node, self.len);
                (node, true)
            }
        }
    }

    /// Repair the red-red violation a fresh red leaf may introduce, walking
    /// up the tree. At most one rotation per level plus a terminating one.
    fn insert_fixup(&mut self, mut node: NodeId) {
        while node != self.root && self.colour_of(self.node(node).parent) == Colour::Red {
            let parent = self.node(node).parent;
            // The parent is red, hence not the root: the grandparent is real.
            let grandparent = self.node(parent).parent;
            let pdir = if self.node(grandparent)[Direction::Left] == parent {
                Direction::Left
            } else {
                Direction::Right
            };
            let uncle = self.node(grandparent)[pdir.opposite()];

            if self.colour_of(uncle) == Colour::Red {
                // Push the violation one level up.
                self.node_mut(parent).colour = Colour::Black;
                self.node_mut(uncle).colour = Colour::Black;
                self.node_mut(grandparent).colour = Colour::Red;
                node = grandparent;
            } else {
                if node == self.node(parent)[pdir.opposite()] {
                    // Inner child: rotate at the parent to get the outer case.
                    node = parent;
                    self.rotate(node, pdir);
                }
                let parent = self.node(node).parent;
                let grandparent = self.node(parent).parent;
                self.node_mut(parent).colour = Colour::Black;
                self.node_mut(grandparent).colour = Colour::Red;
                self.rotate(grandparent, pdir.opposite());
            }
        }
    }

    /// Search for a key, returning the matching node's handle.
    pub fn search(&self, key: &K) -> Option<NodeId> {
        let mut cur = self.root;
        while cur != NIL {
            match self.compare(key, self.node(cur).key()) {
                Ordering::Less => cur = self.node(cur).left,
                Ordering::Greater => cur = self.node(cur).right,
                Ordering::Equal => return Some(cur),
            }
        }
        None
    }

    /// Get a value if it exists.
    ///
    /// ```rust
    /// # use redblack::RbTree;
    /// let mut map = RbTree::default();
    ///
    /// map.insert(4, 6);
    /// map.insert(5, 7);
    ///
    /// assert_eq!(map.get(&4), Some(&6));
    /// assert_eq!(map.get(&5), Some(&7));
    /// assert_eq!(map.get(&6), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let node = self.search(key)?;
        self.value(node)
    }

    /// Get a mutable reference to a value if it exists.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let node = self.search(key)?;
        self.value_mut(node)
    }

    /// Safely delete a node: re-derives the path to the node's key from the
    /// root and splices the node out only if it is found there. Returns
    /// `false` without mutation for a stale, foreign or already-removed
    /// handle.
    ///
    /// The spliced-out node stays in the arena, detached and still carrying
    /// its entry, so it can be relinked later with
    /// [`insert_node`](RbTree::insert_node).
    pub fn delete(&mut self, node: NodeId) -> bool {
        if !self.is_occupied(node) {
            return false;
        }
        if self.search(self.node(node).key()) != Some(node) {
            return false;
        }
        self.delete_unchecked(node);
        true
    }

    /// Delete a node without re-deriving its path.
    ///
    /// Precondition: `node` is currently linked into this tree. This is a
    /// deliberate fast path for callers who can guarantee membership
    /// themselves; violating the precondition corrupts the tree's structure
    /// (though never memory safety). Use [`delete`](RbTree::delete) when in
    /// doubt.
    pub fn delete_unchecked(&mut self, node: NodeId) {
        // Splice target and its replacement: the node itself when it has at
        // most one real child, otherwise its in-order successor (which, being
        // a subtree minimum, has no left child).
        let (subst, ptr) = if self.node(node).left == NIL {
            (node, self.node(node).right)
        } else if self.node(node).right == NIL {
            (node, self.node(node).left)
        } else {
            let subst = self.min_from(self.node(node).right);
            (subst, self.node(subst).right)
        };

        if subst == self.root {
            // Single-node tree, or the root with one real child.
            self.root = ptr;
            if ptr != NIL {
                self.node_mut(ptr).parent = NIL;
                self.node_mut(ptr).colour = Colour::Black;
            }
            self.detach(node);
            self.len -= 1;
            return;
        }

        let subst_is_red = self.node(subst).colour == Colour::Red;
        let subst_parent = self.node(subst).parent;

        // Unlink `subst` by linking `ptr` in its place.
        if self.node(subst_parent)[Direction::Left] == subst {
            self.node_mut(subst_parent)[Direction::Left] = ptr;
        } else {
            self.node_mut(subst_parent)[Direction::Right] = ptr;
        }

        // `ptr`'s parent is carried separately through the fixup so the
        // sentinel's own links never get written when `ptr` is the sentinel.
        let ptr_parent = if subst == node {
            subst_parent
        } else {
            let ptr_parent = if subst_parent == node {
                subst
            } else {
                subst_parent
            };

            // Relocate `subst` into `node`'s structural position. `node`'s
            // colour is preserved in place so the fixup below reasons about
            // the deficit left where `subst` was spliced out.
            let (left, right, parent, colour) = {
                let n = self.node(node);
                (n.left, n.right, n.parent, n.colour)
            };
            {
                let s = self.node_mut(subst);
                s.left = left;
                s.right = right;
                s.parent = parent;
                s.colour = colour;
            }

            if node == self.root {
                self.root = subst;
            } else if self.node(parent)[Direction::Left] == node {
                self.node_mut(parent)[Direction::Left] = subst;
            } else {
                self.node_mut(parent)[Direction::Right] = subst;
            }

            if left != NIL {
                self.node_mut(left).parent = subst;
            }
            if right != NIL {
                self.node_mut(right).parent = subst;
            }
            ptr_parent
        };
        if ptr != NIL {
            self.node_mut(ptr).parent = ptr_parent;
        }

        self.detach(node);
        self.len -= 1;
        log::trace!("detached {:?}, len = {}", node, self.len);

        if !subst_is_red {
            // Splicing out a black node leaves `ptr` double-black.
            self.delete_fixup(ptr, ptr_parent);
        }
    }

    /// Repair the black-height deficit carried by `ptr` after a black node
    /// was spliced out above it. `parent` is `ptr`'s parent, passed
    /// explicitly because `ptr` may be the sentinel.
    fn delete_fixup(&mut self, mut ptr: NodeId, mut parent: NodeId) {
        while ptr != self.root && self.colour_of(ptr) == Colour::Black {
            let dir = if self.node(parent)[Direction::Left] == ptr {
                Direction::Left
            } else {
                Direction::Right
            };
            // A double-black node's sibling has black height >= 1.
            let mut sibling = self.node(parent)[dir.opposite()];
            debug_assert!(sibling != NIL);

            if self.colour_of(sibling) == Colour::Red {
                // Convert to a black-sibling case.
                self.node_mut(sibling).colour = Colour::Black;
                self.node_mut(parent).colour = Colour::Red;
                self.rotate(parent, dir);
                sibling = self.node(parent)[dir.opposite()];
            }

            let near = self.node(sibling)[dir];
            let far = self.node(sibling)[dir.opposite()];
            if self.colour_of(near) == Colour::Black && self.colour_of(far) == Colour::Black {
                // Push the deficit up.
                self.node_mut(sibling).colour = Colour::Red;
                ptr = parent;
                parent = self.node(ptr).parent;
            } else {
                if self.colour_of(far) == Colour::Black {
                    // Only the near nephew is red: rotate at the sibling to
                    // make the far nephew red.
                    self.node_mut(near).colour = Colour::Black;
                    self.node_mut(sibling).colour = Colour::Red;
                    self.rotate(sibling, dir.opposite());
                    sibling = self.node(parent)[dir.opposite()];
                }
                let parent_colour = self.node(parent).colour;
                self.node_mut(sibling).colour = parent_colour;
                self.node_mut(parent).colour = Colour::Black;
                let far = self.node(sibling)[dir.opposite()];
                debug_assert!(far != NIL);
                self.node_mut(far).colour = Colour::Black;
                self.rotate(parent, dir);
                ptr = self.root;
            }
        }
        if ptr != NIL {
            self.node_mut(ptr).colour = Colour::Black;
        }
    }

    /// Remove a key from the tree, returning its value and recycling the
    /// node's arena slot. Unlike [`delete`](RbTree::delete) this relinquishes
    /// the node handle: the slot may be reused by a later insertion.
    ///
    /// ```rust
    /// # use redblack::RbTree;
    /// let mut map = RbTree::default();
    ///
    /// map.insert(4, 6);
    /// assert_eq!(map.remove(&4), Some(6));
    /// assert_eq!(map.get(&4), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let node = self.search(key)?;
        self.delete_unchecked(node);
        let entry = self.node_mut(node).entry.take();
        self.free.push(node);
        entry.map(|(_, value)| value)
    }

    fn min_from(&self, mut node: NodeId) -> NodeId {
        while self.node(node).left != NIL {
            node = self.node(node).left;
        }
        node
    }

    fn max_from(&self, mut node: NodeId) -> NodeId {
        while self.node(node).right != NIL {
            node = self.node(node).right;
        }
        node
    }

    /// The minimum of the subtree rooted at `node`, or `None` for an empty
    /// subtree.
    pub fn min(&self, node: NodeId) -> Option<NodeId> {
        if node == NIL || node.0 >= self.nodes.len() {
            return None;
        }
        Some(self.min_from(node))
    }

    /// The maximum of the subtree rooted at `node`, or `None` for an empty
    /// subtree.
    pub fn max(&self, node: NodeId) -> Option<NodeId> {
        if node == NIL || node.0 >= self.nodes.len() {
            return None;
        }
        Some(self.max_from(node))
    }

    /// The node with the smallest key, or `None` for an empty tree.
    pub fn leftmost(&self) -> Option<NodeId> {
        self.min(self.root)
    }

    /// The node with the largest key, or `None` for an empty tree.
    pub fn rightmost(&self) -> Option<NodeId> {
        self.max(self.root)
    }

    fn is_right_child(&self, node: NodeId) -> bool {
        let parent = self.node(node).parent;
        parent != NIL && self.node(parent).right == node
    }

    /// The in-order successor of `node`, or `None` if `node` holds the
    /// largest key.
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        if node == NIL || node.0 >= self.nodes.len() {
            return None;
        }
        let right = self.node(node).right;
        if right != NIL {
            return Some(self.min_from(right));
        }
        let mut cur = node;
        while cur != self.root && self.is_right_child(cur) {
            cur = self.node(cur).parent;
        }
        if cur == self.root {
            return None;
        }
        // The ascent stopped at a left child: its parent is the successor.
        let parent = self.node(cur).parent;
        (parent != NIL).then_some(parent)
    }

    /// The key stored at a node, or `None` for the sentinel or a slot with
    /// no entry.
    pub fn key(&self, node: NodeId) -> Option<&K> {
        if node == NIL {
            return None;
        }
        self.nodes.get(node.0)?.entry.as_ref().map(|(k, _)| k)
    }

    /// The value stored at a node, or `None` for the sentinel or a slot with
    /// no entry.
    pub fn value(&self, node: NodeId) -> Option<&V> {
        if node == NIL {
            return None;
        }
        self.nodes.get(node.0)?.entry.as_ref().map(|(_, v)| v)
    }

    /// A mutable reference to the value stored at a node.
    pub fn value_mut(&mut self, node: NodeId) -> Option<&mut V> {
        if node == NIL {
            return None;
        }
        self.nodes.get_mut(node.0)?.entry.as_mut().map(|(_, v)| v)
    }

    /// The key/value pair stored at a node.
    pub fn entry(&self, node: NodeId) -> Option<(&K, &V)> {
        if node == NIL {
            return None;
        }
        self.nodes.get(node.0)?.entry.as_ref().map(|(k, v)| (k, v))
    }

    /// The parent of a node, or `None` for the root.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.nodes.get(node.0)?.parent;
        (node != NIL && parent != NIL).then_some(parent)
    }

    /// The left child of a node, or `None` when it is the sentinel.
    pub fn left(&self, node: NodeId) -> Option<NodeId> {
        let left = self.nodes.get(node.0)?.left;
        (left != NIL).then_some(left)
    }

    /// The right child of a node, or `None` when it is the sentinel.
    pub fn right(&self, node: NodeId) -> Option<NodeId> {
        let right = self.nodes.get(node.0)?.right;
        (right != NIL).then_some(right)
    }

    /// The colour of a node; the sentinel (and any out-of-range handle)
    /// reads as black.
    pub fn colour(&self, node: NodeId) -> Colour {
        self.nodes.get(node.0).map_or(Colour::Black, |n| n.colour)
    }

    /// Pre-order traversal for diagnostics, visiting every node including
    /// sentinel leaves. The visitor receives the depth, whether the node is
    /// the sentinel, and the node's handle.
    pub fn walk<F: FnMut(usize, bool, NodeId)>(&self, mut visitor: F) {
        self.walk_node(self.root, 0, &mut visitor);
    }

    fn walk_node<F: FnMut(usize, bool, NodeId)>(&self, node: NodeId, depth: usize, visitor: &mut F) {
        visitor(depth, node == NIL, node);
        if node == NIL {
            return;
        }
        self.walk_node(self.node(node).left, depth + 1, visitor);
        self.walk_node(self.node(node).right, depth + 1, visitor);
    }

    /// Return a borrowing in-order iterator over the key/value pairs, i.e.
    /// in strictly increasing key order under the active comparator.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            tree: self,
            node: self.leftmost(),
            remaining: self.len,
        }
    }
}

impl<K: Ord, V> Default for RbTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for RbTree<K, V> {
    /// An indented structural dump including sentinel leaves, for visual
    /// debugging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "<empty tree>");
        }
        let mut result = Ok(());
        self.walk(|depth, is_nil, node| {
            if result.is_err() {
                return;
            }
            result = (|| {
                write!(f, "{:width$}", "", width = depth * 2)?;
                if is_nil {
                    writeln!(f, "nil")
                } else {
                    let n = &self.nodes[node.0];
                    match &n.entry {
                        Some((key, value)) => {
                            writeln!(f, "{:?} {:?} => {:?}", n.colour, key, value)
                        }
                        None => unreachable!("linked nodes always carry an entry"),
                    }
                }
            })();
        });
        result
    }
}

impl<K: Ord + Clone, V: Clone> Clone for RbTree<K, V> {
    fn clone(&self) -> Self {
        let mut tree = match self.cmp {
            Some(cmp) => Self::with_comparator(cmp),
            None => Self::new(),
        };
        tree.extend(self.iter().map(|(k, v)| (k.clone(), v.clone())));
        tree
    }
}

impl<K: Ord, V: PartialEq> PartialEq for RbTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<K: Ord, V: Eq> Eq for RbTree<K, V> {}

impl<K: Ord, V> FromIterator<(K, V)> for RbTree<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tree = RbTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for RbTree<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a RbTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord, V> IntoIterator for RbTree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut order = Vec::with_capacity(self.len);
        let mut cur = self.leftmost();
        while let Some(node) = cur {
            order.push(node);
            cur = self.next(node);
        }
        // Popped from the back.
        order.reverse();
        IntoIter {
            nodes: self.nodes,
            order,
        }
    }
}

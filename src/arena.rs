use generational_arena::{Arena, Index};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, instrument};

/// Tree node in the arena-based binary tree.
///
/// The payload is opaque to the tree: it is carried, never compared.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Payload stored at this position
    pub value: T,
    /// Index of the left child in the arena, None if the slot is empty
    pub left: Option<Index>,
    /// Index of the right child in the arena, None if the slot is empty
    pub right: Option<Index>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn child_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Present children, left before right.
    pub fn children(&self) -> impl Iterator<Item = Index> {
        self.left.into_iter().chain(self.right)
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Arena-based binary tree filled in level order.
///
/// Nodes live in a generational arena and refer to their children by index,
/// so every node has exactly one owner (its parent slot, or `root`) and the
/// structure cannot form cycles. Insertion only ever fills the first empty
/// child slot in breadth-first order, which keeps the shape identical to that
/// of a binary heap of the same size.
#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    /// Arena storage for all tree nodes
    arena: Arena<Node<T>>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts `value` into the first free child slot in level order.
    ///
    /// Slots are checked breadth-first, left before right, starting at the
    /// root. Returns the arena index of the new node.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert_level_order(&mut self, value: T) -> Index {
        let Some(root) = self.root else {
            let idx = self.arena.insert(Node::new(value));
            self.root = Some(idx);
            debug!(?idx, "inserted root");
            return idx;
        };

        let idx = self.arena.insert(Node::new(value));
        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            let node = &mut self.arena[current];
            match node.left {
                None => {
                    node.left = Some(idx);
                    debug!(?idx, parent = ?current, "attached left");
                    return idx;
                }
                Some(left) => queue.push_back(left),
            }
            match node.right {
                None => {
                    node.right = Some(idx);
                    debug!(?idx, parent = ?current, "attached right");
                    return idx;
                }
                Some(right) => queue.push_back(right),
            }
        }
        // A finite tree always has an open slot, so the scan returns above.
        idx
    }

    /// Attaches `value` under `parent` in an empty slot, bypassing level order.
    ///
    /// Only used by tests to build shapes level-order insertion cannot produce.
    #[cfg(test)]
    pub(crate) fn attach(&mut self, parent: Index, side: Side, value: T) -> Index {
        let idx = self.arena.insert(Node::new(value));
        let slot = match side {
            Side::Left => &mut self.arena[parent].left,
            Side::Right => &mut self.arena[parent].right,
        };
        assert!(slot.is_none(), "slot already occupied");
        *slot = Some(idx);
        idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&Node<T>> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn root_node(&self) -> Option<&Node<T>> {
        self.root.and_then(|idx| self.arena.get(idx))
    }

    /// Number of nodes, tracked by the arena.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) enum Side {
    Left,
    Right,
}

impl<T> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_level_order(value);
        }
    }
}

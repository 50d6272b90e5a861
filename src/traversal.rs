//! Depth-first and breadth-first traversals.
//!
//! All iterators keep an explicit stack or queue of arena indices instead of
//! recursing, so traversal depth is bounded by heap memory rather than the
//! call stack.

use std::collections::VecDeque;

use generational_arena::Index;
use tracing::instrument;

use crate::arena::{BinaryTree, Node};

impl<T> BinaryTree<T> {
    pub fn iter_inorder(&self) -> InOrderIter<'_, T> {
        InOrderIter::new(self)
    }

    pub fn iter_preorder(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrderIter<'_, T> {
        PostOrderIter::new(self)
    }

    pub fn iter_level_order(&self) -> LevelOrderIter<'_, T> {
        LevelOrderIter::new(self)
    }
}

impl<T: Clone> BinaryTree<T> {
    /// Left subtree, node, right subtree.
    #[instrument(level = "debug", skip(self))]
    pub fn inorder(&self) -> Vec<T> {
        self.iter_inorder().cloned().collect()
    }

    /// Node, left subtree, right subtree.
    #[instrument(level = "debug", skip(self))]
    pub fn preorder(&self) -> Vec<T> {
        self.iter_preorder().cloned().collect()
    }

    /// Left subtree, right subtree, node.
    #[instrument(level = "debug", skip(self))]
    pub fn postorder(&self) -> Vec<T> {
        self.iter_postorder().cloned().collect()
    }

    /// Top to bottom, left to right within each level.
    #[instrument(level = "debug", skip(self))]
    pub fn level_order(&self) -> Vec<T> {
        self.iter_level_order().cloned().collect()
    }
}

pub struct InOrderIter<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<Index>,
    current: Option<Index>,
}

impl<'a, T> InOrderIter<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            current: tree.root(),
        }
    }
}

impl<'a, T> Iterator for InOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // Descend along left links, remembering the path
        while let Some(idx) = self.current {
            self.stack.push(idx);
            self.current = self.tree.get_node(idx).and_then(|node| node.left);
        }
        let idx = self.stack.pop()?;
        let node = self.tree.get_node(idx)?;
        self.current = node.right;
        Some(&node.value)
    }
}

pub struct PreOrderIter<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<Index>,
}

impl<'a, T> PreOrderIter<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.tree.get_node(idx)?;
        // Push right first so the left subtree is visited first
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(&node.value)
    }
}

pub struct PostOrderIter<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<(Index, bool)>,
}

impl<'a, T> PostOrderIter<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            stack: tree.root().map(|root| (root, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, visited)) = self.stack.pop() {
            let Some(node) = self.tree.get_node(idx) else {
                continue;
            };
            if visited {
                return Some(&node.value);
            }
            self.stack.push((idx, true));
            if let Some(right) = node.right {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left {
                self.stack.push((left, false));
            }
        }
        None
    }
}

pub struct LevelOrderIter<'a, T> {
    tree: &'a BinaryTree<T>,
    queue: VecDeque<Index>,
}

impl<'a, T> LevelOrderIter<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            queue: tree.root().into_iter().collect(),
        }
    }

    /// Like `next`, but also hands out the node so callers can inspect its links.
    pub(crate) fn next_node(&mut self) -> Option<(Index, &'a Node<T>)> {
        let idx = self.queue.pop_front()?;
        let node = self.tree.get_node(idx)?;
        self.queue.extend(node.children());
        Some((idx, node))
    }
}

impl<'a, T> Iterator for LevelOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(|(_, node)| &node.value)
    }
}

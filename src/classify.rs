//! Structural classification of a binary tree.
//!
//! Every query here is a pure read over the current shape. The folds use an
//! explicit stack or queue; none of them recurse.

use std::collections::VecDeque;
use std::fmt;

use generational_arena::Index;
use serde::Serialize;
use tracing::{instrument, trace};

use crate::arena::{BinaryTree, Node};

/// Entry in the completeness queue: a real node, or a marker for an empty slot.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Node(Index),
    Empty,
}

impl<T> BinaryTree<T> {
    /// Number of nodes on the longest root-to-leaf path. 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        self.root().map_or(0, |root| self.subtree_height(root))
    }

    /// Height of the subtree rooted at `idx`; 0 when `idx` is not in the tree.
    #[instrument(level = "trace", skip(self))]
    pub fn subtree_height(&self, idx: Index) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        if self.get_node(idx).is_some() {
            queue.push_back((idx, 1)); // (node, depth)
        }

        while let Some((current, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.get_node(current) {
                for child in node.children() {
                    queue.push_back((child, depth + 1));
                }
            }
        }
        max_depth
    }

    #[instrument(level = "debug", skip(self))]
    pub fn count_nodes(&self) -> usize {
        self.root().map_or(0, |root| self.subtree_count(root))
    }

    /// Node count of the subtree rooted at `idx`; 0 when `idx` is not in the tree.
    #[instrument(level = "trace", skip(self))]
    pub fn subtree_count(&self, idx: Index) -> usize {
        let mut count = 0;
        let mut stack = vec![idx];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.get_node(current) {
                count += 1;
                stack.extend(node.children());
            }
        }
        count
    }

    /// All leaves sit at the same depth and every internal node has two children.
    ///
    /// Empty trees are vacuously perfect.
    #[instrument(level = "debug", skip(self))]
    pub fn is_perfect(&self) -> bool {
        let depth = self.height();
        let mut stack: Vec<(Index, usize)> = self.root().map(|root| (root, 1)).into_iter().collect();

        while let Some((current, level)) = stack.pop() {
            let Some(node) = self.get_node(current) else {
                continue;
            };
            match (node.left, node.right) {
                (None, None) => {
                    if level != depth {
                        trace!(?current, level, depth, "leaf above bottom level");
                        return false;
                    }
                }
                (Some(left), Some(right)) => {
                    stack.push((right, level + 1));
                    stack.push((left, level + 1));
                }
                _ => return false,
            }
        }
        true
    }

    /// Every level is full except possibly the last, which fills left to right.
    ///
    /// Scans breadth-first with a marker for every empty child slot; once a
    /// marker has been seen, any further real node means there is a gap.
    #[instrument(level = "debug", skip(self))]
    pub fn is_complete(&self) -> bool {
        let Some(root) = self.root() else {
            return true;
        };

        let mut queue = VecDeque::from([Slot::Node(root)]);
        let mut seen_empty = false;
        while let Some(slot) = queue.pop_front() {
            match slot {
                Slot::Empty => seen_empty = true,
                Slot::Node(current) => {
                    if seen_empty {
                        trace!(?current, "node after gap");
                        return false;
                    }
                    if let Some(node) = self.get_node(current) {
                        queue.push_back(node.left.map_or(Slot::Empty, Slot::Node));
                        queue.push_back(node.right.map_or(Slot::Empty, Slot::Node));
                    }
                }
            }
        }
        true
    }

    /// Full tree: every node has zero or two children, never exactly one.
    #[instrument(level = "debug", skip(self))]
    pub fn is_regular(&self) -> bool {
        self.nodes().all(|(_, node)| node.child_count() != 1)
    }

    /// For every node the left and right subtree heights differ by at most one.
    #[instrument(level = "debug", skip(self))]
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, |root| self.balanced_height(root).1)
    }

    pub fn is_unbalanced(&self) -> bool {
        !self.is_balanced()
    }

    /// Bottom-up fold returning `(height, balanced)` for the subtree at `start`.
    ///
    /// Post-order with an explicit stack: each node is visited once, after
    /// both children have pushed their heights onto `heights`.
    fn balanced_height(&self, start: Index) -> (usize, bool) {
        let mut stack = vec![(start, false)];
        let mut heights: Vec<usize> = Vec::new();
        let mut balanced = true;

        while let Some((current, visited)) = stack.pop() {
            let Some(node) = self.get_node(current) else {
                continue;
            };
            if !visited {
                stack.push((current, true));
                stack.extend(node.right.map(|right| (right, false)));
                stack.extend(node.left.map(|left| (left, false)));
                continue;
            }
            // Left finished before right, so right's height is on top
            let right = if node.right.is_some() { heights.pop().unwrap_or(0) } else { 0 };
            let left = if node.left.is_some() { heights.pop().unwrap_or(0) } else { 0 };
            if left.abs_diff(right) > 1 {
                balanced = false;
            }
            heights.push(1 + left.max(right));
        }
        (heights.pop().unwrap_or(0), balanced)
    }

    /// Evaluates all shape predicates at once.
    #[instrument(level = "debug", skip(self))]
    pub fn classify(&self) -> Classification {
        Classification {
            perfect: self.is_perfect(),
            complete: self.is_complete(),
            regular: self.is_regular(),
            balanced: self.is_balanced(),
        }
    }

    fn nodes(&self) -> impl Iterator<Item = (Index, &Node<T>)> + '_ {
        let mut iter = self.iter_level_order();
        std::iter::from_fn(move || iter.next_node())
    }
}

/// Result of all shape predicates for one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub perfect: bool,
    pub complete: bool,
    pub regular: bool,
    pub balanced: bool,
}

impl Classification {
    /// Labels of the properties that hold, in fixed order.
    ///
    /// Exactly one of "Balanced" / "Unbalanced" is always present.
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::with_capacity(4);
        if self.perfect {
            labels.push("Perfect");
        }
        if self.complete {
            labels.push("Complete");
        }
        if self.regular {
            labels.push("Regular");
        }
        labels.push(if self.balanced { "Balanced" } else { "Unbalanced" });
        labels
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Side;

    #[test]
    fn test_six_nodes_is_complete_but_not_perfect() {
        let tree: BinaryTree<i32> = (1..=6).collect();
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.count_nodes(), 6);
        assert!(tree.is_complete());
        assert!(!tree.is_perfect());
        assert!(!tree.is_regular());
        assert!(tree.is_balanced());
        assert!(!tree.is_unbalanced());
    }

    #[test]
    fn test_seven_nodes_is_perfect() {
        let tree: BinaryTree<i32> = (0..7).rev().collect();
        let shape = tree.classify();
        assert_eq!(
            shape,
            Classification {
                perfect: true,
                complete: true,
                regular: true,
                balanced: true,
            }
        );
        assert_eq!(shape.labels(), vec!["Perfect", "Complete", "Regular", "Balanced"]);
    }

    #[test]
    fn test_empty_tree_is_vacuously_everything() {
        let tree: BinaryTree<i32> = BinaryTree::new();
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.count_nodes(), 0);
        assert!(tree.is_perfect());
        assert!(tree.is_complete());
        assert!(tree.is_regular());
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_subtree_queries() {
        let tree: BinaryTree<i32> = (1..=6).collect();
        let root = tree.root_node().unwrap();
        let left = root.left.unwrap();
        let right = root.right.unwrap();
        assert_eq!(tree.subtree_height(left), 2);
        assert_eq!(tree.subtree_count(left), 3);
        assert_eq!(tree.subtree_height(right), 2);
        assert_eq!(tree.subtree_count(right), 2);
    }

    #[test]
    fn test_two_nodes_is_not_regular() {
        let tree: BinaryTree<i32> = (1..=2).collect();
        assert!(!tree.is_regular());
        assert!(tree.is_complete());
        assert!(!tree.is_perfect());
        assert!(tree.is_balanced());
    }

    //   1
    //    \
    //     2
    #[test]
    fn test_gap_before_node_is_not_complete() {
        let mut tree: BinaryTree<i32> = std::iter::once(1).collect();
        let root = tree.root().unwrap();
        tree.attach(root, Side::Right, 2);
        assert!(!tree.is_complete());
        assert!(!tree.is_perfect());
        assert!(!tree.is_regular());
        assert!(tree.is_balanced());
    }

    //       1
    //      / \
    //     2   3
    //    /
    //   4
    //  /
    // 5
    #[test]
    fn test_unbalanced_root_over_unbalanced_subtree_is_detected() {
        let mut tree: BinaryTree<i32> = (1..=4).collect();
        let root = tree.root_node().unwrap();
        let two = root.left.unwrap();
        let four = tree.get_node(two).unwrap().left.unwrap();
        tree.attach(four, Side::Left, 5);

        assert!(tree.is_unbalanced());
        assert!(!tree.is_balanced());
        assert_eq!(tree.height(), 4);
        assert_eq!(tree.subtree_height(two), 3);
    }

    //         1
    //       /   \
    //      2     3
    //     /     /
    //    4     6
    //   /     /
    //  8     12
    #[test]
    fn test_unbalanced_subtree_under_even_root_is_detected() {
        let mut tree: BinaryTree<i32> = std::iter::once(1).collect();
        let root = tree.root().unwrap();
        let two = tree.attach(root, Side::Left, 2);
        let three = tree.attach(root, Side::Right, 3);
        let four = tree.attach(two, Side::Left, 4);
        tree.attach(four, Side::Left, 8);
        let six = tree.attach(three, Side::Left, 6);
        tree.attach(six, Side::Left, 12);

        assert_eq!(tree.subtree_height(two), tree.subtree_height(three));
        assert!(!tree.is_balanced());
        assert!(tree.is_unbalanced());
        assert!(!tree.is_complete());
        assert!(!tree.is_perfect());
        assert!(!tree.is_regular());
    }

    //     1
    //    / \
    //   2   3
    //    \
    //     5
    #[test]
    fn test_gap_on_second_level_is_not_complete() {
        let mut tree: BinaryTree<i32> = std::iter::once(1).collect();
        let root = tree.root().unwrap();
        let two = tree.attach(root, Side::Left, 2);
        tree.attach(root, Side::Right, 3);
        tree.attach(two, Side::Right, 5);

        assert!(!tree.is_complete());
        assert!(tree.is_balanced());
        assert_eq!(tree.height(), 3);
    }

    //     1
    //    / \
    //   2   3
    //  / \
    // 4   5
    #[test]
    fn test_full_tree_with_uneven_leaves_is_regular_not_perfect() {
        let tree: BinaryTree<i32> = (1..=5).collect();
        assert!(tree.is_regular());
        assert!(!tree.is_perfect());
        assert!(tree.is_complete());
    }

    #[test]
    fn test_labels_when_unbalanced() {
        let shape = Classification {
            perfect: false,
            complete: false,
            regular: true,
            balanced: false,
        };
        assert_eq!(shape.labels(), vec!["Regular", "Unbalanced"]);
        assert_eq!(shape.to_string(), "Regular, Unbalanced");
    }
}

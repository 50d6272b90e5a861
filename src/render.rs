use std::fmt::Display;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::arena::BinaryTree;

/// Placeholder shown for the empty sibling of an only child.
pub const EMPTY_SLOT: &str = "∅";

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeRender for BinaryTree<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let Some(root_idx) = self.root() else {
            return Tree::new("(empty)".to_string());
        };

        // Stack of (node, path of child positions from the root)
        let mut root = Tree::new(label(self, root_idx));
        let mut stack: Vec<(Index, Vec<usize>)> = vec![(root_idx, Vec::new())];

        while let Some((idx, path)) = stack.pop() {
            let Some(node) = self.get_node(idx) else {
                continue;
            };
            if node.is_leaf() {
                continue;
            }

            let parent = subtree_at(&mut root, &path);
            for (position, child) in [node.left, node.right].into_iter().enumerate() {
                match child {
                    Some(child_idx) => {
                        parent.push(Tree::new(label(self, child_idx)));
                        let mut child_path = path.clone();
                        child_path.push(position);
                        stack.push((child_idx, child_path));
                    }
                    None => {
                        parent.push(Tree::new(EMPTY_SLOT.to_string()));
                    }
                }
            }
        }
        root
    }
}

fn label<T: Display>(tree: &BinaryTree<T>, idx: Index) -> String {
    tree.get_node(idx)
        .map(|node| node.to_string())
        .unwrap_or_else(|| EMPTY_SLOT.to_string())
}

// Children of internal nodes are always pushed as a left/right pair, so the
// position along the path doubles as the index into `leaves`.
fn subtree_at<'a>(root: &'a mut Tree<String>, path: &[usize]) -> &'a mut Tree<String> {
    path.iter().fold(root, |tree, &position| &mut tree.leaves[position])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Side;

    #[test]
    fn test_render_empty_tree() {
        let tree: BinaryTree<i32> = BinaryTree::new();
        assert_eq!(tree.to_tree_string().root, "(empty)");
    }

    #[test]
    fn test_render_marks_missing_right_child() {
        let tree: BinaryTree<i32> = (1..=6).collect();
        let rendered = tree.to_tree_string();
        assert_eq!(rendered.root, "1");
        assert_eq!(rendered.leaves.len(), 2);

        let three = &rendered.leaves[1];
        assert_eq!(three.root, "3");
        let children: Vec<&str> = three.leaves.iter().map(|t| t.root.as_str()).collect();
        assert_eq!(children, vec!["6", EMPTY_SLOT]);

        let text = rendered.to_string();
        assert!(text.contains('4'));
        assert!(text.contains('5'));
    }

    #[test]
    fn test_render_marks_missing_left_child() {
        let mut tree: BinaryTree<i32> = std::iter::once(1).collect();
        let root = tree.root().unwrap();
        tree.attach(root, Side::Right, 2);

        let rendered = tree.to_tree_string();
        let children: Vec<&str> = rendered.leaves.iter().map(|t| t.root.as_str()).collect();
        assert_eq!(children, vec![EMPTY_SLOT, "2"]);
    }
}

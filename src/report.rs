//! Serializable summary of a level-order tree built from a value sequence.

use std::fmt::Display;

use clap::ValueEnum;
use itertools::Itertools;
use serde::Serialize;
use tracing::instrument;

use crate::arena::BinaryTree;
use crate::classify::Classification;
use crate::errors::{TreeError, TreeResult};
use crate::render::TreeRender;

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    In,
    Pre,
    Post,
    Level,
}

impl Order {
    pub fn name(&self) -> &'static str {
        match self {
            Order::In => "In-Order",
            Order::Pre => "Pre-Order",
            Order::Post => "Post-Order",
            Order::Level => "Level-Order",
        }
    }
}

impl<T: Clone> BinaryTree<T> {
    pub fn traverse(&self, order: Order) -> Vec<T> {
        match order {
            Order::In => self.inorder(),
            Order::Pre => self.preorder(),
            Order::Post => self.postorder(),
            Order::Level => self.level_order(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeReport<T> {
    pub values: Vec<T>,
    pub inorder: Vec<T>,
    pub preorder: Vec<T>,
    pub postorder: Vec<T>,
    pub level_order: Vec<T>,
    pub height: usize,
    pub count: usize,
    pub labels: Vec<&'static str>,
    pub classification: Classification,
}

impl<T: Clone> TreeReport<T> {
    /// Inserts `values` into a fresh tree in level order and summarizes it.
    #[instrument(level = "debug", skip(values))]
    pub fn from_values(values: &[T]) -> Self {
        let tree: BinaryTree<T> = values.iter().cloned().collect();
        Self::from_tree(values.to_vec(), &tree)
    }

    pub fn from_tree(values: Vec<T>, tree: &BinaryTree<T>) -> Self {
        let classification = tree.classify();
        Self {
            values,
            inorder: tree.inorder(),
            preorder: tree.preorder(),
            postorder: tree.postorder(),
            level_order: tree.level_order(),
            height: tree.height(),
            count: tree.count_nodes(),
            labels: classification.labels(),
            classification,
        }
    }
}

impl<T: Serialize> TreeReport<T> {
    pub fn to_toml(&self) -> TreeResult<String> {
        toml::to_string_pretty(self).map_err(|e| TreeError::Render(e.to_string()))
    }
}

/// Renders a value list the way the demo prints it: `[1, 2, 3]`.
pub fn format_values<T: Display>(values: &[T]) -> String {
    format!("[{}]", values.iter().join(", "))
}

/// Builds the tree for `values` and draws it.
pub fn draw<T: Display + Clone>(values: &[T]) -> String {
    let tree: BinaryTree<T> = values.iter().cloned().collect();
    tree.to_tree_string().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_six_values() {
        let report = TreeReport::from_values(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(report.inorder, vec![4, 2, 5, 1, 6, 3]);
        assert_eq!(report.level_order, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(report.height, 3);
        assert_eq!(report.count, 6);
        assert_eq!(report.labels, vec!["Complete", "Balanced"]);
    }

    #[test]
    fn test_report_to_toml() {
        let report = TreeReport::from_values(&[6, 5, 4, 3, 2, 1, 0]);
        let text = report.to_toml().unwrap();
        assert!(text.contains("height = 3"));
        assert!(text.contains("[classification]"));
        assert!(text.contains("perfect = true"));
    }

    #[test]
    fn test_format_values() {
        assert_eq!(format_values(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(format_values::<i32>(&[]), "[]");
    }

    #[test]
    fn test_traverse_dispatch() {
        let tree: BinaryTree<i32> = (1..=3).collect();
        assert_eq!(tree.traverse(Order::In), vec![2, 1, 3]);
        assert_eq!(tree.traverse(Order::Post), vec![2, 3, 1]);
    }
}

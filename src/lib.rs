//! Level-order binary tree.
//!
//! Values are inserted breadth-first into the first free child slot, so a
//! tree of `n` nodes always has the shape of a binary heap of size `n`.
//! The tree offers the four classical traversals and a set of shape
//! predicates (perfect, complete, regular, balanced).
//!
//! ```
//! use lotree::BinaryTree;
//!
//! let tree: BinaryTree<i32> = (1..=6).collect();
//! assert_eq!(tree.inorder(), vec![4, 2, 5, 1, 6, 3]);
//! assert!(tree.is_complete() && !tree.is_perfect());
//! ```

pub mod arena;
pub mod classify;
pub mod cli;
pub mod config;
pub mod demo;
pub mod errors;
pub mod exitcode;
pub mod render;
pub mod report;
pub mod traversal;
pub mod util;

pub use arena::{BinaryTree, Node};
pub use classify::Classification;
pub use errors::{TreeError, TreeResult};
pub use render::TreeRender;
pub use report::{Order, TreeReport};

mod avl_tree;
mod binary_search_tree;

pub use avl_tree::AvlTree;
pub use binary_search_tree::BinarySearchTree;

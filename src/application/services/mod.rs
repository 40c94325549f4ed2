//! Application services
//!
//! Services depend on the category source boundary trait
//! but are themselves concrete structs, not traits.

mod category_tree;

pub use category_tree::{build_category_tree, build_category_tree_with, CategoryTreeService};

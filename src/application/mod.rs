//! Application layer: orchestration and services
//!
//! This layer drives the domain pipeline from an injected category source.

pub mod error;
pub mod error_ext;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use services::{build_category_tree, build_category_tree_with, CategoryTreeService};

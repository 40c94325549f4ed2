//! Storefront navigation trees from raw upstream category listings.
//!
//! The pipeline is fetch → transform → sort:
//! [`domain::resolve_order`] derives sort keys from titles,
//! [`domain::should_show_on_home`] picks home-section categories,
//! [`domain::transform_categories`] reshapes raw records, and
//! [`application::build_category_tree`] drives it all from an injected
//! asynchronous fetch capability.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;

pub use application::{build_category_tree, build_category_tree_with, CategoryTreeService};
pub use domain::{
    resolve_order, should_show_on_home, sort_by_order, sort_tree, transform_categories,
    DisplayCategory, FetchResponse, HomeRules, RawCategory,
};

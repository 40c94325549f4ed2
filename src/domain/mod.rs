//! Domain layer: category entities and the pure transformation pipeline
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod home;
pub mod order;
pub mod transform;

pub use entities::{DisplayCategory, FetchResponse, RawCategory};
pub use home::{
    should_show_on_home, HomeRules, SHOW_ON_HOME_FALLBACK_LIMIT, SHOW_ON_HOME_LIMIT,
    SHOW_ON_HOME_MARKER,
};
pub use order::resolve_order;
pub use transform::{sort_by_order, sort_tree, transform_categories, CategoryTransformer};

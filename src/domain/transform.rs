//! Raw-to-display tree transformation and ordering.
//!
//! Mapping and sorting are separate steps: [`CategoryTransformer::map_level`]
//! keeps input order at every depth, [`sort_tree`] orders siblings by `order`
//! at every depth.

use tracing::debug;

use crate::domain::entities::{DisplayCategory, RawCategory};
use crate::domain::home::HomeRules;
use crate::domain::order::resolve_order;

/// Maps raw category listings to display records.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryTransformer {
    rules: HomeRules,
}

impl CategoryTransformer {
    pub fn new(rules: HomeRules) -> Self {
        Self { rules }
    }

    /// Map a sibling list depth-first without sorting anything.
    ///
    /// Children are only descended into when `has_children` is set; otherwise
    /// they are dropped even if present.
    pub fn map_level(&self, categories: &[RawCategory], is_top_level: bool) -> Vec<DisplayCategory> {
        let count = categories.len();
        categories
            .iter()
            .enumerate()
            .map(|(index, category)| DisplayCategory {
                id: category.id,
                name: category.name.clone(),
                image: category.meta_description.clone(),
                order: resolve_order(&category.title, category.id),
                show_on_home: self
                    .rules
                    .show_on_home(count, index, &category.title, is_top_level),
                children: if category.has_children {
                    self.map_level(&category.children, false)
                } else {
                    Vec::new()
                },
            })
            .collect()
    }

    /// Map a sibling list, keeping its order but sorting every nested level.
    pub fn transform(&self, categories: &[RawCategory], is_top_level: bool) -> Vec<DisplayCategory> {
        let mut mapped = self.map_level(categories, is_top_level);
        for category in &mut mapped {
            sort_tree(&mut category.children);
        }
        debug!(
            "transform: {} categories (top level: {})",
            mapped.len(),
            is_top_level
        );
        mapped
    }
}

/// [`CategoryTransformer::transform`] with the default home rules.
pub fn transform_categories(categories: &[RawCategory], is_top_level: bool) -> Vec<DisplayCategory> {
    CategoryTransformer::default().transform(categories, is_top_level)
}

/// Stable sort of one sibling list by `order`. Ties keep input order.
pub fn sort_by_order(categories: &mut [DisplayCategory]) {
    categories.sort_by_key(|category| category.order);
}

/// Sort siblings by `order` at every level of the tree.
pub fn sort_tree(categories: &mut [DisplayCategory]) {
    sort_by_order(categories);
    for category in categories.iter_mut() {
        sort_tree(&mut category.children);
    }
}

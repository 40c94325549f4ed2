//! Category tree service
//!
//! Fetches a raw listing once and turns it into a display tree sorted at every level.

use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{sort_tree, CategoryTransformer, DisplayCategory, FetchResponse, HomeRules};
use crate::infrastructure::traits::CategorySource;

/// Build the display tree from an injected fetch capability.
///
/// The capability is awaited exactly once. A response without data yields an
/// empty tree. Fetch errors are returned unchanged.
pub async fn build_category_tree<F, Fut, E>(fetch: F) -> Result<Vec<DisplayCategory>, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<FetchResponse, E>>,
{
    build_category_tree_with(HomeRules::default(), fetch).await
}

/// [`build_category_tree`] with explicit home rules.
pub async fn build_category_tree_with<F, Fut, E>(
    rules: HomeRules,
    fetch: F,
) -> Result<Vec<DisplayCategory>, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<FetchResponse, E>>,
{
    let response = fetch().await?;

    let Some(categories) = response.categories() else {
        debug!("build_category_tree: no data");
        return Ok(Vec::new());
    };

    let mut tree = CategoryTransformer::new(rules).map_level(categories, true);
    sort_tree(&mut tree);
    debug!("build_category_tree: {} top-level categories", tree.len());
    Ok(tree)
}

/// Builds category trees from a configured source.
pub struct CategoryTreeService {
    source: Arc<dyn CategorySource>,
    rules: HomeRules,
}

impl CategoryTreeService {
    /// Create a new service with default home rules.
    pub fn new(source: Arc<dyn CategorySource>) -> Self {
        Self::with_rules(source, HomeRules::default())
    }

    pub fn with_rules(source: Arc<dyn CategorySource>, rules: HomeRules) -> Self {
        Self { source, rules }
    }

    pub fn rules(&self) -> &HomeRules {
        &self.rules
    }

    /// Fetch from the source and build the sorted tree.
    pub async fn build(&self) -> ApplicationResult<Vec<DisplayCategory>> {
        let name = self.source.describe();
        debug!("build: source={}", name);
        build_category_tree_with(self.rules, || self.source.fetch())
            .await
            .with_source_context(&name)
    }

    /// Top-level categories promoted to the home section, in display order.
    pub async fn home_categories(&self) -> ApplicationResult<Vec<DisplayCategory>> {
        let tree = self.build().await?;
        Ok(tree.into_iter().filter(|c| c.show_on_home).collect())
    }
}

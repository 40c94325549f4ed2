//! Error conversion helpers for category source results
//!
//! Provides extension traits for cleaner error handling with source context.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Attribute an I/O failure to the named category source.
    ///
    /// # Example
    /// ```ignore
    /// source.fetch().await.with_source_context(&source.describe())?;
    /// ```
    fn with_source_context(self, source: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_source_context(self, source: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::Fetch {
            context: format!("read categories from {}", source),
            source: Box::new(e),
        })
    }
}

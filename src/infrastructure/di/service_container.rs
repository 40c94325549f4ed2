//! Service container for dependency injection
//!
//! Wires the category tree service to its source and settings.

use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::CategoryTreeService;
use crate::config::Settings;
use crate::infrastructure::traits::{CategorySource, JsonFileSource};
use crate::infrastructure::{InfraError, InfraResult};

/// Container holding settings and building services on demand.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,
}

impl ServiceContainer {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Resolve the category source: explicit input wins over `settings.source`.
    ///
    /// `-` selects stdin. File inputs must exist.
    pub fn source_for(&self, input: Option<&Path>) -> InfraResult<Arc<dyn CategorySource>> {
        let path = input
            .or(self.settings.source.as_deref())
            .ok_or(InfraError::NoInput)?;
        let source = JsonFileSource::new(path);
        debug!("source_for: {}", source.describe());

        if !source.is_stdin() {
            match std::fs::metadata(path) {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => {
                    return Err(InfraError::io(
                        format!("not a file: {}", path.display()),
                        io::Error::new(io::ErrorKind::InvalidInput, "expected a JSON file"),
                    ))
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Err(InfraError::InputNotFound(path.to_path_buf()))
                }
                Err(e) => return Err(InfraError::io(format!("stat {}", path.display()), e)),
            }
        }

        Ok(Arc::new(source))
    }

    /// Tree service over the resolved source, using the configured home rules.
    pub fn tree_service(&self, input: Option<&Path>) -> InfraResult<CategoryTreeService> {
        let source = self.source_for(input)?;
        Ok(Self::tree_service_with(source, &self.settings))
    }

    /// Tree service over a custom source (for testing).
    pub fn tree_service_with(
        source: Arc<dyn CategorySource>,
        settings: &Settings,
    ) -> CategoryTreeService {
        CategoryTreeService::with_rules(source, settings.home)
    }
}

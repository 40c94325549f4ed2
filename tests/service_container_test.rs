//! Tests for ServiceContainer source resolution

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use navtree::config::Settings;
use navtree::domain::{HomeRules, RawCategory};
use navtree::infrastructure::di::ServiceContainer;
use navtree::infrastructure::traits::{CategorySource, StaticSource};
use navtree::infrastructure::InfraError;

fn write_listing(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write listing");
    path
}

#[test]
fn given_no_input_and_no_configured_source_when_resolving_then_errors() {
    // Arrange
    let container = ServiceContainer::new(Settings::default());

    // Act
    let result = container.source_for(None);

    // Assert
    assert!(matches!(result, Err(InfraError::NoInput)));
}

#[test]
fn given_missing_file_when_resolving_then_reports_input_not_found() {
    // Arrange
    let container = ServiceContainer::new(Settings::default());

    // Act
    let result = container.source_for(Some(Path::new("/nonexistent/listing.json")));

    // Assert
    assert!(matches!(result, Err(InfraError::InputNotFound(_))));
}

#[test]
fn given_directory_when_resolving_then_reports_io_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let container = ServiceContainer::new(Settings::default());

    // Act
    let result = container.source_for(Some(temp.path()));

    // Assert
    assert!(matches!(result, Err(InfraError::Io { .. })));
}

#[test]
fn given_stdin_marker_when_resolving_then_accepts_without_stat() {
    // Arrange
    let container = ServiceContainer::new(Settings::default());

    // Act
    let source = container.source_for(Some(Path::new("-"))).unwrap();

    // Assert
    assert_eq!(source.describe(), "stdin");
}

#[tokio::test]
async fn given_configured_source_when_no_input_then_uses_settings_source() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let listing = write_listing(&temp, "listing.json", r#"[{"id": 2, "name": "b", "Title": "9"}]"#);
    let settings = Settings {
        source: Some(listing),
        ..Settings::default()
    };
    let container = ServiceContainer::new(settings);

    // Act
    let tree = container.tree_service(None).unwrap().build().await.unwrap();

    // Assert
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].order, 9);
}

#[tokio::test]
async fn given_configured_home_rules_when_building_then_service_uses_them() {
    // Arrange
    let settings = Settings {
        home: HomeRules {
            limit: 0,
            marker: '#',
            fallback_limit: 1,
        },
        ..Settings::default()
    };
    let source = Arc::new(StaticSource::from_categories(vec![
        RawCategory::new(1, "first"),
        RawCategory::new(2, "second"),
    ]));

    // Act
    let service = ServiceContainer::tree_service_with(source, &settings);
    let tree = service.build().await.unwrap();

    // Assert
    assert_eq!(service.rules().fallback_limit, 1);
    assert!(tree[0].show_on_home);
    assert!(!tree[1].show_on_home);
}

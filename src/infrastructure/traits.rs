//! I/O boundary traits for testability
//!
//! The category source abstracts where raw listings come from, allowing the
//! tree service to be tested with in-memory implementations.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncReadExt;

use crate::domain::{FetchResponse, RawCategory};

/// Asynchronous supplier of raw category listings.
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Fetch the full raw listing once.
    async fn fetch(&self) -> io::Result<FetchResponse>;

    /// Human readable origin, used in error messages.
    fn describe(&self) -> String;
}

/// Decode a fetch payload.
///
/// Accepts either `{ "data": [...] }` (with `data` possibly absent or null)
/// or a bare array of categories.
pub fn parse_payload(content: &str) -> io::Result<FetchResponse> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(invalid_data)?;
    if value.is_array() {
        let data: Vec<RawCategory> = serde_json::from_value(value).map_err(invalid_data)?;
        Ok(FetchResponse::new(data))
    } else {
        serde_json::from_value(value).map_err(invalid_data)
    }
}

fn invalid_data(e: serde_json::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Reads a JSON payload from a file, or from stdin when the path is `-`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn is_stdin(&self) -> bool {
        self.path == Path::new("-")
    }
}

#[async_trait]
impl CategorySource for JsonFileSource {
    async fn fetch(&self) -> io::Result<FetchResponse> {
        let content = if self.is_stdin() {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        } else {
            tokio::fs::read_to_string(&self.path).await?
        };
        parse_payload(&content)
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }
}

/// In-memory source returning a fixed response.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    response: FetchResponse,
}

impl StaticSource {
    pub fn new(response: FetchResponse) -> Self {
        Self { response }
    }

    pub fn from_categories(categories: Vec<RawCategory>) -> Self {
        Self::new(FetchResponse::new(categories))
    }
}

#[async_trait]
impl CategorySource for StaticSource {
    async fn fetch(&self) -> io::Result<FetchResponse> {
        Ok(self.response.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_object_and_array() {
        let object = parse_payload(r#"{"data":[{"id":1,"name":"a"}]}"#).unwrap();
        let array = parse_payload(r#"[{"id":1,"name":"a"}]"#).unwrap();

        assert_eq!(object, array);
    }

    #[test]
    fn test_parse_payload_null_or_missing_data() {
        assert_eq!(parse_payload(r#"{"data":null}"#).unwrap(), FetchResponse::empty());
        assert_eq!(parse_payload("{}").unwrap(), FetchResponse::empty());
    }

    #[test]
    fn test_parse_payload_rejects_garbage() {
        let err = parse_payload("not json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn test_static_source_returns_its_response() {
        let source = StaticSource::from_categories(vec![RawCategory::new(1, "a")]);

        let response = source.fetch().await.unwrap();

        assert_eq!(response.data.map(|d| d.len()), Some(1));
        assert_eq!(source.describe(), "memory");
    }
}

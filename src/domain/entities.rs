//! Domain entities: core data structures
//!
//! The upstream listing overloads two text fields: `Title` carries an optional
//! numeric ordering hint and `MetaTagDescription` carries an image reference.
//! Raw records keep the upstream names; display records expose the derived
//! meaning as `order` and `image`.

use serde::{Deserialize, Deserializer, Serialize};

/// Category record as supplied by the upstream source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategory {
    /// Identifier, unique among siblings only
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Whether `children` should be considered at all
    #[serde(
        rename = "hasChildren",
        alias = "has_children",
        default,
        deserialize_with = "null_as_default"
    )]
    pub has_children: bool,
    /// Free text, may start with a decimal ordering hint and contain the home marker
    #[serde(
        rename = "Title",
        alias = "title",
        default,
        deserialize_with = "null_as_default"
    )]
    pub title: String,
    /// Free text, used as the image reference
    #[serde(
        rename = "MetaTagDescription",
        alias = "metaDescription",
        default,
        deserialize_with = "null_as_default"
    )]
    pub meta_description: String,
    /// Upstream link; not carried into the display tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<RawCategory>,
}

impl RawCategory {
    /// Leaf category without children.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_image(mut self, meta_description: impl Into<String>) -> Self {
        self.meta_description = meta_description.into();
        self
    }

    /// Attach children and mark the record as having them.
    pub fn with_children(mut self, children: Vec<RawCategory>) -> Self {
        self.has_children = true;
        self.children = children;
        self
    }
}

/// Normalized category consumed by the navigation UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayCategory {
    pub id: i64,
    pub name: String,
    /// Copied from the raw `MetaTagDescription`
    pub image: String,
    /// Sibling sort key, not unique
    pub order: i64,
    /// Always false below the top level
    pub show_on_home: bool,
    pub children: Vec<DisplayCategory>,
}

/// Result of one fetch from a category source.
///
/// `data: None` and `data: Some(vec![])` both mean "no categories".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResponse {
    #[serde(default)]
    pub data: Option<Vec<RawCategory>>,
}

impl FetchResponse {
    pub fn new(data: Vec<RawCategory>) -> Self {
        Self { data: Some(data) }
    }

    pub fn empty() -> Self {
        Self { data: None }
    }

    /// Categories if any were delivered.
    pub fn categories(&self) -> Option<&[RawCategory]> {
        self.data.as_deref().filter(|data| !data.is_empty())
    }
}

/// Decode JSON `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

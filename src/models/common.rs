//! Common types shared across all models.

use serde::{Deserialize, Serialize};

/// Size variants Last.fm serves images in, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
    Mega,
}

impl ImageSize {
    /// All sizes in ascending order.
    pub const ALL: [ImageSize; 5] = [
        ImageSize::Small,
        ImageSize::Medium,
        ImageSize::Large,
        ImageSize::ExtraLarge,
        ImageSize::Mega,
    ];

    /// Name used by the API in the `size` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Small => "small",
            ImageSize::Medium => "medium",
            ImageSize::Large => "large",
            ImageSize::ExtraLarge => "extralarge",
            ImageSize::Mega => "mega",
        }
    }

    /// Look up a size by its API name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == name)
    }
}

/// Image URLs for one entity, one optional URL per size.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extralarge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mega: Option<String>,
}

impl Image {
    /// URL for `size`, if present.
    pub fn get(&self, size: ImageSize) -> Option<&str> {
        match size {
            ImageSize::Small => self.small.as_deref(),
            ImageSize::Medium => self.medium.as_deref(),
            ImageSize::Large => self.large.as_deref(),
            ImageSize::ExtraLarge => self.extralarge.as_deref(),
            ImageSize::Mega => self.mega.as_deref(),
        }
    }

    /// Set the URL for `size`.
    pub fn set(&mut self, size: ImageSize, url: Option<String>) {
        let slot = match size {
            ImageSize::Small => &mut self.small,
            ImageSize::Medium => &mut self.medium,
            ImageSize::Large => &mut self.large,
            ImageSize::ExtraLarge => &mut self.extralarge,
            ImageSize::Mega => &mut self.mega,
        };
        *slot = url;
    }

    /// Sizes that have a URL, smallest first.
    pub fn available_sizes(&self) -> Vec<ImageSize> {
        ImageSize::ALL
            .into_iter()
            .filter(|size| self.get(*size).is_some())
            .collect()
    }

    /// URL of the largest available size.
    pub fn largest(&self) -> Option<&str> {
        ImageSize::ALL
            .into_iter()
            .rev()
            .find_map(|size| self.get(size))
    }

    /// Whether no size has a URL.
    pub fn is_empty(&self) -> bool {
        self.available_sizes().is_empty()
    }
}

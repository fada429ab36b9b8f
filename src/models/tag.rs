//! Tag model.

use serde::{Deserialize, Serialize};

/// A folksonomy tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Number of times the tag was applied.
    pub count: Option<u64>,

    /// Tag name.
    pub name: Option<String>,

    /// Last.fm page of the tag.
    pub url: Option<String>,
}

impl_merge!(Tag { count, name, url });

//! Artist model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::Image;
use super::tag::Tag;

/// An artist record.
///
/// `streamable`, `bio` and `stats` are kept as the raw JSON the API sent,
/// since their shape varies between methods.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// MusicBrainz identifier.
    pub mbid: Option<String>,

    /// Artist name.
    pub name: Option<String>,

    /// Last.fm page of the artist.
    pub url: Option<String>,

    /// Total scrobbles (or the user's scrobbles, for per-user charts).
    pub playcount: Option<u64>,

    /// Artist images.
    pub image: Option<Image>,

    pub streamable: Option<Value>,

    /// Biography (`summary`, `content`, `published`, ...).
    pub bio: Option<Value>,

    /// `"1"` when the artist is on tour.
    pub ontour: Option<String>,

    /// Listener and play statistics.
    pub stats: Option<Value>,

    /// Top tags.
    pub tags: Option<Vec<Tag>>,
}

impl_merge!(Artist {
    mbid,
    name,
    url,
    playcount,
    image,
    streamable,
    bio,
    ontour,
    stats,
    tags,
});

impl Artist {
    /// Create an artist with just a name.
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Whether the API reports the artist as touring.
    pub fn is_on_tour(&self) -> bool {
        self.ontour.as_deref() == Some("1")
    }

    /// Biography summary, if the response carried one.
    pub fn bio_summary(&self) -> Option<&str> {
        self.bio.as_ref()?.get("summary")?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Merge;
    use serde_json::json;

    #[test]
    fn test_artist_named() {
        let artist = Artist::named("Radiohead");
        assert_eq!(artist.name.as_deref(), Some("Radiohead"));
        assert!(artist.mbid.is_none());
    }

    #[test]
    fn test_on_tour_flag() {
        let mut artist = Artist::named("Radiohead");
        assert!(!artist.is_on_tour());
        artist.ontour = Some("1".to_string());
        assert!(artist.is_on_tour());
    }

    #[test]
    fn test_bio_summary() {
        let artist = Artist {
            bio: Some(json!({"summary": "English rock band", "content": "..."})),
            ..Default::default()
        };
        assert_eq!(artist.bio_summary(), Some("English rock band"));
    }

    #[test]
    fn test_merge_keeps_existing_values() {
        let mut artist = Artist {
            name: Some("Radiohead".to_string()),
            playcount: Some(10),
            ..Default::default()
        };
        let other = Artist {
            name: Some("Muse".to_string()),
            playcount: Some(99),
            mbid: Some("a74b1b7f".to_string()),
            ..Default::default()
        };

        artist.merge(&other);
        assert_eq!(artist.name.as_deref(), Some("Radiohead"));
        assert_eq!(artist.playcount, Some(10));
        assert_eq!(artist.mbid.as_deref(), Some("a74b1b7f"));
    }
}

//! Album model.

use serde::{Deserialize, Serialize};

use super::common::Image;
use super::tag::Tag;
use super::track::Track;

/// An album record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// Cover images.
    pub image: Option<Image>,

    /// Name of the album artist.
    pub artist: Option<String>,

    /// MusicBrainz identifier.
    pub mbid: Option<String>,

    /// Album title.
    pub name: Option<String>,

    /// Total plays across all listeners.
    pub playcount: Option<u64>,

    /// Last.fm page of the album.
    pub url: Option<String>,

    /// Top tags.
    pub tags: Option<Vec<Tag>>,

    /// Number of distinct listeners.
    pub listeners: Option<u64>,

    /// Track list, in album order.
    pub tracks: Option<Vec<Track>>,
}

impl_merge!(Album {
    image,
    artist,
    mbid,
    name,
    playcount,
    url,
    tags,
    listeners,
    tracks,
});

impl Album {
    /// Number of tracks in the track list, if one was sent.
    pub fn track_count(&self) -> Option<usize> {
        self.tracks.as_ref().map(Vec::len)
    }

    /// Tag names, most popular first as sent by the API.
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags
            .iter()
            .flatten()
            .filter_map(|tag| tag.name.as_deref())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_count() {
        let album = Album {
            tracks: Some(vec![Track::default(), Track::default()]),
            ..Default::default()
        };
        assert_eq!(album.track_count(), Some(2));
        assert_eq!(Album::default().track_count(), None);
    }

    #[test]
    fn test_tag_names_skip_unnamed() {
        let album = Album {
            tags: Some(vec![
                Tag {
                    name: Some("trip-hop".to_string()),
                    ..Default::default()
                },
                Tag::default(),
                Tag {
                    name: Some("electronic".to_string()),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };
        assert_eq!(album.tag_names(), vec!["trip-hop", "electronic"]);
    }
}

//! Track model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::album::Album;
use super::artist::Artist;
use super::common::Image;

/// A track record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// When the track was scrobbled or loved, in seconds since the Unix epoch.
    pub date: Option<i64>,

    /// Streamability flag, kept as sent (`"0"`, or `{"#text": .., "fulltrack": ..}`).
    pub streamable: Option<Value>,

    /// Performing artist.
    pub artist: Option<Artist>,

    /// Cover images.
    pub image: Option<Image>,

    /// MusicBrainz identifier.
    pub mbid: Option<String>,

    /// Track title.
    pub name: Option<String>,

    /// Total plays across all listeners.
    pub playcount: Option<u64>,

    /// Last.fm page of the track.
    pub url: Option<String>,

    /// Number of distinct listeners.
    pub listeners: Option<u64>,

    /// Duration as reported by the API (milliseconds for `track.getInfo`,
    /// seconds inside album track lists).
    pub duration: Option<u64>,

    /// Album the track appears on.
    pub album: Option<Album>,
}

impl_merge!(Track {
    date,
    streamable,
    artist,
    image,
    mbid,
    name,
    playcount,
    url,
    listeners,
    duration,
    album,
});

impl Track {
    /// Scrobble time as a UTC timestamp.
    pub fn date_at(&self) -> Option<DateTime<Utc>> {
        self.date.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Name of the performing artist.
    pub fn artist_name(&self) -> Option<&str> {
        self.artist.as_ref()?.name.as_deref()
    }
}

//! `Track.*` API methods.

use super::artist::ArtistQueries;
use super::queries::{ApiContext, Namespace, Queries, Refined};
use crate::error::Result;
use crate::models::{Tag, Track};

/// Queries about one track, identified by title and artist name.
#[derive(Debug, Clone)]
pub struct TrackQueries {
    track: String,
    artist: String,
    queries: Queries,
}

impl TrackQueries {
    pub fn new(track: &str, artist: &str, context: &ApiContext) -> Self {
        Self {
            track: track.to_string(),
            artist: artist.to_string(),
            queries: Queries::new(
                Namespace::Track,
                context,
                &[("track", track), ("artist", artist)],
            ),
        }
    }

    pub fn track(&self) -> &str {
        &self.track
    }

    pub fn artist_name(&self) -> &str {
        &self.artist
    }

    /// Queries about the track's artist, sharing this object's rate limiter.
    pub fn artist(&self) -> ArtistQueries {
        ArtistQueries::new(&self.artist, self.queries.context())
    }

    pub fn queries(&self) -> &Queries {
        &self.queries
    }

    /// `Track.getInfo`
    pub async fn fetch_info(&self, limit: Option<u32>) -> Result<Refined<Track>> {
        self.queries.refined_query("getInfo", &["track"], limit).await
    }

    /// `Track.getSimilar`
    pub async fn fetch_similar(&self, limit: Option<u32>) -> Result<Refined<Track>> {
        self.queries
            .refined_query("getSimilar", &["similartracks", "track"], limit)
            .await
    }

    /// `Track.getTopTags`
    pub async fn fetch_tags(&self, limit: Option<u32>) -> Result<Refined<Tag>> {
        self.queries
            .refined_query("getTopTags", &["toptags", "tag"], limit)
            .await
    }
}

//! `Artist.*` API methods.

use super::queries::{ApiContext, Namespace, Queries, Refined};
use crate::error::Result;
use crate::models::{Album, Artist, Tag, Track};

/// Queries about one artist, identified by name.
#[derive(Debug, Clone)]
pub struct ArtistQueries {
    artist: String,
    queries: Queries,
}

impl ArtistQueries {
    pub fn new(artist: &str, context: &ApiContext) -> Self {
        Self {
            artist: artist.to_string(),
            queries: Queries::new(Namespace::Artist, context, &[("artist", artist)]),
        }
    }

    /// Artist name the queries are about.
    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn queries(&self) -> &Queries {
        &self.queries
    }

    /// `Artist.getInfo`
    pub async fn fetch_info(&self, limit: Option<u32>) -> Result<Refined<Artist>> {
        self.queries.refined_query("getInfo", &["artist"], limit).await
    }

    /// `Artist.getSimilar`
    pub async fn fetch_similar(&self, limit: Option<u32>) -> Result<Refined<Artist>> {
        self.queries
            .refined_query("getSimilar", &["similarartists", "artist"], limit)
            .await
    }

    /// `Artist.getTopAlbums`
    pub async fn fetch_albums(&self, limit: Option<u32>) -> Result<Refined<Album>> {
        self.queries
            .refined_query("getTopAlbums", &["topalbums", "album"], limit)
            .await
    }

    /// `Artist.getTopTags`
    pub async fn fetch_tags(&self, limit: Option<u32>) -> Result<Refined<Tag>> {
        self.queries
            .refined_query("getTopTags", &["toptags", "tag"], limit)
            .await
    }

    /// `Artist.getTopTracks`
    pub async fn fetch_tracks(&self, limit: Option<u32>) -> Result<Refined<Track>> {
        self.queries
            .refined_query("getTopTracks", &["toptracks", "track"], limit)
            .await
    }
}

//! `Album.*` API methods.

use super::artist::ArtistQueries;
use super::queries::{ApiContext, Namespace, Queries, Refined};
use crate::error::Result;
use crate::models::{Album, Tag};

/// Queries about one album, identified by title and artist name.
#[derive(Debug, Clone)]
pub struct AlbumQueries {
    album: String,
    artist: String,
    queries: Queries,
}

impl AlbumQueries {
    pub fn new(album: &str, artist: &str, context: &ApiContext) -> Self {
        Self {
            album: album.to_string(),
            artist: artist.to_string(),
            queries: Queries::new(
                Namespace::Album,
                context,
                &[("album", album), ("artist", artist)],
            ),
        }
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn artist_name(&self) -> &str {
        &self.artist
    }

    /// Queries about the album's artist, sharing this object's rate limiter.
    pub fn artist(&self) -> ArtistQueries {
        ArtistQueries::new(&self.artist, self.queries.context())
    }

    pub fn queries(&self) -> &Queries {
        &self.queries
    }

    /// `Album.getInfo`
    pub async fn fetch_info(&self, limit: Option<u32>) -> Result<Refined<Album>> {
        self.queries.refined_query("getInfo", &["album"], limit).await
    }

    /// `Album.getTopTags`
    pub async fn fetch_tags(&self, limit: Option<u32>) -> Result<Refined<Tag>> {
        self.queries
            .refined_query("getTopTags", &["toptags", "tag"], limit)
            .await
    }
}

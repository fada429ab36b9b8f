//! `User.*` API methods.

use serde_json::Value;

use super::queries::{ApiContext, Namespace, Queries, Refined};
use crate::error::Result;
use crate::models::{Album, Artist, Tag, Track, User};

/// Queries about one Last.fm user.
///
/// Every `fetch_*` method takes an optional `limit`; `None` asks for a
/// single record.
#[derive(Debug, Clone)]
pub struct UserQueries {
    username: String,
    queries: Queries,
}

impl UserQueries {
    /// Queries scoped to `username`, sharing `context`'s rate limiter.
    pub fn new(username: &str, context: &ApiContext) -> Self {
        Self {
            username: username.to_string(),
            queries: Queries::new(Namespace::User, context, &[("username", username)]),
        }
    }

    /// Username the queries are about.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Underlying query base, for methods without a typed wrapper.
    pub fn queries(&self) -> &Queries {
        &self.queries
    }

    /// `User.getFriends`
    pub async fn fetch_friends(&self, limit: Option<u32>) -> Result<Refined<User>> {
        self.queries
            .refined_query("getFriends", &["friends", "user"], limit)
            .await
    }

    /// `User.getInfo`
    pub async fn fetch_info(&self, limit: Option<u32>) -> Result<Refined<User>> {
        self.queries.refined_query("getInfo", &["user"], limit).await
    }

    /// `User.getLovedTracks`
    pub async fn fetch_loved_tracks(&self, limit: Option<u32>) -> Result<Refined<Track>> {
        self.queries
            .refined_query("getLovedTracks", &["lovedtracks", "track"], limit)
            .await
    }

    /// `User.getRecentTracks`
    pub async fn fetch_recent_tracks(&self, limit: Option<u32>) -> Result<Refined<Track>> {
        self.queries
            .refined_query("getRecentTracks", &["recenttracks", "track"], limit)
            .await
    }

    /// `User.getTopAlbums`
    pub async fn fetch_albums(&self, limit: Option<u32>) -> Result<Refined<Album>> {
        self.queries
            .refined_query("getTopAlbums", &["topalbums", "album"], limit)
            .await
    }

    /// `User.getTopArtists`
    pub async fn fetch_artists(&self, limit: Option<u32>) -> Result<Refined<Artist>> {
        self.queries
            .refined_query("getTopArtists", &["topartists", "artist"], limit)
            .await
    }

    /// `User.getTopTags`
    pub async fn fetch_tags(&self, limit: Option<u32>) -> Result<Refined<Tag>> {
        self.queries
            .refined_query("getTopTags", &["toptags", "tag"], limit)
            .await
    }

    /// `User.getTopTracks`
    pub async fn fetch_tracks(&self, limit: Option<u32>) -> Result<Refined<Track>> {
        self.queries
            .refined_query("getTopTracks", &["toptracks", "track"], limit)
            .await
    }

    /// `User.getWeeklyAlbumChart`
    pub async fn fetch_weekly_albums(&self, limit: Option<u32>) -> Result<Refined<Album>> {
        self.queries
            .refined_query("getWeeklyAlbumChart", &["weeklyalbumchart", "album"], limit)
            .await
    }

    /// `User.getWeeklyArtistChart`
    pub async fn fetch_weekly_artists(&self, limit: Option<u32>) -> Result<Refined<Artist>> {
        self.queries
            .refined_query("getWeeklyArtistChart", &["weeklyartistchart", "artist"], limit)
            .await
    }

    /// `User.getWeeklyTrackChart`
    pub async fn fetch_weekly_tracks(&self, limit: Option<u32>) -> Result<Refined<Track>> {
        self.queries
            .refined_query("getWeeklyTrackChart", &["weeklytrackchart", "track"], limit)
            .await
    }

    /// `User.getWeeklyChartList`, returned as raw JSON.
    pub async fn fetch_weekly_charts(&self) -> Result<Value> {
        self.queries.query("getWeeklyChartList", None).await
    }
}

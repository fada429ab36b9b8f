//! Top-level entry point handing out per-entity query objects.

use std::sync::Arc;

use crate::api::{AlbumQueries, ApiContext, ArtistQueries, Requestor, TrackQueries, UserQueries};
use crate::config::ClientConfig;
use crate::error::{LastfmError, Result};

/// Last.fm API facade.
///
/// Owns one requestor, and therefore one rate limiter, which every query
/// object created here shares.
///
/// # Example
///
/// ```rust,no_run
/// use lastfm::LastFm;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let lastfm = LastFm::new("your_api_key")?;
///
///     let albums = lastfm.user("rj").fetch_albums(Some(5)).await?;
///     for album in albums.iter() {
///         println!("{:?} ({:?} plays)", album.name, album.playcount);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LastFm {
    context: ApiContext,
}

impl LastFm {
    /// Create a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` if `api_key` is empty.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    pub fn with_config(api_key: &str, config: ClientConfig) -> Result<Self> {
        if api_key.is_empty() {
            return Err(LastfmError::MissingApiKey);
        }

        let requestor = Arc::new(Requestor::new(&config)?);
        Ok(Self {
            context: ApiContext::new(config.query_base(), api_key, requestor),
        })
    }

    /// Queries about a user.
    pub fn user(&self, username: &str) -> UserQueries {
        UserQueries::new(username, &self.context)
    }

    /// Queries about an artist.
    pub fn artist(&self, artist: &str) -> ArtistQueries {
        ArtistQueries::new(artist, &self.context)
    }

    /// Queries about an album by `artist`.
    pub fn album(&self, album: &str, artist: &str) -> AlbumQueries {
        AlbumQueries::new(album, artist, &self.context)
    }

    /// Queries about a track by `artist`.
    pub fn track(&self, track: &str, artist: &str) -> TrackQueries {
        TrackQueries::new(track, artist, &self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lastfm() -> LastFm {
        LastFm::with_config("KEY", ClientConfig::default().with_api_url("http://localhost/2.0/"))
            .unwrap()
    }

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(matches!(LastFm::new(""), Err(LastfmError::MissingApiKey)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let debug = format!("{:?}", LastFm::new("secret_key").unwrap());
        assert!(!debug.contains("secret_key"));
    }

    #[test]
    fn test_user_url() {
        let user = lastfm().user("rj");
        assert_eq!(user.username(), "rj");
        assert_eq!(
            user.queries().api_url().as_str(),
            "http://localhost/2.0/?&api_key=KEY&format=json&username=rj"
        );
    }

    #[test]
    fn test_album_url_order() {
        let album = lastfm().album("Dummy", "Portishead");
        assert!(album
            .queries()
            .api_url()
            .as_str()
            .ends_with("&format=json&album=Dummy&artist=Portishead"));
    }

    #[test]
    fn test_track_url_order() {
        let track = lastfm().track("Roads", "Portishead");
        assert!(track
            .queries()
            .api_url()
            .as_str()
            .ends_with("&format=json&track=Roads&artist=Portishead"));
    }

    #[test]
    fn test_album_artist_accessor() {
        let artist = lastfm().album("Dummy", "Portishead").artist();
        assert_eq!(artist.artist(), "Portishead");
        assert!(artist
            .queries()
            .method_url("getInfo", None)
            .as_str()
            .ends_with("&artist=Portishead&method=Artist.getInfo&limit=1"));
    }

    #[test]
    fn test_query_objects_share_requestor() {
        let lastfm = lastfm();
        let user = lastfm.user("rj");
        let track = lastfm.track("Roads", "Portishead");
        assert!(Arc::ptr_eq(
            user.queries().context().requestor(),
            track.artist().queries().context().requestor(),
        ));
    }
}

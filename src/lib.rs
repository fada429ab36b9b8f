//! # lastfm
//!
//! An async client for the Last.fm web API that maps responses into typed
//! user, artist, album, track and tag records.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lastfm::LastFm;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let lastfm = LastFm::new("your_api_key")?;
//!
//!     // One record comes back as `Refined::One`
//!     let info = lastfm.artist("Radiohead").fetch_info(None).await?;
//!     if let Some(artist) = info.into_single() {
//!         println!("{:?}: {:?}", artist.name, artist.bio_summary());
//!     }
//!
//!     // Several come back as `Refined::Many`
//!     let recent = lastfm.user("rj").fetch_recent_tracks(Some(10)).await?;
//!     for track in recent.iter() {
//!         println!("{:?} - {:?}", track.artist_name(), track.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Behaviour worth knowing
//!
//! - All query objects from one [`LastFm`] share a single rate limiter
//!   (200 ms between calls by default).
//! - Any HTTP status other than `200` is an error; nothing is retried.
//! - Fields the API sends as `0`, `""` or `null` are left as `None`.
//!
//! ## Low-Level APIs
//!
//! - [`api::Queries`] - raw and refined queries for any method
//! - [`api::Requestor`] / [`api::RateLimiter`] - the HTTP layer
//! - [`converters`] - JSON field extraction

pub mod api;
mod client;
pub mod config;
pub mod converters;
pub mod error;
pub mod models;

// Main interface (recommended)
pub use client::LastFm;

pub use api::{AlbumQueries, ArtistQueries, Refined, TrackQueries, UserQueries};
pub use config::ClientConfig;
pub use error::{LastfmError, Result};
pub use models::{Album, Artist, Image, ImageSize, Merge, Tag, Track, User};

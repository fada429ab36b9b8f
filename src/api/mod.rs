//! Request pipeline for the Last.fm web API.
//!
//! - [`QueryUrl`]: immutable query-string builder
//! - [`RateLimiter`] and [`Requestor`]: spaced, single-shot HTTP GETs
//! - [`Queries`]: URL + requestor, raw and refined queries
//! - [`UserQueries`], [`ArtistQueries`], [`AlbumQueries`], [`TrackQueries`]:
//!   per-entity fetch operations

pub mod album;
pub mod artist;
pub mod queries;
pub mod rate_limit;
pub mod requestor;
pub mod track;
pub mod url;
pub mod user;

pub use album::AlbumQueries;
pub use artist::ArtistQueries;
pub use queries::{refine, ApiContext, Namespace, Queries, Refined, DEFAULT_LIMIT};
pub use rate_limit::RateLimiter;
pub use requestor::Requestor;
pub use track::TrackQueries;
pub use url::QueryUrl;
pub use user::UserQueries;

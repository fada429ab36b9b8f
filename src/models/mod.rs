//! Data models for Last.fm API responses.
//!
//! Every field is optional: a value that is missing from the response, or
//! that the API sends as an empty/zero placeholder, is left as `None`.

/// Fill unset fields from another record of the same type.
///
/// Fields are visited in declaration order; a field that already holds a
/// value is never overwritten.
pub trait Merge {
    fn merge(&mut self, other: &Self);
}

/// Implement [`Merge`] for a struct whose fields are all `Option`s.
macro_rules! impl_merge {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::models::Merge for $ty {
            fn merge(&mut self, other: &Self) {
                $(
                    if self.$field.is_none() {
                        self.$field = other.$field.clone();
                    }
                )+
            }
        }
    };
}

pub mod album;
pub mod artist;
pub mod common;
pub mod tag;
pub mod track;
pub mod user;

// Re-exports for convenience
pub use album::Album;
pub use artist::Artist;
pub use common::{Image, ImageSize};
pub use tag::Tag;
pub use track::Track;
pub use user::User;

impl_merge!(Image { small, medium, large, extralarge, mega });

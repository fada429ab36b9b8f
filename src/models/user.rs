//! User model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Image;

/// A Last.fm user profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Bootstrap flag as sent by the API.
    pub bootstrap: Option<String>,

    /// Country name as entered by the user.
    pub country: Option<String>,

    /// Avatar images.
    pub image: Option<Image>,

    /// Username.
    pub name: Option<String>,

    /// Total scrobbles.
    pub playcount: Option<u64>,

    /// Number of playlists.
    pub playlists: Option<u64>,

    /// Display name.
    pub realname: Option<String>,

    /// Registration time in seconds since the Unix epoch.
    pub registered: Option<i64>,

    /// Non-zero for paying subscribers.
    pub subscriber: Option<u64>,

    /// Account type (`user`, `subscriber`, `staff`, ...).
    #[serde(rename = "type")]
    pub type_: Option<String>,

    /// Profile page.
    pub url: Option<String>,

    /// Age, when the user shares it.
    pub age: Option<u64>,

    /// Gender code (`m`, `f`, `n`).
    pub gender: Option<String>,
}

impl_merge!(User {
    bootstrap,
    country,
    image,
    name,
    playcount,
    playlists,
    realname,
    registered,
    subscriber,
    type_,
    url,
    age,
    gender,
});

impl User {
    /// Registration time as a UTC timestamp.
    pub fn registered_at(&self) -> Option<DateTime<Utc>> {
        self.registered
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Whether the user holds a subscription.
    pub fn is_subscriber(&self) -> bool {
        self.subscriber.is_some_and(|s| s > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_at() {
        let user = User {
            registered: Some(1_037_793_040),
            ..Default::default()
        };
        let at = user.registered_at().unwrap();
        assert_eq!(at.to_rfc3339(), "2002-11-20T11:50:40+00:00");
        assert!(User::default().registered_at().is_none());
    }

    #[test]
    fn test_is_subscriber() {
        let mut user = User::default();
        assert!(!user.is_subscriber());
        user.subscriber = Some(1);
        assert!(user.is_subscriber());
    }

    #[test]
    fn test_type_serializes_as_type() {
        let user = User {
            type_: Some("staff".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["type"], "staff");
    }
}

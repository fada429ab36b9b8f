//! Query base shared by the per-entity query types.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use super::requestor::Requestor;
use super::url::QueryUrl;
use crate::converters::{unexpected, FromJson};
use crate::error::{LastfmError, Result};

/// Result size used when the caller does not pass a limit.
pub const DEFAULT_LIMIT: u32 = 1;

/// First segment of the API's `method` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    User,
    Artist,
    Album,
    Track,
}

impl Namespace {
    /// Namespace as it appears in `method=<Namespace>.<method>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::User => "User",
            Namespace::Artist => "Artist",
            Namespace::Album => "Album",
            Namespace::Track => "Track",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed result of a refined query.
///
/// A response that unwraps to a single object, or to a list holding exactly
/// one object, becomes [`Refined::One`]. Any other list (including an empty
/// one) becomes [`Refined::Many`], in response order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Refined<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Refined<T> {
    /// Number of records.
    pub fn len(&self) -> usize {
        match self {
            Refined::One(_) => 1,
            Refined::Many(items) => items.len(),
        }
    }

    /// Whether there are no records at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the result came back as a single record.
    pub fn is_single(&self) -> bool {
        matches!(self, Refined::One(_))
    }

    /// All records as a list.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Refined::One(item) => vec![item],
            Refined::Many(items) => items,
        }
    }

    /// The record, if the result is a single one.
    pub fn into_single(self) -> Option<T> {
        match self {
            Refined::One(item) => Some(item),
            Refined::Many(_) => None,
        }
    }

    /// Iterate over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Refined::One(item) => std::slice::from_ref(item).iter(),
            Refined::Many(items) => items.iter(),
        }
    }
}

impl<T> IntoIterator for Refined<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Descend into `response` along `path` and convert what remains.
pub fn refine<T: FromJson>(mut response: Value, path: &[&str]) -> Result<Refined<T>> {
    for key in path {
        response = match response {
            Value::Object(mut map) => map
                .remove(*key)
                .ok_or_else(|| LastfmError::KeyNotFound((*key).to_string()))?,
            _ => return Err(LastfmError::KeyNotFound((*key).to_string())),
        };
    }

    match response {
        Value::Object(map) => T::from_map(map).map(Refined::One),
        Value::Array(items) => {
            let mut records = items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => T::from_map(map),
                    other => Err(unexpected("object", &other)),
                })
                .collect::<Result<Vec<_>>>()?;

            if records.len() == 1 {
                Ok(Refined::One(records.remove(0)))
            } else {
                Ok(Refined::Many(records))
            }
        }
        other => Err(unexpected("object or array", &other)),
    }
}

/// What every query object needs to talk to the API: the URL base, the API
/// key and the requestor whose rate limiter they all share.
#[derive(Clone)]
pub struct ApiContext {
    query_base: String,
    api_key: String,
    requestor: Arc<Requestor>,
}

impl fmt::Debug for ApiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiContext")
            .field("query_base", &self.query_base)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl ApiContext {
    /// `query_base` is the endpoint URL with its trailing `?`.
    pub fn new<B, K>(query_base: B, api_key: K, requestor: Arc<Requestor>) -> Self
    where
        B: Into<String>,
        K: Into<String>,
    {
        Self {
            query_base: query_base.into(),
            api_key: api_key.into(),
            requestor,
        }
    }

    /// Requestor shared by every query object built from this context.
    pub fn requestor(&self) -> &Arc<Requestor> {
        &self.requestor
    }
}

/// Request plumbing common to every entity query type.
///
/// Holds the immutable base URL (endpoint, API key, format and the entity's
/// identifying parameters) and the shared requestor.
#[derive(Debug, Clone)]
pub struct Queries {
    namespace: Namespace,
    api_url: QueryUrl,
    context: ApiContext,
}

impl Queries {
    /// Build the base URL `<base>&api_key=..&format=json` followed by
    /// `identity` in order.
    pub fn new(namespace: Namespace, context: &ApiContext, identity: &[(&str, &str)]) -> Self {
        let api_url = QueryUrl::new(context.query_base.as_str())
            .modifiers([("api_key", context.api_key.as_str()), ("format", "json")])
            .modifiers(identity.iter().copied());

        Self {
            namespace,
            api_url,
            context: context.clone(),
        }
    }

    /// Namespace prefixed to every method name.
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Base URL without `method` and `limit`.
    pub fn api_url(&self) -> &QueryUrl {
        &self.api_url
    }

    /// Context the query object was created from.
    pub fn context(&self) -> &ApiContext {
        &self.context
    }

    /// Full URL for `method` with the given limit.
    pub fn method_url(&self, method: &str, limit: Option<u32>) -> QueryUrl {
        self.api_url
            .modifier("method", format!("{}.{}", self.namespace, method))
            .modifier("limit", limit.unwrap_or(DEFAULT_LIMIT))
    }

    /// Call `method` and return the raw JSON response.
    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn query(&self, method: &str, limit: Option<u32>) -> Result<Value> {
        let url = self.method_url(method, limit);
        self.context.requestor.get_json(url.as_str()).await
    }

    /// Call `method`, unwrap the response along `path` and convert the
    /// remainder into `T` records.
    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn refined_query<T: FromJson>(
        &self,
        method: &str,
        path: &[&str],
        limit: Option<u32>,
    ) -> Result<Refined<T>> {
        let response = self.query(method, limit).await?;
        let refined = refine(response, path)?;
        debug!(records = refined.len(), "refined response");
        Ok(refined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::models::{Album, Artist, Tag, Track};
    use serde_json::json;

    fn queries() -> Queries {
        let requestor = Arc::new(Requestor::new(&ClientConfig::default()).unwrap());
        let context = ApiContext::new("https://ws.audioscrobbler.com/2.0/?", "KEY", requestor);
        Queries::new(Namespace::User, &context, &[("username", "rj")])
    }

    #[test]
    fn test_base_url_order() {
        assert_eq!(
            queries().api_url().as_str(),
            "https://ws.audioscrobbler.com/2.0/?&api_key=KEY&format=json&username=rj"
        );
    }

    #[test]
    fn test_method_url() {
        let url = queries().method_url("getTopAlbums", Some(5));
        assert!(url
            .as_str()
            .ends_with("&username=rj&method=User.getTopAlbums&limit=5"));
    }

    #[test]
    fn test_method_url_default_limit() {
        let url = queries().method_url("getInfo", None);
        assert!(url.as_str().ends_with("&method=User.getInfo&limit=1"));
    }

    #[test]
    fn test_context_debug_redacts_api_key() {
        let debug = format!("{:?}", queries().context());
        assert!(!debug.contains("KEY"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_refine_single_element_list_is_one() {
        let response = json!({"topalbums": {"album": [{"name": "X", "playcount": "5"}]}});
        let refined: Refined<Album> = refine(response, &["topalbums", "album"]).unwrap();
        let album = refined.into_single().unwrap();
        assert_eq!(album.name.as_deref(), Some("X"));
        assert_eq!(album.playcount, Some(5));
    }

    #[test]
    fn test_refine_list_keeps_order() {
        let response = json!({"toptags": {"tag": [
            {"name": "a"}, {"name": "b"}, {"name": "c"}
        ]}});
        let refined: Refined<Tag> = refine(response, &["toptags", "tag"]).unwrap();
        assert!(!refined.is_single());
        let names: Vec<_> = refined
            .into_iter()
            .map(|tag| tag.name.unwrap())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_refine_object_is_one() {
        let response = json!({"album": {"name": "Dummy"}});
        let refined: Refined<Album> = refine(response, &["album"]).unwrap();
        assert!(refined.is_single());
        assert_eq!(refined.len(), 1);
    }

    #[test]
    fn test_refine_empty_nested_objects_become_records() {
        let response = json!({"track": {"name": "x", "album": {}, "artist": {}}});
        let refined: Refined<Track> = refine(response, &["track"]).unwrap();
        let track = refined.into_single().unwrap();
        assert_eq!(track.name.as_deref(), Some("x"));
        assert_eq!(track.album, Some(Album::default()));
        assert_eq!(track.artist, Some(Artist::default()));
    }

    #[test]
    fn test_refine_empty_list_is_many() {
        let response = json!({"toptags": {"tag": []}});
        let refined: Refined<Tag> = refine(response, &["toptags", "tag"]).unwrap();
        assert_eq!(refined, Refined::Many(vec![]));
        assert!(refined.is_empty());
    }

    #[test]
    fn test_refine_missing_key() {
        let response = json!({"error": 6, "message": "Artist not found"});
        let err = refine::<Tag>(response, &["toptags", "tag"]).unwrap_err();
        assert!(matches!(err, LastfmError::KeyNotFound(ref key) if key == "toptags"));
    }

    #[test]
    fn test_refine_path_through_scalar() {
        let response = json!({"toptags": "none"});
        let err = refine::<Tag>(response, &["toptags", "tag"]).unwrap_err();
        assert!(matches!(err, LastfmError::KeyNotFound(ref key) if key == "tag"));
    }

    #[test]
    fn test_refine_scalar_remainder() {
        let response = json!({"toptags": {"tag": "rock"}});
        let err = refine::<Tag>(response, &["toptags", "tag"]).unwrap_err();
        assert!(matches!(err, LastfmError::UnexpectedShape { found: "string", .. }));
    }

    #[test]
    fn test_refined_iter() {
        let one = Refined::One(1);
        let many = Refined::Many(vec![1, 2]);
        assert_eq!(one.iter().sum::<i32>(), 1);
        assert_eq!(many.iter().sum::<i32>(), 3);
        assert_eq!(many.into_vec(), vec![1, 2]);
    }
}

//! JSON to model converters.
//!
//! Each entity is built from a JSON object by draining the fields it knows
//! out of the map. A field that is missing or falsy (`null`, `false`, `0`,
//! `""`, `[]`, `{}`) is left as `None`, whatever conversion it would
//! otherwise go through. Note that this turns a genuine numeric `0` into
//! `None`; the string `"0"` is not falsy and converts normally.
//!
//! The one exception is a nested object handed to [`extract`]: it always
//! goes through the target's [`FromJson::from_map`], so `{}` yields a
//! record with every field unset.

use serde_json::{Map, Value};

use crate::error::{LastfmError, Result};
use crate::models::{Album, Artist, Image, ImageSize, Tag, Track, User};

/// A JSON object as handed to the converters.
pub type JsonMap = Map<String, Value>;

/// Types that can be built from a Last.fm JSON value.
pub trait FromJson: Sized {
    /// Build from a JSON object, consuming its fields.
    fn from_map(map: JsonMap) -> Result<Self>;

    /// Build from a non-object value. Objects-only types reject it.
    fn from_scalar(value: Value) -> Result<Self> {
        Err(unexpected("object", &value))
    }

    /// Dispatch on the JSON type.
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Self::from_scalar(other),
        }
    }
}

/// Whether a JSON value counts as "no value": `null`, `false`, zero, or an
/// empty string, array or object.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Remove `key` and keep it as raw JSON, returning it only when it is truthy.
pub fn take_raw(map: &mut JsonMap, key: &str) -> Option<Value> {
    map.remove(key).filter(|value| !is_falsy(value))
}

/// Remove `key` and convert it into `T`.
///
/// Objects, empty ones included, go through [`FromJson::from_map`]. Any
/// other truthy value goes through [`FromJson::from_scalar`]. Missing and
/// falsy scalars yield `None` without calling the converter.
pub fn extract<T: FromJson>(map: &mut JsonMap, key: &str) -> Result<Option<T>> {
    match map.remove(key) {
        Some(Value::Object(nested)) => T::from_map(nested).map(Some),
        Some(value) if !is_falsy(&value) => T::from_scalar(value).map(Some),
        _ => Ok(None),
    }
}

/// Remove `key` as a string. Numbers and booleans are stringified.
pub fn take_string(map: &mut JsonMap, key: &str) -> Result<Option<String>> {
    take_raw(map, key).map(value_to_string).transpose()
}

/// Remove `key` as an unsigned integer, accepting numeric strings.
pub fn take_u64(map: &mut JsonMap, key: &str) -> Result<Option<u64>> {
    take_raw(map, key)
        .map(|value| value_to_u64(key, value))
        .transpose()
}

/// Remove `key` as an epoch timestamp nested under `inner`
/// (`{"uts": "1700000000", "#text": "..."}`).
pub fn take_timestamp(map: &mut JsonMap, key: &str, inner: &str) -> Result<Option<i64>> {
    let Some(value) = take_raw(map, key) else {
        return Ok(None);
    };
    let raw = match value {
        Value::Object(mut nested) => nested
            .remove(inner)
            .ok_or_else(|| LastfmError::KeyNotFound(inner.to_string()))?,
        scalar => scalar,
    };
    value_to_i64(key, raw).map(Some)
}

/// Remove `key` as a name: either a plain string or an object carrying
/// `name` (or `#text`).
pub fn take_name(map: &mut JsonMap, key: &str) -> Result<Option<String>> {
    match take_raw(map, key) {
        None => Ok(None),
        Some(Value::Object(mut nested)) => name_of(&mut nested),
        Some(other) => value_to_string(other).map(Some),
    }
}

/// Remove a wrapped list such as `{"tag": [...]}` stored under `key`.
///
/// A single object in place of the list counts as a one-element list, and a
/// bare array under `key` is accepted as well.
pub fn take_nested_list<T: FromJson>(
    map: &mut JsonMap,
    key: &str,
    inner: &str,
) -> Result<Option<Vec<T>>> {
    let items = match take_raw(map, key) {
        None => return Ok(None),
        Some(Value::Object(mut nested)) => match take_raw(&mut nested, inner) {
            Some(items) => items,
            None => return Ok(None),
        },
        Some(items) => items,
    };
    match items {
        Value::Array(values) => values
            .into_iter()
            .map(T::from_value)
            .collect::<Result<Vec<_>>>()
            .map(Some),
        single => Ok(Some(vec![T::from_value(single)?])),
    }
}

/// First truthy string among `name`, `title` and `#text`.
fn name_of(map: &mut JsonMap) -> Result<Option<String>> {
    for key in ["name", "title", "#text"] {
        if let Some(name) = take_string(map, key)? {
            return Ok(Some(name));
        }
    }
    Ok(None)
}

fn value_to_string(value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(unexpected("string", &other)),
    }
}

fn value_to_u64(field: &str, value: Value) -> Result<u64> {
    let parsed = match &value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        other => return Err(unexpected("integer", other)),
    };
    parsed.ok_or_else(|| invalid_number(field, &value))
}

fn value_to_i64(field: &str, value: Value) -> Result<i64> {
    let parsed = match &value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        other => return Err(unexpected("integer", other)),
    };
    parsed.ok_or_else(|| invalid_number(field, &value))
}

fn invalid_number(field: &str, value: &Value) -> LastfmError {
    LastfmError::InvalidNumber {
        field: field.to_string(),
        value: match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn unexpected(expected: &'static str, found: &Value) -> LastfmError {
    LastfmError::UnexpectedShape {
        expected,
        found: json_type(found),
    }
}

impl FromJson for Tag {
    fn from_map(mut map: JsonMap) -> Result<Self> {
        Ok(Tag {
            count: take_u64(&mut map, "count")?,
            name: take_string(&mut map, "name")?,
            url: take_string(&mut map, "url")?,
        })
    }
}

impl FromJson for Image {
    /// Keyed form: `{"small": url, "large": url, ...}`.
    fn from_map(mut map: JsonMap) -> Result<Self> {
        let mut image = Image::default();
        for size in ImageSize::ALL {
            image.set(size, take_string(&mut map, size.as_str())?);
        }
        Ok(image)
    }

    /// API form: `[{"#text": url, "size": "small"}, ...]`. Unknown sizes are
    /// ignored.
    fn from_scalar(value: Value) -> Result<Self> {
        let entries = match value {
            Value::Array(entries) => entries,
            other => return Err(unexpected("array", &other)),
        };

        let mut image = Image::default();
        for entry in entries {
            let mut entry = match entry {
                Value::Object(entry) => entry,
                other => return Err(unexpected("object", &other)),
            };
            let size = take_string(&mut entry, "size")?;
            if let Some(size) = size.as_deref().and_then(ImageSize::parse) {
                image.set(size, take_string(&mut entry, "#text")?);
            }
        }
        Ok(image)
    }
}

impl FromJson for Artist {
    fn from_map(mut map: JsonMap) -> Result<Self> {
        let image = extract(&mut map, "image")?;
        let streamable = take_raw(&mut map, "streamable");
        let playcount = take_u64(&mut map, "playcount")?;
        let mbid = take_string(&mut map, "mbid")?;
        let name = match take_string(&mut map, "name")? {
            Some(name) => Some(name),
            None => take_string(&mut map, "#text")?,
        };

        Ok(Artist {
            mbid,
            name,
            url: take_string(&mut map, "url")?,
            playcount,
            image,
            streamable,
            bio: take_raw(&mut map, "bio"),
            ontour: take_string(&mut map, "ontour")?,
            stats: take_raw(&mut map, "stats"),
            tags: take_nested_list(&mut map, "tags", "tag")?,
        })
    }

    /// A bare string is the artist's name.
    fn from_scalar(value: Value) -> Result<Self> {
        value_to_string(value).map(Artist::named)
    }
}

impl FromJson for User {
    fn from_map(mut map: JsonMap) -> Result<Self> {
        Ok(User {
            bootstrap: take_string(&mut map, "bootstrap")?,
            country: take_string(&mut map, "country")?,
            image: extract(&mut map, "image")?,
            name: take_string(&mut map, "name")?,
            playcount: take_u64(&mut map, "playcount")?,
            playlists: take_u64(&mut map, "playlists")?,
            realname: take_string(&mut map, "realname")?,
            registered: take_timestamp(&mut map, "registered", "unixtime")?,
            subscriber: take_u64(&mut map, "subscriber")?,
            type_: take_string(&mut map, "type")?,
            url: take_string(&mut map, "url")?,
            age: take_u64(&mut map, "age")?,
            gender: take_string(&mut map, "gender")?,
        })
    }
}

impl FromJson for Track {
    fn from_map(mut map: JsonMap) -> Result<Self> {
        Ok(Track {
            streamable: take_raw(&mut map, "streamable"),
            date: take_timestamp(&mut map, "date", "uts")?,
            artist: extract(&mut map, "artist")?,
            image: extract(&mut map, "image")?,
            mbid: take_string(&mut map, "mbid")?,
            name: take_string(&mut map, "name")?,
            playcount: take_u64(&mut map, "playcount")?,
            url: take_string(&mut map, "url")?,
            listeners: take_u64(&mut map, "listeners")?,
            duration: take_u64(&mut map, "duration")?,
            album: extract(&mut map, "album")?,
        })
    }
}

impl FromJson for Album {
    fn from_map(mut map: JsonMap) -> Result<Self> {
        Ok(Album {
            image: extract(&mut map, "image")?,
            artist: take_name(&mut map, "artist")?,
            mbid: take_string(&mut map, "mbid")?,
            name: name_of(&mut map)?,
            playcount: take_u64(&mut map, "playcount")?,
            url: take_string(&mut map, "url")?,
            tags: take_nested_list(&mut map, "tags", "tag")?,
            listeners: take_u64(&mut map, "listeners")?,
            tracks: take_nested_list(&mut map, "tracks", "track")?,
        })
    }

    /// A bare string is the album's title.
    fn from_scalar(value: Value) -> Result<Self> {
        Ok(Album {
            name: Some(value_to_string(value)?),
            ..Default::default()
        })
    }
}

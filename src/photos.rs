use std::fmt;

use serde::{Deserialize, Serialize};

/// Photo identifier as handed over by whatever catalog produced the
/// metadata: either a slug-like string or a numeric key. Both forms are
/// carried as-is and never converted into each other, so `Number(42)` and
/// `Text("42")` are distinct keys. Uniqueness within a collection is the
/// caller's obligation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PhotoId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoId::Number(id) => write!(f, "{}", id),
            PhotoId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for PhotoId {
    fn from(id: i64) -> Self {
        PhotoId::Number(id)
    }
}

impl From<String> for PhotoId {
    fn from(id: String) -> Self {
        PhotoId::Text(id)
    }
}

impl From<&str> for PhotoId {
    fn from(id: &str) -> Self {
        PhotoId::Text(id.to_string())
    }
}

/// Metadata for a single displayable image.
///
/// `width` and `height` are the stored pixel dimensions and are expected to
/// be positive; nothing here rejects a zero dimension. `description` is
/// omitted from the wire entirely when absent, which is not the same thing
/// as an empty string.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Photo {
    pub id: PhotoId,
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Photo {
    /// Width over height, as used for layout.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Attach the renderable source, precomputing the aspect ratio so the
    /// rendering layer doesn't have to.
    pub fn with_source<S>(self, src: S) -> PhotoWithRatio<S> {
        PhotoWithRatio {
            aspect_ratio: self.aspect_ratio(),
            photo: self,
            src,
        }
    }
}

/// A [`Photo`] ready for rendering: the same metadata plus a precomputed
/// aspect ratio and a reference to the renderable resource itself.
///
/// The photo fields are flattened, so on the wire this is a plain superset
/// of [`Photo`]. What a source reference looks like is up to the rendering
/// layer; the default keeps it as raw JSON.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoWithRatio<S = serde_json::Value> {
    #[serde(flatten)]
    pub photo: Photo,
    pub aspect_ratio: f64,
    pub src: S,
}

impl<S> From<PhotoWithRatio<S>> for Photo {
    fn from(photo: PhotoWithRatio<S>) -> Self {
        photo.photo
    }
}

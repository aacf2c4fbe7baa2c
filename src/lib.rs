//! Photo metadata records shared between metadata loaders and the gallery
//! rendering layer.

pub mod photos;

pub use crate::photos::{Photo, PhotoId, PhotoWithRatio};

//! Opaque card image references.
//!
//! A card is nothing but the URL of its image. The board never inspects
//! what the URL points at; two references are the same card image exactly
//! when their URL strings are equal.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared, immutable image URL.
///
/// Clones share the underlying string, so copying zone contents from one
/// step to the next never duplicates URL storage.
///
/// ```
/// use solo_board::core::ImageRef;
///
/// let a = ImageRef::new("blob:card-1");
/// let b = a.clone();
///
/// assert_eq!(a, b);
/// assert_eq!(b.as_str(), "blob:card-1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(Arc<str>);

impl ImageRef {
    /// Wrap a URL.
    #[must_use]
    pub fn new(url: impl AsRef<str>) -> Self {
        Self(Arc::from(url.as_ref()))
    }

    /// The URL string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for ImageRef {
    fn from(url: String) -> Self {
        Self(Arc::from(url))
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

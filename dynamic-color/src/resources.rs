//! Access to platform color resources.
//!
//! ## Usage
//!
//! Implement [`ColorResources`] over the host's resource table (the Android
//! adapter does this through JNI), or use [`MapResources`] for an in-memory
//! table.

use std::{borrow::Cow, fmt};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::color::Argb;

/// Names a single platform color resource.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey(Cow<'static, str>);

impl ResourceKey {
    /// Creates a key from a static resource name.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a key from an owned resource name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the resource name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceKey({})", self.0)
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ResourceKey {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for ResourceKey {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

/// Why a resource could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The key does not name a resource on this platform release.
    NotFound,
    /// The resource exists but the platform refused to resolve it, e.g. for
    /// the current theme.
    Rejected(String),
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("not found"),
            Self::Rejected(detail) => write!(f, "rejected: {detail}"),
        }
    }
}

/// A requested resource key does not resolve on the running platform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("color resource `{key}` unavailable: {reason}")]
pub struct ResourceUnavailable {
    /// The key that was looked up.
    pub key: ResourceKey,
    /// Why it failed.
    pub reason: UnavailableReason,
}

impl ResourceUnavailable {
    /// The key does not exist.
    pub fn not_found(key: &ResourceKey) -> Self {
        Self {
            key: key.clone(),
            reason: UnavailableReason::NotFound,
        }
    }

    /// The platform rejected the lookup.
    pub fn rejected(key: &ResourceKey, detail: impl Into<String>) -> Self {
        Self {
            key: key.clone(),
            reason: UnavailableReason::Rejected(detail.into()),
        }
    }
}

/// Read access to platform color resources.
///
/// Lookups must not panic; anything that cannot be read is reported as
/// [`ResourceUnavailable`], which the resolver turns into an absent color.
pub trait ColorResources {
    /// Returns the color named by `key`.
    fn color(&self, key: &ResourceKey) -> Result<Argb, ResourceUnavailable>;
}

impl<R: ColorResources + ?Sized> ColorResources for &R {
    fn color(&self, key: &ResourceKey) -> Result<Argb, ResourceUnavailable> {
        (**self).color(key)
    }
}

/// In-memory resource table.
#[derive(Clone, Debug, Default)]
pub struct MapResources {
    colors: FxHashMap<ResourceKey, Argb>,
}

impl MapResources {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a color.
    pub fn insert(&mut self, key: impl Into<ResourceKey>, color: Argb) -> Option<Argb> {
        self.colors.insert(key.into(), color)
    }

    /// Removes a color, returning it when present.
    pub fn remove(&mut self, key: &ResourceKey) -> Option<Argb> {
        self.colors.remove(key)
    }

    /// Number of colors in the table.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<K: Into<ResourceKey>> FromIterator<(K, Argb)> for MapResources {
    fn from_iter<I: IntoIterator<Item = (K, Argb)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl ColorResources for MapResources {
    fn color(&self, key: &ResourceKey) -> Result<Argb, ResourceUnavailable> {
        self.colors
            .get(key)
            .copied()
            .ok_or_else(|| ResourceUnavailable::not_found(key))
    }
}

use std::borrow::Borrow;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{MapError, MapResult};

/// Name under which a boundary dataset is registered with a surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapKey(String);

impl MapKey {
    /// Key of the national boundary dataset.
    pub const NATIONAL: &'static str = "china";

    pub fn new(key: impl Into<String>) -> MapResult<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(MapError::InvalidData("map key must not be empty".to_owned()));
        }
        Ok(Self(key))
    }

    #[must_use]
    pub fn national() -> Self {
        Self::from_static(Self::NATIONAL)
    }

    pub(crate) fn from_static(key: &'static str) -> Self {
        Self(key.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for MapKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MapKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Opaque boundary payload (typically a GeoJSON feature collection).
///
/// The payload is never inspected here; the surface that receives it decides
/// whether it is acceptable. Clones share the same buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct BoundaryDataset {
    payload: Arc<str>,
}

impl BoundaryDataset {
    #[must_use]
    pub fn from_string(payload: impl Into<Arc<str>>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> MapResult<Self> {
        let path = path.as_ref();
        let payload = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_string(payload))
    }

    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    #[must_use]
    pub fn shares_payload_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
    }
}

impl fmt::Debug for BoundaryDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundaryDataset")
            .field("bytes", &self.payload.len())
            .finish()
    }
}

use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MapError, MapResult};

use super::region_table::CHINA_REGION_TABLE;

/// Administrative division code (GB/T 2260 six-digit form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCode(u32);

impl RegionCode {
    pub const CHINA: Self = Self(100000);
    pub const JIANGXI: Self = Self(360000);

    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

impl From<u32> for RegionCode {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

static CHINA_INDEX: LazyLock<RegionNameIndex> = LazyLock::new(|| RegionNameIndex {
    entries: CHINA_REGION_TABLE
        .iter()
        .map(|&(name, code)| (name.to_owned(), RegionCode(code)))
        .collect(),
});

/// Immutable display-name to region-code lookup used to classify clicks.
///
/// Serializes as a JSON object; deserialization runs the same checks as
/// [`RegionNameIndex::from_entries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RegionEntries", into = "RegionEntries")]
pub struct RegionNameIndex {
    entries: IndexMap<String, RegionCode>,
}

impl RegionNameIndex {
    /// Process-wide index of the top-level divisions of China.
    #[must_use]
    pub fn china() -> &'static Self {
        &CHINA_INDEX
    }

    pub fn from_entries<I, S>(entries: I) -> MapResult<Self>
    where
        I: IntoIterator<Item = (S, RegionCode)>,
        S: Into<String>,
    {
        let mut map = IndexMap::new();
        for (name, code) in entries {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(MapError::InvalidData(
                    "region name must not be empty".to_owned(),
                ));
            }
            if map.insert(name.clone(), code).is_some() {
                return Err(MapError::InvalidData(format!(
                    "region name `{name}` is listed more than once"
                )));
            }
        }
        Ok(Self { entries: map })
    }

    /// Parses a JSON object of the form `{"江西省": 360000, ...}`.
    pub fn from_json_str(input: &str) -> MapResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| MapError::InvalidData(format!("failed to parse region index: {e}")))
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<RegionCode> {
        self.entries.get(name).copied()
    }

    /// Reverse lookup; returns the first name registered for `code`.
    #[must_use]
    pub fn name_of(&self, code: RegionCode) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, entry)| **entry == code)
            .map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, RegionCode)> {
        self.entries.iter().map(|(name, code)| (name.as_str(), *code))
    }
}

impl Default for RegionNameIndex {
    fn default() -> Self {
        Self::china().clone()
    }
}

/// Name/code pairs in document order, duplicates included.
struct RegionEntries(Vec<(String, RegionCode)>);

impl TryFrom<RegionEntries> for RegionNameIndex {
    type Error = MapError;

    fn try_from(value: RegionEntries) -> Result<Self, Self::Error> {
        Self::from_entries(value.0)
    }
}

impl From<RegionNameIndex> for RegionEntries {
    fn from(value: RegionNameIndex) -> Self {
        Self(value.entries.into_iter().collect())
    }
}

impl Serialize for RegionEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, code) in &self.0 {
            map.serialize_entry(name, code)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RegionEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RegionEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of region names to region codes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, RegionCode>()? {
                    entries.push(entry);
                }
                Ok(RegionEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

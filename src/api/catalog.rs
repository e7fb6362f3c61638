use std::borrow::Cow;

use indexmap::IndexMap;

use crate::core::{BoundaryDataset, MapKey, RegionCode, RegionNameIndex};
use crate::error::{MapError, MapResult};
use crate::view::ViewConfiguration;

/// Boundary dataset paired with the view that renders it.
///
/// The dataset is registered under the configuration's map key.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeEntry {
    pub dataset: BoundaryDataset,
    pub configuration: ViewConfiguration,
}

impl ScopeEntry {
    #[must_use]
    pub fn new(dataset: BoundaryDataset, configuration: ViewConfiguration) -> Self {
        Self {
            dataset,
            configuration,
        }
    }

    #[must_use]
    pub fn key(&self) -> &MapKey {
        &self.configuration.map_key
    }
}

/// Classification of a clicked feature name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureClass<'a> {
    /// Not present in the region name index.
    Unknown,
    /// A known region without a drill-down scope.
    Known(RegionCode),
    Drillable(RegionCode, &'a ScopeEntry),
}

/// National scope plus the provinces that support drill-down.
///
/// Making another province drillable is a matter of adding an entry here.
#[derive(Debug, Clone)]
pub struct DrilldownCatalog {
    index: Cow<'static, RegionNameIndex>,
    national: ScopeEntry,
    provinces: IndexMap<RegionCode, ScopeEntry>,
}

impl DrilldownCatalog {
    /// Creates a catalog classifying clicks with the built-in index of China.
    pub fn new(national: ScopeEntry) -> MapResult<Self> {
        Self::build(Cow::Borrowed(RegionNameIndex::china()), national)
    }

    pub fn with_index(index: RegionNameIndex, national: ScopeEntry) -> MapResult<Self> {
        Self::build(Cow::Owned(index), national)
    }

    fn build(index: Cow<'static, RegionNameIndex>, national: ScopeEntry) -> MapResult<Self> {
        national.configuration.validate()?;
        Ok(Self {
            index,
            national,
            provinces: IndexMap::new(),
        })
    }

    /// National view of China with 江西省 as the only drillable province.
    pub fn china(national: BoundaryDataset, jiangxi: BoundaryDataset) -> MapResult<Self> {
        Self::new(ScopeEntry::new(national, ViewConfiguration::national()))?.with_province(
            RegionCode::JIANGXI,
            ScopeEntry::new(jiangxi, ViewConfiguration::jiangxi()),
        )
    }

    /// Adds (or replaces) the drill-down scope for `code`.
    pub fn with_province(mut self, code: RegionCode, entry: ScopeEntry) -> MapResult<Self> {
        if self.index.name_of(code).is_none() {
            return Err(MapError::UnknownRegion(code.to_string()));
        }
        if entry.key() == self.national.key() {
            return Err(MapError::InvalidConfiguration(format!(
                "province {code} must not reuse the national map key `{}`",
                entry.key()
            )));
        }
        entry.configuration.validate()?;
        self.provinces.insert(code, entry);
        Ok(self)
    }

    #[must_use]
    pub fn index(&self) -> &RegionNameIndex {
        &self.index
    }

    #[must_use]
    pub fn national(&self) -> &ScopeEntry {
        &self.national
    }

    #[must_use]
    pub fn province(&self, code: RegionCode) -> Option<&ScopeEntry> {
        self.provinces.get(&code)
    }

    #[must_use]
    pub fn is_drillable(&self, code: RegionCode) -> bool {
        self.provinces.contains_key(&code)
    }

    pub fn drillable_codes(&self) -> impl Iterator<Item = RegionCode> + '_ {
        self.provinces.keys().copied()
    }

    #[must_use]
    pub fn classify(&self, name: &str) -> FeatureClass<'_> {
        match self.index.lookup(name) {
            None => FeatureClass::Unknown,
            Some(code) => match self.provinces.get(&code) {
                Some(entry) => FeatureClass::Drillable(code, entry),
                None => FeatureClass::Known(code),
            },
        }
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BoundaryDataset, MapKey, RegionNameIndex};
use crate::error::{MapError, MapResult};
use crate::view::ViewConfiguration;

use super::catalog::{DrilldownCatalog, ScopeEntry};

/// National scope entry of a [`CatalogManifest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalManifest {
    pub dataset: PathBuf,
    /// Defaults to [`ViewConfiguration::national`].
    #[serde(default)]
    pub configuration: Option<ViewConfiguration>,
}

/// Drillable province entry of a [`CatalogManifest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceManifest {
    /// Display name, as listed in the region name index.
    pub name: String,
    pub dataset: PathBuf,
    #[serde(default)]
    pub title: Option<String>,
    /// When present, its map key must equal `name`. The default outline is
    /// keyed by `name` too.
    #[serde(default)]
    pub configuration: Option<ViewConfiguration>,
}

/// File-level description of a [`DrilldownCatalog`].
///
/// ```json
/// {
///   "national": { "dataset": "china.json" },
///   "provinces": [{ "name": "江西省", "dataset": "jiangxi.json" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub national: NationalManifest,
    #[serde(default)]
    pub provinces: Vec<ProvinceManifest>,
    /// Optional JSON region index replacing the built-in one.
    #[serde(default)]
    pub region_index: Option<PathBuf>,
}

impl CatalogManifest {
    pub fn from_json_str(input: &str) -> MapResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| MapError::InvalidData(format!("failed to parse catalog manifest: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> MapResult<Self> {
        Self::from_json_str(&read_file(path.as_ref())?)
    }

    /// Reads every referenced dataset and builds the catalog.
    ///
    /// Relative paths are resolved against `base_dir`.
    pub fn load(&self, base_dir: impl AsRef<Path>) -> MapResult<DrilldownCatalog> {
        let base_dir = base_dir.as_ref();

        let national = ScopeEntry::new(
            BoundaryDataset::from_path(base_dir.join(&self.national.dataset))?,
            self.national
                .configuration
                .clone()
                .unwrap_or_else(ViewConfiguration::national),
        );
        let mut catalog = match &self.region_index {
            Some(path) => {
                let index = RegionNameIndex::from_json_str(&read_file(&base_dir.join(path))?)?;
                DrilldownCatalog::with_index(index, national)?
            }
            None => DrilldownCatalog::new(national)?,
        };

        for province in &self.provinces {
            let code = catalog
                .index()
                .lookup(&province.name)
                .ok_or_else(|| MapError::UnknownRegion(province.name.clone()))?;
            let configuration = match &province.configuration {
                Some(configuration) => {
                    if configuration.map_key.as_str() != province.name {
                        return Err(MapError::InvalidConfiguration(format!(
                            "configuration for `{}` uses map key `{}`",
                            province.name, configuration.map_key
                        )));
                    }
                    configuration.clone()
                }
                None => ViewConfiguration::province_outline(
                    MapKey::new(province.name.clone())?,
                    province.title.as_deref().unwrap_or(&province.name),
                ),
            };
            let dataset = BoundaryDataset::from_path(base_dir.join(&province.dataset))?;
            debug!(name = %province.name, %code, "loaded drill-down scope");
            catalog = catalog.with_province(code, ScopeEntry::new(dataset, configuration))?;
        }

        Ok(catalog)
    }
}

fn read_file(path: &Path) -> MapResult<String> {
    fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })
}

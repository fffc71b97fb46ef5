use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Landsat collections the backend can mosaic over. Enumerated per-collection
/// rather than string-keyed (spec §9 redesign note).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LandsatCollection {
    #[serde(rename = "LANDSAT/LC08/C02/T1_L2")]
    Landsat8,
    #[serde(rename = "LANDSAT/LC09/C02/T1_L2")]
    Landsat9,
}

impl LandsatCollection {
    pub fn for_year(year: u16) -> Self {
        if year >= 2022 {
            Self::Landsat9
        } else {
            Self::Landsat8
        }
    }

    pub fn asset_id(self) -> &'static str {
        match self {
            Self::Landsat8 => "LANDSAT/LC08/C02/T1_L2",
            Self::Landsat9 => "LANDSAT/LC09/C02/T1_L2",
        }
    }
}

/// A single band-scaling table, as consumed by the backend's `getMapId`-style
/// call: which bands to select, and the min/max/gamma stretch to apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandStretch {
    pub bands: Vec<String>,
    pub min: Vec<f64>,
    pub max: Vec<f64>,
    pub gamma: f64,
}

/// Rendering parameters consumed by the backend client, as a tagged sum over
/// the collections this service knows how to visualize (spec §9: "Dynamic
/// dictionaries for rendering parameters ... maps naturally to a tagged
/// sum").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum VisParam {
    Sentinel {
        select: Vec<String>,
        stretch: BandStretch,
    },
    Landsat {
        per_collection: BTreeMap<LandsatCollection, BandStretch>,
    },
}

impl VisParam {
    pub fn landsat_stretch_for_year(&self, year: u16) -> Result<&BandStretch> {
        match self {
            Self::Landsat { per_collection } => per_collection
                .get(&LandsatCollection::for_year(year))
                .ok_or_else(|| Error::invalid("no landsat stretch for that collection")),
            Self::Sentinel { .. } => Err(Error::invalid("not a landsat vis param")),
        }
    }
}

/// The set of named vis-params this service recognizes, keyed by name (e.g.
/// `"tvi-green"`, `"tvi-rgb"`). Storage/CRUD of this registry is out of
/// scope (spec §1); this in-process registry exists so the pipeline can
/// validate a requested vis-param name before calling the backend.
#[derive(Debug, Clone, Default)]
pub struct VisParamRegistry {
    entries: BTreeMap<String, VisParam>,
}

impl VisParamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, param: VisParam) -> &mut Self {
        self.entries.insert(name.into(), param);
        self
    }

    pub fn get(&self, name: &str) -> Result<&VisParam> {
        self.entries
            .get(name)
            .ok_or_else(|| Error::invalid(format!("unrecognized vis-param {name:?}")))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Every recognized vis-param name, in registry order. Used by the
    /// catalog-listing endpoint to enumerate candidate renderings.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// A small registry seeded with the same entries the original service
    /// hardcoded (`app/visParam.py`), for use as the default / in tests.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.insert(
            "tvi-green",
            VisParam::Sentinel {
                select: vec!["B4".into(), "B8A".into(), "B11".into()],
                stretch: BandStretch {
                    bands: vec!["SWIR1".into(), "REDEDGE4".into(), "RED".into()],
                    min: vec![600.0, 700.0, 400.0],
                    max: vec![4300.0, 5400.0, 2800.0],
                    gamma: 1.1,
                },
            },
        );

        registry.insert(
            "tvi-rgb",
            VisParam::Sentinel {
                select: vec!["B4".into(), "B3".into(), "B2".into()],
                stretch: BandStretch {
                    bands: vec!["B4".into(), "B3".into(), "B2".into()],
                    min: vec![200.0, 300.0, 700.0],
                    max: vec![3000.0, 2500.0, 2300.0],
                    gamma: 1.35,
                },
            },
        );

        let mut per_collection = BTreeMap::new();
        per_collection.insert(
            LandsatCollection::Landsat8,
            BandStretch {
                bands: vec!["SR_B4".into(), "SR_B3".into(), "SR_B2".into()],
                min: vec![0.0, 0.0, 0.0],
                max: vec![0.3, 0.3, 0.3],
                gamma: 1.2,
            },
        );
        per_collection.insert(
            LandsatCollection::Landsat9,
            BandStretch {
                bands: vec!["SR_B4".into(), "SR_B3".into(), "SR_B2".into()],
                min: vec![0.0, 0.0, 0.0],
                max: vec![0.3, 0.3, 0.3],
                gamma: 1.2,
            },
        );
        registry.insert("default", VisParam::Landsat { per_collection });

        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_rejects_unknown_names() {
        let registry = VisParamRegistry::with_defaults();
        assert!(registry.get("tvi-green").is_ok());
        assert!(registry.get("does-not-exist").is_err());
    }

    #[test]
    fn landsat_collection_switches_by_year() {
        assert_eq!(LandsatCollection::for_year(2020), LandsatCollection::Landsat8);
        assert_eq!(LandsatCollection::for_year(2023), LandsatCollection::Landsat9);
    }
}

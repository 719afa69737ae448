//! In-memory asset collection, fixed at construction

use std::collections::HashSet;

use alcove_core::prelude::*;
use alcove_core::{Asset, AssetDetails, AssetId};

use crate::generate::generate_assets;

/// Default number of assets in a generated catalog
pub const DEFAULT_CATALOG_SIZE: usize = 50;

/// Read-only collection of assets backing the query service.
///
/// Constructed once at startup — seeded generation for the running app,
/// explicit fixtures in tests — and never mutated afterwards. Passed
/// explicitly into the service rather than living in process-wide state,
/// so tests get deterministic, isolated catalogs.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
}

impl AssetCatalog {
    /// Build a catalog of `count` synthetic assets. Same seed, same catalog.
    pub fn generate(seed: u64, count: usize) -> Self {
        info!(seed, count, "generating asset catalog");
        Self {
            assets: generate_assets(seed, count),
        }
    }

    /// Build a catalog from explicit fixtures.
    ///
    /// Rejects duplicate ids and KPI calculations outside `[0, 100]` — the
    /// two invariants the rest of the system relies on.
    pub fn from_assets(assets: Vec<Asset>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(assets.len());
        for asset in &assets {
            if !seen.insert(asset.id) {
                return Err(Error::invalid_argument(format!(
                    "duplicate asset id: {}",
                    asset.id
                )));
            }
            if let AssetDetails::Kpi(kpi) = &asset.details {
                if !(0.0..=100.0).contains(&kpi.calculation) {
                    return Err(Error::invalid_argument(format!(
                        "asset {}: calculation {} outside [0, 100]",
                        asset.id, kpi.calculation
                    )));
                }
            }
        }
        Ok(Self { assets })
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn get(&self, id: AssetId) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.id == id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{kpi_asset, layout_asset};
    use alcove_core::AssetKind;

    #[test]
    fn test_generate_assigns_sequential_unique_ids() {
        let catalog = AssetCatalog::generate(7, 50);
        assert_eq!(catalog.len(), 50);
        for (index, asset) in catalog.assets().iter().enumerate() {
            assert_eq!(asset.id, index as AssetId + 1);
        }
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let a = AssetCatalog::generate(42, 50);
        let b = AssetCatalog::generate(42, 50);
        assert_eq!(a.assets(), b.assets());

        let c = AssetCatalog::generate(43, 50);
        assert_ne!(a.assets(), c.assets());
    }

    #[test]
    fn test_generated_kpi_calculations_in_range() {
        let catalog = AssetCatalog::generate(3, 200);
        for asset in catalog.assets() {
            if let AssetDetails::Kpi(kpi) = &asset.details {
                assert!(
                    (0.0..=100.0).contains(&kpi.calculation),
                    "asset {} calculation {} out of range",
                    asset.id,
                    kpi.calculation
                );
                assert!(!kpi.visuals_available.is_empty());
            }
        }
    }

    #[test]
    fn test_generated_kpi_references_point_at_kpis() {
        let catalog = AssetCatalog::generate(11, 100);
        let kpi_ids: std::collections::HashSet<AssetId> = catalog
            .assets()
            .iter()
            .filter(|a| a.kind() == AssetKind::Kpi)
            .map(|a| a.id)
            .collect();

        for asset in catalog.assets() {
            let refs: Vec<AssetId> = match &asset.details {
                AssetDetails::Layout(layout) => layout.active_kpis.clone(),
                AssetDetails::Storyboard(sb) => sb.coupled_kpis.clone(),
                AssetDetails::Kpi(_) => continue,
            };
            for id in refs {
                assert!(kpi_ids.contains(&id), "asset {} references non-KPI {id}", asset.id);
            }
        }
    }

    #[test]
    fn test_from_assets_rejects_duplicate_ids() {
        let err = AssetCatalog::from_assets(vec![kpi_asset(1), layout_asset(1)]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_from_assets_rejects_out_of_range_calculation() {
        let mut asset = kpi_asset(1);
        if let AssetDetails::Kpi(kpi) = &mut asset.details {
            kpi.calculation = 130.0;
        }
        let err = AssetCatalog::from_assets(vec![asset]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = AssetCatalog::from_assets(vec![kpi_asset(1), layout_asset(2)]).unwrap();
        assert_eq!(catalog.get(2).map(|a| a.kind()), Some(AssetKind::Layout));
        assert!(catalog.get(99).is_none());
    }
}

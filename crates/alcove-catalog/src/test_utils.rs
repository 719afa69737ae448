//! Deterministic fixtures for tests
//!
//! Exported under the `test-helpers` feature so downstream crates can build
//! catalogs with known contents instead of relying on seeded randomness.

use alcove_core::{
    Asset, AssetDetails, AssetId, AssetKind, ChartKind, KpiDetails, LayoutDetails,
    StoryboardDetails, StoryboardElements,
};

use crate::catalog::AssetCatalog;

/// A KPI asset with predictable fields
pub fn kpi_asset(id: AssetId) -> Asset {
    base_asset(
        id,
        AssetDetails::Kpi(KpiDetails {
            business_questions: vec![format!("Question for asset {id}?")],
            metric_ids: vec![format!("MT-{:03}", 100 + id)],
            calculation: 50.0,
            visuals_available: vec![ChartKind::Bar, ChartKind::Linear],
            affiliate_applicability: vec!["EMEA".to_string()],
        }),
    )
}

/// A layout asset with predictable fields
pub fn layout_asset(id: AssetId) -> Asset {
    base_asset(
        id,
        AssetDetails::Layout(LayoutDetails {
            page_count: 4,
            active_kpis: Vec::new(),
            preview_image: format!("https://assets.alcove.dev/previews/layout-{id}.png"),
            storyboard_elements: StoryboardElements::default(),
        }),
    )
}

/// A storyboard asset with predictable fields
pub fn storyboard_asset(id: AssetId) -> Asset {
    base_asset(
        id,
        AssetDetails::Storyboard(StoryboardDetails {
            accessible: true,
            affiliates: vec!["APAC".to_string()],
            coupled_kpis: Vec::new(),
            asset_context: "Quarterly business review".to_string(),
        }),
    )
}

/// `count` assets with ids `1..=count`, cycling kpi → layout → storyboard
pub fn fixture_assets(count: usize) -> Vec<Asset> {
    (1..=count as AssetId)
        .map(|id| match id % 3 {
            1 => kpi_asset(id),
            2 => layout_asset(id),
            _ => storyboard_asset(id),
        })
        .collect()
}

/// A catalog holding the given number of each kind, ids assigned in order
pub fn catalog_of_counts(kpis: usize, layouts: usize, storyboards: usize) -> AssetCatalog {
    let mut assets = Vec::with_capacity(kpis + layouts + storyboards);
    let mut next_id: AssetId = 1;
    for _ in 0..kpis {
        assets.push(kpi_asset(next_id));
        next_id += 1;
    }
    for _ in 0..layouts {
        assets.push(layout_asset(next_id));
        next_id += 1;
    }
    for _ in 0..storyboards {
        assets.push(storyboard_asset(next_id));
        next_id += 1;
    }
    AssetCatalog::from_assets(assets).expect("fixture ids are unique")
}

fn base_asset(id: AssetId, details: AssetDetails) -> Asset {
    Asset {
        id,
        title: format!("{} Asset {id}", kind_label(&details)),
        description: format!("Description for asset {id}"),
        date: format!("2024-01-{:02}", (id % 28) + 1),
        is_favorite: None,
        shareable_link: None,
        details,
    }
}

fn kind_label(details: &AssetDetails) -> &'static str {
    match details.kind() {
        AssetKind::Kpi => "KPI",
        AssetKind::Layout => "Layout",
        AssetKind::Storyboard => "Storyboard",
    }
}

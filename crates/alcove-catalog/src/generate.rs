//! Seeded synthetic asset generation
//!
//! Values are illustrative, not loaded from storage. Generation is fully
//! deterministic for a given `(seed, count)` pair so catalogs are
//! reproducible across runs and in tests.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use alcove_core::{
    Asset, AssetDetails, AssetId, AssetKind, ChartKind, KpiDetails, LayoutDetails,
    StoryboardDetails, StoryboardElements,
};

const SUBJECTS: &[&str] = &[
    "Sales",
    "Revenue",
    "Churn",
    "Customer Retention",
    "Marketing Spend",
    "Web Traffic",
    "Conversion",
    "Inventory Turnover",
    "Net Promoter",
    "Support Backlog",
];

const AFFILIATES: &[&str] = &["EMEA", "APAC", "LATAM", "NA", "Nordics"];

const BUSINESS_QUESTIONS: &[&str] = &[
    "How did we perform against last quarter?",
    "Which affiliates are trending down?",
    "Where is spend outpacing plan?",
    "What is driving the recent change?",
    "Which segments convert best?",
    "How does this compare year over year?",
];

const FILTER_DIMENSIONS: &[&str] = &["region", "quarter", "channel", "product-line"];

const STORYBOARD_CONTEXTS: &[&str] = &[
    "Quarterly business review",
    "Annual planning",
    "Executive readout",
    "Affiliate onboarding",
];

const CHART_KINDS: &[ChartKind] = &[ChartKind::Bar, ChartKind::Circular, ChartKind::Linear];

/// Generate `count` assets with ids `1..=count`.
///
/// Kinds are assigned in a first pass so that layout and storyboard KPI
/// references point at ids that actually belong to KPI assets.
pub(crate) fn generate_assets(seed: u64, count: usize) -> Vec<Asset> {
    let mut rng = StdRng::seed_from_u64(seed);

    let kinds: Vec<AssetKind> = (0..count)
        .map(|_| match rng.gen_range(0..3) {
            0 => AssetKind::Kpi,
            1 => AssetKind::Layout,
            _ => AssetKind::Storyboard,
        })
        .collect();

    let kpi_ids: Vec<AssetId> = kinds
        .iter()
        .enumerate()
        .filter(|(_, kind)| **kind == AssetKind::Kpi)
        .map(|(index, _)| index as AssetId + 1)
        .collect();

    let base_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();

    kinds
        .iter()
        .enumerate()
        .map(|(index, kind)| {
            let id = index as AssetId + 1;
            let subject = pick(&mut rng, SUBJECTS);
            let date = base_date
                .checked_add_days(Days::new(index as u64))
                .unwrap_or(base_date)
                .format("%Y-%m-%d")
                .to_string();

            let details = match kind {
                AssetKind::Kpi => AssetDetails::Kpi(gen_kpi(&mut rng)),
                AssetKind::Layout => AssetDetails::Layout(gen_layout(&mut rng, id, &kpi_ids)),
                AssetKind::Storyboard => {
                    AssetDetails::Storyboard(gen_storyboard(&mut rng, &kpi_ids))
                }
            };

            Asset {
                id,
                title: format!("{} {}", subject, kind_noun(*kind)),
                description: format!("Description for asset {id}"),
                date,
                is_favorite: rng.gen_bool(0.15).then_some(true),
                shareable_link: rng
                    .gen_bool(0.4)
                    .then(|| format!("https://assets.alcove.dev/share/{id}")),
                details,
            }
        })
        .collect()
}

fn kind_noun(kind: AssetKind) -> &'static str {
    match kind {
        AssetKind::Kpi => "KPI",
        AssetKind::Layout => "Layout",
        AssetKind::Storyboard => "Storyboard",
    }
}

fn gen_kpi(rng: &mut StdRng) -> KpiDetails {
    let metric_count = rng.gen_range(1..=3);
    KpiDetails {
        business_questions: sample(rng, BUSINESS_QUESTIONS, 2, 4)
            .into_iter()
            .map(str::to_string)
            .collect(),
        metric_ids: (0..metric_count)
            .map(|_| format!("MT-{}", rng.gen_range(100..400)))
            .collect(),
        calculation: (rng.gen_range(0.0..=100.0f64) * 10.0).round() / 10.0,
        visuals_available: sample(rng, CHART_KINDS, 1, 3),
        affiliate_applicability: sample(rng, AFFILIATES, 1, 3)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

fn gen_layout(rng: &mut StdRng, id: AssetId, kpi_ids: &[AssetId]) -> LayoutDetails {
    LayoutDetails {
        page_count: rng.gen_range(1..=12),
        active_kpis: sample(rng, kpi_ids, 0, 3),
        preview_image: format!("https://assets.alcove.dev/previews/layout-{id}.png"),
        storyboard_elements: StoryboardElements {
            kpis: sample(rng, kpi_ids, 0, 3),
            filters: sample(rng, FILTER_DIMENSIONS, 1, 2)
                .into_iter()
                .map(str::to_string)
                .collect(),
            affiliates: sample(rng, AFFILIATES, 1, 3)
                .into_iter()
                .map(str::to_string)
                .collect(),
        },
    }
}

fn gen_storyboard(rng: &mut StdRng, kpi_ids: &[AssetId]) -> StoryboardDetails {
    StoryboardDetails {
        accessible: rng.gen_bool(0.8),
        affiliates: sample(rng, AFFILIATES, 1, 3)
            .into_iter()
            .map(str::to_string)
            .collect(),
        coupled_kpis: sample(rng, kpi_ids, 0, 3),
        asset_context: pick(rng, STORYBOARD_CONTEXTS).to_string(),
    }
}

fn pick<'a, T>(rng: &mut StdRng, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

/// Choose between `min` and `max` distinct elements, clamped to pool size
fn sample<T: Clone>(rng: &mut StdRng, pool: &[T], min: usize, max: usize) -> Vec<T> {
    if pool.is_empty() {
        return Vec::new();
    }
    let amount = rng.gen_range(min..=max).min(pool.len());
    pool.choose_multiple(rng, amount).cloned().collect()
}

//! Asset domain types
//!
//! An [`Asset`] is one catalog item. The common fields live on the struct;
//! the variant-specific payload is a discriminated union ([`AssetDetails`])
//! tagged by kind, so each consumer matches once and receives only the field
//! set for its variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Unique asset identifier within a catalog
pub type AssetId = u64;

/// Closed set of asset variants in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Kpi,
    Layout,
    Storyboard,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Kpi, AssetKind::Layout, AssetKind::Storyboard];

    /// Lowercase tag used in filters and display badges
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Kpi => "kpi",
            AssetKind::Layout => "layout",
            AssetKind::Storyboard => "storyboard",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AssetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kpi" => Ok(AssetKind::Kpi),
            "layout" => Ok(AssetKind::Layout),
            "storyboard" => Ok(AssetKind::Storyboard),
            other => Err(Error::invalid_argument(format!(
                "unknown asset kind: {other}"
            ))),
        }
    }
}

/// Chart renderings available for a KPI's progress value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Circular,
    Linear,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Circular => "circular",
            ChartKind::Linear => "linear",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// KPI-specific payload
///
/// `calculation` is a progress percentage and must lie in `[0, 100]` —
/// enforced at catalog construction, relied upon by progress displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiDetails {
    pub business_questions: Vec<String>,
    pub metric_ids: Vec<String>,
    pub calculation: f64,
    pub visuals_available: Vec<ChartKind>,
    pub affiliate_applicability: Vec<String>,
}

/// Grouped references a layout carries for storyboard composition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryboardElements {
    pub kpis: Vec<AssetId>,
    pub filters: Vec<String>,
    pub affiliates: Vec<String>,
}

/// Layout-specific payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDetails {
    pub page_count: u32,
    /// KPI assets rendered by this layout
    pub active_kpis: Vec<AssetId>,
    pub preview_image: String,
    pub storyboard_elements: StoryboardElements,
}

/// Storyboard-specific payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryboardDetails {
    /// Gates whether detail content is shown at all
    pub accessible: bool,
    pub affiliates: Vec<String>,
    pub coupled_kpis: Vec<AssetId>,
    pub asset_context: String,
}

/// Variant payload, discriminated by the asset's kind tag
///
/// Serialized with an internal `type` tag so the JSON shape matches the
/// discriminated union consumers expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AssetDetails {
    Kpi(KpiDetails),
    Layout(LayoutDetails),
    Storyboard(StoryboardDetails),
}

impl AssetDetails {
    pub fn kind(&self) -> AssetKind {
        match self {
            AssetDetails::Kpi(_) => AssetKind::Kpi,
            AssetDetails::Layout(_) => AssetKind::Layout,
            AssetDetails::Storyboard(_) => AssetKind::Storyboard,
        }
    }
}

/// One catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub title: String,
    pub description: String,
    /// Display-formatted creation date (e.g. "2024-01-15")
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shareable_link: Option<String>,
    #[serde(flatten)]
    pub details: AssetDetails,
}

impl Asset {
    /// Kind tag derived from the variant payload
    pub fn kind(&self) -> AssetKind {
        self.details.kind()
    }
}

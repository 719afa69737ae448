//! Alcove - a headless catalog browser for analytics assets
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use alcove_app::{config, Engine, Message, Settings};
use alcove_catalog::{AssetCatalog, AssetService, CatalogService};
use alcove_core::prelude::*;
use alcove_core::{logging, Asset, AssetDetails, AssetId, AssetKind, QueryRequest};

/// Alcove - browse analytics assets from the terminal
#[derive(Parser, Debug)]
#[command(name = "alcove")]
#[command(about = "Browse for assets needed to report and present analysis", long_about = None)]
struct Args {
    /// Base directory holding .alcove/alcove.toml
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the catalog and print one page (or every page with --all)
    Search {
        /// Free-text search over titles and descriptions
        #[arg(value_name = "TERM", default_value = "")]
        term: String,

        /// Restrict results to one kind (kpi, layout, storyboard)
        #[arg(long, value_parser = parse_kind)]
        kind: Option<AssetKind>,

        /// Page to fetch (1-based); ignored with --all
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Follow has_more through every page (debounced search + load-more)
        #[arg(long)]
        all: bool,

        /// Print results as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the detail view of a single asset
    Show {
        id: AssetId,

        /// Print the asset as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write the default .alcove/alcove.toml
    Init,
}

fn parse_kind(value: &str) -> std::result::Result<AssetKind, String> {
    value.parse().map_err(|e: Error| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().map_err(|e| Error::config(e.to_string()))?;
    logging::init()?;

    let args = Args::parse();
    let base = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let settings = config::load_settings(&base);
    debug!(?settings, "settings loaded");

    match args.command {
        Command::Search {
            term,
            kind,
            page,
            all,
            json,
        } => {
            let service = build_service(&settings);
            if all {
                run_walk(service, &settings, term, kind, json).await
            } else {
                run_single_page(service, &settings, term, kind, page, json).await
            }
        }
        Command::Show { id, json } => run_show(&settings, id, json),
        Command::Init => {
            config::save_settings(&base, &Settings::default())?;
            println!("Wrote {}", config::config_path(&base).display());
            Ok(())
        }
    }
}

fn build_service(settings: &Settings) -> CatalogService {
    let catalog = AssetCatalog::generate(settings.catalog.seed, settings.catalog.count);
    CatalogService::new(catalog).with_latency(Duration::from_millis(settings.catalog.latency_ms))
}

/// Fetch and print a single page straight from the service
async fn run_single_page(
    service: CatalogService,
    settings: &Settings,
    term: String,
    kind: Option<AssetKind>,
    page: u32,
    json: bool,
) -> Result<()> {
    let mut request = QueryRequest::new(page, settings.browse.page_size).with_search(term);
    request.kind_filter = kind;

    let result = service.query(request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for asset in &result.data {
        print_line(asset);
    }
    let shown = (page as usize - 1) * settings.browse.page_size as usize + result.data.len();
    if result.has_more {
        println!("-- showing {} of {} (more available)", shown, result.total);
    } else {
        println!("-- {} matching asset(s)", result.total);
    }
    Ok(())
}

/// Drive the engine through debounce and load-more until every page landed
async fn run_walk(
    service: CatalogService,
    settings: &Settings,
    term: String,
    kind: Option<AssetKind>,
    json: bool,
) -> Result<()> {
    let mut engine = Engine::with_settings(service, settings);

    if term.is_empty() && kind.is_none() {
        engine.process_message(Message::Refresh);
    } else {
        if !term.is_empty() {
            engine.process_message(Message::SearchChanged(term));
        }
        if kind.is_some() {
            engine.process_message(Message::FilterChanged(kind));
        }
    }
    engine.settle().await?;

    while engine.state().has_more {
        engine.process_message(Message::LoadMore);
        engine.settle().await?;
    }

    if let Some(reason) = &engine.state().last_error {
        return Err(Error::query(reason.clone()));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&engine.state().items)?);
        return Ok(());
    }

    for asset in &engine.state().items {
        print_line(asset);
    }
    println!("-- {} matching asset(s)", engine.state().total);
    Ok(())
}

fn run_show(settings: &Settings, id: AssetId, json: bool) -> Result<()> {
    let catalog = AssetCatalog::generate(settings.catalog.seed, settings.catalog.count);
    let asset = catalog
        .get(id)
        .ok_or_else(|| Error::invalid_argument(format!("no asset with id {id}")))?;

    if json {
        println!("{}", serde_json::to_string_pretty(asset)?);
        return Ok(());
    }

    print_detail(asset);
    Ok(())
}

fn print_line(asset: &Asset) {
    let favorite = if asset.is_favorite == Some(true) {
        " *"
    } else {
        ""
    };
    println!(
        "#{:<4} [{:<10}] {}  ({}){}",
        asset.id,
        asset.kind(),
        asset.title,
        asset.date,
        favorite
    );
}

/// The single point where detail content is chosen per variant
fn print_detail(asset: &Asset) {
    println!("{} — {}", asset.title, asset.date);
    println!("{}", asset.description);
    if let Some(link) = &asset.shareable_link {
        println!("share: {link}");
    }

    match &asset.details {
        AssetDetails::Kpi(kpi) => {
            println!("calculation: {:.1}%", kpi.calculation);
            println!("metrics: {}", kpi.metric_ids.join(", "));
            println!(
                "visuals: {}",
                kpi.visuals_available
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!("affiliates: {}", kpi.affiliate_applicability.join(", "));
            println!("business questions:");
            for question in &kpi.business_questions {
                println!("  - {question}");
            }
        }
        AssetDetails::Layout(layout) => {
            println!("pages: {}", layout.page_count);
            println!("preview: {}", layout.preview_image);
            println!(
                "active KPIs: {}",
                layout
                    .active_kpis
                    .iter()
                    .map(|id| format!("#{id}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!(
                "storyboard filters: {}",
                layout.storyboard_elements.filters.join(", ")
            );
        }
        AssetDetails::Storyboard(storyboard) => {
            if !storyboard.accessible {
                println!("(content not accessible)");
                return;
            }
            println!("context: {}", storyboard.asset_context);
            println!("affiliates: {}", storyboard.affiliates.join(", "));
            println!(
                "coupled KPIs: {}",
                storyboard
                    .coupled_kpis
                    .iter()
                    .map(|id| format!("#{id}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }
}

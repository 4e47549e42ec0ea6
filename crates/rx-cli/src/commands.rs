use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, info_span};

use rx_catalog::{find_exact, load_catalog};
use rx_match::{MatchEngine, MatchOutcome, MatchThresholds, ScoredCandidate};
use rx_model::{DrugRecord, ExtractedMedication};

use rx_cli::logging::redact_value;

use crate::cli::{BatchArgs, CatalogArgs, ResolveArgs};
use crate::summary::print_catalog;
use crate::types::{BatchReport, ResolveReport, parse_batch_line};

pub fn run_resolve(args: &ResolveArgs) -> Result<ResolveReport> {
    let span = info_span!("resolve");
    let _guard = span.enter();

    let catalog = load_catalog(&args.catalog)
        .with_context(|| format!("load catalog {}", args.catalog.display()))?;
    info!(records = catalog.len(), "catalog loaded");

    let engine = build_engine(args.floor, args.ceiling, args.top)?;
    let mut query = ExtractedMedication::new(args.name.clone());
    query.strength = args.strength.clone();

    Ok(resolve_one(&engine, query, &catalog))
}

pub fn run_batch(args: &BatchArgs) -> Result<BatchReport> {
    let span = info_span!("batch");
    let _guard = span.enter();
    let started = Instant::now();

    let catalog = load_catalog(&args.catalog)
        .with_context(|| format!("load catalog {}", args.catalog.display()))?;
    let engine = build_engine(args.floor, args.ceiling, None)?;

    let content = std::fs::read_to_string(&args.names_file)
        .with_context(|| format!("read names file {}", args.names_file.display()))?;
    let queries: Vec<ExtractedMedication> =
        content.lines().filter_map(parse_batch_line).collect();

    let bar = ProgressBar::new(queries.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut entries = Vec::with_capacity(queries.len());
    for query in queries {
        entries.push(resolve_one(&engine, query, &catalog));
        bar.inc(1);
    }
    bar.finish_and_clear();

    let report = BatchReport { entries };
    let (auto, review, unmatched) = report.counts();
    info!(
        total = report.entries.len(),
        auto,
        review,
        unmatched,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "batch complete"
    );
    Ok(report)
}

pub fn run_catalog(args: &CatalogArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalog)
        .with_context(|| format!("load catalog {}", args.catalog.display()))?;
    print_catalog(&catalog);
    Ok(())
}

/// Resolve one extracted medication, consulting the exact fast path first.
fn resolve_one(
    engine: &MatchEngine,
    query: ExtractedMedication,
    catalog: &[DrugRecord],
) -> ResolveReport {
    debug!(name = redact_value(&query.name), "resolving extracted name");

    if let Some(strength) = query.strength.as_deref() {
        if let Some(record) = find_exact(catalog, &query.name, Some(strength)) {
            debug!(id = %record.id, "exact name+strength hit, skipping fuzzy scoring");
            let outcome = MatchOutcome {
                matched: Some(record.clone()),
                auto_matched: true,
                candidates: vec![ScoredCandidate {
                    record: record.clone(),
                    score: 1.0,
                }],
            };
            return ResolveReport {
                query,
                exact: true,
                outcome,
            };
        }
    }

    let outcome = engine.match_medication(&query.name, catalog);
    ResolveReport {
        query,
        exact: false,
        outcome,
    }
}

fn build_engine(
    floor: Option<f64>,
    ceiling: Option<f64>,
    top: Option<usize>,
) -> Result<MatchEngine> {
    let mut thresholds = MatchThresholds::default();
    if let Some(floor) = floor {
        thresholds.suggestion_floor = floor;
    }
    if let Some(ceiling) = ceiling {
        thresholds.auto_match_ceiling = ceiling;
    }
    if let Some(top) = top {
        thresholds.max_candidates = top;
    }
    MatchEngine::new(thresholds).context("invalid matcher thresholds")
}

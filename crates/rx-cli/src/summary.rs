//! Human-readable terminal output for match results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rx_match::MatchDecision;
use rx_model::DrugRecord;

use crate::types::{BatchReport, ResolveReport};

pub fn print_resolve(report: &ResolveReport) {
    match report.outcome.decision() {
        MatchDecision::Auto => {
            if let Some(record) = &report.outcome.matched {
                let how = if report.exact { "exact" } else { "auto" };
                let strength = record
                    .strength
                    .as_deref()
                    .map(|s| format!(" {s}"))
                    .unwrap_or_default();
                println!("Matched ({how}): {} [{}]{strength}", record.name, record.id);
            }
        }
        MatchDecision::Review => {
            println!(
                "No confident match for \"{}\" - {} suggestion(s) for review:",
                report.query.name,
                report.outcome.candidates.len()
            );
        }
        MatchDecision::NoMatch => {
            println!("No match for \"{}\".", report.query.name);
            return;
        }
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Strength"),
        header_cell("Generic"),
        header_cell("Score"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for (rank, candidate) in report.outcome.candidates.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&candidate.record.id),
            Cell::new(&candidate.record.name),
            optional_cell(candidate.record.strength.as_deref()),
            optional_cell(candidate.record.generic_name.as_deref()),
            Cell::new(format!("{:.3}", candidate.score)),
        ]);
    }
    println!("{table}");
}

pub fn print_batch(report: &BatchReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Query"),
        header_cell("Decision"),
        header_cell("Match"),
        header_cell("Score"),
        header_cell("Candidates"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for entry in &report.entries {
        let best = entry.outcome.best();
        table.add_row(vec![
            Cell::new(&entry.query.name),
            decision_cell(entry.outcome.decision()),
            entry
                .outcome
                .matched
                .as_ref()
                .map_or_else(|| dim_cell("-"), |record| Cell::new(&record.name)),
            best.map_or_else(
                || dim_cell("-"),
                |candidate| Cell::new(format!("{:.3}", candidate.score)),
            ),
            Cell::new(entry.outcome.candidates.len()),
        ]);
    }
    println!("{table}");

    let (auto, review, unmatched) = report.counts();
    println!(
        "{} resolved: {auto} auto-matched, {review} for review, {unmatched} unmatched",
        report.entries.len()
    );
}

pub fn print_catalog(catalog: &[DrugRecord]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Strength"),
        header_cell("Generic"),
    ]);
    apply_table_style(&mut table);
    for record in catalog {
        table.add_row(vec![
            Cell::new(&record.id),
            Cell::new(&record.name),
            optional_cell(record.strength.as_deref()),
            optional_cell(record.generic_name.as_deref()),
        ]);
    }
    println!("{table}");
    println!("{} catalog entr(ies)", catalog.len());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::DarkGrey)
}

fn optional_cell(value: Option<&str>) -> Cell {
    value.map_or_else(|| dim_cell("-"), Cell::new)
}

fn decision_cell(decision: MatchDecision) -> Cell {
    match decision {
        MatchDecision::Auto => Cell::new("auto").fg(Color::Green),
        MatchDecision::Review => Cell::new("review").fg(Color::Yellow),
        MatchDecision::NoMatch => dim_cell("none"),
    }
}

//! Efficacy CLI: browse the nonprofit catalog from a terminal
//!
//! Reads the bundled dataset (or a JSON catalog file) directly and prints the
//! same view models the HTTP API serves.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use efficacy::compare::{Cell, ComparisonView, DISCLAIMER};
use efficacy::explore::ExploreView;
use efficacy::profile::ProfileView;
use efficacy::search::{search, SUGGESTION_LIMIT};
use efficacy::similarity::{SimilarityView, ViewMode};
use efficacy::{Catalog, ComparisonSelection, InMemoryCatalog};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "efficacy", version, about = "Efficacy nonprofit catalog CLI")]
struct Cli {
    /// Catalog JSON file (defaults to the bundled dataset)
    #[arg(long, global = true, env = "EFFICACY_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Search organizations by name, sector or tagline
    Search {
        query: String,

        #[arg(long, default_value_t = SUGGESTION_LIMIT)]
        limit: usize,
    },
    /// List organizations in a sector ("All", "Other" or a top sector)
    Explore {
        #[arg(long)]
        sector: Option<String>,
    },
    /// Show an organization profile
    Profile { id: String },
    /// Show similar organizations as a list or a network
    Similar {
        id: String,

        #[arg(long, default_value = "list")]
        view: String,

        #[arg(long)]
        limit: Option<usize>,
    },
    /// Compare up to four organizations side by side
    Compare {
        /// Identifiers, comma-separated or repeated
        #[arg(required = true, value_delimiter = ',')]
        ids: Vec<String>,
    },
}

/// Tabular rendering of a view model
struct Rows {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Rows {
    fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => InMemoryCatalog::from_path(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => InMemoryCatalog::bundled()?,
    };

    match cli.command {
        Commands::Search { query, limit } => run_search(&catalog, &query, limit, &cli.format),
        Commands::Explore { sector } => run_explore(&catalog, sector.as_deref(), &cli.format),
        Commands::Profile { id } => run_profile(&catalog, &id, &cli.format),
        Commands::Similar { id, view, limit } => {
            let mode: ViewMode = view.parse().map_err(anyhow::Error::msg)?;
            run_similar(&catalog, &id, mode, limit, &cli.format)
        }
        Commands::Compare { ids } => {
            let selection = ComparisonSelection::parse(Some(&ids.join(",")));
            run_compare(&catalog, &selection, &cli.format)
        }
    }
}

fn run_search(
    catalog: &dyn Catalog,
    query: &str,
    limit: usize,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let results = search(catalog, query, limit);
    let mut rows = Rows::new(&["id", "name", "sector"]);
    for suggestion in &results.suggestions {
        rows.push(vec![
            suggestion.id.to_string(),
            suggestion.name.clone(),
            suggestion.sector.clone(),
        ]);
    }
    emit(&results, &rows, format)?;
    if let (Some(empty), OutputFormat::Table) = (&results.empty, format) {
        println!("{}", empty);
    }
    Ok(())
}

fn run_explore(
    catalog: &dyn Catalog,
    sector: Option<&str>,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let view = ExploreView::build(catalog, sector);
    let mut rows = Rows::new(&["id", "name", "sector", "evidence", "budget"]);
    for card in &view.cards {
        rows.push(vec![
            card.id.to_string(),
            card.name.clone(),
            card.sector.clone(),
            yes_no(card.evidence_backed),
            card.budget.clone(),
        ]);
    }
    emit(&view, &rows, format)?;
    if let OutputFormat::Table = format {
        let chips: Vec<&str> = view.chips.iter().map(|chip| chip.label.as_str()).collect();
        println!("Sectors: {}", chips.join(" | "));
        println!("{}", view.caption());
    }
    Ok(())
}

fn run_profile(catalog: &dyn Catalog, id: &str, format: &OutputFormat) -> anyhow::Result<()> {
    let view = ProfileView::build(catalog, id, ViewMode::List);
    let profile = match &view {
        ProfileView::Found(profile) => profile,
        ProfileView::NotFound {
            requested,
            suggestions,
        } => {
            if let OutputFormat::Json = format {
                println!("{}", serde_json::to_string_pretty(&view)?);
            }
            let names: Vec<&str> = suggestions.iter().map(|s| s.id.as_str()).collect();
            bail!(
                "no data for \"{}\" yet; try one of: {}",
                requested,
                names.join(", ")
            );
        }
    };

    let header = &profile.header;
    let overview = &profile.overview;
    let mut rows = Rows::new(&["field", "value"]);
    let mut field = |name: &str, value: String| rows.push(vec![name.to_string(), value]);
    field("Name", header.name.clone());
    field("Tagline", header.tagline.clone());
    field("Sector", format!("{} ({})", header.sector, header.canonical_sector));
    field("Founded", header.founded.to_string());
    field("Location", header.location.clone());
    field("EIN", header.ein.clone());
    for fact in &overview.facts {
        field(fact.label, fact.value.clone());
    }
    for card in &profile.ratings {
        field(card.agency, format!("{} (out of {})", card.rating, card.best_rating));
    }
    field(
        "Evidence",
        format!(
            "{} ({} rigorous, {} funder, {} self-reported)",
            overview.evidence.status_label(),
            overview.evidence.rigorous,
            overview.evidence.funder,
            overview.evidence.self_reported
        ),
    );
    for finding in &overview.top_findings {
        field(
            finding.tier.label(),
            format!("{} ({}): {}", finding.source, finding.year, finding.summary),
        );
    }
    if overview.more_findings > 0 {
        field("", format!("+{} more findings", overview.more_findings));
    }
    for item in &profile.sidebar.items {
        field("Similar", format!("{} ({}%)", item.name, item.match_percent));
    }
    if profile.sidebar.overflow > 0 {
        field("", format!("+{} more organizations", profile.sidebar.overflow));
    }

    emit(&view, &rows, format)
}

fn run_similar(
    catalog: &dyn Catalog,
    id: &str,
    mode: ViewMode,
    limit: Option<usize>,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let org = catalog
        .get(id)
        .with_context(|| format!("organization not found: {}", id))?;
    let view = SimilarityView::new(org, catalog);

    match mode {
        ViewMode::List => {
            let list = view.list(limit);
            let mut rows = Rows::new(&["id", "name", "match", "evidence", "sector"]);
            for item in &list.items {
                rows.push(vec![
                    item.id.to_string(),
                    item.name.clone(),
                    format!("{}%", item.match_percent),
                    yes_no(item.evidence_backed),
                    item.sector.clone(),
                ]);
            }
            emit(&list, &rows, format)
        }
        ViewMode::Network => {
            let graph = view.graph(limit);
            let mut rows = Rows::new(&["node", "name", "x", "y", "edge"]);
            for node in &graph.nodes {
                let edge = graph
                    .edges
                    .iter()
                    .find(|edge| edge.target == node.id)
                    .map(|edge| edge.label.clone())
                    .unwrap_or_default();
                rows.push(vec![
                    node.id.clone(),
                    node.name.clone(),
                    format!("{:.1}", node.position.x),
                    format!("{:.1}", node.position.y),
                    edge,
                ]);
            }
            emit(&graph, &rows, format)
        }
    }
}

fn run_compare(
    catalog: &dyn Catalog,
    selection: &ComparisonSelection,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let view = ComparisonView::build(selection, catalog);
    let table = match &view {
        ComparisonView::Table { table, .. } => table,
        ComparisonView::Empty { suggestions } => {
            if let OutputFormat::Json = format {
                println!("{}", serde_json::to_string_pretty(&view)?);
                return Ok(());
            }
            let ids: Vec<&str> = suggestions.iter().map(|s| s.id.as_str()).collect();
            println!("No organizations selected. Try: {}", ids.join(", "));
            return Ok(());
        }
    };

    let mut headers = vec!["metric"];
    headers.extend(table.columns.iter().map(|column| column.name.as_str()));
    let mut rows = Rows::new(&headers);
    for section in &table.sections {
        for row in &section.rows {
            let mut cells = vec![format!("{}: {}", section.title, row.label)];
            cells.extend(row.cells.iter().map(Cell::to_string));
            rows.push(cells);
        }
    }

    emit(&view, &rows, format)?;
    if let OutputFormat::Table = format {
        println!("{}", DISCLAIMER);
    }
    Ok(())
}

fn emit<T: Serialize>(value: &T, rows: &Rows, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        OutputFormat::Csv => {
            println!("{}", rows.headers.join(","));
            for row in &rows.rows {
                let cells: Vec<String> = row.iter().map(|cell| format_csv_value(cell)).collect();
                println!("{}", cells.join(","));
            }
        }
        OutputFormat::Table => {
            if rows.rows.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(&rows.headers);
            for row in &rows.rows {
                table.add_row(row);
            }

            println!("{}", table);
            println!("{} row(s)", rows.rows.len());
        }
    }
    Ok(())
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "yes" } else { "no" };
    text.to_string()
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

//! Side-by-side comparison table
//!
//! Row-oriented projection over 1-4 organizations. Sector is shown as the raw
//! catalog label here, unlike explore and profile badges which show the
//! canonical sector.

use super::selection::{ComparisonSelection, MAX_COMPARED};
use crate::catalog::{Catalog, OrgId, Organization};
use crate::evidence::EvidenceSummary;
use crate::route::Route;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Placeholder shown for an absent recognition flag
pub const ABSENT: &str = "—";

/// Shown under a non-empty comparison
pub const DISCLAIMER: &str = "Data aggregated from public sources. Ratings and financial data may not reflect the most recent figures. Always verify with primary sources before making funding decisions.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Section {
    Overview,
    Ratings,
    ImpactEvidence,
    Leadership,
    CommunityIndicators,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::Ratings,
        Section::ImpactEvidence,
        Section::Leadership,
        Section::CommunityIndicators,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Ratings => "Ratings",
            Section::ImpactEvidence => "Impact Evidence",
            Section::Leadership => "Leadership",
            Section::CommunityIndicators => "Community Indicators",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    Sector,
    Founded,
    Budget,
    Employees,
    CharityWatch,
    CharityNavigator,
    GiveWell,
    BbbWiseGiving,
    RigorousEvaluations,
    TotalFindings,
    EvidenceStatus,
    Ceo,
    Headquarters,
    LmicBased,
    CommunityLed,
}

impl Metric {
    /// Every metric in row order
    pub const ALL: [Metric; 15] = [
        Metric::Sector,
        Metric::Founded,
        Metric::Budget,
        Metric::Employees,
        Metric::CharityWatch,
        Metric::CharityNavigator,
        Metric::GiveWell,
        Metric::BbbWiseGiving,
        Metric::RigorousEvaluations,
        Metric::TotalFindings,
        Metric::EvidenceStatus,
        Metric::Ceo,
        Metric::Headquarters,
        Metric::LmicBased,
        Metric::CommunityLed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Sector => "Sector",
            Metric::Founded => "Founded",
            Metric::Budget => "Annual Budget",
            Metric::Employees => "Employees",
            Metric::CharityWatch => "CharityWatch",
            Metric::CharityNavigator => "Charity Navigator",
            Metric::GiveWell => "GiveWell",
            Metric::BbbWiseGiving => "BBB Wise Giving",
            Metric::RigorousEvaluations => "RCTs / Rigorous",
            Metric::TotalFindings => "Total Findings",
            Metric::EvidenceStatus => "Evidence Status",
            Metric::Ceo => "CEO",
            Metric::Headquarters => "Headquarters",
            Metric::LmicBased => "LMIC-Based",
            Metric::CommunityLed => "Community-Led",
        }
    }

    pub fn section(self) -> Section {
        match self {
            Metric::Sector | Metric::Founded | Metric::Budget | Metric::Employees => {
                Section::Overview
            }
            Metric::CharityWatch
            | Metric::CharityNavigator
            | Metric::GiveWell
            | Metric::BbbWiseGiving => Section::Ratings,
            Metric::RigorousEvaluations | Metric::TotalFindings | Metric::EvidenceStatus => {
                Section::ImpactEvidence
            }
            Metric::Ceo | Metric::Headquarters => Section::Leadership,
            Metric::LmicBased | Metric::CommunityLed => Section::CommunityIndicators,
        }
    }

    /// Cell value of this metric for one organization
    pub fn cell(self, org: &Organization, evidence: &EvidenceSummary) -> Cell {
        match self {
            Metric::Sector => Cell::Text(org.sector.clone()),
            Metric::Founded => Cell::Year(org.founded),
            Metric::Budget => Cell::Text(org.budget.clone()),
            Metric::Employees => Cell::Text(org.employees_display()),
            Metric::CharityWatch => Cell::Text(org.ratings.charity_watch.clone()),
            Metric::CharityNavigator => Cell::Score(org.ratings.charity_navigator),
            Metric::GiveWell => Cell::Text(org.ratings.give_well.clone()),
            Metric::BbbWiseGiving => Cell::Text(org.ratings.bbb_wise_giving.clone()),
            Metric::RigorousEvaluations => Cell::Count(evidence.rigorous),
            Metric::TotalFindings => Cell::Count(evidence.total),
            Metric::EvidenceStatus => Cell::Evidence(evidence.evidence_backed),
            Metric::Ceo => Cell::Text(org.ceo.clone()),
            Metric::Headquarters => Cell::Text(org.location.clone()),
            Metric::LmicBased => Cell::Indicator {
                present: org.lmic_based,
                label: Metric::LmicBased.label(),
            },
            Metric::CommunityLed => Cell::Indicator {
                present: org.community_led,
                label: Metric::CommunityLed.label(),
            },
        }
    }
}

/// A typed table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Cell {
    Text(String),
    Year(u16),
    /// Charity Navigator score out of 100
    Score(u8),
    Count(usize),
    /// Evidence-backed status
    Evidence(bool),
    /// Recognition badge; absence has no text of its own
    Indicator { present: bool, label: &'static str },
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Year(year) => write!(f, "{}", year),
            Cell::Score(score) => write!(f, "{}", score),
            Cell::Count(count) => write!(f, "{}", count),
            Cell::Evidence(true) => f.write_str("Evidence-backed"),
            Cell::Evidence(false) => f.write_str("Limited evidence"),
            Cell::Indicator { present: true, label } => f.write_str(label),
            Cell::Indicator { present: false, .. } => f.write_str(ABSENT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnHeader {
    pub id: OrgId,
    pub name: String,
    pub href: String,
}

impl ColumnHeader {
    pub fn for_org(org: &Organization) -> Self {
        Self {
            id: org.id.clone(),
            name: org.name.clone(),
            href: Route::profile(org.id.clone()).href(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricRow {
    pub metric: Metric,
    pub label: &'static str,
    /// One cell per column, in column order
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSection {
    pub section: Section,
    pub title: &'static str,
    pub rows: Vec<MetricRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    pub columns: Vec<ColumnHeader>,
    pub sections: Vec<TableSection>,
}

impl ComparisonTable {
    /// Resolve the selection against the catalog and project it.
    ///
    /// Identifiers that do not resolve are dropped; they never fail the table.
    /// The column cap applies to the first `MAX_COMPARED` that do resolve.
    pub fn build(selection: &ComparisonSelection, catalog: &dyn Catalog) -> Self {
        let resolved: Vec<&Organization> = selection
            .ids()
            .iter()
            .filter_map(|id| {
                let org = catalog.get(id.as_str());
                if org.is_none() {
                    warn!("Dropping unknown organization '{}' from comparison", id);
                }
                org
            })
            .collect();
        if resolved.len() > MAX_COMPARED {
            warn!(
                "Comparison resolved {} organizations, keeping the first {}",
                resolved.len(),
                MAX_COMPARED
            );
        }
        Self::from_orgs(&resolved)
    }

    /// Build a table over already-resolved organizations (at most `MAX_COMPARED`)
    pub fn from_orgs(orgs: &[&Organization]) -> Self {
        let orgs = &orgs[..orgs.len().min(MAX_COMPARED)];
        let evidence: Vec<EvidenceSummary> =
            orgs.iter().map(|org| EvidenceSummary::for_org(org)).collect();

        let sections = Section::ALL
            .iter()
            .map(|section| TableSection {
                section: *section,
                title: section.title(),
                rows: Metric::ALL
                    .iter()
                    .filter(|metric| metric.section() == *section)
                    .map(|metric| MetricRow {
                        metric: *metric,
                        label: metric.label(),
                        cells: orgs
                            .iter()
                            .zip(&evidence)
                            .map(|(org, summary)| metric.cell(org, summary))
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            columns: orgs.iter().map(|org| ColumnHeader::for_org(org)).collect(),
            sections,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &MetricRow> {
        self.sections.iter().flat_map(|section| section.rows.iter())
    }

    pub fn row(&self, metric: Metric) -> Option<&MetricRow> {
        self.rows().find(|row| row.metric == metric)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// The comparison page: either a table or the empty "start comparing" state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ComparisonView {
    Empty {
        /// Quick-add suggestions (first organizations in catalog order)
        suggestions: Vec<ColumnHeader>,
    },
    Table {
        table: ComparisonTable,
        /// Selected identifiers without a column: unresolved or past the cap
        dropped: Vec<OrgId>,
        disclaimer: &'static str,
    },
}

impl ComparisonView {
    /// Table for the selection, or quick-add suggestions when nothing resolves
    pub fn build(selection: &ComparisonSelection, catalog: &dyn Catalog) -> Self {
        let table = ComparisonTable::build(selection, catalog);
        if table.columns.is_empty() {
            return ComparisonView::Empty {
                suggestions: catalog
                    .all()
                    .into_iter()
                    .take(MAX_COMPARED)
                    .map(ColumnHeader::for_org)
                    .collect(),
            };
        }

        let dropped = selection
            .ids()
            .iter()
            .filter(|id| !table.columns.iter().any(|column| column.id == **id))
            .cloned()
            .collect();
        ComparisonView::Table {
            table,
            dropped,
            disclaimer: DISCLAIMER,
        }
    }

    pub fn table(&self) -> Option<&ComparisonTable> {
        match self {
            ComparisonView::Table { table, .. } => Some(table),
            ComparisonView::Empty { .. } => None,
        }
    }
}

/// Organizations offered by the "Add Organization" picker.
///
/// Already-selected organizations are excluded. A blank query lists every
/// other organization; otherwise name or raw sector must contain the query,
/// ignoring case.
pub fn candidates<'a>(
    catalog: &'a dyn Catalog,
    selection: &ComparisonSelection,
    query: &str,
) -> Vec<&'a Organization> {
    let needle = query.trim().to_lowercase();
    catalog
        .all()
        .into_iter()
        .filter(|org| !selection.contains(org.id.as_str()))
        .filter(|org| {
            needle.is_empty()
                || org.name.to_lowercase().contains(&needle)
                || org.sector.to_lowercase().contains(&needle)
        })
        .collect()
}

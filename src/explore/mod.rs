//! Explore page and homepage view models
//!
//! Both pages show sector chips from the same top-N aggregation; the explore
//! page also filters the catalog by the selected chip.

use crate::catalog::{Catalog, OrgId, Organization};
use crate::evidence::EvidenceSummary;
use crate::route::Route;
use crate::sector::{
    normalize_sector, SectorFilter, SectorTaxonomy, ALL_SECTORS, EXPLORE_SECTOR_LIMIT,
    HOME_SECTOR_LIMIT, OTHER_SECTORS,
};
use serde::Serialize;

/// Fixed "Orgs Other Users are Checking Out" list on the homepage
pub const TRENDING_IDS: [&str; 6] = [
    "givedirectly",
    "teach-for-america",
    "year-up",
    "boys-girls-clubs",
    "against-malaria-foundation",
    "harlem-childrens-zone",
];

/// Summary card for one organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgCard {
    pub id: OrgId,
    pub name: String,
    /// Canonical sector badge
    pub sector: String,
    pub evidence_backed: bool,
    pub tagline: String,
    pub budget: String,
    pub href: String,
}

impl OrgCard {
    pub fn for_org(org: &Organization) -> Self {
        Self {
            id: org.id.clone(),
            name: org.name.clone(),
            sector: normalize_sector(&org.sector),
            evidence_backed: EvidenceSummary::for_org(org).evidence_backed,
            tagline: org.tagline.clone(),
            budget: org.budget.clone(),
            href: Route::profile(org.id.clone()).href(),
        }
    }
}

/// A sector chip with the link it navigates to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectorChip {
    pub label: String,
    pub selected: bool,
    pub href: String,
}

impl SectorChip {
    fn new(label: &str, selected: &SectorFilter) -> Self {
        let filter = match label {
            ALL_SECTORS => SectorFilter::All,
            OTHER_SECTORS => SectorFilter::Other,
            named => SectorFilter::Named(named.to_string()),
        };
        Self {
            label: label.to_string(),
            selected: filter == *selected,
            href: Route::explore(filter.to_param()).href(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExploreView {
    pub chips: Vec<SectorChip>,
    pub selected: SectorFilter,
    pub cards: Vec<OrgCard>,
    /// Catalog size, for "Browse N organizations by sector"
    pub catalog_size: usize,
    /// Shareable link reproducing this view
    pub href: String,
}

impl ExploreView {
    /// Build the explore page for a raw `sector` query parameter.
    ///
    /// Unknown sectors select "Other" rather than an empty list.
    pub fn build(catalog: &dyn Catalog, sector_param: Option<&str>) -> Self {
        let orgs = catalog.all();
        let taxonomy = SectorTaxonomy::build(orgs.iter().copied(), EXPLORE_SECTOR_LIMIT);
        let selected = taxonomy.resolve(sector_param);

        let cards = taxonomy
            .filter(orgs.iter().copied(), &selected)
            .into_iter()
            .map(OrgCard::for_org)
            .collect();

        Self {
            chips: taxonomy
                .chips()
                .iter()
                .map(|label| SectorChip::new(label, &selected))
                .collect(),
            href: Route::explore(selected.to_param()).href(),
            catalog_size: orgs.len(),
            selected,
            cards,
        }
    }

    /// "3 organizations in WASH", "1 organization"
    pub fn caption(&self) -> String {
        let count = self.cards.len();
        let noun = if count == 1 {
            "organization"
        } else {
            "organizations"
        };
        match &self.selected {
            SectorFilter::All => format!("{} {}", count, noun),
            other => format!("{} {} in {}", count, noun, other.label()),
        }
    }

    pub fn ids(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.id.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    /// Top sectors (no "All"/"Other"), each linking to the explore page
    pub sectors: Vec<SectorChip>,
    pub trending: Vec<OrgCard>,
}

impl HomeView {
    pub fn build(catalog: &dyn Catalog) -> Self {
        let taxonomy = SectorTaxonomy::build(catalog.all(), HOME_SECTOR_LIMIT);
        // chips on the homepage only link out; none is selected
        let unselected = SectorFilter::All;
        Self {
            sectors: taxonomy
                .top_sectors()
                .iter()
                .map(|sector| SectorChip::new(sector, &unselected))
                .collect(),
            trending: TRENDING_IDS
                .iter()
                .filter_map(|id| catalog.get(id))
                .map(OrgCard::for_org)
                .collect(),
        }
    }
}

//! Top-N sector aggregation and sector filtering
//!
//! Builds the filter chips for the explore page and the homepage preview:
//! "All", the N most frequent canonical sectors in alphabetical order, then
//! "Other" for every organization outside those N.

use super::normalize::normalize_sector;
use crate::catalog::Organization;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::fmt;

/// Pseudo-sector selecting every organization
pub const ALL_SECTORS: &str = "All";

/// Pseudo-sector selecting organizations outside the top-N sectors
pub const OTHER_SECTORS: &str = "Other";

/// Number of named sector chips on the explore page
pub const EXPLORE_SECTOR_LIMIT: usize = 10;

/// Number of named sector chips in the homepage preview
pub const HOME_SECTOR_LIMIT: usize = 8;

/// A resolved sector selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "sector", rename_all = "lowercase")]
pub enum SectorFilter {
    All,
    Other,
    Named(String),
}

impl SectorFilter {
    /// Chip label for this selection
    pub fn label(&self) -> &str {
        match self {
            SectorFilter::All => ALL_SECTORS,
            SectorFilter::Other => OTHER_SECTORS,
            SectorFilter::Named(sector) => sector,
        }
    }

    /// Value written back to the `sector` query parameter; `None` removes it
    pub fn to_param(&self) -> Option<String> {
        match self {
            SectorFilter::All => None,
            other => Some(other.label().to_string()),
        }
    }
}

impl fmt::Display for SectorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical sector frequency table reduced to its N most frequent entries.
///
/// Frequency ties are broken by first-discovery order over the input
/// sequence, so the result is deterministic for a fixed catalog order.
#[derive(Debug, Clone)]
pub struct SectorTaxonomy {
    /// Top-N canonical sectors, alphabetically sorted
    top: Vec<String>,
    top_set: FxHashSet<String>,
    /// Number of organizations per canonical sector, over the whole input
    counts: FxHashMap<String, usize>,
}

impl SectorTaxonomy {
    pub fn build<'a, I>(orgs: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = &'a Organization>,
    {
        // sector -> (count, discovery index)
        let mut counts: FxHashMap<String, (usize, usize)> = FxHashMap::default();
        for org in orgs {
            let discovered = counts.len();
            counts
                .entry(normalize_sector(&org.sector))
                .or_insert((0, discovered))
                .0 += 1;
        }

        let mut ranked: Vec<(&String, usize, usize)> = counts
            .iter()
            .map(|(sector, (count, discovered))| (sector, *count, *discovered))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        let mut top: Vec<String> = ranked
            .into_iter()
            .take(limit)
            .map(|(sector, _, _)| sector.clone())
            .collect();
        top.sort();

        let top_set = top.iter().cloned().collect();
        let counts = counts
            .into_iter()
            .map(|(sector, (count, _))| (sector, count))
            .collect();

        Self {
            top,
            top_set,
            counts,
        }
    }

    /// Top-N sectors in display (alphabetical) order
    pub fn top_sectors(&self) -> &[String] {
        &self.top
    }

    /// Chip labels: "All", the top-N sectors, then "Other"
    pub fn chips(&self) -> Vec<String> {
        let mut chips = Vec::with_capacity(self.top.len() + 2);
        chips.push(ALL_SECTORS.to_string());
        chips.extend(self.top.iter().cloned());
        chips.push(OTHER_SECTORS.to_string());
        chips
    }

    pub fn is_top(&self, canonical: &str) -> bool {
        self.top_set.contains(canonical)
    }

    /// Number of organizations whose canonical sector is `canonical`
    pub fn count(&self, canonical: &str) -> usize {
        self.counts.get(canonical).copied().unwrap_or(0)
    }

    /// Resolve an externally supplied sector (e.g., a deep link).
    ///
    /// A missing parameter means "All"; anything that is not a top-N sector
    /// falls back to "Other".
    pub fn resolve(&self, param: Option<&str>) -> SectorFilter {
        match param {
            None | Some(ALL_SECTORS) => SectorFilter::All,
            Some(OTHER_SECTORS) => SectorFilter::Other,
            Some(sector) if self.is_top(sector) => SectorFilter::Named(sector.to_string()),
            Some(_) => SectorFilter::Other,
        }
    }

    pub fn matches(&self, filter: &SectorFilter, org: &Organization) -> bool {
        match filter {
            SectorFilter::All => true,
            SectorFilter::Other => !self.is_top(&normalize_sector(&org.sector)),
            SectorFilter::Named(sector) => normalize_sector(&org.sector) == *sector,
        }
    }

    /// Organizations selected by `filter`, in input order
    pub fn filter<'a, I>(&self, orgs: I, filter: &SectorFilter) -> Vec<&'a Organization>
    where
        I: IntoIterator<Item = &'a Organization>,
    {
        orgs.into_iter()
            .filter(|org| self.matches(filter, org))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::fixtures::org;

    fn sample() -> Vec<Organization> {
        vec![
            org("givedirectly", "GiveDirectly", "Cash Transfers"),
            org("wateraid", "WaterAid", "Water, Sanitation & Hygiene (WASH)"),
        ]
    }

    #[test]
    fn test_wash_scenario() {
        let orgs = sample();
        let taxonomy = SectorTaxonomy::build(&orgs, EXPLORE_SECTOR_LIMIT);
        let filter = taxonomy.resolve(Some("WASH"));
        assert_eq!(filter, SectorFilter::Named("WASH".to_string()));

        let ids: Vec<&str> = taxonomy
            .filter(&orgs, &filter)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, vec!["wateraid"]);
    }

    #[test]
    fn test_chips_are_alphabetical_between_all_and_other() {
        let orgs = sample();
        let taxonomy = SectorTaxonomy::build(&orgs, EXPLORE_SECTOR_LIMIT);
        assert_eq!(taxonomy.chips(), vec!["All", "Cash Transfers", "WASH", "Other"]);
    }

    #[test]
    fn test_ties_broken_by_discovery_order() {
        let orgs = vec![
            org("a", "A", "Zoology"),
            org("b", "B", "Arts"),
            org("c", "C", "Health"),
            org("d", "D", "Health"),
        ];
        let taxonomy = SectorTaxonomy::build(&orgs, 2);
        // Health (2) wins outright; Zoology beats Arts because it was seen first
        assert_eq!(taxonomy.top_sectors(), &["Health".to_string(), "Zoology".to_string()]);
        assert_eq!(taxonomy.count("Health"), 2);
        assert_eq!(taxonomy.count("Arts"), 1);
    }

    #[test]
    fn test_other_is_complement_of_top() {
        let orgs = vec![
            org("a", "A", "Education"),
            org("b", "B", "Education / Literacy"),
            org("c", "C", "Housing"),
            org("d", "D", "Microfinance"),
            org("e", "E", "Global Health & Humanitarian"),
            org("f", "F", "Global Health"),
        ];
        let taxonomy = SectorTaxonomy::build(&orgs, 2);
        assert_eq!(taxonomy.top_sectors(), &["Education".to_string(), "Global Health".to_string()]);

        let other: Vec<&str> = taxonomy
            .filter(&orgs, &SectorFilter::Other)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(other, vec!["c", "d"]);
    }

    #[test]
    fn test_unknown_deep_link_falls_back_to_other() {
        let taxonomy = SectorTaxonomy::build(&sample(), EXPLORE_SECTOR_LIMIT);
        assert_eq!(taxonomy.resolve(Some("Space Exploration")), SectorFilter::Other);
        assert_eq!(taxonomy.resolve(Some("wash")), SectorFilter::Other);
        assert_eq!(taxonomy.resolve(Some("")), SectorFilter::Other);
        assert_eq!(taxonomy.resolve(None), SectorFilter::All);
        assert_eq!(taxonomy.resolve(Some("All")), SectorFilter::All);
    }

    #[test]
    fn test_param_write_back() {
        assert_eq!(SectorFilter::All.to_param(), None);
        assert_eq!(SectorFilter::Other.to_param().as_deref(), Some("Other"));
        assert_eq!(
            SectorFilter::Named("WASH".to_string()).to_param().as_deref(),
            Some("WASH")
        );
    }

    #[test]
    fn test_empty_input() {
        let taxonomy = SectorTaxonomy::build(std::iter::empty(), EXPLORE_SECTOR_LIMIT);
        assert!(taxonomy.top_sectors().is_empty());
        assert_eq!(taxonomy.chips(), vec!["All", "Other"]);
    }
}

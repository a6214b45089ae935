//! Organization search and typeahead
//!
//! Free-text queries resolve to profile routes through a slug; suggestions
//! match name, raw sector or tagline.

use crate::catalog::{Catalog, OrgId, Organization};
use crate::empty::EmptyState;
use crate::route::Route;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Default number of typeahead suggestions
pub const SUGGESTION_LIMIT: usize = 8;

/// "Try:" links shown under the search box, as (label, query)
pub const SAMPLE_QUERIES: [(&str, &str); 3] = [
    ("WaterAid", "WaterAid"),
    ("Doctors Without Borders", "Doctors Without Borders"),
    ("Harlem Children's Zone", "Harlem Childrens Zone"),
];

/// Whitespace runs and characters not allowed in a slug.
/// Both patterns are literals, so compiling them cannot fail at runtime.
fn slug_patterns() -> &'static (Regex, Regex) {
    static PATTERNS: OnceLock<(Regex, Regex)> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        (
            Regex::new(r"\s+").expect("whitespace pattern is a valid literal"),
            Regex::new(r"[^a-z0-9-]").expect("slug pattern is a valid literal"),
        )
    })
}

/// URL slug for a free-text query ("Doctors Without Borders" -> "doctors-without-borders")
pub fn slugify(query: &str) -> String {
    let (whitespace, disallowed) = slug_patterns();
    let dashed = whitespace.replace_all(&query.to_lowercase(), "-").into_owned();
    disallowed.replace_all(&dashed, "").into_owned()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: OrgId,
    pub name: String,
    pub sector: String,
    pub href: String,
}

impl Suggestion {
    fn for_org(org: &Organization) -> Self {
        Self {
            id: org.id.clone(),
            name: org.name.clone(),
            sector: org.sector.clone(),
            href: Route::profile(org.id.clone()).href(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
    /// Set when a non-blank query matched nothing
    pub empty: Option<EmptyState>,
}

/// Typeahead suggestions for `query`.
///
/// Matching is a case-insensitive substring test on name, raw sector and
/// tagline. Organizations whose name starts with the query come first; the
/// rest keep catalog order.
pub fn search(catalog: &dyn Catalog, query: &str, limit: usize) -> SearchResults {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchResults {
            query: query.to_string(),
            suggestions: Vec::new(),
            empty: None,
        };
    }

    let mut matches: Vec<(bool, &Organization)> = catalog
        .all()
        .into_iter()
        .filter_map(|org| {
            let name = org.name.to_lowercase();
            let hit = name.contains(&needle)
                || org.sector.to_lowercase().contains(&needle)
                || org.tagline.to_lowercase().contains(&needle);
            hit.then(|| (name.starts_with(&needle), org))
        })
        .collect();
    // stable: prefix matches first, catalog order within each group
    matches.sort_by_key(|(prefix, _)| !*prefix);

    let suggestions: Vec<Suggestion> = matches
        .into_iter()
        .take(limit)
        .map(|(_, org)| Suggestion::for_org(org))
        .collect();
    let empty = suggestions
        .is_empty()
        .then(|| EmptyState::no_results(query.trim()));

    SearchResults {
        query: query.to_string(),
        suggestions,
        empty,
    }
}

/// Profile route for a submitted query.
///
/// The slug is used when it names a catalog organization; otherwise the best
/// suggestion wins. With no match at all the slug route is still returned and
/// the profile page shows its not-found state. Blank queries go nowhere.
pub fn submit(catalog: &dyn Catalog, query: &str) -> Option<Route> {
    if query.trim().is_empty() {
        return None;
    }
    let slug = slugify(query.trim());
    if catalog.contains(&slug) {
        return Some(Route::profile(slug));
    }
    let best = search(catalog, query, 1).suggestions.into_iter().next();
    Some(match best {
        Some(suggestion) => Route::profile(suggestion.id),
        None => Route::profile(slug),
    })
}

/// Routes behind the sample links
pub fn sample_routes() -> Vec<(&'static str, Route)> {
    SAMPLE_QUERIES
        .iter()
        .map(|(label, query)| (*label, Route::profile(slugify(query))))
        .collect()
}

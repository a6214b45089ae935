//! Efficacy: nonprofit intelligence view models
//!
//! Read-only presentation logic over a catalog of nonprofit organizations:
//! sector exploration, impact evidence aggregation, similar-organization
//! list and network views, and side-by-side comparison.
//!
//! # Architecture
//!
//! - `catalog`: immutable organization records and the `Catalog` accessor
//! - `sector`: canonical sector labels and top-N filter chips
//! - `evidence`: tier counts and priority-ordered findings
//! - `similarity`: ranked list and radial network projections
//! - `compare`: selection state and the comparison table
//! - `search`, `explore`, `profile`: page-level view models
//! - `route`: shareable URLs for every addressable view
//! - `http`: JSON API over the view models
//!
//! Every view model takes the catalog explicitly, so tests and alternative
//! stores plug in without global state.
//!
//! ## Example Usage
//!
//! ```rust
//! use efficacy::{Catalog, ComparisonSelection, ComparisonView, InMemoryCatalog};
//!
//! let catalog = InMemoryCatalog::bundled().unwrap();
//! assert!(catalog.get("givedirectly").is_some());
//!
//! let selection = ComparisonSelection::parse(Some("givedirectly,wateraid"));
//! let view = ComparisonView::build(&selection, &catalog);
//! assert_eq!(view.table().unwrap().column_count(), 2);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod compare;
pub mod empty;
pub mod evidence;
pub mod explore;
pub mod http;
pub mod profile;
pub mod route;
pub mod search;
pub mod sector;
pub mod similarity;

// Re-export main types for convenience
pub use catalog::{
    Catalog, CatalogError, CatalogResult, EvidenceTier, ImpactFinding, InMemoryCatalog,
    KeyFinding, KeyPerson, OrgId, Organization, Ratings, Recognition, SimilarOrg,
};

pub use sector::{normalize_sector, SectorFilter, SectorTaxonomy};

pub use evidence::{remaining_count, top_findings, EvidenceSummary};

pub use similarity::{
    Navigation, SimilarityGraph, SimilarityList, SimilarityProjection, SimilarityView, ViewMode,
};

pub use compare::{candidates, ComparisonSelection, ComparisonTable, ComparisonView};

pub use empty::EmptyState;
pub use explore::{ExploreView, HomeView};
pub use profile::{ProfileTab, ProfileView};
pub use route::Route;
pub use search::{search, slugify, submit};

pub use http::{HttpError, HttpServer, ServerConfig};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

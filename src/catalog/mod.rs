//! Organization catalog
//!
//! Immutable, identifier-indexed records loaded once at startup:
//! - Record types: organizations, ratings, people, similar organizations, findings
//! - The `Catalog` accessor trait every view model is handed explicitly
//! - `InMemoryCatalog`, backed by the bundled dataset or a JSON file

pub mod store;
pub mod types;

pub use store::{Catalog, CatalogError, CatalogResult, InMemoryCatalog};
pub use types::{
    EvidenceTier, ImpactFinding, KeyFinding, KeyPerson, OrgId, Organization, Ratings,
    Recognition, SimilarOrg,
};

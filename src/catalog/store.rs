//! Catalog accessor and the in-memory backing store
//!
//! The catalog is built once at startup and never mutated afterwards, so every
//! accessor is a plain synchronous read.

use super::types::{OrgId, Organization};
use indexmap::IndexMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Dataset compiled into the binary
const BUNDLED_CATALOG: &str = include_str!("../../data/organizations.json");

/// Errors that can occur while loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate organization identifier: {0}")]
    DuplicateIdentifier(OrgId),

    #[error("Organization '{0}' has an empty identifier")]
    EmptyIdentifier(String),

    #[error("Malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read-only access to organization records.
///
/// View models take a `&dyn Catalog` (or `&impl Catalog`) so a test fixture or
/// another backing store can be substituted without touching call sites.
pub trait Catalog: Send + Sync {
    /// Every record, in catalog order
    fn all(&self) -> Vec<&Organization>;

    /// Exact, case-sensitive lookup. `None` is a normal outcome.
    fn get(&self, id: &str) -> Option<&Organization>;

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

/// Insertion-ordered, identifier-indexed catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: IndexMap<OrgId, Organization>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records, preserving their order.
    ///
    /// Identifiers must be non-empty and unique.
    pub fn from_records(records: Vec<Organization>) -> CatalogResult<Self> {
        let mut index = IndexMap::with_capacity(records.len());
        for org in records {
            if org.id.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyIdentifier(org.name));
            }
            if index.contains_key(&org.id) {
                return Err(CatalogError::DuplicateIdentifier(org.id));
            }
            index.insert(org.id.clone(), org);
        }
        Ok(Self { records: index })
    }

    /// Parse a JSON array of organizations
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let records: Vec<Organization> = serde_json::from_str(json)?;
        let catalog = Self::from_records(records)?;
        debug!("Parsed catalog with {} organizations", catalog.len());
        Ok(catalog)
    }

    /// Load a JSON catalog file
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            "Loaded {} organizations from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The dataset shipped with the crate
    pub fn bundled() -> CatalogResult<Self> {
        let catalog = Self::from_json_str(BUNDLED_CATALOG)?;
        info!("Loaded bundled catalog ({} organizations)", catalog.len());
        Ok(catalog)
    }

    /// Iterate records in catalog order without allocating
    pub fn iter(&self) -> impl Iterator<Item = &Organization> {
        self.records.values()
    }
}

impl Catalog for InMemoryCatalog {
    fn all(&self) -> Vec<&Organization> {
        self.records.values().collect()
    }

    fn get(&self, id: &str) -> Option<&Organization> {
        self.records.get(id)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

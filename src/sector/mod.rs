//! Sector taxonomy
//!
//! Canonical sector labels and the top-N aggregation used for filter chips,
//! card badges and profile headers.

pub mod normalize;
pub mod taxonomy;

pub use normalize::{normalize_sector, primary_segment, COMPOUND_SEPARATOR};
pub use taxonomy::{
    SectorFilter, SectorTaxonomy, ALL_SECTORS, EXPLORE_SECTOR_LIMIT, HOME_SECTOR_LIMIT,
    OTHER_SECTORS,
};

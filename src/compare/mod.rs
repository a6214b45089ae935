//! Side-by-side organization comparison
//!
//! Selection state (addressable as `?org=a,b`) and the metric table built
//! from it.

pub mod selection;
pub mod table;

pub use selection::{ComparisonSelection, MAX_COMPARED};
pub use table::{
    candidates, Cell, ColumnHeader, ComparisonTable, ComparisonView, Metric, MetricRow,
    Section, TableSection, ABSENT, DISCLAIMER,
};

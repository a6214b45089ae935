//! Empty states
//!
//! Neither kind is an error: both are ordinary view outcomes rendered with a
//! message.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EmptyState {
    /// A search query matched nothing
    NoResults { query: String },
    /// A section whose data is not collected yet
    NotYetAvailable { feature: String },
}

impl EmptyState {
    pub fn no_results(query: impl Into<String>) -> Self {
        EmptyState::NoResults {
            query: query.into(),
        }
    }

    pub fn not_yet_available(feature: impl Into<String>) -> Self {
        EmptyState::NotYetAvailable {
            feature: feature.into(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            EmptyState::NoResults { query } => {
                format!("No organizations found for \"{}\"", query)
            }
            EmptyState::NotYetAvailable { feature } => {
                format!("{} coming soon.", feature)
            }
        }
    }
}

impl fmt::Display for EmptyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

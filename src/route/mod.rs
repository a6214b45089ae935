//! Addressable view state
//!
//! Every shareable view is reachable by URL: the explore page carries the
//! selected sector, the comparison page carries its comma-separated
//! selection, and profiles are keyed by identifier. Parsing and writing go
//! through `Route` so a shared link reproduces the same view.

use crate::catalog::OrgId;
use crate::compare::ComparisonSelection;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// Characters left unescaped in query values (same set as `encodeURIComponent`)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const SECTOR_PARAM: &str = "sector";
pub const COMPARE_PARAM: &str = "org";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum Route {
    Home,
    Explore {
        /// Raw sector parameter; resolution against the taxonomy happens in the view
        sector: Option<String>,
    },
    Compare {
        selection: ComparisonSelection,
    },
    Profile {
        id: OrgId,
    },
}

impl Route {
    pub fn profile(id: impl Into<OrgId>) -> Self {
        Route::Profile { id: id.into() }
    }

    pub fn explore(sector: Option<String>) -> Self {
        Route::Explore { sector }
    }

    pub fn compare(selection: ComparisonSelection) -> Self {
        Route::Compare { selection }
    }

    /// Parse a path with optional query string; unknown paths yield `None`
    pub fn parse(path_and_query: &str) -> Option<Route> {
        let (path, query) = match path_and_query.split_once('?') {
            Some((path, query)) => (path, query),
            None => (path_and_query, ""),
        };
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => Some(Route::Home),
            "/explore" => Some(Route::Explore {
                sector: query_param(query, SECTOR_PARAM),
            }),
            "/compare" => Some(Route::Compare {
                selection: ComparisonSelection::parse(query_param(query, COMPARE_PARAM).as_deref()),
            }),
            _ => {
                let id = path.strip_prefix("/org/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Some(Route::Profile {
                    id: OrgId::new(decode(id)),
                })
            }
        }
    }

    /// Shareable URL for this route
    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Explore { sector: None } => "/explore".to_string(),
            Route::Explore {
                sector: Some(sector),
            } => format!("/explore?{}={}", SECTOR_PARAM, encode(sector)),
            Route::Compare { selection } => match selection.to_param() {
                None => "/compare".to_string(),
                Some(_) => {
                    let ids: Vec<String> = selection
                        .ids()
                        .iter()
                        .map(|id| encode(id.as_str()))
                        .collect();
                    format!("/compare?{}={}", COMPARE_PARAM, ids.join(","))
                }
            },
            Route::Profile { id } => format!("/org/{}", encode(id.as_str())),
        }
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

fn decode(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// First value of `name` in a query string, percent-decoded
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key) == name).then(|| decode(value))
        })
}

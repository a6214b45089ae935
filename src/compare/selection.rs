//! Comparison selection state
//!
//! An ordered set of identifiers, addressable as a comma-separated query
//! parameter. Interactive additions stop at `MAX_COMPARED`; a parsed
//! parameter keeps every id so the cap can be applied after resolution.

use crate::catalog::OrgId;
use serde::Serialize;

/// Maximum number of organizations compared side by side
pub const MAX_COMPARED: usize = 4;

const SEPARATOR: char = ',';

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComparisonSelection {
    ids: Vec<OrgId>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the selection from its parameter form ("a,b,c").
    ///
    /// Empty segments are skipped and repeats are ignored. Nothing is capped
    /// here: ids that fail to resolve must not take a column from ones that do.
    pub fn parse(param: Option<&str>) -> Self {
        let mut selection = Self::new();
        for id in param.unwrap_or_default().split(SEPARATOR) {
            if !id.is_empty() && !selection.contains(id) {
                selection.ids.push(OrgId::new(id));
            }
        }
        selection
    }

    /// Parameter form, or `None` when nothing is selected
    pub fn to_param(&self) -> Option<String> {
        if self.ids.is_empty() {
            return None;
        }
        let ids: Vec<&str> = self.ids.iter().map(OrgId::as_str).collect();
        Some(ids.join(","))
    }

    /// Append an identifier. Already selected or over the cap is a no-op.
    pub fn add(&mut self, id: impl Into<OrgId>) -> bool {
        let id = id.into();
        if self.is_full() || self.contains(id.as_str()) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove an identifier. Not selected is a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|selected| selected.as_str() != id);
        self.ids.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected.as_str() == id)
    }

    pub fn ids(&self) -> &[OrgId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(selection: &ComparisonSelection) -> Vec<&str> {
        selection.ids().iter().map(|id| id.as_str()).collect()
    }

    #[test]
    fn test_parse_round_trip() {
        let selection = ComparisonSelection::parse(Some("wateraid,givedirectly,brac"));
        assert_eq!(ids(&selection), vec!["wateraid", "givedirectly", "brac"]);
        assert_eq!(selection.to_param().as_deref(), Some("wateraid,givedirectly,brac"));
    }

    #[test]
    fn test_parse_skips_empty_and_duplicates() {
        let selection = ComparisonSelection::parse(Some(",a,,b,a,"));
        assert_eq!(ids(&selection), vec!["a", "b"]);
        assert!(ComparisonSelection::parse(Some("")).is_empty());
        assert!(ComparisonSelection::parse(None).is_empty());
        assert_eq!(ComparisonSelection::new().to_param(), None);
    }

    #[test]
    fn test_parse_keeps_ids_past_the_cap() {
        let mut selection = ComparisonSelection::parse(Some("a,b,c,d,e,f"));
        assert_eq!(ids(&selection), vec!["a", "b", "c", "d", "e", "f"]);
        assert!(selection.is_full());
        assert!(!selection.add("g"));
        assert_eq!(selection.to_param().as_deref(), Some("a,b,c,d,e,f"));
    }

    #[test]
    fn test_add_is_noop_when_present_or_full() {
        let mut selection = ComparisonSelection::new();
        assert!(selection.add("a"));
        assert!(!selection.add("a"));
        assert!(selection.add("b"));
        assert!(selection.add("c"));
        assert!(selection.add("d"));
        assert!(!selection.add("e"));
        assert_eq!(ids(&selection), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_remove() {
        let mut selection = ComparisonSelection::parse(Some("a,b,c"));
        assert!(!selection.remove("z"));
        assert!(selection.remove("b"));
        assert_eq!(ids(&selection), vec!["a", "c"]);
        assert!(selection.add("d"));
        assert_eq!(selection.to_param().as_deref(), Some("a,c,d"));
    }
}

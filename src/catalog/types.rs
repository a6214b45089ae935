//! Core record types for the organization catalog
//!
//! All records are read-only once loaded. The organization identifier is the
//! only join key used between records (comparison selection, similarity edges
//! and profile routing).

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stable, URL-safe organization identifier (e.g., "givedirectly")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct OrgId(String);

impl OrgId {
    pub fn new(id: impl Into<String>) -> Self {
        OrgId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrgId {
    fn from(s: String) -> Self {
        OrgId(s)
    }
}

impl From<&str> for OrgId {
    fn from(s: &str) -> Self {
        OrgId(s.to_string())
    }
}

impl Borrow<str> for OrgId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for OrgId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for OrgId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Scores from the four rating agencies.
///
/// Each agency uses its own scale, so values are kept exactly as published:
/// a letter grade, a 0-100 score, a categorical label and a pass/fail label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    /// CharityWatch letter grade (e.g., "A+")
    pub charity_watch: String,
    /// Charity Navigator score out of 100
    pub charity_navigator: u8,
    /// GiveWell designation (e.g., "Top Charity")
    pub give_well: String,
    /// BBB Wise Giving Alliance result (e.g., "Pass")
    pub bbb_wise_giving: String,
}

/// A named member of an organization's leadership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPerson {
    pub name: String,
    pub role: String,
}

impl KeyPerson {
    /// Initials shown on the person's avatar ("Jane Doe" -> "JD")
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Headline finding attached to a similar organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFinding {
    pub text: String,
    pub source: String,
}

/// A pre-ranked similar organization.
///
/// The match percentage is computed upstream; the identifier is expected to
/// resolve against the catalog but is not required to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarOrg {
    #[serde(rename = "slug")]
    pub id: OrgId,
    pub name: String,
    pub sector: String,
    pub budget: String,
    pub tagline: String,
    pub match_percent: u8,
    pub evidence_backed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_finding: Option<KeyFinding>,
}

/// Strength of an impact finding's evidence.
///
/// Declaration order is display priority: rigorous findings come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvidenceTier {
    /// RCT or quasi-experimental study, peer reviewed or by a recognized evaluator
    Rigorous,
    /// Assessment by an institutional funder
    Funder,
    /// The organization's own claim
    SelfReported,
}

impl EvidenceTier {
    pub const ALL: [EvidenceTier; 3] = [
        EvidenceTier::Rigorous,
        EvidenceTier::Funder,
        EvidenceTier::SelfReported,
    ];

    /// Position in display priority order (lower shows first)
    pub fn priority(self) -> u8 {
        match self {
            EvidenceTier::Rigorous => 0,
            EvidenceTier::Funder => 1,
            EvidenceTier::SelfReported => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EvidenceTier::Rigorous => "rigorous",
            EvidenceTier::Funder => "funder",
            EvidenceTier::SelfReported => "self-reported",
        }
    }

    /// Badge label used in compact views
    pub fn label(self) -> &'static str {
        match self {
            EvidenceTier::Rigorous => "Rigorous",
            EvidenceTier::Funder => "Funder",
            EvidenceTier::SelfReported => "Self-reported",
        }
    }

    /// Badge label used on the full impact tab
    pub fn long_label(self) -> &'static str {
        match self {
            EvidenceTier::Rigorous => "Rigorous evaluation",
            EvidenceTier::Funder => "Funder evaluation",
            EvidenceTier::SelfReported => "Self-reported",
        }
    }
}

impl fmt::Display for EvidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A published impact finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactFinding {
    #[serde(rename = "type")]
    pub tier: EvidenceTier,
    pub source: String,
    pub year: u16,
    pub summary: String,
}

impl ImpactFinding {
    pub fn new(
        tier: EvidenceTier,
        source: impl Into<String>,
        year: u16,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            tier,
            source: source.into(),
            year,
            summary: summary.into(),
        }
    }
}

/// Two independent recognition flags shown as badges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recognition {
    /// Operates in a low/middle-income country
    pub lmic_based: bool,
    pub community_led: bool,
}

impl Recognition {
    pub fn any(&self) -> bool {
        self.lmic_based || self.community_led
    }
}

/// An immutable catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "slug")]
    pub id: OrgId,
    pub name: String,
    pub tagline: String,
    /// Free-text sector label, possibly a " / " compound
    pub sector: String,
    pub founded: u16,
    pub location: String,
    pub ein: String,
    pub mission: String,
    /// Annual budget as displayed (e.g., "$120M")
    pub budget: String,
    pub employees: u32,
    pub ceo: String,
    pub website: String,
    pub ratings: Ratings,
    #[serde(default)]
    pub key_people: Vec<KeyPerson>,
    #[serde(default)]
    pub similar_orgs: Vec<SimilarOrg>,
    #[serde(default)]
    pub impact_findings: Vec<ImpactFinding>,
    #[serde(default)]
    pub lmic_based: bool,
    #[serde(default)]
    pub community_led: bool,
}

impl Organization {
    pub fn recognition(&self) -> Recognition {
        Recognition {
            lmic_based: self.lmic_based,
            community_led: self.community_led,
        }
    }

    /// Employee count with thousands separators ("63,000")
    pub fn employees_display(&self) -> String {
        let digits = self.employees.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

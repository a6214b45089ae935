//! Organization profile page
//!
//! Header, tabs, the similar-organizations sidebar and the not-found state.
//! Every number shown here comes from the evidence and similarity modules so
//! the profile agrees with the comparison table and the network view.

use crate::catalog::{Catalog, ImpactFinding, OrgId, Organization, Ratings, Recognition};
use crate::empty::EmptyState;
use crate::evidence::{remaining_count, top_findings, EvidenceSummary, COMPACT_FINDINGS_LIMIT};
use crate::explore::OrgCard;
use crate::route::Route;
use crate::sector::normalize_sector;
use crate::similarity::{SimilarityGraph, SimilarityList, SimilarityView, ViewMode};
use serde::Serialize;
use std::str::FromStr;

/// Organizations offered when a profile identifier does not resolve
pub const NOT_FOUND_SUGGESTIONS: [&str; 3] = ["wateraid", "doctors-without-borders", "givedirectly"];

/// Shown under the full impact tab
pub const IMPACT_DISCLAIMER: &str = "Impact findings are summarized from publicly available sources. Always refer to original evaluations for complete methodology and context.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    Overview,
    Ratings,
    Financials,
    People,
    Similar,
    Impact,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 6] = [
        ProfileTab::Overview,
        ProfileTab::Ratings,
        ProfileTab::Financials,
        ProfileTab::People,
        ProfileTab::Similar,
        ProfileTab::Impact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileTab::Overview => "overview",
            ProfileTab::Ratings => "ratings",
            ProfileTab::Financials => "financials",
            ProfileTab::People => "people",
            ProfileTab::Similar => "similar",
            ProfileTab::Impact => "impact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Overview => "Overview",
            ProfileTab::Ratings => "Ratings",
            ProfileTab::Financials => "Financials",
            ProfileTab::People => "Key People",
            ProfileTab::Similar => "Similar Orgs",
            ProfileTab::Impact => "Impact",
        }
    }

    /// Expanded tabs take the full width and hide the sidebar
    pub fn is_expanded(self) -> bool {
        matches!(self, ProfileTab::Similar | ProfileTab::Impact)
    }
}

impl FromStr for ProfileTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileTab::ALL
            .iter()
            .copied()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| format!("unknown profile tab: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileHeader {
    pub name: String,
    pub tagline: String,
    /// Raw sector label as published
    pub sector: String,
    pub canonical_sector: String,
    /// Explore page filtered to the canonical sector
    pub sector_href: String,
    pub founded: u16,
    pub location: String,
    pub ein: String,
    pub website: String,
    pub recognition: Recognition,
}

impl ProfileHeader {
    fn for_org(org: &Organization) -> Self {
        let canonical_sector = normalize_sector(&org.sector);
        Self {
            name: org.name.clone(),
            tagline: org.tagline.clone(),
            sector: org.sector.clone(),
            sector_href: Route::explore(Some(canonical_sector.clone())).href(),
            canonical_sector,
            founded: org.founded,
            location: org.location.clone(),
            ein: org.ein.clone(),
            website: org.website.clone(),
            recognition: org.recognition(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyFact {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewTab {
    pub mission: String,
    pub ratings: Ratings,
    pub facts: Vec<KeyFact>,
    pub evidence: EvidenceSummary,
    /// Highest-priority findings for the compact strip
    pub top_findings: Vec<ImpactFinding>,
    /// "+N more findings"
    pub more_findings: usize,
}

impl OverviewTab {
    fn for_org(org: &Organization) -> Self {
        Self {
            mission: org.mission.clone(),
            ratings: org.ratings.clone(),
            facts: vec![
                KeyFact {
                    label: "Annual Budget",
                    value: org.budget.clone(),
                },
                KeyFact {
                    label: "Employees",
                    value: org.employees_display(),
                },
                KeyFact {
                    label: "CEO",
                    value: org.ceo.clone(),
                },
                KeyFact {
                    label: "Website",
                    value: org.website.clone(),
                },
            ],
            evidence: EvidenceSummary::for_org(org),
            top_findings: top_findings(&org.impact_findings, COMPACT_FINDINGS_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
            more_findings: remaining_count(&org.impact_findings, COMPACT_FINDINGS_LIMIT),
        }
    }
}

/// One agency's rating with its scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingCard {
    pub agency: &'static str,
    pub rating: String,
    /// Top of the agency's scale ("out of A+")
    pub best_rating: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

pub fn rating_cards(ratings: &Ratings) -> Vec<RatingCard> {
    vec![
        RatingCard {
            agency: "CharityWatch",
            rating: ratings.charity_watch.clone(),
            best_rating: "A+",
            url: "https://www.charitywatch.org",
            description: "CharityWatch evaluates charities based on their financial efficiency and transparency.",
        },
        RatingCard {
            agency: "Charity Navigator",
            rating: ratings.charity_navigator.to_string(),
            best_rating: "100",
            url: "https://www.charitynavigator.org",
            description: "Charity Navigator rates charities on financial health, accountability, and transparency.",
        },
        RatingCard {
            agency: "GiveWell",
            rating: ratings.give_well.clone(),
            best_rating: "Top Charity",
            url: "https://www.givewell.org",
            description: "GiveWell conducts in-depth research to find charities that save or improve lives the most per dollar.",
        },
        RatingCard {
            agency: "BBB Wise Giving Alliance",
            rating: ratings.bbb_wise_giving.clone(),
            best_rating: "Pass",
            url: "https://www.give.org",
            description: "BBB Wise Giving Alliance evaluates charities against 20 standards for charity accountability.",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialsTab {
    pub budget: String,
    pub employees: String,
    /// Filing-level detail is not collected yet
    pub filings: EmptyState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonCard {
    pub name: String,
    pub role: String,
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeopleTab {
    pub people: Vec<PersonCard>,
    pub board: EmptyState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingEntry {
    pub badge: &'static str,
    #[serde(flatten)]
    pub finding: ImpactFinding,
}

/// Every finding in published order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpactTab {
    pub evidence: EvidenceSummary,
    pub findings: Vec<FindingEntry>,
    pub disclaimer: &'static str,
}

/// Expanded similar-organizations tab in the chosen mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SimilarTab {
    List(SimilarityList),
    Network(SimilarityGraph),
}

impl SimilarTab {
    pub fn build(view: &SimilarityView<'_>, mode: ViewMode, limit: Option<usize>) -> Self {
        match mode {
            ViewMode::List => SimilarTab::List(view.list(limit)),
            ViewMode::Network => SimilarTab::Network(view.graph(limit)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabLink {
    pub tab: ProfileTab,
    pub label: &'static str,
    pub expanded: bool,
}

/// A resolved profile with every tab projected
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: OrgId,
    pub header: ProfileHeader,
    pub tabs: Vec<TabLink>,
    pub overview: OverviewTab,
    pub ratings: Vec<RatingCard>,
    pub financials: FinancialsTab,
    pub people: PeopleTab,
    pub impact: ImpactTab,
    pub similar: SimilarTab,
    /// Top similar organizations plus the overflow count
    pub sidebar: SimilarityList,
}

impl Profile {
    pub fn build(org: &Organization, catalog: &dyn Catalog, mode: ViewMode) -> Self {
        let similarity = SimilarityView::new(org, catalog);
        Self {
            id: org.id.clone(),
            header: ProfileHeader::for_org(org),
            tabs: ProfileTab::ALL
                .iter()
                .map(|tab| TabLink {
                    tab: *tab,
                    label: tab.label(),
                    expanded: tab.is_expanded(),
                })
                .collect(),
            overview: OverviewTab::for_org(org),
            ratings: rating_cards(&org.ratings),
            financials: FinancialsTab {
                budget: org.budget.clone(),
                employees: org.employees_display(),
                filings: EmptyState::not_yet_available("Detailed 990 filing data"),
            },
            people: PeopleTab {
                people: org
                    .key_people
                    .iter()
                    .map(|person| PersonCard {
                        name: person.name.clone(),
                        role: person.role.clone(),
                        initials: person.initials(),
                    })
                    .collect(),
                board: EmptyState::not_yet_available(
                    "Board of Directors and additional leadership information",
                ),
            },
            impact: ImpactTab {
                evidence: EvidenceSummary::for_org(org),
                findings: org
                    .impact_findings
                    .iter()
                    .map(|finding| FindingEntry {
                        badge: finding.tier.long_label(),
                        finding: finding.clone(),
                    })
                    .collect(),
                disclaimer: IMPACT_DISCLAIMER,
            },
            similar: SimilarTab::build(&similarity, mode, None),
            sidebar: similarity.sidebar(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ProfileView {
    Found(Box<Profile>),
    NotFound {
        requested: String,
        /// Well-known organizations that resolve in this catalog
        suggestions: Vec<OrgCard>,
    },
}

impl ProfileView {
    /// Profile for `id`, or the not-found state. A missing id is not an error.
    pub fn build(catalog: &dyn Catalog, id: &str, mode: ViewMode) -> Self {
        match catalog.get(id) {
            Some(org) => ProfileView::Found(Box::new(Profile::build(org, catalog, mode))),
            None => ProfileView::NotFound {
                requested: id.to_string(),
                suggestions: NOT_FOUND_SUGGESTIONS
                    .iter()
                    .filter_map(|id| catalog.get(id))
                    .map(OrgCard::for_org)
                    .collect(),
            },
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            ProfileView::Found(profile) => Some(profile.as_ref()),
            ProfileView::NotFound { .. } => None,
        }
    }
}

//! List and network projections of an organization's similar organizations
//!
//! Both projections are built from the same ranked `SimilarOrg` sequence and
//! truncate by prefix, so membership, order and match percentages agree.

use super::layout::{peer_position, Point, CENTER};
use crate::catalog::{Catalog, KeyFinding, OrgId, Organization, Recognition, SimilarOrg};
use crate::evidence::EvidenceSummary;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Peers shown in the profile sidebar
pub const SIDEBAR_LIMIT: usize = 4;

/// Node id reserved for the subject organization in the network projection.
/// The leading `@` keeps it out of the slug alphabet peer identifiers use.
pub const CENTER_NODE_ID: &str = "@center";

/// Which projection the expanded similarity tab shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Network,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(ViewMode::List),
            "network" => Ok(ViewMode::Network),
            other => Err(format!("unknown view mode: {}", other)),
        }
    }
}

/// Result of selecting an item in either projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "id", rename_all = "lowercase")]
pub enum Navigation {
    /// Open the profile of this organization
    Profile(OrgId),
    /// Stay on the current page
    Stay,
}

/// Ordered `(identifier, match percentage)` pairs of a projection
pub trait SimilarityProjection {
    fn entries(&self) -> Vec<(&str, u8)>;
}

/// One row of the list projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityListItem {
    pub id: OrgId,
    pub name: String,
    pub sector: String,
    pub budget: String,
    pub tagline: String,
    pub match_percent: u8,
    pub evidence_backed: bool,
    pub key_finding: Option<KeyFinding>,
    /// Badges from the catalog record; `None` when the id does not resolve
    pub recognition: Option<Recognition>,
}

impl SimilarityListItem {
    pub fn navigation(&self) -> Navigation {
        Navigation::Profile(self.id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityList {
    pub subject: OrgId,
    pub items: Vec<SimilarityListItem>,
    /// Size of the full similarity list
    pub total: usize,
    /// Peers left out by the prefix limit ("+N more organizations")
    pub overflow: usize,
}

impl SimilarityProjection for SimilarityList {
    fn entries(&self) -> Vec<(&str, u8)> {
        self.items
            .iter()
            .map(|item| (item.id.as_str(), item.match_percent))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Center,
    Peer,
}

/// A node of the network projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub name: String,
    pub sector: String,
    pub budget: String,
    pub position: Point,
    pub evidence_backed: bool,
    pub recognition: Option<Recognition>,
}

impl GraphNode {
    pub fn navigation(&self) -> Navigation {
        match self.kind {
            NodeKind::Center => Navigation::Stay,
            NodeKind::Peer => Navigation::Profile(OrgId::new(self.id.clone())),
        }
    }
}

/// An edge from the center to a peer, labelled with the match percentage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub match_percent: u8,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityGraph {
    /// Center node first, then peers in rank order
    pub nodes: Vec<GraphNode>,
    /// One edge per peer, in rank order
    pub edges: Vec<GraphEdge>,
}

impl SimilarityGraph {
    pub fn center(&self) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.kind == NodeKind::Center)
    }

    pub fn peers(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|node| node.kind == NodeKind::Peer)
    }

    /// Navigation for a clicked node; unknown ids and the center stay put.
    /// Only peers are matched by id, so no identifier can shadow a peer.
    pub fn select(&self, node_id: &str) -> Navigation {
        self.peers()
            .find(|node| node.id == node_id)
            .map(GraphNode::navigation)
            .unwrap_or(Navigation::Stay)
    }
}

impl SimilarityProjection for SimilarityGraph {
    fn entries(&self) -> Vec<(&str, u8)> {
        self.edges
            .iter()
            .map(|edge| (edge.target.as_str(), edge.match_percent))
            .collect()
    }
}

/// Similarity presentation for one subject organization
pub struct SimilarityView<'a> {
    subject: &'a Organization,
    catalog: &'a dyn Catalog,
}

impl<'a> SimilarityView<'a> {
    pub fn new(subject: &'a Organization, catalog: &'a dyn Catalog) -> Self {
        Self { subject, catalog }
    }

    pub fn subject(&self) -> &'a Organization {
        self.subject
    }

    /// Ranked prefix of the similarity list; never resorted
    fn prefix(&self, limit: Option<usize>) -> &'a [SimilarOrg] {
        let all = &self.subject.similar_orgs;
        match limit {
            Some(limit) => &all[..limit.min(all.len())],
            None => all,
        }
    }

    fn recognition(&self, peer: &SimilarOrg) -> Option<Recognition> {
        self.catalog.get(peer.id.as_str()).map(Organization::recognition)
    }

    /// Peers beyond `limit`
    pub fn overflow(&self, limit: usize) -> usize {
        self.subject.similar_orgs.len().saturating_sub(limit)
    }

    pub fn list(&self, limit: Option<usize>) -> SimilarityList {
        let items: Vec<SimilarityListItem> = self
            .prefix(limit)
            .iter()
            .map(|peer| SimilarityListItem {
                id: peer.id.clone(),
                name: peer.name.clone(),
                sector: peer.sector.clone(),
                budget: peer.budget.clone(),
                tagline: peer.tagline.clone(),
                match_percent: peer.match_percent,
                evidence_backed: peer.evidence_backed,
                key_finding: peer.key_finding.clone(),
                recognition: self.recognition(peer),
            })
            .collect();

        let total = self.subject.similar_orgs.len();
        SimilarityList {
            subject: self.subject.id.clone(),
            overflow: total - items.len(),
            total,
            items,
        }
    }

    pub fn graph(&self, limit: Option<usize>) -> SimilarityGraph {
        let peers = self.prefix(limit);
        let mut nodes = Vec::with_capacity(peers.len() + 1);
        let mut edges = Vec::with_capacity(peers.len());

        nodes.push(GraphNode {
            id: CENTER_NODE_ID.to_string(),
            kind: NodeKind::Center,
            name: self.subject.name.clone(),
            sector: self.subject.sector.clone(),
            budget: self.subject.budget.clone(),
            position: CENTER,
            evidence_backed: EvidenceSummary::for_org(self.subject).evidence_backed,
            recognition: Some(self.subject.recognition()),
        });

        for (index, peer) in peers.iter().enumerate() {
            nodes.push(GraphNode {
                id: peer.id.to_string(),
                kind: NodeKind::Peer,
                name: peer.name.clone(),
                sector: peer.sector.clone(),
                budget: peer.budget.clone(),
                position: peer_position(index, peers.len()),
                evidence_backed: peer.evidence_backed,
                recognition: self.recognition(peer),
            });
            edges.push(GraphEdge {
                id: format!("{}-{}", CENTER_NODE_ID, peer.id),
                source: CENTER_NODE_ID.to_string(),
                target: peer.id.to_string(),
                match_percent: peer.match_percent,
                label: format!("{}%", peer.match_percent),
            });
        }

        SimilarityGraph { nodes, edges }
    }

    /// Sidebar: top peers plus how many more the expanded tab holds
    pub fn sidebar(&self) -> SimilarityList {
        self.list(Some(SIDEBAR_LIMIT))
    }
}

//! Impact evidence aggregation
//!
//! Tier counts, the evidence-backed flag and the priority-ordered compact
//! selection of findings. The profile overview, the impact tab and the
//! comparison table all read these numbers from here.

use crate::catalog::{EvidenceTier, ImpactFinding, Organization};
use serde::Serialize;

/// Findings shown in compact views (profile overview, sidebars)
pub const COMPACT_FINDINGS_LIMIT: usize = 3;

/// Per-tier counts over an organization's findings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EvidenceSummary {
    pub rigorous: usize,
    pub funder: usize,
    pub self_reported: usize,
    pub total: usize,
    /// At least one rigorous finding
    pub evidence_backed: bool,
}

impl EvidenceSummary {
    pub fn from_findings(findings: &[ImpactFinding]) -> Self {
        let mut summary = EvidenceSummary::default();
        for finding in findings {
            match finding.tier {
                EvidenceTier::Rigorous => summary.rigorous += 1,
                EvidenceTier::Funder => summary.funder += 1,
                EvidenceTier::SelfReported => summary.self_reported += 1,
            }
        }
        summary.total = findings.len();
        summary.evidence_backed = summary.rigorous > 0;
        summary
    }

    pub fn for_org(org: &Organization) -> Self {
        Self::from_findings(&org.impact_findings)
    }

    pub fn count(&self, tier: EvidenceTier) -> usize {
        match tier {
            EvidenceTier::Rigorous => self.rigorous,
            EvidenceTier::Funder => self.funder,
            EvidenceTier::SelfReported => self.self_reported,
        }
    }

    /// Non-empty tiers in priority order, for the summary bar
    pub fn tiers_present(&self) -> Vec<(EvidenceTier, usize)> {
        EvidenceTier::ALL
            .iter()
            .map(|tier| (*tier, self.count(*tier)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Status text used wherever the evidence-backed flag is displayed
    pub fn status_label(&self) -> &'static str {
        if self.evidence_backed {
            "Evidence-backed"
        } else {
            "Limited evidence"
        }
    }
}

/// The first `k` findings in tier priority order.
///
/// The sort is stable, so findings of the same tier keep their original
/// relative order. The input slice is never reordered.
pub fn top_findings(findings: &[ImpactFinding], k: usize) -> Vec<&ImpactFinding> {
    let mut ordered: Vec<&ImpactFinding> = findings.iter().collect();
    ordered.sort_by_key(|finding| finding.tier.priority());
    ordered.truncate(k);
    ordered
}

/// Findings left out of a top-`k` view ("+N more findings")
pub fn remaining_count(findings: &[ImpactFinding], k: usize) -> usize {
    findings.len().saturating_sub(k)
}

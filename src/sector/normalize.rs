//! Sector label normalization
//!
//! Raw sector labels are free text, sometimes a " / " compound whose first
//! segment is the primary sector. Every surface that groups, filters or badges
//! by sector goes through `normalize_sector`.

/// Separator between the primary sector and secondary sectors
pub const COMPOUND_SEPARATOR: &str = " / ";

/// Raw or primary labels that collapse onto a shorter canonical label
const SECTOR_ALIASES: &[(&str, &str)] = &[
    ("Water, Sanitation & Hygiene (WASH)", "WASH"),
    ("Global Health & Humanitarian", "Global Health"),
    ("Agricultural Development", "Agriculture"),
    ("Youth Mentoring", "Youth Development"),
    ("Youth-Led Development", "Youth Development"),
];

fn alias(label: &str) -> Option<&'static str> {
    SECTOR_ALIASES
        .iter()
        .find(|(raw, _)| *raw == label)
        .map(|(_, canonical)| *canonical)
}

/// Primary segment of a compound label, trimmed
pub fn primary_segment(raw: &str) -> &str {
    raw.split(COMPOUND_SEPARATOR).next().unwrap_or(raw).trim()
}

/// Map a raw sector label to its canonical short label.
///
/// The raw string is looked up verbatim first; otherwise its primary segment
/// is looked up, and returned unchanged when it has no alias.
pub fn normalize_sector(raw: &str) -> String {
    if let Some(canonical) = alias(raw) {
        return canonical.to_string();
    }
    let primary = primary_segment(raw);
    alias(primary).unwrap_or(primary).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim_alias() {
        assert_eq!(normalize_sector("Water, Sanitation & Hygiene (WASH)"), "WASH");
        assert_eq!(normalize_sector("Global Health & Humanitarian"), "Global Health");
        assert_eq!(normalize_sector("Youth-Led Development"), "Youth Development");
    }

    #[test]
    fn test_compound_takes_primary() {
        assert_eq!(normalize_sector("Education / Community Development"), "Education");
        assert_eq!(normalize_sector("Global Health / Nutrition"), "Global Health");
    }

    #[test]
    fn test_compound_primary_is_aliased() {
        assert_eq!(
            normalize_sector("Water, Sanitation & Hygiene (WASH) / Global Health"),
            "WASH"
        );
        assert_eq!(normalize_sector("Agricultural Development / Livelihoods"), "Agriculture");
    }

    #[test]
    fn test_unknown_label_passes_through_trimmed() {
        assert_eq!(normalize_sector("Housing"), "Housing");
        assert_eq!(normalize_sector("  Housing  "), "Housing");
        assert_eq!(normalize_sector(""), "");
    }

    #[test]
    fn test_separator_requires_spaces() {
        // "HIV/AIDS" is a single label, not a compound
        assert_eq!(normalize_sector("HIV/AIDS"), "HIV/AIDS");
    }

    #[test]
    fn test_idempotent_on_canonical_labels() {
        let raws = [
            "Water, Sanitation & Hygiene (WASH)",
            "Global Health & Humanitarian / Emergency Response",
            "Agricultural Development",
            "Youth Mentoring",
            "Education / Literacy",
            "Cash Transfers",
            " Microfinance ",
        ];
        for raw in raws {
            let once = normalize_sector(raw);
            assert_eq!(normalize_sector(&once), once, "not idempotent for {raw:?}");
        }
    }
}

use efficacy::catalog::{Catalog, EvidenceTier, InMemoryCatalog};
use efficacy::compare::{candidates, Cell, ComparisonSelection, ComparisonView, Metric, ABSENT};
use efficacy::evidence::{top_findings, EvidenceSummary};
use efficacy::explore::{ExploreView, HomeView};
use efficacy::profile::ProfileView;
use efficacy::route::Route;
use efficacy::search::{search, submit};
use efficacy::sector::{
    normalize_sector, SectorFilter, SectorTaxonomy, EXPLORE_SECTOR_LIMIT, HOME_SECTOR_LIMIT,
};
use efficacy::similarity::{
    Navigation, SimilarityProjection, SimilarityView, ViewMode, CENTER, CENTER_NODE_ID, RADIUS,
};

fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::bundled().unwrap()
}

#[test]
fn test_explore_chips_over_bundled_catalog() {
    let catalog = catalog();
    let view = ExploreView::build(&catalog, None);
    let labels: Vec<&str> = view.chips.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "All",
            "Agriculture",
            "Cash Transfers",
            "Community Development",
            "Education",
            "Food Security",
            "Global Health",
            "Poverty Alleviation",
            "WASH",
            "Workforce Development",
            "Youth Development",
            "Other",
        ]
    );
    assert_eq!(view.cards.len(), catalog.len());
    assert_eq!(view.catalog_size, 24);
}

#[test]
fn test_wash_filter() {
    let catalog = catalog();
    let view = ExploreView::build(&catalog, Some("WASH"));
    assert_eq!(view.ids(), vec!["wateraid", "charity-water"]);
    assert!(view.cards.iter().all(|card| card.sector == "WASH"));
    assert_eq!(view.caption(), "2 organizations in WASH");
}

#[test]
fn test_other_is_complement_of_top_sectors() {
    let catalog = catalog();
    let all = catalog.all();
    let taxonomy = SectorTaxonomy::build(all.iter().copied(), EXPLORE_SECTOR_LIMIT);

    let mut covered = taxonomy.filter(all.iter().copied(), &SectorFilter::Other).len();
    for sector in taxonomy.top_sectors() {
        covered += taxonomy
            .filter(all.iter().copied(), &SectorFilter::Named(sector.clone()))
            .len();
    }
    assert_eq!(covered, all.len());

    let other = ExploreView::build(&catalog, Some("Other"));
    assert_eq!(other.ids(), vec!["habitat-for-humanity", "kiva"]);
}

#[test]
fn test_unknown_sector_deep_link_falls_back_to_other() {
    let catalog = catalog();
    let view = ExploreView::build(&catalog, Some("Underwater Basket Weaving"));
    assert_eq!(view.selected, SectorFilter::Other);
    assert_eq!(view.href, "/explore?sector=Other");
}

#[test]
fn test_home_view() {
    let catalog = catalog();
    let home = HomeView::build(&catalog);
    let sectors: Vec<&str> = home.sectors.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(sectors.len(), HOME_SECTOR_LIMIT);
    assert_eq!(
        sectors,
        vec![
            "Agriculture",
            "Cash Transfers",
            "Education",
            "Global Health",
            "Poverty Alleviation",
            "WASH",
            "Workforce Development",
            "Youth Development",
        ]
    );
    assert_eq!(home.trending.len(), 6);
    assert_eq!(home.trending[0].id, "givedirectly");
}

#[test]
fn test_normalization_is_idempotent_over_catalog() {
    for org in catalog().iter() {
        let canonical = normalize_sector(&org.sector);
        assert_eq!(normalize_sector(&canonical), canonical, "{}", org.id);
    }
}

#[test]
fn test_evidence_counts_sum_to_total() {
    for org in catalog().iter() {
        let summary = EvidenceSummary::for_org(org);
        assert_eq!(
            summary.rigorous + summary.funder + summary.self_reported,
            summary.total
        );
        assert_eq!(summary.evidence_backed, summary.rigorous > 0);
    }
}

#[test]
fn test_top_findings_priority_over_catalog() {
    for org in catalog().iter() {
        let top = top_findings(&org.impact_findings, 3);
        assert!(top.windows(2).all(|w| w[0].tier <= w[1].tier));
        if org.impact_findings.iter().any(|f| f.tier == EvidenceTier::Rigorous) {
            assert_eq!(top[0].tier, EvidenceTier::Rigorous);
        }
    }
}

#[test]
fn test_list_and_network_agree() {
    let catalog = catalog();
    for org in catalog.iter() {
        let view = SimilarityView::new(org, &catalog);
        for limit in [None, Some(0), Some(2), Some(4), Some(100)] {
            let list = view.list(limit);
            let graph = view.graph(limit);
            assert_eq!(list.entries(), graph.entries(), "{} {:?}", org.id, limit);
            assert_eq!(graph.nodes.len(), graph.edges.len() + 1);
        }
    }
}

#[test]
fn test_similarity_order_is_never_resorted() {
    let catalog = catalog();
    let brac = catalog.get("brac").unwrap();
    let list = SimilarityView::new(brac, &catalog).list(None);
    let ids: Vec<&str> = list.entries().iter().map(|(id, _)| *id).collect();
    assert_eq!(&ids[..2], &["village-enterprise", "givedirectly"]);
    assert_eq!(list.items[0].match_percent, 86);
    assert_eq!(list.items[1].match_percent, 88);
}

#[test]
fn test_network_layout_and_navigation() {
    let catalog = catalog();
    let org = catalog.get("givedirectly").unwrap();
    let graph = SimilarityView::new(org, &catalog).graph(None);

    let center = graph.center().unwrap();
    assert_eq!(center.id, CENTER_NODE_ID);
    assert_eq!(center.position, CENTER);
    for peer in graph.peers() {
        assert!((peer.position.distance(&CENTER) - RADIUS).abs() < 1e-9);
    }

    let first = &graph.edges[0];
    assert_eq!(first.id, "@center-village-enterprise");
    assert_eq!(first.label, "92%");

    assert_eq!(graph.select(CENTER_NODE_ID), Navigation::Stay);
    assert_eq!(
        graph.select("brac"),
        Navigation::Profile("brac".into())
    );

    // unresolved peers are still drawn, without recognition badges
    let trickle_up = graph.peers().find(|n| n.id == "trickle-up").unwrap();
    assert!(trickle_up.recognition.is_none());
    let brac = graph.peers().find(|n| n.id == "brac").unwrap();
    assert!(brac.recognition.unwrap().lmic_based);
}

#[test]
fn test_sidebar_overflow() {
    let catalog = catalog();
    let org = catalog.get("givedirectly").unwrap();
    let sidebar = SimilarityView::new(org, &catalog).sidebar();
    assert_eq!(sidebar.items.len(), 4);
    assert_eq!(sidebar.overflow, 2);
}

#[test]
fn test_compare_drops_unknown_ids() {
    let catalog = catalog();
    let selection = ComparisonSelection::parse(Some("givedirectly,bogus,wateraid"));
    let view = ComparisonView::build(&selection, &catalog);
    let table = view.table().unwrap();
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.columns[1].name, "WaterAid");
}

#[test]
fn test_compare_unknown_ids_leave_room_for_resolved_ones() {
    let catalog = catalog();
    let route = Route::parse("/compare?org=bogus1,givedirectly,bogus2,bogus3,wateraid,brac");
    let selection = match route {
        Some(Route::Compare { selection }) => selection,
        other => panic!("expected compare route, got {:?}", other),
    };
    match ComparisonView::build(&selection, &catalog) {
        ComparisonView::Table { table, dropped, .. } => {
            let columns: Vec<&str> = table.columns.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(columns, vec!["givedirectly", "wateraid", "brac"]);
            let dropped: Vec<&str> = dropped.iter().map(|id| id.as_str()).collect();
            assert_eq!(dropped, vec!["bogus1", "bogus2", "bogus3"]);
        }
        other => panic!("expected table, got {:?}", other),
    }
}

#[test]
fn test_compare_caps_at_four() {
    let catalog = catalog();
    let mut selection = ComparisonSelection::new();
    for org in catalog.iter() {
        selection.add(org.id.clone());
    }
    assert_eq!(selection.len(), 4);
    let view = ComparisonView::build(&selection, &catalog);
    assert_eq!(view.table().unwrap().column_count(), 4);
}

#[test]
fn test_compare_rows_agree_with_evidence_summary() {
    let catalog = catalog();
    let selection = ComparisonSelection::parse(Some("givedirectly,charity-water,harlem-childrens-zone"));
    let view = ComparisonView::build(&selection, &catalog);
    let table = view.table().unwrap();

    assert_eq!(
        table.row(Metric::RigorousEvaluations).unwrap().cells,
        vec![Cell::Count(2), Cell::Count(0), Cell::Count(1)]
    );
    assert_eq!(
        table.row(Metric::EvidenceStatus).unwrap().cells,
        vec![Cell::Evidence(true), Cell::Evidence(false), Cell::Evidence(true)]
    );
    let community: Vec<String> = table
        .row(Metric::CommunityLed)
        .unwrap()
        .cells
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(community, vec![ABSENT, ABSENT, "Community-Led"]);

    // comparison shows the raw sector, not the canonical one
    assert_eq!(
        table.row(Metric::Sector).unwrap().cells[1],
        Cell::Text("Water, Sanitation & Hygiene (WASH) / Global Health".to_string())
    );
}

#[test]
fn test_compare_empty_suggestions() {
    let catalog = catalog();
    match ComparisonView::build(&ComparisonSelection::new(), &catalog) {
        ComparisonView::Empty { suggestions } => {
            let ids: Vec<&str> = suggestions.iter().map(|s| s.id.as_str()).collect();
            assert_eq!(
                ids,
                vec!["givedirectly", "wateraid", "doctors-without-borders", "against-malaria-foundation"]
            );
        }
        other => panic!("expected empty state, got {:?}", other),
    }
}

#[test]
fn test_compare_candidates_exclude_selection() {
    let catalog = catalog();
    let selection = ComparisonSelection::parse(Some("wateraid"));
    let found: Vec<&str> = candidates(&catalog, &selection, "wash")
        .iter()
        .map(|o| o.id.as_str())
        .collect();
    assert_eq!(found, vec!["charity-water"]);
}

#[test]
fn test_profile_and_not_found() {
    let catalog = catalog();
    let view = ProfileView::build(&catalog, "doctors-without-borders", ViewMode::List);
    let profile = view.profile().unwrap();
    assert_eq!(profile.header.canonical_sector, "Global Health");
    assert_eq!(profile.overview.facts[1].value, "63,000");

    match ProfileView::build(&catalog, "GiveDirectly", ViewMode::List) {
        ProfileView::NotFound { suggestions, .. } => assert_eq!(suggestions.len(), 3),
        other => panic!("lookup must be case-sensitive, got {:?}", other),
    }
}

#[test]
fn test_search_and_submit() {
    let catalog = catalog();
    let results = search(&catalog, "water", 8);
    let ids: Vec<&str> = results.suggestions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids[0], "wateraid");
    assert!(ids.contains(&"charity-water"));

    assert_eq!(
        submit(&catalog, "Harlem Children's Zone"),
        Some(Route::profile("harlem-childrens-zone"))
    );
    assert!(search(&catalog, "qwertyuiop", 8).empty.is_some());
}

#[test]
fn test_routes_round_trip_views() {
    let catalog = catalog();
    let view = ExploreView::build(&catalog, Some("Global Health"));
    assert_eq!(view.href, "/explore?sector=Global%20Health");
    match Route::parse(&view.href) {
        Some(Route::Explore { sector }) => {
            let again = ExploreView::build(&catalog, sector.as_deref());
            assert_eq!(again.ids(), view.ids());
        }
        other => panic!("unexpected route {:?}", other),
    }

    let selection = ComparisonSelection::parse(Some("brac,kiva"));
    let href = Route::compare(selection.clone()).href();
    assert_eq!(href, "/compare?org=brac,kiva");
    assert_eq!(Route::parse(&href), Some(Route::compare(selection)));
}

//! Similar-organization presentation
//!
//! The ranked similarity list and its radial network projection. Match
//! percentages arrive pre-computed with the catalog; nothing here scores
//! similarity.

pub mod layout;
pub mod view;

pub use layout::{peer_angle, peer_position, Point, CENTER, RADIUS};
pub use view::{
    GraphEdge, GraphNode, Navigation, NodeKind, SimilarityGraph, SimilarityList,
    SimilarityListItem, SimilarityProjection, SimilarityView, ViewMode, CENTER_NODE_ID,
    SIDEBAR_LIMIT,
};

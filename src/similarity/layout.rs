//! Deterministic radial layout for the similarity network
//!
//! The subject sits at a fixed center; peers are spaced evenly on a circle,
//! node 0 at twelve o'clock and continuing clockwise in screen coordinates.

use serde::Serialize;
use std::f64::consts::PI;

/// Canvas position of the subject organization
pub const CENTER: Point = Point { x: 250.0, y: 200.0 };

/// Distance from the center to every peer node
pub const RADIUS: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Angle (radians) of peer `index` out of `count`
pub fn peer_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return -PI / 2.0;
    }
    (2.0 * PI * index as f64) / count as f64 - PI / 2.0
}

/// Position of peer `index` out of `count` around `CENTER`
pub fn peer_position(index: usize, count: usize) -> Point {
    let angle = peer_angle(index, count);
    Point {
        x: CENTER.x + RADIUS * angle.cos(),
        y: CENTER.y + RADIUS * angle.sin(),
    }
}

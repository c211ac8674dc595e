//! Wall segment classification.
//!
//! Purpose
//! - Decide how each polygon edge of a room is drawn: wall, door, window,
//!   open connection, or void boundary.
//!
//! Precedence (first match wins)
//! 1. Void boundary: the room is a void or has no floor.
//! 2. Window: the edge matches a window segment.
//! 3. Wall: the edge matches nothing in the open union (doors + no_walls).
//! 4. Door: the edge matches a door segment.
//! 5. Open: in the open union but not a door.
//!
//! Window is checked before the open/door/wall split, so an edge declared as
//! both door and window is a window. Matching ignores endpoint order.
//!
//! Code cross-refs: `index::{SegmentIndex, RoomIndex}`, `render::render_house`.

mod index;

use serde::Serialize;

use crate::model::{Point2D, Room};

pub use index::{MatchTolerance, RoomIndex, SegmentIndex};

/// Render category of one polygon edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Wall,
    Door,
    Window,
    Open,
    VoidBoundary,
}

impl EdgeKind {
    /// Legend order.
    pub const ALL: [EdgeKind; 5] = [
        EdgeKind::Wall,
        EdgeKind::Door,
        EdgeKind::Window,
        EdgeKind::Open,
        EdgeKind::VoidBoundary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EdgeKind::Wall => "Wall",
            EdgeKind::Door => "Door",
            EdgeKind::Window => "Window",
            EdgeKind::Open => "Open",
            EdgeKind::VoidBoundary => "Void",
        }
    }

    /// Stable identifier used for SVG classes and JSON output.
    pub fn slug(self) -> &'static str {
        match self {
            EdgeKind::Wall => "wall",
            EdgeKind::Door => "door",
            EdgeKind::Window => "window",
            EdgeKind::Open => "open",
            EdgeKind::VoidBoundary => "void",
        }
    }
}

/// One polygon edge with its category, in traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClassifiedEdge {
    /// Position in the ring; the closing edge has index `len - 1`.
    pub index: usize,
    pub from: Point2D,
    pub to: Point2D,
    pub kind: EdgeKind,
}

/// Classify a single edge `p1 → p2` of `room`.
///
/// Builds the room's lookup tables on every call; use `RoomIndex` when
/// classifying many edges of the same room.
pub fn classify_edge(room: &Room, p1: Point2D, p2: Point2D, tolerance: MatchTolerance) -> EdgeKind {
    RoomIndex::new(room, tolerance).classify(p1, p2)
}

/// Classify every closed edge of `room` in order.
pub fn classify_room(room: &Room, tolerance: MatchTolerance) -> Vec<ClassifiedEdge> {
    let index = RoomIndex::new(room, tolerance);
    room.edges()
        .enumerate()
        .map(|(i, (from, to))| ClassifiedEdge {
            index: i,
            from,
            to,
            kind: index.classify(from, to),
        })
        .collect()
}

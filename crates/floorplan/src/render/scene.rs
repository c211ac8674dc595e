//! Figure scene: what gets drawn, in world coordinates where possible.
//!
//! `render_house` fills these records; `svg` serializes them.

use crate::classify::EdgeKind;
use crate::model::Point2D;

use super::layout::{PanelFrame, Rect};
use super::style::{FillStyle, MarkerStyle, StrokeStyle};

/// Filled room (or foundation) polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct FillShape {
    /// Room id, or `None` for the foundation.
    pub room_id: Option<String>,
    pub ring: Vec<Point2D>,
    pub style: FillStyle,
}

/// One classified polygon edge and the layers it is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeStroke {
    pub room_id: String,
    pub from: Point2D,
    pub to: Point2D,
    pub kind: EdgeKind,
    pub layers: &'static [StrokeStyle],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub at: Point2D,
    pub style: MarkerStyle,
}

/// Room name at its centroid.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomLabel {
    pub text: String,
    pub at: Point2D,
}

/// Legend rows, in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub entries: Vec<(EdgeKind, StrokeStyle)>,
}

/// One floor.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub title: String,
    pub frame: PanelFrame,
    /// Footprint `[0,width]×[0,depth]`, drawn first.
    pub foundation: FillShape,
    pub fills: Vec<FillShape>,
    pub edges: Vec<EdgeStroke>,
    /// Window midpoints and polygon vertices.
    pub markers: Vec<Marker>,
    pub labels: Vec<RoomLabel>,
    pub legend: Option<Legend>,
}

impl Panel {
    pub fn plot_area(&self) -> Rect {
        self.frame.viewport.area
    }

    /// Number of edges drawn as `kind`.
    pub fn count(&self, kind: EdgeKind) -> usize {
        self.edges.iter().filter(|e| e.kind == kind).count()
    }
}

/// Composed figure: one panel per floor, left to right.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub title: String,
    pub width_px: u32,
    pub height_px: u32,
    pub dpi: f64,
    pub panels: Vec<Panel>,
}

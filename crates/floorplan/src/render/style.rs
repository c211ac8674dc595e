//! Colors, stroke styles and font sizes.
//!
//! Widths and sizes are in points; `RenderCfg::pt` converts to pixels.

use crate::classify::EdgeKind;

/// Dash pattern, scaled by the stroke width when drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dash {
    Solid,
    Dashed,
    Dotted,
}

impl Dash {
    /// On/off lengths in multiples of the line width; `None` for solid.
    pub fn pattern(self) -> Option<[f64; 2]> {
        match self {
            Dash::Solid => None,
            Dash::Dashed => Some([3.7, 1.6]),
            Dash::Dotted => Some([1.0, 1.65]),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: &'static str,
    pub width_pt: f64,
    pub alpha: f64,
    pub dash: Dash,
}

impl StrokeStyle {
    const fn new(color: &'static str, width_pt: f64, alpha: f64, dash: Dash) -> Self {
        Self {
            color,
            width_pt,
            alpha,
            dash,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillStyle {
    pub color: &'static str,
    pub alpha: f64,
}

/// Filled circle; `size_pt` is the diameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub size_pt: f64,
}

const WALL: [StrokeStyle; 1] = [StrokeStyle::new("black", 2.0, 1.0, Dash::Solid)];
const DOOR: [StrokeStyle; 1] = [StrokeStyle::new("saddlebrown", 2.0, 0.7, Dash::Dotted)];
// Frame then glass.
const WINDOW: [StrokeStyle; 2] = [
    StrokeStyle::new("deepskyblue", 4.0, 0.6, Dash::Solid),
    StrokeStyle::new("lightblue", 2.0, 0.8, Dash::Solid),
];
const OPEN: [StrokeStyle; 1] = [StrokeStyle::new("grey", 1.0, 0.5, Dash::Dashed)];
const VOID: [StrokeStyle; 1] = [StrokeStyle::new("red", 1.5, 1.0, Dash::Dashed)];

/// Stroke layers for an edge, drawn in order.
pub fn edge_layers(kind: EdgeKind) -> &'static [StrokeStyle] {
    match kind {
        EdgeKind::Wall => &WALL,
        EdgeKind::Door => &DOOR,
        EdgeKind::Window => &WINDOW,
        EdgeKind::Open => &OPEN,
        EdgeKind::VoidBoundary => &VOID,
    }
}

/// Extra marker at the edge midpoint (windows only).
pub fn edge_midpoint_marker(kind: EdgeKind) -> Option<MarkerStyle> {
    match kind {
        EdgeKind::Window => Some(MarkerStyle {
            color: "deepskyblue",
            size_pt: 3.0,
        }),
        _ => None,
    }
}

/// Legend sample for an edge category.
pub fn legend_stroke(kind: EdgeKind) -> StrokeStyle {
    match kind {
        EdgeKind::Wall => StrokeStyle::new("black", 2.0, 1.0, Dash::Solid),
        EdgeKind::Door => StrokeStyle::new("saddlebrown", 2.0, 1.0, Dash::Dotted),
        EdgeKind::Window => StrokeStyle::new("deepskyblue", 3.0, 1.0, Dash::Solid),
        EdgeKind::Open => StrokeStyle::new("grey", 1.0, 1.0, Dash::Dashed),
        EdgeKind::VoidBoundary => StrokeStyle::new("red", 1.0, 1.0, Dash::Dashed),
    }
}

/// Categorical cycle for normal rooms, restarted on every panel.
pub const ROOM_CYCLE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];
pub const ROOM_ALPHA: f64 = 0.2;

pub const VOID_FILL: FillStyle = FillStyle {
    color: "orange",
    alpha: 0.3,
};
pub const FOUNDATION_FILL: FillStyle = FillStyle {
    color: "lightgrey",
    alpha: 0.1,
};

pub const VERTEX_MARKER: MarkerStyle = MarkerStyle {
    color: "red",
    size_pt: 3.0,
};

pub const GRID: StrokeStyle = StrokeStyle::new("#b0b0b0", 0.8, 0.3, Dash::Dotted);

pub const FONT_FAMILY: &str = "sans-serif";
pub const SUPTITLE_PT: f64 = 14.0;
pub const TITLE_PT: f64 = 12.0;
pub const AXIS_LABEL_PT: f64 = 10.0;
pub const TICK_PT: f64 = 8.0;
pub const ROOM_LABEL_PT: f64 = 7.0;
pub const LEGEND_PT: f64 = 8.0;
/// White box behind room labels.
pub const LABEL_BOX_ALPHA: f64 = 0.8;

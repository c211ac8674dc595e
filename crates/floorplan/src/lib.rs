//! Floor plan rendering from a structured house description.
//!
//! Pipeline
//! - `model`: YAML description → `House` (floors → rooms → polygons/openings).
//! - `classify`: per-edge classification (wall, door, window, open, void boundary).
//! - `render`: one panel per floor, composed into a `Figure` (SVG scene → PNG).
//! - `summary`: per-floor counts for the console.
//!
//! `plot_house` runs the whole pass for callers that only want the image.

pub mod classify;
pub mod config;
pub mod error;
pub mod geometry;
pub mod model;
pub mod render;
pub mod summary;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use classify::{classify_edge, classify_room, ClassifiedEdge, EdgeKind, MatchTolerance};
pub use config::{PlanDefaults, PlotCfg, RenderCfg};
pub use error::{LoadError, PlotError, RenderError};
pub use model::{load_house, parse_house, Floor, House, Point2D, Room, Segment};
pub use render::{plot_house, render_house, Figure, PlotOutcome};
pub use summary::{FloorSummary, HouseSummary};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::classify::{
        classify_edge, classify_room, ClassifiedEdge, EdgeKind, MatchTolerance, RoomIndex,
        SegmentIndex,
    };
    pub use crate::config::{PlanDefaults, PlotCfg, RenderCfg};
    pub use crate::model::{
        load_house, parse_house, Dimensions, Floor, House, Point2D, Room, Segment, WindowSpec,
    };
    pub use crate::render::{plot_house, render_house, Figure};
    pub use nalgebra::Vector2 as Vec2;
}

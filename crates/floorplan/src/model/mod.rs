//! House description model and loader.
//!
//! Purpose
//! - Parse the YAML description (`house → floors → rooms`) into plain records.
//! - Keep optional keys explicit: serde defaults for room/floor fields,
//!   `PlanDefaults` for metadata.
//!
//! Code cross-refs: `classify::RoomIndex` (consumes `Room`), `render::render_house`.

mod load;
mod types;

pub use load::{load_house, parse_house};
pub use types::{
    Dimensions, Floor, House, Metadata, Point2D, Room, Segment, WindowRecord, WindowSpec,
    DEFAULT_FLOOR_HEIGHT, DEFAULT_WINDOW_Z_MAX, DEFAULT_WINDOW_Z_MIN,
};

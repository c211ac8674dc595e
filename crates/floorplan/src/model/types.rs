//! House description records.
//!
//! Shapes mirror the YAML layout one-to-one; defaults for optional keys are
//! attached with `#[serde(default)]` so a loaded `House` never needs further
//! fix-ups except metadata, which resolves against `PlanDefaults`.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::config::PlanDefaults;

/// Storey height used when a floor omits `height`.
pub const DEFAULT_FLOOR_HEIGHT: f64 = 2.6;
/// Window sill and head heights used when a window record omits them.
pub const DEFAULT_WINDOW_Z_MIN: f64 = 0.9;
pub const DEFAULT_WINDOW_Z_MAX: f64 = 2.1;

/// A plan point, written `[x, y]` in the description.
///
/// Equality is exact on both coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn from_vec2(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        (other.to_vec2() - self.to_vec2()).norm()
    }
}

impl From<[f64; 2]> for Point2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point2D> for [f64; 2] {
    fn from(p: Point2D) -> Self {
        [p.x, p.y]
    }
}

/// Unordered pair of points, written `[[x1, y1], [x2, y2]]`.
///
/// `(a, b) == (b, a)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(from = "[Point2D; 2]", into = "[Point2D; 2]")]
pub struct Segment {
    pub a: Point2D,
    pub b: Point2D,
}

impl Segment {
    #[inline]
    pub fn new(a: Point2D, b: Point2D) -> Self {
        Self { a, b }
    }

    /// Symmetric exact match against the edge `p1 → p2`.
    #[inline]
    pub fn matches(&self, p1: Point2D, p2: Point2D) -> bool {
        (self.a == p1 && self.b == p2) || (self.a == p2 && self.b == p1)
    }

    /// Symmetric match with both endpoints within `eps` (Euclidean).
    pub fn matches_within(&self, p1: Point2D, p2: Point2D, eps: f64) -> bool {
        let close = |u: &Point2D, v: &Point2D| u.distance_to(v) <= eps;
        (close(&self.a, &p1) && close(&self.b, &p2)) || (close(&self.a, &p2) && close(&self.b, &p1))
    }

    pub fn midpoint(&self) -> Point2D {
        Point2D::from_vec2((self.a.to_vec2() + self.b.to_vec2()) * 0.5)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other.a, other.b)
    }
}

impl From<[Point2D; 2]> for Segment {
    fn from([a, b]: [Point2D; 2]) -> Self {
        Self { a, b }
    }
}

impl From<Segment> for [Point2D; 2] {
    fn from(s: Segment) -> Self {
        [s.a, s.b]
    }
}

/// A window entry: either a bare segment or a record wrapping one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WindowSpec {
    Bare(Segment),
    Record(WindowRecord),
}

/// Window details used by the 3D viewer; only `segment` matters in plan view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub segment: Segment,
    #[serde(default = "default_z_min")]
    pub z_min: f64,
    #[serde(default = "default_z_max")]
    pub z_max: f64,
    #[serde(default = "default_glass_type")]
    pub glass_type: String,
}

impl WindowSpec {
    #[inline]
    pub fn segment(&self) -> &Segment {
        match self {
            WindowSpec::Bare(seg) => seg,
            WindowSpec::Record(rec) => &rec.segment,
        }
    }

    /// Sill and head height above the floor.
    pub fn z_range(&self) -> (f64, f64) {
        match self {
            WindowSpec::Bare(_) => (DEFAULT_WINDOW_Z_MIN, DEFAULT_WINDOW_Z_MAX),
            WindowSpec::Record(rec) => (rec.z_min, rec.z_max),
        }
    }

    pub fn glass_type(&self) -> &str {
        match self {
            WindowSpec::Bare(_) => "clear",
            WindowSpec::Record(rec) => &rec.glass_type,
        }
    }
}

/// A room (or void) on one floor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Open ring; the closing edge back to the first vertex is implicit.
    pub polygon: Vec<Point2D>,
    #[serde(default)]
    pub is_void: bool,
    #[serde(default = "default_true")]
    pub has_floor: bool,
    #[serde(default)]
    pub no_walls: Vec<Segment>,
    #[serde(default)]
    pub doors: Vec<Segment>,
    #[serde(default)]
    pub windows: Vec<WindowSpec>,
}

impl Room {
    /// Text drawn at the centroid: the label, or the id when no label is set.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    /// Voids and floorless rooms share the void-boundary styling.
    #[inline]
    pub fn is_void_region(&self) -> bool {
        self.is_void || !self.has_floor
    }

    /// Consecutive vertex pairs including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        crate::geometry::closed_edges(&self.polygon)
    }

    pub fn window_segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.windows.iter().map(WindowSpec::segment)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub name: String,
    pub level: i32,
    #[serde(default = "default_floor_height")]
    pub height: f64,
    pub rooms: Vec<Room>,
}

impl Floor {
    /// Panel title, e.g. `Ground floor (Level 0)`.
    pub fn title(&self) -> String {
        format!("{} (Level {})", self.name, self.level)
    }
}

/// Overall footprint of the plot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub depth: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct House {
    #[serde(default)]
    pub metadata: Metadata,
    pub floors: Vec<Floor>,
}

impl House {
    pub fn name<'a>(&'a self, defaults: &'a PlanDefaults) -> &'a str {
        self.metadata
            .name
            .as_deref()
            .unwrap_or(&defaults.house_name)
    }

    pub fn dimensions(&self, defaults: &PlanDefaults) -> Dimensions {
        self.metadata.dimensions.unwrap_or(Dimensions {
            width: defaults.width,
            depth: defaults.depth,
        })
    }
}

fn default_true() -> bool {
    true
}

fn default_floor_height() -> f64 {
    DEFAULT_FLOOR_HEIGHT
}

fn default_z_min() -> f64 {
    DEFAULT_WINDOW_Z_MIN
}

fn default_z_max() -> f64 {
    DEFAULT_WINDOW_Z_MAX
}

fn default_glass_type() -> String {
    "clear".to_string()
}

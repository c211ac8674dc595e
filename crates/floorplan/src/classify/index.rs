//! Segment lookup tables.
//!
//! `Exact` matching hashes a normalized key per segment: both endpoints as
//! float bit patterns (with `-0.0` folded into `0.0`), sorted so `(a, b)` and
//! `(b, a)` share a key. `Within(eps)` scans linearly with a distance test.

use std::collections::HashSet;

use crate::model::{Point2D, Room, Segment};

use super::EdgeKind;

/// How polygon edges are compared with declared segments.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MatchTolerance {
    /// Exact float equality of both endpoints.
    #[default]
    Exact,
    /// Both endpoints within this Euclidean distance.
    Within(f64),
}

impl MatchTolerance {
    /// `None`, zero, negative or non-finite values mean `Exact`.
    pub fn from_eps(eps: Option<f64>) -> Self {
        match eps {
            Some(e) if e.is_finite() && e > 0.0 => MatchTolerance::Within(e),
            _ => MatchTolerance::Exact,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct PointKey(u64, u64);

impl PointKey {
    /// `None` for NaN coordinates, which never compare equal.
    fn of(p: Point2D) -> Option<Self> {
        if p.x.is_nan() || p.y.is_nan() {
            return None;
        }
        Some(PointKey(fold_zero(p.x).to_bits(), fold_zero(p.y).to_bits()))
    }
}

#[inline]
fn fold_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct SegmentKey(PointKey, PointKey);

impl SegmentKey {
    fn of(p1: Point2D, p2: Point2D) -> Option<Self> {
        let (a, b) = (PointKey::of(p1)?, PointKey::of(p2)?);
        Some(if a <= b { SegmentKey(a, b) } else { SegmentKey(b, a) })
    }
}

#[derive(Clone, Debug)]
enum Lookup {
    Exact(HashSet<SegmentKey>),
    Within { eps: f64, segments: Vec<Segment> },
}

/// Set of declared segments with order-independent membership tests.
#[derive(Clone, Debug)]
pub struct SegmentIndex {
    lookup: Lookup,
}

impl SegmentIndex {
    pub fn new<'a, I>(segments: I, tolerance: MatchTolerance) -> Self
    where
        I: IntoIterator<Item = &'a Segment>,
    {
        let lookup = match tolerance {
            MatchTolerance::Exact => Lookup::Exact(
                segments
                    .into_iter()
                    .filter_map(|s| SegmentKey::of(s.a, s.b))
                    .collect(),
            ),
            MatchTolerance::Within(eps) => Lookup::Within {
                eps,
                segments: segments.into_iter().copied().collect(),
            },
        };
        Self { lookup }
    }

    /// True if `p1 → p2` (in either direction) is one of the segments.
    pub fn contains(&self, p1: Point2D, p2: Point2D) -> bool {
        match &self.lookup {
            Lookup::Exact(keys) => SegmentKey::of(p1, p2).is_some_and(|k| keys.contains(&k)),
            Lookup::Within { eps, segments } => {
                segments.iter().any(|s| s.matches_within(p1, p2, *eps))
            }
        }
    }

    pub fn len(&self) -> usize {
        match &self.lookup {
            Lookup::Exact(keys) => keys.len(),
            Lookup::Within { segments, .. } => segments.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-room lookup tables for the classification precedence.
#[derive(Clone, Debug)]
pub struct RoomIndex {
    void_region: bool,
    windows: SegmentIndex,
    doors: SegmentIndex,
    /// Doors and no-walls together.
    open: SegmentIndex,
}

impl RoomIndex {
    pub fn new(room: &Room, tolerance: MatchTolerance) -> Self {
        Self {
            void_region: room.is_void_region(),
            windows: SegmentIndex::new(room.window_segments(), tolerance),
            doors: SegmentIndex::new(&room.doors, tolerance),
            open: SegmentIndex::new(room.no_walls.iter().chain(&room.doors), tolerance),
        }
    }

    pub fn classify(&self, p1: Point2D, p2: Point2D) -> EdgeKind {
        if self.void_region {
            return EdgeKind::VoidBoundary;
        }
        if self.windows.contains(p1, p2) {
            return EdgeKind::Window;
        }
        if !self.open.contains(p1, p2) {
            return EdgeKind::Wall;
        }
        if self.doors.contains(p1, p2) {
            EdgeKind::Door
        } else {
            EdgeKind::Open
        }
    }
}

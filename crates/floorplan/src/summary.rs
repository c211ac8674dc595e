//! Per-floor counts printed after a render.

use std::fmt;

use serde::Serialize;

use crate::config::PlanDefaults;
use crate::model::{Floor, House};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FloorSummary {
    pub name: String,
    pub level: i32,
    pub height: f64,
    /// Rooms with a floor that are not voids.
    pub rooms: usize,
    /// Voids and floorless rooms.
    pub voids: usize,
    /// Declared windows across all rooms.
    pub windows: usize,
}

impl FloorSummary {
    pub fn of(floor: &Floor) -> Self {
        let voids = floor.rooms.iter().filter(|r| r.is_void_region()).count();
        Self {
            name: floor.name.clone(),
            level: floor.level,
            height: floor.height,
            rooms: floor.rooms.len() - voids,
            voids,
            windows: floor.rooms.iter().map(|r| r.windows.len()).sum(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HouseSummary {
    pub name: String,
    pub floors: Vec<FloorSummary>,
}

impl HouseSummary {
    pub fn of(house: &House, defaults: &PlanDefaults) -> Self {
        Self {
            name: house.name(defaults).to_string(),
            floors: house.floors.iter().map(FloorSummary::of).collect(),
        }
    }
}

impl fmt::Display for HouseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  - {} floors", self.floors.len())?;
        for floor in &self.floors {
            write!(
                f,
                "\n  - {}: {} rooms, {} voids, {} windows",
                floor.name, floor.rooms, floor.voids, floor.windows
            )?;
        }
        Ok(())
    }
}

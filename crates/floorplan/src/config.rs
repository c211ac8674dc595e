//! Configuration records with documented defaults.
//!
//! - `PlanDefaults`: values used when the description omits house metadata.
//! - `RenderCfg`: figure geometry, resolution and segment matching mode.
//! - `PlotCfg`: input/output locations for a full `plot_house` pass.

use std::path::PathBuf;

use crate::classify::MatchTolerance;

/// Default description location, relative to the working directory.
pub const DEFAULT_INPUT: &str = "data/house.yaml";
/// Default image location, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "output/floorplan.png";

/// Fallbacks for house metadata missing from the description.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanDefaults {
    pub house_name: String,
    /// Plot width in metres (x extent).
    pub width: f64,
    /// Plot depth in metres (z extent, drawn on the vertical axis).
    pub depth: f64,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self {
            house_name: "My House".to_string(),
            width: 5.0,
            depth: 10.0,
        }
    }
}

/// Figure layout and classification settings.
#[derive(Clone, Debug)]
pub struct RenderCfg {
    /// Pixels per inch; line widths and font sizes are given in points (1/72 in).
    pub dpi: f64,
    /// Width of one floor panel in inches.
    pub panel_width_in: f64,
    /// Height of the figure in inches.
    pub panel_height_in: f64,
    /// World-space padding around `[0,width]×[0,depth]`.
    pub view_pad: f64,
    pub tolerance: MatchTolerance,
    pub defaults: PlanDefaults,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            dpi: 150.0,
            panel_width_in: 6.0,
            panel_height_in: 8.0,
            view_pad: 0.5,
            tolerance: MatchTolerance::Exact,
            defaults: PlanDefaults::default(),
        }
    }
}

impl RenderCfg {
    /// Convert a length in points to pixels at the configured resolution.
    #[inline]
    pub fn pt(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }
}

/// Paths and settings for one end-to-end run.
#[derive(Clone, Debug)]
pub struct PlotCfg {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Also write the SVG scene here when set.
    pub svg_output: Option<PathBuf>,
    pub render: RenderCfg,
}

impl Default for PlotCfg {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            svg_output: None,
            render: RenderCfg::default(),
        }
    }
}

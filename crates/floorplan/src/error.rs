use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a house description.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The only expected failure: callers report it and stop without output.
    #[error("house description not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed house description: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Inconsistent input discovered while building the figure.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("house has no floors")]
    NoFloors,
    #[error("room `{room}` on floor `{floor}` has {points} polygon points; at least 3 are required")]
    DegeneratePolygon {
        floor: String,
        room: String,
        points: usize,
    },
    #[error("invalid figure dimensions {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("svg scene rejected: {0}")]
    Svg(#[from] resvg::usvg::Error),
    #[error("writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("image and svg outputs both point at {}", .0.display())]
    OutputClash(PathBuf),
    #[error("encoding png {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },
}

/// Anything that can stop `plot_house`.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl PlotError {
    /// True when the run stopped only because the description file is absent.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, PlotError::Load(LoadError::NotFound(_)))
    }
}

//! Floor plan rendering.
//!
//! Purpose
//! - Turn a `House` into a `Figure`: one panel per floor with filled rooms,
//!   classified edge strokes, centroid labels, vertex markers, and a legend
//!   on the last panel.
//! - Serialize to SVG and rasterize to PNG (`svg`, `raster`).
//!
//! Per panel, the drawing order is: foundation, room fills, edge strokes,
//! markers, labels. Normal rooms cycle through `style::ROOM_CYCLE`, restarting
//! on every floor; voids and floorless rooms use `style::VOID_FILL`.
//!
//! Code cross-refs: `classify::RoomIndex`, `layout::{panel_frame, Viewport}`.

pub mod layout;
mod raster;
pub mod scene;
pub mod style;
mod svg;

use std::path::PathBuf;

use crate::classify::{EdgeKind, RoomIndex};
use crate::config::{PlotCfg, RenderCfg};
use crate::error::{PlotError, RenderError};
use crate::geometry;
use crate::model::{load_house, Dimensions, Floor, House, Point2D, Segment};
use crate::summary::HouseSummary;

pub use scene::{EdgeStroke, FillShape, Figure, Legend, Marker, Panel, RoomLabel};

/// Build the figure scene for `house`.
///
/// Fails on a house without floors and on rooms with fewer than three
/// polygon points; nothing is drawn in either case.
pub fn render_house(house: &House, cfg: &RenderCfg) -> Result<Figure, RenderError> {
    if house.floors.is_empty() {
        return Err(RenderError::NoFloors);
    }
    let dims = house.dimensions(&cfg.defaults);
    let (width_px, height_px) = layout::figure_size(cfg, house.floors.len());
    let last = house.floors.len() - 1;

    let mut panels = Vec::with_capacity(house.floors.len());
    for (i, floor) in house.floors.iter().enumerate() {
        let mut panel = render_floor(floor, i, dims, cfg)?;
        if i == last {
            panel.legend = Some(Legend {
                entries: EdgeKind::ALL
                    .iter()
                    .map(|&k| (k, style::legend_stroke(k)))
                    .collect(),
            });
        }
        tracing::debug!(
            floor = %floor.name,
            rooms = floor.rooms.len(),
            edges = panel.edges.len(),
            "panel built"
        );
        panels.push(panel);
    }

    Ok(Figure {
        title: format!("Floor plan: {}", house.name(&cfg.defaults)),
        width_px,
        height_px,
        dpi: cfg.dpi,
        panels,
    })
}

fn render_floor(
    floor: &Floor,
    index: usize,
    dims: Dimensions,
    cfg: &RenderCfg,
) -> Result<Panel, RenderError> {
    let foundation = FillShape {
        room_id: None,
        ring: vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(dims.width, 0.0),
            Point2D::new(dims.width, dims.depth),
            Point2D::new(0.0, dims.depth),
        ],
        style: style::FOUNDATION_FILL,
    };
    let mut panel = Panel {
        title: floor.title(),
        frame: layout::panel_frame(cfg, index, dims),
        foundation,
        fills: Vec::with_capacity(floor.rooms.len()),
        edges: Vec::new(),
        markers: Vec::new(),
        labels: Vec::with_capacity(floor.rooms.len()),
        legend: None,
    };

    let mut cycle = style::ROOM_CYCLE.iter().cycle();
    for room in &floor.rooms {
        if room.polygon.len() < 3 {
            return Err(RenderError::DegeneratePolygon {
                floor: floor.name.clone(),
                room: room.id.clone(),
                points: room.polygon.len(),
            });
        }

        let fill = if room.is_void_region() {
            style::VOID_FILL
        } else {
            style::FillStyle {
                color: cycle.next().copied().unwrap_or("#1f77b4"),
                alpha: style::ROOM_ALPHA,
            }
        };
        panel.fills.push(FillShape {
            room_id: Some(room.id.clone()),
            ring: room.polygon.clone(),
            style: fill,
        });

        let lookup = RoomIndex::new(room, cfg.tolerance);
        for (from, to) in room.edges() {
            let kind = lookup.classify(from, to);
            panel.edges.push(EdgeStroke {
                room_id: room.id.clone(),
                from,
                to,
                kind,
                layers: style::edge_layers(kind),
            });
            if let Some(marker) = style::edge_midpoint_marker(kind) {
                panel.markers.push(Marker {
                    at: Segment::new(from, to).midpoint(),
                    style: marker,
                });
            }
        }

        if let Some(at) = geometry::centroid(&room.polygon) {
            panel.labels.push(RoomLabel {
                text: room.display_label().to_string(),
                at,
            });
        }
        panel
            .markers
            .extend(room.polygon.iter().map(|&at| Marker {
                at,
                style: style::VERTEX_MARKER,
            }));
    }
    Ok(panel)
}

/// Result of a completed `plot_house` run.
#[derive(Clone, Debug)]
pub struct PlotOutcome {
    pub output: PathBuf,
    pub svg_output: Option<PathBuf>,
    pub width_px: u32,
    pub height_px: u32,
    pub summary: HouseSummary,
}

/// Load the description, render it, and write the image (and optional SVG).
///
/// A missing description yields `PlotError::Load(LoadError::NotFound)` before
/// anything is written, as does an SVG path equal to the image path
/// (`RenderError::OutputClash`).
pub fn plot_house(cfg: &PlotCfg) -> Result<PlotOutcome, PlotError> {
    if cfg.svg_output.as_deref() == Some(cfg.output.as_path()) {
        return Err(RenderError::OutputClash(cfg.output.clone()).into());
    }
    let house = load_house(&cfg.input)?;
    let figure = render_house(&house, &cfg.render)?;
    figure.save_png(&cfg.output)?;
    if let Some(svg_path) = &cfg.svg_output {
        figure.save_svg(svg_path)?;
    }
    tracing::info!(
        output = %cfg.output.display(),
        floors = house.floors.len(),
        "floor plan written"
    );
    Ok(PlotOutcome {
        output: cfg.output.clone(),
        svg_output: cfg.svg_output.clone(),
        width_px: figure.width_px,
        height_px: figure.height_px,
        summary: HouseSummary::of(&house, &cfg.render.defaults),
    })
}

#[cfg(test)]
mod tests;

//! Figure layout: panel frames and the world → pixel mapping.
//!
//! Model
//! - The figure is `floors × panel_width_in` by `panel_height_in` inches.
//! - Each panel reserves bands (in points) for its title, tick labels and
//!   axis labels; the remaining box holds the plot area.
//! - The plot area keeps equal aspect: one scale for both axes, sized to the
//!   padded footprint and centered in the box.
//! - The vertical axis is inverted: world `y` grows downward on screen.

use crate::config::RenderCfg;
use crate::model::{Dimensions, Point2D};

const SUPTITLE_BAND_PT: f64 = 36.0;
const TITLE_BAND_PT: f64 = 26.0;
const LEFT_BAND_PT: f64 = 46.0;
const RIGHT_BAND_PT: f64 = 14.0;
const BOTTOM_BAND_PT: f64 = 40.0;

/// Axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.x + self.w * 0.5
    }
}

/// Equal-aspect mapping from world metres to figure pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Pixel rectangle of the plot area.
    pub area: Rect,
    /// World bounds shown: `[x_min, x_max] × [y_min, y_max]`.
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Pixels per metre.
    pub scale: f64,
}

impl Viewport {
    /// Fit the padded footprint into `frame`, centered, with equal aspect.
    pub fn fit(frame: Rect, dims: Dimensions, pad: f64) -> Self {
        let (x_min, x_max) = (-pad, dims.width + pad);
        let (y_min, y_max) = (-pad, dims.depth + pad);
        let span_x = (x_max - x_min).max(f64::EPSILON);
        let span_y = (y_max - y_min).max(f64::EPSILON);
        let scale = (frame.w / span_x).min(frame.h / span_y).max(0.0);
        let (w, h) = (span_x * scale, span_y * scale);
        let area = Rect {
            x: frame.x + (frame.w - w) * 0.5,
            y: frame.y + (frame.h - h) * 0.5,
            w,
            h,
        };
        Self {
            area,
            x_min,
            x_max,
            y_min,
            y_max,
            scale,
        }
    }

    /// World point to pixel position (y inverted: `y_min` at the top edge).
    #[inline]
    pub fn to_px(&self, p: Point2D) -> (f64, f64) {
        (
            self.area.x + (p.x - self.x_min) * self.scale,
            self.area.y + (p.y - self.y_min) * self.scale,
        )
    }
}

/// Pixel frames for one floor panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelFrame {
    /// Whole panel slot, including bands.
    pub slot: Rect,
    pub viewport: Viewport,
}

/// Figure pixel size for `floors` panels.
pub fn figure_size(cfg: &RenderCfg, floors: usize) -> (u32, u32) {
    let w = (cfg.panel_width_in * cfg.dpi * floors as f64).round();
    let h = (cfg.panel_height_in * cfg.dpi).round();
    (w.max(0.0) as u32, h.max(0.0) as u32)
}

/// Height in pixels of the band holding the figure title.
pub fn suptitle_band_px(dpi: f64) -> f64 {
    SUPTITLE_BAND_PT * dpi / 72.0
}

/// Frame of panel `index` out of `floors`.
pub fn panel_frame(cfg: &RenderCfg, index: usize, dims: Dimensions) -> PanelFrame {
    let slot_w = cfg.panel_width_in * cfg.dpi;
    let slot = Rect {
        x: slot_w * index as f64,
        y: 0.0,
        w: slot_w,
        h: cfg.panel_height_in * cfg.dpi,
    };
    let top = cfg.pt(SUPTITLE_BAND_PT + TITLE_BAND_PT);
    let frame = Rect {
        x: slot.x + cfg.pt(LEFT_BAND_PT),
        y: top,
        w: (slot.w - cfg.pt(LEFT_BAND_PT + RIGHT_BAND_PT)).max(0.0),
        h: (slot.h - top - cfg.pt(BOTTOM_BAND_PT)).max(0.0),
    };
    PanelFrame {
        slot,
        viewport: Viewport::fit(frame, dims, cfg.view_pad),
    }
}

/// Round tick positions covering `[lo, hi]`, aiming for about six ticks.
pub fn ticks(lo: f64, hi: f64) -> Vec<f64> {
    let span = hi - lo;
    if !(span.is_finite()) || span <= 0.0 {
        return Vec::new();
    }
    let raw = span / 6.0;
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * mag);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Tick label without trailing zeros (`2`, `2.5`).
pub fn tick_label(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    let s = format!("{v:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

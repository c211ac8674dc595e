//! SVG serialization of a `Figure`.

use super::layout::{self, Rect, Viewport};
use super::scene::{FillShape, Figure, Legend, Marker, Panel};
use super::style::{self, StrokeStyle};

/// Points to pixels at `dpi`.
#[inline]
fn pt(dpi: f64, points: f64) -> f64 {
    points * dpi / 72.0
}

impl Figure {
    /// Serialize the scene as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let (w, h) = (self.width_px, self.height_px);
        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
        ));
        svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>");
        text(
            &mut svg,
            "suptitle",
            w as f64 * 0.5,
            layout::suptitle_band_px(self.dpi) * 0.6,
            pt(self.dpi, style::SUPTITLE_PT),
            true,
            "middle",
            &self.title,
        );
        for (i, panel) in self.panels.iter().enumerate() {
            write_panel(&mut svg, i, panel, self.dpi);
        }
        svg.push_str("</svg>");
        svg
    }
}

fn write_panel(svg: &mut String, index: usize, panel: &Panel, dpi: f64) {
    let vp = panel.frame.viewport;
    let area = vp.area;
    svg.push_str("<g class=\"panel\">");
    text(
        svg,
        "panel-title",
        area.center_x(),
        area.y - pt(dpi, 8.0),
        pt(dpi, style::TITLE_PT),
        true,
        "middle",
        &panel.title,
    );
    write_grid(svg, &vp, dpi);

    svg.push_str(&format!(
        "<clipPath id=\"clip-{index}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/></clipPath>",
        area.x, area.y, area.w, area.h
    ));
    svg.push_str(&format!("<g clip-path=\"url(#clip-{index})\">"));
    write_fill(svg, &vp, &panel.foundation);
    for fill in &panel.fills {
        write_fill(svg, &vp, fill);
    }
    for edge in &panel.edges {
        let (x1, y1) = vp.to_px(edge.from);
        let (x2, y2) = vp.to_px(edge.to);
        svg.push_str(&format!("<g class=\"edge {}\">", edge.kind.slug()));
        for layer in edge.layers {
            line(svg, x1, y1, x2, y2, layer, dpi);
        }
        svg.push_str("</g>");
    }
    for marker in &panel.markers {
        write_marker(svg, &vp, marker, dpi);
    }
    for label in &panel.labels {
        let (x, y) = vp.to_px(label.at);
        let size = pt(dpi, style::ROOM_LABEL_PT);
        let pad = pt(dpi, 1.0);
        let bw = label.text.chars().count() as f64 * size * 0.62 + 2.0 * pad;
        let bh = size * 1.25 + 2.0 * pad;
        svg.push_str(&format!(
            "<rect class=\"label-box\" x=\"{:.2}\" y=\"{:.2}\" width=\"{bw:.2}\" height=\"{bh:.2}\" fill=\"white\" fill-opacity=\"{}\"/>",
            x - bw * 0.5,
            y - bh * 0.5,
            style::LABEL_BOX_ALPHA
        ));
        text(svg, "room-label", x, y + size * 0.35, size, true, "middle", &label.text);
    }
    svg.push_str("</g>");

    // axes frame and labels
    svg.push_str(&format!(
        "<rect class=\"frame\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"black\" stroke-width=\"{:.2}\"/>",
        area.x,
        area.y,
        area.w,
        area.h,
        pt(dpi, 0.8)
    ));
    let label_size = pt(dpi, style::AXIS_LABEL_PT);
    text(
        svg,
        "axis-label",
        area.center_x(),
        area.bottom() + pt(dpi, 30.0),
        label_size,
        false,
        "middle",
        "X (width)",
    );
    let (lx, ly) = (area.x - pt(dpi, 34.0), area.y + area.h * 0.5);
    svg.push_str(&format!(
        "<text class=\"axis-label\" x=\"{lx:.2}\" y=\"{ly:.2}\" font-family=\"{}\" font-size=\"{label_size:.2}\" text-anchor=\"middle\" transform=\"rotate(-90 {lx:.2} {ly:.2})\">Z (depth)</text>",
        style::FONT_FAMILY
    ));
    if let Some(legend) = &panel.legend {
        write_legend(svg, area, legend, dpi);
    }
    svg.push_str("</g>");
}

fn write_grid(svg: &mut String, vp: &Viewport, dpi: f64) {
    let area = vp.area;
    let tick_size = pt(dpi, style::TICK_PT);
    let grid = style::GRID;
    for x in layout::ticks(vp.x_min, vp.x_max) {
        let (px, _) = vp.to_px(crate::model::Point2D::new(x, vp.y_min));
        line(svg, px, area.y, px, area.bottom(), &grid, dpi);
        text(
            svg,
            "tick",
            px,
            area.bottom() + tick_size * 1.4,
            tick_size,
            false,
            "middle",
            &layout::tick_label(x),
        );
    }
    for y in layout::ticks(vp.y_min, vp.y_max) {
        let (_, py) = vp.to_px(crate::model::Point2D::new(vp.x_min, y));
        line(svg, area.x, py, area.right(), py, &grid, dpi);
        text(
            svg,
            "tick",
            area.x - tick_size * 0.5,
            py + tick_size * 0.35,
            tick_size,
            false,
            "end",
            &layout::tick_label(y),
        );
    }
}

fn write_fill(svg: &mut String, vp: &Viewport, fill: &FillShape) {
    let mut points = String::new();
    for p in &fill.ring {
        let (x, y) = vp.to_px(*p);
        points.push_str(&format!("{x:.2},{y:.2} "));
    }
    let class = if fill.room_id.is_some() { "room" } else { "foundation" };
    svg.push_str(&format!(
        "<polygon class=\"{class}\" points=\"{}\" fill=\"{}\" fill-opacity=\"{}\" stroke=\"none\"/>",
        points.trim_end(),
        fill.style.color,
        fill.style.alpha
    ));
}

fn write_marker(svg: &mut String, vp: &Viewport, marker: &Marker, dpi: f64) {
    let (x, y) = vp.to_px(marker.at);
    svg.push_str(&format!(
        "<circle class=\"marker\" cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"{:.2}\" fill=\"{}\"/>",
        pt(dpi, marker.style.size_pt) * 0.5,
        marker.style.color
    ));
}

fn write_legend(svg: &mut String, area: Rect, legend: &Legend, dpi: f64) {
    let size = pt(dpi, style::LEGEND_PT);
    let row = size * 1.6;
    let sample = size * 2.2;
    let pad = size * 0.6;
    let longest = legend
        .entries
        .iter()
        .map(|(k, _)| k.label().chars().count())
        .max()
        .unwrap_or(0) as f64;
    let w = pad * 3.0 + sample + longest * size * 0.6;
    let h = pad * 2.0 + row * legend.entries.len() as f64;
    let x = area.right() - w - pt(dpi, 4.0);
    let y = area.y + pt(dpi, 4.0);
    svg.push_str("<g class=\"legend\">");
    svg.push_str(&format!(
        "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" rx=\"{:.2}\" fill=\"white\" fill-opacity=\"0.8\" stroke=\"#cccccc\"/>",
        size * 0.3
    ));
    for (i, (kind, stroke)) in legend.entries.iter().enumerate() {
        let cy = y + pad + row * (i as f64 + 0.5);
        line(svg, x + pad, cy, x + pad + sample, cy, stroke, dpi);
        text(
            svg,
            "legend-label",
            x + pad * 2.0 + sample,
            cy + size * 0.35,
            size,
            false,
            "start",
            kind.label(),
        );
    }
    svg.push_str("</g>");
}

fn line(svg: &mut String, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &StrokeStyle, dpi: f64) {
    let width = pt(dpi, stroke.width_pt);
    svg.push_str(&format!(
        "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{}\" stroke-width=\"{width:.2}\"",
        stroke.color
    ));
    if stroke.alpha < 1.0 {
        svg.push_str(&format!(" stroke-opacity=\"{}\"", stroke.alpha));
    }
    if let Some([on, off]) = stroke.dash.pattern() {
        svg.push_str(&format!(
            " stroke-dasharray=\"{:.2} {:.2}\"",
            on * width,
            off * width
        ));
    }
    svg.push_str("/>");
}

#[allow(clippy::too_many_arguments)]
fn text(
    svg: &mut String,
    class: &str,
    x: f64,
    y: f64,
    size: f64,
    bold: bool,
    anchor: &str,
    content: &str,
) {
    let weight = if bold { " font-weight=\"bold\"" } else { "" };
    svg.push_str(&format!(
        "<text class=\"{class}\" x=\"{x:.2}\" y=\"{y:.2}\" font-family=\"{}\" font-size=\"{size:.2}\"{weight} text-anchor=\"{anchor}\">{}</text>",
        style::FONT_FAMILY,
        escape_xml(content)
    ));
}

/// Escape markup characters and drop control characters XML 1.0 does not allow.
pub(crate) fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if c < ' ' => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_xml;

    #[test]
    fn escape_xml_replaces_markup_and_drops_control_chars() {
        assert_eq!(escape_xml("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
        assert_eq!(escape_xml("Hall\u{b}way\u{0}"), "Hallway");
        assert_eq!(escape_xml("two\tcols"), "two\tcols");
    }
}

//! Deterministic SVG emission for a laid-out gallery.

use crate::model::{ChartLayout, GalleryLayout, SliceLayout};
use asterplot_core::topics::STROKE_COLOR;
use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

const FULL_CIRCLE_EPS: f64 = 1e-9;

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Root element id; also namespaces the emitted CSS.
    pub diagram_id: Option<String>,
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    if v.abs() < 0.0005 {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

/// 12 o'clock is zero, clockwise, y increasing downwards.
fn polar_xy(radius: f64, angle: f64) -> (f64, f64) {
    let x = radius * angle.sin();
    let y = -radius * angle.cos();
    (x, y)
}

/// Annulus-segment path between `inner` and `outer`, `start` to `end`.
///
/// Returns `None` for a zero-width slice (nothing to draw; the slice still
/// exists in the layout). A full-circle slice becomes an even-odd ring.
fn annulus_path(start: f64, end: f64, outer: f64, inner: f64) -> Option<String> {
    let delta = end - start;
    if delta <= 0.0 {
        return None;
    }
    if delta >= TAU - FULL_CIRCLE_EPS {
        let ring = format!(
            "M0,-{o}A{o},{o},0,1,1,0,{o}A{o},{o},0,1,1,0,-{o}ZM0,-{i}A{i},{i},0,1,0,0,{i}A{i},{i},0,1,0,0,-{i}Z",
            o = fmt(outer),
            i = fmt(inner)
        );
        return Some(ring);
    }

    let (ox0, oy0) = polar_xy(outer, start);
    let (ox1, oy1) = polar_xy(outer, end);
    let (ix1, iy1) = polar_xy(inner, end);
    let (ix0, iy0) = polar_xy(inner, start);
    let large = if delta > PI { 1 } else { 0 };
    Some(format!(
        "M{ox0},{oy0}A{o},{o},0,{large},1,{ox1},{oy1}L{ix1},{iy1}A{i},{i},0,{large},0,{ix0},{iy0}Z",
        ox0 = fmt(ox0),
        oy0 = fmt(oy0),
        o = fmt(outer),
        large = large,
        ox1 = fmt(ox1),
        oy1 = fmt(oy1),
        ix1 = fmt(ix1),
        iy1 = fmt(iy1),
        i = fmt(inner),
        ix0 = fmt(ix0),
        iy0 = fmt(iy0)
    ))
}

fn gallery_css(diagram_id: &str) -> String {
    let id = escape_xml(diagram_id);
    let font = r#""trebuchet ms",verdana,arial,sans-serif"#;
    let mut out = String::new();
    let _ = write!(
        &mut out,
        r##"#{id} .solidArc{{stroke:{stroke};stroke-width:1;}}#{id} .outlineArc{{fill:none;stroke:{stroke};stroke-width:1;}}#{id} .asterLabel{{text-anchor:middle;font-size:8px;fill:black;font-family:{font};}}#{id} .bandTitle{{font-size:16px;font-weight:bold;fill:black;font-family:{font};}}#{id} .legend text{{fill:black;font-size:12px;font-family:{font};}}"##,
        id = id,
        stroke = STROKE_COLOR,
        font = font
    );
    out
}

fn write_slice(out: &mut String, slice: &SliceLayout, inner_radius: f64) {
    let Some(d) = annulus_path(
        slice.start_angle,
        slice.end_angle,
        slice.outer_radius,
        inner_radius,
    ) else {
        return;
    };
    let fill_rule = if slice.end_angle - slice.start_angle >= TAU - FULL_CIRCLE_EPS {
        r#" fill-rule="evenodd""#
    } else {
        ""
    };
    let _ = write!(
        out,
        r#"<path class="solidArc" fill="{fill}"{fill_rule} d="{d}"><title>{label}</title></path>"#,
        fill = escape_xml(&slice.fill),
        fill_rule = fill_rule,
        d = d,
        label = escape_xml(&slice.label)
    );
}

fn write_chart(out: &mut String, chart: &ChartLayout, radius: f64, inner_radius: f64) {
    let _ = write!(
        out,
        r#"<g class="asterChart" data-slot="{slot}" transform="translate({x},{y})">"#,
        slot = escape_xml(&chart.slot),
        x = fmt(chart.center_x),
        y = fmt(chart.center_y)
    );

    for slice in &chart.slices {
        write_slice(out, slice, inner_radius);
    }

    // Outline arcs always span inner radius to the full chart radius, so the
    // complete circle boundary shows regardless of score.
    for slice in &chart.slices {
        if let Some(d) = annulus_path(slice.start_angle, slice.end_angle, radius, inner_radius) {
            let _ = write!(out, r#"<path class="outlineArc" d="{d}"/>"#);
        }
    }

    let _ = write!(
        out,
        r#"<text class="asterLabel" dy="0.01em">{first}</text><text class="asterLabel" dy="1.3em">{last}</text>"#,
        first = escape_xml(&chart.first_name),
        last = escape_xml(&chart.last_name)
    );
    out.push_str("</g>");
}

/// Render the gallery layout to a standalone SVG document.
pub fn render_gallery_svg(layout: &GalleryLayout, options: &SvgRenderOptions) -> String {
    let diagram_id = options.diagram_id.as_deref().unwrap_or("asterplot");
    let diagram_id_esc = escape_xml(diagram_id);

    let vb_w = (layout.bounds.max_x - layout.bounds.min_x).max(1.0);
    let vb_h = (layout.bounds.max_y - layout.bounds.min_y).max(1.0);

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{id}" width="100%" xmlns="http://www.w3.org/2000/svg" viewBox="{min_x} {min_y} {w} {h}" style="max-width: {w}px; background-color: white;" role="graphics-document document" aria-roledescription="asterGallery">"#,
        id = diagram_id_esc,
        min_x = fmt(layout.bounds.min_x),
        min_y = fmt(layout.bounds.min_y),
        w = fmt(vb_w),
        h = fmt(vb_h)
    );
    let _ = write!(&mut out, r#"<style>{}</style>"#, gallery_css(diagram_id));

    out.push_str(r#"<g class="legend">"#);
    for item in &layout.legend {
        let _ = write!(
            &mut out,
            r#"<g transform="translate({x},{y})"><rect width="18" height="18" fill="{color}"/><text x="22" y="14">{label}</text></g>"#,
            x = fmt(item.x),
            y = fmt(item.y),
            color = escape_xml(&item.color),
            label = escape_xml(&item.label)
        );
    }
    out.push_str("</g>");

    for band in &layout.bands {
        let _ = write!(
            &mut out,
            r#"<text class="bandTitle" x="{x}" y="{y}">{title}</text>"#,
            x = fmt(band.title_x),
            y = fmt(band.title_y),
            title = escape_xml(band.university.name())
        );
        for chart in &band.charts {
            write_chart(&mut out, chart, layout.radius, layout.inner_radius);
        }
    }

    out.push_str("</svg>\n");
    out
}

//! Minimal SVG document builder for static charts.
//!
//! Chart coordinates are SVG pixels (y down). [`PlotArea`] maps data coordinates into a pixel
//! rectangle with y up.

use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::{
    encode::sink::ensure_parent_dir,
    foundation::core::{Point, Rect, Rgba8},
    foundation::error::{ReelError, ReelResult},
    render::svg::{escape_xml, parse_svg, rasterize_svg_to_premul_rgba8, unpremultiply_rgba8},
};

pub const FONT_FAMILY: &str = "sans-serif";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Clone, Debug)]
pub struct TextStyle {
    pub size: f64,
    pub color: Rgba8,
    pub anchor: Anchor,
    pub bold: bool,
    pub rotate_deg: f64,
}

impl TextStyle {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            color: Rgba8::BLACK,
            anchor: Anchor::Middle,
            bold: false,
            rotate_deg: 0.0,
        }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn rotated(mut self, deg: f64) -> Self {
        self.rotate_deg = deg;
        self
    }
}

pub struct SvgDoc {
    width: u32,
    height: u32,
    body: String,
}

impl SvgDoc {
    pub fn new(width: u32, height: u32, background: Rgba8) -> Self {
        let mut doc = Self {
            width,
            height,
            body: String::new(),
        };
        doc.rect(
            Rect::new(0.0, 0.0, f64::from(width), f64::from(height)),
            background,
            None,
        );
        doc
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rect(&mut self, r: Rect, fill: Rgba8, stroke: Option<(Rgba8, f64)>) {
        let r = r.abs();
        self.body.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" {}{}/>"#,
            r.x0,
            r.y0,
            r.width(),
            r.height(),
            paint("fill", fill),
            stroke
                .map(|(c, w)| format!(r#" {} stroke-width="{w:.2}""#, paint("stroke", c)))
                .unwrap_or_default(),
        ));
        self.body.push('\n');
    }

    pub fn line(&mut self, a: Point, b: Point, color: Rgba8, width: f64) {
        self.body.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {} stroke-width="{width:.2}"/>"#,
            a.x,
            a.y,
            b.x,
            b.y,
            paint("stroke", color),
        ));
        self.body.push('\n');
    }

    pub fn circle(&mut self, center: Point, radius: f64, fill: Rgba8) {
        self.body.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{radius:.2}" {}/>"#,
            center.x,
            center.y,
            paint("fill", fill),
        ));
        self.body.push('\n');
    }

    pub fn polyline(&mut self, points: &[Point], color: Rgba8, width: f64) {
        if points.len() < 2 {
            return;
        }
        let pts = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.body.push_str(&format!(
            r#"<polyline points="{pts}" fill="none" {} stroke-width="{width:.2}" stroke-linejoin="round"/>"#,
            paint("stroke", color),
        ));
        self.body.push('\n');
    }

    pub fn text(&mut self, at: Point, text: &str, style: &TextStyle) {
        let transform = if style.rotate_deg != 0.0 {
            format!(
                r#" transform="rotate({:.2} {:.2} {:.2})""#,
                style.rotate_deg, at.x, at.y
            )
        } else {
            String::new()
        };
        self.body.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-family="{FONT_FAMILY}" font-size="{:.2}"{} text-anchor="{}" dominant-baseline="central" {}{transform}>{}</text>"#,
            at.x,
            at.y,
            style.size,
            if style.bold { r#" font-weight="bold""# } else { "" },
            style.anchor.as_str(),
            paint("fill", style.color),
            escape_xml(text),
        ));
        self.body.push('\n');
    }

    pub fn finish(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{}</svg>\n",
            self.body,
            w = self.width,
            h = self.height,
        )
    }

    /// Rasterize the document and write it as a straight-alpha PNG.
    pub fn save_png(&self, path: &Path, fontdb: &Arc<usvg::fontdb::Database>) -> ReelResult<()> {
        let tree = parse_svg(&self.finish(), fontdb)?;
        let mut rgba = rasterize_svg_to_premul_rgba8(&tree, self.width, self.height)?;
        unpremultiply_rgba8(&mut rgba);

        ensure_parent_dir(path)?;
        image::save_buffer_with_format(
            path,
            &rgba,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write chart '{}'", path.display()))?;
        tracing::info!(path = %path.display(), width = self.width, height = self.height, "wrote chart");
        Ok(())
    }
}

fn paint(attr: &str, c: Rgba8) -> String {
    if c.a == 255 {
        format!(r#"{attr}="{}""#, c.to_hex())
    } else {
        format!(
            r#"{attr}="{}" {attr}-opacity="{:.3}""#,
            c.to_hex(),
            f64::from(c.a) / 255.0
        )
    }
}

/// Data-space window drawn into a pixel rectangle.
#[derive(Clone, Copy, Debug)]
pub struct PlotArea {
    pub frame: Rect,
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl PlotArea {
    pub fn new(frame: Rect, x: (f64, f64), y: (f64, f64)) -> ReelResult<Self> {
        if !(x.1 > x.0) || !(y.1 > y.0) {
            return Err(ReelError::validation(format!(
                "plot ranges must be increasing, got x {x:?} y {y:?}"
            )));
        }
        Ok(Self { frame, x, y })
    }

    pub fn map(&self, x: f64, y: f64) -> Point {
        let tx = (x - self.x.0) / (self.x.1 - self.x.0);
        let ty = (y - self.y.0) / (self.y.1 - self.y.0);
        Point::new(
            self.frame.x0 + tx * self.frame.width(),
            self.frame.y1 - ty * self.frame.height(),
        )
    }

    /// Left/bottom spines, tick marks with labels, optional horizontal grid, axis labels, title.
    pub fn draw_axes(&self, doc: &mut SvgDoc, axes: &AxesStyle<'_>) {
        let grey = Rgba8::opaque(0x80, 0x80, 0x80);
        let tick_text = TextStyle::new(axes.tick_size);

        for y in nice_ticks(self.y.0, self.y.1, 6) {
            let p = self.map(self.x.0, y);
            if axes.grid_y {
                let q = self.map(self.x.1, y);
                doc.line(p, q, grey.with_alpha(77), 1.0);
            }
            doc.line(p, Point::new(p.x - 5.0, p.y), Rgba8::BLACK, 1.0);
            doc.text(
                Point::new(p.x - 8.0, p.y),
                &format_tick(y),
                &tick_text.clone().anchor(Anchor::End),
            );
        }
        for x in nice_ticks(self.x.0, self.x.1, 8) {
            let p = self.map(x, self.y.0);
            doc.line(p, Point::new(p.x, p.y + 5.0), Rgba8::BLACK, 1.0);
            doc.text(
                Point::new(p.x, p.y + 8.0 + axes.tick_size * 0.6),
                &format_tick(x),
                &tick_text,
            );
        }

        let f = self.frame;
        doc.line(Point::new(f.x0, f.y1), Point::new(f.x1, f.y1), Rgba8::BLACK, axes.spine_width);
        doc.line(Point::new(f.x0, f.y0), Point::new(f.x0, f.y1), Rgba8::BLACK, axes.spine_width);
        if axes.full_box {
            doc.line(Point::new(f.x0, f.y0), Point::new(f.x1, f.y0), Rgba8::BLACK, axes.spine_width);
            doc.line(Point::new(f.x1, f.y0), Point::new(f.x1, f.y1), Rgba8::BLACK, axes.spine_width);
        }

        let label = TextStyle::new(axes.label_size);
        doc.text(
            Point::new(f.center().x, f.y1 + axes.tick_size * 2.0 + axes.label_size),
            axes.x_label,
            &label,
        );
        doc.text(
            Point::new(f.x0 - axes.tick_size * 3.0 - axes.label_size, f.center().y),
            axes.y_label,
            &label.clone().rotated(-90.0),
        );
        let mut title = TextStyle::new(axes.title_size);
        if axes.bold_title {
            title = title.bold();
        }
        doc.text(
            Point::new(f.center().x, f.y0 - axes.title_size),
            axes.title,
            &title,
        );
    }
}

#[derive(Clone, Debug)]
pub struct AxesStyle<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub tick_size: f64,
    pub label_size: f64,
    pub title_size: f64,
    pub bold_title: bool,
    pub grid_y: bool,
    pub full_box: bool,
    pub spine_width: f64,
}

impl<'a> AxesStyle<'a> {
    pub fn new(title: &'a str, x_label: &'a str, y_label: &'a str) -> Self {
        Self {
            title,
            x_label,
            y_label,
            tick_size: 16.0,
            label_size: 22.0,
            title_size: 26.0,
            bold_title: false,
            grid_y: false,
            full_box: false,
            spine_width: 1.5,
        }
    }
}

/// Round tick positions (steps of 1, 2, 5 x 10^k) inside `[lo, hi]`, at most about `max_ticks`.
pub fn nice_ticks(lo: f64, hi: f64, max_ticks: usize) -> Vec<f64> {
    if !(hi > lo) || !lo.is_finite() || !hi.is_finite() || max_ticks == 0 {
        return Vec::new();
    }
    let raw = (hi - lo) / max_ticks as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * mag);

    let first = (lo / step).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').to_owned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/svg.rs"]
mod tests;

use std::{collections::HashMap, sync::Arc};

use crate::{
    foundation::core::Rgba8,
    foundation::error::ReelResult,
    render::svg::{escape_xml, parse_svg, rasterize_svg_to_premul_rgba8},
};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct LabelKey {
    text: String,
    size_centi_px: u32,
    color: Rgba8,
}

/// Rasterized text label, centred in its bitmap.
#[derive(Clone)]
pub struct LabelImage {
    pub image: vello_cpu::Image,
    pub width: u32,
    pub height: u32,
}

/// Renders single-line labels through SVG `<text>` and caches the bitmaps.
pub struct LabelRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
    cache: HashMap<LabelKey, LabelImage>,
}

impl LabelRasterizer {
    pub fn new(fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self {
            fontdb,
            cache: HashMap::new(),
        }
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub fn rasterize(&mut self, text: &str, size_px: f64, color: Rgba8) -> ReelResult<LabelImage> {
        let key = LabelKey {
            text: text.to_owned(),
            size_centi_px: (size_px * 100.0).round().max(1.0) as u32,
            color,
        };
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit.clone());
        }

        let (width, height) = label_box(text, size_px);
        let svg = label_svg(text, size_px, color, width, height);
        let tree = parse_svg(&svg, &self.fontdb)?;
        let premul = rasterize_svg_to_premul_rgba8(&tree, width, height)?;
        let pixmap = crate::render::cpu::image_premul_bytes_to_pixmap(&premul, width, height)?;

        let label = LabelImage {
            image: vello_cpu::Image {
                image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                sampler: vello_cpu::peniko::ImageSampler::default(),
            },
            width,
            height,
        };
        self.cache.insert(key, label.clone());
        Ok(label)
    }
}

// Generous bitmap: average glyph advance is well under 0.65 em for sans-serif faces.
fn label_box(text: &str, size_px: f64) -> (u32, u32) {
    let chars = text.chars().count().max(1) as f64;
    let w = (size_px * (0.65 * chars + 1.0)).ceil().max(1.0) as u32;
    let h = (size_px * 1.6).ceil().max(1.0) as u32;
    (w, h)
}

fn label_svg(text: &str, size_px: f64, color: Rgba8, width: u32, height: u32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><text x="{cx}" y="{cy}" font-family="sans-serif" font-size="{size_px}" fill="{fill}" fill-opacity="{alpha}" text-anchor="middle" dominant-baseline="central">{body}</text></svg>"#,
        cx = f64::from(width) / 2.0,
        cy = f64::from(height) / 2.0,
        fill = color.to_hex(),
        alpha = f64::from(color.a) / 255.0,
        body = escape_xml(text),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/label.rs"]
mod tests;

use std::{path::Path, sync::Arc};

use crate::{
    analysis::histogram::{Histogram, SampleSummary, measurement_edges},
    chart::svg::{AxesStyle, PlotArea, SvgDoc},
    foundation::core::{Rect, Rgba8},
    foundation::error::{ReelError, ReelResult},
};

pub const BAR_COLOR: Rgba8 = Rgba8::opaque(0xAF, 0xCB, 0xCF);
pub const BIN_WIDTHS: [f64; 3] = [1.0, 2.0, 5.0];

const PANEL_WIDTH: f64 = 800.0;
const HEIGHT: u32 = 750;

/// Histograms of `heights` side by side, one panel per bin width.
pub fn height_histogram_chart(heights: &[i64], bin_widths: &[f64]) -> ReelResult<SvgDoc> {
    let summary = SampleSummary::of_ints(heights)
        .ok_or_else(|| ReelError::data("height histogram needs at least one measurement"))?;
    if bin_widths.is_empty() {
        return Err(ReelError::validation("height histogram needs a bin width"));
    }

    let samples: Vec<f64> = heights.iter().map(|&h| h as f64).collect();
    let width = (PANEL_WIDTH * bin_widths.len() as f64) as u32;
    let mut doc = SvgDoc::new(width, HEIGHT, Rgba8::WHITE);

    for (i, &bin_width) in bin_widths.iter().enumerate() {
        let edges = measurement_edges(summary.min, summary.max, bin_width)?;
        let hist = Histogram::new(&samples, edges)?;
        let x0 = PANEL_WIDTH * i as f64;
        draw_panel(
            &mut doc,
            Rect::new(x0 + 110.0, 80.0, x0 + PANEL_WIDTH - 30.0, f64::from(HEIGHT) - 100.0),
            &hist,
            bin_width,
        )?;
    }
    Ok(doc)
}

#[tracing::instrument(skip(heights, fontdb), fields(samples = heights.len()))]
pub fn write_height_histogram(
    heights: &[i64],
    path: &Path,
    fontdb: &Arc<usvg::fontdb::Database>,
) -> ReelResult<()> {
    if let Some(s) = SampleSummary::of_ints(heights) {
        tracing::info!(
            count = s.count,
            min = s.min,
            max = s.max,
            mean = format_args!("{:.2}", s.mean),
            std = format_args!("{:.2}", s.std),
            skew = ?s.skew,
            "height sample summary"
        );
    }
    height_histogram_chart(heights, &BIN_WIDTHS)?.save_png(path, fontdb)
}

fn draw_panel(doc: &mut SvgDoc, frame: Rect, hist: &Histogram, bin_width: f64) -> ReelResult<()> {
    let (lo, hi) = match (hist.edges.first(), hist.edges.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => return Err(ReelError::validation("histogram has no edges")),
    };
    let area = PlotArea::new(frame, (lo, hi), (0.0, hist.max_count().max(1) as f64 * 1.05))?;

    let title = format!("Bin Width: {bin_width} cm");
    let mut axes = AxesStyle::new(&title, "Height (cm)", "Number of Occurrences");
    axes.grid_y = true;
    area.draw_axes(doc, &axes);

    for (w, &count) in hist.edges.windows(2).zip(&hist.counts) {
        if count == 0 {
            continue;
        }
        doc.rect(
            Rect::from_points(area.map(w[0], count as f64), area.map(w[1], 0.0)),
            BAR_COLOR.with_alpha(179),
            Some((Rgba8::BLACK, 1.0)),
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/chart/heights.rs"]
mod tests;

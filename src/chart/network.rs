use std::{path::Path, sync::Arc};

use crate::{
    chart::svg::{AxesStyle, PlotArea, SvgDoc, TextStyle},
    data::graph::{Graph, degree_distribution},
    foundation::core::{Point, Rect, Rgba8},
    foundation::error::{ReelError, ReelResult},
};

pub const NODE_COLOR: Rgba8 = Rgba8::opaque(0xE7, 0x9E, 0x16);

const WIDTH: u32 = 2160;
const HEIGHT: u32 = 1080;

/// Two panels: the laid-out network on the left, its degree distribution on the right.
///
/// `positions` are layout coordinates (any scale); the left panel keeps their aspect ratio.
pub fn network_chart(graph: &Graph, positions: &[Point]) -> ReelResult<SvgDoc> {
    if positions.len() != graph.node_count() {
        return Err(ReelError::validation(format!(
            "network chart needs one position per node ({} positions, {} nodes)",
            positions.len(),
            graph.node_count()
        )));
    }

    let mut doc = SvgDoc::new(WIDTH, HEIGHT, Rgba8::WHITE);
    draw_network(&mut doc, graph, positions)?;
    draw_degree_bars(&mut doc, graph)?;
    Ok(doc)
}

#[tracing::instrument(skip(graph, positions, fontdb), fields(nodes = graph.node_count()))]
pub fn write_network_chart(
    graph: &Graph,
    positions: &[Point],
    path: &Path,
    fontdb: &Arc<usvg::fontdb::Database>,
) -> ReelResult<()> {
    network_chart(graph, positions)?.save_png(path, fontdb)
}

fn draw_network(doc: &mut SvgDoc, graph: &Graph, positions: &[Point]) -> ReelResult<()> {
    let extent = positions
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0f64, f64::max)
        .max(1e-6)
        * 1.1;
    let area = PlotArea::new(
        Rect::new(130.0, 90.0, 1030.0, 990.0),
        (-extent, extent),
        (-extent, extent),
    )?;

    let mut axes = AxesStyle::new("Barabási-Albert Network", "X", "Y");
    axes.bold_title = true;
    area.draw_axes(doc, &axes);

    let zero = Rgba8::opaque(0x80, 0x80, 0x80).with_alpha(128);
    doc.line(area.map(-extent, 0.0), area.map(extent, 0.0), zero, 1.0);
    doc.line(area.map(0.0, -extent), area.map(0.0, extent), zero, 1.0);

    for (a, b) in graph.edges() {
        let pa = positions[a];
        let pb = positions[b];
        doc.line(
            area.map(pa.x, pa.y),
            area.map(pb.x, pb.y),
            Rgba8::BLACK.with_alpha(77),
            1.5,
        );
    }

    let label = TextStyle::new(13.0);
    for (id, p) in positions.iter().enumerate() {
        let at = area.map(p.x, p.y);
        doc.circle(at, 14.0, NODE_COLOR);
        doc.text(at, &id.to_string(), &label);
    }
    Ok(())
}

fn draw_degree_bars(doc: &mut SvgDoc, graph: &Graph) -> ReelResult<()> {
    let dist = degree_distribution(&graph.degrees());
    let max_degree = dist.last().map_or(1, |&(d, _)| d.max(1));
    let max_count = dist.iter().map(|&(_, c)| c).max().unwrap_or(1).max(1);

    let area = PlotArea::new(
        Rect::new(1250.0, 90.0, 2100.0, 990.0),
        (0.0, max_degree as f64 + 1.0),
        (0.0, max_count as f64 * 1.05),
    )?;

    let mut axes = AxesStyle::new("Degree Distribution", "Degree", "Number of Nodes");
    axes.bold_title = true;
    axes.grid_y = true;
    axes.full_box = true;
    axes.spine_width = 2.0;
    area.draw_axes(doc, &axes);

    for (degree, count) in dist {
        let x = degree as f64;
        let top_left = area.map(x - 0.4, count as f64);
        let bottom_right = area.map(x + 0.4, 0.0);
        doc.rect(
            Rect::from_points(top_left, bottom_right),
            NODE_COLOR.with_alpha(179),
            Some((Rgba8::BLACK, 1.0)),
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/chart/network.rs"]
mod tests;

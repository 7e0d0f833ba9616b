//! Flat CSV tables exchanged between data preparation and rendering.
//!
//! The growth table has one row per node:
//! `node_id,x,y,degree_at_node_0..degree_at_node_{n-1},target_0_x,target_0_y,...`
//! with as many target pairs as the largest degree in the final graph. Unused pairs are left as
//! empty cells. The measurement table is a single `Height` column of integers.

use std::{io::Read, io::Write, path::Path};

use anyhow::Context as _;
use csv::{ReaderBuilder, StringRecord, Trim, Writer};

use crate::{
    data::growth::GrowthHistory,
    foundation::core::Point,
    foundation::error::{ReelError, ReelResult},
};

pub const MEASUREMENT_HEADER: &str = "Height";

#[derive(Clone, Debug, PartialEq)]
pub struct GrowthRow {
    pub node_id: usize,
    pub position: Point,
    pub degrees: Vec<usize>,
    /// Display coordinates of the lower-indexed nodes this row's node connected to.
    pub targets: Vec<Point>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GrowthTable {
    pub rows: Vec<GrowthRow>,
    /// Number of `target_i_x,target_i_y` column pairs in the header.
    pub target_pairs: usize,
}

impl GrowthTable {
    pub fn from_history(history: &GrowthHistory) -> Self {
        let rows = history
            .steps
            .iter()
            .enumerate()
            .map(|(i, s)| GrowthRow {
                node_id: s.node,
                position: s.position,
                degrees: s.degrees.clone(),
                targets: history.target_positions(i),
            })
            .collect();
        Self {
            rows,
            target_pairs: history.max_degree(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> Vec<String> {
        let mut cols: Vec<String> = ["node_id", "x", "y"].map(String::from).into();
        cols.extend((0..self.rows.len()).map(|i| format!("degree_at_node_{i}")));
        for i in 0..self.target_pairs {
            cols.push(format!("target_{i}_x"));
            cols.push(format!("target_{i}_y"));
        }
        cols
    }

    pub fn header(&self) -> String {
        self.columns().join(",")
    }

    pub fn write_csv(&self, path: &Path) -> ReelResult<()> {
        crate::encode::sink::ensure_parent_dir(path)?;
        let f = std::fs::File::create(path)
            .with_context(|| format!("create growth table '{}'", path.display()))?;
        self.write_to(std::io::BufWriter::new(f))?;
        tracing::info!(rows = self.rows.len(), path = %path.display(), "wrote growth table");
        Ok(())
    }

    pub fn write_to(&self, w: impl Write) -> ReelResult<()> {
        let mut wtr = Writer::from_writer(w);
        wtr.write_record(self.columns())
            .context("write growth table header")?;

        for row in &self.rows {
            let mut record = vec![
                row.node_id.to_string(),
                row.position.x.to_string(),
                row.position.y.to_string(),
            ];
            record.extend(row.degrees.iter().map(usize::to_string));
            for i in 0..self.target_pairs {
                match row.targets.get(i) {
                    Some(t) => record.extend([t.x.to_string(), t.y.to_string()]),
                    None => record.extend([String::new(), String::new()]),
                }
            }
            wtr.write_record(&record)
                .with_context(|| format!("write growth table row {}", row.node_id))?;
        }
        wtr.flush().context("flush growth table")?;
        Ok(())
    }

    pub fn read_csv(path: &Path) -> ReelResult<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("open growth table '{}'", path.display()))?;
        Self::read_from(std::io::BufReader::new(f))
    }

    /// Parse a growth table.
    ///
    /// `node_id`, `x`, `y` and every degree cell are required. Target pairs are read left to
    /// right and reading stops at the first missing, empty or malformed cell.
    pub fn read_from(r: impl Read) -> ReelResult<Self> {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(r);
        let columns = rdr
            .headers()
            .context("read growth table header")?
            .clone();
        if columns.is_empty() || (columns.len() == 1 && columns[0].is_empty()) {
            return Err(ReelError::data("growth table is empty"));
        }
        if columns.len() < 3 || columns.iter().take(3).ne(["node_id", "x", "y"]) {
            return Err(ReelError::data(
                "growth table header must start with node_id,x,y",
            ));
        }
        let degree_cols = columns
            .iter()
            .skip(3)
            .take_while(|c| c.starts_with("degree_at_node_"))
            .count();
        let target_pairs = (columns.len() - 3 - degree_cols) / 2;

        let mut rows = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record.context("read growth table row")?;
            if is_blank(&record) {
                continue;
            }
            let row_no = record.position().map_or(i as u64 + 2, |p| p.line());

            let node_id = parse_required::<usize>(&record, 0, "node_id", row_no)?;
            let x = parse_required::<f64>(&record, 1, "x", row_no)?;
            let y = parse_required::<f64>(&record, 2, "y", row_no)?;
            let degrees = (0..degree_cols)
                .map(|d| parse_required::<usize>(&record, 3 + d, &columns[3 + d], row_no))
                .collect::<ReelResult<Vec<_>>>()?;

            let first_target = 3 + degree_cols;
            let mut targets = Vec::new();
            for t in 0..target_pairs {
                let tx = parse_optional(&record, first_target + 2 * t);
                let ty = parse_optional(&record, first_target + 2 * t + 1);
                match (tx, ty) {
                    (Some(tx), Some(ty)) => targets.push(Point::new(tx, ty)),
                    _ => break,
                }
            }

            rows.push(GrowthRow {
                node_id,
                position: Point::new(x, y),
                degrees,
                targets,
            });
        }

        tracing::debug!(rows = rows.len(), target_pairs, "read growth table");
        Ok(Self { rows, target_pairs })
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn parse_required<T: std::str::FromStr>(
    record: &StringRecord,
    idx: usize,
    column: &str,
    row_no: u64,
) -> ReelResult<T> {
    let cell = record
        .get(idx)
        .ok_or_else(|| ReelError::data(format!("row {row_no}: missing '{column}' cell")))?;
    cell.parse::<T>().map_err(|_| {
        ReelError::data(format!(
            "row {row_no}: malformed '{column}' value '{cell}'"
        ))
    })
}

fn parse_optional(record: &StringRecord, idx: usize) -> Option<f64> {
    let cell = record.get(idx)?;
    if cell.is_empty() || cell == "None" {
        return None;
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn write_measurements(path: &Path, values: &[i64]) -> ReelResult<()> {
    crate::encode::sink::ensure_parent_dir(path)?;
    let mut wtr = Writer::from_path(path)
        .with_context(|| format!("create measurements '{}'", path.display()))?;
    wtr.write_record([MEASUREMENT_HEADER])
        .context("write measurement header")?;
    for v in values {
        wtr.write_record([v.to_string()])
            .with_context(|| format!("write measurements '{}'", path.display()))?;
    }
    wtr.flush()
        .with_context(|| format!("write measurements '{}'", path.display()))?;
    tracing::info!(count = values.len(), path = %path.display(), "wrote measurements");
    Ok(())
}

pub fn read_measurements(path: &Path) -> ReelResult<Vec<i64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read measurements '{}'", path.display()))?;
    parse_measurements(&text)
}

pub fn parse_measurements(text: &str) -> ReelResult<Vec<i64>> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let header = rdr.headers().context("read measurement header")?;
    match header.get(0) {
        Some(MEASUREMENT_HEADER) => {}
        None | Some("") => return Err(ReelError::data("measurement file is empty")),
        Some(other) => {
            return Err(ReelError::data(format!(
                "measurement header must be '{MEASUREMENT_HEADER}', got '{other}'"
            )));
        }
    }

    let mut values = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.context("read measurement row")?;
        if is_blank(&record) {
            continue;
        }
        let row_no = record.position().map_or(i as u64 + 2, |p| p.line());
        values.push(parse_required::<i64>(&record, 0, MEASUREMENT_HEADER, row_no)?);
    }
    Ok(values)
}

#[cfg(test)]
#[path = "../../tests/unit/data/table.rs"]
mod tests;

#![forbid(unsafe_code)]

use crate::{Error, write_atomic};
use kernel::degradation::PredictedObservation;
use std::path::Path;
use tracing::debug;

/// Separates pages of the rendered report.
pub const PAGE_BREAK: char = '\u{c}';

/// Plain-text run report: the head of the results table, one line per row,
/// split into pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReport {
    title: String,
    max_rows: usize,
    rows_per_page: usize,
    precision: usize,
}

impl TextReport {
    pub fn new(config: &config::Report) -> Self {
        Self {
            title: config.title.clone(),
            max_rows: config.max_rows,
            rows_per_page: config.rows_per_page.max(1),
            precision: config.precision,
        }
    }

    pub fn render(&self, rows: &[PredictedObservation]) -> String {
        let shown = &rows[..rows.len().min(self.max_rows)];
        let pages: Vec<&[PredictedObservation]> = if shown.is_empty() {
            vec![shown]
        } else {
            shown.chunks(self.rows_per_page).collect()
        };
        let page_count = pages.len();

        let mut out = String::new();
        let mut first_row = 1;
        for (page_ix, page) in pages.into_iter().enumerate() {
            if page_ix > 0 {
                out.push(PAGE_BREAK);
            }
            out.push_str(&self.title);
            out.push('\n');
            out.push_str(&"=".repeat(self.title.chars().count()));
            out.push('\n');
            if page.is_empty() {
                out.push_str("\nNo rows.\n");
            } else {
                let last_row = first_row + page.len() - 1;
                out.push_str(&format!("Rows {first_row}-{last_row} of {}\n\n", rows.len()));
                for row in page {
                    out.push_str(&self.line(row));
                    out.push('\n');
                }
                first_row = last_row + 1;
            }
            out.push_str(&format!("\nPage {} of {page_count}\n", page_ix + 1));
        }
        out
    }

    pub fn write_to(
        &self,
        path: impl AsRef<Path>,
        rows: &[PredictedObservation],
    ) -> Result<(), Error> {
        let path = path.as_ref();
        let rendered = self.render(rows);
        write_atomic(path, rendered.as_bytes())?;
        debug!(path = %path.display(), rows = rows.len().min(self.max_rows), "report written");
        Ok(())
    }

    fn line(&self, row: &PredictedObservation) -> String {
        let precision = self.precision;
        format!(
            "Cycle {} | Capacity: {:.precision$} | Risk: {:.precision$}",
            row.cycle, row.predicted_capacity, row.risk_score
        )
    }
}

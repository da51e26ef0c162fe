//! Per-season filler report
//!
//! Collects `(season, instruction, total)` rows from a [`Show`] and renders
//! them as a plain console table or a GitHub-flavoured markdown table,
//! optionally headed by the show's title.

use serde::Serialize;

use crate::show::Show;

const HEADERS: [&str; 3] = ["Season", "Filler", "Total"];

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// 1-based season number
    pub season: usize,
    /// Rendered filler instruction
    pub filler: String,
    /// Episodes in the season
    pub total: usize,
}

/// Filler report for a whole show, one row per season
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Show title printed above the table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Rows in season order
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Build the report for every season of `show`.
    pub fn from_show(show: &Show) -> Self {
        let rows = show
            .seasons()
            .iter()
            .map(|season| ReportRow {
                season: season.number(),
                filler: season.instruction().to_string(),
                total: season.len(),
            })
            .collect();
        Self { title: None, rows }
    }

    /// Head the report with `title`. A blank title is ignored.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        let title = title.trim();
        self.title = (!title.is_empty()).then(|| title.to_string());
        self
    }

    fn with_heading(&self, heading: impl FnOnce(&str) -> String, table: Vec<String>) -> String {
        let mut lines = Vec::with_capacity(table.len() + 2);
        if let Some(title) = &self.title {
            lines.push(heading(title));
            lines.push(String::new());
        }
        lines.extend(table);
        lines.join("\n")
    }

    fn cells(&self) -> Vec<[String; 3]> {
        self.rows
            .iter()
            .map(|row| [row.season.to_string(), row.filler.clone(), row.total.to_string()])
            .collect()
    }

    fn widths(cells: &[[String; 3]]) -> [usize; 3] {
        let mut widths = HEADERS.map(str::len);
        for row in cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Plain text table, every column right-aligned, below the title if set.
    pub fn to_console(&self) -> String {
        let cells = self.cells();
        let [w0, w1, w2] = Self::widths(&cells);

        let mut lines = vec![format!(
            "{:>w0$}  {:>w1$}  {:>w2$}",
            HEADERS[0], HEADERS[1], HEADERS[2]
        )];
        for [season, filler, total] in &cells {
            lines.push(format!("{season:>w0$}  {filler:>w1$}  {total:>w2$}"));
        }
        self.with_heading(str::to_string, lines)
    }

    /// GitHub markdown table; season left-aligned, the rest right-aligned.
    ///
    /// A title becomes a `##` heading above the table.
    pub fn to_markdown(&self) -> String {
        let cells = self.cells();
        let [w0, w1, w2] = Self::widths(&cells);

        let mut lines = vec![
            format!(
                "| {:<w0$} | {:>w1$} | {:>w2$} |",
                HEADERS[0], HEADERS[1], HEADERS[2]
            ),
            format!(
                "|:{}|{}:|{}:|",
                "-".repeat(w0 + 1),
                "-".repeat(w1 + 1),
                "-".repeat(w2 + 1)
            ),
        ];
        for [season, filler, total] in &cells {
            lines.push(format!("| {season:<w0$} | {filler:>w1$} | {total:>w2$} |"));
        }
        self.with_heading(|title| format!("## {title}"), lines)
    }
}

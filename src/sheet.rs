//! Worksheet layout for normalized reports.
//!
//! A spreadsheet client writes each report as one rectangular block: the
//! header row followed by the data rows, anchored at `A1`. Ragged rows are
//! padded with empty cells so the block is rectangular.

use crate::{
    refresh::RefreshResponse,
    reports::{CellValue, NormalizedReport},
};

/// A block of values destined for one worksheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetWrite {
    pub name: String,
    pub values: Vec<Vec<CellValue>>,
}

impl SheetWrite {
    #[must_use]
    pub fn new(name: impl Into<String>, report: &NormalizedReport) -> Self {
        let width = report
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(report.headers.len()))
            .max()
            .unwrap_or(0);

        let values = if width == 0 {
            Vec::new()
        } else {
            let header = report.headers.iter().map(|h| CellValue::from(h.as_str()));
            std::iter::once(padded(header, width))
                .chain(report.rows.iter().map(|row| padded(row.iter().cloned(), width)))
                .collect()
        };

        Self {
            name: name.into(),
            values,
        }
    }

    /// One layout per report present in `response`, named after its sheet
    #[must_use]
    pub fn for_response(response: &RefreshResponse) -> Vec<Self> {
        response
            .iter()
            .map(|(kind, report)| Self::new(kind.sheet_name(), report))
            .collect()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn col_count(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// A1 style address of the block, `None` when there is nothing to write
    #[must_use]
    pub fn range_address(&self) -> Option<String> {
        if self.col_count() == 0 {
            return None;
        }
        Some(format!(
            "A1:{}{}",
            column_letters(self.col_count()),
            self.row_count()
        ))
    }
}

fn padded(cells: impl Iterator<Item = CellValue>, width: usize) -> Vec<CellValue> {
    let mut row: Vec<CellValue> = cells.collect();
    row.resize(width, CellValue::empty());
    row
}

/// Spreadsheet column name for a 1-based column number (1 -> A, 27 -> AA)
#[must_use]
pub fn column_letters(mut column: usize) -> String {
    let mut letters = Vec::new();
    while column > 0 {
        #[allow(clippy::cast_possible_truncation)]
        let rem = ((column - 1) % 26) as u8;
        letters.push(b'A' + rem);
        column = (column - 1) / 26;
    }
    letters.iter().rev().map(|b| char::from(*b)).collect()
}

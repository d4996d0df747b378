//! Flattening of QuickBooks report payloads into `{headers, rows}` tables.
//!
//! The reports endpoint returns a loosely shaped tree: `Rows.Row` and
//! `Group.Row` may each be a single object or an array, and any level may be
//! missing. Everything here reads that tree with get-or-default access and
//! never fails; unexpected shapes simply produce less output.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A single spreadsheet cell, either text or a number.
///
/// Serialized untagged so the JSON form is a bare `"Income"` or `1000`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(Number),
    Text(String),
}

impl CellValue {
    #[must_use]
    pub fn empty() -> Self {
        CellValue::Text(String::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.is_empty())
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value.into())
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// Flat tabular form of a report, ready to be written into cells.
///
/// Rows are not required to have the same length as `headers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedReport {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl NormalizedReport {
    /// Normalizes a raw report tree, see [`normalize`].
    #[must_use]
    pub fn from_raw(report: &Value) -> Self {
        normalize(Some(report))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// Treats `value` as a sequence.
///
/// Arrays pass through, null or absent becomes empty, and anything else is
/// viewed as a one element sequence.
#[must_use]
pub fn as_sequence(value: Option<&Value>) -> &[Value] {
    match value {
        None | Some(Value::Null) => &[],
        Some(Value::Array(items)) => items.as_slice(),
        Some(single) => std::slice::from_ref(single),
    }
}

/// Flattens a QuickBooks report into headers and rows.
///
/// Headers come from `Columns.Column[].ColTitle`. Rows come from
/// `Rows.Row[].ColData[].value`, with each row's `Group.Row` children emitted
/// right after it. Only one level of grouping is followed, and a row without
/// `ColData` contributes nothing itself while its children are still emitted.
#[must_use]
pub fn normalize(report: Option<&Value>) -> NormalizedReport {
    let Some(report) = report else {
        return NormalizedReport::default();
    };

    let headers = match report.pointer("/Columns/Column") {
        Some(Value::Array(columns)) => columns
            .iter()
            .map(|column| title_text(column.get("ColTitle")))
            .collect(),
        _ => Vec::new(),
    };

    let mut rows = Vec::new();
    for row in as_sequence(report.pointer("/Rows/Row")) {
        push_row(&mut rows, row);
        for sub in as_sequence(row.pointer("/Group/Row")) {
            push_row(&mut rows, sub);
        }
    }

    log::debug!(
        "Normalized report with {} column(s) and {} row(s)",
        headers.len(),
        rows.len()
    );

    NormalizedReport { headers, rows }
}

fn push_row(rows: &mut Vec<Vec<CellValue>>, row: &Value) {
    if let Some(Value::Array(cells)) = row.get("ColData") {
        rows.push(cells.iter().map(|cell| cell_value(cell.get("value"))).collect());
    }
}

fn title_text(title: Option<&Value>) -> String {
    match title {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn cell_value(value: Option<&Value>) -> CellValue {
    match value {
        Some(Value::String(s)) => CellValue::Text(s.clone()),
        Some(Value::Number(n)) => CellValue::Number(n.clone()),
        Some(Value::Bool(b)) => CellValue::Text(b.to_string()),
        _ => CellValue::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn texts(row: &[&str]) -> Vec<CellValue> {
        row.iter().map(|s| CellValue::from(*s)).collect()
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(normalize(None), NormalizedReport::default());
        assert_eq!(normalize(Some(&Value::Null)), NormalizedReport::default());
        assert_eq!(normalize(Some(&json!({}))), NormalizedReport::default());
        assert_eq!(normalize(Some(&json!("report"))), NormalizedReport::default());
        assert_eq!(normalize(Some(&json!([1, 2]))), NormalizedReport::default());
    }

    #[test]
    fn test_headers_without_rows() {
        let report = json!({
            "Columns": { "Column": [{ "ColTitle": "A" }, { "ColTitle": "B" }] }
        });
        let out = normalize(Some(&report));
        assert_eq!(out.headers, vec!["A", "B"]);
        assert!(out.rows.is_empty());
    }

    #[test]
    fn test_missing_and_empty_titles_keep_position() {
        let report = json!({
            "Columns": { "Column": [{ "ColTitle": "" }, {}, null, { "ColTitle": "Total" }] }
        });
        let out = normalize(Some(&report));
        assert_eq!(out.headers, vec!["", "", "", "Total"]);
    }

    #[test]
    fn test_single_row_object() {
        let report = json!({
            "Columns": { "Column": [{ "ColTitle": "X" }] },
            "Rows": { "Row": { "ColData": [{ "value": "Only" }] } }
        });
        assert_eq!(normalize(Some(&report)).rows, vec![texts(&["Only"])]);
    }

    #[test]
    fn test_group_rows_follow_parent() {
        let report = json!({
            "Rows": { "Row": [
                {
                    "ColData": [{ "value": "Header" }],
                    "Group": { "Row": [{ "ColData": [{ "value": "Sub1" }] }] }
                },
                { "ColData": [{ "value": "Next" }] }
            ] }
        });
        assert_eq!(
            normalize(Some(&report)).rows,
            vec![texts(&["Header"]), texts(&["Sub1"]), texts(&["Next"])]
        );
    }

    #[test]
    fn test_single_group_row_object() {
        let report = json!({
            "Rows": { "Row": [{
                "ColData": [{ "value": "Parent" }],
                "Group": { "Row": { "ColData": [{ "value": "Child" }] } }
            }] }
        });
        assert_eq!(
            normalize(Some(&report)).rows,
            vec![texts(&["Parent"]), texts(&["Child"])]
        );
    }

    #[test]
    fn test_parent_without_coldata_is_dropped() {
        let report = json!({
            "Rows": { "Row": [{
                "Group": { "Row": [
                    { "ColData": [{ "value": "Kept1" }] },
                    { "ColData": [{ "value": "Kept2" }] }
                ] }
            }] }
        });
        assert_eq!(
            normalize(Some(&report)).rows,
            vec![texts(&["Kept1"]), texts(&["Kept2"])]
        );
    }

    #[test]
    fn test_only_one_level_of_grouping() {
        let report = json!({
            "Rows": { "Row": [{
                "ColData": [{ "value": "Top" }],
                "Group": { "Row": [{
                    "ColData": [{ "value": "Mid" }],
                    "Group": { "Row": [{ "ColData": [{ "value": "Deep" }] }] }
                }] }
            }] }
        });
        assert_eq!(
            normalize(Some(&report)).rows,
            vec![texts(&["Top"]), texts(&["Mid"])]
        );
    }

    #[test]
    fn test_missing_values_become_empty() {
        let report = json!({
            "Rows": { "Row": [{ "ColData": [{ "value": "A" }, {}, { "value": null }, null] }] }
        });
        let out = normalize(Some(&report));
        assert_eq!(out.rows.len(), 1);
        assert_eq!(out.rows[0].len(), 4);
        assert_eq!(out.rows[0], texts(&["A", "", "", ""]));
    }

    #[test]
    fn test_zero_is_preserved() {
        let report = json!({
            "Rows": { "Row": [{ "ColData": [{ "value": 0 }, { "value": 0.5 }] }] }
        });
        let out = normalize(Some(&report));
        assert_eq!(
            out.rows[0],
            vec![CellValue::from(0_i64), CellValue::Number(Number::from_f64(0.5).unwrap())]
        );
        assert!(!out.rows[0][0].is_empty());
    }

    #[test]
    fn test_malformed_levels_degrade() {
        let report = json!({
            "Columns": { "Column": { "ColTitle": "not an array" } },
            "Rows": { "Row": [
                { "ColData": "nope" },
                "stray",
                { "ColData": [] },
                { "ColData": [{ "value": true }, { "value": { "nested": 1 } }] }
            ] }
        });
        let out = normalize(Some(&report));
        assert!(out.headers.is_empty());
        assert_eq!(out.rows, vec![vec![], texts(&["true", ""])]);
    }

    #[test]
    fn test_as_sequence() {
        let single = json!({ "a": 1 });
        let many = json!([1, 2, 3]);
        assert!(as_sequence(None).is_empty());
        assert!(as_sequence(Some(&Value::Null)).is_empty());
        assert_eq!(as_sequence(Some(&single)), &[single.clone()]);
        assert_eq!(as_sequence(Some(&many)).len(), 3);
    }

    #[test]
    fn test_cells_serialize_bare() {
        let report = NormalizedReport {
            headers: vec!["Name".into(), "Amount".into()],
            rows: vec![vec!["Income".into(), CellValue::from(1000_i64)]],
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({ "headers": ["Name", "Amount"], "rows": [["Income", 1000]] })
        );
    }
}

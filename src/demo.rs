//! Fixed reports for trying a workbook without a `QuickBooks` connection.

use crate::reports::{CellValue, NormalizedReport, ReportKind};

const FULL_YEAR: &str = "Jan 1 - Dec 31, 2025";
const YEAR_END: &str = "As of Dec 31, 2025";

fn table(period: &str, lines: &[(&str, &str)]) -> NormalizedReport {
    NormalizedReport {
        headers: vec![String::new(), period.to_string()],
        rows: lines
            .iter()
            .map(|(label, amount)| vec![CellValue::from(*label), CellValue::from(*amount)])
            .collect(),
    }
}

/// The demo table served in place of `kind`
#[must_use]
pub fn demo_report(kind: ReportKind) -> NormalizedReport {
    match kind {
        ReportKind::ProfitAndLoss => table(
            FULL_YEAR,
            &[
                ("Income", ""),
                ("Gross Profit", "$125,000.00"),
                ("Operating Expenses", ""),
                ("Net Operating Income", "$45,000.00"),
                ("Other Income/Expense", ""),
                ("Net Income", "$42,000.00"),
            ],
        ),
        ReportKind::BalanceSheet => table(
            YEAR_END,
            &[
                ("ASSETS", ""),
                ("Total Assets", "$285,000.00"),
                ("LIABILITIES AND EQUITY", ""),
                ("Total Liabilities", "$80,000.00"),
                ("Total Equity", "$205,000.00"),
                ("Total Liabilities and Equity", "$285,000.00"),
            ],
        ),
        ReportKind::CashFlow => table(
            FULL_YEAR,
            &[
                ("Operating Activities", ""),
                ("Net Cash from Operations", "$38,000.00"),
                ("Investing Activities", ""),
                ("Net Cash from Investing", "-$5,000.00"),
                ("Financing Activities", ""),
                ("Net Cash from Financing", "-$10,000.00"),
                ("Net Change in Cash", "$23,000.00"),
            ],
        ),
    }
}

/// Demo tables for every report kind, in refresh order
#[must_use]
pub fn demo_reports() -> Vec<(ReportKind, NormalizedReport)> {
    ReportKind::ALL
        .iter()
        .map(|kind| (*kind, demo_report(*kind)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(report: &NormalizedReport) -> String {
        report
            .rows
            .iter()
            .flatten()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_demo_headers() {
        assert_eq!(
            demo_report(ReportKind::ProfitAndLoss).headers,
            vec!["", "Jan 1 - Dec 31, 2025"]
        );
        assert_eq!(
            demo_report(ReportKind::BalanceSheet).headers,
            vec!["", "As of Dec 31, 2025"]
        );
        assert_eq!(
            demo_report(ReportKind::CashFlow).headers,
            vec!["", "Jan 1 - Dec 31, 2025"]
        );
    }

    #[test]
    fn test_demo_line_items() {
        let pnl = flat(&demo_report(ReportKind::ProfitAndLoss));
        assert!(pnl.contains("Income") && pnl.contains("Net Income"));

        let bs = flat(&demo_report(ReportKind::BalanceSheet));
        assert!(bs.contains("Total Assets") && bs.contains("Total Liabilities"));

        let cash = flat(&demo_report(ReportKind::CashFlow));
        assert!(cash.contains("Operating") && cash.contains("Net Change in Cash"));
    }

    #[test]
    fn test_demo_reports_cover_every_kind() {
        let reports = demo_reports();
        assert_eq!(reports.len(), ReportKind::ALL.len());
        for (kind, report) in reports {
            assert!(!report.rows.is_empty(), "{kind} demo has no rows");
            assert!(report.rows.iter().all(|row| row.len() == report.headers.len()));
        }
    }
}

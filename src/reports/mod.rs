use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::APIError;

pub mod normalize;
pub mod param;

pub use normalize::{as_sequence, normalize, CellValue, NormalizedReport};
pub use param::{AccountingMethod, ReportParams};

macro_rules! impl_report_kind {
    ($($kind:ident, $url_name:expr, $request_key:expr, $response_key:expr, $sheet:expr, [$($param:tt),* $(,)?];)+) => {
        /// The reports that can be pulled into a workbook.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ReportKind {
            $($kind),+
        }

        impl ReportKind {
            /// Every kind, in the order a refresh fills them.
            pub const ALL: &'static [ReportKind] = &[$(ReportKind::$kind),+];

            /// Name of the report on the `QuickBooks` reports endpoint
            #[must_use]
            pub fn url_name(&self) -> &'static str {
                match self {
                    $(ReportKind::$kind => $url_name),+
                }
            }

            /// Key used to ask for this report in a refresh request
            #[must_use]
            pub fn request_key(&self) -> &'static str {
                match self {
                    $(ReportKind::$kind => $request_key),+
                }
            }

            /// Field holding this report in a refresh response
            #[must_use]
            pub fn response_key(&self) -> &'static str {
                match self {
                    $(ReportKind::$kind => $response_key),+
                }
            }

            /// Worksheet the report is written to
            #[must_use]
            pub fn sheet_name(&self) -> &'static str {
                match self {
                    $(ReportKind::$kind => $sheet),+
                }
            }

            #[must_use]
            pub fn valid_query_params(&self) -> &'static [&'static str] {
                match self {
                    $(ReportKind::$kind => &[$($param),*]),+
                }
            }
        }
    };
}

impl_report_kind!(
  ProfitAndLoss, "ProfitAndLoss", "pnl", "pnl", "QS_PnL", ["customer", "qzurl", "accounting_method", "end_date", "date_macro", "adjusted_gain_loss", "class", "item", "sort_order", "summarize_column_by", "department", "vendor", "start_date"];
  BalanceSheet, "BalanceSheet", "balance_sheet", "bs", "QS_BS", ["customer", "qzurl", "end_date", "accounting_method", "date_macro", "adjusted_gain_loss", "class", "item", "sort_order", "summarize_column_by", "department", "vendor", "start_date"];
  CashFlow, "CashFlow", "cash_flow", "cash", "QS_CashFlow", ["customer", "vendor", "end_date", "date_macro", "class", "item", "sort_order", "summarize_column_by", "department", "start_date", "accounting_method"];
);

impl ReportKind {
    /// Whether `QuickBooks` accepts `param` as a query parameter for this report
    #[must_use]
    pub fn accepts(&self, param: &str) -> bool {
        self.valid_query_params().contains(&param)
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.url_name())
    }
}

impl FromStr for ReportKind {
    type Err = APIError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.request_key() == s)
            .ok_or_else(|| APIError::UnknownReport(s.to_string()))
    }
}

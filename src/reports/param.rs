use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::APIError;

/// A query parameter understood by the `QuickBooks` reports endpoint
pub trait QBReportParam {
    fn name() -> &'static str;
    fn value(&self) -> String;
}

/// Basis the report figures are computed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountingMethod {
    #[default]
    Accrual,
    Cash,
}

impl std::fmt::Display for AccountingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountingMethod::Accrual => f.write_str("Accrual"),
            AccountingMethod::Cash => f.write_str("Cash"),
        }
    }
}

impl FromStr for AccountingMethod {
    type Err = APIError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Accrual" => Ok(AccountingMethod::Accrual),
            "Cash" => Ok(AccountingMethod::Cash),
            other => Err(APIError::BadRequest(format!(
                "Unknown accounting method : {other}"
            ))),
        }
    }
}

impl QBReportParam for AccountingMethod {
    fn name() -> &'static str {
        "accounting_method"
    }
    fn value(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_report_param  {
    ($($str_name:ident - $query:expr ; $val:ident);+ $(;)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $str_name(pub $val);
            impl QBReportParam for $str_name {
                fn name() -> &'static str {
                    $query
                }
                fn value(&self) -> String {
                    self.0.to_string()
                }
            }
        )+
    };
}

impl_report_param!(
  StartDate - "start_date"; NaiveDate;
  EndDate - "end_date"; NaiveDate;
);

/// The parameters every report pulled into a workbook is requested with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportParams {
    pub start_date: StartDate,
    pub end_date: EndDate,
    pub accounting_method: AccountingMethod,
}

impl ReportParams {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate, accounting_method: AccountingMethod) -> Self {
        Self {
            start_date: StartDate(start),
            end_date: EndDate(end),
            accounting_method,
        }
    }

    /// January 1st of `today`'s year through `today`
    #[must_use]
    pub fn year_to_date(today: NaiveDate, accounting_method: AccountingMethod) -> Self {
        let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
        Self::new(start, today, accounting_method)
    }

    /// Name/value pairs to put on the request query string
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            (StartDate::name(), self.start_date.value()),
            (EndDate::name(), self.end_date.value()),
            (AccountingMethod::name(), self.accounting_method.value()),
        ]
    }
}

/// Parses a `YYYY-MM-DD` date as sent by the spreadsheet client
pub fn parse_date(s: &str) -> Result<NaiveDate, APIError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| APIError::InvalidDate(s.to_string()))
}

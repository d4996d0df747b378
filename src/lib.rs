/*
 * A rust library for pulling QuickBooks Online reports into spreadsheets.
 *
 * Profit & Loss, Balance Sheet and Cash Flow reports are fetched from the
 * reports API and flattened into `{headers, rows}` tables.
 *
 * For more information, you can check out their documentation at:
 * https://developer.intuit.com/app/developer/qbo/docs/api/accounting/report-entities/profitandloss
 *
 */
#![warn(clippy::pedantic)]

use serde::{Deserialize, Serialize};

pub mod client;
pub use client::QBContext;
pub mod demo;
pub mod error;
pub use error::{APIError, APIResult};
pub mod functions;
pub mod refresh;
pub mod reports;
pub mod sheet;

pub use reports::{normalize, CellValue, NormalizedReport, ReportKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Environment {
    PRODUCTION,
    #[default]
    SANDBOX,
}

impl Environment {
    /// Reads `QBO_USE_SANDBOX`, anything other than `"false"` means sandbox
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_sandbox_flag(std::env::var("QBO_USE_SANDBOX").ok().as_deref())
    }

    fn from_sandbox_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("false") => Environment::PRODUCTION,
            _ => Environment::SANDBOX,
        }
    }

    #[inline]
    #[must_use]
    pub fn endpoint_url(&self) -> &'static str {
        match self {
            Environment::PRODUCTION => "https://quickbooks.api.intuit.com/v3/",
            Environment::SANDBOX => "https://sandbox-quickbooks.api.intuit.com/v3/",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_flag() {
        assert_eq!(Environment::from_sandbox_flag(None), Environment::SANDBOX);
        assert_eq!(Environment::from_sandbox_flag(Some("true")), Environment::SANDBOX);
        assert_eq!(Environment::from_sandbox_flag(Some("0")), Environment::SANDBOX);
        assert_eq!(
            Environment::from_sandbox_flag(Some("false")),
            Environment::PRODUCTION
        );
    }
}

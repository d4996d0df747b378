//! One-click refresh: pick reports, fetch them, normalize them.
//!
//! A spreadsheet client posts a [`RefreshRequest`] and gets back a
//! [`RefreshResponse`] with one table per requested report. When the request
//! asks for demo data, or there is no `QuickBooks` connection to pull from,
//! the fixed tables in [`crate::demo`] are served instead.

use std::future::Future;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    demo::demo_report,
    reports::{normalize, param::parse_date, AccountingMethod, NormalizedReport, ReportKind, ReportParams},
    APIResult,
};

/// Anything that can hand back a raw report tree
pub trait ReportSource {
    fn fetch(
        &self,
        kind: ReportKind,
        params: &ReportParams,
    ) -> impl Future<Output = APIResult<Value>>;
}

fn default_reports() -> Vec<String> {
    ReportKind::ALL
        .iter()
        .map(|kind| kind.request_key().to_string())
        .collect()
}

/// Body of a refresh call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[serde(default = "default_reports")]
    pub reports: Vec<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub basis: AccountingMethod,
    #[serde(default)]
    pub demo: bool,
}

impl Default for RefreshRequest {
    fn default() -> Self {
        Self {
            reports: default_reports(),
            start_date: None,
            end_date: None,
            basis: AccountingMethod::default(),
            demo: false,
        }
    }
}

impl RefreshRequest {
    /// The requested kinds in refresh order; unknown keys are skipped
    #[must_use]
    pub fn kinds(&self) -> Vec<ReportKind> {
        for key in &self.reports {
            if key.parse::<ReportKind>().is_err() {
                log::warn!("Ignoring unknown report in refresh request : {key}");
            }
        }
        ReportKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.reports.iter().any(|key| key == kind.request_key()))
            .collect()
    }

    /// Report parameters, with missing dates defaulting to year to date
    ///
    /// # Errors
    ///
    /// `InvalidDate` if a given date is not `YYYY-MM-DD`
    pub fn params(&self, today: NaiveDate) -> APIResult<ReportParams> {
        let start = match &self.start_date {
            Some(s) => parse_date(s)?,
            None => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
        };
        let end = match &self.end_date {
            Some(s) => parse_date(s)?,
            None => today,
        };
        Ok(ReportParams::new(start, end, self.basis))
    }
}

/// Normalized tables keyed the way the spreadsheet client expects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefreshResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pnl: Option<NormalizedReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bs: Option<NormalizedReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash: Option<NormalizedReport>,
}

impl RefreshResponse {
    #[must_use]
    pub fn get(&self, kind: ReportKind) -> Option<&NormalizedReport> {
        match kind {
            ReportKind::ProfitAndLoss => self.pnl.as_ref(),
            ReportKind::BalanceSheet => self.bs.as_ref(),
            ReportKind::CashFlow => self.cash.as_ref(),
        }
    }

    pub fn set(&mut self, kind: ReportKind, report: NormalizedReport) {
        let slot = match kind {
            ReportKind::ProfitAndLoss => &mut self.pnl,
            ReportKind::BalanceSheet => &mut self.bs,
            ReportKind::CashFlow => &mut self.cash,
        };
        *slot = Some(report);
    }

    /// Filled slots in refresh order
    pub fn iter(&self) -> impl Iterator<Item = (ReportKind, &NormalizedReport)> {
        ReportKind::ALL
            .iter()
            .filter_map(|kind| self.get(*kind).map(|report| (*kind, report)))
    }
}

/// Answers a refresh from the demo tables
#[must_use]
pub fn demo_refresh(request: &RefreshRequest) -> RefreshResponse {
    let mut response = RefreshResponse::default();
    for kind in request.kinds() {
        response.set(kind, demo_report(kind));
    }
    response
}

/// Runs a refresh against `source`
///
/// Falls back to [`demo_refresh`] when `request.demo` is set or `source` is
/// `None`. Reports are fetched one after another in refresh order and the
/// first failure aborts the refresh.
pub async fn refresh<S: ReportSource>(
    source: Option<&S>,
    request: &RefreshRequest,
    today: NaiveDate,
) -> APIResult<RefreshResponse> {
    let source = match source {
        Some(source) if !request.demo => source,
        _ => {
            log::info!("Serving demo reports for refresh");
            return Ok(demo_refresh(request));
        }
    };

    let params = request.params(today)?;
    let mut response = RefreshResponse::default();
    for kind in request.kinds() {
        let raw = source.fetch(kind, &params).await.inspect_err(|e| {
            log::error!("Failed to fetch {kind} report : {e}");
        })?;
        response.set(kind, normalize(Some(&raw)));
    }

    log::info!(
        "Refreshed {} report(s) for {} to {}",
        response.iter().count(),
        params.start_date.0,
        params.end_date.0
    );

    Ok(response)
}

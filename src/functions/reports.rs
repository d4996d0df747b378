use http_client::HttpClient;
use serde_json::Value;

use crate::{
    functions::qb_get,
    refresh::ReportSource,
    reports::{ReportKind, ReportParams},
    APIResult, QBContext,
};

/// Fetches the raw report tree for `kind` from the reports endpoint
///
/// The body is returned untouched, feed it to
/// [`normalize`](crate::reports::normalize()) to get a table.
pub async fn fetch_report<Client: HttpClient>(
    qb: &QBContext,
    client: &Client,
    kind: ReportKind,
    params: &ReportParams,
) -> APIResult<Value> {
    let path = format!("company/{}/reports/{}", qb.company_id, kind.url_name());
    let report: Value = qb_get(qb, client, &path, &params.query_pairs()).await?;

    log::info!(
        "Successfully fetched {kind} report for company {}",
        qb.company_id
    );

    Ok(report)
}

/// A [`ReportSource`] that pulls reports from `QuickBooks` Online
pub struct QBReportClient<'a, Client> {
    context: &'a QBContext,
    client: &'a Client,
}

impl<'a, Client: HttpClient> QBReportClient<'a, Client> {
    #[must_use]
    pub fn new(context: &'a QBContext, client: &'a Client) -> Self {
        Self { context, client }
    }
}

impl<Client: HttpClient> ReportSource for QBReportClient<'_, Client> {
    fn fetch(
        &self,
        kind: ReportKind,
        params: &ReportParams,
    ) -> impl std::future::Future<Output = APIResult<Value>> {
        fetch_report(self.context, self.client, kind, params)
    }
}

use http_client::{
    http_types::{Method, StatusCode},
    HttpClient,
};
use serde::de::DeserializeOwned;

use crate::{
    client::{build_request, build_url},
    error::APIError,
    APIResult, QBContext,
};

pub mod reports;

/// Sends a GET request to the `QuickBooks` API and decodes the JSON body
///
/// # Arguments
///
/// * `qb` - The context containing authentication details
/// * `client` - The HTTP client the request is sent with
/// * `path` - The path for the API request URL, relative to the environment endpoint
/// * `query` - Query parameters, `minorversion` is always appended
pub(crate) async fn qb_get<U, Client>(
    qb: &QBContext,
    client: &Client,
    path: &str,
    query: &[(&str, String)],
) -> APIResult<U>
where
    U: DeserializeOwned,
    Client: HttpClient,
{
    let url = build_url(qb.environment, path, Some(query.iter().map(|(k, v)| (*k, v))))?;
    let request = build_request(Method::Get, url, &qb.access_token);

    let mut response = client.send(request).await?;
    let status = response.status();

    if status == StatusCode::TooManyRequests {
        let body = response.body_string().await.unwrap_or_default();
        log::warn!("QuickBooks API rate limit (429) on {path} : {body}");
        return Err(APIError::RateLimited(body));
    }

    if !status.is_success() {
        let body = response.body_string().await.unwrap_or_default();
        log::error!("QuickBooks request to {path} failed with {status} : {body}");
        return Err(APIError::BadRequest(body));
    }

    Ok(response.body_json().await?)
}

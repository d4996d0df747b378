use http_client::http_types::{Method, Request, Url};

use crate::{APIResult, Environment};

mod context;
pub use context::QBContext;

/// Minor version of the accounting API the reports are requested against
pub(crate) const MINOR_VERSION: &str = "75";

pub(crate) fn set_headers(access_token: &str, request: &mut Request) {
    request.insert_header("Authorization", format!("Bearer {access_token}"));
    request.insert_header("Accept", "application/json");
}

pub(crate) fn build_request(method: Method, url: Url, access_token: &str) -> Request {
    let mut request = Request::new(method, url);
    set_headers(access_token, &mut request);

    log::debug!(
        "Built Request with params: {}-{}",
        request.url().path(),
        request.method()
    );

    request
}

pub(crate) fn build_url<S, SS>(
    environment: Environment,
    path: &str,
    query: Option<impl IntoIterator<Item = (S, SS)>>,
) -> APIResult<Url>
where
    S: AsRef<str>,
    SS: AsRef<str>,
{
    let mut url = Url::parse(environment.endpoint_url())?.join(path)?;
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(q) = query {
            for (k, v) in q {
                pairs.append_pair(k.as_ref(), v.as_ref());
            }
        }
        pairs.append_pair("minorversion", MINOR_VERSION);
    }
    Ok(url)
}

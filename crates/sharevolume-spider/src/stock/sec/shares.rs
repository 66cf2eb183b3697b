use super::cik::Cik;
use super::transform::normalize;
use crate::config::Config;
use crate::error::LoadError;
use crate::http::*;
use crate::stock::model::ViewModel;
use reqwest::header::{HeaderMap, HeaderValue, FROM};
use serde_json::Value;
use tracing::{debug, error, trace, warn};

/// XBRL concept holding the cover-page shares outstanding figure.
const CONCEPT: &str = "dei/EntityCommonStockSharesOutstanding";

/// Live shares-outstanding lookups against the SEC `companyconcept` API, through the relay.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct SharesClient {
    http_client: HttpClient,
    sec_base: String,
    relay: String,
}

impl SharesClient {
    pub fn new(config: &Config) -> Result<Self, LoadError> {
        Ok(Self {
            http_client: build_client(config)?,
            sec_base: config.sec_base.clone(),
            relay: config.relay.clone(),
        })
    }

    /// The SEC URL for `cik`'s shares outstanding.
    pub fn source_url(&self, cik: &Cik) -> String {
        source_url(&self.sec_base, cik)
    }

    /// GET the raw concept JSON for `cik`.
    ///
    /// Non-2xx statuses are errors; the body is only parsed as JSON, not checked for shape.
    pub async fn fetch(&self, cik: &Cik) -> Result<Value, LoadError> {
        let time = std::time::Instant::now();
        let url = relay_url(&self.relay, &self.source_url(cik));

        debug!("fetching SEC shares outstanding for CIK {cik} via {url}");
        let response = self.http_client.get(&url).send().await.map_err(|err| {
            error!("failed to fetch data for CIK {cik}, error({err})");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("unexpected HTTP {status} for CIK {cik}");
            return Err(LoadError::Status(status));
        }

        let body = response.bytes().await?;
        trace!("{} bytes received for CIK {cik}", body.len());
        let json: Value = serde_json::from_slice(&body).map_err(|err| {
            error!("failed to parse JSON for CIK {cik}, error({err})");
            err
        })?;

        debug!("SEC shares fetched for CIK {cik}. {}", crate::time_elapsed(time));
        Ok(json)
    }

    /// Fetch and normalize `cik`'s shares outstanding.
    pub async fn load(&self, cik: &Cik) -> Result<ViewModel, LoadError> {
        let json = self.fetch(cik).await?;
        Ok(normalize(&json))
    }
}

fn build_client(config: &Config) -> Result<HttpClient, LoadError> {
    let mut headers = HeaderMap::new();
    if let Some(contact) = &config.contact {
        match HeaderValue::from_str(contact) {
            Ok(value) => {
                headers.insert(FROM, value);
            }
            Err(err) => warn!("ignoring contact \"{contact}\" for the From header, error({err})"),
        }
    }

    let client = reqwest::ClientBuilder::new()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// `{sec_base}/api/xbrl/companyconcept/CIK{cik}/dei/EntityCommonStockSharesOutstanding.json`
pub fn source_url(sec_base: &str, cik: &Cik) -> String {
    format!(
        "{base}/api/xbrl/companyconcept/CIK{cik}/{CONCEPT}.json",
        base = sec_base.trim_end_matches('/')
    )
}

/// Route `url` through the relay: its `http://` or `https://` scheme is dropped and the rest
/// appended to `relay` verbatim.
///
/// ## Example
/// ```rust
/// use sharevolume_spider::stock::sec::relay_url;
///
/// assert_eq!(
///     relay_url("https://r.jina.ai/http://", "https://data.sec.gov/api/x.json"),
///     "https://r.jina.ai/http://data.sec.gov/api/x.json",
/// );
/// ```
pub fn relay_url(relay: &str, url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    format!("{relay}{stripped}")
}

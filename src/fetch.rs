//! REST client for the backend's collection endpoints.
//!
//! Fetch failures never escape as errors. They are logged and returned as
//! [FetchOutcome::FetchFailed], which aggregators read as an empty list while
//! still letting callers tell "the fetch failed" apart from "no data".

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    Error,
    period::{Period, PeriodFiltered, filter_by_period},
    record::fields::camel_case_keys,
};

/// A record type served by a collection endpoint that returns a JSON array.
pub trait Resource: DeserializeOwned {
    /// The endpoint path, relative to the API base URL, e.g. "/Projects".
    const ENDPOINT: &'static str;
}

/// Why a fetch produced no records.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FetchError {
    /// The request could not be sent or the response body could not be read.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status code.
    #[error("the server responded with status {0}")]
    Status(u16),

    /// The response body was not a JSON array.
    #[error("could not decode the response body: {0}")]
    Decode(String),
}

/// The result of fetching a collection.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<R> {
    /// The fetch succeeded. The list may legitimately be empty.
    Ok(Vec<R>),
    /// The fetch failed, there are no records to show.
    FetchFailed(FetchError),
}

impl<R> FetchOutcome<R> {
    /// The fetched records, or an empty slice if the fetch failed.
    pub fn records(&self) -> &[R] {
        match self {
            Self::Ok(records) => records,
            Self::FetchFailed(_) => &[],
        }
    }

    /// Takes the fetched records, or an empty list if the fetch failed.
    pub fn into_records(self) -> Vec<R> {
        match self {
            Self::Ok(records) => records,
            Self::FetchFailed(_) => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::FetchFailed(_))
    }

    /// The failure reason, if the fetch failed.
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Ok(_) => None,
            Self::FetchFailed(error) => Some(error),
        }
    }

    /// Transforms the records of a successful fetch, leaving failures untouched.
    pub fn map_records(self, transform: impl FnOnce(Vec<R>) -> Vec<R>) -> Self {
        match self {
            Self::Ok(records) => Self::Ok(transform(records)),
            failed => failed,
        }
    }
}

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// The API root, e.g. "https://example.com/api". A trailing slash is ignored.
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// A thin client over the backend's collection endpoints.
///
/// Requests use the transport's default timeouts and are never retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API at `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidBaseUrl] if the base URL is not an HTTP(S) URL, or
    /// [Error::HttpClient] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_owned();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::InvalidBaseUrl(config.base_url));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| Error::HttpClient(error.to_string()))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches every record of `R`'s collection.
    pub async fn fetch<R: Resource>(&self) -> FetchOutcome<R> {
        let url = format!("{}{}", self.base_url, R::ENDPOINT);

        match self.fetch_records(&url).await {
            Ok(records) => {
                tracing::debug!("Fetched {} records from {url}", records.len());
                FetchOutcome::Ok(records)
            }
            Err(error) => {
                tracing::error!("Could not fetch {url}: {error}");
                FetchOutcome::FetchFailed(error)
            }
        }
    }

    /// Fetches `R`'s collection and keeps the records that belong to `period`.
    pub async fn fetch_in_period<R>(&self, period: Period) -> FetchOutcome<R>
    where
        R: Resource + PeriodFiltered,
    {
        self.fetch::<R>()
            .await
            .map_records(|records| filter_by_period(records, period))
    }

    async fn fetch_records<R: Resource>(&self, url: &str) -> Result<Vec<R>, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|error| FetchError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| FetchError::Transport(error.to_string()))?;

        decode_records(&body)
    }
}

/// Decodes a JSON array of records, skipping elements that are not records.
///
/// Keys may be camelCase or PascalCase. A field sent under both spellings
/// takes the camelCase value.
///
/// # Errors
///
/// Returns [FetchError::Decode] if `body` is not a JSON array.
pub fn decode_records<R: DeserializeOwned>(body: &[u8]) -> Result<Vec<R>, FetchError> {
    let values: Vec<Value> =
        serde_json::from_slice(body).map_err(|error| FetchError::Decode(error.to_string()))?;

    let records = values
        .into_iter()
        .map(camel_case_keys)
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!("Skipping element {index}, it is not a valid record: {error}");
                None
            }
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, http::StatusCode, routing::get};
    use serde_json::json;
    use time::macros::date;

    use super::{ApiClient, ClientConfig, FetchError, FetchOutcome, decode_records};
    use crate::{Error, Period, Project, Sale};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

        format!("http://{address}")
    }

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(ClientConfig::new(base_url)).unwrap()
    }

    #[test]
    fn rejects_non_http_base_urls() {
        assert_eq!(
            ApiClient::new(ClientConfig::new("ftp://example.com")).unwrap_err(),
            Error::InvalidBaseUrl("ftp://example.com".to_owned())
        );
        assert_eq!(
            ApiClient::new(ClientConfig::new("")).unwrap_err(),
            Error::InvalidBaseUrl(String::new())
        );
    }

    #[test]
    fn trims_trailing_slashes_from_the_base_url() {
        assert_eq!(
            client("http://localhost:5000/api/").base_url(),
            "http://localhost:5000/api"
        );
    }

    #[test]
    fn decode_skips_elements_that_are_not_records() {
        let body = br#"[{"name": "A", "budget": 10}, 42, "text", {"name": "B"}]"#;

        let projects: Vec<Project> = decode_records(body).unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].budget, Some(10.0));
        assert_eq!(projects[1].budget, None);
    }

    #[test]
    fn decode_keeps_records_that_repeat_a_field_in_both_casings() {
        let body = br#"[{"name": "A", "Name": "B", "budget": 5, "Budget": 7, "Type": "Build"}]"#;

        let projects: Vec<Project> = decode_records(body).unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name.as_deref(), Some("A"));
        assert_eq!(projects[0].budget, Some(5.0));
        assert_eq!(projects[0].project_type.as_deref(), Some("Build"));
    }

    #[test]
    fn decode_rejects_bodies_that_are_not_arrays() {
        let result: Result<Vec<Project>, _> = decode_records(br#"{"name": "A"}"#);

        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn failed_outcomes_read_as_empty() {
        let outcome: FetchOutcome<Sale> = FetchOutcome::FetchFailed(FetchError::Status(500));

        assert!(outcome.is_failed());
        assert!(outcome.records().is_empty());
        assert_eq!(outcome.error(), Some(&FetchError::Status(500)));
        assert!(outcome.into_records().is_empty());
    }

    #[tokio::test]
    async fn fetches_records_from_the_collection_endpoint() {
        let router = Router::new().route(
            "/Projects",
            get(|| async {
                Json(json!([
                    { "name": "A", "type": "Build", "status": "Active", "budget": 1000,
                      "startDate": "2024-01-01", "endDate": "2024-03-01" },
                    { "Name": "B", "Type": "Build", "Status": "Completed", "Budget": "3000",
                      "StartDate": "2024-02-01T00:00:00", "EndDate": "2024-02-28T00:00:00" },
                ]))
            }),
        );
        let base_url = serve(router).await;

        let outcome = client(&base_url).fetch::<Project>().await;

        assert!(!outcome.is_failed());
        let projects = outcome.records();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].name.as_deref(), Some("B"));
        assert_eq!(projects[1].budget, Some(3000.0));
        assert_eq!(projects[1].end_date, Some(date!(2024 - 02 - 28)));
    }

    #[tokio::test]
    async fn fetch_in_period_filters_the_fetched_records() {
        let router = Router::new().route(
            "/Sales",
            get(|| async {
                Json(json!([
                    { "clientName": "Acme", "date": "2024-03-15", "grossAmount": 10 },
                    { "clientName": "Acme", "date": "2024-04-15", "grossAmount": 20 },
                    { "clientName": "Zenit", "date": null, "grossAmount": 30 },
                ]))
            }),
        );
        let base_url = serve(router).await;

        let outcome = client(&base_url)
            .fetch_in_period::<Sale>(Period::new(3, 2024).unwrap())
            .await;

        assert_eq!(outcome.records().len(), 1);
        assert_eq!(outcome.records()[0].gross_amount, Some(10.0));
    }

    #[tokio::test]
    async fn server_errors_become_fetch_failures() {
        let router = Router::new().route(
            "/Sales",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base_url = serve(router).await;

        let outcome = client(&base_url).fetch::<Sale>().await;

        assert_eq!(outcome, FetchOutcome::FetchFailed(FetchError::Status(500)));
        assert!(outcome.records().is_empty());
    }

    #[tokio::test]
    async fn missing_endpoints_become_fetch_failures() {
        let base_url = serve(Router::new()).await;

        let outcome = client(&base_url).fetch::<Sale>().await;

        assert_eq!(outcome.error(), Some(&FetchError::Status(404)));
    }

    #[tokio::test]
    async fn malformed_bodies_become_fetch_failures() {
        let router = Router::new().route("/Sales", get(|| async { "not json" }));
        let base_url = serve(router).await;

        let outcome = client(&base_url).fetch::<Sale>().await;

        assert!(matches!(outcome.error(), Some(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn unreachable_servers_become_fetch_failures() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let outcome = client(&format!("http://{address}")).fetch::<Sale>().await;

        assert!(matches!(outcome.error(), Some(FetchError::Transport(_))));
        assert!(outcome.into_records().is_empty());
    }
}

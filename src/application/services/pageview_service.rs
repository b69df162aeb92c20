//! Pageview query orchestration.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderMap, HeaderValue, Method, header::USER_AGENT};
use tracing::{debug, info, warn};
use url::Url;

use crate::domain::entities::{DateRange, PageviewItem, PageviewsEnvelope};
use crate::domain::http_client::{HttpClient, UpstreamRequest, UpstreamResponse};
use crate::domain::params::{TitleParam, YearMonth};
use crate::error::AppError;
use crate::utils::date_formatter;
use crate::utils::suggestion::not_found_message;

/// Result of one pageview query: the upstream items or the single failure.
pub type Outcome = Result<Vec<PageviewItem>, AppError>;

/// Service that turns raw `title` and `date` parameters into upstream
/// pageview items.
///
/// Stateless between calls: every query validates, formats, sends exactly
/// one upstream request and interprets the reply, in that order.
pub struct PageviewService<C: HttpClient + ?Sized = dyn HttpClient> {
    client: Arc<C>,
    base_url: Url,
    user_agent: HeaderValue,
    timeout: Duration,
}

impl<C: HttpClient + ?Sized> PageviewService<C> {
    /// Creates a new pageview service.
    ///
    /// `timeout` bounds the upstream call made by [`PageviewService::handle`].
    pub fn new(client: Arc<C>, base_url: Url, user_agent: HeaderValue, timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            user_agent,
            timeout,
        }
    }

    /// Runs a query bounded by the configured upstream timeout.
    pub async fn handle(&self, title: &str, date: &str) -> Outcome {
        self.handle_until(title, date, tokio::time::sleep(self.timeout))
            .await
    }

    /// Runs a query, aborting the upstream call as soon as `cancel` completes.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the title or date is malformed
    /// - [`AppError::NotFound`] if the upstream API returned 404, with a
    ///   title-casing suggestion
    /// - [`AppError::Upstream`] on transport failure, cancellation, any other
    ///   non-2xx status, or an undecodable success body
    pub async fn handle_until<F>(&self, title: &str, date: &str, cancel: F) -> Outcome
    where
        F: Future<Output = ()>,
    {
        let title =
            TitleParam::parse(title).inspect_err(|e| debug!(error = %e, "rejected title"))?;
        let date =
            YearMonth::parse(date).inspect_err(|e| debug!(error = %e, "rejected date"))?;

        let range = date_formatter::expand(&date);
        let url = self.upstream_url(&title, &range)?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, self.user_agent.clone());

        let request = UpstreamRequest {
            method: Method::GET,
            url,
            headers,
        };

        info!(url = %request.url, "sending GET request to pageviews endpoint");

        let response = tokio::select! {
            result = self.client.send(request) => result.map_err(|e| {
                warn!(error = %e, "upstream request failed");
                AppError::upstream(e.to_string(), None)
            })?,
            () = cancel => {
                warn!(title = %title, "upstream request cancelled");
                return Err(AppError::upstream("upstream request cancelled", None));
            }
        };

        interpret_response(&title, response)
    }

    /// Builds `{base}/{title}/monthly/{start}/{end}`.
    ///
    /// The title is percent-encoded as a single path segment.
    pub fn upstream_url(&self, title: &TitleParam, range: &DateRange) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| AppError::upstream("upstream base URL cannot carry a path", None))?
            .pop_if_empty()
            .push(title.as_str())
            .push("monthly")
            .push(&range.start)
            .push(&range.end);

        Ok(url)
    }
}

/// Maps an upstream reply onto an [`Outcome`].
///
/// - 2xx: body decoded as `{"items": [...]}`
/// - 404: [`AppError::NotFound`] carrying [`not_found_message`]
/// - anything else: [`AppError::Upstream`] with the raw status
pub fn interpret_response(title: &TitleParam, response: UpstreamResponse) -> Outcome {
    match response.status {
        200..=299 => serde_json::from_str::<PageviewsEnvelope>(&response.body)
            .map(|envelope| envelope.items)
            .map_err(|e| {
                warn!(error = %e, "failed to decode upstream response");
                AppError::upstream("malformed upstream response", Some(response.status))
            }),
        404 => {
            let message = not_found_message(title.as_str());
            warn!(title = %title, "upstream returned no results");
            Err(AppError::not_found(message))
        }
        status => {
            warn!(status, "unexpected upstream status");
            Err(AppError::upstream(
                format!("upstream returned status {status}"),
                Some(status),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::http_client::{MockHttpClient, TransportError};
    use async_trait::async_trait;

    const BASE: &str = "https://wikimedia.org/api/rest_v1/metrics/pageviews/per-article/en.wikipedia.org/all-access/all-agents";

    const ORCA_BODY: &str = r#"{"items":[{"project":"en.wikipedia","article":"Orca","granularity":"monthly","timestamp":"2024020100","access":"all-access","agent":"all-agents","views":250000}]}"#;

    fn service<C: HttpClient + 'static>(client: C) -> PageviewService<C> {
        PageviewService::new(
            Arc::new(client),
            Url::parse(BASE).unwrap(),
            HeaderValue::from_static("WikiViews/1.0"),
            Duration::from_secs(5),
        )
    }

    fn mock_replying(status: u16, body: &'static str) -> MockHttpClient {
        let mut mock = MockHttpClient::new();
        mock.expect_send()
            .times(1)
            .returning(move |_| Ok(UpstreamResponse::new(status, body)));
        mock
    }

    struct PendingClient;

    #[async_trait]
    impl HttpClient for PendingClient {
        async fn send(&self, _request: UpstreamRequest) -> Result<UpstreamResponse, TransportError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_success_returns_items() {
        let mut mock = MockHttpClient::new();
        mock.expect_send()
            .withf(|req| {
                req.method == Method::GET
                    && req.url.as_str().ends_with("/Orca/monthly/20240201/20240229")
                    && req.headers.get(USER_AGENT).unwrap() == "WikiViews/1.0"
            })
            .times(1)
            .returning(|_| Ok(UpstreamResponse::new(200, ORCA_BODY)));

        let items = service(mock).handle("Orca", "202402").await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].article, "Orca");
        assert_eq!(items[0].views, 250000);
    }

    #[tokio::test]
    async fn test_invalid_title_never_calls_upstream() {
        let mut mock = MockHttpClient::new();
        mock.expect_send().times(0);

        let err = service(mock).handle("orca", "202402").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("lower case"));
    }

    #[tokio::test]
    async fn test_invalid_date_never_calls_upstream() {
        let mut mock = MockHttpClient::new();
        mock.expect_send().times(0);

        let err = service(mock).handle("Orca", "202413").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_title_checked_before_date() {
        let mut mock = MockHttpClient::new();
        mock.expect_send().times(0);

        let err = service(mock).handle("", "").await.unwrap_err();

        assert!(err.to_string().starts_with("title param"));
    }

    #[tokio::test]
    async fn test_not_found_single_word() {
        let err = service(mock_replying(404, ""))
            .handle("Orca", "202402")
            .await
            .unwrap_err();

        let AppError::NotFound { message } = err else {
            panic!("expected NotFound, got {err:?}");
        };
        assert!(message.contains("Orca"));
        assert!(!message.contains(" or "));
    }

    #[tokio::test]
    async fn test_not_found_multi_word() {
        let err = service(mock_replying(404, "{}"))
            .handle("Call_Of_The_Wild", "202301")
            .await
            .unwrap_err();

        let AppError::NotFound { message } = err else {
            panic!("expected NotFound, got {err:?}");
        };
        assert!(message.contains("Call_of_the_wild or Call_of_the_Wild"));
    }

    #[tokio::test]
    async fn test_not_found_other_title() {
        let err = service(mock_replying(404, ""))
            .handle("123", "202301")
            .await
            .unwrap_err();

        assert_eq!(err, AppError::not_found("no results found"));
    }

    #[tokio::test]
    async fn test_unexpected_status_is_upstream_error() {
        let err = service(mock_replying(503, "unavailable"))
            .handle("Orca", "202402")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::upstream("upstream returned status 503", Some(503))
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_upstream_error() {
        let err = service(mock_replying(200, "<html>"))
            .handle("Orca", "202402")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::upstream("malformed upstream response", Some(200))
        );
    }

    #[tokio::test]
    async fn test_transport_error_is_upstream_error() {
        let mut mock = MockHttpClient::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Err(TransportError("connection refused".to_string())));

        let err = service(mock).handle("Orca", "202402").await.unwrap_err();

        let AppError::Upstream { message, status } = err else {
            panic!("expected Upstream, got {err:?}");
        };
        assert!(message.contains("connection refused"));
        assert_eq!(status, None);
    }

    #[tokio::test]
    async fn test_cancel_signal_aborts_upstream_call() {
        let err = service(PendingClient)
            .handle_until("Orca", "202402", async {})
            .await
            .unwrap_err();

        assert_eq!(err, AppError::upstream("upstream request cancelled", None));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_aborts_upstream_call() {
        let err = service(PendingClient)
            .handle("Orca", "202402")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Upstream { .. }));
    }

    #[test]
    fn test_upstream_url() {
        let svc = service(MockHttpClient::new());
        let title = TitleParam::parse("Orca").unwrap();
        let range = date_formatter::expand(&YearMonth::parse("202402").unwrap());

        let url = svc.upstream_url(&title, &range).unwrap();

        assert_eq!(url.as_str(), format!("{BASE}/Orca/monthly/20240201/20240229"));
    }

    #[test]
    fn test_upstream_url_encodes_title_segment() {
        let svc = service(MockHttpClient::new());
        let title = TitleParam::parse("AC/DC").unwrap();
        let range = DateRange::new("20240101", "20240131");

        let url = svc.upstream_url(&title, &range).unwrap();

        assert!(url.as_str().ends_with("/AC%2FDC/monthly/20240101/20240131"));
    }

    #[test]
    fn test_upstream_url_with_trailing_slash_base() {
        let svc = PageviewService::new(
            Arc::new(MockHttpClient::new()),
            Url::parse("http://localhost:9000/per-article/").unwrap(),
            HeaderValue::from_static("WikiViews/1.0"),
            Duration::from_secs(5),
        );
        let title = TitleParam::parse("Orca").unwrap();
        let range = DateRange::new("20230101", "20230131");

        let url = svc.upstream_url(&title, &range).unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:9000/per-article/Orca/monthly/20230101/20230131"
        );
    }

    #[test]
    fn test_interpret_empty_items() {
        let title = TitleParam::parse("Orca").unwrap();

        let items =
            interpret_response(&title, UpstreamResponse::new(200, r#"{"items":[]}"#)).unwrap();

        assert!(items.is_empty());
    }
}

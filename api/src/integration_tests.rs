//! End-to-end tests for the contributors API
//!
//! These wire the real `JsonFeedClient` to a feed served from a local axum
//! server, then drive the service and the HTTP router on top of it.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{http::StatusCode, routing::get, Json, Router};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::adapters::JsonFeedClient;
    use crate::app::ContributorService;
    use crate::domain::entities::social::SocialTag;
    use crate::domain::entities::SocialLink;
    use crate::error::{AppError, FeedError};
    use crate::test_utils::raw_feed_item_json;
    use crate::{router, AppState};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Serve `items` as a single-page contributors feed and return its base URL
    async fn serve_feed(items: Vec<serde_json::Value>) -> String {
        serve(Router::new().route(
            "/contributors/",
            get(move || {
                let items = items.clone();
                async move {
                    Json(json!({
                        "version": "https://jsonfeed.org/version/1.1",
                        "title": "Contributors",
                        "items": items
                    }))
                }
            }),
        ))
        .await
    }

    /// rod on the first page, gordon on the second
    async fn serve_two_page_feed() -> String {
        serve(
            Router::new()
                .route(
                    "/contributors/",
                    get(|| async {
                        Json(json!({
                            "items": [raw_feed_item_json("Rod", "rod")],
                            "next_url": "/contributors/page/2/"
                        }))
                    }),
                )
                .route(
                    "/contributors/page/2/",
                    get(|| async {
                        Json(json!({ "items": [raw_feed_item_json("Gordon", "gordon")] }))
                    }),
                ),
        )
        .await
    }

    fn service_with(
        base_url: &str,
        timeout: Duration,
        max_pages: usize,
    ) -> ContributorService<JsonFeedClient> {
        let feed = JsonFeedClient::new(base_url, timeout, max_pages).unwrap();
        ContributorService::new(Arc::new(feed), base_url.to_string())
    }

    fn service(base_url: &str) -> ContributorService<JsonFeedClient> {
        service_with(base_url, Duration::from_secs(5), 5)
    }

    /// The single-record scenario: one raw item in, one typed contributor out
    #[tokio::test]
    async fn single_feed_item_scenario() {
        let base = serve_feed(vec![json!({
            "name": "Rod",
            "_username": "rod",
            "_content_html": "<p>hi</p>",
            "avatar": "a.png",
            "date_published": "2020-01-01",
            "_links": ["https://twitter.com/rod"],
            "_position": "Eng",
            "_affiliation": "Acme",
            "_contribution_counts": {
                "news": 1, "videos": 0, "projects": 2, "research_papers": 0, "events": 0
            }
        })])
        .await;

        let contributors = service(&base).list_all(None, 0, &[]).await.unwrap();

        assert_eq!(contributors.len(), 1);
        assert_eq!(
            contributors[0].links,
            vec![SocialLink {
                name: "Twitter".to_string(),
                tag: SocialTag::Twitter,
                url: "https://twitter.com/rod".to_string(),
            }]
        );
        assert_eq!(contributors[0].contribution_counts.research_papers, 0);
    }

    #[tokio::test]
    async fn vips_and_lookup_over_http_feed() {
        let base = serve_feed(vec![
            raw_feed_item_json("Tom", "tom"),
            raw_feed_item_json("Visitor", "visitor"),
            raw_feed_item_json("Gordon", "gordon"),
        ])
        .await;
        let service = service(&base);

        let vips = service.list_vips().await.unwrap();
        let names: Vec<&str> = vips.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Gordon", "Tom"]);

        let visitor = service.find_by_username("visitor").await.unwrap();
        assert_eq!(visitor.name, "Visitor");

        let missing = service.find_by_username("nobody").await.unwrap();
        assert_eq!(missing.username, "anonymous");
        assert_eq!(
            missing.avatar,
            format!("{}/static/images/contributors/anonymous.webp", base)
        );
    }

    #[tokio::test]
    async fn router_serves_feed_backed_contributors() {
        let base = serve_feed(vec![
            raw_feed_item_json("Rob", "rob"),
            raw_feed_item_json("Ruyman", "ruyman"),
        ])
        .await;
        let state = AppState {
            contributor_service: Arc::new(service(&base)),
        };
        let server = TestServer::new(router(state)).unwrap();

        let resp = server
            .get("/contributors")
            .add_query_param("filters", "_username:ruyman")
            .await;

        resp.assert_status_ok();
        let body: serde_json::Value = resp.json();
        assert_eq!(body["total_shown"], 1);
        assert_eq!(body["contributors"][0]["name"], "Ruyman");
    }

    #[tokio::test]
    async fn unreachable_feed_fails_the_call() {
        // Nothing listens on this port once the listener is dropped
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let result = service(&base).list_all(None, 0, &[]).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn page_cap_fails_lookups_instead_of_truncating() {
        let base = serve_two_page_feed().await;

        let capped = service_with(&base, Duration::from_secs(5), 1);
        let err = capped.find_by_username("gordon").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Feed(FeedError::TooManyPages { max_pages: 1 })
        ));
        assert!(capped.list_vips().await.is_err());

        let gordon = service(&base).find_by_username("gordon").await.unwrap();
        assert_eq!(gordon.name, "Gordon");
    }

    #[tokio::test]
    async fn router_reports_page_cap_as_bad_gateway() {
        let base = serve_two_page_feed().await;
        let state = AppState {
            contributor_service: Arc::new(service_with(&base, Duration::from_secs(5), 1)),
        };
        let server = TestServer::new(router(state)).unwrap();

        let resp = server.get("/vips").await;

        resp.assert_status(StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn slow_feed_is_gateway_timeout() {
        let base = serve(Router::new().route(
            "/contributors/",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(json!({ "items": [] }))
            }),
        ))
        .await;
        let state = AppState {
            contributor_service: Arc::new(service_with(&base, Duration::from_secs(1), 5)),
        };
        let server = TestServer::new(router(state)).unwrap();

        let resp = server.get("/contributors").await;

        resp.assert_status(StatusCode::GATEWAY_TIMEOUT);
        let body: serde_json::Value = resp.json();
        assert_eq!(body["error"], "Feed service timeout");
    }
}

//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use keyword_crawler::config::Config;
use keyword_crawler::crawler::{run_crawl, Coordinator};
use keyword_crawler::state::CrawlRequest;
use keyword_crawler::CrawlError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts an HTML page that must be fetched exactly `times` times
async fn mount_page(server: &MockServer, page_path: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(times)
        .mount(server)
        .await;
}

fn html(body: &str) -> String {
    format!("<html><body>{}</body></html>", body)
}

/// The mock server's address with `localhost` instead of `127.0.0.1`: same
/// server and port, but a different hostname
fn localhost_uri(server: &MockServer) -> String {
    server.uri().replace("127.0.0.1", "localhost")
}

#[tokio::test]
async fn test_zero_depth_fetches_nothing() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", html("keyword"), 0).await;

    let request = CrawlRequest::new(&format!("{}/", mock_server.uri()), "keyword", 0).unwrap();
    let report = run_crawl(Config::default(), request).await.expect("Crawl failed");

    assert_eq!(report.total_visited, 0);
    assert!(report.matches.is_empty());
}

#[tokio::test]
async fn test_depth_one_fetches_only_start_page() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><p>Hello World</p><a href="/page2">x</a><a href="http://other.com/">y</a></body></html>"#
            .to_string(),
        1,
    )
    .await;
    mount_page(&mock_server, "/page2", html("World again"), 0).await;

    let start = format!("{}/", mock_server.uri());
    let request = CrawlRequest::new(&start, "world", 1).unwrap();
    let report = run_crawl(Config::default(), request).await.expect("Crawl failed");

    assert_eq!(report.total_visited, 1);
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].url, start);
    assert!(report.matches[0].match_context.starts_with("Hello World"));
    assert_eq!(report.levels_completed, 1);
}

#[tokio::test]
async fn test_depth_two_follows_same_host_links_only() {
    let mock_server = MockServer::start().await;
    let off_host = format!("{}/offhost", localhost_uri(&mock_server));

    mount_page(
        &mock_server,
        "/",
        html(&format!(
            r##"<p>Start page</p>
            <a href="/page1">One</a>
            <a href="/page2">Two</a>
            <a href="#section">Same page</a>
            <a href="{}">Elsewhere</a>"##,
            off_host
        )),
        1,
    )
    .await;
    mount_page(&mock_server, "/page1", html("<p>This page mentions Rust.</p>"), 1).await;
    mount_page(&mock_server, "/page2", html("<p>Nothing to see</p>"), 1).await;
    mount_page(&mock_server, "/offhost", html("<p>Rust off host</p>"), 0).await;

    let request = CrawlRequest::new(&format!("{}/", mock_server.uri()), "rust", 2).unwrap();
    let report = run_crawl(Config::default(), request).await.expect("Crawl failed");

    assert_eq!(report.total_visited, 3);
    assert_eq!(report.matches.len(), 1);
    assert_eq!(
        report.matches[0].url,
        format!("{}/page1", mock_server.uri())
    );
    assert_eq!(report.matches[0].match_context, "tions Rust.");
}

#[tokio::test]
async fn test_each_page_is_fetched_once() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        html(r#"<a href="/a">A</a><a href="/b">B</a><a href="/a">A again</a>"#),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/a",
        html(r#"<a href="/shared">Shared</a><a href="/">Home</a>"#),
        1,
    )
    .await;
    mount_page(&mock_server, "/b", html(r#"<a href="/shared">Shared</a>"#), 1).await;
    mount_page(
        &mock_server,
        "/shared",
        html(r#"<p>needle</p><a href="/a">Back</a>"#),
        1,
    )
    .await;

    let request = CrawlRequest::new(&format!("{}/", mock_server.uri()), "needle", 5).unwrap();
    let report = run_crawl(Config::default(), request).await.expect("Crawl failed");

    assert_eq!(report.total_visited, 4);
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].match_context, "needleBack");
    // The frontier ran dry after the level holding /shared
    assert_eq!(report.levels_completed, 3);
}

#[tokio::test]
async fn test_depth_limits_expansion() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", html(r#"<a href="/1">1</a>"#), 1).await;
    mount_page(&mock_server, "/1", html(r#"<a href="/2">2</a>"#), 1).await;
    mount_page(&mock_server, "/2", html(r#"<a href="/3">3</a>"#), 1).await;
    mount_page(&mock_server, "/3", html("end"), 0).await;

    let request = CrawlRequest::new(&format!("{}/", mock_server.uri()), "end", 3).unwrap();
    let report = run_crawl(Config::default(), request).await.expect("Crawl failed");

    assert_eq!(report.total_visited, 3);
    assert!(report.matches.is_empty());
}

#[tokio::test]
async fn test_matches_are_reported_in_visit_order() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        html(r#"<p>keyword home</p><a href="/z">Z</a><a href="/m">M</a><a href="/a">A</a>"#),
        1,
    )
    .await;
    mount_page(&mock_server, "/z", html("keyword z"), 1).await;
    mount_page(&mock_server, "/m", html("no match"), 1).await;
    mount_page(&mock_server, "/a", html("KEYWORD a"), 1).await;

    let request = CrawlRequest::new(&format!("{}/", mock_server.uri()), "keyword", 2).unwrap();
    let report = run_crawl(Config::default(), request).await.expect("Crawl failed");

    let paths: Vec<String> = report
        .matches
        .iter()
        .map(|m| url::Url::parse(&m.url).unwrap().path().to_string())
        .collect();
    assert_eq!(paths, vec!["/", "/z", "/a"]);
}

#[tokio::test]
async fn test_script_and_style_text_is_not_matched() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><style>.hidden-term {}</style></head>
        <body><script>var term = "hidden-term";</script><p>visible</p></body></html>"#
            .to_string(),
        1,
    )
    .await;

    let request = CrawlRequest::new(&format!("{}/", mock_server.uri()), "hidden-term", 1).unwrap();
    let report = run_crawl(Config::default(), request).await.expect("Crawl failed");

    assert_eq!(report.total_visited, 1);
    assert!(report.matches.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_still_processed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(html(r#"<p>Page not found</p><a href="/home">Home</a>"#)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/home", html("<p>Welcome home</p>"), 1).await;

    let request = CrawlRequest::new(&format!("{}/", mock_server.uri()), "found", 2).unwrap();
    let report = run_crawl(Config::default(), request).await.expect("Crawl failed");

    assert_eq!(report.total_visited, 2);
    assert_eq!(report.non_success_pages, 1);
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].status_code, 404);
    assert_eq!(report.matches[0].match_context, "e not foundHome");
}

#[tokio::test]
async fn test_empty_body_is_not_a_match() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", String::new(), 1).await;

    let request = CrawlRequest::new(&format!("{}/", mock_server.uri()), "anything", 2).unwrap();
    let report = run_crawl(Config::default(), request).await.expect("Crawl failed");

    assert_eq!(report.total_visited, 1);
    assert!(report.matches.is_empty());
}

#[tokio::test]
async fn test_transport_failure_aborts_the_run() {
    let mock_server = MockServer::start().await;

    // Same host, closed port: queued, then fails to connect
    mount_page(
        &mock_server,
        "/",
        html(r#"<p>keyword</p><a href="http://127.0.0.1:1/dead">Dead</a>"#),
        1,
    )
    .await;

    let request = CrawlRequest::new(&format!("{}/", mock_server.uri()), "keyword", 2).unwrap();
    let result = run_crawl(Config::default(), request).await;

    match result {
        Err(CrawlError::Http { url, .. }) => assert_eq!(url, "http://127.0.0.1:1/dead"),
        other => panic!("Expected an HTTP error, got {:?}", other),
    }
}

/// Serves one response whose body is cut short of its `Content-Length`
async fn serve_truncated_body() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request: Vec<u8> = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = "HTTP/1.1 200 OK\r\n\
            Content-Type: text/html\r\n\
            Content-Length: 1000\r\n\
            \r\n\
            <html><body>keyword";
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{}/", addr)
}

#[tokio::test]
async fn test_unreadable_body_aborts_the_run() {
    let start = serve_truncated_body().await;

    let request = CrawlRequest::new(&start, "keyword", 2).unwrap();
    let result = run_crawl(Config::default(), request).await;

    match result {
        Err(CrawlError::Body { url, .. }) => assert_eq!(url, start),
        other => panic!("Expected a body error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_start_url_fails() {
    let request = CrawlRequest::new("http://127.0.0.1:1/", "keyword", 1).unwrap();
    let coordinator = Coordinator::new(Config::default(), request).expect("Failed to create coordinator");

    let result = coordinator.run().await;
    assert!(matches!(result, Err(CrawlError::Http { .. })));
}

#[tokio::test]
async fn test_configured_context_margin() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", html("<p>abcdefgh KEY ijklmnop</p>"), 1).await;

    let mut config = Config::default();
    config.matcher.context_margin = 2;

    let request = CrawlRequest::new(&format!("{}/", mock_server.uri()), "key", 1).unwrap();
    let report = run_crawl(config, request).await.expect("Crawl failed");

    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].match_context, "h KEY i");
}

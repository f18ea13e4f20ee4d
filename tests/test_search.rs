//! Search batch tests against a mock API
mod common;

use std::time::Duration;

use wiremock::matchers::{basic_auth, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{query_file, search, API_KEY, EMAIL};

fn endpoint(server: &MockServer) -> String {
    format!("{}/search", server.uri())
}

#[tokio::test]
async fn test_success_is_pretty_printed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "username=alice"))
        .and(header("accept", "application/json"))
        .and(basic_auth(EMAIL, API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"a":1}"#, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let file = query_file("alice\n");
    let r = search(&endpoint(&server), file.path(), &[]);

    assert_eq!(r.exit_code, 0);
    assert_eq!(r.stdout, "\nQuerying for: alice\n{\n    \"a\": 1\n}\n");
}

#[tokio::test]
async fn test_key_order_preserved() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"total":1,"entries":[{"username":"alice"}],"balance":9}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let file = query_file("alice\n");
    let r = search(&endpoint(&server), file.path(), &[]);

    let total = r.stdout.find("\"total\"").unwrap();
    let entries = r.stdout.find("\"entries\"").unwrap();
    let balance = r.stdout.find("\"balance\"").unwrap();
    assert!(total < entries && entries < balance);
    assert!(r.contains("    \"entries\": [\n        {\n            \"username\": \"alice\"\n        }\n    ],"));
}

#[tokio::test]
async fn test_sort_keys_flag() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"b":1,"a":2}"#, "application/json"))
        .mount(&server)
        .await;

    let file = query_file("alice\n");
    let r = search(&endpoint(&server), file.path(), &["--sort-keys"]);

    assert!(r.contains("{\n    \"a\": 2,\n    \"b\": 1\n}"));
}

#[tokio::test]
async fn test_forbidden_reports_status_and_reason() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let file = query_file("alice\n");
    let r = search(&endpoint(&server), file.path(), &[]);

    assert_eq!(r.exit_code, 0);
    assert!(r.contains("Error: 403 - Forbidden"));
}

#[tokio::test]
async fn test_check_status_fails_on_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let file = query_file("alice\n");
    let r = search(&endpoint(&server), file.path(), &["--check-status"]);

    assert_eq!(r.exit_code, 1);
    assert!(r.contains("Error: 401 - Unauthorized"));
}

#[tokio::test]
async fn test_queries_run_in_file_order() {
    let server = MockServer::start().await;

    for name in ["alice", "bob", "carol"] {
        Mock::given(method("GET"))
            .and(query_param("query", format!("username={}", name)))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(format!(r#"{{"name":"{}"}}"#, name), "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let file = query_file("alice\n\nbob \n  \ncarol");
    let r = search(&endpoint(&server), file.path(), &[]);

    assert_eq!(r.count("Querying for: "), 3);
    let alice = r.stdout.find("Querying for: alice\n").unwrap();
    let bob = r.stdout.find("Querying for: bob\n").unwrap();
    let carol = r.stdout.find("Querying for: carol\n").unwrap();
    assert!(alice < bob && bob < carol);

    let requests = server.received_requests().await.unwrap();
    let order: Vec<String> = requests
        .iter()
        .filter_map(|req| req.url.query_pairs().find(|(k, _)| k == "query").map(|(_, v)| v.to_string()))
        .collect();
    assert_eq!(order, vec!["username=alice", "username=bob", "username=carol"]);
}

#[tokio::test]
async fn test_transport_failure_is_isolated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("query", "username=bob"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"late":true}"#, "application/json")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"ok":true}"#, "application/json"))
        .mount(&server)
        .await;

    let file = query_file("alice\nbob\ncarol\n");
    let r = search(&endpoint(&server), file.path(), &["--timeout", "1"]);

    assert_eq!(r.exit_code, 0);
    assert_eq!(r.count("An error occurred: "), 1);
    assert_eq!(r.count("\"ok\": true"), 2);

    let bob = r.stdout.find("Querying for: bob\nAn error occurred: ").unwrap();
    let carol = r.stdout.find("Querying for: carol\n").unwrap();
    assert!(bob < carol);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_non_json_body_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let file = query_file("alice\nbob\n");
    let r = search(&endpoint(&server), file.path(), &[]);

    assert_eq!(r.count("An error occurred: Invalid JSON in response"), 2);
}

#[tokio::test]
async fn test_missing_file_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let r = search(&endpoint(&server), &missing, &[]);

    assert_eq!(r.exit_code, 0);
    assert_eq!(r.stdout, format!("Error: File '{}' not found.\n", missing.display()));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_key_sends_nothing() {
    let server = MockServer::start().await;

    let file = query_file("alice\n");
    let path = file.path().to_string_lossy().to_string();
    let endpoint = endpoint(&server);
    let r = common::spooksearch(&["-e", EMAIL, "-k", "abc-123", "-f", &path, "--endpoint", &endpoint]);

    assert_eq!(r.stdout, "Invalid API key format. Exiting.\n");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[test]
fn test_connection_refused_continues() {
    // Nothing listens on the discard port
    let file = query_file("alice\nbob\n");
    let r = search("http://127.0.0.1:9/search", file.path(), &["--timeout", "2"]);

    assert_eq!(r.exit_code, 0);
    assert_eq!(r.count("Querying for: "), 2);
    assert_eq!(r.count("An error occurred: "), 2);
}

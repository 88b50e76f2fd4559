//! Unit tests for GitHubClient using wiremock

#[cfg(test)]
mod tests {
    use crate::client::GitHubClient;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Helper to create a mock contributor entry
    fn mock_contributor(login: &str, id: u64, contributions: u64) -> serde_json::Value {
        serde_json::json!({
            "login": login,
            "id": id,
            "node_id": format!("MDQ6VXNlcj{}", id),
            "avatar_url": format!("https://avatars.githubusercontent.com/u/{}?v=4", id),
            "html_url": format!("https://github.com/{}", login),
            "type": "User",
            "site_admin": false,
            "contributions": contributions
        })
    }

    #[tokio::test]
    async fn test_list_contributors() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octocat/Hello-World/contributors"))
            .and(query_param("per_page", "25"))
            .and(header("Accept", "application/vnd.github+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_contributor("alice", 1, 120),
                mock_contributor("bob", 2, 7)
            ])))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let contributors = client
            .list_contributors("octocat", "Hello-World", 25)
            .unwrap();

        assert_eq!(contributors.len(), 2);
        assert_eq!(contributors[0].login, "alice");
        assert_eq!(contributors[0].html_url, "https://github.com/alice");
        assert_eq!(contributors[0].contributions, 120);
        assert_eq!(contributors[1].login, "bob");
        assert_eq!(contributors[1].contributions, 7);
    }

    #[tokio::test]
    async fn test_limit_is_forwarded_as_per_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octocat/Hello-World/contributors"))
            .and(query_param("per_page", "5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([mock_contributor("alice", 1, 1)])),
            )
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let contributors = client.list_contributors("octocat", "Hello-World", 5).unwrap();

        assert_eq!(contributors.len(), 1);
    }

    #[tokio::test]
    async fn test_request_carries_no_authorization() {
        let mock_server = MockServer::start().await;

        // Respond only to requests without an Authorization header.
        Mock::given(method("GET"))
            .and(path("/repos/octocat/Hello-World/contributors"))
            .and(wiremock::matchers::header_exists("User-Agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let result = client.list_contributors("octocat", "Hello-World", 25);

        assert!(result.is_ok());
        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_not_found_is_coerced_to_an_empty_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octocat/no-such-repo/contributors"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let contributors = client
            .list_contributors("octocat", "no-such-repo", 25)
            .unwrap();

        // 404 is not an error here; the body is dropped and the caller sees
        // an empty listing.
        assert!(contributors.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_coerced_to_an_empty_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octocat/Hello-World/contributors"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let contributors = client
            .list_contributors("octocat", "Hello-World", 25)
            .unwrap();

        assert!(contributors.is_empty());
    }

    #[tokio::test]
    async fn test_empty_success_body_stays_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octocat/empty/contributors"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let contributors = client.list_contributors("octocat", "empty", 25).unwrap();

        assert!(contributors.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octocat/Hello-World/contributors"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<!doctype html><html>oops</html>")
                    .insert_header("Content-Type", "application/json"),
            )
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let result = client.list_contributors("octocat", "Hello-World", 25);

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_values_are_substituted_verbatim_into_the_path() {
        let mock_server = MockServer::start().await;

        // Nothing mounted: the 404 comes back as an empty list, but the call
        // must have gone to the path built from the raw values.
        let client = GitHubClient::with_base_url(&mock_server.uri());
        let result = client.list_contributors("UPPER-Case.Org", "some_repo", 25);

        assert!(matches!(result, Ok(ref v) if v.is_empty()));
        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url.path(),
            "/repos/UPPER-Case.Org/some_repo/contributors"
        );
    }
}

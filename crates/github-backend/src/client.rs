use ureq::Agent;

use cards_core::{Contributor, FetchRequest};

use crate::convert::contributor_to_core;
use crate::error::{GitHubError, Result};
use crate::models::GitHubContributor;

/// Public GitHub REST API base
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub REST API client for the contributors listing.
///
/// Unauthenticated: the endpoint is public and the widget never carries a
/// token. No timeout is configured either, so a hung request blocks its
/// caller indefinitely; the event loop above inherits that behavior.
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
}

impl GitHubClient {
    /// Create a new client targeting api.github.com
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API_URL)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: &str) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch up to `limit` contributors for the repository.
    ///
    /// One GET against the first page of the contributors listing; there is
    /// no pagination past it. A non-2xx status is coerced to an empty list
    /// rather than an error, so callers cannot distinguish "no such repo"
    /// from "no contributors". Transport failures and unparseable bodies do
    /// surface as `Err`.
    pub fn list_contributors(
        &self,
        organization: &str,
        repo: &str,
        limit: usize,
    ) -> Result<Vec<Contributor>> {
        let url = FetchRequest {
            organization: organization.to_string(),
            repo: repo.to_string(),
            limit,
        }
        .url(&self.base_url);

        let mut response = self
            .agent
            .get(&url)
            .header("User-Agent", "contributor-cards")
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .call()
            .map_err(GitHubError::Http)?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Ok(Vec::new());
        }

        let contributors: Vec<GitHubContributor> = response.body_mut().read_json()?;
        Ok(contributors.into_iter().map(contributor_to_core).collect())
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

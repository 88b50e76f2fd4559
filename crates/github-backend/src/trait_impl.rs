//! Implementation of the cards-core source trait for GitHubClient

use cards_core::{CardsError, Contributor, ContributorSource, Result};

use crate::client::GitHubClient;

impl ContributorSource for GitHubClient {
    fn list_contributors(
        &self,
        organization: &str,
        repo: &str,
        limit: usize,
    ) -> Result<Vec<Contributor>> {
        GitHubClient::list_contributors(self, organization, repo, limit)
            .map_err(CardsError::from)
    }
}

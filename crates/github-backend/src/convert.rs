use cards_core::Contributor;

use crate::models::GitHubContributor;

/// Map an API contributor onto the core model (straight passthrough of the
/// three fields the cards show)
pub fn contributor_to_core(c: GitHubContributor) -> Contributor {
    Contributor {
        login: c.login,
        html_url: c.html_url,
        contributions: c.contributions,
    }
}

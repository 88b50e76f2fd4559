use serde::{Deserialize, Serialize};

/// A repository contributor as shown on a card.
///
/// Contributors are transient: they live only as the widget's current item
/// list and are replaced wholesale by the next successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// GitHub username
    pub login: String,
    /// Profile URL
    pub html_url: String,
    /// Commit/contribution count for the repository
    pub contributions: u64,
}

impl Contributor {
    /// Link target for the card: the user's repositories tab
    pub fn profile_link(&self) -> String {
        format!("{}?tab=repositories", self.html_url)
    }
}

/// An outbound contributors request as dispatched by the widget.
///
/// The three values are substituted verbatim into the URL template; the
/// widget performs no trimming or validation, so malformed input simply
/// produces a request that fails remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub organization: String,
    pub repo: String,
    pub limit: usize,
}

impl FetchRequest {
    /// Build the contributors listing URL against the given API base
    pub fn url(&self, base: &str) -> String {
        format!(
            "{}/repos/{}/{}/contributors?per_page={}",
            base.trim_end_matches('/'),
            self.organization,
            self.repo,
            self.limit
        )
    }
}

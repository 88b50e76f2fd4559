use serde::{Deserialize, Serialize};

/// One entry of the contributors listing endpoint.
///
/// The API returns more fields than this; only the ones the cards need are
/// kept, plus the stable `id` for debugging output.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubContributor {
    pub login: String,
    pub id: u64,
    pub avatar_url: Option<String>,
    pub html_url: String,
    pub contributions: u64,
}

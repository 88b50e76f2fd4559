use crate::error::Result;
use crate::models::{Contributor, FetchRequest};

/// A source of contributor listings.
///
/// The GitHub backend implements this against the public REST API; the mock
/// crate implements it with scripted responses so tests never touch the
/// network.
pub trait ContributorSource: Send + Sync {
    /// Fetch up to `limit` contributors for `organization`/`repo`.
    ///
    /// A non-success HTTP status is reported as `Ok` with an empty list, not
    /// as an error; only transport failures and unparseable bodies produce
    /// `Err`.
    fn list_contributors(
        &self,
        organization: &str,
        repo: &str,
        limit: usize,
    ) -> Result<Vec<Contributor>>;
}

/// Receives fetch requests dispatched by the widget.
///
/// The widget never performs I/O itself; it hands each request to the
/// dispatcher it was given and expects the eventual payload back through
/// [`crate::widget::ContributorsWidget::apply_response`]. The event loop in
/// the binary dispatches onto worker threads; tests record the requests.
pub trait FetchDispatcher {
    fn dispatch(&mut self, request: FetchRequest);
}

/// Produces the generated avatar for a card.
///
/// The seed is the contributor's login, passed through exactly. The same
/// seed must always yield the same rows.
pub trait AvatarArtist {
    /// Render the avatar as terminal rows
    fn art_for(&self, seed: &str) -> Vec<String>;
}

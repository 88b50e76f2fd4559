use crate::models::{Contributor, FetchRequest};
use crate::traits::FetchDispatcher;

/// Built-in defaults used on first mount
pub const DEFAULT_TITLE: &str = "Github Contributors";
pub const DEFAULT_ORGANIZATION: &str = "haxtheweb";
pub const DEFAULT_REPO: &str = "webcomponents";
pub const DEFAULT_LIMIT: usize = 25;

/// Which configuration values changed during an update cycle
#[derive(Debug, Clone, Copy, Default)]
struct Changed {
    organization: bool,
    repo: bool,
}

/// The contributor-cards widget.
///
/// Holds the component's entire state: two configuration strings, a numeric
/// limit, a loading flag, and the current item list. All mutation goes
/// through the input-handling and fetch methods below; completions arrive
/// via [`apply_response`](Self::apply_response) on whatever thread drives the
/// widget (a single one).
///
/// Known quirks, kept deliberately (see DESIGN.md): an empty or
/// error response never clears the loading flag, and nothing sequences
/// overlapping fetches, so the last completion to arrive wins.
#[derive(Debug)]
pub struct ContributorsWidget {
    title: String,
    organization: String,
    repo: String,
    limit: usize,
    items: Vec<Contributor>,
    loading: bool,
}

impl Default for ContributorsWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ContributorsWidget {
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            organization: DEFAULT_ORGANIZATION.to_string(),
            repo: DEFAULT_REPO.to_string(),
            limit: DEFAULT_LIMIT,
            items: Vec::new(),
            loading: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn items(&self) -> &[Contributor] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Set the title shown above the card grid (no fetch trigger)
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the per-request contributor limit (no fetch trigger)
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }

    /// Overwrite organization and repo without running the change hook.
    ///
    /// For values known before the widget mounts, the way attributes land
    /// in properties before the first update cycle. The fetch they imply
    /// happens at [`mount`](Self::mount), not here.
    pub fn configure(&mut self, organization: impl Into<String>, repo: impl Into<String>) {
        self.organization = organization.into();
        self.repo = repo.into();
    }

    /// Runs the first update cycle against the built-in (or configured)
    /// values. Both defaults are non-empty, so mounting dispatches a fetch
    /// immediately; tests intercept it through the injected dispatcher.
    pub fn mount(&mut self, dispatcher: &mut dyn FetchDispatcher) {
        self.updated(
            Changed {
                organization: true,
                repo: true,
            },
            dispatcher,
        );
    }

    /// Set the organization and run the change hook
    pub fn set_organization(
        &mut self,
        organization: impl Into<String>,
        dispatcher: &mut dyn FetchDispatcher,
    ) {
        self.organization = organization.into();
        self.updated(
            Changed {
                organization: true,
                ..Changed::default()
            },
            dispatcher,
        );
    }

    /// Set the repo and run the change hook
    pub fn set_repo(&mut self, repo: impl Into<String>, dispatcher: &mut dyn FetchDispatcher) {
        self.repo = repo.into();
        self.updated(
            Changed {
                repo: true,
                ..Changed::default()
            },
            dispatcher,
        );
    }

    /// Explicit submission: copy both field values verbatim into state.
    ///
    /// No trimming, no validation. Both writes land in a single update
    /// cycle, so at most one fetch is dispatched per submission.
    pub fn submit(
        &mut self,
        org_field: &str,
        repo_field: &str,
        dispatcher: &mut dyn FetchDispatcher,
    ) {
        self.organization = org_field.to_string();
        self.repo = repo_field.to_string();
        self.updated(
            Changed {
                organization: true,
                repo: true,
            },
            dispatcher,
        );
    }

    /// Change-observation hook: whenever organization or repo changed and
    /// both hold non-empty values, kick off a fetch.
    fn updated(&mut self, changed: Changed, dispatcher: &mut dyn FetchDispatcher) {
        if (changed.organization || changed.repo)
            && !self.organization.is_empty()
            && !self.repo.is_empty()
        {
            self.fetch_contributors(dispatcher);
        }
    }

    /// Raise the loading flag and hand the request to the dispatcher.
    ///
    /// There is no timeout and no cancellation of an in-flight request; two
    /// rapid submissions leave two requests racing for the final
    /// `apply_response`.
    fn fetch_contributors(&mut self, dispatcher: &mut dyn FetchDispatcher) {
        self.loading = true;
        dispatcher.dispatch(FetchRequest {
            organization: self.organization.clone(),
            repo: self.repo.clone(),
            limit: self.limit,
        });
    }

    /// Completion callback for a dispatched fetch.
    ///
    /// A non-empty payload replaces the item list wholesale and clears the
    /// loading flag. An empty payload (which the backend also produces for
    /// non-2xx responses) changes nothing: the previous list keeps showing
    /// and the loading flag stays raised. Fetches that fail outright never
    /// reach this method at all, with the same stuck-loading result.
    pub fn apply_response(&mut self, data: Vec<Contributor>) {
        if !data.is_empty() {
            self.items = data;
            self.loading = false;
        }
    }
}

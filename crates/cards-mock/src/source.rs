use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use cards_core::{CardsError, Contributor, ContributorSource, Result};

/// Convenience fixture constructor used throughout the test suites
pub fn contributor(login: &str, contributions: u64) -> Contributor {
    Contributor {
        login: login.to_string(),
        html_url: format!("https://github.com/{}", login),
        contributions,
    }
}

/// One recorded `list_contributors` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub organization: String,
    pub repo: String,
    pub limit: usize,
}

enum Scripted {
    Items(Vec<Contributor>),
    /// Sleep first, then return the items (models a slow response)
    ItemsAfter(Duration, Vec<Contributor>),
    /// Transport-level failure
    Fail(String),
}

/// In-memory `ContributorSource` with scripted responses and a call log.
///
/// Responses are consumed in script order, one per call; once the script is
/// exhausted every further call returns an empty list (mirroring what the
/// real backend reports for a non-success status).
#[derive(Default)]
pub struct MockSource {
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next response
    pub fn respond_with(self, items: Vec<Contributor>) -> Self {
        self.script.lock().unwrap().push_back(Scripted::Items(items));
        self
    }

    /// Script the next response with an artificial latency before it lands
    pub fn respond_after(self, delay: Duration, items: Vec<Contributor>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::ItemsAfter(delay, items));
        self
    }

    /// Script the next call to fail at the transport level
    pub fn fail_with(self, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Fail(message.to_string()));
        self
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ContributorSource for MockSource {
    fn list_contributors(
        &self,
        organization: &str,
        repo: &str,
        limit: usize,
    ) -> Result<Vec<Contributor>> {
        self.calls.lock().unwrap().push(RecordedCall {
            organization: organization.to_string(),
            repo: repo.to_string(),
            limit,
        });

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Items(items)) => Ok(items),
            Some(Scripted::ItemsAfter(delay, items)) => {
                std::thread::sleep(delay);
                Ok(items)
            }
            Some(Scripted::Fail(message)) => Err(CardsError::Http(message)),
            None => Ok(Vec::new()),
        }
    }
}

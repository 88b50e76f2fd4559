use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use cards_core::{CardsError, Contributor, ContributorSource, ContributorsWidget, FetchDispatcher, FetchRequest};
use colored::Colorize;

/// Result of one background fetch, posted back to the driving thread
enum Completion {
    Payload(Vec<Contributor>),
    Failed(CardsError),
}

/// Dispatcher that runs each fetch on its own worker thread.
///
/// Requests are independent: nothing cancels an in-flight fetch when a new
/// one starts, and completions are delivered in whatever order the workers
/// finish.
struct ThreadDispatcher {
    source: Arc<dyn ContributorSource>,
    tx: Sender<Completion>,
    dispatched: usize,
}

impl FetchDispatcher for ThreadDispatcher {
    fn dispatch(&mut self, request: FetchRequest) {
        self.dispatched += 1;
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let completion = match source.list_contributors(
                &request.organization,
                &request.repo,
                request.limit,
            ) {
                Ok(items) => Completion::Payload(items),
                Err(e) => Completion::Failed(e),
            };
            // The receiver may already be gone if the driver exited early.
            let _ = tx.send(completion);
        });
    }
}

/// Single-threaded event loop around the widget.
///
/// All widget state lives on the thread that owns the `App`; worker threads
/// only ever touch the channel. Completions are applied strictly in arrival
/// order, so when two requests overlap, whichever resolves last writes the
/// final item list, the same last-writer-wins behavior the widget's
/// `apply_response` contract describes.
pub struct App {
    widget: ContributorsWidget,
    dispatcher: ThreadDispatcher,
    rx: Receiver<Completion>,
    completed: usize,
}

impl App {
    pub fn new(widget: ContributorsWidget, source: Arc<dyn ContributorSource>) -> Self {
        let (tx, rx) = channel();
        Self {
            widget,
            dispatcher: ThreadDispatcher {
                source,
                tx,
                dispatched: 0,
            },
            rx,
            completed: 0,
        }
    }

    pub fn widget(&self) -> &ContributorsWidget {
        &self.widget
    }

    /// First update cycle: fetches the built-in (or configured) pair
    pub fn mount(&mut self) {
        self.widget.mount(&mut self.dispatcher);
    }

    /// User submission: both field values land verbatim in the widget
    pub fn submit(&mut self, org_field: &str, repo_field: &str) {
        self.widget.submit(org_field, repo_field, &mut self.dispatcher);
    }

    /// Block until every dispatched fetch has completed and been applied.
    ///
    /// There is no timeout anywhere in the fetch path, so a hung request
    /// hangs this loop too, loading flag still raised. Failed fetches are
    /// dropped apart from a dimmed stderr note; the widget never hears about
    /// them and keeps showing the loading indicator.
    pub fn drain(&mut self) {
        while self.completed < self.dispatcher.dispatched {
            match self.rx.recv() {
                Ok(Completion::Payload(items)) => self.widget.apply_response(items),
                Ok(Completion::Failed(e)) => {
                    eprintln!("{}", format!("fetch failed: {}", e).dimmed());
                }
                // All senders gone; nothing further can arrive.
                Err(_) => break,
            }
            self.completed += 1;
        }
    }
}

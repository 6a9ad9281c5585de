use tokio::sync::Mutex;
use tracing::info;

use crate::{
    controller::{Submission, ViewController, ViewState},
    provider::WeatherProvider,
};

/// What happened to one call of [`SearchSession::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank input; no request was made.
    Rejected,
    /// Dropped by the in-flight guard; no request was made.
    Ignored,
    /// The response was applied to the view.
    Applied,
    /// A newer search started while this one was in flight; its response was discarded.
    Superseded,
}

/// Drives a [`ViewController`] against a provider.
///
/// The view lock is never held across the network call, so concurrent
/// searches interleave and the last submitted one decides the final state.
#[derive(Debug)]
pub struct SearchSession<P> {
    provider: P,
    view: Mutex<ViewController>,
}

impl<P: WeatherProvider> SearchSession<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, view: Mutex::new(ViewController::new()) }
    }

    pub async fn search(&self, input: &str) -> SearchOutcome {
        let ticket = match self.view.lock().await.submit(input) {
            Submission::Rejected => return SearchOutcome::Rejected,
            Submission::Ignored => return SearchOutcome::Ignored,
            Submission::Started(ticket) => ticket,
        };

        info!(city = ticket.city(), "looking up weather");
        let result = self.provider.fetch_weather(ticket.city()).await;

        if self.view.lock().await.resolve(&ticket, result) {
            SearchOutcome::Applied
        } else {
            SearchOutcome::Superseded
        }
    }

    pub async fn state(&self) -> ViewState {
        self.view.lock().await.state().clone()
    }

    /// Snapshot of the whole controller, for rendering.
    pub async fn view(&self) -> ViewController {
        self.view.lock().await.clone()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

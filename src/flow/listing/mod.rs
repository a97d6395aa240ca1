//! List-and-refresh flow.

mod intent;
mod reducer;
mod state;

pub use intent::ListingIntent;
pub use reducer::{ListingReducer, FETCH_FAILED};
pub use state::ListingState;

use std::mem;
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::api::{safe_call, CarService};
use crate::flow::mvi::Reducer;

/// Drives the listing screen: owns the state, spawns fetches, reduces the
/// completions the embedding feeds back from the intent channel.
///
/// Rapid refresh triggers are neither coalesced nor cancelled; each one
/// spawns an independent fetch and the last completion wins. That race is
/// benign because the displayed sequence is replaced wholesale, never
/// merged.
pub struct ListingController {
    service: Arc<dyn CarService>,
    state: ListingState,
    intents: UnboundedSender<ListingIntent>,
}

impl ListingController {
    /// Creates the controller and the channel its completions arrive on.
    /// The embedding drains the receiver into [`dispatch`](Self::dispatch)
    /// on a single task.
    pub fn new(service: Arc<dyn CarService>) -> (Self, UnboundedReceiver<ListingIntent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            service,
            state: ListingState::default(),
            intents: tx,
        };
        (controller, rx)
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Feeds one intent through effects and the reducer.
    pub fn dispatch(&mut self, intent: ListingIntent) {
        if matches!(intent, ListingIntent::Refresh) {
            self.spawn_fetch();
        }
        self.state = ListingReducer::reduce(mem::take(&mut self.state), intent);
    }

    fn spawn_fetch(&self) {
        let service = Arc::clone(&self.service);
        let intents = self.intents.clone();
        tokio::spawn(async move {
            debug!("fetching car list");
            let result = safe_call(|| service.list()).await;
            // The receiver may be gone if the screen closed mid-flight.
            let _ = intents.send(ListingIntent::FetchDone(result));
        });
    }
}

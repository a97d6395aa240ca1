//! Detail flow: load one car, place its marker, edit the licence, delete.

mod intent;
mod reducer;
mod state;

pub use intent::DetailIntent;
pub use reducer::{
    DetailReducer, DELETED, DELETE_FAILED, LOAD_FAILED, UPDATED, UPDATE_FAILED,
};
pub use state::{DetailPhase, DetailState};

use std::mem;
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::api::{safe_call, CarService};
use crate::capability::MapSurface;
use crate::flow::mvi::Reducer;
use crate::model::{Car, Place};
use crate::validate::validate_licence;

/// Drives the detail screen for one car id.
///
/// The id comes in as the navigation parameter from the listing; the
/// initial fetch is spawned at construction, the same moment the map
/// widget starts loading. Marker placement waits for whichever of
/// {car loaded, map ready} arrives second.
pub struct DetailController {
    service: Arc<dyn CarService>,
    map: Arc<dyn MapSurface>,
    id: String,
    state: DetailState,
    intents: UnboundedSender<DetailIntent>,
    marker_requested: bool,
}

impl DetailController {
    /// Opens the detail flow and immediately spawns the fetch for `id`.
    pub fn open(
        service: Arc<dyn CarService>,
        map: Arc<dyn MapSurface>,
        id: impl Into<String>,
    ) -> (Self, UnboundedReceiver<DetailIntent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            service,
            map,
            id: id.into(),
            state: DetailState::default(),
            intents: tx,
            marker_requested: false,
        };
        controller.spawn_load();
        (controller, rx)
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Feeds one intent through effects and the reducer.
    pub fn dispatch(&mut self, intent: DetailIntent) {
        let follow_up = self.run_effects(&intent);
        self.state = DetailReducer::reduce(mem::take(&mut self.state), intent);
        if let Some(next) = follow_up {
            self.dispatch(next);
            return;
        }
        self.check_marker_rendezvous();
    }

    /// Effects keyed on the incoming intent. Returns a synchronous
    /// follow-up intent when a user action is rejected before any call.
    fn run_effects(&mut self, intent: &DetailIntent) -> Option<DetailIntent> {
        match intent {
            DetailIntent::SubmitLicence(licence) if self.state.phase == DetailPhase::Ready => {
                match validate_licence(licence) {
                    Ok(()) => {
                        self.spawn_update(licence.clone());
                        None
                    }
                    Err(err) => Some(DetailIntent::EditRejected(err)),
                }
            }
            DetailIntent::Delete if self.state.phase == DetailPhase::Ready => {
                self.spawn_delete();
                None
            }
            _ => None,
        }
    }

    /// Second arrival performs the placement; `marker_requested` keeps
    /// intervening intents from spawning it again before the completion
    /// lands.
    fn check_marker_rendezvous(&mut self) {
        if self.marker_requested {
            return;
        }
        let Some(place) = self.state.pending_marker() else {
            return;
        };
        let Some(car) = &self.state.car else {
            return;
        };
        self.marker_requested = true;
        self.spawn_marker(place, car.name.clone());
    }

    fn spawn_load(&self) {
        let service = Arc::clone(&self.service);
        let intents = self.intents.clone();
        let id = self.id.clone();
        tokio::spawn(async move {
            debug!(%id, "fetching car detail");
            let result = safe_call(|| service.get(&id)).await;
            let _ = intents.send(DetailIntent::LoadDone(result));
        });
    }

    fn spawn_update(&self, licence: String) {
        let Some(car) = &self.state.car else {
            return;
        };
        // Patch semantics on the wire, but the client always resends the
        // whole object with the one edited field swapped in.
        let updated = Car {
            licence,
            ..car.clone()
        };
        let service = Arc::clone(&self.service);
        let intents = self.intents.clone();
        let id = self.id.clone();
        tokio::spawn(async move {
            debug!(%id, "updating licence");
            let result = safe_call(|| service.update(&id, &updated)).await;
            let _ = intents.send(DetailIntent::UpdateDone(result));
        });
    }

    fn spawn_delete(&self) {
        let service = Arc::clone(&self.service);
        let intents = self.intents.clone();
        let id = self.id.clone();
        tokio::spawn(async move {
            debug!(%id, "deleting car");
            let result = safe_call(|| service.delete(&id)).await;
            let _ = intents.send(DetailIntent::DeleteDone(result));
        });
    }

    fn spawn_marker(&self, place: Place, title: String) {
        let map = Arc::clone(&self.map);
        let intents = self.intents.clone();
        tokio::spawn(async move {
            if let Err(err) = map.place_marker(place, &title).await {
                warn!(%err, "marker placement failed");
            }
            let _ = intents.send(DetailIntent::MarkerPlaced);
        });
    }
}

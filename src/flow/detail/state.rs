use crate::flow::mvi::UiState;
use crate::model::{Car, Place};

/// Lifecycle of the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPhase {
    /// Initial fetch in flight.
    #[default]
    Loading,
    /// Car on screen; edit and delete are available.
    Ready,
    /// Screen dismissed after a failed load or a completed edit or delete.
    Closed,
}

/// Detail screen state.
///
/// `map_ready` and `car` arrive independently; the marker goes on the map
/// only once both are in, whichever lands second. `marker_placed` keeps
/// the rendezvous from firing twice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub phase: DetailPhase,
    pub car: Option<Car>,
    pub map_ready: bool,
    pub marker_placed: bool,
    pub notice: Option<String>,
}

impl UiState for DetailState {}

impl DetailState {
    /// The coordinate awaiting placement, once both arrivals are in.
    pub fn pending_marker(&self) -> Option<Place> {
        if self.map_ready && !self.marker_placed {
            self.car.as_ref().map(|car| car.place)
        } else {
            None
        }
    }
}

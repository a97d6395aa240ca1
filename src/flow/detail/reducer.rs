use crate::flow::detail::intent::DetailIntent;
use crate::flow::detail::state::{DetailPhase, DetailState};
use crate::flow::mvi::Reducer;

pub const LOAD_FAILED: &str = "could not load this car";
pub const UPDATE_FAILED: &str = "could not update the licence";
pub const UPDATED: &str = "licence updated";
pub const DELETE_FAILED: &str = "could not delete this car";
pub const DELETED: &str = "car deleted";

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // In-flight calls are never cancelled on teardown; completions
        // that land after the screen closed have nothing left to update.
        if state.phase == DetailPhase::Closed {
            return state;
        }
        match intent {
            DetailIntent::LoadDone(Ok(envelope)) => DetailState {
                phase: DetailPhase::Ready,
                car: Some(envelope.value),
                notice: None,
                ..state
            },
            // A failed load is terminal: notify and dismiss the screen.
            DetailIntent::LoadDone(Err(_)) => DetailState {
                phase: DetailPhase::Closed,
                notice: Some(LOAD_FAILED.to_string()),
                ..state
            },
            DetailIntent::MapReady => DetailState {
                map_ready: true,
                ..state
            },
            DetailIntent::MarkerPlaced => DetailState {
                marker_placed: true,
                ..state
            },
            DetailIntent::SubmitLicence(_) => DetailState {
                notice: None,
                ..state
            },
            DetailIntent::EditRejected(err) => DetailState {
                notice: Some(err.to_string()),
                ..state
            },
            DetailIntent::UpdateDone(Ok(_)) => DetailState {
                phase: DetailPhase::Closed,
                notice: Some(UPDATED.to_string()),
                ..state
            },
            DetailIntent::UpdateDone(Err(_)) => DetailState {
                notice: Some(UPDATE_FAILED.to_string()),
                ..state
            },
            DetailIntent::Delete => DetailState {
                notice: None,
                ..state
            },
            DetailIntent::DeleteDone(Ok(())) => DetailState {
                phase: DetailPhase::Closed,
                notice: Some(DELETED.to_string()),
                ..state
            },
            DetailIntent::DeleteDone(Err(_)) => DetailState {
                notice: Some(DELETE_FAILED.to_string()),
                ..state
            },
            DetailIntent::DismissNotice => DetailState {
                notice: None,
                ..state
            },
        }
    }
}

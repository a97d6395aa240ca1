use crate::flow::listing::intent::ListingIntent;
use crate::flow::listing::state::ListingState;
use crate::flow::mvi::Reducer;

pub const FETCH_FAILED: &str = "could not load the car list";

pub struct ListingReducer;

impl Reducer for ListingReducer {
    type State = ListingState;
    type Intent = ListingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListingIntent::Refresh => ListingState {
                refreshing: true,
                notice: None,
                ..state
            },
            ListingIntent::FetchDone(Ok(cars)) => ListingState {
                cars,
                refreshing: false,
                notice: None,
            },
            ListingIntent::FetchDone(Err(_)) => ListingState {
                refreshing: false,
                notice: Some(FETCH_FAILED.to_string()),
                ..state
            },
            ListingIntent::DismissNotice => ListingState {
                notice: None,
                ..state
            },
        }
    }
}

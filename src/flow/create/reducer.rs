use crate::flow::create::intent::CreateIntent;
use crate::flow::create::state::{CarForm, CreatePhase, CreateState};
use crate::flow::mvi::Reducer;

pub const SAVE_FAILED: &str = "could not save the car";
pub const UPLOAD_FAILED: &str = "could not upload the photo";

pub struct CreateReducer;

impl Reducer for CreateReducer {
    type State = CreateState;
    type Intent = CreateIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if state.phase == CreatePhase::Closed {
            return state;
        }
        match intent {
            CreateIntent::Opened => state,
            CreateIntent::NameChanged(name) => with_form(state, |form| form.name = name),
            CreateIntent::YearChanged(year) => with_form(state, |form| form.year = year),
            CreateIntent::LicenceChanged(licence) => {
                with_form(state, |form| form.licence = licence)
            }
            CreateIntent::ImageUrlChanged(url) => {
                with_form(state, |form| form.image_url = url)
            }
            CreateIntent::LocationPicked(place) => CreateState {
                location: Some(place),
                ..state
            },
            CreateIntent::DeviceLocated(place) => CreateState {
                device_hint: Some(place),
                ..state
            },
            CreateIntent::TakePhoto => CreateState {
                uploading_image: true,
                notice: None,
                ..state
            },
            CreateIntent::UploadDone(Ok(url)) => {
                let mut state = with_form(state, |form| form.image_url = url);
                state.uploading_image = false;
                state
            }
            CreateIntent::UploadDone(Err(_)) => CreateState {
                uploading_image: false,
                notice: Some(UPLOAD_FAILED.to_string()),
                ..state
            },
            CreateIntent::Save => CreateState {
                notice: None,
                ..state
            },
            CreateIntent::Rejected(err) => CreateState {
                notice: Some(err.to_string()),
                ..state
            },
            CreateIntent::SaveDone(Ok(car)) => CreateState {
                phase: CreatePhase::Closed,
                notice: Some(format!("{} saved", car.name)),
                ..state
            },
            CreateIntent::SaveDone(Err(_)) => CreateState {
                notice: Some(SAVE_FAILED.to_string()),
                ..state
            },
            CreateIntent::DismissNotice => CreateState {
                notice: None,
                ..state
            },
        }
    }
}

fn with_form(mut state: CreateState, edit: impl FnOnce(&mut CarForm)) -> CreateState {
    edit(&mut state.form);
    state
}

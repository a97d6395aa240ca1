//! Creation flow: fill the form, pick a location, optionally capture a
//! photo, save.

mod intent;
mod reducer;
mod state;

pub use intent::CreateIntent;
pub use reducer::{CreateReducer, SAVE_FAILED, UPLOAD_FAILED};
pub use state::{CarForm, CreatePhase, CreateState};

use std::mem;
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;
use uuid::Uuid;

use crate::api::{safe_call, CarService};
use crate::capability::{CameraSource, LocationSource, MediaStore};
use crate::flow::mvi::Reducer;
use crate::model::Car;
use crate::validate::{require_filled, validate_licence, validate_year, FormError};

/// Drives the creation screen.
///
/// The photo path is the one listener-chain survivor from the platform
/// SDKs, flattened here into plain sequencing: capture resolves to a
/// file, upload resolves to a URL, and the URL lands in the form like
/// any other field edit. Save is held while that chain is in flight.
pub struct CreateController {
    service: Arc<dyn CarService>,
    location: Arc<dyn LocationSource>,
    camera: Arc<dyn CameraSource>,
    media: Arc<dyn MediaStore>,
    state: CreateState,
    intents: UnboundedSender<CreateIntent>,
}

impl CreateController {
    pub fn new(
        service: Arc<dyn CarService>,
        location: Arc<dyn LocationSource>,
        camera: Arc<dyn CameraSource>,
        media: Arc<dyn MediaStore>,
    ) -> (Self, UnboundedReceiver<CreateIntent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            service,
            location,
            camera,
            media,
            state: CreateState::default(),
            intents: tx,
        };
        (controller, rx)
    }

    pub fn state(&self) -> &CreateState {
        &self.state
    }

    /// Feeds one intent through effects and the reducer.
    pub fn dispatch(&mut self, intent: CreateIntent) {
        let follow_up = self.run_effects(&intent);
        self.state = CreateReducer::reduce(mem::take(&mut self.state), intent);
        if let Some(next) = follow_up {
            self.dispatch(next);
        }
    }

    fn run_effects(&mut self, intent: &CreateIntent) -> Option<CreateIntent> {
        match intent {
            CreateIntent::Opened => {
                self.spawn_location_hint();
                None
            }
            CreateIntent::TakePhoto if self.state.inputs_enabled() => {
                self.spawn_capture_and_upload();
                None
            }
            CreateIntent::Save if self.state.inputs_enabled() => {
                match validate_form(&self.state) {
                    Ok(()) => {
                        self.spawn_create();
                        None
                    }
                    Err(err) => Some(CreateIntent::Rejected(err)),
                }
            }
            _ => None,
        }
    }

    fn spawn_location_hint(&self) {
        let location = Arc::clone(&self.location);
        let intents = self.intents.clone();
        tokio::spawn(async move {
            match location.last_known().await {
                Ok(place) => {
                    let _ = intents.send(CreateIntent::DeviceLocated(place));
                }
                Err(err) => debug!(%err, "no device location hint"),
            }
        });
    }

    fn spawn_capture_and_upload(&self) {
        let camera = Arc::clone(&self.camera);
        let media = Arc::clone(&self.media);
        let intents = self.intents.clone();
        tokio::spawn(async move {
            let result = async {
                let path = camera.capture().await?;
                media.upload(&path).await
            }
            .await;
            let _ = intents.send(CreateIntent::UploadDone(result));
        });
    }

    fn spawn_create(&self) {
        // The id is generated client-side, right before the call.
        let car = Car {
            id: Uuid::new_v4().simple().to_string(),
            image_url: self.state.form.image_url.clone(),
            year: self.state.form.year.clone(),
            name: self.state.form.name.clone(),
            licence: self.state.form.licence.clone(),
            place: self.state.location.expect("validated location"),
        };
        let service = Arc::clone(&self.service);
        let intents = self.intents.clone();
        tokio::spawn(async move {
            debug!(id = %car.id, "creating car");
            let result = safe_call(|| service.create(&car)).await;
            let _ = intents.send(CreateIntent::SaveDone(result));
        });
    }
}

/// Full-form validation, in the same order the fields appear on screen.
/// First violation wins.
fn validate_form(state: &CreateState) -> Result<(), FormError> {
    require_filled("name", &state.form.name)?;
    validate_year(&state.form.year)?;
    validate_licence(&state.form.licence)?;
    require_filled("image", &state.form.image_url)?;
    if state.location.is_none() {
        return Err(FormError::MissingLocation);
    }
    Ok(())
}

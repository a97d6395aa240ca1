use crate::flow::mvi::UiState;
use crate::model::Place;

/// Editable form fields, one per widget on the screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarForm {
    pub name: String,
    pub year: String,
    pub licence: String,
    pub image_url: String,
}

/// Lifecycle of the creation screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreatePhase {
    #[default]
    Editing,
    /// Save succeeded; the screen dismisses.
    Closed,
}

/// Creation screen state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateState {
    pub phase: CreatePhase,
    pub form: CarForm,
    /// Exactly one map-tap selection; a new tap replaces the old one.
    pub location: Option<Place>,
    /// Map-centering hint from the device's last known position.
    pub device_hint: Option<Place>,
    /// Capture-and-upload in flight; capture and save stay disabled.
    pub uploading_image: bool,
    pub notice: Option<String>,
}

impl UiState for CreateState {}

impl CreateState {
    pub fn inputs_enabled(&self) -> bool {
        !self.uploading_image && self.phase == CreatePhase::Editing
    }
}

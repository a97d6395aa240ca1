use crate::api::ApiResult;
use crate::capability::CapabilityError;
use crate::flow::mvi::Intent;
use crate::model::{Car, Place};
use crate::validate::FormError;

/// User actions and completions for the creation screen.
#[derive(Debug)]
pub enum CreateIntent {
    /// The screen opened; the device-location hint fetch starts here.
    Opened,
    NameChanged(String),
    YearChanged(String),
    LicenceChanged(String),
    /// Direct edit of the image URL field.
    ImageUrlChanged(String),
    /// A map tap replaced the selected location.
    LocationPicked(Place),
    /// The device-location lookup finished. Failures stay silent; the
    /// hint only centers the map.
    DeviceLocated(Place),
    /// The user asked to capture a photo.
    TakePhoto,
    /// Capture plus upload finished, with the stored object's URL.
    UploadDone(Result<String, CapabilityError>),
    /// The user pressed save.
    Save,
    /// A validation rule rejected the form; no call was made.
    Rejected(FormError),
    /// The create round-trip finished.
    SaveDone(ApiResult<Car>),
    /// The transient notice has been shown.
    DismissNotice,
}

impl Intent for CreateIntent {}

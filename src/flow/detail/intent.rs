use crate::api::ApiResult;
use crate::flow::mvi::Intent;
use crate::model::{Car, CarEnvelope};
use crate::validate::FormError;

/// User actions and completions for the detail screen.
#[derive(Debug)]
pub enum DetailIntent {
    /// The initial fetch finished.
    LoadDone(ApiResult<CarEnvelope>),
    /// The map widget reported ready.
    MapReady,
    /// The marker placement effect finished.
    MarkerPlaced,
    /// The user submitted a corrected licence.
    SubmitLicence(String),
    /// The licence failed client-side validation; no call was made.
    EditRejected(FormError),
    /// The update round-trip finished.
    UpdateDone(ApiResult<Car>),
    /// The user asked to delete this car.
    Delete,
    /// The delete round-trip finished.
    DeleteDone(ApiResult<()>),
    /// The transient notice has been shown.
    DismissNotice,
}

impl Intent for DetailIntent {}

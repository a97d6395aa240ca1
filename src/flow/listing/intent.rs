use crate::api::ApiResult;
use crate::flow::mvi::Intent;
use crate::model::Car;

/// User actions and completions for the listing screen.
#[derive(Debug)]
pub enum ListingIntent {
    /// The screen became active or the user pulled to refresh.
    Refresh,
    /// One fetch finished. Completions arrive in whatever order the
    /// server answered; each is applied as it lands.
    FetchDone(ApiResult<Vec<Car>>),
    /// The transient notice has been shown.
    DismissNotice,
}

impl Intent for ListingIntent {}

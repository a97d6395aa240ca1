use crate::flow::mvi::UiState;
use crate::model::Car;

/// Listing screen state: the displayed sequence plus transient status.
///
/// A failed fetch leaves `cars` untouched: the user keeps whatever was
/// on screen and sees a notice instead.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingState {
    pub cars: Vec<Car>,
    pub refreshing: bool,
    pub notice: Option<String>,
}

impl UiState for ListingState {}

use crate::flow::mvi::UiState;

/// Lifecycle of the sign-in screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    /// Waiting for a phone number.
    #[default]
    EnterPhone,
    /// Code sent; waiting for the user to type it.
    EnterCode,
    /// Session established; the catalog can open.
    Authenticated,
}

/// Sign-in screen state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginState {
    pub phase: LoginPhase,
    pub verification_id: Option<String>,
    pub session: Option<String>,
    pub notice: Option<String>,
}

impl UiState for LoginState {}

use crate::flow::login::intent::LoginIntent;
use crate::flow::login::state::{LoginPhase, LoginState};
use crate::flow::mvi::Reducer;

pub const PHONE_REQUIRED: &str = "enter a phone number first";
pub const CODE_REQUIRED: &str = "enter the verification code";
pub const CODE_SENT: &str = "verification code sent";
pub const SEND_FAILED: &str = "could not send the verification code";

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Opened => state,
            LoginIntent::SessionFound(session) => LoginState {
                phase: LoginPhase::Authenticated,
                session: Some(session),
                notice: None,
                ..state
            },
            LoginIntent::SendCode { .. } => LoginState {
                notice: None,
                ..state
            },
            LoginIntent::CodeSent(Ok(verification_id)) => LoginState {
                phase: LoginPhase::EnterCode,
                verification_id: Some(verification_id),
                notice: Some(CODE_SENT.to_string()),
                ..state
            },
            LoginIntent::CodeSent(Err(_)) => LoginState {
                notice: Some(SEND_FAILED.to_string()),
                ..state
            },
            LoginIntent::VerifyCode { .. } => LoginState {
                notice: None,
                ..state
            },
            LoginIntent::Verified(Ok(session)) => LoginState {
                phase: LoginPhase::Authenticated,
                session: Some(session),
                notice: None,
                ..state
            },
            // The provider's own message is the most useful thing to show.
            LoginIntent::Verified(Err(err)) => LoginState {
                notice: Some(err.to_string()),
                ..state
            },
            LoginIntent::Rejected(message) => LoginState {
                notice: Some(message.to_string()),
                ..state
            },
            LoginIntent::DismissNotice => LoginState {
                notice: None,
                ..state
            },
        }
    }
}

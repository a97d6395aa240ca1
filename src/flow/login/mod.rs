//! Phone-verification sign-in flow.

mod intent;
mod reducer;
mod state;

pub use intent::LoginIntent;
pub use reducer::{LoginReducer, CODE_REQUIRED, CODE_SENT, PHONE_REQUIRED, SEND_FAILED};
pub use state::{LoginPhase, LoginState};

use std::mem;
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::capability::PhoneAuthenticator;
use crate::flow::mvi::Reducer;

/// Drives the sign-in screen against an injected provider.
pub struct LoginController {
    auth: Arc<dyn PhoneAuthenticator>,
    state: LoginState,
    intents: UnboundedSender<LoginIntent>,
}

impl LoginController {
    pub fn new(auth: Arc<dyn PhoneAuthenticator>) -> (Self, UnboundedReceiver<LoginIntent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            auth,
            state: LoginState::default(),
            intents: tx,
        };
        (controller, rx)
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    /// Feeds one intent through effects and the reducer.
    pub fn dispatch(&mut self, intent: LoginIntent) {
        let follow_up = self.run_effects(&intent);
        self.state = LoginReducer::reduce(mem::take(&mut self.state), intent);
        if let Some(next) = follow_up {
            self.dispatch(next);
        }
    }

    fn run_effects(&mut self, intent: &LoginIntent) -> Option<LoginIntent> {
        match intent {
            LoginIntent::Opened => self
                .auth
                .current_session()
                .map(LoginIntent::SessionFound),
            LoginIntent::SendCode { phone } => {
                if phone.is_empty() {
                    return Some(LoginIntent::Rejected(PHONE_REQUIRED));
                }
                self.spawn_send_code(phone.clone());
                None
            }
            LoginIntent::VerifyCode { code } => {
                if code.is_empty() {
                    return Some(LoginIntent::Rejected(CODE_REQUIRED));
                }
                let Some(verification_id) = self.state.verification_id.clone() else {
                    return Some(LoginIntent::Rejected(CODE_REQUIRED));
                };
                self.spawn_verify(verification_id, code.clone());
                None
            }
            _ => None,
        }
    }

    fn spawn_send_code(&self, phone: String) {
        let auth = Arc::clone(&self.auth);
        let intents = self.intents.clone();
        tokio::spawn(async move {
            debug!("requesting verification code");
            let result = auth.send_code(&phone).await;
            let _ = intents.send(LoginIntent::CodeSent(result));
        });
    }

    fn spawn_verify(&self, verification_id: String, code: String) {
        let auth = Arc::clone(&self.auth);
        let intents = self.intents.clone();
        tokio::spawn(async move {
            debug!("verifying code");
            let result = auth.verify_code(&verification_id, &code).await;
            let _ = intents.send(LoginIntent::Verified(result));
        });
    }
}

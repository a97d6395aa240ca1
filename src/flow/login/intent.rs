use crate::capability::CapabilityError;
use crate::flow::mvi::Intent;

/// User actions and completions for the sign-in screen.
#[derive(Debug)]
pub enum LoginIntent {
    /// The screen opened; a leftover session skips the whole dance.
    Opened,
    /// A session from an earlier sign-in was found.
    SessionFound(String),
    /// The user asked for a verification code.
    SendCode { phone: String },
    /// The provider answered the code request with a verification id.
    CodeSent(Result<String, CapabilityError>),
    /// The user typed the received code.
    VerifyCode { code: String },
    /// The provider answered the verification with a session token.
    Verified(Result<String, CapabilityError>),
    /// An empty phone or code; no provider call was made.
    Rejected(&'static str),
    /// The transient notice has been shown.
    DismissNotice,
}

impl Intent for LoginIntent {}

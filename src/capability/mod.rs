//! Capability seams for the host platform.
//!
//! The flows only ever need "a string / identifier / coordinate pair when
//! asked", so every platform integration (auth provider, map widget,
//! camera, object storage, location services) is injected behind one of
//! these traits. Implementations belong to the embedding application;
//! tests use in-memory fakes.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Place;

/// Failure of a capability call. Flows surface these as transient notices
/// the same way they surface remote failures, with no variant-specific
/// handling anywhere downstream.
#[derive(Debug, Clone, Error)]
pub enum CapabilityError {
    #[error("{0} is unavailable")]
    Unavailable(&'static str),

    #[error("{0}")]
    Failed(String),
}

/// Phone-number sign-in: request a code, verify it, look up the session.
///
/// Injected into the login flow at construction; there is no global
/// provider singleton anywhere in the crate.
#[async_trait]
pub trait PhoneAuthenticator: Send + Sync {
    /// Requests a verification code for `phone`; resolves with the
    /// verification id the provider hands back.
    async fn send_code(&self, phone: &str) -> Result<String, CapabilityError>;

    /// Exchanges a verification id and the user-typed code for a session
    /// token.
    async fn verify_code(
        &self,
        verification_id: &str,
        code: &str,
    ) -> Result<String, CapabilityError>;

    /// Session left over from an earlier sign-in, if any.
    fn current_session(&self) -> Option<String>;
}

/// Last known device position.
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn last_known(&self) -> Result<Place, CapabilityError>;
}

/// The map widget, as far as the flows care: something a marker can be
/// placed on once the widget has reported ready.
#[async_trait]
pub trait MapSurface: Send + Sync {
    async fn place_marker(&self, place: Place, title: &str) -> Result<(), CapabilityError>;
}

/// Camera capture to a local file.
#[async_trait]
pub trait CameraSource: Send + Sync {
    async fn capture(&self) -> Result<PathBuf, CapabilityError>;
}

/// Binary object upload, resolving with the stored object's public URL.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(&self, path: &Path) -> Result<String, CapabilityError>;
}

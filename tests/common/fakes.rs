//! In-memory doubles for the service and capability seams.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use motorpool::api::{ApiError, ApiResult, CarService};
use motorpool::capability::{
    CameraSource, CapabilityError, LocationSource, MapSurface, MediaStore, PhoneAuthenticator,
};
use motorpool::model::{Car, CarEnvelope, Place};

/// In-memory [`CarService`] that records every mutating call.
///
/// Flip `set_fail` to make every operation answer like a failing server.
#[derive(Default)]
pub struct FakeCars {
    cars: Mutex<Vec<Car>>,
    fail: AtomicBool,
    pub create_calls: Mutex<Vec<Car>>,
    pub update_calls: Mutex<Vec<(String, Car)>>,
    pub delete_calls: Mutex<Vec<String>>,
}

impl FakeCars {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_cars(cars: Vec<Car>) -> Self {
        let fake = Self::default();
        *fake.cars.lock().unwrap() = cars;
        fake
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    fn gate(&self) -> ApiResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ApiError::Status { status: 500 });
        }
        Ok(())
    }
}

#[async_trait]
impl CarService for FakeCars {
    async fn create(&self, car: &Car) -> ApiResult<Car> {
        self.gate()?;
        self.create_calls.lock().unwrap().push(car.clone());
        self.cars.lock().unwrap().push(car.clone());
        Ok(car.clone())
    }

    async fn list(&self) -> ApiResult<Vec<Car>> {
        self.gate()?;
        Ok(self.cars.lock().unwrap().clone())
    }

    async fn get(&self, id: &str) -> ApiResult<CarEnvelope> {
        self.gate()?;
        let cars = self.cars.lock().unwrap();
        match cars.iter().find(|car| car.id == id) {
            Some(car) => Ok(CarEnvelope {
                id: id.to_string(),
                value: car.clone(),
            }),
            None => Err(ApiError::Status { status: 404 }),
        }
    }

    async fn update(&self, id: &str, car: &Car) -> ApiResult<Car> {
        self.gate()?;
        self.update_calls
            .lock()
            .unwrap()
            .push((id.to_string(), car.clone()));
        Ok(car.clone())
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.gate()?;
        self.delete_calls.lock().unwrap().push(id.to_string());
        let mut cars = self.cars.lock().unwrap();
        let before = cars.len();
        cars.retain(|car| car.id != id);
        if cars.len() == before {
            return Err(ApiError::Status { status: 404 });
        }
        Ok(())
    }
}

/// Map double that records every placed marker.
#[derive(Default)]
pub struct RecordingMap {
    pub placed: Mutex<Vec<(Place, String)>>,
}

#[async_trait]
impl MapSurface for RecordingMap {
    async fn place_marker(&self, place: Place, title: &str) -> Result<(), CapabilityError> {
        self.placed.lock().unwrap().push((place, title.to_string()));
        Ok(())
    }
}

/// Location double with a fixed answer.
pub struct FixedLocation(pub Place);

#[async_trait]
impl LocationSource for FixedLocation {
    async fn last_known(&self) -> Result<Place, CapabilityError> {
        Ok(self.0)
    }
}

/// Camera double that "captures" a fixed path.
pub struct FakeCamera(pub PathBuf);

#[async_trait]
impl CameraSource for FakeCamera {
    async fn capture(&self) -> Result<PathBuf, CapabilityError> {
        Ok(self.0.clone())
    }
}

/// Upload double: answers with a fixed URL, or fails on demand.
#[derive(Default)]
pub struct FakeStore {
    pub url: String,
    pub fail: AtomicBool,
    pub uploads: Mutex<Vec<PathBuf>>,
}

impl FakeStore {
    pub fn with_url(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        let store = Self::default();
        store.fail.store(true, Ordering::SeqCst);
        store
    }
}

#[async_trait]
impl MediaStore for FakeStore {
    async fn upload(&self, path: &Path) -> Result<String, CapabilityError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(CapabilityError::Failed("upload refused".to_string()));
        }
        self.uploads.lock().unwrap().push(path.to_path_buf());
        Ok(self.url.clone())
    }
}

/// Auth provider double.
#[derive(Default)]
pub struct FakeAuth {
    pub session: Mutex<Option<String>>,
    pub fail_send: AtomicBool,
    pub fail_verify: AtomicBool,
    pub send_calls: Mutex<Vec<String>>,
    pub verify_calls: Mutex<Vec<(String, String)>>,
}

impl FakeAuth {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(session: &str) -> Self {
        let auth = Self::default();
        *auth.session.lock().unwrap() = Some(session.to_string());
        auth
    }
}

#[async_trait]
impl PhoneAuthenticator for FakeAuth {
    async fn send_code(&self, phone: &str) -> Result<String, CapabilityError> {
        self.send_calls.lock().unwrap().push(phone.to_string());
        if self.fail_send.load(Ordering::SeqCst) {
            return Err(CapabilityError::Failed("provider unavailable".to_string()));
        }
        Ok("verification-1".to_string())
    }

    async fn verify_code(
        &self,
        verification_id: &str,
        code: &str,
    ) -> Result<String, CapabilityError> {
        self.verify_calls
            .lock()
            .unwrap()
            .push((verification_id.to_string(), code.to_string()));
        if self.fail_verify.load(Ordering::SeqCst) {
            return Err(CapabilityError::Failed("invalid code".to_string()));
        }
        Ok("session-1".to_string())
    }

    fn current_session(&self) -> Option<String> {
        self.session.lock().unwrap().clone()
    }
}

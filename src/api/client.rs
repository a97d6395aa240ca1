//! HTTP implementation of the car resource.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::result::ApiResult;
use crate::config::ApiConfig;
use crate::model::{Car, CarEnvelope};

/// The five operations of the remote car collection.
///
/// Flows depend on this trait rather than on the HTTP implementation, so
/// tests substitute an in-memory double and the real client stays a thin
/// wire adapter.
#[async_trait]
pub trait CarService: Send + Sync {
    /// `POST /car`: store a new car; the id is client-generated.
    async fn create(&self, car: &Car) -> ApiResult<Car>;
    /// `GET /car`: the full collection, in server-defined order, no paging.
    async fn list(&self) -> ApiResult<Vec<Car>>;
    /// `GET /car/{id}`: one car, wrapped in its envelope. A missing id
    /// surfaces as an error like any other non-success status.
    async fn get(&self, id: &str) -> ApiResult<CarEnvelope>;
    /// `PATCH /car/{id}`: the full object is resent even when a single
    /// field changed.
    async fn update(&self, id: &str, car: &Car) -> ApiResult<Car>;
    /// `DELETE /car/{id}`.
    async fn delete(&self, id: &str) -> ApiResult<()>;
}

/// `reqwest`-backed [`CarService`].
///
/// One attempt per call; timeouts come from configuration. Retry policy,
/// if any, belongs to the user retrying the action.
pub struct HttpCarService {
    client: Client,
    base_url: String,
}

impl HttpCarService {
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let response = check_status(response)?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }
}

fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl CarService for HttpCarService {
    async fn create(&self, car: &Car) -> ApiResult<Car> {
        debug!(id = %car.id, "POST /car");
        let response = self.client.post(self.url("car")).json(car).send().await?;
        Self::decode(response).await
    }

    async fn list(&self) -> ApiResult<Vec<Car>> {
        debug!("GET /car");
        let response = self.client.get(self.url("car")).send().await?;
        Self::decode(response).await
    }

    async fn get(&self, id: &str) -> ApiResult<CarEnvelope> {
        debug!(%id, "GET /car/{{id}}");
        let response = self
            .client
            .get(self.url(&format!("car/{id}")))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update(&self, id: &str, car: &Car) -> ApiResult<Car> {
        debug!(%id, "PATCH /car/{{id}}");
        let response = self
            .client
            .patch(self.url(&format!("car/{id}")))
            .json(car)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        debug!(%id, "DELETE /car/{{id}}");
        let response = self
            .client
            .delete(self.url(&format!("car/{id}")))
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }
}

//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod fakes;
pub mod mock_api;

use std::time::Duration;

use motorpool::model::{Car, Place};
use tokio::sync::mpsc::UnboundedReceiver;

/// A fully populated car for fixtures.
pub fn car(id: &str, name: &str) -> Car {
    Car {
        id: id.to_string(),
        image_url: format!("https://images.example/{id}.jpg"),
        year: "2020/2020".to_string(),
        name: name.to_string(),
        licence: "ABC-1234".to_string(),
        place: Place {
            lat: -23.56,
            long: -46.65,
        },
    }
}

/// Receive the next intent from a flow channel, failing the test rather
/// than hanging if nothing arrives.
pub async fn next_intent<T>(rx: &mut UnboundedReceiver<T>) -> T {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for an intent")
        .expect("intent channel closed")
}

//! Remote resource client and the safe-call failure boundary.

mod client;
mod error;
mod result;

pub use client::{CarService, HttpCarService};
pub use error::ApiError;
pub use result::{safe_call, ApiResult};

#[cfg(feature = "data-api")]
pub mod api;
#[cfg(feature = "broadcast")]
pub mod broadcast;
pub mod error;
pub mod host;
pub mod identity;
pub mod phone;
pub mod poller;
pub mod spin;

pub use error::{BridgeError, Result};

pub mod domain;
pub mod dto;
pub mod error;

pub use domain::*;
pub use dto::UserPayload;
pub use error::CoreError;

//! Request and response models

pub mod request;
pub mod response;

pub use request::{BetaSignupRequest, ContactRequest};
pub use response::ApiResult;

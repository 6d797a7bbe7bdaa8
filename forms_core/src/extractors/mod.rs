//! Custom request extractors

pub mod json;

pub use json::{ApiJson, StrictJson};

//! HTTP request handlers

pub mod beta_signup;
pub mod contact;
pub mod health;
pub mod routes;
pub mod skills;

//! Server API client and error classification

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;

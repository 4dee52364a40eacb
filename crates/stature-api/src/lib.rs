//! stature-api: Adapters for the hosted generative models.
//!
//! Three thin request/response wrappers over the `generateContent`
//! endpoint: structured height analysis, conversational image editing,
//! and search-grounded news. Request construction and response
//! decoding are pure and unit-tested; only the client's internal POST
//! helper touches the network (via `gloo-net` fetch).

pub mod client;
pub mod error;
pub mod wire;

pub use client::{DEFAULT_NEWS_QUERY, GeminiClient};
pub use error::ApiError;

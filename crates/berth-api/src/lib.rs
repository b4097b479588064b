//! HTTP surface for an [`berth_core::InstanceProvider`].
//!
//! Routes mirror the provider contract one to one; bodies use the orchestrator's JSON shapes
//! (`InstanceSpec`, `InstanceDescription`, ...).
mod error;
pub use error::ApiError;

mod extract;

mod http;
pub use http::HttpApi;

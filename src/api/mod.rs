//! Authenticated access to the weekly-budget backend.

mod client;
mod response;
pub mod transport;

pub use client::{ApiClient, NO_BODY};
pub use transport::Method;

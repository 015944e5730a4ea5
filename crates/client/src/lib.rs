//! `shopdesk-client` - the single HTTP client used to reach the backend API.
//!
//! Status codes are not interpreted here; callers decide what 2xx / non-2xx
//! means for them. Transport failures are a separate error kind and never
//! look like a response.

pub mod client;
pub mod error;
pub mod response;

pub use client::{payload_form, ApiClient, AuthorizedClient};
pub use error::ClientError;
pub use response::ApiResponse;

pub use reqwest::{multipart::Form, StatusCode, Url};

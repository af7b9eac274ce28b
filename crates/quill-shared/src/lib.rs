//! # Quill Shared
//!
//! Wire types of the HTTP API: request bodies, response payloads and the
//! problem document every error is rendered as.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};

//! # Pinboard Shared
//!
//! Shared types between server and clients: request bodies, the hyperlink
//! response envelope, and the RFC 7807 error body.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, LinkedEntity};

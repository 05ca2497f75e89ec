//! Observability - tracing setup helpers and request IDs.

mod request_id;

pub use request_id::RequestIdMiddleware;

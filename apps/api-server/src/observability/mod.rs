//! Observability module - request spans and request IDs.

mod request_id;
mod root_span;

pub use request_id::RequestIdHeader;
pub use root_span::QuillRootSpanBuilder;

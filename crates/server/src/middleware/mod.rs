//! HTTP middleware stack for the relay.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with status and latency)
//! 3. Request ID (correlate logs, Sentry events and responses)
//! 4. CORS headers (order endpoint only)

pub mod cors;
pub mod request_id;

pub use cors::cors_headers_middleware;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};

//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned, span opened)
//!     → handlers.rs (validate input, fetch upstream, extract)
//!     → response.rs (errors mapped to JSON bodies and status codes)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::AuditError;
pub use server::{AppState, HttpServer};

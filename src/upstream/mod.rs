//! Upstream (third-party) HTTP calls.
//!
//! # Data Flow
//! ```text
//! handler
//!     → client.rs (validate target URL, send with timeouts)
//!     → error.rs (transport, status and URL failures as FetchError)
//!     → redirect.rs (classify a non-following response)
//!     → body text / JSON handed back to the handler
//! ```
//!
//! # Design Decisions
//! - One shared reqwest client per redirect policy, cloned into handler state
//! - Non-2xx upstream responses are failures, never passed through
//! - No retries: a failed call surfaces immediately

pub mod client;
pub mod error;
pub mod redirect;

pub use client::UpstreamClient;
pub use error::FetchError;
pub use redirect::{RedirectReport, RedirectType};

//! Website audit service library.

pub mod config;
pub mod extract;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::ServiceConfig;
pub use extract::{DocumentFeatureExtractor, HeadingGroup, MetaEntry, PageFeatures};
pub use http::HttpServer;
pub use lifecycle::Shutdown;

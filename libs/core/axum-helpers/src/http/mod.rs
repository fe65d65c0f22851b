//! HTTP middleware shared by every service.

pub mod request_logging;

pub use request_logging::request_logging;

//! Transport layer around the signal engine

pub mod http;

pub use http::*;

//! Utility functions for controller request handling.
//!
//! Caller identity extraction and mapping of axum's extractor rejections into the
//! application's error envelope.

pub mod caller;
pub mod extract;

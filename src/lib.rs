//! fetchkit — small helpers shared by document-fetching code paths.
//!
//! Two independent, stateless leaves:
//!
//! - [`normalize`]: turn a raw response body (JSON text, YAML text, or an
//!   already-decoded mapping) into a single [`serde_json::Value`].
//! - [`delay_ms`]: suspend the calling task between retry attempts.
//!
//! Retry policy, HTTP transport, and presentation of failures all belong to
//! the caller; this crate only parses and sleeps.

pub mod delay;
pub mod error;
pub mod normalize;

pub use delay::{delay, delay_ms};
pub use error::NormalizeError;
pub use normalize::{normalize, Content};

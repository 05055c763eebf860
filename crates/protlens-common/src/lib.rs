//! Protlens Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared plumbing for the Protlens workspace members.
//!
//! - **Logging**: `tracing` subscriber setup driven by [`logging::LogConfig`]
//! - **Text**: char-boundary safe truncation used wherever text is bounded
//!
//! # Example
//!
//! ```no_run
//! use protlens_common::logging::{init_logging, LogConfig};
//! use protlens_common::text::truncate_chars;
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&LogConfig::from_env()?)?;
//!     assert_eq!(truncate_chars("insulin", 3), "ins");
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod text;

pub use text::truncate_chars;

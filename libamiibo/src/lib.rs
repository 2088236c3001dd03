// libamiibo/src/lib.rs

//! libamiibo
//!
//! Byte-exact Amiibo/NFC tag record layouts, the compact date codec used
//! inside them, and header-word helpers for NFC service calls.
#![warn(missing_docs)]

pub mod constants;
pub mod date;
pub mod error;
pub mod format;
pub mod ipc;
pub mod prelude;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available to consumers and to `prelude`.
pub use crate::date::CompactDate;
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;

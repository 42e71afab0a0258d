//! Content sources for the AIS site.
//!
//! - [`ContentSource`] - The trait every content backend implements
//! - [`DirectoryContentSource`] - JSON files on disk
//! - `StaticContentSource`, `ErrorContentSource` - In-memory fixtures
//!   (`testing` feature)
//! - [`ContentError`] - Error types for content operations
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   ┌──────────────────┐
//! │  content dir     │   │  in-memory data  │
//! └────────┬─────────┘   └────────┬─────────┘
//!          │                      │
//!          ▼                      ▼
//! ┌──────────────────┐   ┌──────────────────┐
//! │ DirectorySource  │   │  StaticSource    │
//! └────────┬─────────┘   └────────┬─────────┘
//!          │    ContentSource     │
//!          └──────────┬───────────┘
//!                     ▼
//!          Event / Officer / ProjectDemo
//! ```

pub mod directory;
pub mod error;
#[cfg(any(test, feature = "testing"))]
pub mod memory;
pub mod source;

pub use directory::{DirectoryContentSource, is_valid_slug};
pub use error::{ContentError, ContentErrorCode, ContentResult};
#[cfg(any(test, feature = "testing"))]
pub use memory::{ErrorContentSource, StaticContentSource};
pub use source::{BoxFuture, ContentSource, officer_name_matches, sort_events};

//! Site configuration subsystem.
//!
//! # Data Flow
//! ```text
//! admin request (path, port, autoindex, custom 404)
//!     → sanitize.rs (strip traversal / shell characters)
//!     → naming.rs (path → unique document name)
//!     → registry.rs (port-conflict probe)
//!     → template.rs (render server block)
//!     → store.rs (write document, replace activation link)
//!
//! Listing:
//!     registry.rs scans sites-available
//!     → extracts root/listen per document
//!     → sorted ConfigEntry sequence
//! ```
//!
//! # Design Decisions
//! - The filesystem is the only source of truth; nothing is cached
//!   between requests
//! - Document filenames double as configuration identifiers
//! - Sanitizers degrade bad input instead of erroring; the directory
//!   check is the rejection point

pub mod browse;
pub mod naming;
pub mod registry;
pub mod sanitize;
pub mod store;
pub mod template;
pub mod types;

pub use registry::SiteRegistry;
pub use store::{SaveRequest, SiteStore};
pub use types::{ConfigEntry, SiteError, SiteResult};

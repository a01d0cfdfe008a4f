//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Strategies and resolver emit `tracing` events:
//!     → trace: each skipped Keep-Alive element, each decision
//!     → debug: clamping, config loading
//! logging.rs installs the subscriber that renders them.
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber on its own
//! - JSON format for production, pretty format for development

pub mod logging;

pub use logging::init_logging;

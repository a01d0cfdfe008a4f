//! HTTP input boundary.
//!
//! # Data Flow
//! ```text
//! Response / HeaderMap
//!     → response.rs (ResponseHeaders: header lookup by name)
//!     → elements.rs (split values into name[=value] elements)
//!     → keep-alive strategies
//! ```

pub mod elements;
pub mod response;

pub use elements::{parse_elements, HeaderElement, HeaderElementIter, NameValuePair};
pub use response::{ResponseHeaders, KEEP_ALIVE};

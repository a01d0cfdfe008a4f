//! Keep-alive duration policy for HTTP client connection reuse.
//!
//! Given a completed response, decide how long the connection that carried
//! it may stay idle before it must be discarded. Connection pools consult a
//! [`ConnectionKeepAliveStrategy`] and act on its answer; this crate does
//! not open, pool or close connections itself.
//!
//! ```
//! use hyper::Response;
//! use keepalive_policy::compute_keep_alive_duration;
//!
//! let response = Response::builder()
//!     .header("Keep-Alive", "timeout=20, max=5")
//!     .body(())
//!     .unwrap();
//! assert_eq!(compute_keep_alive_duration(Some(&response)), Ok(20_000));
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod keepalive;
pub mod observability;

pub use config::PolicyConfig;
pub use error::KeepAliveError;
pub use keepalive::{
    compute_keep_alive_duration, ConnectionKeepAliveStrategy, DefaultKeepAliveStrategy,
    FixedKeepAliveStrategy, KeepAliveDuration, KeepAliveResolver, NoKeepAliveStrategy,
};

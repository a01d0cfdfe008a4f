//! Keep-alive duration policies.
//!
//! # Data Flow
//! ```text
//! completed response
//!     → ConnectionKeepAliveStrategy (default.rs / fixed.rs)
//!     → KeepAliveDuration (explicit millis, or UNSPECIFIED)
//!     → resolve.rs (caller-side defaults and caps)
//!     → connection pool decides when to evict
//! ```
//!
//! # Design Decisions
//! - Strategies are stateless and `Send + Sync`; one instance is shared
//!   by every connection
//! - "Not stated" is kept distinct from "zero" until the caller resolves it
//! - Strategies never fail on header content

pub mod default;
pub mod fixed;
pub mod resolve;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use hyper::header::HeaderMap;

pub use default::{compute_keep_alive_duration, DefaultKeepAliveStrategy};
pub use fixed::{FixedKeepAliveStrategy, NoKeepAliveStrategy};
pub use resolve::KeepAliveResolver;

/// How long a connection may stay idle, in milliseconds.
///
/// Either a non-negative explicit limit or [`KeepAliveDuration::UNSPECIFIED`],
/// whose raw value is `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeepAliveDuration(i64);

impl KeepAliveDuration {
    /// No explicit limit; the caller supplies its own default.
    pub const UNSPECIFIED: Self = Self(-1);

    /// Do not keep the connection alive at all.
    pub const ZERO: Self = Self(0);

    /// Explicit limit from a millisecond count. Saturates at `i64::MAX`.
    pub fn from_millis(millis: u64) -> Self {
        Self(i64::try_from(millis).unwrap_or(i64::MAX))
    }

    /// Explicit limit from a `Duration`. Saturates at `i64::MAX` millis.
    pub fn from_duration(duration: Duration) -> Self {
        Self(i64::try_from(duration.as_millis()).unwrap_or(i64::MAX))
    }

    /// Raw milliseconds; `-1` when unspecified.
    pub fn as_millis(&self) -> i64 {
        self.0
    }

    pub fn is_unspecified(&self) -> bool {
        self.0 < 0
    }

    /// `None` when unspecified.
    pub fn to_duration(&self) -> Option<Duration> {
        u64::try_from(self.0).ok().map(Duration::from_millis)
    }
}

impl From<KeepAliveDuration> for i64 {
    fn from(duration: KeepAliveDuration) -> Self {
        duration.0
    }
}

impl fmt::Display for KeepAliveDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unspecified() {
            f.write_str("unspecified")
        } else {
            write!(f, "{}ms", self.0)
        }
    }
}

/// Decides how long a connection may remain idle after a response.
///
/// Connection pools hold one of these (typically as
/// `Arc<dyn ConnectionKeepAliveStrategy>`) and consult it after every
/// completed response.
pub trait ConnectionKeepAliveStrategy: fmt::Debug + Send + Sync {
    fn keep_alive_duration(&self, headers: &HeaderMap) -> KeepAliveDuration;
}

impl<S: ConnectionKeepAliveStrategy + ?Sized> ConnectionKeepAliveStrategy for Arc<S> {
    fn keep_alive_duration(&self, headers: &HeaderMap) -> KeepAliveDuration {
        (**self).keep_alive_duration(headers)
    }
}

impl<S: ConnectionKeepAliveStrategy + ?Sized> ConnectionKeepAliveStrategy for Box<S> {
    fn keep_alive_duration(&self, headers: &HeaderMap) -> KeepAliveDuration {
        (**self).keep_alive_duration(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_is_minus_one() {
        assert_eq!(KeepAliveDuration::UNSPECIFIED.as_millis(), -1);
        assert_eq!(i64::from(KeepAliveDuration::UNSPECIFIED), -1);
        assert!(KeepAliveDuration::UNSPECIFIED.is_unspecified());
        assert_eq!(KeepAliveDuration::UNSPECIFIED.to_duration(), None);
    }

    #[test]
    fn zero_is_explicit() {
        assert!(!KeepAliveDuration::ZERO.is_unspecified());
        assert_eq!(KeepAliveDuration::ZERO.to_duration(), Some(Duration::ZERO));
    }

    #[test]
    fn conversions_saturate() {
        assert_eq!(KeepAliveDuration::from_millis(u64::MAX).as_millis(), i64::MAX);
        assert_eq!(
            KeepAliveDuration::from_duration(Duration::from_secs(3)).as_millis(),
            3000
        );
    }

    #[test]
    fn display() {
        assert_eq!(KeepAliveDuration::UNSPECIFIED.to_string(), "unspecified");
        assert_eq!(KeepAliveDuration::from_millis(1500).to_string(), "1500ms");
    }

    #[test]
    fn strategies_are_object_safe() {
        let shared: Arc<dyn ConnectionKeepAliveStrategy> =
            Arc::new(FixedKeepAliveStrategy::new(Duration::from_secs(2)));
        let boxed: Box<dyn ConnectionKeepAliveStrategy> = Box::new(Arc::clone(&shared));
        assert_eq!(boxed.keep_alive_duration(&HeaderMap::new()).as_millis(), 2000);
    }
}

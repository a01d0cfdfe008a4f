//! Strategies that ignore the response.

use std::time::Duration;

use hyper::header::HeaderMap;

use super::{ConnectionKeepAliveStrategy, KeepAliveDuration};

/// Always keeps connections for the same idle period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedKeepAliveStrategy {
    duration: KeepAliveDuration,
}

impl FixedKeepAliveStrategy {
    pub fn new(idle: Duration) -> Self {
        Self {
            duration: KeepAliveDuration::from_duration(idle),
        }
    }
}

impl ConnectionKeepAliveStrategy for FixedKeepAliveStrategy {
    fn keep_alive_duration(&self, _headers: &HeaderMap) -> KeepAliveDuration {
        self.duration
    }
}

/// Never reuses a connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoKeepAliveStrategy;

impl ConnectionKeepAliveStrategy for NoKeepAliveStrategy {
    fn keep_alive_duration(&self, _headers: &HeaderMap) -> KeepAliveDuration {
        KeepAliveDuration::ZERO
    }
}

//! Caller-side resolution of keep-alive decisions.
//!
//! Strategies may answer "unspecified". Pools need a concrete idle
//! period, so the resolver applies configured defaults and caps.
//!
//! # Rules
//! - Unspecified → `default_idle`
//! - Explicit → clamped to `max_idle` when one is configured
//! - `honor_server_timeout = false` → always `default_idle`

use std::time::Duration;

use hyper::header::HeaderMap;

use super::{ConnectionKeepAliveStrategy, DefaultKeepAliveStrategy};
use crate::config::KeepAliveConfig;

/// Turns a strategy's answer into a concrete idle period.
#[derive(Debug, Clone)]
pub struct KeepAliveResolver<S = DefaultKeepAliveStrategy> {
    strategy: S,
    default_idle: Duration,
    max_idle: Option<Duration>,
    honor_server_timeout: bool,
}

impl KeepAliveResolver {
    /// Resolver over the default `Keep-Alive: timeout` strategy.
    pub fn from_config(config: &KeepAliveConfig) -> Self {
        Self::new(DefaultKeepAliveStrategy::INSTANCE, config)
    }
}

impl<S: ConnectionKeepAliveStrategy> KeepAliveResolver<S> {
    pub fn new(strategy: S, config: &KeepAliveConfig) -> Self {
        Self {
            strategy,
            default_idle: config.default_idle(),
            max_idle: config.max_idle(),
            honor_server_timeout: config.honor_server_timeout,
        }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Idle period a connection may keep after a response with `headers`.
    pub fn resolve(&self, headers: &HeaderMap) -> Duration {
        if !self.honor_server_timeout {
            return self.default_idle;
        }

        let decided = self.strategy.keep_alive_duration(headers);
        match decided.to_duration() {
            Some(idle) => match self.max_idle {
                Some(max) if idle > max => {
                    tracing::debug!(
                        advertised_ms = decided.as_millis(),
                        max_ms = max.as_millis() as u64,
                        "Clamping keep-alive to configured maximum"
                    );
                    max
                }
                _ => idle,
            },
            None => self.default_idle,
        }
    }
}

//! Default keep-alive strategy.
//!
//! Honours the `timeout` parameter of the `Keep-Alive` response header
//! and nothing else.
//!
//! # Rules
//! - Elements are scanned left to right across every `Keep-Alive`
//!   occurrence, in header order
//! - The first element named `timeout` (any case) with a value that
//!   parses as whole seconds wins; its value × 1000 is returned
//! - Bare `timeout` and malformed values are skipped, not errors
//! - Nothing found means [`KeepAliveDuration::UNSPECIFIED`]

use hyper::header::HeaderMap;

use super::{ConnectionKeepAliveStrategy, KeepAliveDuration};
use crate::error::KeepAliveError;
use crate::http::elements::HeaderElement;
use crate::http::response::{ResponseHeaders, KEEP_ALIVE};

const TIMEOUT_PARAM: &str = "timeout";

/// Reads the idle timeout a server advertises via `Keep-Alive: timeout=N`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultKeepAliveStrategy;

impl DefaultKeepAliveStrategy {
    /// Shared instance. The strategy carries no state.
    pub const INSTANCE: Self = Self;

    /// Evaluate the policy against anything exposing response headers.
    pub fn duration_for<R: ResponseHeaders + ?Sized>(&self, response: &R) -> KeepAliveDuration {
        for element in response.header_elements(&KEEP_ALIVE) {
            if let Some(token) = timeout_token(&element) {
                match parse_timeout(token) {
                    Ok(duration) => {
                        tracing::trace!(%duration, "Keep-Alive timeout accepted");
                        return duration;
                    }
                    Err(error) => {
                        tracing::trace!(%error, "Skipping Keep-Alive element");
                    }
                }
            }
        }

        tracing::trace!("No usable Keep-Alive timeout");
        KeepAliveDuration::UNSPECIFIED
    }
}

impl ConnectionKeepAliveStrategy for DefaultKeepAliveStrategy {
    fn keep_alive_duration(&self, headers: &HeaderMap) -> KeepAliveDuration {
        self.duration_for(headers)
    }
}

/// Evaluate the default policy, returning raw milliseconds (`-1` when the
/// response states no limit).
///
/// An absent response is a caller bug and is reported as
/// [`KeepAliveError::PreconditionViolation`].
pub fn compute_keep_alive_duration<R: ResponseHeaders + ?Sized>(
    response: Option<&R>,
) -> Result<i64, KeepAliveError> {
    let response = response.ok_or(KeepAliveError::PreconditionViolation("HTTP response"))?;
    Ok(DefaultKeepAliveStrategy::INSTANCE
        .duration_for(response)
        .as_millis())
}

fn timeout_token(element: &HeaderElement) -> Option<&str> {
    if element.name().eq_ignore_ascii_case(TIMEOUT_PARAM) {
        element.value()
    } else {
        None
    }
}

/// Seconds → milliseconds. Negative, non-numeric and overflowing tokens
/// are all malformed.
fn parse_timeout(token: &str) -> Result<KeepAliveDuration, KeepAliveError> {
    let malformed = || KeepAliveError::MalformedDurationToken {
        token: token.to_owned(),
    };

    let secs: i64 = token.parse().map_err(|_| malformed())?;
    let secs = u64::try_from(secs).map_err(|_| malformed())?;
    secs.checked_mul(1000)
        .filter(|millis| i64::try_from(*millis).is_ok())
        .map(KeepAliveDuration::from_millis)
        .ok_or_else(malformed)
}

//! Response input boundary.
//!
//! Strategies only need ordered, repeatable access to a response's
//! headers. `ResponseHeaders` lets callers hand in whatever they hold:
//! a full `Response`, or just the `HeaderMap` split off it.

use hyper::header::{HeaderMap, HeaderName};
use hyper::Response;

use super::elements::HeaderElementIter;

/// `Keep-Alive` header name. `HeaderName` equality is case-insensitive.
pub const KEEP_ALIVE: HeaderName = HeaderName::from_static("keep-alive");

/// Anything that exposes a response's headers.
pub trait ResponseHeaders {
    fn header_map(&self) -> &HeaderMap;

    /// Elements of every occurrence of `name`, in header order.
    fn header_elements(&self, name: &HeaderName) -> HeaderElementIter<'_> {
        HeaderElementIter::new(self.header_map().get_all(name).iter())
    }
}

impl ResponseHeaders for HeaderMap {
    fn header_map(&self) -> &HeaderMap {
        self
    }
}

impl<B> ResponseHeaders for Response<B> {
    fn header_map(&self) -> &HeaderMap {
        self.headers()
    }
}

impl<T: ResponseHeaders + ?Sized> ResponseHeaders for &T {
    fn header_map(&self) -> &HeaderMap {
        (**self).header_map()
    }
}

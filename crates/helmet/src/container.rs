//! The capability a rule needs from the response it patches.
//!
//! Names are [`HeaderName`]s, so lookups and removals are case-insensitive: `X-Powered-By`
//! and `x-powered-by` address the same entry.

use http::{HeaderMap, HeaderName, HeaderValue, Response};

pub trait HeaderContainer {
    /// Returns the first value stored under `name`.
    fn get(&self, name: &HeaderName) -> Option<&HeaderValue>;

    /// Replaces every value stored under `name` with `value`.
    fn set(&mut self, name: HeaderName, value: HeaderValue);

    /// Removes every value stored under `name`.
    fn delete(&mut self, name: &HeaderName);

    /// Enumerates every (name, value) pair, repeated names included.
    fn entries(&self) -> Box<dyn Iterator<Item = (&HeaderName, &HeaderValue)> + '_>;
}

impl HeaderContainer for HeaderMap {
    fn get(&self, name: &HeaderName) -> Option<&HeaderValue> {
        HeaderMap::get(self, name)
    }

    fn set(&mut self, name: HeaderName, value: HeaderValue) {
        self.insert(name, value);
    }

    fn delete(&mut self, name: &HeaderName) {
        self.remove(name);
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&HeaderName, &HeaderValue)> + '_> {
        Box::new(self.iter())
    }
}

impl<B> HeaderContainer for Response<B> {
    fn get(&self, name: &HeaderName) -> Option<&HeaderValue> {
        self.headers().get(name)
    }

    fn set(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    fn delete(&mut self, name: &HeaderName) {
        self.headers_mut().remove(name);
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&HeaderName, &HeaderValue)> + '_> {
        Box::new(self.headers().iter())
    }
}

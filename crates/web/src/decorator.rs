//! Decorators turn one request handler into another.
//!
//! The host framework decorates each handler once, when it is registered; the decorated
//! handler then runs for every request.

pub trait Decorator<In> {
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}

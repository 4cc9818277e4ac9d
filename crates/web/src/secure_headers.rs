//! The decorator that enforces security headers on every HTTP response.
//!
//! [`SecureHeadersDecorator`] wraps a [`RequestHandler`]. For each request whose
//! transport is HTTP, the wrapped handler runs first; then the headers of its response
//! are moved into a fresh [`HeaderMap`], the applicator patches that map, and the
//! patched map is put back before the response is returned to the transport. The body
//! is never touched.
//!
//! Requests on other transports (a WebSocket upgrade) are forwarded to the wrapped
//! handler and its result is returned unchanged.
//!
//! The applicator defaults to [`SecureHeaders`] with the default [`Policy`]; any
//! [`ApplyHeaders`] implementation, including a plain closure, can replace it.

use crate::decorator::Decorator;
use crate::handler::{HandlerResult, RequestHandler};
use crate::transport::TransportKind;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Request};
use micro_helmet::{ApplyHeaders, Policy, SecureHeaders};
use std::mem;
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Debug)]
pub struct SecureHeadersDecorator<A: ?Sized = SecureHeaders> {
    apply: Arc<A>,
}

impl SecureHeadersDecorator {
    pub fn new(policy: Policy) -> Self {
        Self::with_apply(SecureHeaders::new(policy))
    }
}

impl Default for SecureHeadersDecorator {
    fn default() -> Self {
        Self::with_apply(SecureHeaders::default())
    }
}

impl<A: ApplyHeaders> SecureHeadersDecorator<A> {
    /// Replaces the default rule set with `apply`.
    pub fn with_apply(apply: A) -> Self {
        Self { apply: Arc::new(apply) }
    }
}

impl<A: ApplyHeaders + ?Sized> SecureHeadersDecorator<A> {
    /// Shares one applicator between several decorators.
    pub fn from_shared(apply: Arc<A>) -> Self {
        Self { apply }
    }
}

impl<A: ?Sized> Clone for SecureHeadersDecorator<A> {
    fn clone(&self) -> Self {
        Self { apply: Arc::clone(&self.apply) }
    }
}

impl<H, A> Decorator<H> for SecureHeadersDecorator<A>
where
    H: RequestHandler,
    A: ApplyHeaders + ?Sized + 'static,
{
    type Out = SecureHeadersHandler<H, A>;

    fn decorate(&self, raw: H) -> Self::Out {
        SecureHeadersHandler { handler: raw, apply: Arc::clone(&self.apply) }
    }
}

/// Decorates `handler` with the default security headers.
pub fn secure_headers<H: RequestHandler>(handler: H) -> SecureHeadersHandler<H, SecureHeaders> {
    SecureHeadersDecorator::<SecureHeaders>::default().decorate(handler)
}

#[derive(Debug)]
pub struct SecureHeadersHandler<H, A: ?Sized = SecureHeaders> {
    handler: H,
    apply: Arc<A>,
}

#[async_trait]
impl<H, A> RequestHandler for SecureHeadersHandler<H, A>
where
    H: RequestHandler,
    A: ApplyHeaders + ?Sized + 'static,
{
    async fn invoke(&self, req: Request<Bytes>) -> HandlerResult {
        let transport = TransportKind::of(&req);
        if !transport.is_http() {
            debug!(?transport, path = req.uri().path(), "skip security headers");
            return self.handler.invoke(req).await;
        }

        let mut resp = self.handler.invoke(req).await?;

        let mut headers: HeaderMap = mem::take(resp.headers_mut());
        if let Err(e) = self.apply.apply_headers(&mut headers) {
            error!(cause = %e, "can't apply security headers, response rejected");
            return Err(e.into());
        }
        *resp.headers_mut() = headers;

        Ok(resp)
    }
}

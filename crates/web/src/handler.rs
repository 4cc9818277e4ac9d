use crate::body::ResponseBody;
use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response};
use std::error::Error;
use std::future::Future;

pub type BoxError = Box<dyn Error + Send + Sync>;

pub type HandlerResult = Result<Response<ResponseBody>, BoxError>;

/// A unit of request processing that the host framework invokes once per request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn invoke(&self, req: Request<Bytes>) -> HandlerResult;
}

/// a handler backed by an async `Fn`
#[derive(Debug, Clone, Copy)]
pub struct FnHandler<F> {
    f: F,
}

pub fn handler_fn<F, Fut>(f: F) -> FnHandler<F>
where
    F: Fn(Request<Bytes>) -> Fut + Send + Sync,
    Fut: Future<Output = HandlerResult> + Send,
{
    FnHandler { f }
}

#[async_trait]
impl<F, Fut> RequestHandler for FnHandler<F>
where
    F: Fn(Request<Bytes>) -> Fut + Send + Sync,
    Fut: Future<Output = HandlerResult> + Send,
{
    async fn invoke(&self, req: Request<Bytes>) -> HandlerResult {
        (self.f)(req).await
    }
}

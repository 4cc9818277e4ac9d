//! Request handler decorator enforcing security response headers.
//!
//! This crate plugs the [`micro_helmet`] policy engine into a request pipeline. A host
//! framework hands requests to a [`RequestHandler`]; decorating that handler with a
//! [`SecureHeadersDecorator`] makes every HTTP response it produces carry the security
//! headers of the configured [`Policy`](micro_helmet::Policy), and lose its
//! `X-Powered-By` header.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use http::{Request, Response};
//! use micro_helmet_web::{handler_fn, secure_headers, BoxError, RequestHandler, ResponseBody};
//!
//! # tokio_test();
//! # fn tokio_test() {
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let handler = secure_headers(handler_fn(|_req| async {
//!     let resp = Response::builder().header("x-powered-by", "micro").body(ResponseBody::from("PING"))?;
//!     Ok::<_, BoxError>(resp)
//! }));
//!
//! let resp = handler.invoke(Request::new(Bytes::new())).await.unwrap();
//! assert_eq!(resp.headers()["x-content-type-options"], "nosniff");
//! assert!(resp.headers().get("x-powered-by").is_none());
//! # });
//! # }
//! ```

mod body;
mod handler;
mod secure_headers;
mod transport;

pub mod decorator;

pub use body::ResponseBody;
pub use handler::{handler_fn, BoxError, FnHandler, HandlerResult, RequestHandler};
pub use secure_headers::{secure_headers, SecureHeadersDecorator, SecureHeadersHandler};
pub use transport::TransportKind;

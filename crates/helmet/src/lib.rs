//! Security response header policy engine.
//!
//! This crate validates a [`Policy`] and writes the security headers it describes into
//! an HTTP response's header set. It performs no I/O and keeps no global state: the
//! embedding application builds a policy, hands it to an applicator, and runs the
//! applicator on every response before it is sent.
//!
//! # Example
//!
//! ```
//! use http::HeaderMap;
//! use micro_helmet::{apply, Policy};
//!
//! let mut policy = Policy::default();
//! policy.x_frame_options = "SAME-ORIGIN".into();
//!
//! let mut headers = HeaderMap::new();
//! headers.insert("x-powered-by", "micro".parse().unwrap());
//! apply(&policy, &mut headers).unwrap();
//!
//! assert_eq!(headers["x-frame-options"], "SAMEORIGIN");
//! assert_eq!(headers["strict-transport-security"], "maxAge=15552000;includeSubDomains");
//! assert!(headers.get("x-powered-by").is_none());
//! ```
//!
//! # Architecture
//!
//! - [`policy`]: the policy store and its typed values
//! - [`rules`]: one validating rule per recognized header
//! - [`apply`](mod@apply): the composite apply and the [`ApplyHeaders`] override seam
//! - [`container`]: the [`HeaderContainer`] capability rules write through
//!
//! Rules run in the order of [`SecurityHeader::ALL`] and stop at the first invalid
//! option, see [`HeaderOptionError`].

mod error;

pub mod apply;
pub mod container;
pub mod header;
pub mod policy;
pub mod rules;

pub use apply::{apply, ApplyHeaders, SecureHeaders, SecureHeadersBuilder};
pub use container::HeaderContainer;
pub use error::HeaderOptionError;
pub use header::SecurityHeader;
pub use policy::{CspDirectives, Directives, HstsDirectives, HstsValue, Policy, PolicyValue};

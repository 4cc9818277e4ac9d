//! The policy store: the desired value of every recognized security header.
//!
//! A [`Policy`] is built once (from [`Policy::default`] or by deserializing a document)
//! and may be edited freely before it is handed to an applicator. Nothing is validated
//! here; a value outside the domain of its header is reported by the header's rule when
//! a response is processed, so the same bad edit always surfaces the same way.
//!
//! Values are typed by header category:
//!
//! - scalar headers hold a [`String`], e.g. `"DENY"` for `X-Frame-Options`
//! - `Content-Security-Policy` holds [`CspDirectives`], directive name to source tokens
//! - `Strict-Transport-Security` holds [`HstsDirectives`], directive name to [`HstsValue`]

mod directives;

pub use directives::Directives;

use crate::header::SecurityHeader;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Directive name to ordered source tokens.
pub type CspDirectives = Directives<Vec<String>>;

/// Directive name to integer or flag.
pub type HstsDirectives = Directives<HstsValue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HstsValue {
    Integer(u64),
    Flag(bool),
}

impl From<u64> for HstsValue {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for HstsValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl fmt::Display for HstsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl Directives<Vec<String>> {
    /// Chains a CSP directive built from any list of tokens.
    pub fn source<S, I, T>(self, name: S, tokens: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.with(name, tokens.into_iter().map(Into::into).collect())
    }
}

/// A read-only view of the policy value of one header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyValue<'a> {
    Scalar(&'a str),
    Directives(&'a CspDirectives),
    Structured(&'a HstsDirectives),
    /// the header is always written with this literal
    Fixed(&'static str),
    /// the header is always removed
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Policy {
    #[serde(rename = "Strict-Transport-Security")]
    pub strict_transport_security: HstsDirectives,
    #[serde(rename = "Content-Security-Policy")]
    pub content_security_policy: CspDirectives,
    #[serde(rename = "Referrer-Policy")]
    pub referrer_policy: String,
    #[serde(rename = "Cross-Origin-Embedder-Policy")]
    pub cross_origin_embedder_policy: String,
    #[serde(rename = "Cross-Origin-Opener-Policy")]
    pub cross_origin_opener_policy: String,
    #[serde(rename = "Cross-Origin-Resource-Policy")]
    pub cross_origin_resource_policy: String,
    #[serde(rename = "X-Permitted-Cross-Domain-Policies")]
    pub x_permitted_cross_domain_policies: String,
    #[serde(rename = "X-Frame-Options")]
    pub x_frame_options: String,
    #[serde(rename = "X-DNS-Prefetch-Control")]
    pub x_dns_prefetch_control: String,
}

pub(crate) const ORIGIN_AGENT_CLUSTER: &str = "?1";
pub(crate) const X_DOWNLOAD_OPTIONS: &str = "noopen";
pub(crate) const X_XSS_PROTECTION: &str = "1";
pub(crate) const X_CONTENT_TYPE_OPTIONS: &str = "nosniff";

impl Policy {
    pub fn value(&self, header: SecurityHeader) -> PolicyValue<'_> {
        match header {
            SecurityHeader::StrictTransportSecurity => PolicyValue::Structured(&self.strict_transport_security),
            SecurityHeader::ContentSecurityPolicy => PolicyValue::Directives(&self.content_security_policy),
            SecurityHeader::ReferrerPolicy => PolicyValue::Scalar(&self.referrer_policy),
            SecurityHeader::CrossOriginEmbedderPolicy => PolicyValue::Scalar(&self.cross_origin_embedder_policy),
            SecurityHeader::CrossOriginOpenerPolicy => PolicyValue::Scalar(&self.cross_origin_opener_policy),
            SecurityHeader::CrossOriginResourcePolicy => PolicyValue::Scalar(&self.cross_origin_resource_policy),
            SecurityHeader::OriginAgentCluster => PolicyValue::Fixed(ORIGIN_AGENT_CLUSTER),
            SecurityHeader::XPermittedCrossDomainPolicies => {
                PolicyValue::Scalar(&self.x_permitted_cross_domain_policies)
            }
            SecurityHeader::XFrameOptions => PolicyValue::Scalar(&self.x_frame_options),
            SecurityHeader::XDnsPrefetchControl => PolicyValue::Scalar(&self.x_dns_prefetch_control),
            SecurityHeader::XDownloadOptions => PolicyValue::Fixed(X_DOWNLOAD_OPTIONS),
            SecurityHeader::XPoweredBy => PolicyValue::Removed,
            SecurityHeader::XXssProtection => PolicyValue::Fixed(X_XSS_PROTECTION),
            SecurityHeader::XContentTypeOptions => PolicyValue::Fixed(X_CONTENT_TYPE_OPTIONS),
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            strict_transport_security: HstsDirectives::new()
                .with("maxAge", HstsValue::Integer(15_552_000))
                .with("includeSubDomains", HstsValue::Flag(true))
                .with("preload", HstsValue::Flag(false)),
            content_security_policy: CspDirectives::new()
                .source("default-src", ["'self'"])
                .source("base-uri", ["'self'"])
                .source("font-src", ["'self'", "https:", "data:"])
                .source("form-action", ["'self'"])
                .source("frame-ancestors", ["'self'"])
                .source("img-src", ["'self'", "data:"])
                .source("object-src", ["'none'"])
                .source("script-src", ["'self'"])
                .source("script-src-attr", ["'none'"])
                .source("style-src", ["'self'", "https:", "'unsafe-inline'"])
                .source("upgrade-insecure-requests", Vec::<String>::new()),
            referrer_policy: "no-referrer".into(),
            cross_origin_embedder_policy: "require-corp".into(),
            cross_origin_opener_policy: "same-origin".into(),
            cross_origin_resource_policy: "same-origin".into(),
            x_permitted_cross_domain_policies: "none".into(),
            x_frame_options: "DENY".into(),
            x_dns_prefetch_control: "off".into(),
        }
    }
}

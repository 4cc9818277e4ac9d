//! The recognized security headers.
//!
//! [`SecurityHeader::ALL`] lists them in the order the composite apply runs their rules.
//! Header names missing from [`http::header`] are declared here as constants.

use crate::rules::{self, Rule};
use http::header::{self, HeaderName};
use std::fmt;

pub const CROSS_ORIGIN_EMBEDDER_POLICY: HeaderName = HeaderName::from_static("cross-origin-embedder-policy");
pub const CROSS_ORIGIN_OPENER_POLICY: HeaderName = HeaderName::from_static("cross-origin-opener-policy");
pub const CROSS_ORIGIN_RESOURCE_POLICY: HeaderName = HeaderName::from_static("cross-origin-resource-policy");
pub const ORIGIN_AGENT_CLUSTER: HeaderName = HeaderName::from_static("origin-agent-cluster");
pub const X_PERMITTED_CROSS_DOMAIN_POLICIES: HeaderName = HeaderName::from_static("x-permitted-cross-domain-policies");
pub const X_DOWNLOAD_OPTIONS: HeaderName = HeaderName::from_static("x-download-options");
pub const X_POWERED_BY: HeaderName = HeaderName::from_static("x-powered-by");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityHeader {
    StrictTransportSecurity,
    ContentSecurityPolicy,
    ReferrerPolicy,
    CrossOriginEmbedderPolicy,
    CrossOriginOpenerPolicy,
    CrossOriginResourcePolicy,
    OriginAgentCluster,
    XPermittedCrossDomainPolicies,
    XFrameOptions,
    XDnsPrefetchControl,
    XDownloadOptions,
    XPoweredBy,
    XXssProtection,
    XContentTypeOptions,
}

impl SecurityHeader {
    /// Every recognized header, in rule application order.
    pub const ALL: [SecurityHeader; 14] = [
        Self::StrictTransportSecurity,
        Self::ContentSecurityPolicy,
        Self::ReferrerPolicy,
        Self::CrossOriginEmbedderPolicy,
        Self::CrossOriginOpenerPolicy,
        Self::CrossOriginResourcePolicy,
        Self::OriginAgentCluster,
        Self::XPermittedCrossDomainPolicies,
        Self::XFrameOptions,
        Self::XDnsPrefetchControl,
        Self::XDownloadOptions,
        Self::XPoweredBy,
        Self::XXssProtection,
        Self::XContentTypeOptions,
    ];

    /// The canonical, case-sensitive header name used in configuration and errors.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrictTransportSecurity => "Strict-Transport-Security",
            Self::ContentSecurityPolicy => "Content-Security-Policy",
            Self::ReferrerPolicy => "Referrer-Policy",
            Self::CrossOriginEmbedderPolicy => "Cross-Origin-Embedder-Policy",
            Self::CrossOriginOpenerPolicy => "Cross-Origin-Opener-Policy",
            Self::CrossOriginResourcePolicy => "Cross-Origin-Resource-Policy",
            Self::OriginAgentCluster => "Origin-Agent-Cluster",
            Self::XPermittedCrossDomainPolicies => "X-Permitted-Cross-Domain-Policies",
            Self::XFrameOptions => "X-Frame-Options",
            Self::XDnsPrefetchControl => "X-DNS-Prefetch-Control",
            Self::XDownloadOptions => "X-Download-Options",
            Self::XPoweredBy => "X-Powered-By",
            Self::XXssProtection => "X-XSS-Protection",
            Self::XContentTypeOptions => "X-Content-Type-Options",
        }
    }

    /// The wire name, which compares case-insensitively.
    pub fn header_name(self) -> HeaderName {
        match self {
            Self::StrictTransportSecurity => header::STRICT_TRANSPORT_SECURITY,
            Self::ContentSecurityPolicy => header::CONTENT_SECURITY_POLICY,
            Self::ReferrerPolicy => header::REFERRER_POLICY,
            Self::CrossOriginEmbedderPolicy => CROSS_ORIGIN_EMBEDDER_POLICY,
            Self::CrossOriginOpenerPolicy => CROSS_ORIGIN_OPENER_POLICY,
            Self::CrossOriginResourcePolicy => CROSS_ORIGIN_RESOURCE_POLICY,
            Self::OriginAgentCluster => ORIGIN_AGENT_CLUSTER,
            Self::XPermittedCrossDomainPolicies => X_PERMITTED_CROSS_DOMAIN_POLICIES,
            Self::XFrameOptions => header::X_FRAME_OPTIONS,
            Self::XDnsPrefetchControl => header::X_DNS_PREFETCH_CONTROL,
            Self::XDownloadOptions => X_DOWNLOAD_OPTIONS,
            Self::XPoweredBy => X_POWERED_BY,
            Self::XXssProtection => header::X_XSS_PROTECTION,
            Self::XContentTypeOptions => header::X_CONTENT_TYPE_OPTIONS,
        }
    }

    /// The rule that validates and writes this header.
    pub fn rule(self) -> Rule {
        match self {
            Self::StrictTransportSecurity => rules::strict_transport_security,
            Self::ContentSecurityPolicy => rules::content_security_policy,
            Self::ReferrerPolicy => rules::referrer_policy,
            Self::CrossOriginEmbedderPolicy => rules::cross_origin_embedder_policy,
            Self::CrossOriginOpenerPolicy => rules::cross_origin_opener_policy,
            Self::CrossOriginResourcePolicy => rules::cross_origin_resource_policy,
            Self::OriginAgentCluster => rules::origin_agent_cluster,
            Self::XPermittedCrossDomainPolicies => rules::x_permitted_cross_domain_policies,
            Self::XFrameOptions => rules::x_frame_options,
            Self::XDnsPrefetchControl => rules::x_dns_prefetch_control,
            Self::XDownloadOptions => rules::x_download_options,
            Self::XPoweredBy => rules::x_powered_by,
            Self::XXssProtection => rules::x_xss_protection,
            Self::XContentTypeOptions => rules::x_content_type_options,
        }
    }
}

impl fmt::Display for SecurityHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! One rule per recognized header.
//!
//! A rule reads the policy value of its header, validates it, and overwrites (or removes)
//! that header in the container. Rules never read the previous value of the header they
//! write, so running a rule twice leaves the same state as running it once.

use crate::container::HeaderContainer;
use crate::error::HeaderOptionError;
use crate::header::SecurityHeader;
use crate::policy::{self, HstsValue, Policy};
use http::HeaderValue;
use tracing::trace;

pub type Rule = fn(&Policy, &mut dyn HeaderContainer) -> Result<(), HeaderOptionError>;

const REFERRER_POLICIES: [&str; 9] = [
    "no-referrer",
    "no-referrer-when-downgrade",
    "same-origin",
    "origin",
    "strict-origin",
    "origin-when-cross-origin",
    "strict-origin-when-cross-origin",
    "unsafe-url",
    "",
];
const CROSS_ORIGIN_EMBEDDER_POLICIES: [&str; 2] = ["require-corp", "credentialless"];
const CROSS_ORIGIN_OPENER_POLICIES: [&str; 3] = ["same-origin", "same-origin-allow-popups", "unsafe-none"];
const CROSS_ORIGIN_RESOURCE_POLICIES: [&str; 3] = ["same-origin", "same-site", "cross-origin"];
const X_PERMITTED_CROSS_DOMAIN_POLICIES: [&str; 4] = ["none", "master-only", "by-content-type", "all"];
const X_FRAME_OPTIONS: [&str; 3] = ["DENY", "SAMEORIGIN", "SAME-ORIGIN"];
const X_DNS_PREFETCH_CONTROLS: [&str; 2] = ["off", "on"];

fn invalid<S: ToString>(option: S, header: SecurityHeader) -> HeaderOptionError {
    HeaderOptionError::invalid_option(option, header.as_str())
}

fn one_of<'a>(option: &'a str, allowed: &[&str], header: SecurityHeader) -> Result<&'a str, HeaderOptionError> {
    if allowed.contains(&option) { Ok(option) } else { Err(invalid(option, header)) }
}

fn write(headers: &mut dyn HeaderContainer, header: SecurityHeader, value: HeaderValue) {
    trace!(header = %header, value = ?value, "apply security header");
    headers.set(header.header_name(), value);
}

/// Writes a computed value, rejecting strings that are not valid header values.
fn write_str(headers: &mut dyn HeaderContainer, header: SecurityHeader, value: &str) -> Result<(), HeaderOptionError> {
    let header_value = HeaderValue::from_str(value).map_err(|_| invalid(value, header))?;
    write(headers, header, header_value);
    Ok(())
}

pub fn strict_transport_security(policy: &Policy, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
    const HEADER: SecurityHeader = SecurityHeader::StrictTransportSecurity;

    let mut directives = Vec::with_capacity(policy.strict_transport_security.len());
    for (name, value) in policy.strict_transport_security.iter() {
        match (name, value) {
            ("maxAge", HstsValue::Integer(max_age)) => directives.push(format!("maxAge={max_age}")),
            ("includeSubDomains" | "preload", HstsValue::Flag(true)) => directives.push(name.to_string()),
            ("includeSubDomains" | "preload", HstsValue::Flag(false)) => {}
            ("maxAge" | "includeSubDomains" | "preload", value) => return Err(invalid(value, HEADER)),
            (name, _) => return Err(invalid(name, HEADER)),
        }
    }

    write_str(headers, HEADER, &directives.join(";"))
}

pub fn content_security_policy(policy: &Policy, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
    let directives: Vec<String> = policy
        .content_security_policy
        .iter()
        .map(|(name, tokens)| match tokens.first() {
            Some(first) if !first.is_empty() => format!("{name} {}", tokens.join(" ")),
            _ => name.to_string(),
        })
        .collect();

    write_str(headers, SecurityHeader::ContentSecurityPolicy, &directives.join(";"))
}

/// Validates the configured referrer policy but always sends `no-referrer`.
///
/// Only a single policy token is supported, and the written value does not follow the
/// configured one.
// TODO: accept a list of referrer policies and send the configured list
// instead of the fixed `no-referrer`.
pub fn referrer_policy(policy: &Policy, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
    one_of(&policy.referrer_policy, &REFERRER_POLICIES, SecurityHeader::ReferrerPolicy)?;
    write(headers, SecurityHeader::ReferrerPolicy, HeaderValue::from_static("no-referrer"));
    Ok(())
}

pub fn cross_origin_embedder_policy(policy: &Policy, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
    const HEADER: SecurityHeader = SecurityHeader::CrossOriginEmbedderPolicy;
    let option = one_of(&policy.cross_origin_embedder_policy, &CROSS_ORIGIN_EMBEDDER_POLICIES, HEADER)?;
    write_str(headers, HEADER, option)
}

pub fn cross_origin_opener_policy(policy: &Policy, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
    const HEADER: SecurityHeader = SecurityHeader::CrossOriginOpenerPolicy;
    let option = one_of(&policy.cross_origin_opener_policy, &CROSS_ORIGIN_OPENER_POLICIES, HEADER)?;
    write_str(headers, HEADER, option)
}

pub fn cross_origin_resource_policy(policy: &Policy, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
    const HEADER: SecurityHeader = SecurityHeader::CrossOriginResourcePolicy;
    let option = one_of(&policy.cross_origin_resource_policy, &CROSS_ORIGIN_RESOURCE_POLICIES, HEADER)?;
    write_str(headers, HEADER, option)
}

pub fn origin_agent_cluster(_policy: &Policy, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
    write(headers, SecurityHeader::OriginAgentCluster, HeaderValue::from_static(policy::ORIGIN_AGENT_CLUSTER));
    Ok(())
}

pub fn x_permitted_cross_domain_policies(
    policy: &Policy,
    headers: &mut dyn HeaderContainer,
) -> Result<(), HeaderOptionError> {
    const HEADER: SecurityHeader = SecurityHeader::XPermittedCrossDomainPolicies;
    let option = one_of(&policy.x_permitted_cross_domain_policies, &X_PERMITTED_CROSS_DOMAIN_POLICIES, HEADER)?;
    write_str(headers, HEADER, option)
}

pub fn x_frame_options(policy: &Policy, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
    const HEADER: SecurityHeader = SecurityHeader::XFrameOptions;
    let option = match one_of(&policy.x_frame_options, &X_FRAME_OPTIONS, HEADER)? {
        "SAME-ORIGIN" => "SAMEORIGIN",
        option => option,
    };
    write_str(headers, HEADER, option)
}

pub fn x_dns_prefetch_control(policy: &Policy, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
    const HEADER: SecurityHeader = SecurityHeader::XDnsPrefetchControl;
    let option = one_of(&policy.x_dns_prefetch_control, &X_DNS_PREFETCH_CONTROLS, HEADER)?;
    write_str(headers, HEADER, option)
}

pub fn x_download_options(_policy: &Policy, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
    write(headers, SecurityHeader::XDownloadOptions, HeaderValue::from_static(policy::X_DOWNLOAD_OPTIONS));
    Ok(())
}

pub fn x_powered_by(_policy: &Policy, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
    trace!(header = %SecurityHeader::XPoweredBy, "remove header");
    headers.delete(&SecurityHeader::XPoweredBy.header_name());
    Ok(())
}

pub fn x_xss_protection(_policy: &Policy, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
    write(headers, SecurityHeader::XXssProtection, HeaderValue::from_static(policy::X_XSS_PROTECTION));
    Ok(())
}

pub fn x_content_type_options(_policy: &Policy, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
    write(headers, SecurityHeader::XContentTypeOptions, HeaderValue::from_static(policy::X_CONTENT_TYPE_OPTIONS));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::CspDirectives;
    use http::HeaderMap;

    fn run(rule: Rule, policy: &Policy) -> Result<HeaderMap, HeaderOptionError> {
        let mut headers = HeaderMap::new();
        rule(policy, &mut headers)?;
        Ok(headers)
    }

    fn value_of(headers: &HeaderMap, header: SecurityHeader) -> &str {
        headers.get(header.header_name()).unwrap().to_str().unwrap()
    }

    #[test]
    fn test_hsts_default() {
        let headers = run(strict_transport_security, &Policy::default()).unwrap();
        assert_eq!(value_of(&headers, SecurityHeader::StrictTransportSecurity), "maxAge=15552000;includeSubDomains");
    }

    #[test]
    fn test_hsts_without_flags() {
        let mut policy = Policy::default();
        policy.strict_transport_security.insert("includeSubDomains", HstsValue::Flag(false));
        policy.strict_transport_security.insert("preload", HstsValue::Flag(false));

        let headers = run(strict_transport_security, &policy).unwrap();
        assert_eq!(value_of(&headers, SecurityHeader::StrictTransportSecurity), "maxAge=15552000");
    }

    #[test]
    fn test_hsts_with_all_flags() {
        let mut policy = Policy::default();
        policy.strict_transport_security.insert("maxAge", HstsValue::Integer(63_072_000));
        policy.strict_transport_security.insert("preload", HstsValue::Flag(true));

        let headers = run(strict_transport_security, &policy).unwrap();
        assert_eq!(
            value_of(&headers, SecurityHeader::StrictTransportSecurity),
            "maxAge=63072000;includeSubDomains;preload"
        );
    }

    #[test]
    fn test_hsts_unknown_directive() {
        let mut policy = Policy::default();
        policy.strict_transport_security.insert("foo", HstsValue::Flag(true));

        let error = run(strict_transport_security, &policy).unwrap_err();
        assert_eq!(error, HeaderOptionError::invalid_option("foo", "Strict-Transport-Security"));
    }

    #[test]
    fn test_hsts_wrong_value_kind() {
        let mut policy = Policy::default();
        policy.strict_transport_security.insert("maxAge", HstsValue::Flag(true));

        let error = run(strict_transport_security, &policy).unwrap_err();
        assert_eq!(error.option(), "true");
        assert_eq!(error.header(), "Strict-Transport-Security");
    }

    #[test]
    fn test_csp_default() {
        let headers = run(content_security_policy, &Policy::default()).unwrap();
        assert_eq!(
            value_of(&headers, SecurityHeader::ContentSecurityPolicy),
            "default-src 'self';base-uri 'self';font-src 'self' https: data:;form-action 'self';\
             frame-ancestors 'self';img-src 'self' data:;object-src 'none';script-src 'self';\
             script-src-attr 'none';style-src 'self' https: 'unsafe-inline';upgrade-insecure-requests"
        );
    }

    #[test]
    fn test_csp_bare_directives() {
        let mut policy = Policy::default();
        policy.content_security_policy = CspDirectives::new()
            .source("upgrade-insecure-requests", Vec::<String>::new())
            .source("block-all-mixed-content", [""])
            .source("script-src", ["'self'", "https://cdn.example.com"]);

        let headers = run(content_security_policy, &policy).unwrap();
        assert_eq!(
            value_of(&headers, SecurityHeader::ContentSecurityPolicy),
            "upgrade-insecure-requests;block-all-mixed-content;script-src 'self' https://cdn.example.com"
        );
    }

    #[test]
    fn test_csp_rejects_control_characters() {
        let mut policy = Policy::default();
        policy.content_security_policy = CspDirectives::new().source("script-src", ["'self'\r\nX-Injected: 1"]);

        let error = run(content_security_policy, &policy).unwrap_err();
        assert_eq!(error.header(), "Content-Security-Policy");
    }

    #[test]
    fn test_referrer_policy_always_sends_no_referrer() {
        let mut policy = Policy::default();
        policy.referrer_policy = "strict-origin-when-cross-origin".into();

        let headers = run(referrer_policy, &policy).unwrap();
        assert_eq!(value_of(&headers, SecurityHeader::ReferrerPolicy), "no-referrer");

        policy.referrer_policy = String::new();
        assert!(run(referrer_policy, &policy).is_ok());

        policy.referrer_policy = "everywhere".into();
        assert_eq!(run(referrer_policy, &policy).unwrap_err().header(), "Referrer-Policy");
    }

    #[test]
    fn test_x_frame_options_normalizes_same_origin() {
        let mut policy = Policy::default();
        policy.x_frame_options = "SAME-ORIGIN".into();

        let headers = run(x_frame_options, &policy).unwrap();
        assert_eq!(value_of(&headers, SecurityHeader::XFrameOptions), "SAMEORIGIN");
    }

    #[test]
    fn test_x_frame_options_rejects_unknown() {
        let mut policy = Policy::default();
        policy.x_frame_options = "BOGUS".into();

        let error = run(x_frame_options, &policy).unwrap_err();
        assert_eq!(error, HeaderOptionError::invalid_option("BOGUS", "X-Frame-Options"));
    }

    #[test]
    fn test_enumerated_headers_pass_configured_value() {
        let mut policy = Policy::default();
        policy.cross_origin_embedder_policy = "credentialless".into();
        policy.cross_origin_opener_policy = "same-origin-allow-popups".into();
        policy.cross_origin_resource_policy = "cross-origin".into();
        policy.x_permitted_cross_domain_policies = "by-content-type".into();
        policy.x_dns_prefetch_control = "on".into();

        let cases: [(Rule, SecurityHeader, &str); 5] = [
            (cross_origin_embedder_policy, SecurityHeader::CrossOriginEmbedderPolicy, "credentialless"),
            (cross_origin_opener_policy, SecurityHeader::CrossOriginOpenerPolicy, "same-origin-allow-popups"),
            (cross_origin_resource_policy, SecurityHeader::CrossOriginResourcePolicy, "cross-origin"),
            (x_permitted_cross_domain_policies, SecurityHeader::XPermittedCrossDomainPolicies, "by-content-type"),
            (x_dns_prefetch_control, SecurityHeader::XDnsPrefetchControl, "on"),
        ];

        for (rule, header, expected) in cases {
            let headers = run(rule, &policy).unwrap();
            assert_eq!(value_of(&headers, header), expected);
        }
    }

    #[test]
    fn test_enumerated_headers_reject_unknown() {
        let mut policy = Policy::default();
        policy.cross_origin_embedder_policy = "unsafe-none".into();
        policy.cross_origin_opener_policy = "same-site".into();
        policy.cross_origin_resource_policy = "same-origin-allow-popups".into();
        policy.x_permitted_cross_domain_policies = "None".into();
        policy.x_dns_prefetch_control = "yes".into();

        let cases: [(Rule, &str, &str); 5] = [
            (cross_origin_embedder_policy, "unsafe-none", "Cross-Origin-Embedder-Policy"),
            (cross_origin_opener_policy, "same-site", "Cross-Origin-Opener-Policy"),
            (cross_origin_resource_policy, "same-origin-allow-popups", "Cross-Origin-Resource-Policy"),
            (x_permitted_cross_domain_policies, "None", "X-Permitted-Cross-Domain-Policies"),
            (x_dns_prefetch_control, "yes", "X-DNS-Prefetch-Control"),
        ];

        for (rule, option, header) in cases {
            assert_eq!(run(rule, &policy).unwrap_err(), HeaderOptionError::invalid_option(option, header));
        }
    }

    #[test]
    fn test_fixed_headers() {
        let policy = Policy::default();
        let cases: [(Rule, SecurityHeader, &str); 4] = [
            (origin_agent_cluster, SecurityHeader::OriginAgentCluster, "?1"),
            (x_download_options, SecurityHeader::XDownloadOptions, "noopen"),
            (x_xss_protection, SecurityHeader::XXssProtection, "1"),
            (x_content_type_options, SecurityHeader::XContentTypeOptions, "nosniff"),
        ];

        for (rule, header, expected) in cases {
            let headers = run(rule, &policy).unwrap();
            assert_eq!(value_of(&headers, header), expected);
        }
    }

    #[test]
    fn test_x_powered_by_removed_in_any_case() {
        for name in ["X-Powered-By", "x-powered-by", "X-POWERED-BY"] {
            let mut headers = HeaderMap::new();
            headers.insert(http::HeaderName::from_bytes(name.as_bytes()).unwrap(), HeaderValue::from_static("FastAPI"));

            x_powered_by(&Policy::default(), &mut headers).unwrap();
            assert!(headers.is_empty(), "{name}");
        }
    }

    #[test]
    fn test_rule_overwrites_previous_value() {
        let mut headers = HeaderMap::new();
        headers.append(SecurityHeader::XFrameOptions.header_name(), HeaderValue::from_static("SAMEORIGIN"));
        headers.append(SecurityHeader::XFrameOptions.header_name(), HeaderValue::from_static("ALLOW-FROM x"));

        x_frame_options(&Policy::default(), &mut headers).unwrap();

        let values: Vec<&HeaderValue> = headers.get_all(SecurityHeader::XFrameOptions.header_name()).iter().collect();
        assert_eq!(values, vec![&HeaderValue::from_static("DENY")]);
    }
}

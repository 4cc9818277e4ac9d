//! Composite application of the header rules.
//!
//! [`apply`] runs every rule in [`SecurityHeader::ALL`] order and stops at the first
//! error. The headers written by the rules before the failing one stay in the container;
//! the call is not atomic.
//!
//! [`ApplyHeaders`] is the seam an embedder uses to replace the default rule set: any
//! `Fn(&mut dyn HeaderContainer) -> Result<(), HeaderOptionError>` closure implements it,
//! and so does [`SecureHeaders`], the default applicator owning its [`Policy`].

use crate::container::HeaderContainer;
use crate::error::HeaderOptionError;
use crate::header::SecurityHeader;
use crate::policy::Policy;
use tracing::debug;

/// Runs all recognized header rules against `headers`.
pub fn apply(policy: &Policy, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
    apply_rules(policy, &SecurityHeader::ALL, headers)
}

fn apply_rules(
    policy: &Policy,
    rules: &[SecurityHeader],
    headers: &mut dyn HeaderContainer,
) -> Result<(), HeaderOptionError> {
    for header in rules {
        header.rule()(policy, headers)?;
    }
    debug!(rules = rules.len(), "security headers applied");
    Ok(())
}

pub trait ApplyHeaders: Send + Sync {
    fn apply_headers(&self, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError>;
}

impl<F> ApplyHeaders for F
where
    F: Fn(&mut dyn HeaderContainer) -> Result<(), HeaderOptionError> + Send + Sync,
{
    fn apply_headers(&self, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
        (self)(headers)
    }
}

/// The default applicator: a policy plus the rules to run, in table order.
#[derive(Debug, Clone)]
pub struct SecureHeaders {
    policy: Policy,
    rules: Vec<SecurityHeader>,
}

impl SecureHeaders {
    pub fn new(policy: Policy) -> Self {
        Self { policy, rules: SecurityHeader::ALL.to_vec() }
    }

    pub fn builder() -> SecureHeadersBuilder {
        SecureHeadersBuilder::new()
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn rules(&self) -> &[SecurityHeader] {
        &self.rules
    }
}

impl Default for SecureHeaders {
    fn default() -> Self {
        Self::new(Policy::default())
    }
}

impl ApplyHeaders for SecureHeaders {
    fn apply_headers(&self, headers: &mut dyn HeaderContainer) -> Result<(), HeaderOptionError> {
        apply_rules(&self.policy, &self.rules, headers)
    }
}

#[derive(Debug)]
pub struct SecureHeadersBuilder {
    policy: Policy,
    disabled: Vec<SecurityHeader>,
}

impl SecureHeadersBuilder {
    fn new() -> Self {
        Self { policy: Policy::default(), disabled: vec![] }
    }

    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Skips the rule of `header`: the header is neither validated nor touched.
    pub fn disable(mut self, header: SecurityHeader) -> Self {
        self.disabled.push(header);
        self
    }

    pub fn build(self) -> SecureHeaders {
        let rules = SecurityHeader::ALL.into_iter().filter(|header| !self.disabled.contains(header)).collect();
        SecureHeaders { policy: self.policy, rules }
    }
}

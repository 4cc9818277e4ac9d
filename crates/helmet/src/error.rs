use thiserror::Error;

/// Raised when a configured policy value falls outside the domain its header accepts.
///
/// The error is terminal for the response being processed: rules that already ran have
/// written their headers, rules after the failing one never run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderOptionError {
    #[error("Unknown option {option} for {header} header")]
    InvalidOptionValue { option: String, header: &'static str },
}

impl HeaderOptionError {
    pub fn invalid_option<S: ToString>(option: S, header: &'static str) -> Self {
        Self::InvalidOptionValue { option: option.to_string(), header }
    }

    /// the offending option value
    pub fn option(&self) -> &str {
        match self {
            Self::InvalidOptionValue { option, .. } => option,
        }
    }

    /// the canonical name of the header the option was rejected for
    pub fn header(&self) -> &'static str {
        match self {
            Self::InvalidOptionValue { header, .. } => header,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HeaderOptionError;

    #[test]
    fn test_display() {
        let error = HeaderOptionError::invalid_option("BOGUS", "X-Frame-Options");
        assert_eq!(error.to_string(), "Unknown option BOGUS for X-Frame-Options header");
        assert_eq!(error.option(), "BOGUS");
        assert_eq!(error.header(), "X-Frame-Options");
    }

    #[test]
    fn test_empty_option() {
        let error = HeaderOptionError::invalid_option("", "Referrer-Policy");
        assert_eq!(error.to_string(), "Unknown option  for Referrer-Policy header");
    }
}

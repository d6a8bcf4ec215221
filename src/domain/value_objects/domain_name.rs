use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(String);

#[derive(Debug, thiserror::Error)]
pub enum DomainNameError {
    #[error("Domain name must not be empty")]
    Empty,

    #[error("Domain name contains invalid characters: {0}")]
    InvalidCharacters(String),
}

impl DomainName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainNameError> {
        let name = name.into();

        if name.is_empty() {
            return Err(DomainNameError::Empty);
        }

        // Validate characters (alphanumeric, hyphens, dots for subdomains)
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        {
            return Err(DomainNameError::InvalidCharacters(name));
        }

        // Cannot start or end with hyphen or dot
        if name.starts_with('-')
            || name.starts_with('.')
            || name.ends_with('-')
            || name.ends_with('.')
        {
            return Err(DomainNameError::InvalidCharacters(name));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_domain_names() {
        assert!(DomainName::new("app.test").is_ok());
        assert!(DomainName::new("my-app.test").is_ok());
        assert!(DomainName::new("sub.domain.test").is_ok());
        assert!(DomainName::new("localhost").is_ok());
    }

    #[test]
    fn test_invalid_domain_names() {
        assert!(DomainName::new("").is_err());
        assert!(DomainName::new("app name.test").is_err()); // Space
        assert!(DomainName::new("app_name.test").is_err()); // Underscore
        assert!(DomainName::new("-app.test").is_err()); // Starts with hyphen
        assert!(DomainName::new("app.test.").is_err()); // Ends with dot
    }
}

//! Responder mode: whether the external text-generation path is enabled.
//!
//! The mode is resolved once when the application is wired together and
//! never changes afterwards. [`ResponderMode::Unconfigured`] is a normal
//! operating state (knowledge base only), not an error.

/// Bearer token for the external text-generation service.
///
/// `Debug` output is redacted so the token never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token. Blank tokens count as absent.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw token, for building the authorization header
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Whether answers may come from the external service
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResponderMode {
    /// External service is called with this credential
    Configured { credential: Credential },
    /// Knowledge base only
    #[default]
    Unconfigured,
}

impl ResponderMode {
    /// Build the mode from an optional token; missing or blank means unconfigured.
    pub fn from_token(token: Option<String>) -> Self {
        match token.and_then(Credential::new) {
            Some(credential) => ResponderMode::Configured { credential },
            None => ResponderMode::Unconfigured,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, ResponderMode::Configured { .. })
    }

    pub fn credential(&self) -> Option<&Credential> {
        match self {
            ResponderMode::Configured { credential } => Some(credential),
            ResponderMode::Unconfigured => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert!(ResponderMode::from_token(Some("hf_abc".to_string())).is_configured());
        assert_eq!(ResponderMode::from_token(None), ResponderMode::Unconfigured);
        assert_eq!(
            ResponderMode::from_token(Some("   ".to_string())),
            ResponderMode::Unconfigured
        );
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("hf_secret").unwrap();
        assert_eq!(format!("{:?}", credential), "Credential(***)");
        assert_eq!(credential.expose(), "hf_secret");
    }
}

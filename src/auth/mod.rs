//! Optional HTTP Basic authentication gate.
//!
//! When the deployment configures both credential values, every request must
//! present them; otherwise the server runs unauthenticated (local use).

mod middleware;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

pub use middleware::RequireBasicAuth;

use crate::config::BasicAuthConfig;

/// Credential pair for the Basic-auth gate.
/// Uses `SecretString` to prevent accidental logging and zeroize on drop;
/// comparison is constant-time over both fields.
#[derive(Clone)]
pub struct BasicAuthGate {
    credentials: Option<(SecretString, SecretString)>,
}

impl BasicAuthGate {
    /// Build the gate from optional configuration. `None` disables it.
    pub fn new(config: Option<BasicAuthConfig>) -> Self {
        Self {
            credentials: config
                .map(|c| (SecretString::from(c.username), SecretString::from(c.password))),
        }
    }

    /// Whether any credentials are configured at all.
    pub fn is_enabled(&self) -> bool {
        self.credentials.is_some()
    }

    /// Securely compare a provided username/password pair.
    ///
    /// `ConstantTimeEq` compares both buffers in full regardless of where
    /// they first differ, and the two field checks are combined without
    /// short-circuiting.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        match &self.credentials {
            Some((expected_user, expected_pass)) => {
                let user_ok = expected_user
                    .expose_secret()
                    .as_bytes()
                    .ct_eq(username.as_bytes());
                let pass_ok = expected_pass
                    .expose_secret()
                    .as_bytes()
                    .ct_eq(password.as_bytes());
                (user_ok & pass_ok).into()
            }
            None => false,
        }
    }

    /// Check an `Authorization: Basic ...` header value against the gate.
    /// Returns false on any malformed header.
    pub fn verify_header(&self, header_value: &str) -> bool {
        let encoded = match header_value.strip_prefix("Basic ") {
            Some(rest) => rest.trim(),
            None => return false,
        };
        let decoded = match BASE64.decode(encoded) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };
        let decoded = match String::from_utf8(decoded) {
            Ok(s) => s,
            Err(_) => return false,
        };
        match decoded.split_once(':') {
            Some((username, password)) => self.verify(username, password),
            None => false,
        }
    }
}

impl std::fmt::Debug for BasicAuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.credentials {
            Some(_) => write!(f, "BasicAuthGate([REDACTED])"),
            None => write!(f, "BasicAuthGate(disabled)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> BasicAuthGate {
        BasicAuthGate::new(Some(BasicAuthConfig {
            username: "owner".to_string(),
            password: "hunter2".to_string(),
        }))
    }

    #[test]
    fn test_verify_accepts_matching_pair() {
        assert!(gate().verify("owner", "hunter2"));
    }

    #[test]
    fn test_verify_rejects_wrong_values() {
        let g = gate();
        assert!(!g.verify("owner", "wrong"));
        assert!(!g.verify("intruder", "hunter2"));
        assert!(!g.verify("", ""));
    }

    #[test]
    fn test_disabled_gate_verifies_nothing() {
        let g = BasicAuthGate::new(None);
        assert!(!g.is_enabled());
        assert!(!g.verify("owner", "hunter2"));
    }

    #[test]
    fn test_verify_header() {
        let g = gate();
        // base64("owner:hunter2")
        assert!(g.verify_header("Basic b3duZXI6aHVudGVyMg=="));
        assert!(!g.verify_header("Basic bm9wZTpub3Bl"));
        assert!(!g.verify_header("Bearer sometoken"));
        assert!(!g.verify_header("Basic not-base64!!"));
    }
}

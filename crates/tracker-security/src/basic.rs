//! HTTP Basic credential parsing (RFC 7617)

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BasicAuthError {
    #[error("Missing Basic scheme")]
    MissingScheme,

    #[error("Invalid base64 payload")]
    InvalidBase64,

    #[error("Malformed credentials")]
    Malformed,
}

#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Parse an `Authorization` header value of the form `Basic base64(user:pass)`.
pub fn parse_basic_header(value: &str) -> Result<BasicCredentials, BasicAuthError> {
    let encoded = value
        .strip_prefix("Basic ")
        .or_else(|| value.strip_prefix("basic "))
        .ok_or(BasicAuthError::MissingScheme)?;

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| BasicAuthError::InvalidBase64)?;
    let decoded = String::from_utf8(decoded).map_err(|_| BasicAuthError::Malformed)?;

    // Password may itself contain ':', split on the first only.
    let (username, password) = decoded.split_once(':').ok_or(BasicAuthError::Malformed)?;

    Ok(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(raw: &str) -> String {
        format!("Basic {}", STANDARD.encode(raw))
    }

    #[test]
    fn parses_valid_header() {
        let creds = parse_basic_header(&encode("admin:password123")).unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, "password123");
    }

    #[test]
    fn password_may_contain_colons() {
        let creds = parse_basic_header(&encode("client:a:b:c")).unwrap();
        assert_eq!(creds.username, "client");
        assert_eq!(creds.password, "a:b:c");
    }

    #[test]
    fn rejects_other_schemes() {
        let err = parse_basic_header("Bearer abc123").unwrap_err();
        assert!(matches!(err, BasicAuthError::MissingScheme));
    }

    #[test]
    fn rejects_bad_base64_and_missing_separator() {
        assert!(matches!(
            parse_basic_header("Basic !!!").unwrap_err(),
            BasicAuthError::InvalidBase64
        ));
        let no_colon = format!("Basic {}", STANDARD.encode("adminonly"));
        assert!(matches!(
            parse_basic_header(&no_colon).unwrap_err(),
            BasicAuthError::Malformed
        ));
    }
}

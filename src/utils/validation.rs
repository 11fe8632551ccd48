use crate::utils::error::{IntakeError, Result};
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_bind_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| IntakeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(IntakeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(IntakeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(IntakeError::InvalidConfigValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Must be one of: {}", allowed.join(", ")),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(IntakeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bind_addr() {
        assert!(validate_bind_addr("server.bind_addr", "127.0.0.1:8000").is_ok());
        assert!(validate_bind_addr("server.bind_addr", "0.0.0.0:0").is_ok());
        assert!(validate_bind_addr("server.bind_addr", "localhost").is_err());
        assert!(validate_bind_addr("server.bind_addr", "").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("store.path", "./polls").is_ok());
        assert!(validate_path("store.path", "").is_err());
        assert!(validate_path("store.path", "a\0b").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("server.static_dir", "static").is_ok());
        assert!(validate_non_empty_string("server.static_dir", "").is_err());
        assert!(validate_non_empty_string("server.static_dir", "   ").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("store.kind", "file", &["file", "memory"]).is_ok());
        assert!(validate_one_of("store.kind", "mongo", &["file", "memory"]).is_err());
    }
}

use std::io;

pub trait WriteEnv {
    /// Fails with [`io::ErrorKind::InvalidInput`] when `key` is not a name
    /// the platform can store (see [`validate_name`]) or `value` contains
    /// NUL (see [`validate_value`]).
    fn set_var(&self, key: &str, value: &str) -> io::Result<()>;
}

/// Rejects names that `std::env::set_var` would panic on: empty names and
/// names containing `=` or NUL.
pub fn validate_name(key: &str) -> io::Result<()> {
    if key.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "environment variable name is empty",
        ));
    }
    if key.contains(['=', '\0']) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("environment variable name {key:?} contains '=' or NUL"),
        ));
    }
    Ok(())
}

/// Rejects values the platform cannot store: anything containing NUL.
pub fn validate_value(key: &str, value: &str) -> io::Result<()> {
    if value.contains('\0') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("value for environment variable {key:?} contains NUL"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_accepts_plain_names() {
        assert!(validate_name("PATH").is_ok());
        assert!(validate_name("MY_APP_PORT").is_ok());
    }

    #[test]
    fn test_validate_name_rejects_empty() {
        let err = validate_name("").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_validate_name_rejects_equals_and_nul() {
        assert!(validate_name("A=B").is_err());
        assert!(validate_name("A\0B").is_err());
    }

    #[test]
    fn test_validate_value_rejects_nul() {
        assert!(validate_value("KEY", "").is_ok());
        assert!(validate_value("KEY", "plain = text").is_ok());
        let err = validate_value("KEY", "a\0b").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}

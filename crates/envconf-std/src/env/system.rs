use std::env;
use std::io;

use super::{ListEnv, ReadEnv, RemoveEnv, WriteEnv, validate_name, validate_value};

/// Zero-sized type — delegates to `std::env`.
///
/// # Safety of writes
///
/// [`WriteEnv`] and [`RemoveEnv`] mutate the process environment, which
/// is only sound while no other thread reads or writes it. Do all writes
/// during single-threaded startup, before spawning workers or a runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }

    #[inline]
    fn contains_var(&self, key: &str) -> bool {
        env::var_os(key).is_some()
    }
}

impl WriteEnv for SystemEnv {
    fn set_var(&self, key: &str, value: &str) -> io::Result<()> {
        validate_name(key)?;
        validate_value(key, value)?;
        // SAFETY: the caller upholds the single-threaded write contract
        // documented on `SystemEnv`.
        unsafe { env::set_var(key, value) };
        Ok(())
    }
}

impl RemoveEnv for SystemEnv {
    fn remove_var(&self, key: &str) -> io::Result<()> {
        validate_name(key)?;
        // SAFETY: see `set_var`.
        unsafe { env::remove_var(key) };
        Ok(())
    }
}

impl ListEnv for SystemEnv {
    fn vars(&self) -> Vec<(String, String)> {
        env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

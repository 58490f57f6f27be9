#[cfg(any(test, feature = "test-support"))]
use std::cell::RefCell;
#[cfg(any(test, feature = "test-support"))]
use std::collections::BTreeMap;
#[cfg(any(test, feature = "test-support"))]
use std::{env, io};

#[cfg(any(test, feature = "test-support"))]
use super::{ListEnv, ReadEnv, RemoveEnv, WriteEnv, validate_name, validate_value};

/// Won't touch the global process environment.
///
/// Uses `RefCell` for interior mutability — all methods take `&self`,
/// so it can stand in for [`SystemEnv`](super::SystemEnv) anywhere.
/// Names and values are validated like the real environment so tests see the same
/// failures production would.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug)]
pub struct InMemoryEnv {
    vars: RefCell<BTreeMap<String, String>>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryEnv {
    pub fn new() -> Self {
        Self {
            vars: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.borrow().contains_key(key)
    }

    pub fn clear(&self) {
        self.vars.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.vars.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.borrow().is_empty()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Default for InMemoryEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        self.vars
            .borrow()
            .get(key)
            .cloned()
            .ok_or(env::VarError::NotPresent)
    }
}

#[cfg(any(test, feature = "test-support"))]
impl WriteEnv for InMemoryEnv {
    fn set_var(&self, key: &str, value: &str) -> io::Result<()> {
        validate_name(key)?;
        validate_value(key, value)?;
        self.set(key, value);
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
impl RemoveEnv for InMemoryEnv {
    fn remove_var(&self, key: &str) -> io::Result<()> {
        validate_name(key)?;
        self.remove(key);
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ListEnv for InMemoryEnv {
    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_env_set_and_get() {
        let env = InMemoryEnv::new();
        env.set("TEST_VAR", "test_value");

        assert_eq!(env.var("TEST_VAR").unwrap(), "test_value");
    }

    #[test]
    fn test_in_memory_env_not_present() {
        let env = InMemoryEnv::new();

        assert!(matches!(
            env.var("NONEXISTENT"),
            Err(std::env::VarError::NotPresent)
        ));
        assert!(!env.contains_var("NONEXISTENT"));
    }

    #[test]
    fn test_in_memory_env_empty_value_is_present() {
        let env = InMemoryEnv::new();
        env.set_var("EMPTY", "").unwrap();

        assert!(env.contains_var("EMPTY"));
        assert_eq!(env.var("EMPTY").unwrap(), "");
    }

    #[test]
    fn test_in_memory_env_remove_var() {
        let env = InMemoryEnv::new();
        env.set("TEST_VAR", "test_value");
        env.remove_var("TEST_VAR").unwrap();

        assert!(matches!(
            env.var("TEST_VAR"),
            Err(std::env::VarError::NotPresent)
        ));
        env.remove_var("TEST_VAR").unwrap();
    }

    #[test]
    fn test_in_memory_env_rejects_invalid_names() {
        let env = InMemoryEnv::new();

        assert!(env.set_var("", "value").is_err());
        assert!(env.set_var("A=B", "value").is_err());
        assert!(env.set_var("K", "a\0b").is_err());
        assert!(env.remove_var("").is_err());
        assert!(env.is_empty());
    }

    #[test]
    fn test_in_memory_env_contains() {
        let env = InMemoryEnv::new();
        env.set("TEST_VAR", "test_value");

        assert!(env.contains("TEST_VAR"));
        assert!(!env.contains("NONEXISTENT"));
    }

    #[test]
    fn test_in_memory_env_clear() {
        let env = InMemoryEnv::new();
        env.set("TEST_VAR_1", "value1");
        env.set("TEST_VAR_2", "value2");
        env.clear();

        assert!(!env.contains("TEST_VAR_1"));
        assert!(!env.contains("TEST_VAR_2"));
        assert_eq!(env.len(), 0);
    }

    #[test]
    fn test_in_memory_env_overwrite() {
        let env = InMemoryEnv::new();
        env.set_var("KEY", "v1").unwrap();
        assert_eq!(env.var("KEY").unwrap(), "v1");

        env.set_var("KEY", "v2").unwrap();
        assert_eq!(env.var("KEY").unwrap(), "v2");
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_in_memory_env_vars_sorted_by_name() {
        let env = InMemoryEnv::new();
        env.set("B", "2");
        env.set("A", "1");

        assert_eq!(
            env.vars(),
            vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_generic_function_with_in_memory_env() {
        fn get_value_or_default<E: ReadEnv>(env: &E, key: &str, default: &str) -> String {
            env.var(key).unwrap_or_else(|_| default.to_string())
        }

        let mem_env = InMemoryEnv::new();
        mem_env.set("MY_VAR", "custom_value");
        assert_eq!(
            get_value_or_default(&mem_env, "MY_VAR", "default"),
            "custom_value"
        );
        assert_eq!(
            get_value_or_default(&mem_env, "MISSING", "default"),
            "default"
        );
    }
}

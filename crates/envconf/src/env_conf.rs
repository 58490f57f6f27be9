use std::collections::BTreeMap;
use std::env::VarError;

use envconf_std::env::{ListEnv, ReadEnv, RemoveEnv, SystemEnv, WriteEnv};
use tracing::{debug, warn};

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::key;
use crate::value::EnvValue;

/// Typed, prefix-aware view over an environment provider.
///
/// Every `key` argument is normalized (see [`normalize`](crate::normalize))
/// and prefixed before it reaches the provider, so `conf.get_string("port")`
/// with prefix `"my app"` reads `MY_APP_PORT`.
///
/// Lookups come in two flavours:
///
/// - `get_*` returns `None` when the variable is absent or cannot be
///   parsed, logging the parse error. Boolean lookups treat an absent
///   variable as `Some(false)`.
/// - `must_get_*` returns an [`Error`] naming the normalized key instead.
///   `must_get_bool` also treats an absent variable as `false`.
#[derive(Debug)]
pub struct EnvConf<E = SystemEnv> {
    env: E,
    prefix: String,
}

impl EnvConf<SystemEnv> {
    /// Backed by the real process environment.
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl Default for EnvConf<SystemEnv> {
    fn default() -> Self {
        Self::system()
    }
}

impl<E> EnvConf<E> {
    pub fn new(env: E) -> Self {
        Self {
            env,
            prefix: String::new(),
        }
    }

    pub fn with_prefix(mut self, raw: &str) -> Self {
        self.set_prefix(raw);
        self
    }

    /// The active prefix, already normalized and ending in `_` (or empty).
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `" FOO  BAR  "` becomes `"FOO_BAR_"`; a blank prefix clears it.
    pub fn set_prefix(&mut self, raw: &str) {
        self.prefix = key::normalize_prefix(raw);
    }

    /// The name `raw` resolves to in the environment.
    pub fn key(&self, raw: &str) -> String {
        key::prefixed(&self.prefix, raw)
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Gives back the provider, dropping the prefix.
    pub fn into_inner(self) -> E {
        self.env
    }
}

impl<E: ReadEnv> EnvConf<E> {
    /// `true` even when the value is empty.
    pub fn is_set(&self, key: &str) -> bool {
        self.env.contains_var(&self.key(key))
    }

    pub fn get<T: EnvValue>(&self, key: &str) -> Option<T> {
        let key = self.key(key);
        let raw = match self.env.var(&key) {
            Ok(raw) => raw,
            Err(VarError::NotPresent) => return T::ABSENT,
            Err(VarError::NotUnicode(_)) => {
                warn!(key = %key, "ignoring environment variable that is not valid unicode");
                return None;
            }
        };

        match T::parse_env(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                if T::LOG_PARSE_FAILURE {
                    warn!(
                        key = %key,
                        kind = T::KIND,
                        error = %e,
                        "ignoring unparseable environment variable"
                    );
                }
                None
            }
        }
    }

    pub fn must_get<T: EnvValue>(&self, key: &str) -> Result<T> {
        let key = self.key(key);
        let raw = match self.env.var(&key) {
            Ok(raw) => raw,
            Err(VarError::NotPresent) => return T::ABSENT.ok_or(Error::NotFound { key }),
            Err(VarError::NotUnicode(_)) => return Err(Error::NotUnicode { key }),
        };

        T::parse_env(&raw).map_err(|source| Error::Parse {
            key,
            kind: T::KIND,
            source,
        })
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    pub fn must_get_string(&self, key: &str) -> Result<String> {
        self.must_get(key)
    }
}

impl<E: WriteEnv> EnvConf<E> {
    pub fn set<T: EnvValue>(&self, key: &str, value: &T) {
        self.write(key, &value.to_env());
    }

    /// Stores `value` verbatim.
    pub fn set_string(&self, key: &str, value: &str) {
        self.write(key, value);
    }

    fn write(&self, key: &str, value: &str) {
        let key = self.key(key);
        if key.is_empty() {
            return;
        }
        match self.env.set_var(&key, value) {
            Ok(()) => debug!(key = %key, "environment variable set"),
            Err(e) => warn!(key = %key, error = %e, "failed to set environment variable"),
        }
    }
}

impl<E: ReadEnv + WriteEnv> EnvConf<E> {
    /// Writes only when `key` is not set yet, even to an empty value.
    pub fn set_default<T: EnvValue>(&self, key: &str, value: &T) {
        if !self.is_set(key) {
            self.set(key, value);
        }
    }

    pub fn set_default_string(&self, key: &str, value: &str) {
        if !self.is_set(key) {
            self.set_string(key, value);
        }
    }
}

impl<E: RemoveEnv> EnvConf<E> {
    /// Removing an absent variable is a no-op. So is a key that
    /// normalizes to nothing, since no such variable can exist.
    pub fn unset(&self, key: &str) {
        let key = self.key(key);
        if key.is_empty() {
            return;
        }
        if let Err(e) = self.env.remove_var(&key) {
            warn!(key = %key, error = %e, "failed to unset environment variable");
        }
    }
}

impl<E: ListEnv> EnvConf<E> {
    /// Variables under the active prefix, keyed by name with the prefix
    /// stripped. Without a prefix this is the whole environment.
    pub fn prefixed_vars(&self) -> BTreeMap<String, String> {
        self.env
            .vars()
            .into_iter()
            .filter_map(|(name, value)| {
                let short = name.strip_prefix(self.prefix.as_str())?;
                (!short.is_empty()).then(|| (short.to_string(), value))
            })
            .collect()
    }
}

macro_rules! typed_accessors {
    ($ty:ty, $get:ident, $must_get:ident, $set:ident, $set_default:ident) => {
        impl<E: ReadEnv> EnvConf<E> {
            #[doc = concat!("Reads `key` as `", stringify!($ty), "`; see [`EnvConf::get`].")]
            pub fn $get(&self, key: &str) -> Option<$ty> {
                self.get(key)
            }

            #[doc = concat!("Reads `key` as `", stringify!($ty), "`; see [`EnvConf::must_get`].")]
            pub fn $must_get(&self, key: &str) -> Result<$ty> {
                self.must_get(key)
            }
        }

        impl<E: WriteEnv> EnvConf<E> {
            pub fn $set(&self, key: &str, value: $ty) {
                self.set(key, &value);
            }
        }

        impl<E: ReadEnv + WriteEnv> EnvConf<E> {
            pub fn $set_default(&self, key: &str, value: $ty) {
                self.set_default(key, &value);
            }
        }
    };
}

typed_accessors!(bool, get_bool, must_get_bool, set_bool, set_default_bool);
typed_accessors!(
    Duration,
    get_duration,
    must_get_duration,
    set_duration,
    set_default_duration
);
typed_accessors!(f64, get_float64, must_get_float64, set_float64, set_default_float64);
typed_accessors!(i32, get_int, must_get_int, set_int, set_default_int);
typed_accessors!(i64, get_int64, must_get_int64, set_int64, set_default_int64);
typed_accessors!(u32, get_uint, must_get_uint, set_uint, set_default_uint);
typed_accessors!(u64, get_uint64, must_get_uint64, set_uint64, set_default_uint64);
